//! REST paths for the activities backend.
//!
//! Every path returned here is relative (starts with `/`); transports prepend
//! their own base URL. Activity names and emails are percent-encoded with the
//! same unreserved set browsers use for `encodeURIComponent`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// HTTP method of an API call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// A request ready to hand to a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
}

/// `GET /activities`
#[must_use]
pub fn list() -> ApiRequest {
    ApiRequest { method: Method::Get, path: "/activities".to_owned() }
}

/// `POST /activities/{name}/signup?email={email}`
#[must_use]
pub fn signup(activity: &str, email: &str) -> ApiRequest {
    ApiRequest {
        method: Method::Post,
        path: format!("/activities/{}/signup?email={}", encode_component(activity), encode_component(email)),
    }
}

/// `DELETE /activities/{name}/participants?email={email}`
#[must_use]
pub fn unregister(activity: &str, email: &str) -> ApiRequest {
    ApiRequest {
        method: Method::Delete,
        path: format!(
            "/activities/{}/participants?email={}",
            encode_component(activity),
            encode_component(email)
        ),
    }
}

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encode a path segment or query value.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if is_unreserved(byte) {
            out.push(char::from(byte));
        } else {
            out.push('%');
            out.push(char::from(HEX[usize::from(byte >> 4)]));
            out.push(char::from(HEX[usize::from(byte & 0x0F)]));
        }
    }
    out
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}
