//! Blocking yes/no dialog via `window.confirm`.
//!
//! Outside the browser there is nobody to ask, so the answer is always no.

/// Show `prompt` and return whether the user accepted.
pub fn ask(prompt: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = prompt;
        false
    }
}
