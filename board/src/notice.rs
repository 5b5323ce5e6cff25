//! Single-slot status banner.
//!
//! DESIGN
//! ======
//! There is exactly one banner. Every `show` replaces the current content and
//! hands back a ticket; the auto-hide timer started for that ticket only takes
//! effect while the ticket is still current, so a slow timer from an earlier
//! action never hides a newer message.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Visual style of the banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// CSS class applied to the `#message` element.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Banner content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Identifies one `show` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoticeTicket(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notifier {
    current: Option<Notice>,
    visible: bool,
    generation: u64,
}

impl Notifier {
    /// Replace the banner and make it visible.
    pub fn show(&mut self, kind: NoticeKind, text: impl Into<String>) -> NoticeTicket {
        self.generation += 1;
        self.current = Some(Notice { kind, text: text.into() });
        self.visible = true;
        NoticeTicket(self.generation)
    }

    /// Hide the banner if `ticket` is still the latest. Returns whether it hid.
    pub fn expire(&mut self, ticket: NoticeTicket) -> bool {
        if ticket.0 != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    /// The banner content if it is currently shown.
    #[must_use]
    pub fn visible(&self) -> Option<&Notice> {
        if self.visible { self.current.as_ref() } else { None }
    }

    /// Last banner content, shown or not. The element keeps its text when hidden.
    #[must_use]
    pub fn last(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}
