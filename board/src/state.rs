//! Board state machine and render-ready views.
//!
//! DESIGN
//! ======
//! `BoardState` is the single mutable model behind the page: load phase, last
//! catalog, signup draft, banner, card highlight. Renderers read it through
//! [`BoardState::listing`] and [`BoardState::select_options`] and never touch
//! the catalog directly, so every front end shows the same thing.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::model::Catalog;
use crate::notice::{NoticeTicket, Notifier};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load activities. Please try again later.";
pub const LOADING_MESSAGE: &str = "Loading activities...";
pub const NO_PARTICIPANTS_MESSAGE: &str = "Aucun participant pour le moment.";
pub const PARTICIPANTS_HEADING: &str = "Participants inscrits :";
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// Catalog load lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Rendered,
    Failed,
}

/// Form field values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupDraft {
    pub email: String,
    pub activity: String,
}

impl SignupDraft {
    pub fn clear(&mut self) {
        self.email.clear();
        self.activity.clear();
    }
}

/// Identifies one highlight request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightTicket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
struct Highlight {
    activity: String,
    ticket: HighlightTicket,
}

/// Work a front end must run after a delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deferred {
    HideNotice(NoticeTicket),
    ClearHighlight(HighlightTicket),
}

/// One participant row with the keys its remove control carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantView {
    pub activity: String,
    pub email: String,
}

/// One rendered activity card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantView>,
    pub highlighted: bool,
}

/// What the activity list container shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Listing {
    Loading,
    Failed,
    Cards(Vec<CardView>),
}

#[derive(Clone, Debug, Default)]
pub struct BoardState {
    pub phase: LoadPhase,
    catalog: Option<Catalog>,
    pub draft: SignupDraft,
    pub notice: Notifier,
    highlight: Option<Highlight>,
    highlight_seq: u64,
}

impl BoardState {
    /// A fetch started. The previous catalog stays on screen meanwhile.
    pub fn begin_load(&mut self) {
        self.phase = LoadPhase::Loading;
    }

    /// A fetch succeeded; the catalog is replaced wholesale.
    pub fn finish_load(&mut self, catalog: Catalog) {
        self.catalog = Some(catalog);
        self.phase = LoadPhase::Rendered;
    }

    /// A fetch failed; list and select options are both emptied.
    pub fn fail_load(&mut self) {
        self.catalog = None;
        self.phase = LoadPhase::Failed;
    }

    #[must_use]
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// Mark the card keyed by `activity` as updated.
    ///
    /// Returns `None` when no rendered card has that key.
    pub fn highlight(&mut self, activity: &str) -> Option<HighlightTicket> {
        if !self.catalog.as_ref().is_some_and(|c| c.contains(activity)) {
            return None;
        }
        self.highlight_seq += 1;
        let ticket = HighlightTicket(self.highlight_seq);
        self.highlight = Some(Highlight { activity: activity.to_owned(), ticket });
        Some(ticket)
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<&str> {
        self.highlight.as_ref().map(|h| h.activity.as_str())
    }

    /// Run a deferred task whose delay has elapsed.
    pub fn apply(&mut self, task: Deferred) {
        match task {
            Deferred::HideNotice(ticket) => {
                self.notice.expire(ticket);
            }
            Deferred::ClearHighlight(ticket) => {
                if self.highlight.as_ref().is_some_and(|h| h.ticket == ticket) {
                    self.highlight = None;
                }
            }
        }
    }

    /// Content of the activity list container.
    #[must_use]
    pub fn listing(&self) -> Listing {
        match (&self.catalog, self.phase) {
            (_, LoadPhase::Failed) => Listing::Failed,
            (None, _) => Listing::Loading,
            (Some(catalog), _) => Listing::Cards(self.cards(catalog)),
        }
    }

    /// Activity names for the select control, after the placeholder option.
    #[must_use]
    pub fn select_options(&self) -> Vec<String> {
        self.catalog
            .as_ref()
            .map(|c| c.names().map(str::to_owned).collect())
            .unwrap_or_default()
    }

    fn cards(&self, catalog: &Catalog) -> Vec<CardView> {
        let highlighted = self.highlighted();
        catalog
            .iter()
            .map(|entry| CardView {
                name: entry.name.clone(),
                description: entry.activity.description.clone(),
                schedule: entry.activity.schedule.clone(),
                spots_left: entry.activity.spots_left(),
                participants: entry
                    .activity
                    .participants
                    .iter()
                    .map(|email| ParticipantView { activity: entry.name.clone(), email: email.clone() })
                    .collect(),
                highlighted: highlighted == Some(entry.name.as_str()),
            })
            .collect()
    }
}
