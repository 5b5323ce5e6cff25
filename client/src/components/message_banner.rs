//! The shared `#message` banner.
//!
//! Keeps its last text while hidden; only the `hidden` class toggles.

#[cfg(test)]
#[path = "message_banner_test.rs"]
mod message_banner_test;

use leptos::prelude::*;

use board::notice::Notice;
use board::state::BoardState;

#[component]
pub fn MessageBanner() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let banner = Memo::new(move |_| board.with(|s| (s.notice.last().cloned(), s.notice.visible().is_some())));

    view! {
        <div
            id="message"
            class=move || banner.with(|(notice, visible)| banner_class(notice.as_ref(), *visible))
            role="status"
        >
            {move || banner.with(|(notice, _)| notice.as_ref().map(|n| n.text.clone()).unwrap_or_default())}
        </div>
    }
}

pub(crate) fn banner_class(notice: Option<&Notice>, visible: bool) -> String {
    match (notice, visible) {
        (Some(notice), true) => notice.kind.class().to_owned(),
        (Some(notice), false) => format!("{} hidden", notice.kind.class()),
        (None, _) => "hidden".to_owned(),
    }
}
