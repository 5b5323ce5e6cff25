//! Plain-text rendering of the board listing.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use board::state::{CardView, LOAD_FAILED_MESSAGE, LOADING_MESSAGE, Listing, NO_PARTICIPANTS_MESSAGE, PARTICIPANTS_HEADING};

pub fn listing(listing: &Listing) -> String {
    match listing {
        Listing::Loading => LOADING_MESSAGE.to_owned(),
        Listing::Failed => LOAD_FAILED_MESSAGE.to_owned(),
        Listing::Cards(cards) => cards.iter().map(card).collect::<Vec<_>>().join("\n"),
    }
}

pub fn card(card: &CardView) -> String {
    let mut lines = vec![
        card.name.clone(),
        format!("  {}", card.description),
        format!("  Schedule: {}", card.schedule),
        format!("  Availability: {} spots left", card.spots_left),
        format!("  {PARTICIPANTS_HEADING}"),
    ];
    if card.participants.is_empty() {
        lines.push(format!("    {NO_PARTICIPANTS_MESSAGE}"));
    }
    lines.extend(card.participants.iter().map(|p| format!("    - {}", p.email)));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
