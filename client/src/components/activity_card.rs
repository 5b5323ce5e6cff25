//! Card for one activity with its participant roster.
//!
//! Every remove button carries `data-activity` / `data-email` and reports the
//! participant through `on_unregister`; the card itself never talks to the
//! backend.

#[cfg(test)]
#[path = "activity_card_test.rs"]
mod activity_card_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use board::state::{CardView, NO_PARTICIPANTS_MESSAGE, PARTICIPANTS_HEADING, ParticipantView};

/// A single activity card.
#[component]
pub fn ActivityCard(card: CardView, on_unregister: Callback<ParticipantView>) -> impl IntoView {
    let CardView { name, description, schedule, spots_left, participants, highlighted } = card;
    let key = name.clone();

    let roster = if participants.is_empty() {
        view! { <p class="no-participants">{NO_PARTICIPANTS_MESSAGE}</p> }.into_any()
    } else {
        view! {
            <ul class="participants-list">
                {participants
                    .into_iter()
                    .map(|participant| view! { <ParticipantRow participant=participant on_unregister=on_unregister/> })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <div class="activity-card" class:activity-updated=highlighted data-activity=key>
            <h4>{name}</h4>
            <p>{description}</p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                {schedule}
            </p>
            <p>
                <strong>"Availability:"</strong>
                " "
                {availability_label(spots_left)}
            </p>
            <div class="participants-section">
                <strong>{PARTICIPANTS_HEADING}</strong>
                {roster}
            </div>
        </div>
    }
}

#[component]
fn ParticipantRow(participant: ParticipantView, on_unregister: Callback<ParticipantView>) -> impl IntoView {
    let row_key = participant.email.clone();
    let label = participant.email.clone();
    let activity = participant.activity.clone();
    let email = participant.email.clone();

    view! {
        <li data-email=row_key>
            <span class="participant-email">{label}</span>
            <button
                class="btn-unregister"
                data-activity=activity
                data-email=email
                title="Unregister"
                aria-label="Unregister"
                on:click=move |_| on_unregister.run(participant.clone())
            >
                "×"
            </button>
        </li>
    }
}

/// Availability line text. Negative counts are shown as-is.
pub(crate) fn availability_label(spots_left: i64) -> String {
    format!("{spots_left} spots left")
}
