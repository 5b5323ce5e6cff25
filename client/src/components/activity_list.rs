//! The `#activities-list` container.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use board::flow;
use board::state::{BoardState, LOAD_FAILED_MESSAGE, LOADING_MESSAGE, Listing, ParticipantView};

use crate::components::activity_card::ActivityCard;
use crate::state::board_env::BrowserEnv;

/// Loading text, failure text, or one card per activity in catalog order.
#[component]
pub fn ActivityList() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let env = expect_context::<BrowserEnv>();
    let listing = Memo::new(move |_| board.with(BoardState::listing));

    let on_unregister = Callback::new(move |participant: ParticipantView| {
        env.spawn(move |env| async move {
            flow::unregister(&env, &participant.activity, &participant.email).await;
        });
    });

    view! {
        <div id="activities-list">
            {move || match listing.get() {
                Listing::Loading => view! { <p>{LOADING_MESSAGE}</p> }.into_any(),
                Listing::Failed => view! { <p>{LOAD_FAILED_MESSAGE}</p> }.into_any(),
                Listing::Cards(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ActivityCard card=card on_unregister=on_unregister/> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
