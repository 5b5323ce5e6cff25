//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

#[cfg(feature = "csr")]
use board::flow;
use board::state::BoardState;

use crate::pages::activities::ActivitiesPage;
use crate::state::board_env::BrowserEnv;

/// Root application component.
///
/// Provides the board state signal and the browser environment, then kicks
/// off the initial catalog load.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let board = RwSignal::new(BoardState::default());
    let env = BrowserEnv::new(board);
    provide_context(board);
    provide_context(env.clone());

    #[cfg(feature = "csr")]
    env.spawn(|env| async move {
        flow::refresh(&env).await;
    });
    #[cfg(not(feature = "csr"))]
    let _ = env;

    view! {
        <Title text="Mergington High School Activities"/>
        <ActivitiesPage/>
    }
}
