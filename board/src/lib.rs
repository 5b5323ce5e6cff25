//! Core model and flows for the activity sign-up board.
//!
//! This crate owns everything that does not depend on a rendering target:
//! the catalog wire model, the REST contract, the banner notifier, the board
//! state machine, and the refresh/signup/unregister flows. The `client`
//! (Leptos/WASM) and `cli` crates plug in an [`api::HttpTransport`] and a
//! [`flow::BoardEnv`] and render [`state::BoardState`] however they like.

pub mod api;
pub mod config;
pub mod flow;
pub mod model;
pub mod notice;
pub mod routes;
pub mod state;

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures;
