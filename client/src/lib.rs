//! # client
//!
//! Leptos + WASM front end for the activity sign-up board.
//!
//! The page lists activities with their rosters, lets a student sign up
//! through a form, and lets an admin remove a participant. All state and
//! flows come from the `board` crate; this crate supplies the browser
//! transport (`gloo-net`), timers (`gloo-timers`), confirmation dialog, and
//! the view tree.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
