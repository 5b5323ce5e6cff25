//! Client-side state wiring.
//!
//! DESIGN
//! ======
//! The board model itself lives in the `board` crate; this module only binds
//! it to a Leptos signal and the browser's timers and dialogs.

pub mod board_env;
