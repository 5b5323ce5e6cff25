//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The app has a single screen; the page lays out sections and delegates
//! rendering to `components`.

pub mod activities;
