//! Networking for the browser build.
//!
//! `api` implements the `board` crate's transport over `fetch`.

pub mod api;
