//! Small browser helpers.

pub mod confirm;
