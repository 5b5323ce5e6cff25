//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared `RwSignal<BoardState>` from context and start
//! flows through the `BrowserEnv` context; none of them call the network
//! directly.

pub mod activity_card;
pub mod activity_list;
pub mod message_banner;
pub mod signup_form;
