//! User-triggered flows: refresh, signup, unregister.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each flow talks to the backend through the environment's client, mutates
//! `BoardState` through `BoardEnv::update`, and hands delayed work (banner
//! auto-hide, highlight removal) to `BoardEnv::schedule`. Nothing here knows
//! about the DOM or timers, which keeps the flows runnable under a plain
//! executor in tests.
//!
//! Flows may overlap. Catalog results are applied in the order responses
//! arrive, so the last response to land wins.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use std::time::Duration;

use crate::api::{ActivityClient, ApiError, HttpTransport};
use crate::config::Timings;
use crate::notice::NoticeKind;
use crate::state::{BoardState, Deferred};

pub const UNREGISTER_SUCCESS_FALLBACK: &str = "Participant unregistered";
pub const UNREGISTER_FAILED_FALLBACK: &str = "Failed to unregister participant";
pub const UNREGISTER_NETWORK_ERROR: &str = "Network error while unregistering";
pub const SIGNUP_FAILED_FALLBACK: &str = "An error occurred";
pub const SIGNUP_NETWORK_ERROR: &str = "Failed to sign up. Please try again.";

/// Host services a flow needs.
pub trait BoardEnv {
    type Transport: HttpTransport;

    fn client(&self) -> &ActivityClient<Self::Transport>;

    /// Ask the user a yes/no question.
    fn confirm(&self, prompt: &str) -> bool;

    /// Mutate the board state. `None` if the state is gone (page torn down).
    fn update<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> Option<R>;

    /// Run `task` against the board state after `delay`.
    fn schedule(&self, delay: Duration, task: Deferred);

    fn timings(&self) -> Timings;
}

/// Confirmation text shown before removing a participant.
#[must_use]
pub fn unregister_prompt(activity: &str, email: &str) -> String {
    format!("Voulez-vous vraiment désinscrire {email} de \"{activity}\" ?")
}

/// Re-fetch the catalog and replace what is shown.
pub async fn refresh<E: BoardEnv>(env: &E) {
    env.update(BoardState::begin_load);
    match env.client().list().await {
        Ok(catalog) => {
            log::debug!("loaded {} activities", catalog.len());
            env.update(|s| s.finish_load(catalog));
        }
        Err(err) => {
            log::error!("error fetching activities: {err}");
            env.update(BoardState::fail_load);
        }
    }
}

/// Remove `email` from `activity` after the user confirms.
///
/// Returns `false` when the user declined and nothing was sent.
pub async fn unregister<E: BoardEnv>(env: &E, activity: &str, email: &str) -> bool {
    if !env.confirm(&unregister_prompt(activity, email)) {
        return false;
    }
    let lifetime = env.timings().unregister_notice;
    match env.client().unregister(activity, email).await {
        Ok(message) => {
            refresh(env).await;
            highlight(env, activity);
            let text = message.unwrap_or_else(|| UNREGISTER_SUCCESS_FALLBACK.to_owned());
            notify(env, NoticeKind::Success, text, lifetime);
        }
        Err(err) if err.is_transport() => {
            log::error!("error unregistering participant: {err}");
            notify(env, NoticeKind::Error, UNREGISTER_NETWORK_ERROR.to_owned(), lifetime);
        }
        Err(err) => {
            notify(env, NoticeKind::Error, rejected_text(&err, UNREGISTER_FAILED_FALLBACK), lifetime);
        }
    }
    true
}

/// Register `email` for `activity`. Input is sent as entered.
///
/// Returns `true` when the server accepted the signup.
pub async fn signup<E: BoardEnv>(env: &E, email: &str, activity: &str) -> bool {
    let lifetime = env.timings().signup_notice;
    match env.client().signup(activity, email).await {
        Ok(message) => {
            notify(env, NoticeKind::Success, message.unwrap_or_default(), lifetime);
            env.update(|s| s.draft.clear());
            refresh(env).await;
            true
        }
        Err(err) if err.is_transport() => {
            log::error!("error signing up: {err}");
            notify(env, NoticeKind::Error, SIGNUP_NETWORK_ERROR.to_owned(), lifetime);
            false
        }
        Err(err) => {
            notify(env, NoticeKind::Error, rejected_text(&err, SIGNUP_FAILED_FALLBACK), lifetime);
            false
        }
    }
}

fn rejected_text(err: &ApiError, fallback: &str) -> String {
    err.detail().unwrap_or(fallback).to_owned()
}

fn notify<E: BoardEnv>(env: &E, kind: NoticeKind, text: String, lifetime: Duration) {
    if let Some(ticket) = env.update(|s| s.notice.show(kind, text)) {
        env.schedule(lifetime, Deferred::HideNotice(ticket));
    }
}

fn highlight<E: BoardEnv>(env: &E, activity: &str) {
    if let Some(Some(ticket)) = env.update(|s| s.highlight(activity)) {
        env.schedule(env.timings().highlight, Deferred::ClearHighlight(ticket));
    }
}
