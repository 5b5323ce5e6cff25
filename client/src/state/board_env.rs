//! Browser implementation of `board::flow::BoardEnv`.
//!
//! State writes go through the shared `RwSignal<BoardState>`; delayed tasks
//! sleep on `gloo-timers` inside `spawn_local` and then apply themselves to
//! the same signal. If the signal has been disposed by then the write is
//! dropped.

#[cfg(test)]
#[path = "board_env_test.rs"]
mod board_env_test;

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;

use board::api::ActivityClient;
use board::config::Timings;
use board::flow::BoardEnv;
use board::state::{BoardState, Deferred};

use crate::net::api::FetchTransport;

#[derive(Clone, Debug)]
pub struct BrowserEnv {
    client: ActivityClient<FetchTransport>,
    board: RwSignal<BoardState>,
    timings: Timings,
}

impl BrowserEnv {
    pub fn new(board: RwSignal<BoardState>) -> Self {
        Self { client: ActivityClient::new(FetchTransport), board, timings: Timings::default() }
    }

    /// Run a flow on the local executor with its own copy of the env.
    pub fn spawn<F, Fut>(&self, flow: F)
    where
        F: FnOnce(BrowserEnv) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        leptos::task::spawn_local(flow(self.clone()));
    }
}

impl BoardEnv for BrowserEnv {
    type Transport = FetchTransport;

    fn client(&self) -> &ActivityClient<FetchTransport> {
        &self.client
    }

    fn confirm(&self, prompt: &str) -> bool {
        crate::util::confirm::ask(prompt)
    }

    fn update<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> Option<R> {
        self.board.try_update(f)
    }

    fn schedule(&self, delay: Duration, task: Deferred) {
        #[cfg(feature = "csr")]
        {
            let board = self.board;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(delay).await;
                board.try_update(|s| s.apply(task));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (delay, task);
        }
    }

    fn timings(&self) -> Timings {
        self.timings
    }
}
