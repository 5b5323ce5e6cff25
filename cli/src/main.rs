//! Terminal front end for the activities backend.
//!
//! Runs the same refresh/signup/unregister flows as the browser client, with
//! a `dialoguer` prompt standing in for `window.confirm` and stdout/stderr
//! standing in for the banner.

mod http;
mod render;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::cell::RefCell;
use std::time::Duration;

use board::api::ActivityClient;
use board::config::Timings;
use board::flow::{self, BoardEnv};
use board::notice::NoticeKind;
use board::state::{BoardState, Deferred, Listing};
use clap::{Parser, Subcommand};

use crate::http::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Failed(String),
}

#[derive(Parser, Debug)]
#[command(name = "activities", about = "List, join, and leave school activities")]
struct Cli {
    #[arg(long, env = "ACTIVITIES_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    #[arg(long, env = "ACTIVITIES_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every activity with its roster.
    List,
    /// Sign a student up for an activity.
    Signup {
        #[arg(long)]
        activity: String,
        #[arg(long)]
        email: String,
    },
    /// Remove a student from an activity.
    Unregister {
        #[arg(long)]
        activity: String,
        #[arg(long)]
        email: String,
        /// Skip the confirmation prompt.
        #[arg(long, short = 'y', default_value_t = false)]
        yes: bool,
    },
}

/// Board environment for a single command run.
struct TerminalEnv {
    client: ActivityClient<ReqwestTransport>,
    state: RefCell<BoardState>,
    assume_yes: bool,
}

impl BoardEnv for TerminalEnv {
    type Transport = ReqwestTransport;

    fn client(&self) -> &ActivityClient<ReqwestTransport> {
        &self.client
    }

    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or_else(|error| {
                tracing::warn!(%error, "confirmation prompt failed");
                false
            })
    }

    fn update<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> Option<R> {
        Some(f(&mut self.state.borrow_mut()))
    }

    // The process exits long before any banner would expire.
    fn schedule(&self, _delay: Duration, _task: Deferred) {}

    fn timings(&self) -> Timings {
        Timings::default()
    }
}

impl TerminalEnv {
    fn new(transport: ReqwestTransport, assume_yes: bool) -> Self {
        Self { client: ActivityClient::new(transport), state: RefCell::new(BoardState::default()), assume_yes }
    }

    /// Print the current banner; an error banner becomes the command's error.
    fn report_notice(&self) -> Result<(), CliError> {
        let state = self.state.borrow();
        match state.notice.visible() {
            Some(notice) if notice.kind == NoticeKind::Error => Err(CliError::Failed(notice.text.clone())),
            Some(notice) => {
                println!("{}", notice.text);
                Ok(())
            }
            None => Ok(()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let transport = ReqwestTransport::new(&cli.base_url, Duration::from_secs(cli.timeout_secs))?;
    let assume_yes = matches!(cli.command, Command::Unregister { yes: true, .. });
    let env = TerminalEnv::new(transport, assume_yes);

    match cli.command {
        Command::List => run_list(&env).await,
        Command::Signup { activity, email } => {
            flow::signup(&env, &email, &activity).await;
            env.report_notice()
        }
        Command::Unregister { activity, email, .. } => {
            if !flow::unregister(&env, &activity, &email).await {
                tracing::info!("unregister cancelled");
                return Ok(());
            }
            env.report_notice()
        }
    }
}

async fn run_list(env: &TerminalEnv) -> Result<(), CliError> {
    flow::refresh(env).await;
    let listing = env.state.borrow().listing();
    if listing == Listing::Failed {
        return Err(CliError::Failed(render::listing(&listing)));
    }
    print!("{}", render::listing(&listing));
    Ok(())
}
