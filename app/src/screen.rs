//! Drives the view model from line commands and renders every pushed state.

use std::io::Write;
use std::process::ExitCode;

use amphibians_core::{AmphibiansViewModel, UiState};
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::watch;
use tracing::debug;

use crate::render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success,
    Failure,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        match exit {
            Exit::Success => ExitCode::SUCCESS,
            Exit::Failure => ExitCode::FAILURE,
        }
    }
}

fn exit_for(state: &UiState) -> Exit {
    if state.is_error() {
        Exit::Failure
    } else {
        Exit::Success
    }
}

async fn settle(states: &mut watch::Receiver<UiState>) -> UiState {
    match states.wait_for(|s| !s.is_loading()).await {
        Ok(state) => state.clone(),
        Err(_) => UiState::Error,
    }
}

/// Render the first non-`Loading` state and report how it ended.
pub async fn run_once<W: Write>(view_model: &AmphibiansViewModel, out: &mut W) -> Result<Exit> {
    let mut states = view_model.subscribe();
    let state = settle(&mut states).await;
    writeln!(out, "{}", render::render(&state))?;
    Ok(exit_for(&state))
}

/// Render every pushed state and act on `r` (retry) / `q` (quit) lines.
///
/// Pending state changes are rendered before the next command is read. When
/// input ends the fetch in flight is still awaited and its result rendered.
pub async fn run_interactive<R, W>(view_model: &AmphibiansViewModel, input: R, out: &mut W) -> Result<Exit>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut states = view_model.subscribe();
    let mut lines = input.lines();

    let mut shown = states.borrow_and_update().clone();
    writeln!(out, "{}", render::render(&shown))?;
    loop {
        tokio::select! {
            biased;
            changed = states.changed() => {
                if changed.is_err() {
                    break;
                }
                shown = states.borrow_and_update().clone();
                writeln!(out, "\n{}", render::render(&shown))?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("input closed");
                    let state = settle(&mut states).await;
                    if state != shown {
                        writeln!(out, "\n{}", render::render(&state))?;
                    }
                    return Ok(exit_for(&state));
                };
                match line.trim() {
                    "r" | "retry" => {
                        debug!("retry requested");
                        view_model.retry();
                    }
                    "q" | "quit" => break,
                    "" => {}
                    other => writeln!(out, "unknown command {other:?}; {}", render::RETRY_HINT)?,
                }
            }
        }
    }
    Ok(Exit::Success)
}
