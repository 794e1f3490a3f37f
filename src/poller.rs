//! The poll loop: fetch, notify, advance the cursor, sleep, repeat.
//!
//! All loop state (cursor, last sent failure text) lives on the [`Poller`]
//! itself; there are no globals and no shared mutable resources. Every
//! failure is contained within its cycle, so the loop never terminates on
//! its own.

use crate::api::{check_response, parse_status, ReviewApi};
use crate::config::POLL_INTERVAL;
use crate::error::PollError;
use crate::notify::Notifier;
use chrono::Utc;
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, error};

/// Periodic poller relaying homework status changes to the chat
pub struct Poller<A, N> {
    api: A,
    notifier: N,
    /// Lower time bound for the next status query (epoch seconds)
    cursor: i64,
    /// Most recently sent failure notification. Suppresses duplicate
    /// failure alerts across consecutive cycles; cleared on success.
    last_error_message: String,
}

impl<A: ReviewApi, N: Notifier> Poller<A, N> {
    /// Creates a poller whose cursor starts at the current wall-clock time,
    /// so only updates from after startup are reported.
    #[must_use]
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            cursor: Utc::now().timestamp(),
            last_error_message: String::new(),
        }
    }

    /// Runs the loop forever. The sleep applies after every cycle,
    /// successful or not; the only way out is process termination.
    pub async fn run(mut self) {
        loop {
            self.cycle().await;
            sleep(POLL_INTERVAL).await;
        }
    }

    /// Executes one fetch-and-notify cycle, containing every failure.
    pub async fn cycle(&mut self) {
        match self.poll_once().await {
            Ok(()) => self.last_error_message.clear(),
            Err(e) if e.is_easy() => error!("{e}"),
            Err(e) => self.report_failure(&e).await,
        }
    }

    async fn poll_once(&mut self) -> Result<(), PollError> {
        let response = self.api.fetch(self.cursor).await?;
        let homeworks = check_response(&response)?;

        // The API returns most-recent-first; only the first entry is
        // relevant per cycle.
        if let Some(homework) = homeworks.first() {
            let status = parse_status(homework)?;
            self.send(&status).await;
        } else {
            debug!("No new homework statuses");
        }

        self.cursor = response
            .get("current_date")
            .and_then(Value::as_i64)
            .unwrap_or_else(|| Utc::now().timestamp());
        Ok(())
    }

    /// Dispatches a message, logging and dropping any transport error.
    async fn send(&self, text: &str) {
        if let Err(e) = self.notifier.notify(text).await {
            debug!("Failed to deliver notification: {e}");
        }
    }

    /// Logs a cycle failure and forwards it to the chat unless the exact
    /// same text was already sent by the previous failing cycle.
    async fn report_failure(&mut self, error: &PollError) {
        let message = format!("Сбой в работе программы: {error}");
        error!("{message}");
        if message != self.last_error_message {
            match self.notifier.notify(&message).await {
                // Remembered only once actually delivered, so a dropped
                // send is retried on the next failing cycle.
                Ok(()) => self.last_error_message = message,
                Err(e) => debug!("Failed to deliver failure notification: {e}"),
            }
        }
    }
}
