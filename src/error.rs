//! Error taxonomy for a single poll cycle.
//!
//! Every failure a cycle can produce is contained within that cycle: the
//! poller logs it, optionally forwards it to the chat, and the loop carries
//! on after the regular sleep. Nothing here ever terminates the process.

use thiserror::Error;

/// Errors that can occur while fetching and interpreting homework statuses
#[derive(Debug, Error)]
pub enum PollError {
    /// Connection-level failure while talking to the review API
    #[error("request to the review API failed: {0}")]
    Network(String),
    /// The review API answered with a non-200 status
    #[error("unexpected response status from the review API: {0}")]
    UnexpectedStatus(u16),
    /// The response body is not valid JSON
    #[error("failed to decode the review API response: {0}")]
    Json(String),
    /// A field is present but has the wrong shape
    #[error("type mismatch in the review API response: {0}")]
    TypeMismatch(&'static str),
    /// A required field is absent from the top-level response
    #[error("missing field `{0}` in the review API response")]
    MissingField(&'static str),
    /// A required field is absent from a homework record. Unlike the
    /// response-level miss this one is forwarded to the chat.
    #[error("missing field `{0}` in the homework record")]
    MissingHomeworkField(&'static str),
    /// A homework status outside the known verdict set
    #[error("unknown homework status: {0}")]
    UnknownStatus(String),
}

impl PollError {
    /// Expected, benign failures. These are logged but never forwarded to
    /// the chat. Only top-level response misses qualify; a broken homework
    /// record is still reported.
    #[must_use]
    pub const fn is_easy(&self) -> bool {
        matches!(self, Self::MissingField(_))
    }
}

/// Error while delivering a message through the Telegram transport.
///
/// Always caught at the point of sending: a failed delivery is logged and
/// dropped, it never affects cursor advancement or the cycle outcome.
#[derive(Debug, Error)]
#[error("Telegram send error: {0}")]
pub struct NotifyError(pub String);
