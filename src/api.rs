//! Review API access and response interpretation.
//!
//! The HTTP side is a thin `reqwest` wrapper behind the [`ReviewApi`] trait;
//! response validation and status parsing are plain functions over
//! `serde_json::Value` so shape violations can be classified precisely.

use crate::error::PollError;
use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde_json::Value;

#[cfg(test)]
use mockall::automock;

/// Source of homework status updates
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReviewApi: Send + Sync {
    /// Fetch all status updates since `from_date` (epoch seconds).
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError>;
}

/// `reqwest`-backed client for the homework review service
pub struct ReviewClient {
    client: HttpClient,
    endpoint: String,
    token: String,
}

impl ReviewClient {
    #[must_use]
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: HttpClient::new(),
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }
}

#[async_trait]
impl ReviewApi for ReviewClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, PollError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| PollError::Network(e.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(PollError::UnexpectedStatus(response.status().as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| PollError::Json(e.to_string()))
    }
}

/// Validates the top-level response shape and returns the homework list.
///
/// # Errors
///
/// Returns `TypeMismatch` if the response is not an object or `homeworks`
/// is not an array, and `MissingField` if `homeworks` or `current_date`
/// is absent.
pub fn check_response(response: &Value) -> Result<&[Value], PollError> {
    let object = response
        .as_object()
        .ok_or(PollError::TypeMismatch("response is not an object"))?;
    let homeworks = object
        .get("homeworks")
        .ok_or(PollError::MissingField("homeworks"))?;
    if !object.contains_key("current_date") {
        return Err(PollError::MissingField("current_date"));
    }
    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or(PollError::TypeMismatch("`homeworks` is not an array"))
}

/// Derives the chat notification for a single homework record.
///
/// # Errors
///
/// Returns `MissingHomeworkField` if `homework_name` or `status` is absent,
/// `TypeMismatch` if either is not a string, and `UnknownStatus` for a
/// status outside the verdict table.
pub fn parse_status(homework: &Value) -> Result<String, PollError> {
    let name = homework
        .get("homework_name")
        .ok_or(PollError::MissingHomeworkField("homework_name"))?
        .as_str()
        .ok_or(PollError::TypeMismatch("`homework_name` is not a string"))?;
    let status = homework
        .get("status")
        .ok_or(PollError::MissingHomeworkField("status"))?
        .as_str()
        .ok_or(PollError::TypeMismatch("`status` is not a string"))?;
    let verdict =
        verdict_for(status).ok_or_else(|| PollError::UnknownStatus(status.to_string()))?;
    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}"
    ))
}

/// Fixed verdict table, constant for the process lifetime.
fn verdict_for(status: &str) -> Option<&'static str> {
    match status {
        "approved" => Some("Работа проверена: ревьюеру всё понравилось. Ура!"),
        "reviewing" => Some("Работа взята на проверку ревьюером."),
        "rejected" => Some("Работа проверена: у ревьюера есть замечания."),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_check_response_accepts_valid_shape() {
        let response = json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved"}],
            "current_date": 1_700_000_000,
        });
        let homeworks = check_response(&response).expect("valid response");
        assert_eq!(homeworks.len(), 1);
    }

    #[test]
    fn test_check_response_rejects_non_object() {
        let response = json!([1, 2, 3]);
        let result = check_response(&response);
        assert!(matches!(result, Err(PollError::TypeMismatch(_))));
    }

    #[test]
    fn test_check_response_requires_homeworks() {
        let response = json!({"current_date": 1_700_000_000});
        let result = check_response(&response);
        assert!(matches!(result, Err(PollError::MissingField("homeworks"))));
    }

    #[test]
    fn test_check_response_requires_current_date() {
        let response = json!({"homeworks": []});
        let result = check_response(&response);
        assert!(matches!(
            result,
            Err(PollError::MissingField("current_date"))
        ));
    }

    #[test]
    fn test_check_response_rejects_non_array_homeworks() {
        let response = json!({"homeworks": {}, "current_date": 1_700_000_000});
        let result = check_response(&response);
        assert!(matches!(result, Err(PollError::TypeMismatch(_))));
    }

    #[test]
    fn test_parse_status_formats_verdict() {
        let homework = json!({"homework_name": "hw1", "status": "approved"});
        let message = parse_status(&homework).expect("known status");
        assert_eq!(
            message,
            "Изменился статус проверки работы \"hw1\". \
             Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_parse_status_covers_every_verdict() {
        for (status, verdict) in [
            ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
            ("reviewing", "Работа взята на проверку ревьюером."),
            ("rejected", "Работа проверена: у ревьюера есть замечания."),
        ] {
            let homework = json!({"homework_name": "hw", "status": status});
            let message = parse_status(&homework).expect("known status");
            assert!(message.contains(verdict), "missing verdict for {status}");
            assert!(message.contains("hw"));
        }
    }

    #[test]
    fn test_parse_status_requires_name_and_status() {
        let result = parse_status(&json!({"status": "approved"}));
        assert!(matches!(
            result,
            Err(PollError::MissingHomeworkField("homework_name"))
        ));

        let result = parse_status(&json!({"homework_name": "hw1"}));
        assert!(matches!(
            result,
            Err(PollError::MissingHomeworkField("status"))
        ));
    }

    #[test]
    fn test_parse_status_rejects_unknown_status() {
        let homework = json!({"homework_name": "hw1", "status": "archived"});
        let result = parse_status(&homework);
        assert!(matches!(result, Err(PollError::UnknownStatus(s)) if s == "archived"));
    }
}
