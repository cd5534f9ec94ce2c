use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Request {
    pub url: String,
}

/// Reply of the check endpoint
///
/// No schema is enforced, only `message` is looked at.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Response(pub Value);

/// Outcome of a check as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Success,
    Fail,
}

impl Response {
    /// Server message, only if it is a non-empty string
    pub fn message(&self) -> Option<&str> {
        // Non-string values like numbers fall back to the whole reply as well
        self.0
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
    }

    /// Text for the status line: the message, or the whole reply in compact JSON
    pub fn status_text(&self) -> String {
        match self.message() {
            Some(message) => message.to_string(),
            None => self.0.to_string(),
        }
    }

    /// The whole reply, pretty printed with two-space indent
    pub fn details(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }

    /// Classify the reply: a success only if the status text contains the marker
    pub fn verdict(&self, success_marker: &str) -> Verdict {
        if self.status_text().contains(success_marker) {
            Verdict::Success
        } else {
            Verdict::Fail
        }
    }
}
