use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Response(pub serde_json::Value);

impl Response {
    /// Value of the `status` field, e.g. "ok" or "UP"
    pub fn status(&self) -> Option<&str> {
        self.0.get("status").and_then(serde_json::Value::as_str)
    }

    pub fn is_up(&self) -> bool {
        self.status().is_some_and(|status| {
            status.eq_ignore_ascii_case("ok") || status.eq_ignore_ascii_case("up")
        })
    }
}
