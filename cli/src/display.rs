use crate::api::check::Verdict;
use serde::Serialize;

/// Styling of the status line, the counterpart of a CSS class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusStyle {
    #[default]
    None,
    Success,
    Fail,
}

impl From<Verdict> for StatusStyle {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Success => StatusStyle::Success,
            Verdict::Fail => StatusStyle::Fail,
        }
    }
}

/// What the result area currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DisplayState {
    /// Nothing submitted yet
    #[default]
    Idle,

    /// Waiting for the reply to a submission
    Checking { url: String },

    Resolved { url: String, verdict: Verdict },
}

/// Surface the controller renders into
///
/// Calls between two `commit`s form one render cycle.
pub trait RenderTarget: Send {
    fn set_status(&mut self, text: &str);

    fn set_style(&mut self, style: StatusStyle);

    fn set_details(&mut self, text: &str);

    /// Make the result area visible
    fn show_result(&mut self);

    /// A render cycle is complete
    fn commit(&mut self, _state: &DisplayState) {}
}

/// Plain in-memory render target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Panel {
    pub status: String,
    pub style: StatusStyle,
    pub details: String,
    pub visible: bool,
}

impl RenderTarget for Panel {
    fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
    }

    fn set_style(&mut self, style: StatusStyle) {
        self.style = style;
    }

    fn set_details(&mut self, text: &str) {
        self.details = text.to_string();
    }

    fn show_result(&mut self) {
        self.visible = true;
    }
}
