use crate::display::{DisplayState, Panel, RenderTarget, StatusStyle};
use crate::logger::Logger;
use crate::writer::Writer;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;
use std::time::Duration;

/// Renders the result area into the terminal
///
/// Keeps a panel up to date and draws it once per render cycle:
/// a spinner while checking, the status and the details once resolved.
pub struct TerminalView {
    panel: Panel,
    writer: Writer,
    spinner: Option<ProgressBar>,
}

impl TerminalView {
    pub fn new(writer: Writer) -> Self {
        TerminalView {
            panel: Panel::default(),
            writer,
            spinner: None,
        }
    }

    fn start_spinner(&mut self, url: &str) {
        self.stop_spinner();

        if self.writer.is_structured() {
            return;
        }

        let spinner = Logger::multi_progress().add(ProgressBar::new_spinner());

        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );

        spinner.set_message(format!(
            "{} {}",
            console::style(&self.panel.status).bold(),
            console::style(url).dim()
        ));

        spinner.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(spinner);
    }

    fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Human readable form of the resolved panel
    pub fn text(&self, url: &str) -> String {
        let status = match self.panel.style {
            StatusStyle::Success => console::style(&self.panel.status).green().bold(),
            StatusStyle::Fail => console::style(&self.panel.status).red().bold(),
            StatusStyle::None => console::style(&self.panel.status).bold(),
        };

        format!(
            "\n{}\n{}\n\n{}\n",
            status,
            console::style(url).dim(),
            console::style(&self.panel.details).dim()
        )
    }

    /// Structured form of the resolved panel
    pub fn json(&self, url: &str) -> serde_json::Value {
        json!({
            "url": url,
            "status": self.panel.status,
            "style": self.panel.style,
            "details": self.panel.details,
        })
    }
}

impl RenderTarget for TerminalView {
    fn set_status(&mut self, text: &str) {
        self.panel.set_status(text);
    }

    fn set_style(&mut self, style: StatusStyle) {
        self.panel.set_style(style);
    }

    fn set_details(&mut self, text: &str) {
        self.panel.set_details(text);
    }

    fn show_result(&mut self) {
        self.panel.show_result();
    }

    fn commit(&mut self, state: &DisplayState) {
        let result = match state {
            DisplayState::Idle => Ok(()),

            DisplayState::Checking { url } => {
                self.start_spinner(url);
                Ok(())
            }

            DisplayState::Resolved { url, .. } => {
                self.stop_spinner();

                if self.writer.is_structured() {
                    self.writer.json(self.json(url))
                } else {
                    self.writer.text(&self.text(url))
                }
            }
        };

        if let Err(err) = result {
            log::error!("Failed to draw the result: {err:?}");
        }
    }
}

impl Drop for TerminalView {
    fn drop(&mut self) {
        self.stop_spinner();
    }
}
