use crate::api::check::{self, Verdict};
use crate::api::CheckTransport;
use crate::display::{DisplayState, RenderTarget, StatusStyle};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Status shown while a check is in flight
pub const CHECKING_STATUS: &str = "Checking...";

/// Status shown when the reply never arrived or was not JSON
pub const REQUEST_FAILED_STATUS: &str = "Request failed";

struct Screen<R> {
    target: R,
    state: DisplayState,
}

/// Binds the URL input and the examples to the check endpoint
///
/// Every submission takes a new request token. Only the reply to the most recently
/// issued submission is rendered, replies to older ones are dropped.
pub struct FormController<T, R> {
    transport: T,
    screen: Mutex<Screen<R>>,
    input: Mutex<String>,
    latest_token: AtomicU64,
    success_marker: String,
}

impl<T, R> FormController<T, R>
where
    T: CheckTransport,
    R: RenderTarget,
{
    pub fn new(transport: T, target: R, success_marker: &str) -> Self {
        FormController {
            transport,
            screen: Mutex::new(Screen {
                target,
                state: DisplayState::Idle,
            }),
            input: Mutex::new(String::new()),
            latest_token: AtomicU64::new(0),
            success_marker: success_marker.to_string(),
        }
    }

    fn screen(&self) -> MutexGuard<'_, Screen<R>> {
        self.screen.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Current value of the URL input
    pub fn input(&self) -> String {
        self.input.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn set_input(&self, value: &str) {
        *self.input.lock().unwrap_or_else(|e| e.into_inner()) = value.to_string();
    }

    pub fn state(&self) -> DisplayState {
        self.screen().state.clone()
    }

    /// Inspect the render target
    pub fn with_target<O>(&self, f: impl FnOnce(&R) -> O) -> O {
        f(&self.screen().target)
    }

    /// Submit whatever the URL input holds
    pub async fn submit_form(&self) -> Option<DisplayState> {
        let url = self.input();
        self.submit(&url).await
    }

    /// Put the example into the URL input and submit it like the form
    pub async fn trigger_from_example(&self, text: &str) -> Option<DisplayState> {
        self.set_input(text);
        self.submit_form().await
    }

    /// Check the URL and render the reply
    ///
    /// Returns the resolved state, or None if the input was blank
    /// or a newer submission took over while waiting.
    pub async fn submit(&self, url: &str) -> Option<DisplayState> {
        let url = url.trim();

        if url.is_empty() {
            log::debug!("Ignoring blank submission");
            return None;
        }

        let token = {
            let mut screen = self.screen();
            let token = self.latest_token.fetch_add(1, Ordering::SeqCst) + 1;

            screen.target.set_status(CHECKING_STATUS);
            screen.target.set_style(StatusStyle::None);
            screen.target.set_details("");
            screen.target.show_result();
            screen.state = DisplayState::Checking {
                url: url.to_string(),
            };

            let Screen { target, state } = &mut *screen;
            target.commit(state);
            token
        };

        log::info!("Checking {url} (request #{token})");

        let result = self
            .transport
            .check(&check::Request {
                url: url.to_string(),
            })
            .await;

        let mut screen = self.screen();

        if self.latest_token.load(Ordering::SeqCst) != token {
            log::info!("Dropping stale reply for {url} (request #{token})");
            return None;
        }

        let verdict = match result {
            Ok(response) => {
                let verdict = response.verdict(&self.success_marker);
                screen.target.set_status(&response.status_text());
                screen.target.set_style(verdict.into());
                screen.target.set_details(&response.details());
                verdict
            }

            Err(err) => {
                log::error!("Check of {url} failed: {err:?}");
                screen.target.set_status(REQUEST_FAILED_STATUS);
                screen.target.set_style(StatusStyle::Fail);
                screen.target.set_details(&format!("{err:#}"));
                Verdict::Fail
            }
        };

        screen.state = DisplayState::Resolved {
            url: url.to_string(),
            verdict,
        };

        let Screen { target, state } = &mut *screen;
        target.commit(state);
        Some(state.clone())
    }
}
