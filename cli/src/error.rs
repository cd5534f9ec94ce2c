/// Error shown to the user: a short message with an optional hint underneath
#[derive(Debug)]
pub struct Error(String, Option<String>);

impl Error {
    pub fn new(message: &str, hint: Option<&str>) -> Self {
        Error(message.to_string(), hint.map(|h| h.to_string()))
    }

    pub fn message(&self) -> &str {
        &self.0
    }

    pub fn hint(&self) -> Option<&str> {
        self.1.as_deref()
    }
}

/// Display the message and the hint, dimmed
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.1 {
            Some(hint) => write!(f, "{}\n\n{}", self.0, console::style(hint).dim()),
            None => write!(f, "{}", self.0),
        }
    }
}

impl std::error::Error for Error {}

/// Convert eyre reports, keeping our own error if it is wrapped inside
impl From<eyre::Report> for Error {
    fn from(report: eyre::Report) -> Self {
        match report.downcast::<Error>() {
            Ok(error) => error,
            Err(report) => {
                log::error!("{report:?}");
                Error::new(&format!("{report:#}"), None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_wrapped_error() {
        let report = eyre::Report::new(Error::new("Config is broken", Some("Fix it.")));
        let error = Error::from(report);
        assert_eq!(error.message(), "Config is broken");
        assert_eq!(error.hint(), Some("Fix it."));
    }

    #[test]
    fn converts_foreign_report() {
        let report = eyre::eyre!("disk full").wrap_err("Failed to write");
        let error = Error::from(report);
        assert_eq!(error.message(), "Failed to write: disk full");
        assert_eq!(error.hint(), None);
    }
}
