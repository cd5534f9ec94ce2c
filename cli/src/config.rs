use crate::error::Error;
use eyre::WrapErr;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the config file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "urlcheck.toml";

/// Overrides `api_base` from the config file
pub const API_BASE_ENV: &str = "URLCHECK_API_BASE";

/// Structure of urlcheck.toml
///
/// Every key is optional, a missing file is the same as an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    api_base: Option<String>,
    check_path: Option<String>,
    health_path: Option<String>,
    success_marker: Option<String>,

    /// Human readable duration, e.g. "30s" or "1m 30s"
    timeout: Option<String>,

    examples: Option<Vec<String>>,
}

/// Resolved configuration of the front end
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the validation service, without trailing slash
    pub api_base: String,
    pub check_path: String,
    pub health_path: String,

    /// Substring of the server message that marks a valid URL
    pub success_marker: String,

    /// No timeout at all when not set
    pub timeout: Option<Duration>,

    /// Preset URLs offered as examples
    pub examples: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base: "http://localhost:8080".into(),
            check_path: "/api/check-url".into(),
            health_path: "/api/health".into(),
            success_marker: "✅".into(),
            timeout: None,
            examples: vec![
                "https://example.com".into(),
                "https://google.com".into(),
                "https://thiswebsitedoesnotexist12345.com".into(),
            ],
        }
    }
}

impl Config {
    /// Load the config from an explicit path, or from urlcheck.toml in the working directory
    ///
    /// An explicitly passed file must exist, while the implicit one falls back to defaults.
    pub fn load(path: Option<&Path>) -> eyre::Result<Self> {
        let file = match path {
            Some(path) => Some(Self::read(path)?),
            None => {
                let path = PathBuf::from(CONFIG_FILE_NAME);

                if path.exists() {
                    Some(Self::read(&path)?)
                } else {
                    log::info!("{CONFIG_FILE_NAME} not found, using defaults");
                    None
                }
            }
        };

        Self::resolve(file.unwrap_or_default(), std::env::var(API_BASE_ENV).ok())
    }

    /// Parse the config from a TOML string, without looking at the environment
    pub fn from_toml(toml_string: &str) -> eyre::Result<Self> {
        let file: ConfigFile = toml::from_str(toml_string).wrap_err(Error::new(
            "Failed to parse config",
            Some("Check the keys and values in urlcheck.toml."),
        ))?;

        Self::resolve(file, None)
    }

    fn read(path: &Path) -> eyre::Result<ConfigFile> {
        log::info!("Reading config from {}", path.display());

        let toml_string = fs::read_to_string(path).wrap_err(Error::new(
            &format!("Failed to read config file {}", path.display()),
            Some("Make sure the file exists and is readable."),
        ))?;

        toml::from_str(&toml_string).wrap_err(Error::new(
            &format!("Failed to parse {}", path.display()),
            Some("Check the keys and values in the config file."),
        ))
    }

    /// Fill in defaults and validate values
    fn resolve(file: ConfigFile, api_base_override: Option<String>) -> eyre::Result<Self> {
        let defaults = Config::default();

        let api_base = api_base_override
            .filter(|base| !base.trim().is_empty())
            .or(file.api_base)
            .unwrap_or(defaults.api_base);

        url::Url::parse(&api_base).wrap_err(Error::new(
            &format!("Invalid api_base: {api_base}"),
            Some("Use an absolute URL, e.g. http://localhost:8080"),
        ))?;

        let timeout = match file.timeout {
            Some(timeout) => Some(humantime::parse_duration(&timeout).wrap_err(Error::new(
                &format!("Invalid timeout: {timeout}"),
                Some("Use a duration like \"30s\" or \"1m 30s\"."),
            ))?),
            None => None,
        };

        let success_marker = file.success_marker.unwrap_or(defaults.success_marker);

        if success_marker.is_empty() {
            return Err(Error::new(
                "Invalid success_marker",
                Some("The marker can not be empty, every message would be a success."),
            )
            .into());
        }

        Ok(Config {
            api_base: api_base.trim_end_matches('/').to_string(),
            check_path: Self::leading_slash(file.check_path.unwrap_or(defaults.check_path)),
            health_path: Self::leading_slash(file.health_path.unwrap_or(defaults.health_path)),
            success_marker,
            timeout,
            examples: file.examples.unwrap_or(defaults.examples),
        })
    }

    fn leading_slash(path: String) -> String {
        if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        }
    }

    /// Full URL of the check endpoint
    pub fn check_url(&self) -> String {
        format!("{}{}", self.api_base, self.check_path)
    }

    /// Full URL of the health endpoint
    pub fn health_url(&self) -> String {
        format!("{}{}", self.api_base, self.health_path)
    }

    /// Find an example by its 1-based position in the list
    pub fn example(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|index| self.examples.get(index))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn reads_all_keys() {
        let config = Config::from_toml(
            r#"
            api_base = "https://validator.internal/"
            check_path = "v2/check"
            health_path = "/v2/health"
            success_marker = "VALID"
            timeout = "1m 30s"
            examples = ["https://rust-lang.org"]
            "#,
        )
        .unwrap();

        assert_eq!(config.api_base, "https://validator.internal");
        assert_eq!(config.check_url(), "https://validator.internal/v2/check");
        assert_eq!(config.health_url(), "https://validator.internal/v2/health");
        assert_eq!(config.success_marker, "VALID");
        assert_eq!(config.timeout, Some(Duration::from_secs(90)));
        assert_eq!(config.examples, vec!["https://rust-lang.org".to_string()]);
    }

    #[rstest]
    #[case::bad_base(r#"api_base = "not a url""#, "Invalid api_base: not a url")]
    #[case::bad_timeout(r#"timeout = "soon""#, "Invalid timeout: soon")]
    #[case::empty_marker(r#"success_marker = """#, "Invalid success_marker")]
    #[case::unknown_key(r#"retries = 3"#, "Failed to parse config")]
    fn rejects_invalid_values(#[case] toml_string: &str, #[case] message: &str) {
        let error = Error::from(Config::from_toml(toml_string).unwrap_err());
        assert_eq!(error.message(), message);
    }

    #[test]
    fn env_override_wins_over_file() {
        let file = ConfigFile {
            api_base: Some("http://from-file:8080".into()),
            ..Default::default()
        };

        let config = Config::resolve(file, Some("http://from-env:9090".into())).unwrap();
        assert_eq!(config.api_base, "http://from-env:9090");
    }

    #[test]
    fn blank_env_override_is_ignored() {
        let config = Config::resolve(ConfigFile::default(), Some("  ".into())).unwrap();
        assert_eq!(config.api_base, "http://localhost:8080");
    }

    #[test]
    fn explicit_path_must_exist() {
        let path = Path::new("/nonexistent/urlcheck.toml");
        let error = Error::from(Config::load(Some(path)).unwrap_err());
        assert!(error.message().starts_with("Failed to read config file"));
    }

    #[test]
    fn loads_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"examples = ["https://a.example", "https://b.example"]"#).unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.example(2), Some("https://b.example"));
    }

    #[rstest]
    #[case(0, None)]
    #[case(1, Some("https://example.com"))]
    #[case(3, Some("https://thiswebsitedoesnotexist12345.com"))]
    #[case(4, None)]
    fn finds_example_by_number(#[case] number: usize, #[case] expected: Option<&str>) {
        assert_eq!(Config::default().example(number), expected);
    }
}
