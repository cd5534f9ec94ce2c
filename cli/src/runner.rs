use std::error::Error as StdError;
use std::path::PathBuf;
use urlcheck::api::client::Client;
use urlcheck::config::Config;
use urlcheck::controller::FormController;
use urlcheck::error::Error;
use urlcheck::view::TerminalView;
use urlcheck::writer::Writer;

/// Options shared by all commands
#[derive(clap::Args, Clone, Debug, Default)]
pub(crate) struct Options {
    /// Path to the config file, urlcheck.toml in the working directory by default
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Print JSON lines instead of human readable text
    #[arg(long, global = true)]
    pub(crate) json: bool,

    /// Show logs (same as RUST_LOG=info)
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,
}

pub(crate) trait Runner {
    fn options(&self) -> &Options;

    fn writer(&self) -> Writer {
        Writer::new(self.options().json)
    }

    /// Configuration of the front end
    fn config(&self) -> Result<Config, Error> {
        Ok(Config::load(self.options().config.as_deref())?)
    }

    /// Construct the API client instance
    fn api_client(&self, config: &Config) -> Result<Client, Error> {
        Client::new(config).map_err(|err| {
            self.error(
                Some("Failed to set up HTTP client"),
                Some("Check the TLS setup of the system."),
                Some(err.into()),
            )
        })
    }

    /// The form bound to the service and rendering into the terminal
    fn controller(&self) -> Result<FormController<Client, TerminalView>, Error> {
        let config = self.config()?;
        let client = self.api_client(&config)?;

        Ok(FormController::new(
            client,
            TerminalView::new(self.writer()),
            &config.success_marker,
        ))
    }

    /// Run the command
    ///
    /// Returns an error shown to the user in case of failure
    async fn run(&mut self) -> Result<(), Error>;

    /// Construct an error shown to the user
    fn error(
        &self,
        title: Option<&str>,
        description: Option<&str>,
        origin: Option<Box<dyn StdError + Send + Sync>>,
    ) -> Error {
        if let Some(origin) = origin {
            log::error!("{origin:?}");
        }

        if let Some(title) = title {
            Error::new(title, description)
        } else {
            Error::new(
                "Failed to run the command",
                Some("Run again with --verbose to see the logs."),
            )
        }
    }
}

/// Return a runner for a command
pub(crate) trait Runnable {
    fn runner(&self, options: &Options) -> impl Runner;
}
