use crate::runner::{Options, Runnable, Runner};
use urlcheck::error::Error;

#[derive(clap::Args, Clone)]
pub(crate) struct CheckCommand {
    /// URL to check, surrounding whitespace is ignored
    #[arg()]
    url: String,
}

impl Runnable for CheckCommand {
    fn runner(&self, options: &Options) -> impl Runner {
        CheckRunner {
            command: self.clone(),
            options: options.clone(),
        }
    }
}

struct CheckRunner {
    command: CheckCommand,
    options: Options,
}

impl Runner for CheckRunner {
    fn options(&self) -> &Options {
        &self.options
    }

    /// Submit the URL the same way the form does
    async fn run(&mut self) -> Result<(), Error> {
        let controller = self.controller()?;
        controller.set_input(&self.command.url);

        if controller.submit_form().await.is_none() {
            log::warn!("Nothing to check, the URL is blank");
        }

        Ok(())
    }
}
