use crate::runner::{Options, Runnable, Runner};
use urlcheck::config::Config;
use urlcheck::error::Error;

#[derive(clap::Args, Clone)]
pub(crate) struct ExampleCommand {
    /// Number of the example (see `urlcheck examples`), or the example text itself
    #[arg()]
    example: String,
}

impl ExampleCommand {
    /// Resolve a number into the example it points at, anything else is taken literally
    fn text<'a>(&'a self, config: &'a Config) -> Option<&'a str> {
        match self.example.trim().parse::<usize>() {
            Ok(number) => config.example(number),
            Err(_) => Some(self.example.as_str()),
        }
    }
}

impl Runnable for ExampleCommand {
    fn runner(&self, options: &Options) -> impl Runner {
        ExampleRunner {
            command: self.clone(),
            options: options.clone(),
        }
    }
}

struct ExampleRunner {
    command: ExampleCommand,
    options: Options,
}

impl Runner for ExampleRunner {
    fn options(&self) -> &Options {
        &self.options
    }

    async fn run(&mut self) -> Result<(), Error> {
        let config = self.config()?;

        let Some(text) = self.command.text(&config) else {
            return Err(self.error(
                Some(&format!("Example {} not found", self.command.example)),
                Some("Run `urlcheck examples` to see the list."),
                None,
            ));
        };

        let controller = self.controller()?;

        if controller.trigger_from_example(text).await.is_none() {
            log::warn!("Nothing to check, the example is blank");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", Some("https://example.com"))]
    #[case(" 2 ", Some("https://google.com"))]
    #[case("9", None)]
    #[case("0", None)]
    #[case("https://rust-lang.org", Some("https://rust-lang.org"))]
    fn resolves_example(#[case] example: &str, #[case] expected: Option<&str>) {
        let command = ExampleCommand {
            example: example.into(),
        };

        assert_eq!(command.text(&Config::default()), expected);
    }
}
