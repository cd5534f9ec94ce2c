use crate::runner::{Options, Runnable, Runner};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use urlcheck::error::Error;

/// One line typed into the form
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    /// Anything that is not a command is a URL
    Submit(&'a str),

    /// `:N` picks example N
    Example(usize),

    /// `:examples`
    List,

    /// `:q`, `:quit`
    Quit,

    Unknown(&'a str),
}

impl<'a> Input<'a> {
    fn parse(line: &'a str) -> Self {
        let Some(command) = line.trim().strip_prefix(':') else {
            return Input::Submit(line);
        };

        match command.trim() {
            "q" | "quit" => Input::Quit,
            "examples" | "ls" => Input::List,
            other => other
                .parse::<usize>()
                .map(Input::Example)
                .unwrap_or(Input::Unknown(other)),
        }
    }
}

#[derive(clap::Args, Clone)]
pub(crate) struct FormCommand {}

impl Runnable for FormCommand {
    fn runner(&self, options: &Options) -> impl Runner {
        FormRunner {
            options: options.clone(),
        }
    }
}

struct FormRunner {
    options: Options,
}

impl Runner for FormRunner {
    fn options(&self) -> &Options {
        &self.options
    }

    /// Read lines from stdin until EOF or `:q`
    ///
    /// Submissions do not wait for each other, a newer one makes older replies stale.
    async fn run(&mut self) -> Result<(), Error> {
        let config = self.config()?;
        let writer = self.writer();
        let controller = Arc::new(self.controller()?);
        let mut submissions = JoinSet::new();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        writer.text(&format!(
            "{}\n{}\n",
            console::style("Enter a URL to check").bold(),
            console::style(":N checks example N, :examples lists them, :q quits").dim()
        ))?;

        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|err| self.error(Some("Failed to read input"), None, Some(err.into())))?
        {
            let url = match Input::parse(&line) {
                Input::Quit => break,

                Input::List => {
                    for (index, example) in config.examples.iter().enumerate() {
                        writer.text(&format!("{} {example}\n", console::style(index + 1).dim()))?;
                    }

                    continue;
                }

                Input::Unknown(command) => {
                    writer.error(&format!("Unknown command :{command}\n"))?;
                    continue;
                }

                Input::Example(number) => match config.example(number) {
                    Some(example) => example.to_string(),
                    None => {
                        writer.error(&format!("Example {number} not found\n"))?;
                        continue;
                    }
                },

                Input::Submit(url) => url.to_string(),
            };

            // The next line may overwrite the input before the task runs,
            // so the task gets its own copy of the URL
            controller.set_input(&url);

            let controller = controller.clone();
            submissions.spawn(async move { controller.submit(&url).await });
        }

        while let Some(result) = submissions.join_next().await {
            if let Err(err) = result {
                log::error!("Submission task failed: {err:?}");
            }
        }

        Ok(())
    }
}
