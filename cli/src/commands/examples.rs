use crate::runner::{Options, Runnable, Runner};
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use urlcheck::error::Error;

#[derive(Tabled, Clone)]
struct ExampleRow {
    #[tabled(rename = "#")]
    number: usize,
    #[tabled(rename = "Example")]
    url: String,
}

#[derive(clap::Args, Clone)]
pub(crate) struct ExamplesCommand {}

impl Runnable for ExamplesCommand {
    fn runner(&self, options: &Options) -> impl Runner {
        ExamplesRunner {
            options: options.clone(),
        }
    }
}

struct ExamplesRunner {
    options: Options,
}

impl Runner for ExamplesRunner {
    fn options(&self) -> &Options {
        &self.options
    }

    async fn run(&mut self) -> Result<(), Error> {
        let config = self.config()?;
        let writer = self.writer();

        if writer.is_structured() {
            return writer.json(json!(config.examples));
        }

        if config.examples.is_empty() {
            return writer.text(&format!(
                "{}\n",
                console::style("No examples configured").dim()
            ));
        }

        let rows = config
            .examples
            .iter()
            .enumerate()
            .map(|(index, url)| ExampleRow {
                number: index + 1,
                url: url.clone(),
            })
            .collect::<Vec<_>>();

        writer.text(&format!("{}\n", Table::new(rows).with(Style::rounded())))
    }
}
