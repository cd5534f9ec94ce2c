use crate::runner::{Options, Runnable, Runner};
use serde_json::json;
use urlcheck::error::Error;

#[derive(clap::Args, Clone)]
pub(crate) struct HealthCommand {}

impl Runnable for HealthCommand {
    fn runner(&self, options: &Options) -> impl Runner {
        HealthRunner {
            options: options.clone(),
        }
    }
}

struct HealthRunner {
    options: Options,
}

impl Runner for HealthRunner {
    fn options(&self) -> &Options {
        &self.options
    }

    async fn run(&mut self) -> Result<(), Error> {
        let config = self.config()?;
        let client = self.api_client(&config)?;
        let writer = self.writer();

        let response = client.health().await?;

        if writer.is_structured() {
            return writer.json(json!({
                "url": config.health_url(),
                "up": response.is_up(),
                "response": response.0,
            }));
        }

        let status = response.status().unwrap_or("unknown").to_string();

        let line = if response.is_up() {
            console::style(format!("Service is up ({status})")).green().bold()
        } else {
            console::style(format!("Service reported {status}")).red().bold()
        };

        writer.text(&format!(
            "\n{line}\n{}\n",
            console::style(config.health_url()).dim()
        ))
    }
}
