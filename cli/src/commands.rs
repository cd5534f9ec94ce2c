pub mod check;
pub mod example;
pub mod examples;
pub mod form;
pub mod health;
use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Check a URL with the validation service
    Check(check::CheckCommand),

    /// Check one of the example URLs
    Example(example::ExampleCommand),

    /// List the example URLs
    Examples(examples::ExamplesCommand),

    /// Interactive form: every line read from stdin is submitted
    Form(form::FormCommand),

    /// Check whether the validation service is up
    Health(health::HealthCommand),
}
