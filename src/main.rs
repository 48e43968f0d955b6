mod prompt;
mod scaffold;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::scaffold::{Outcome, Scaffold};

/// Compose. A command line utility for making React.js components.
///
/// Compose helps you to create the structure for a React.js component,
/// following the View-Actions-index pattern.
#[derive(Parser)]
#[command(name = "compose")]
#[command(version)]
#[command(verbatim_doc_comment)]
#[command(disable_help_flag = true)]
#[command(disable_version_flag = true)]
#[command(arg_required_else_help = true)]
#[command(override_usage = "compose [OPTIONS] [DIR] <COMPONENT_NAME>")]
struct Cli {
    #[command(flatten)]
    scaffold: Scaffold,

    #[arg(
        short = 'h',
        long = "help",
        help = "Mostrar este mensaje de ayuda.",
        action = ArgAction::Help,
    )]
    help: Option<bool>,

    #[arg(
        short = 'V',
        long = "version",
        help = "Mostrar la versión.",
        action = ArgAction::Version,
    )]
    version: Option<bool>,
}

pub(crate) struct App {
    cli: Cli,
}

impl App {
    fn init() -> Self {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .init();
        Self { cli: Cli::parse() }
    }
}

fn main() -> Result<()> {
    let app = App::init();
    if let Outcome::Written(root) = app.scaffold(prompt::confirm)? {
        debug!(root = %root.display(), "component written");
    }
    Ok(())
}
