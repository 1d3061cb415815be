//! Appforge CLI - quick project creation with pre-defined configuration

use anyhow::Result;
use appforge_core::tui::CreateArgs;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "appforge")]
#[command(about = "Quick creation of frontend projects with pre-defined configuration")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Next.js project
    CreateNextApp(CliCreateArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Name of the project (slugified)
    #[arg(short, long, default_value = "next-app")]
    pub name: String,

    /// Destination the project directory is created under
    #[arg(short, long, default_value = ".")]
    pub dest: PathBuf,

    /// Create the project with the full pre-defined feature sequence
    #[arg(short, long)]
    pub auto: bool,

    /// Feature short-codes:
    ///  e: eslint import helpers
    ///  s: styled-components
    ///  b: storybook
    ///  p: plop generator
    ///  m: material ui
    #[arg(short, long, default_value = "", verbatim_doc_comment)]
    pub options: String,

    /// Skip package-manager and generator command execution
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            name: args.name,
            dest: args.dest,
            auto: args.auto,
            options: args.options,
            skip_install: args.skip_install,
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    match args.command {
        Some(Command::CreateNextApp(create_args)) => {
            let result = appforge_core::tui::run(create_args.into()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        None => {
            // No recognized input: show help and exit non-zero
            Args::command().print_help()?;
            println!();
            std::process::exit(1);
        }
    }
}
