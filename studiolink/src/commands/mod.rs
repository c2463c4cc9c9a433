mod args;
mod check;
mod completions;
mod html;
mod image;
mod launch;
mod url;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use html::HtmlCommand;
use image::ImageCommand;
use launch::LaunchCommand;
use url::UrlCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for studiolink_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "studiolink")]
#[command(version)]
#[command(about = "Firebase Studio links, buttons and ad-hoc workspaces")]
pub(crate) struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Url(cmd) => cmd.run(),
            Commands::Image(cmd) => cmd.run(),
            Commands::Html(cmd) => cmd.run(),
            Commands::Launch(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the "Open in Firebase Studio" URL for a destination
    Url(UrlCommand),

    /// Print the CDN URL of a button image
    Image(ImageCommand),

    /// Print an HTML (or Markdown) button linking to a destination
    Html(HtmlCommand),

    /// Write a page that opens a directory as an ad-hoc workspace
    Launch(LaunchCommand),

    /// Validate studio.toml
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_destination_flags_conflict() {
        let result = Cli::try_parse_from(["studiolink", "url", "--git", "a", "--prompt", "b"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_button_flags_parse() {
        let cli = Cli::try_parse_from([
            "studiolink",
            "image",
            "--label",
            "try",
            "--color",
            "bright",
            "--size",
            "20",
            "--format",
            "png",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Image(_)));
    }

    #[test]
    fn test_invalid_size_rejected() {
        assert!(Cli::try_parse_from(["studiolink", "image", "--size", "48"]).is_err());
    }
}
