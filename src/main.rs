use anyhow::Result;
use clap::{Parser, Subcommand};
use devkit::ColorMode;
use devkit::areas::toolbox::Toolbox;
use devkit::areas::workspace::InputSource;
use devkit::artifacts::core::{PagerWriter, should_page};
use devkit::artifacts::diff::hunk::DEFAULT_CONTEXT;
use devkit::commands::diff::DiffOptions;
use is_terminal::IsTerminal;
use minus::Pager;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "DEVKIT_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser)]
#[command(
    name = "devkit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Developer micro-utilities for the terminal",
    long_about = "A collection of small, stateless developer utilities. \
    Each tool is a pure transformation over its inputs, rendered for the terminal.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        value_enum,
        global = true,
        default_value_t = ColorMode::Auto,
        help = "When to colour the output"
    )]
    color: ColorMode,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Compare two texts line by line",
        long_about = "This command compares two texts line by line using a longest common subsequence \
        and prints every line prefixed with '+ ' (added), '- ' (removed) or two spaces (unchanged). \
        Either side can be read from stdin by passing '-'."
    )]
    Diff {
        #[arg(index = 1, help = "The original text file, or '-' for stdin")]
        original: PathBuf,
        #[arg(index = 2, help = "The modified text file, or '-' for stdin")]
        modified: PathBuf,
        #[arg(
            short = 'U',
            long,
            value_name = "LINES",
            help = "Show only changed hunks with this many lines of context"
        )]
        context: Option<usize>,
        #[arg(
            short = 'u',
            long,
            conflicts_with = "context",
            help = "Show only changed hunks with the default amount of context"
        )]
        unified: bool,
        #[arg(long, help = "Print a summary of additions and removals")]
        stat: bool,
        #[arg(short = 'R', long, help = "Swap the two inputs")]
        reverse: bool,
        #[arg(long, help = "Label used for the original text in hunk headers; it stays with that text under --reverse")]
        label_a: Option<String>,
        #[arg(long, help = "Label used for the modified text in hunk headers; it stays with that text under --reverse")]
        label_b: Option<String>,
    },
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn init_color(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {
            if !std::io::stdout().is_terminal() {
                colored::control::set_override(false);
            }
        }
    }
}

fn with_output<F>(run: F) -> Result<()>
where
    F: FnOnce(Box<dyn std::io::Write>) -> Result<()>,
{
    if !should_page() {
        return run(Box::new(std::io::stdout()));
    }

    let pager = Pager::new();
    run(Box::new(PagerWriter::new(pager.clone())))?;
    minus::page_all(pager)?;

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();
    init_color(cli.color);

    let pwd = std::env::current_dir()?;

    match cli.command {
        Commands::Diff {
            original,
            modified,
            context,
            unified,
            stat,
            reverse,
            label_a,
            label_b,
        } => {
            let context = context.or(unified.then_some(DEFAULT_CONTEXT));
            let opts = DiffOptions::new(context, stat, reverse, label_a, label_b);
            tracing::debug!(?opts, "running diff");

            with_output(|writer| {
                let toolbox = Toolbox::new(&pwd.to_string_lossy(), writer)?;
                toolbox.diff(
                    &InputSource::from_arg(&original),
                    &InputSource::from_arg(&modified),
                    &opts,
                )
            })?
        }
    }

    Ok(())
}
