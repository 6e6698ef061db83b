use std::path::PathBuf;
use std::process::ExitCode;

use change_column_testgen::{case, generate, GeneratorConfig, Script, ScriptTarget, FIT_WIDTHS};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "change-column-testgen")]
#[command(about = "Generates mysqltest scripts covering BINARY column resize and rename")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the full test script (preamble plus one case per fit width)
    Generate {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate the case for a single fit width, without the preamble
    Case {
        /// Fit width, the one sweep width expected to succeed
        #[arg(value_parser = clap::value_parser!(u8).range(1..))]
        width: u8,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the fit widths the full script covers, one per line
    Widths,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let config = GeneratorConfig::default();

    match cli.command {
        // A bare invocation generates the full script on stdout.
        None => write_script(&generate(&config), None),
        Some(Commands::Generate { output }) => write_script(&generate(&config), output),
        Some(Commands::Case { width, output }) => write_script(&case(&config, width), output),
        Some(Commands::Widths) => {
            for width in FIT_WIDTHS {
                println!("{width}");
            }
            ExitCode::SUCCESS
        }
    }
}

fn write_script(script: &Script, output: Option<PathBuf>) -> ExitCode {
    let target = ScriptTarget::from(output);

    match target.write(script) {
        Ok(()) => {
            if let ScriptTarget::File(path) = &target {
                eprintln!("  {} Written to {}", "OK".green().bold(), path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::from(1)
        }
    }
}

fn init_tracing() {
    let default_env_filter = EnvFilter::builder()
        .with_default_directive(tracing::level_filters::LevelFilter::WARN.into())
        .from_env_lossy();

    // Stdout carries the generated artifact; diagnostics go to stderr.
    if let Err(e) = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(default_env_filter)
        .try_init()
    {
        eprintln!("Unable to setup tracing subscriber: {e:?}");
    }
}
