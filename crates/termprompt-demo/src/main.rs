//! Interactive showcase for the termprompt widgets.
//!
//! The terminal itself is the UI, so logs go to a file instead of stderr.
//! Tail it from another terminal while driving the widgets:
//!
//! ```text
//! termprompt-demo input
//! termprompt-demo confirm
//! tail -f termprompt-demo.log
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use termprompt::prelude::*;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "termprompt-demo", about = "Interactive demo for the termprompt widgets")]
struct Cli {
    /// File the demo logs to.
    #[arg(long, default_value = "termprompt-demo.log")]
    log_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read two values from stacked input fields.
    Input {
        /// Characters the fields accept.
        #[arg(long, default_value = "0123456789")]
        allowed: String,
        /// Number of characters per field.
        #[arg(long, default_value_t = 10)]
        length: u16,
    },
    /// Show a scrollable confirmation dialog.
    Confirm {
        /// Dialog body text; defaults to one long enough to scroll.
        #[arg(long)]
        text: Option<String>,
    },
}

fn init_logging(path: &Path) -> anyhow::Result<WorkerGuard> {
    let file =
        File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .init();
    Ok(guard)
}

fn input_scene(allowed: &str, length: u16) -> anyhow::Result<()> {
    let session = TerminalSession::begin()?;
    let mut screen = CrosstermScreen::new()?;
    let root = Region::from_size(screen.size());

    let first_config = FieldConfig::builder()
        .rect(Rect::new(5, 5, 20, 10))
        .title("Ch:1 PH:L1")
        .label("Phi")
        .allowed(allowed.chars())
        .field_length(length)
        .build()?;
    let mut first = InputField::open(first_config, &mut screen, &root)?;
    let phi = first.read_input(&mut screen)?;

    let below = first.region().rect().bottom();
    let second_config = FieldConfig::builder()
        .rect(Rect::new(5, below, 20, 10))
        .label("Gain")
        .allowed(allowed.chars())
        .field_length(length)
        .build()?;
    let mut second = InputField::open(second_config, &mut screen, &root)?;
    let gain = second.read_input(&mut screen)?;

    session.end()?;
    info!(%phi, %gain, "fields submitted");
    println!("phi: {phi}");
    println!("gain: {gain}");
    Ok(())
}

fn confirm_scene(text: Option<String>) -> anyhow::Result<()> {
    let body = text.unwrap_or_else(default_body);
    let session = TerminalSession::begin()?;
    let mut screen = CrosstermScreen::new()?;

    let config = DialogConfig::builder()
        .rect(Rect::new(10, 2, 60, 20))
        .body(body)
        .build()?;
    let mut dialog = ConfirmDialog::open(config, &mut screen)?;
    let accepted = dialog.run(&mut screen)?;
    dialog.close(&mut screen)?;

    session.end()?;
    info!(accepted, "dialog answered");
    println!("accepted: {accepted}");
    Ok(())
}

fn default_body() -> String {
    "The measurement run will overwrite the stored calibration tables. ".repeat(16)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(&cli.log_file)?;
    info!("demo starting");
    match cli.command {
        Command::Input { allowed, length } => input_scene(&allowed, length),
        Command::Confirm { text } => confirm_scene(text),
    }
}
