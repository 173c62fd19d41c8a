//! `launcher-icons` CLI - Generate Android and iOS launcher icons from one logo.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use launcher_icons::{Config, Generator, Platform};

/// Generate Android and iOS launcher icons from `src/assets/images/logo.jpg`.
#[derive(Parser, Debug)]
#[command(name = "launcher-icons")]
#[command(version, about, long_about = None)]
struct Args {
    /// Project root containing `src/`, `android/` and `ios/`.
    #[arg(long, default_value = ".", value_name = "DIR")]
    root: PathBuf,

    /// Only generate icons for one platform.
    #[arg(long, value_name = "PLATFORM")]
    platform: Option<Platform>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("launcher_icons={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let mut config = Config::with_root(&args.root);
    if let Some(platform) = args.platform {
        config = config.only(platform);
    }

    let generator = Generator::new(config).context("Invalid configuration")?;

    let report = generator
        .run()
        .context("Failed to generate launcher icons")?;

    let targets = match args.platform {
        Some(Platform::Android) => "Android",
        Some(Platform::Ios) => "iOS",
        None => "Android + iOS",
    };
    println!(
        "Generated {targets} launcher icons from {}",
        report.source.display()
    );

    Ok(())
}
