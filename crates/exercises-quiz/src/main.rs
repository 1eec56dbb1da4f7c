//! Quiz game entry point.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use exercises_core::clock::SystemClock;
use exercises_core::rng::SeededRng;
use exercises_quiz::application::game::play;
use exercises_quiz::config::{QuizArgs, QuizConfig};
use exercises_quiz::console::{StdinLines, report_fatal};
use exercises_quiz::error::QuizError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr so they never interleave with prompts.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = QuizArgs::parse();
    let mut stdout = io::stdout();

    match run(args, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // The red console line is the user-facing report.
            tracing::debug!(error = ?err, "quiz aborted");
            let _ = report_fatal(&mut stdout, &err);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: QuizArgs, out: &mut io::Stdout) -> Result<(), QuizError> {
    writeln!(out, "Quiz Game Start!")?;

    let config = QuizConfig::try_from(args)?;
    let mut rng = SeededRng::from_clock(&SystemClock);

    play(&config, StdinLines::new(), &mut rng, out).await?;
    Ok(())
}
