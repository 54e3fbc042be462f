//! CLI command definitions and dispatch.

pub mod check;
pub mod plan;
pub mod synth;

use clap::{Parser, Subcommand};

/// stackforge — Synthesize validated docker-compose files.
#[derive(Parser, Debug)]
#[command(name = "sforge", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Synthesize the compose file from a manifest.
    Synth(synth::SynthArgs),
    /// Validate a manifest without writing anything.
    Check(check::CheckArgs),
    /// Display the resolved service startup order.
    Plan(plan::PlanArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Synth(args) => synth::execute(args),
        Command::Check(args) => check::execute(args),
        Command::Plan(args) => plan::execute(args),
    }
}
