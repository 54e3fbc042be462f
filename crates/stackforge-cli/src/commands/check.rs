//! `sforge check` — Validate a manifest without writing anything.

use std::path::PathBuf;

use clap::Args;
use stackforge_common::constants::DEFAULT_MANIFEST_FILE;

use crate::manifest::Manifest;
use crate::output::count_noun;

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the manifest file.
    #[arg(default_value = DEFAULT_MANIFEST_FILE)]
    pub file: PathBuf,
}

/// Executes the `check` command.
///
/// Runs the full synthesis pass and discards the document, so every
/// declaration- and synthesis-time validation fires.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded or the configuration
/// is invalid.
pub fn execute(args: CheckArgs) -> anyhow::Result<()> {
    let builder = Manifest::load(&args.file)?.into_builder()?;
    let document = builder.synthesize()?;

    println!("{}: OK", args.file.display());
    println!("  {}", count_noun(document.services.len(), "service"));
    if !document.volumes.is_empty() {
        println!("  {}", count_noun(document.volumes.len(), "named volume"));
    }
    if !document.networks.is_empty() {
        println!("  {}", count_noun(document.networks.len(), "network"));
    }
    println!("  output file: {}", builder.output_file_name());
    Ok(())
}
