//! `sforge synth` — Synthesize the compose file from a manifest.

use std::path::PathBuf;

use clap::Args;
use stackforge_common::constants::DEFAULT_MANIFEST_FILE;

use crate::manifest::Manifest;
use crate::output::count_noun;

/// Arguments for the `synth` subcommand.
#[derive(Args, Debug)]
pub struct SynthArgs {
    /// Path to the manifest file.
    #[arg(short, long, default_value = DEFAULT_MANIFEST_FILE)]
    pub file: PathBuf,

    /// Directory the compose file is written into.
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Override the manifest's output-name suffix.
    #[arg(long)]
    pub suffix: Option<String>,

    /// Print the document to stdout instead of writing a file.
    #[arg(long)]
    pub stdout: bool,
}

/// Executes the `synth` command.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded, the configuration
/// is invalid, or the output file cannot be written.
pub fn execute(args: SynthArgs) -> anyhow::Result<()> {
    tracing::info!(path = %args.file.display(), "synthesizing compose file");

    let mut builder = Manifest::load(&args.file)?.into_builder()?;
    if let Some(suffix) = args.suffix {
        builder = builder.with_name_suffix(suffix);
    }

    let document = builder.synthesize()?;
    let encoded = serde_yaml::to_string(&document)?;

    if args.stdout {
        print!("{encoded}");
        return Ok(());
    }

    let out_path = args.output_dir.join(builder.output_file_name());
    std::fs::write(&out_path, &encoded)?;
    println!(
        "Synthesized {} -> {}",
        count_noun(document.services.len(), "service"),
        out_path.display()
    );
    Ok(())
}
