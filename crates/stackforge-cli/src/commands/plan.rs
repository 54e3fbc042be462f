//! `sforge plan` — Display the resolved service startup order.

use std::path::PathBuf;

use clap::Args;
use stackforge_common::constants::DEFAULT_MANIFEST_FILE;
use stackforge_compose::service::{ImageSource, ServiceRef};

use crate::manifest::Manifest;
use crate::output::count_noun;

/// Arguments for the `plan` subcommand.
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Path to the manifest file.
    #[arg(default_value = DEFAULT_MANIFEST_FILE)]
    pub file: PathBuf,
}

/// Executes the `plan` command.
///
/// Resolves dependency references, topologically orders the services,
/// and displays the startup plan.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded, the configuration
/// is invalid, or the dependency edges form a cycle.
pub fn execute(args: PlanArgs) -> anyhow::Result<()> {
    let builder = Manifest::load(&args.file)?.into_builder()?;
    let order = builder.startup_order()?;

    println!("Startup Plan for: {}", args.file.display());
    println!(
        "\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"
    );
    println!();

    for name in &order {
        println!("  + {name}");
        if let Some(service) = builder.find(name).map(|id| builder.service(id)) {
            match service.image() {
                ImageSource::Image(image) => println!("      image: {image}"),
                ImageSource::Build(build) => println!("      build: {}", build.context),
            }
        }
    }

    println!();
    println!("  {} will be started.", count_noun(order.len(), "service"));

    let edges: Vec<(String, String)> = builder
        .iter()
        .flat_map(|service| {
            service.depends_on().iter().map(|reference| {
                let target = match reference {
                    ServiceRef::Name(name) => name.clone(),
                    ServiceRef::Handle(id) => builder.service(*id).name().to_string(),
                };
                (service.name().to_string(), target)
            })
        })
        .collect();

    if !edges.is_empty() {
        println!();
        println!("  Dependencies:");
        for (from, to) in &edges {
            println!("    {from} -> {to}");
        }
    }

    Ok(())
}
