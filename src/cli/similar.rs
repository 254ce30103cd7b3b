use clap::Args;

use crate::cli::{warn_if_no_abilities, AbilityArgs, CatalogSourceArgs, OutputFormat};
use crate::matching::engine::SelectionEngine;

#[derive(Args)]
pub struct SimilarArgs {
    /// Model to find a match for
    #[arg(required = true)]
    pub model: String,

    #[command(flatten)]
    pub abilities: AbilityArgs,

    #[command(flatten)]
    pub source: CatalogSourceArgs,
}

/// Execute similar subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the model is not in it.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SimilarArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = args.source.load()?;
    let selection = args.abilities.selection();

    if verbose {
        eprintln!(
            "Searching {} models for the closest match to {} on {selection}",
            catalog.len(),
            args.model
        );
    }
    warn_if_no_abilities(&selection);

    let matched = SelectionEngine::new(&catalog).most_similar_to(&args.model, &selection)?;

    match format {
        OutputFormat::Text => {
            if matched.is_empty() {
                println!("No other model in catalog to pair with {}", args.model);
            } else {
                println!("Closest match to {}: {matched}", args.model);
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "model": args.model,
                "selection": selection,
                "match": matched,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("model\tmatch");
            println!("{}\t{matched}", args.model);
        }
    }

    Ok(())
}
