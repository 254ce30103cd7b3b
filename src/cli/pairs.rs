use clap::Args;

use crate::catalog::store::BenchmarkCatalog;
use crate::cli::{warn_if_no_abilities, AbilityArgs, CatalogSourceArgs, OutputFormat};
use crate::core::types::{AbilitySelection, ModelPair};
use crate::matching::engine::{PairStrategy, SelectionEngine};

#[derive(Args)]
pub struct PairsArgs {
    #[command(flatten)]
    pub abilities: AbilityArgs,

    /// Only run one strategy (all three by default)
    #[arg(short, long, value_enum)]
    pub strategy: Option<PairStrategy>,

    #[command(flatten)]
    pub source: CatalogSourceArgs,
}

/// Execute pairs subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or output fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: PairsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = args.source.load()?;
    let selection = args.abilities.selection();

    if verbose {
        eprintln!(
            "Loaded catalog with {} models; weighing {} ({} dimensions)",
            catalog.len(),
            selection,
            selection.dimensions().len()
        );
    }
    warn_if_no_abilities(&selection);

    if catalog.len() < 2 {
        eprintln!("Warning: Catalog has fewer than two models, pairs will be incomplete.");
    }

    let strategies: Vec<PairStrategy> = match args.strategy {
        Some(strategy) => vec![strategy],
        None => PairStrategy::ALL.to_vec(),
    };

    let engine = SelectionEngine::new(&catalog);
    let results: Vec<(PairStrategy, ModelPair)> = strategies
        .into_iter()
        .map(|strategy| (strategy, engine.select(strategy, &selection)))
        .collect();

    match format {
        OutputFormat::Text => print_text_results(&results, &selection, &catalog),
        OutputFormat::Json => print_json_results(&results, &selection)?,
        OutputFormat::Tsv => print_tsv_results(&results),
    }

    Ok(())
}

fn print_text_results(
    results: &[(PairStrategy, ModelPair)],
    selection: &AbilitySelection,
    catalog: &BenchmarkCatalog,
) {
    println!("Model Pairs");
    println!("{}", "=".repeat(60));
    println!("Abilities: {selection}");
    println!("Models considered: {}", catalog.len());
    println!();

    for (strategy, pair) in results {
        let second = if pair.second.is_empty() {
            "(no suitable pair found)"
        } else {
            pair.second.as_str()
        };
        println!("{:<22} {:<24} {}", strategy.to_string(), pair.first, second);
    }
}

fn print_json_results(
    results: &[(PairStrategy, ModelPair)],
    selection: &AbilitySelection,
) -> anyhow::Result<()> {
    let pairs: Vec<serde_json::Value> = results
        .iter()
        .map(|(strategy, pair)| {
            serde_json::json!({
                "strategy": strategy,
                "first": pair.first,
                "second": pair.second,
            })
        })
        .collect();

    let output = serde_json::json!({
        "selection": selection,
        "dimensions": selection.dimensions().iter().map(ToString::to_string).collect::<Vec<_>>(),
        "pairs": pairs,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(results: &[(PairStrategy, ModelPair)]) {
    println!("strategy\tfirst\tsecond");
    for (strategy, pair) in results {
        println!("{strategy}\t{}\t{}", pair.first, pair.second);
    }
}
