use clap::Args;

use crate::cli::{warn_if_no_abilities, AbilityArgs, CatalogSourceArgs, OutputFormat};
use crate::matching::engine::SelectionEngine;
use crate::matching::ranking::RankedModel;

#[derive(Args)]
pub struct RankArgs {
    #[command(flatten)]
    pub abilities: AbilityArgs,

    /// Number of models to show (all by default)
    #[arg(short = 'n', long)]
    pub max_models: Option<usize>,

    #[command(flatten)]
    pub source: CatalogSourceArgs,
}

/// Execute rank subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or output fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RankArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = args.source.load()?;
    let selection = args.abilities.selection();

    if verbose {
        eprintln!("Ranking {} models on {selection}", catalog.len());
    }
    warn_if_no_abilities(&selection);

    let mut ranking = SelectionEngine::new(&catalog).ranking(&selection);
    if let Some(limit) = args.max_models {
        ranking.truncate(limit);
    }

    match format {
        OutputFormat::Text => print_text_ranking(&ranking),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ranking)?),
        OutputFormat::Tsv => print_tsv_ranking(&ranking),
    }

    Ok(())
}

fn print_text_ranking(ranking: &[RankedModel]) {
    if ranking.is_empty() {
        println!("No models in catalog.");
        return;
    }

    println!("{:>4}  {:<24} {:>10}", "#", "Model", "Sum");
    println!("{}", "-".repeat(40));
    for (i, entry) in ranking.iter().enumerate() {
        println!("{:>4}  {:<24} {:>10.2}", i + 1, entry.model, entry.sum);
    }
}

fn print_tsv_ranking(ranking: &[RankedModel]) {
    println!("rank\tmodel\tsum");
    for (i, entry) in ranking.iter().enumerate() {
        println!("{}\t{}\t{:.4}", i + 1, entry.model, entry.sum);
    }
}
