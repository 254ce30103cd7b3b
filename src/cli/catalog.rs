use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::cli::{CatalogSourceArgs, OutputFormat};
use crate::core::record::BenchmarkRecord;
use crate::core::types::Benchmark;
use crate::matching::engine::SelectionError;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all models and their benchmark scores
    List {
        #[command(flatten)]
        source: CatalogSourceArgs,
    },

    /// Show the benchmark scores of one model
    Show {
        /// Model name
        #[arg(required = true)]
        model: String,

        #[command(flatten)]
        source: CatalogSourceArgs,
    },

    /// Export the catalog to a JSON file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        #[command(flatten)]
        source: CatalogSourceArgs,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the model is unknown,
/// or the export cannot be written.
pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { source } => run_list(&source, format, verbose),
        CatalogCommands::Show { model, source } => run_show(&model, &source, format),
        CatalogCommands::Export { output, source } => run_export(&output, &source),
    }
}

fn run_list(source: &CatalogSourceArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = source.load()?;

    if verbose {
        eprintln!(
            "Loaded catalog with {} models ({} models on the exclusion list)",
            catalog.len(),
            source.exclusions().len()
        );
    }

    match format {
        OutputFormat::Text => {
            print!("{:<24}", "Model");
            for benchmark in Benchmark::ALL {
                print!(" {:>13}", benchmark.to_string());
            }
            println!();
            println!("{}", "-".repeat(24 + 14 * Benchmark::ALL.len()));

            for record in catalog.all() {
                print!("{:<24}", record.model.as_str());
                for benchmark in Benchmark::ALL {
                    print!(" {:>13.2}", record.scores.get(benchmark));
                }
                println!();
            }
            println!();
            println!("Total: {} models", catalog.len());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(catalog.all())?);
        }
        OutputFormat::Tsv => {
            let header: Vec<String> = Benchmark::ALL.iter().map(ToString::to_string).collect();
            println!("model\t{}", header.join("\t"));
            for record in catalog.all() {
                let values: Vec<String> = Benchmark::ALL
                    .iter()
                    .map(|b| format!("{:.4}", record.scores.get(*b)))
                    .collect();
                println!("{}\t{}", record.model, values.join("\t"));
            }
        }
    }

    Ok(())
}

fn run_show(model: &str, source: &CatalogSourceArgs, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = source.load()?;

    let record = catalog.find(model).ok_or_else(|| SelectionError::ModelNotFound {
        model: model.to_string(),
    })?;

    match format {
        OutputFormat::Text => print_record_text(record),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
        OutputFormat::Tsv => {
            println!("benchmark\tability\tscore");
            for benchmark in Benchmark::ALL {
                println!(
                    "{benchmark}\t{}\t{:.4}",
                    benchmark.ability(),
                    record.scores.get(benchmark)
                );
            }
        }
    }

    Ok(())
}

fn print_record_text(record: &BenchmarkRecord) {
    println!("Model: {}", record.model);
    println!();
    println!("{:<16} {:<24} {:>8}", "Benchmark", "Ability", "Score");
    println!("{}", "-".repeat(50));
    for benchmark in Benchmark::ALL {
        println!(
            "{:<16} {:<24} {:>8.2}",
            benchmark.to_string(),
            benchmark.ability().to_string(),
            record.scores.get(benchmark)
        );
    }
}

fn run_export(output: &Path, source: &CatalogSourceArgs) -> anyhow::Result<()> {
    let catalog = source.load()?;

    let json = catalog.to_json()?;
    std::fs::write(output, json)?;

    println!("Exported {} models to {}", catalog.len(), output.display());

    Ok(())
}
