use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Args;
use rayon::prelude::*;
use serde::Serialize;

use crate::catalog::store::EntityCatalog;
use crate::cli::{load_matcher_config, ConfigPathArg, KindFilter, OutputFormat};
use crate::core::types::{EntityId, EntityKind};
use crate::extract::{CandidateSource, Extraction, Extractor};
use crate::matching::MatchStrategy;

#[derive(Args)]
pub struct ExtractArgs {
    /// Paths or titles to match. A '-' entry (or no inputs) reads one per line from stdin
    pub inputs: Vec<String>,

    /// Path to the catalog file (JSON)
    #[arg(long, required = true)]
    pub catalog: PathBuf,

    #[command(flatten)]
    pub matcher: ConfigPathArg,

    /// Entity kinds to extract
    #[arg(long, value_enum, default_value = "all")]
    pub kind: KindFilter,

    /// Only print inputs that matched at least one entity
    #[arg(long)]
    pub matched_only: bool,
}

/// Extraction result for one input line
#[derive(Debug, Serialize)]
struct InputResult {
    input: String,
    #[serde(flatten)]
    found: Extraction,
}

/// Execute extract subcommand
///
/// # Errors
///
/// Returns an error if the catalog or configuration cannot be loaded, or stdin
/// cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ExtractArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = EntityCatalog::load_from_file(&args.catalog)?;
    let config = load_matcher_config(args.matcher.config.as_deref())?;
    let strategy = MatchStrategy::from_config(&config)?;

    if verbose {
        eprintln!(
            "Loaded catalog with {} entities ({} actors, {} labels, {} studios), using {} matcher",
            catalog.len(),
            catalog.candidates(EntityKind::Actor).len(),
            catalog.candidates(EntityKind::Label).len(),
            catalog.candidates(EntityKind::Studio).len(),
            strategy.name(),
        );
    }

    if catalog.is_empty() {
        eprintln!("Warning: Catalog is empty, nothing to match against.");
    }

    let inputs = read_inputs(&args.inputs)?;
    let kinds = args.kind.kinds();
    let extractor = Extractor::new(&strategy, &catalog);

    // Each input is matched independently; collect keeps input order
    let results: Vec<InputResult> = inputs
        .par_iter()
        .map(|input| InputResult {
            input: input.clone(),
            found: extract_kinds(&extractor, &kinds, input),
        })
        .filter(|r| !args.matched_only || !r.found.is_empty())
        .collect();

    if verbose {
        let matched = results.iter().filter(|r| !r.found.is_empty()).count();
        eprintln!("Matched {matched} of {} inputs", inputs.len());
    }

    match format {
        OutputFormat::Text => print_text_results(&results, &kinds, &catalog),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Tsv => print_tsv_results(&results, &kinds, &catalog),
    }

    Ok(())
}

fn extract_kinds(
    extractor: &Extractor<'_, EntityCatalog>,
    kinds: &[EntityKind],
    input: &str,
) -> Extraction {
    let mut found = Extraction::default();
    for &kind in kinds {
        let ids = extractor.extract(kind, input);
        match kind {
            EntityKind::Actor => found.actors = ids,
            EntityKind::Label => found.labels = ids,
            EntityKind::Studio => found.studios = ids,
        }
    }
    found
}

/// Positional inputs with the stdin lines spliced in where `-` appears.
///
/// No inputs at all means stdin only. Stdin is read once, at the first `-`.
fn read_inputs(args: &[String]) -> anyhow::Result<Vec<String>> {
    if args.is_empty() {
        return read_lines(io::stdin().lock());
    }

    let mut inputs = Vec::with_capacity(args.len());
    let mut stdin_read = false;
    for arg in args {
        if arg != "-" {
            inputs.push(arg.clone());
        } else if !stdin_read {
            inputs.extend(read_lines(io::stdin().lock())?);
            stdin_read = true;
        }
    }
    Ok(inputs)
}

fn read_lines<R: BufRead>(reader: R) -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}

fn display_name<'a>(catalog: &'a EntityCatalog, kind: EntityKind, id: &EntityId) -> &'a str {
    catalog.get(kind, id).map_or("", |item| item.name.as_str())
}

fn print_text_results(results: &[InputResult], kinds: &[EntityKind], catalog: &EntityCatalog) {
    for result in results {
        println!("{}", result.input);

        if result.found.is_empty() {
            println!("  (no matches)");
            continue;
        }

        for &kind in kinds {
            let ids = result.found.get(kind);
            if ids.is_empty() {
                continue;
            }
            let names: Vec<String> = ids
                .iter()
                .map(|id| format!("{} ({id})", display_name(catalog, kind, id)))
                .collect();
            println!("  {:<8} {}", format!("{}:", kind.plural()), names.join(", "));
        }
    }
}

fn print_tsv_results(results: &[InputResult], kinds: &[EntityKind], catalog: &EntityCatalog) {
    println!("input\tkind\trank\tid\tname");
    for result in results {
        for &kind in kinds {
            for (rank, id) in result.found.get(kind).iter().enumerate() {
                println!(
                    "{}\t{kind}\t{}\t{id}\t{}",
                    result.input,
                    rank + 1,
                    display_name(catalog, kind, id)
                );
            }
        }
    }
}
