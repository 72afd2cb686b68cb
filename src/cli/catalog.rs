use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::catalog::store::EntityCatalog;
use crate::cli::{KindFilter, OutputFormat};
use crate::core::types::{EntityId, EntityKind};

#[derive(Args)]
pub struct CatalogArgs {
    /// Path to the catalog file (JSON)
    #[arg(long, required = true)]
    pub catalog: PathBuf,

    /// Entity kinds to list
    #[arg(long, value_enum, default_value = "all")]
    pub kind: KindFilter,
}

/// One catalog entry as printed by the catalog command
#[derive(Debug, Serialize)]
struct EntityRow<'a> {
    kind: EntityKind,
    id: &'a EntityId,
    name: &'a str,
    aliases: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    ancestors: Vec<&'a EntityId>,
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = EntityCatalog::load_from_file(&args.catalog)?;

    if verbose {
        let patterns = EntityKind::ALL
            .iter()
            .flat_map(|&kind| catalog.items(kind))
            .flat_map(|item| &item.aliases)
            .filter(|alias| alias.is_pattern())
            .count();
        eprintln!(
            "Loaded catalog with {} entities, {} regex aliases and {} studio links",
            catalog.len(),
            patterns,
            catalog.hierarchy().len()
        );
    }

    let kinds = args.kind.kinds();
    let rows = collect_rows(&catalog, &kinds);

    match format {
        OutputFormat::Text => print_text(&rows, &kinds),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Tsv => print_tsv(&rows),
    }

    Ok(())
}

fn collect_rows<'a>(catalog: &'a EntityCatalog, kinds: &[EntityKind]) -> Vec<EntityRow<'a>> {
    kinds
        .iter()
        .flat_map(|&kind| {
            catalog.items(kind).iter().map(move |item| EntityRow {
                kind,
                id: &item.id,
                name: &item.name,
                aliases: item
                    .aliases
                    .iter()
                    .map(|a| a.as_source().into_owned())
                    .collect(),
                ancestors: if kind == EntityKind::Studio {
                    catalog.hierarchy().ancestors(&item.id)
                } else {
                    Vec::new()
                },
            })
        })
        .collect()
}

fn print_text(rows: &[EntityRow<'_>], kinds: &[EntityKind]) {
    for (i, &kind) in kinds.iter().enumerate() {
        let of_kind: Vec<&EntityRow<'_>> = rows.iter().filter(|r| r.kind == kind).collect();

        if i > 0 {
            println!();
        }
        println!("{} ({})", capitalize(kind.plural()), of_kind.len());
        println!("{}", "-".repeat(40));

        for row in of_kind {
            let mut line = format!("  {:<20} {}", row.id.to_string(), row.name);
            if !row.aliases.is_empty() {
                line.push_str(&format!("  [aliases: {}]", row.aliases.join(", ")));
            }
            if !row.ancestors.is_empty() {
                let chain: Vec<String> = row.ancestors.iter().map(ToString::to_string).collect();
                line.push_str(&format!("  (part of {})", chain.join(" > ")));
            }
            println!("{line}");
        }
    }
}

fn print_tsv(rows: &[EntityRow<'_>]) {
    println!("kind\tid\tname\taliases\tancestors");
    for row in rows {
        let ancestors: Vec<String> = row.ancestors.iter().map(ToString::to_string).collect();
        println!(
            "{}\t{}\t{}\t{}\t{}",
            row.kind,
            row.id,
            row.name,
            row.aliases.join("|"),
            ancestors.join(">")
        );
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
