use clap::Args;

use crate::cli::{load_matcher_config, ConfigPathArg, OutputFormat};
use crate::matching::MatchStrategy;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub matcher: ConfigPathArg,
}

/// Execute config subcommand
///
/// Compiling the strategy is the validation: every pattern in the file is
/// built exactly as the extract command would build it.
///
/// # Errors
///
/// Returns an error if the configuration cannot be read, parsed or compiled.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ConfigArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let strategy = MatchStrategy::from_config(&load_matcher_config(args.matcher.config.as_deref())?)?;
    // Printed from the compiled strategy so defaults are filled in
    let config = strategy.config();

    if verbose {
        match &args.matcher.config {
            Some(path) => eprintln!("Validated {}", path.display()),
            None => eprintln!("No --config given, showing defaults"),
        }
    }

    match format {
        OutputFormat::Text => {
            println!("Configuration OK ({} matcher)", strategy.name());
            println!("{}", config.to_json()?);
        }
        OutputFormat::Json => println!("{}", config.to_json()?),
        OutputFormat::Tsv => {
            println!("key\tvalue");
            println!("type\t{}", strategy.name());
            let value = serde_json::to_value(&config)?;
            if let Some(options) = value.get("options").and_then(|o| o.as_object()) {
                for (key, value) in options {
                    println!("{key}\t{value}");
                }
            }
        }
    }

    Ok(())
}
