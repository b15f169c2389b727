//! # Fastener CLI
//!
//! Terminal front end over `fastener_core`: weight and piece-count
//! calculations plus catalog lookups, without running the HTTP server.
//!
//! ```sh
//! fastener weight hex_bolt mild_steel M10 --length 50 --quantity 1000
//! fastener pieces hex_nut stainless_steel_304 M12 --weight 25 --json
//! fastener hsn bolt
//! fastener standards hex_nut
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use fastener_core::calculations::{
    calculate_pieces_from_weight, calculate_weight, PiecesInput, ShapeFormula, WeightInput,
};
use fastener_core::catalog::{family_key, list_standards, FastenerType, Material};
use fastener_core::{CalcError, DataSource, ReferenceStore};

const RULE: &str = "═══════════════════════════════════════";

#[derive(Parser)]
#[command(name = "fastener")]
#[command(author, version, about = "Fastener weight calculator and reference lookup")]
struct Cli {
    /// Read datasets from this directory instead of the bundled copy
    #[arg(long, global = true, env = "FASTENER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Print the JSON result after the summary
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Weight of a quantity of fasteners
    Weight {
        fastener_type: String,
        material: String,
        diameter: String,
        /// Nominal length in mm (bolts, screws, studs)
        #[arg(short, long)]
        length: Option<f64>,
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Number of pieces in a given weight
    Pieces {
        fastener_type: String,
        material: String,
        diameter: String,
        /// Total weight in kg
        #[arg(short, long)]
        weight: f64,
        #[arg(short, long)]
        length: Option<f64>,
    },
    /// List fastener types
    Types,
    /// List materials
    Materials,
    /// Search HSN codes by code or description
    Hsn { query: String },
    /// List standards, optionally for one fastener type
    Standards { fastener_type: Option<String> },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let source = match &cli.data_dir {
        Some(dir) => DataSource::Directory(dir.clone()),
        None => DataSource::Embedded,
    };
    let store = ReferenceStore::new(source);
    tracing::debug!(source = ?store.source(), "reference data source");

    match run(&cli, &store) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if let Some(calc_err) = e.downcast_ref::<CalcError>() {
                let body = json!({ "error": calc_err.error_code(), "detail": calc_err });
                if let Ok(json) = serde_json::to_string_pretty(&body) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, store: &ReferenceStore) -> Result<()> {
    store.load_all()?;

    match &cli.command {
        Command::Weight {
            fastener_type,
            material,
            diameter,
            length,
            quantity,
        } => {
            let input = WeightInput {
                fastener_type_id: fastener_type.clone(),
                material_id: material.clone(),
                diameter: diameter.clone(),
                length: *length,
                quantity: *quantity,
            };
            let result = calculate_weight(store, &input)?;

            banner("WEIGHT CALCULATION");
            println!();
            println!("Input:");
            println!("  Fastener: {}", result.fastener_type);
            println!("  Material: {}", store.get::<Material>(material)?.display_name());
            println!("  Size:     {}", size_label(&result.diameter, result.length));
            println!("  Quantity: {}", result.quantity);
            println!();
            println!("Result:");
            println!("  Unit weight:  {:.3} g", result.unit_weight_grams);
            println!("  Total weight: {:.4} kg", result.total_weight_kg);
            println!("  Per 50 kg:    {} pcs", result.pieces_per_50kg);
            println!("{}", RULE);
            print_json(cli.json, &result)
        }
        Command::Pieces {
            fastener_type,
            material,
            diameter,
            weight,
            length,
        } => {
            let input = PiecesInput {
                fastener_type_id: fastener_type.clone(),
                material_id: material.clone(),
                diameter: diameter.clone(),
                length: *length,
                weight_kg: *weight,
            };
            let result = calculate_pieces_from_weight(store, &input)?;

            banner("PIECE COUNT");
            println!();
            println!("Input:");
            println!("  Fastener: {}", result.fastener_type);
            println!("  Material: {}", store.get::<Material>(material)?.display_name());
            println!("  Size:     {}", size_label(&result.diameter, result.length));
            println!("  Weight:   {} kg", result.input_weight_kg);
            println!();
            println!("Result:");
            println!("  Unit weight: {:.3} g", result.unit_weight_grams);
            println!("  Pieces:      {}", result.total_pieces);
            println!("  Per 50 kg:   {} pcs", result.pieces_per_50kg);
            println!("{}", RULE);
            print_json(cli.json, &result)
        }
        Command::Types => {
            let types = store.list::<FastenerType>()?;
            banner("FASTENER TYPES");
            for fastener in types {
                let model = ShapeFormula::from_id(&fastener.id).map_or("-", |f| f.model());
                let length = if fastener.has_length { "L" } else { " " };
                println!("  {:<24} {} {:<10} {}", fastener.id, length, fastener.category.display_name(), model);
            }
            print_json(cli.json, &json!({ "fastener_types": types }))
        }
        Command::Materials => {
            let materials = store.list::<Material>()?;
            banner("MATERIALS");
            for material in materials {
                println!("  {:<18} {:>5.2} g/cm³  {}", material.id, material.density, material.display_name());
            }
            print_json(cli.json, &json!({ "materials": materials }))
        }
        Command::Hsn { query } => {
            let query = query.trim();
            if query.is_empty() {
                return Err(CalcError::invalid_input("query", query, "Search query must not be empty").into());
            }
            let results = store.search_hsn(query)?;
            banner(&format!("HSN SEARCH: {}", query));
            if results.is_empty() {
                println!("  no matches");
            }
            for hsn in &results {
                println!("  {:<10} {:>4}%  {}", hsn.code, hsn.gst_rate, hsn.description);
            }
            print_json(
                cli.json,
                &json!({ "query": query, "count": results.len(), "results": results }),
            )
        }
        Command::Standards { fastener_type: None } => {
            let standards = list_standards(store)?;
            banner("STANDARDS");
            for listing in &standards {
                println!(
                    "  {:<14} {:<4} {:<24} {}",
                    listing.code,
                    listing.system.label(),
                    listing.fastener_type,
                    listing.description
                );
            }
            print_json(cli.json, &json!({ "standards": standards }))
        }
        Command::Standards {
            fastener_type: Some(fastener_type),
        } => {
            let refs = store.standards_for(family_key(fastener_type))?;
            banner(&format!("STANDARDS: {}", fastener_type));
            println!("  DIN: {}", refs.din.join(", "));
            println!("  ISO: {}", refs.iso.join(", "));
            println!("  IS:  {}", refs.is.join(", "));
            print_json(cli.json, &json!({ "fastener_type": fastener_type, "standards": refs }))
        }
    }
}

fn banner(title: &str) {
    println!("{}", RULE);
    println!("  {}", title);
    println!("{}", RULE);
}

fn size_label(diameter: &str, length: Option<f64>) -> String {
    match length {
        Some(length) => format!("{} x {} mm", diameter, length),
        None => diameter.to_string(),
    }
}

fn print_json<T: serde::Serialize>(enabled: bool, value: &T) -> Result<()> {
    if !enabled {
        return Ok(());
    }
    let json = serde_json::to_string_pretty(value).context("failed to serialize result")?;
    println!();
    println!("JSON Output:");
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_weight() {
        let cli = Cli::try_parse_from([
            "fastener", "weight", "hex_bolt", "mild_steel", "M10", "--length", "50", "-q", "1000", "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Weight { length, quantity, .. } => {
                assert_eq!(length, Some(50.0));
                assert_eq!(quantity, 1000);
            }
            _ => panic!("expected weight subcommand"),
        }
    }

    #[test]
    fn test_cli_requires_weight_for_pieces() {
        assert!(Cli::try_parse_from(["fastener", "pieces", "hex_nut", "stainless_steel_304", "M12"]).is_err());
    }

    #[test]
    fn test_run_reports_calc_error() {
        let cli = Cli::try_parse_from(["fastener", "weight", "hex_bolt", "mild_steel", "M10"]).unwrap();
        let err = run(&cli, &ReferenceStore::embedded()).unwrap_err();
        let calc_err = err.downcast_ref::<CalcError>().unwrap();
        assert_eq!(calc_err.error_code(), "LENGTH_REQUIRED");
    }

    #[test]
    fn test_run_weight_and_pieces() {
        let store = ReferenceStore::embedded();
        let weight = Cli::try_parse_from(["fastener", "weight", "hex_bolt", "stainless_steel_304", "M10", "-l", "50"])
            .unwrap();
        assert!(run(&weight, &store).is_ok());

        let pieces = Cli::try_parse_from(["fastener", "pieces", "hex_nut", "brass", "M8", "-w", "2.5"]).unwrap();
        assert!(run(&pieces, &store).is_ok());

        let unknown = Cli::try_parse_from(["fastener", "pieces", "hex_nut", "titanium", "M8", "-w", "2.5"]).unwrap();
        let err = run(&unknown, &store).unwrap_err();
        assert_eq!(err.downcast_ref::<CalcError>().unwrap().error_code(), "UNKNOWN_REFERENCE");
    }

    #[test]
    fn test_run_loads_every_dataset_first() {
        // Only the fastener types file is present; `types` alone would succeed
        let dir = std::env::temp_dir().join(format!("fastener-cli-partial-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let bundled = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../fastener_core/data/fastener_types.json");
        std::fs::copy(bundled, dir.join("fastener_types.json")).unwrap();

        let cli = Cli::try_parse_from(["fastener", "types"]).unwrap();
        let err = run(&cli, &ReferenceStore::new(DataSource::Directory(dir.clone()))).unwrap_err();
        std::fs::remove_dir_all(&dir).unwrap();

        let calc_err = err.downcast_ref::<CalcError>().unwrap();
        assert!(matches!(calc_err, CalcError::DataFile { .. }));
    }

    #[test]
    fn test_labels() {
        assert_eq!(size_label("M10", Some(50.0)), "M10 x 50 mm");
        assert_eq!(size_label("M10", None), "M10");
    }
}
