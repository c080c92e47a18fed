//! Command line interface for running nearby searches against the live
//! backend and inspecting the reference catalog.

use anyhow::Context;
use biznear_catalog::Catalog;
use biznear_core::GeoPoint;
use biznear_search::{RankedResult, SearchOutcome, SearchRequest, Searcher};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "biznear")]
#[command(about = "Business directory nearby-search CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a search and print the ranked results.
    Search {
        /// Free-text query; may embed a town, district, or category name.
        query: String,
        /// Explicit town selection, overriding free-text detection.
        #[arg(long)]
        town: Option<String>,
        /// Explicit category selection, overriding free-text detection.
        #[arg(long)]
        category: Option<String>,
        /// Device latitude, used when no town or district resolves.
        #[arg(long, requires = "lng")]
        lat: Option<f64>,
        /// Device longitude.
        #[arg(long, requires = "lat")]
        lng: Option<f64>,
        /// Search radius override in meters (clamped to 1000..=50000).
        #[arg(long)]
        radius: Option<u32>,
        /// Print raw JSON instead of formatted lines.
        #[arg(long)]
        json: bool,
    },
    /// List the towns, districts, and categories the interpreter knows.
    Catalog,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search {
            query,
            town,
            category,
            lat,
            lng,
            radius,
            json,
        } => {
            let config = biznear_core::load_app_config()?;
            let catalog = match &config.catalog_path {
                Some(path) => biznear_catalog::load_catalog_file(path)?,
                None => Catalog::embedded(),
            };
            let store = biznear_store::HttpBusinessStore::new(
                &config.store_base_url,
                config.store_api_key.clone(),
                config.store_timeout_secs,
            )?;
            let matrix = biznear_distance::DistanceClient::new(
                &config.distance_base_url,
                config.distance_api_key.clone(),
                config.distance_timeout_secs,
            )?;
            let searcher = Searcher::new(catalog, store, matrix);

            let device_location = lat.zip(lng).map(|(lat, lng)| GeoPoint::new(lat, lng));
            let request = SearchRequest {
                raw: query,
                selected_town: town,
                selected_category: category,
                device_location,
                radius_meters: radius,
            };

            let outcome = searcher
                .search(&request)
                .await
                .context("search was superseded before completing")??;

            match outcome {
                SearchOutcome::Ranked(results) if results.is_empty() => {
                    println!("No matches. Try widening the radius or a broader query.");
                }
                SearchOutcome::Ranked(results) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&results)?);
                    } else {
                        for (i, result) in results.iter().enumerate() {
                            println!("{}", format_result(i + 1, result));
                        }
                    }
                }
                SearchOutcome::NeedDeviceLocation => {
                    println!(
                        "Could not resolve a location from the query. \
                         Pass --lat/--lng or include a town or district name."
                    );
                }
            }
        }
        Commands::Catalog => {
            let catalog = Catalog::embedded();
            println!("Districts ({}):", catalog.districts().len());
            for district in catalog.districts() {
                println!("  {district}");
            }
            println!("Towns ({}):", catalog.towns().len());
            for town in catalog.towns() {
                println!("  {} ({})", town.name, town.district);
            }
            println!("Categories ({}):", catalog.categories().len());
            for category in catalog.categories() {
                println!("  {} [{}]", category.name, category.keywords.join(", "));
            }
        }
    }

    Ok(())
}

fn format_result(rank: usize, result: &RankedResult) -> String {
    let business = &result.business;
    let mut line = format!("{rank:>2}. {} — {}", business.name, business.address);
    if let Some(label) = &result.distance {
        line.push_str(&format!(" [{}", label.text));
        if let Some(duration) = &label.duration_text {
            line.push_str(&format!(", {duration}"));
        }
        line.push(']');
    }
    if let Some(rating) = business.rating {
        line.push_str(&format!(" ({rating:.1}★, {} reviews)", business.reviews_count));
    }
    line
}
