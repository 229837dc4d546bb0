//! MLHub CLI - walkthrough of a STAC model catalog and tile layers.
//!
//! `models` and `model` talk to the catalog with an API key; `layer` builds
//! a tile layer request for a dynamic tile rendering service.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use mlhub_core::{DisplayConfig, NetworkConfig, Rescale, TileConfig};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "mlhub")]
#[command(about = "Browse a STAC machine learning model catalog and build tile layers")]
struct Cli {
    /// Catalog API root
    #[arg(long, global = true, default_value = NetworkConfig::DEFAULT_BASE_URL)]
    base_url: String,

    /// API key (prompted for with hidden input when omitted)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the models published by the catalog
    Models {
        /// Maximum number of ids to print
        #[arg(long, default_value_t = DisplayConfig::MODEL_LIST_LIMIT)]
        limit: usize,
    },

    /// Show one model's metadata and runtime assets
    Model {
        /// Model item id
        id: String,

        /// Do not download the inference runtime asset
        #[arg(long)]
        skip_asset_text: bool,
    },

    /// Build a tile layer for an item and resolve its tile URL
    Layer(LayerArgs),
}

#[derive(Args, Debug)]
struct LayerArgs {
    /// Collection id
    #[arg(long)]
    collection: String,

    /// Item id
    #[arg(long)]
    item: String,

    /// Asset to render (repeatable)
    #[arg(long = "asset")]
    assets: Vec<String>,

    /// Band math expression over asset names
    #[arg(long, allow_hyphen_values = true)]
    expression: Option<String>,

    /// Rescale range as MIN,MAX
    #[arg(long, allow_hyphen_values = true, value_parser = parse_rescale)]
    rescale: Option<Rescale>,

    /// Colormap name
    #[arg(long)]
    colormap: Option<String>,

    /// Color formula, e.g. "gamma RGB 2.7"
    #[arg(long)]
    color_formula: Option<String>,

    /// No-data value
    #[arg(long, allow_hyphen_values = true)]
    nodata: Option<f64>,

    /// Layer name
    #[arg(long)]
    name: Option<String>,

    /// Tile rendering service root
    #[arg(long, default_value = TileConfig::DEFAULT_ENDPOINT)]
    tiler: String,

    /// Request the TileJSON and print the tile URL templates
    #[arg(long)]
    fetch: bool,
}

fn parse_rescale(value: &str) -> std::result::Result<Rescale, String> {
    Rescale::parse(value).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the report
    let log_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    debug!("Catalog root: {}", cli.base_url);

    match cli.command {
        Command::Models { limit } => {
            let catalog = commands::catalog_client(&cli.base_url, cli.api_key)?;
            commands::list_models(&catalog, limit).await
        }
        Command::Model {
            id,
            skip_asset_text,
        } => {
            let catalog = commands::catalog_client(&cli.base_url, cli.api_key)?;
            commands::show_model(&catalog, &id, !skip_asset_text).await
        }
        Command::Layer(args) => commands::resolve_layer(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_layer_args() {
        let cli = Cli::try_parse_from([
            "mlhub",
            "layer",
            "--collection",
            "landsat-c2-l2",
            "--item",
            "LC08_1",
            "--asset",
            "red",
            "--asset",
            "nir08",
            "--rescale",
            "-1,1",
            "--nodata",
            "-9999",
        ])
        .unwrap();

        match cli.command {
            Command::Layer(args) => {
                assert_eq!(args.assets, vec!["red", "nir08"]);
                assert_eq!(args.rescale, Some(Rescale::new(-1.0, 1.0)));
                assert_eq!(args.nodata, Some(-9999.0));
                assert_eq!(args.tiler, TileConfig::DEFAULT_ENDPOINT);
                assert!(!args.fetch);
            }
            other => panic!("expected layer command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_models_default_limit() {
        let cli = Cli::try_parse_from(["mlhub", "--api-key", "k", "models"]).unwrap();
        assert_eq!(cli.api_key.as_deref(), Some("k"));
        match cli.command {
            Command::Models { limit } => assert_eq!(limit, 30),
            other => panic!("expected models command, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_rescale_rejected() {
        let result = Cli::try_parse_from([
            "mlhub", "layer", "--collection", "c", "--item", "i", "--rescale", "0",
        ]);
        assert!(result.is_err());
    }
}
