//! Subcommand implementations.

use crate::LayerArgs;
use anyhow::{Context, Result};
use mlhub_core::{
    write_model_detail, write_model_listing, CatalogClient, ClientConfig, ModelDetail, TileLayer,
    TilerClient,
};
use std::io::Write;
use tracing::info;

/// Build a catalog client, prompting for the API key if none was given.
pub fn catalog_client(base_url: &str, api_key: Option<String>) -> Result<CatalogClient> {
    let api_key = match api_key {
        Some(key) => key,
        None => dialoguer::Password::new()
            .with_prompt("MLHub API key")
            .interact()
            .context("Failed to read API key")?,
    };

    let config = ClientConfig::new(base_url, api_key)?;
    Ok(CatalogClient::new(config)?)
}

pub async fn list_models(catalog: &CatalogClient, limit: usize) -> Result<()> {
    let models = catalog.list_models().await?;

    let mut out = std::io::stdout().lock();
    write_model_listing(&mut out, &models, limit)?;
    Ok(())
}

pub async fn show_model(catalog: &CatalogClient, id: &str, with_asset_text: bool) -> Result<()> {
    let item = catalog
        .get_model(id)
        .await
        .with_context(|| format!("Failed to look up model {}", id))?;
    let detail = ModelDetail::from_item(&item);

    write_model_detail(&mut std::io::stdout().lock(), &detail)?;

    if !with_asset_text {
        return Ok(());
    }
    if let Some((key, asset)) = detail.inference_runtime {
        info!("Downloading asset '{}'", key);
        let text = catalog.fetch_asset_text(asset).await?;

        let mut out = std::io::stdout().lock();
        writeln!(out)?;
        writeln!(out, "{}:", key)?;
        writeln!(out, "{}", text.trim_end())?;
    }
    Ok(())
}

pub async fn resolve_layer(args: LayerArgs) -> Result<()> {
    let layer = build_layer(&args);
    let tiler = TilerClient::new(Some(args.tiler.as_str()))?;

    if !args.fetch {
        let url = tiler.tilejson_url(&layer)?;
        println!("{}", url);
        return Ok(());
    }

    let tilejson = tiler.fetch_tilejson(&layer).await?;

    let mut out = std::io::stdout().lock();
    writeln!(out, "Layer: {}", tilejson.name.as_deref().unwrap_or(layer.display_name()))?;
    for template in &tilejson.tiles {
        writeln!(out, "Tiles: {}", template)?;
    }
    if let Some(bounds) = &tilejson.bounds {
        writeln!(out, "Bounds: {:?}", bounds)?;
    }
    if let (Some(min), Some(max)) = (tilejson.minzoom, tilejson.maxzoom) {
        writeln!(out, "Zoom: {}-{}", min, max)?;
    }
    Ok(())
}

/// Map command-line options onto a layer; unset options stay unset.
fn build_layer(args: &LayerArgs) -> TileLayer {
    TileLayer {
        collection: args.collection.clone(),
        item: args.item.clone(),
        assets: args.assets.clone(),
        expression: args.expression.clone(),
        rescale: args.rescale,
        colormap_name: args.colormap.clone(),
        color_formula: args.color_formula.clone(),
        nodata: args.nodata,
        name: args.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_build_layer_from_args() {
        let cli = crate::Cli::try_parse_from([
            "mlhub",
            "layer",
            "--collection",
            "sentinel-2-l2a",
            "--item",
            "S2A_1",
            "--expression",
            "(B08-B04)/(B08+B04)",
            "--rescale",
            "-1,1",
            "--colormap",
            "rdylgn",
        ])
        .unwrap();

        let crate::Command::Layer(args) = cli.command else {
            panic!("expected layer command");
        };
        let layer = build_layer(&args);

        assert!(layer.validate().is_ok());
        assert!(layer.assets.is_empty());
        assert_eq!(layer.colormap_name.as_deref(), Some("rdylgn"));
        assert_eq!(layer.color_formula, None);
        assert_eq!(layer.display_name(), "S2A_1");
    }
}
