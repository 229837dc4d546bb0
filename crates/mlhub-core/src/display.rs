//! Plain-text rendering of catalog listings and model details.

use crate::catalog::{Asset, Item, ModelSummary, CHECKPOINT_ROLE, INFERENCE_RUNTIME_ROLE};
use crate::config::DisplayConfig;
use crate::error::Result;
use crate::extensions::{MlModelProperties, ScientificCitation};
use std::io::Write;

/// Print the listing: total count, up to `cap` ids, then `...` when truncated.
pub fn write_model_listing<W: Write>(out: &mut W, models: &[ModelSummary], cap: usize) -> Result<()> {
    writeln!(out, "Total Datasets: {}", models.len())?;
    for model in models.iter().take(cap) {
        writeln!(out, "{}", model.id)?;
    }
    if models.len() > cap {
        writeln!(out, "...")?;
    }
    Ok(())
}

/// Display form of an end datetime: the open-end sentinel becomes `...`.
pub fn format_end_datetime(value: &str) -> &str {
    if value == DisplayConfig::OPEN_END_SENTINEL {
        DisplayConfig::OPEN_END_MARKER
    } else {
        value
    }
}

/// Everything the detail step prints about one model.
#[derive(Debug)]
pub struct ModelDetail<'a> {
    pub item: &'a Item,
    pub citation: Option<ScientificCitation>,
    pub ml_model: Result<MlModelProperties>,
    pub inference_runtime: Option<(&'a str, &'a Asset)>,
    pub checkpoint: Option<(&'a str, &'a Asset)>,
}

impl<'a> ModelDetail<'a> {
    pub fn from_item(item: &'a Item) -> Self {
        Self {
            item,
            citation: ScientificCitation::from_item(item),
            ml_model: MlModelProperties::from_item(item),
            inference_runtime: item.asset_by_role(INFERENCE_RUNTIME_ROLE),
            checkpoint: item.asset_by_role(CHECKPOINT_ROLE),
        }
    }
}

/// Print the detail step for one model.
pub fn write_model_detail<W: Write>(out: &mut W, detail: &ModelDetail<'_>) -> Result<()> {
    let item = detail.item;
    let props = &item.properties;

    writeln!(out, "Model: {}", item.id)?;
    match &item.bbox {
        Some(bbox) => writeln!(out, "Bounding Box: {:?}", bbox)?,
        None => writeln!(out, "Bounding Box: none")?,
    }
    match &item.geometry {
        Some(geometry) => writeln!(out, "Geometry: {}", geometry)?,
        None => writeln!(out, "Geometry: none")?,
    }
    if let Some(start) = &props.start_datetime {
        writeln!(out, "Start Datetime: {}", start)?;
    }
    if let Some(end) = &props.end_datetime {
        writeln!(out, "End Datetime: {}", format_end_datetime(end))?;
    }

    if let Some(sci) = &detail.citation {
        if let Some(citation) = &sci.citation {
            writeln!(out, "Citation: {}", citation)?;
        }
        if let Some(doi) = sci.doi_url() {
            writeln!(out, "DOI: {}", doi)?;
        }
        if !sci.publications.is_empty() {
            writeln!(out, "Publications:")?;
            for publication in &sci.publications {
                match (&publication.citation, &publication.doi) {
                    (Some(citation), Some(doi)) => writeln!(out, "  - {} (https://doi.org/{})", citation, doi)?,
                    (Some(citation), None) => writeln!(out, "  - {}", citation)?,
                    (None, Some(doi)) => writeln!(out, "  - https://doi.org/{}", doi)?,
                    (None, None) => {}
                }
            }
        }
    }

    match &detail.ml_model {
        Ok(ml) => {
            writeln!(out, "Architecture: {}", ml.architecture)?;
            writeln!(out, "Learning Approach: {}", ml.learning_approach)?;
            writeln!(out, "Prediction Type: {}", ml.prediction_type)?;
        }
        Err(e) => writeln!(out, "{}", e)?,
    }

    write_asset(out, "Inferencing Runtime", detail.inference_runtime)?;
    write_asset(out, "Inferencing Checkpoint", detail.checkpoint)?;
    Ok(())
}

fn write_asset<W: Write>(out: &mut W, label: &str, asset: Option<(&str, &Asset)>) -> Result<()> {
    let Some((key, asset)) = asset else {
        writeln!(out, "{}: none", label)?;
        return Ok(());
    };

    writeln!(out, "{} ({}):", label, key)?;
    if let Some(title) = &asset.title {
        writeln!(out, "  title: {}", title)?;
    }
    writeln!(out, "  href: {}", asset.href)?;
    if let Some(media_type) = &asset.media_type {
        writeln!(out, "  type: {}", media_type)?;
    }
    writeln!(out, "  roles: {}", asset.roles.join(", "))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn summaries(n: usize) -> Vec<ModelSummary> {
        (0..n)
            .map(|i| serde_json::from_value(json!({"id": format!("model-{}", i)})).unwrap())
            .collect()
    }

    fn listing(n: usize) -> Vec<String> {
        let mut out = Vec::new();
        write_model_listing(&mut out, &summaries(n), DisplayConfig::MODEL_LIST_LIMIT).unwrap();
        String::from_utf8(out).unwrap().lines().map(str::to_string).collect()
    }

    #[test]
    fn test_listing_empty() {
        assert_eq!(listing(0), vec!["Total Datasets: 0"]);
    }

    #[test]
    fn test_listing_under_cap() {
        let lines = listing(3);
        assert_eq!(lines, vec!["Total Datasets: 3", "model-0", "model-1", "model-2"]);
    }

    #[test]
    fn test_listing_exactly_cap_has_no_marker() {
        let lines = listing(30);
        assert_eq!(lines.len(), 31);
        assert_eq!(lines.last().map(String::as_str), Some("model-29"));
    }

    #[test]
    fn test_listing_over_cap_truncates() {
        let lines = listing(31);
        assert_eq!(lines.len(), 32);
        assert_eq!(lines[0], "Total Datasets: 31");
        assert_eq!(lines[30], "model-29");
        assert_eq!(lines[31], "...");
    }

    #[test]
    fn test_format_end_datetime() {
        assert_eq!(format_end_datetime("9999-12-31T23:59:59Z"), "...");
        assert_eq!(format_end_datetime("2021-06-30T00:00:00Z"), "2021-06-30T00:00:00Z");
        assert_eq!(format_end_datetime("2021-06-30"), "2021-06-30");
    }

    #[test]
    fn test_detail_reports_missing_ml_fields() {
        let item: Item = serde_json::from_value(json!({
            "id": "model-bare",
            "properties": {"end_datetime": "2022-01-01T00:00:00Z"}
        }))
        .unwrap();

        let mut out = Vec::new();
        write_model_detail(&mut out, &ModelDetail::from_item(&item)).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Model: model-bare"));
        assert!(text.contains("End Datetime: 2022-01-01T00:00:00Z"));
        assert!(text.contains("Missing ml-model fields: ml-model:architecture"));
        assert!(text.contains("Inferencing Runtime: none"));
        assert!(!text.contains("Citation:"));
    }
}
