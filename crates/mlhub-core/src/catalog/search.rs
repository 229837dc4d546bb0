//! STAC item search parameters.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Temporal filter for an item search. Either side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// Render as a STAC interval, `..` marking an open side.
    pub fn to_interval(&self) -> String {
        let side = |value: &Option<DateTime<Utc>>| match value {
            Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Secs, true),
            None => "..".to_string(),
        };
        format!("{}/{}", side(&self.start), side(&self.end))
    }
}

/// Body of a `POST /search` request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemSearch {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    collections: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bbox: Option<[f64; 4]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
}

impl ItemSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search for a single item id.
    pub fn by_id(id: impl Into<String>) -> Self {
        Self::new().ids([id])
    }

    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn collections<I, S>(mut self, collections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.collections = collections.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to `[min_lon, min_lat, max_lon, max_lat]`.
    pub fn bbox(mut self, bbox: [f64; 4]) -> Self {
        self.bbox = Some(bbox);
        self
    }

    pub fn datetime(mut self, range: DateRange) -> Self {
        self.datetime = Some(range.to_interval());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_search_by_id_body() {
        let body = serde_json::to_value(ItemSearch::by_id("model-a")).unwrap();
        assert_eq!(body, json!({"ids": ["model-a"]}));
    }

    #[test]
    fn test_search_full_body() {
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let search = ItemSearch::new()
            .collections(["cyclones"])
            .bbox([-10.0, -5.0, 10.0, 5.0])
            .datetime(DateRange::new(Some(start), None))
            .limit(10);

        let body = serde_json::to_value(&search).unwrap();
        assert_eq!(
            body,
            json!({
                "collections": ["cyclones"],
                "bbox": [-10.0, -5.0, 10.0, 5.0],
                "datetime": "2020-01-01T00:00:00Z/..",
                "limit": 10
            })
        );
    }

    #[test]
    fn test_date_range_fully_open() {
        assert_eq!(DateRange::new(None, None).to_interval(), "../..");
    }
}
