//! Common query parameters for collection endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::dates::HarvestDate;

/// Largest `per_page` value Harvest accepts.
pub const MAX_PER_PAGE: u32 = 2000;

/// Optional filter and pagination parameters shared by most list endpoints.
///
/// Unset fields are omitted from the query string entirely. Endpoints ignore
/// filters that do not apply to them.
///
/// # Example
///
/// ```
/// use harvestapi::CollectionParams;
///
/// let params = CollectionParams {
///     is_active: Some(true),
///     per_page: Some(100),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct CollectionParams {
    /// Page number, 1-indexed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Number of records per page, between 1 and 2000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    /// Only return records belonging to the user with the given ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,

    /// Only return records belonging to the client with the given ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,

    /// Only return records belonging to the project with the given ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,

    /// Pass `true` for active records only, `false` for inactive only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    /// Pass `true` for invoiced records only, `false` for uninvoiced only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_billed: Option<bool>,

    /// Only return records updated since the given time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_since: Option<DateTime<Utc>>,

    /// Only return records with a date on or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<HarvestDate>,

    /// Only return records with a date on or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<HarvestDate>,
}

impl CollectionParams {
    /// Clamp pagination bounds to what the API accepts: `page` is at least 1
    /// and `per_page` falls within `[1, 2000]`.
    ///
    /// Every list method applies this before the request is built, so
    /// out-of-range values are corrected client-side instead of being
    /// rejected by the server.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.page = self.page.map(clamp_page);
        self.per_page = self.per_page.map(clamp_per_page);
        self
    }
}

pub(crate) fn clamp_page(page: u32) -> u32 {
    let clamped = page.max(1);
    if clamped != page {
        tracing::warn!(requested = page, "page below 1, clamped");
    }
    clamped
}

pub(crate) fn clamp_per_page(per_page: u32) -> u32 {
    let clamped = per_page.clamp(1, MAX_PER_PAGE);
    if clamped != per_page {
        tracing::warn!(requested = per_page, clamped, "per_page out of range, clamped");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_per_page_into_range() {
        let params = CollectionParams {
            per_page: Some(5000),
            ..Default::default()
        }
        .clamped();
        assert_eq!(params.per_page, Some(2000));

        let params = CollectionParams {
            per_page: Some(0),
            ..Default::default()
        }
        .clamped();
        assert_eq!(params.per_page, Some(1));
    }

    #[test]
    fn clamps_page_to_at_least_one() {
        let params = CollectionParams {
            page: Some(0),
            ..Default::default()
        }
        .clamped();
        assert_eq!(params.page, Some(1));
    }

    #[test]
    fn in_range_values_pass_through() {
        let params = CollectionParams {
            page: Some(3),
            per_page: Some(50),
            ..Default::default()
        }
        .clamped();
        assert_eq!(params.page, Some(3));
        assert_eq!(params.per_page, Some(50));
    }

    #[test]
    fn unset_fields_are_omitted_from_query() {
        let params = CollectionParams {
            is_active: Some(false),
            ..Default::default()
        };
        let value = serde_json::to_value(&params).unwrap();
        let obj = value.as_object().unwrap();

        // Explicit false is kept; everything unset is absent, not null.
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["is_active"], serde_json::json!(false));
    }

    #[test]
    fn dates_serialize_in_wire_format() {
        let params = CollectionParams {
            from: Some("2022-01-01".parse().unwrap()),
            to: Some("2022-01-31".parse().unwrap()),
            ..Default::default()
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["from"], "2022-01-01");
        assert_eq!(value["to"], "2022-01-31");
    }
}
