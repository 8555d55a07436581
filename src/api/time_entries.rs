//! Time entry endpoints.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::client::Transport;
use crate::dates::HarvestDate;
use crate::error::Result;
use crate::params::{clamp_page, clamp_per_page};
use crate::response::HarvestResponse;

/// Encapsulates the Harvest API methods under `/time_entries`.
#[derive(Debug, Clone)]
pub struct TimeEntriesApi {
    base_url: &'static str,
    transport: Arc<Transport>,
}

/// Filter and pagination parameters for listing time entries.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TimeEntryListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<u64>,
    /// Only return entries tracked against the given external reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_billed: Option<bool>,
    /// Pass `true` for running timers only, `false` for stopped ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_running: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_since: Option<DateTime<Utc>>,
    /// Only return entries spent on or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<HarvestDate>,
    /// Only return entries spent on or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<HarvestDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl TimeEntryListParams {
    /// Clamp pagination bounds, same policy as
    /// [`CollectionParams::clamped`](crate::CollectionParams::clamped).
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.page = self.page.map(clamp_page);
        self.per_page = self.per_page.map(clamp_per_page);
        self
    }
}

/// A link from a time entry back to an object in an external system.
#[derive(Debug, Clone, Serialize)]
pub struct ExternalReference {
    pub id: u64,
    pub group_id: u64,
    pub account_id: u64,
    pub permalink: String,
}

/// Body for creating a time entry by duration.
///
/// Used when the company tracks time via durations; `hours` left unset
/// starts a running timer.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTimeEntryViaDurationRequest {
    pub project_id: u64,
    pub task_id: u64,
    /// The date the time was spent.
    pub spent_date: HarvestDate,
    /// Defaults to the authenticated user; admins may log time for others.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<ExternalReference>,
}

/// Body for creating a time entry via start and end time.
///
/// Used when the company tracks time via start/end timestamps. Times are
/// clock strings like `"8:00am"`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTimeEntryViaStartEndRequest {
    pub project_id: u64,
    pub task_id: u64,
    pub spent_date: HarvestDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<ExternalReference>,
}

/// Body for updating a time entry. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTimeEntryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent_date: Option<HarvestDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_reference: Option<ExternalReference>,
}

impl TimeEntriesApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self {
            base_url: "v2/time_entries",
            transport,
        }
    }

    /// Retrieves the time entries accessible to the currently authenticated
    /// user.
    pub async fn list(&self, params: TimeEntryListParams) -> Result<HarvestResponse> {
        self.transport
            .get_with_query(self.base_url, &params.clamped())
            .await
    }

    pub async fn get(&self, time_entry_id: u64) -> Result<HarvestResponse> {
        self.transport
            .get(&format!("{}/{}", self.base_url, time_entry_id))
            .await
    }

    pub async fn create_via_duration(
        &self,
        req: CreateTimeEntryViaDurationRequest,
    ) -> Result<HarvestResponse> {
        self.transport.post(self.base_url, &req).await
    }

    pub async fn create_via_start_end(
        &self,
        req: CreateTimeEntryViaStartEndRequest,
    ) -> Result<HarvestResponse> {
        self.transport.post(self.base_url, &req).await
    }

    pub async fn update(
        &self,
        time_entry_id: u64,
        req: UpdateTimeEntryRequest,
    ) -> Result<HarvestResponse> {
        self.transport
            .patch(&format!("{}/{}", self.base_url, time_entry_id), &req)
            .await
    }

    pub async fn delete(&self, time_entry_id: u64) -> Result<HarvestResponse> {
        self.transport
            .delete(&format!("{}/{}", self.base_url, time_entry_id))
            .await
    }

    /// Removes the external reference from a time entry; the entry itself
    /// is kept.
    pub async fn delete_external_reference(&self, time_entry_id: u64) -> Result<HarvestResponse> {
        self.transport
            .delete(&format!(
                "{}/{}/external_reference",
                self.base_url, time_entry_id
            ))
            .await
    }

    /// Restarts the timer on a stopped time entry.
    pub async fn restart(&self, time_entry_id: u64) -> Result<HarvestResponse> {
        self.transport
            .patch_empty(&format!("{}/{}/restart", self.base_url, time_entry_id))
            .await
    }

    /// Stops the timer on a running time entry.
    pub async fn stop(&self, time_entry_id: u64) -> Result<HarvestResponse> {
        self.transport
            .patch_empty(&format!("{}/{}/stop", self.base_url, time_entry_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_request_omits_unset_fields() {
        let req = CreateTimeEntryViaDurationRequest {
            project_id: 14,
            task_id: 8,
            spent_date: "2022-12-01".parse().unwrap(),
            user_id: None,
            hours: None,
            notes: None,
            external_reference: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "project_id": 14,
                "task_id": 8,
                "spent_date": "2022-12-01",
            })
        );
    }

    #[test]
    fn start_end_request_uses_clock_strings() {
        let req = CreateTimeEntryViaStartEndRequest {
            project_id: 14,
            task_id: 8,
            spent_date: "2022-12-01".parse().unwrap(),
            user_id: Some(1782959),
            started_time: Some("8:00am".to_string()),
            ended_time: Some("5:00pm".to_string()),
            notes: None,
            external_reference: None,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["started_time"], "8:00am");
        assert_eq!(value["ended_time"], "5:00pm");
    }

    #[test]
    fn list_params_clamp_pagination() {
        let params = TimeEntryListParams {
            page: Some(0),
            per_page: Some(5000),
            ..Default::default()
        }
        .clamped();
        assert_eq!(params.page, Some(1));
        assert_eq!(params.per_page, Some(2000));
    }
}
