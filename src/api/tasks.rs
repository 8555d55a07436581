//! Task endpoints.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::client::Transport;
use crate::error::Result;
use crate::params::CollectionParams;
use crate::response::HarvestResponse;

/// Encapsulates the Harvest API methods under `/tasks`.
#[derive(Debug, Clone)]
pub struct TasksApi {
    base_url: &'static str,
    transport: Arc<Transport>,
}

/// Body for creating a task.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTaskRequest {
    /// The name of the task.
    pub name: String,
    /// Whether time entries for this task default to billable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_by_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_hourly_rate: Option<Decimal>,
    /// Whether the task is automatically added to future projects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Body for updating a task. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_by_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_hourly_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl TasksApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self {
            base_url: "v2/tasks",
            transport,
        }
    }

    /// Retrieves a list of tasks.
    pub async fn list(&self, params: CollectionParams) -> Result<HarvestResponse> {
        self.transport
            .get_with_query(self.base_url, &params.clamped())
            .await
    }

    /// Retrieves the task with the given ID.
    pub async fn get(&self, task_id: u64) -> Result<HarvestResponse> {
        self.transport
            .get(&format!("{}/{}", self.base_url, task_id))
            .await
    }

    pub async fn create(&self, req: CreateTaskRequest) -> Result<HarvestResponse> {
        self.transport.post(self.base_url, &req).await
    }

    pub async fn update(&self, task_id: u64, req: UpdateTaskRequest) -> Result<HarvestResponse> {
        self.transport
            .patch(&format!("{}/{}", self.base_url, task_id), &req)
            .await
    }

    pub async fn delete(&self, task_id: u64) -> Result<HarvestResponse> {
        self.transport
            .delete(&format!("{}/{}", self.base_url, task_id))
            .await
    }
}
