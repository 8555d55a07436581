//! Project endpoints, including user and task assignments.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::client::Transport;
use crate::dates::HarvestDate;
use crate::error::Result;
use crate::params::CollectionParams;
use crate::response::HarvestResponse;

/// Encapsulates the Harvest API methods under `/projects`.
#[derive(Debug, Clone)]
pub struct ProjectsApi {
    base_url: &'static str,
    transport: Arc<Transport>,
}

/// Body for creating a project.
#[derive(Debug, Clone, Serialize)]
pub struct CreateProjectRequest {
    /// The ID of the client the project belongs to.
    pub client_id: u64,
    pub name: String,
    /// Whether the project is billable.
    pub is_billable: bool,
    /// How the project is invoiced: `Project`, `Tasks`, `People`, or `none`.
    pub bill_by: String,
    /// How the budget is tracked: `project`, `project_cost`, `task`,
    /// `task_fees`, `person`, or `none`.
    pub budget_by: String,
    /// The project code, shown in reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fixed_fee: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_is_monthly: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_when_over_budget: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub over_budget_notification_percentage: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_budget_to_all: Option<bool>,
    /// The fixed fee amount, when `is_fixed_fee` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_on: Option<HarvestDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_on: Option<HarvestDate>,
}

/// Body for updating a project. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProjectRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bill_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_fixed_fee: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_is_monthly: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_when_over_budget: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub over_budget_notification_percentage: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_budget_to_all: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_on: Option<HarvestDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ends_on: Option<HarvestDate>,
}

/// Body for assigning a user to a project.
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserAssignmentRequest {
    /// The ID of the user to assign.
    pub user_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_project_manager: Option<bool>,
    /// Use the user's default rates instead of the assignment's.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_default_rates: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Decimal>,
}

/// Body for updating a user assignment. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUserAssignmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_project_manager: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_default_rates: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Decimal>,
}

/// Body for assigning a task to a project.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTaskAssignmentRequest {
    /// The ID of the task to assign.
    pub task_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Decimal>,
}

/// Body for updating a task assignment. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTaskAssignmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Decimal>,
}

impl ProjectsApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self {
            base_url: "v2/projects",
            transport,
        }
    }

    /// Retrieves a list of projects.
    pub async fn list(&self, params: CollectionParams) -> Result<HarvestResponse> {
        self.transport
            .get_with_query(self.base_url, &params.clamped())
            .await
    }

    /// Retrieves the project with the given ID.
    pub async fn get(&self, project_id: u64) -> Result<HarvestResponse> {
        self.transport
            .get(&format!("{}/{}", self.base_url, project_id))
            .await
    }

    pub async fn create(&self, req: CreateProjectRequest) -> Result<HarvestResponse> {
        self.transport.post(self.base_url, &req).await
    }

    pub async fn update(
        &self,
        project_id: u64,
        req: UpdateProjectRequest,
    ) -> Result<HarvestResponse> {
        self.transport
            .patch(&format!("{}/{}", self.base_url, project_id), &req)
            .await
    }

    pub async fn delete(&self, project_id: u64) -> Result<HarvestResponse> {
        self.transport
            .delete(&format!("{}/{}", self.base_url, project_id))
            .await
    }

    /// Retrieves the user assignments on a project.
    pub async fn list_user_assignments(
        &self,
        project_id: u64,
        params: CollectionParams,
    ) -> Result<HarvestResponse> {
        self.transport
            .get_with_query(
                &format!("{}/{}/user_assignments", self.base_url, project_id),
                &params.clamped(),
            )
            .await
    }

    pub async fn get_user_assignment(
        &self,
        project_id: u64,
        user_assignment_id: u64,
    ) -> Result<HarvestResponse> {
        self.transport
            .get(&format!(
                "{}/{}/user_assignments/{}",
                self.base_url, project_id, user_assignment_id
            ))
            .await
    }

    pub async fn create_user_assignment(
        &self,
        project_id: u64,
        req: CreateUserAssignmentRequest,
    ) -> Result<HarvestResponse> {
        self.transport
            .post(
                &format!("{}/{}/user_assignments", self.base_url, project_id),
                &req,
            )
            .await
    }

    pub async fn update_user_assignment(
        &self,
        project_id: u64,
        user_assignment_id: u64,
        req: UpdateUserAssignmentRequest,
    ) -> Result<HarvestResponse> {
        self.transport
            .patch(
                &format!(
                    "{}/{}/user_assignments/{}",
                    self.base_url, project_id, user_assignment_id
                ),
                &req,
            )
            .await
    }

    pub async fn delete_user_assignment(
        &self,
        project_id: u64,
        user_assignment_id: u64,
    ) -> Result<HarvestResponse> {
        self.transport
            .delete(&format!(
                "{}/{}/user_assignments/{}",
                self.base_url, project_id, user_assignment_id
            ))
            .await
    }

    /// Retrieves the task assignments on a project.
    pub async fn list_task_assignments(
        &self,
        project_id: u64,
        params: CollectionParams,
    ) -> Result<HarvestResponse> {
        self.transport
            .get_with_query(
                &format!("{}/{}/task_assignments", self.base_url, project_id),
                &params.clamped(),
            )
            .await
    }

    pub async fn get_task_assignment(
        &self,
        project_id: u64,
        task_assignment_id: u64,
    ) -> Result<HarvestResponse> {
        self.transport
            .get(&format!(
                "{}/{}/task_assignments/{}",
                self.base_url, project_id, task_assignment_id
            ))
            .await
    }

    pub async fn create_task_assignment(
        &self,
        project_id: u64,
        req: CreateTaskAssignmentRequest,
    ) -> Result<HarvestResponse> {
        self.transport
            .post(
                &format!("{}/{}/task_assignments", self.base_url, project_id),
                &req,
            )
            .await
    }

    pub async fn update_task_assignment(
        &self,
        project_id: u64,
        task_assignment_id: u64,
        req: UpdateTaskAssignmentRequest,
    ) -> Result<HarvestResponse> {
        self.transport
            .patch(
                &format!(
                    "{}/{}/task_assignments/{}",
                    self.base_url, project_id, task_assignment_id
                ),
                &req,
            )
            .await
    }

    pub async fn delete_task_assignment(
        &self,
        project_id: u64,
        task_assignment_id: u64,
    ) -> Result<HarvestResponse> {
        self.transport
            .delete(&format!(
                "{}/{}/task_assignments/{}",
                self.base_url, project_id, task_assignment_id
            ))
            .await
    }
}
