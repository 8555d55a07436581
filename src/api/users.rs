//! User endpoints, including rates and project assignments.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::client::Transport;
use crate::dates::HarvestDate;
use crate::error::Result;
use crate::params::CollectionParams;
use crate::response::HarvestResponse;

/// Encapsulates the Harvest API methods under `/users`.
#[derive(Debug, Clone)]
pub struct UsersApi {
    base_url: &'static str,
    transport: Arc<Transport>,
}

/// Body for creating a user.
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// The user's timezone, defaults to the company's timezone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_access_to_all_future_projects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_contractor: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// The user's capacity in seconds per week.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_hourly_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_rate: Option<Decimal>,
    /// Role names assigned to the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

/// Body for updating a user. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_access_to_all_future_projects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_contractor: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_hourly_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,
}

/// Body for creating a billable or cost rate on a user.
///
/// Leaving `start_date` unset replaces all of the user's existing rates;
/// setting it retires the previous rate the day before.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRateRequest {
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<HarvestDate>,
}

impl UsersApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self {
            base_url: "v2/users",
            transport,
        }
    }

    /// Retrieves the currently authenticated user.
    pub async fn me(&self) -> Result<HarvestResponse> {
        self.transport.get(&format!("{}/me", self.base_url)).await
    }

    /// Retrieves a list of users.
    pub async fn list(&self, params: CollectionParams) -> Result<HarvestResponse> {
        self.transport
            .get_with_query(self.base_url, &params.clamped())
            .await
    }

    /// Retrieves the user with the given ID.
    pub async fn get(&self, user_id: u64) -> Result<HarvestResponse> {
        self.transport
            .get(&format!("{}/{}", self.base_url, user_id))
            .await
    }

    pub async fn create(&self, req: CreateUserRequest) -> Result<HarvestResponse> {
        self.transport.post(self.base_url, &req).await
    }

    pub async fn update(&self, user_id: u64, req: UpdateUserRequest) -> Result<HarvestResponse> {
        self.transport
            .patch(&format!("{}/{}", self.base_url, user_id), &req)
            .await
    }

    pub async fn delete(&self, user_id: u64) -> Result<HarvestResponse> {
        self.transport
            .delete(&format!("{}/{}", self.base_url, user_id))
            .await
    }

    /// Retrieves a user's billable rates, ordered by start date.
    pub async fn list_billable_rates(
        &self,
        user_id: u64,
        params: CollectionParams,
    ) -> Result<HarvestResponse> {
        self.transport
            .get_with_query(
                &format!("{}/{}/billable_rates", self.base_url, user_id),
                &params.clamped(),
            )
            .await
    }

    pub async fn get_billable_rate(
        &self,
        user_id: u64,
        billable_rate_id: u64,
    ) -> Result<HarvestResponse> {
        self.transport
            .get(&format!(
                "{}/{}/billable_rates/{}",
                self.base_url, user_id, billable_rate_id
            ))
            .await
    }

    pub async fn create_billable_rate(
        &self,
        user_id: u64,
        req: CreateRateRequest,
    ) -> Result<HarvestResponse> {
        self.transport
            .post(
                &format!("{}/{}/billable_rates", self.base_url, user_id),
                &req,
            )
            .await
    }

    /// Retrieves a user's cost rates, ordered by start date.
    pub async fn list_cost_rates(
        &self,
        user_id: u64,
        params: CollectionParams,
    ) -> Result<HarvestResponse> {
        self.transport
            .get_with_query(
                &format!("{}/{}/cost_rates", self.base_url, user_id),
                &params.clamped(),
            )
            .await
    }

    pub async fn get_cost_rate(&self, user_id: u64, cost_rate_id: u64) -> Result<HarvestResponse> {
        self.transport
            .get(&format!(
                "{}/{}/cost_rates/{}",
                self.base_url, user_id, cost_rate_id
            ))
            .await
    }

    pub async fn create_cost_rate(
        &self,
        user_id: u64,
        req: CreateRateRequest,
    ) -> Result<HarvestResponse> {
        self.transport
            .post(&format!("{}/{}/cost_rates", self.base_url, user_id), &req)
            .await
    }

    /// Retrieves the active project assignments for the user with the
    /// given ID.
    pub async fn list_project_assignments(
        &self,
        user_id: u64,
        params: CollectionParams,
    ) -> Result<HarvestResponse> {
        self.transport
            .get_with_query(
                &format!("{}/{}/project_assignments", self.base_url, user_id),
                &params.clamped(),
            )
            .await
    }

    /// Retrieves the active project assignments of the currently
    /// authenticated user.
    pub async fn my_project_assignments(
        &self,
        params: CollectionParams,
    ) -> Result<HarvestResponse> {
        self.transport
            .get_with_query(
                &format!("{}/me/project_assignments", self.base_url),
                &params.clamped(),
            )
            .await
    }
}
