//! Role endpoints.

use std::sync::Arc;

use serde::Serialize;

use crate::client::Transport;
use crate::error::Result;
use crate::params::CollectionParams;
use crate::response::HarvestResponse;

/// Encapsulates the Harvest API methods under `/roles`.
#[derive(Debug, Clone)]
pub struct RolesApi {
    base_url: &'static str,
    transport: Arc<Transport>,
}

/// Body for creating a role.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRoleRequest {
    /// The name of the role.
    pub name: String,
    /// Users to assign the new role to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<u64>>,
}

/// Body for updating a role. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateRoleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replaces the full set of users assigned to the role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<u64>>,
}

impl RolesApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self {
            base_url: "v2/roles",
            transport,
        }
    }

    /// Retrieves a list of roles.
    pub async fn list(&self, params: CollectionParams) -> Result<HarvestResponse> {
        self.transport
            .get_with_query(self.base_url, &params.clamped())
            .await
    }

    /// Retrieves the role with the given ID.
    pub async fn get(&self, role_id: u64) -> Result<HarvestResponse> {
        self.transport
            .get(&format!("{}/{}", self.base_url, role_id))
            .await
    }

    /// Creates a new role.
    pub async fn create(&self, req: CreateRoleRequest) -> Result<HarvestResponse> {
        self.transport.post(self.base_url, &req).await
    }

    /// Updates the role with the given ID.
    pub async fn update(&self, role_id: u64, req: UpdateRoleRequest) -> Result<HarvestResponse> {
        self.transport
            .patch(&format!("{}/{}", self.base_url, role_id), &req)
            .await
    }

    /// Deletes the role with the given ID.
    pub async fn delete(&self, role_id: u64) -> Result<HarvestResponse> {
        self.transport
            .delete(&format!("{}/{}", self.base_url, role_id))
            .await
    }
}
