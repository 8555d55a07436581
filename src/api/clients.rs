//! Client (customer) endpoints.

use std::sync::Arc;

use serde::Serialize;

use crate::client::Transport;
use crate::error::Result;
use crate::params::CollectionParams;
use crate::response::HarvestResponse;

/// Encapsulates the Harvest API methods under `/clients`.
#[derive(Debug, Clone)]
pub struct ClientsApi {
    base_url: &'static str,
    transport: Arc<Transport>,
}

/// Body for creating a client.
#[derive(Debug, Clone, Serialize)]
pub struct CreateClientRequest {
    /// A textual description of the client.
    pub name: String,
    /// Whether the client is active, defaults to true server-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// A textual representation of the client's physical address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// The currency used by the client, e.g. `EUR`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Body for updating a client. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateClientRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl ClientsApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self {
            base_url: "v2/clients",
            transport,
        }
    }

    /// Retrieves a list of clients visible to the authenticated user.
    pub async fn list(&self, params: CollectionParams) -> Result<HarvestResponse> {
        self.transport
            .get_with_query(self.base_url, &params.clamped())
            .await
    }

    /// Retrieves the client with the given ID.
    pub async fn get(&self, client_id: u64) -> Result<HarvestResponse> {
        self.transport
            .get(&format!("{}/{}", self.base_url, client_id))
            .await
    }

    pub async fn create(&self, req: CreateClientRequest) -> Result<HarvestResponse> {
        self.transport.post(self.base_url, &req).await
    }

    pub async fn update(
        &self,
        client_id: u64,
        req: UpdateClientRequest,
    ) -> Result<HarvestResponse> {
        self.transport
            .patch(&format!("{}/{}", self.base_url, client_id), &req)
            .await
    }

    /// Deletes a client. Deletion is only possible if the client has no
    /// projects, invoices, or estimates associated with it.
    pub async fn delete(&self, client_id: u64) -> Result<HarvestResponse> {
        self.transport
            .delete(&format!("{}/{}", self.base_url, client_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_optional_fields_are_omitted() {
        let req = CreateClientRequest {
            name: "Acme".to_string(),
            is_active: None,
            address: None,
            currency: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"name": "Acme"})
        );
    }

    #[test]
    fn explicit_false_is_serialized() {
        let req = UpdateClientRequest {
            is_active: Some(false),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"is_active": false})
        );
    }
}
