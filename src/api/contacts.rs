//! Client contact endpoints.

use std::sync::Arc;

use serde::Serialize;

use crate::client::Transport;
use crate::error::Result;
use crate::params::CollectionParams;
use crate::response::HarvestResponse;

/// Encapsulates the Harvest API methods under `/contacts`.
#[derive(Debug, Clone)]
pub struct ContactsApi {
    base_url: &'static str,
    transport: Arc<Transport>,
}

/// Body for creating a contact.
#[derive(Debug, Clone, Serialize)]
pub struct CreateContactRequest {
    /// The ID of the client the contact belongs to.
    pub client_id: u64,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_office: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
}

/// Body for updating a contact. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateContactRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_office: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
}

impl ContactsApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self {
            base_url: "v2/contacts",
            transport,
        }
    }

    /// Retrieves a list of contacts, optionally filtered by client.
    pub async fn list(&self, params: CollectionParams) -> Result<HarvestResponse> {
        self.transport
            .get_with_query(self.base_url, &params.clamped())
            .await
    }

    pub async fn get(&self, contact_id: u64) -> Result<HarvestResponse> {
        self.transport
            .get(&format!("{}/{}", self.base_url, contact_id))
            .await
    }

    pub async fn create(&self, req: CreateContactRequest) -> Result<HarvestResponse> {
        self.transport.post(self.base_url, &req).await
    }

    pub async fn update(
        &self,
        contact_id: u64,
        req: UpdateContactRequest,
    ) -> Result<HarvestResponse> {
        self.transport
            .patch(&format!("{}/{}", self.base_url, contact_id), &req)
            .await
    }

    pub async fn delete(&self, contact_id: u64) -> Result<HarvestResponse> {
        self.transport
            .delete(&format!("{}/{}", self.base_url, contact_id))
            .await
    }
}
