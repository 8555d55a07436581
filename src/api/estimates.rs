//! Estimate endpoints, including messages and item categories.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::api::{EventTypeRequest, ItemCategoryRequest, MessageRecipient};
use crate::client::Transport;
use crate::dates::HarvestDate;
use crate::error::Result;
use crate::params::CollectionParams;
use crate::response::HarvestResponse;

/// Encapsulates the Harvest API methods under `/estimates` and
/// `/estimate_item_categories`.
#[derive(Debug, Clone)]
pub struct EstimatesApi {
    base_url: &'static str,
    item_categories_base_url: &'static str,
    transport: Arc<Transport>,
}

/// A line item on a new estimate.
#[derive(Debug, Clone, Serialize)]
pub struct CreateEstimateLineItemRequest {
    /// The name of an estimate item category.
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
    /// Whether the first tax rate applies to this line item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxed2: Option<bool>,
}

/// Body for creating an estimate.
#[derive(Debug, Clone, Serialize)]
pub struct CreateEstimateRequest {
    /// The ID of the client the estimate is for.
    pub client_id: u64,
    /// Estimate number; Harvest assigns the next available one when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_order: Option<String>,
    /// First tax rate, as a percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax2: Option<Decimal>,
    /// Discount applied to the subtotal, as a percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Defaults to today server-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<HarvestDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<CreateEstimateLineItemRequest>>,
}

/// A line item change on an estimate update. Include `id` to modify an
/// existing line, omit it to add a new one, set `destroy` to remove it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateEstimateLineItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxed2: Option<bool>,
    #[serde(rename = "_destroy", skip_serializing_if = "Option::is_none")]
    pub destroy: Option<bool>,
}

/// Body for updating an estimate. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateEstimateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax2: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<HarvestDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<UpdateEstimateLineItemRequest>>,
}

/// Body for creating an estimate message.
#[derive(Debug, Clone, Serialize)]
pub struct CreateEstimateMessageRequest {
    pub recipients: Vec<MessageRecipient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_me_a_copy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}

impl EstimatesApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self {
            base_url: "v2/estimates",
            item_categories_base_url: "v2/estimate_item_categories",
            transport,
        }
    }

    /// Retrieves a list of estimates.
    pub async fn list(&self, params: CollectionParams) -> Result<HarvestResponse> {
        self.transport
            .get_with_query(self.base_url, &params.clamped())
            .await
    }

    pub async fn get(&self, estimate_id: u64) -> Result<HarvestResponse> {
        self.transport
            .get(&format!("{}/{}", self.base_url, estimate_id))
            .await
    }

    pub async fn create(&self, req: CreateEstimateRequest) -> Result<HarvestResponse> {
        self.transport.post(self.base_url, &req).await
    }

    pub async fn update(
        &self,
        estimate_id: u64,
        req: UpdateEstimateRequest,
    ) -> Result<HarvestResponse> {
        self.transport
            .patch(&format!("{}/{}", self.base_url, estimate_id), &req)
            .await
    }

    pub async fn delete(&self, estimate_id: u64) -> Result<HarvestResponse> {
        self.transport
            .delete(&format!("{}/{}", self.base_url, estimate_id))
            .await
    }

    /// Retrieves the messages sent for an estimate.
    pub async fn list_messages(
        &self,
        estimate_id: u64,
        params: CollectionParams,
    ) -> Result<HarvestResponse> {
        self.transport
            .get_with_query(
                &format!("{}/{}/messages", self.base_url, estimate_id),
                &params.clamped(),
            )
            .await
    }

    pub async fn create_message(
        &self,
        estimate_id: u64,
        req: CreateEstimateMessageRequest,
    ) -> Result<HarvestResponse> {
        self.transport
            .post(&format!("{}/{}/messages", self.base_url, estimate_id), &req)
            .await
    }

    pub async fn delete_message(
        &self,
        estimate_id: u64,
        message_id: u64,
    ) -> Result<HarvestResponse> {
        self.transport
            .delete(&format!(
                "{}/{}/messages/{}",
                self.base_url, estimate_id, message_id
            ))
            .await
    }

    /// Marks a draft estimate as sent.
    pub async fn mark_sent(&self, estimate_id: u64) -> Result<HarvestResponse> {
        self.post_event(estimate_id, "send").await
    }

    /// Marks an open estimate as accepted.
    pub async fn mark_accepted(&self, estimate_id: u64) -> Result<HarvestResponse> {
        self.post_event(estimate_id, "accept").await
    }

    /// Marks an open estimate as declined.
    pub async fn mark_declined(&self, estimate_id: u64) -> Result<HarvestResponse> {
        self.post_event(estimate_id, "decline").await
    }

    /// Re-opens a closed estimate.
    pub async fn reopen(&self, estimate_id: u64) -> Result<HarvestResponse> {
        self.post_event(estimate_id, "re-open").await
    }

    async fn post_event(
        &self,
        estimate_id: u64,
        event_type: &'static str,
    ) -> Result<HarvestResponse> {
        self.transport
            .post(
                &format!("{}/{}/messages", self.base_url, estimate_id),
                &EventTypeRequest { event_type },
            )
            .await
    }

    /// Retrieves a list of estimate item categories.
    pub async fn list_item_categories(&self, params: CollectionParams) -> Result<HarvestResponse> {
        self.transport
            .get_with_query(self.item_categories_base_url, &params.clamped())
            .await
    }

    pub async fn get_item_category(&self, category_id: u64) -> Result<HarvestResponse> {
        self.transport
            .get(&format!("{}/{}", self.item_categories_base_url, category_id))
            .await
    }

    pub async fn create_item_category(&self, name: &str) -> Result<HarvestResponse> {
        self.transport
            .post(self.item_categories_base_url, &ItemCategoryRequest { name })
            .await
    }

    pub async fn update_item_category(
        &self,
        category_id: u64,
        name: &str,
    ) -> Result<HarvestResponse> {
        self.transport
            .patch(
                &format!("{}/{}", self.item_categories_base_url, category_id),
                &ItemCategoryRequest { name },
            )
            .await
    }

    pub async fn delete_item_category(&self, category_id: u64) -> Result<HarvestResponse> {
        self.transport
            .delete(&format!("{}/{}", self.item_categories_base_url, category_id))
            .await
    }
}
