//! Invoice endpoints, including messages, payments, and item categories.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::api::{EventTypeRequest, ItemCategoryRequest, MessageRecipient};
use crate::client::Transport;
use crate::dates::HarvestDate;
use crate::error::Result;
use crate::params::CollectionParams;
use crate::response::HarvestResponse;

/// Encapsulates the Harvest API methods under `/invoices` and
/// `/invoice_item_categories`.
#[derive(Debug, Clone)]
pub struct InvoicesApi {
    base_url: &'static str,
    item_categories_base_url: &'static str,
    transport: Arc<Transport>,
}

/// Payment terms accepted on an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaymentTerm {
    #[serde(rename = "upon receipt")]
    UponReceipt,
    #[serde(rename = "net 15")]
    Net15,
    #[serde(rename = "net 30")]
    Net30,
    #[serde(rename = "net 45")]
    Net45,
    #[serde(rename = "net 60")]
    Net60,
    #[serde(rename = "custom")]
    Custom,
}

/// How imported time is grouped into invoice line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSummaryType {
    Project,
    Task,
    People,
    Detailed,
}

/// How imported expenses are grouped into invoice line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseSummaryType {
    Project,
    Category,
    People,
    Detailed,
}

/// A line item on a new free-form invoice.
#[derive(Debug, Clone, Serialize)]
pub struct CreateInvoiceLineItemRequest {
    /// The name of an invoice item category.
    pub kind: String,
    /// The project the line item is tied to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
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
}

/// Body for creating a free-form invoice.
#[derive(Debug, Clone, Serialize)]
pub struct CreateInvoiceRequest {
    /// The ID of the client being invoiced.
    pub client_id: u64,
    /// The ID of the retainer the invoice draws against, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retainer_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate_id: Option<u64>,
    /// Invoice number; Harvest assigns the next available one when unset.
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
    pub due_date: Option<HarvestDate>,
    /// When set alongside `due_date`, the server expects `Custom`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_term: Option<PaymentTerm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<CreateInvoiceLineItemRequest>>,
}

/// Date range and grouping for importing tracked time into an invoice.
#[derive(Debug, Clone, Serialize)]
pub struct TimeImport {
    pub summary_type: TimeSummaryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<HarvestDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<HarvestDate>,
}

/// Date range and grouping for importing tracked expenses into an invoice.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseImport {
    pub summary_type: ExpenseSummaryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<HarvestDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<HarvestDate>,
    /// Attach the expense receipts to the invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach_receipts: Option<bool>,
}

/// Selects the tracked time and expenses turned into line items.
#[derive(Debug, Clone, Serialize)]
pub struct LineItemsImport {
    /// Projects whose tracked work is imported.
    pub project_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeImport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expenses: Option<ExpenseImport>,
}

/// Body for creating an invoice from tracked time and expenses.
#[derive(Debug, Clone, Serialize)]
pub struct CreateInvoiceFromTrackedRequest {
    pub client_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retainer_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate_id: Option<u64>,
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
    pub due_date: Option<HarvestDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_term: Option<PaymentTerm>,
    pub line_items_import: LineItemsImport,
}

/// A line item change on an invoice update. Include `id` to modify an
/// existing line, omit it to add a new one, set `destroy` to remove it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateInvoiceLineItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
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

/// Body for updating an invoice. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateInvoiceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retainer_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate_id: Option<u64>,
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
    pub due_date: Option<HarvestDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_term: Option<PaymentTerm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<UpdateInvoiceLineItemRequest>>,
}

/// Body for creating an invoice message.
#[derive(Debug, Clone, Serialize)]
pub struct CreateInvoiceMessageRequest {
    pub recipients: Vec<MessageRecipient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Include a link the client can pay the invoice through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_link_to_client_invoice: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach_pdf: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_me_a_copy: Option<bool>,
    /// Marks the message as a thank-you note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thank_you: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
}

/// Body for recording a payment against an invoice.
///
/// `paid_at` and `paid_date` are mutually exclusive server-side; set one.
#[derive(Debug, Clone, Serialize)]
pub struct CreateInvoicePaymentRequest {
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<HarvestDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl InvoicesApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self {
            base_url: "v2/invoices",
            item_categories_base_url: "v2/invoice_item_categories",
            transport,
        }
    }

    /// Retrieves a list of invoices.
    pub async fn list(&self, params: CollectionParams) -> Result<HarvestResponse> {
        self.transport
            .get_with_query(self.base_url, &params.clamped())
            .await
    }

    pub async fn get(&self, invoice_id: u64) -> Result<HarvestResponse> {
        self.transport
            .get(&format!("{}/{}", self.base_url, invoice_id))
            .await
    }

    /// Creates an invoice with free-form line items.
    pub async fn create(&self, req: CreateInvoiceRequest) -> Result<HarvestResponse> {
        self.transport.post(self.base_url, &req).await
    }

    /// Creates an invoice whose line items are imported from tracked time
    /// and expenses.
    pub async fn create_from_tracked(
        &self,
        req: CreateInvoiceFromTrackedRequest,
    ) -> Result<HarvestResponse> {
        self.transport.post(self.base_url, &req).await
    }

    pub async fn update(
        &self,
        invoice_id: u64,
        req: UpdateInvoiceRequest,
    ) -> Result<HarvestResponse> {
        self.transport
            .patch(&format!("{}/{}", self.base_url, invoice_id), &req)
            .await
    }

    pub async fn delete(&self, invoice_id: u64) -> Result<HarvestResponse> {
        self.transport
            .delete(&format!("{}/{}", self.base_url, invoice_id))
            .await
    }

    /// Retrieves the messages sent for an invoice.
    pub async fn list_messages(
        &self,
        invoice_id: u64,
        params: CollectionParams,
    ) -> Result<HarvestResponse> {
        self.transport
            .get_with_query(
                &format!("{}/{}/messages", self.base_url, invoice_id),
                &params.clamped(),
            )
            .await
    }

    /// Retrieves the default subject and body for a new message on the
    /// invoice.
    pub async fn message_defaults(&self, invoice_id: u64) -> Result<HarvestResponse> {
        self.transport
            .get(&format!("{}/{}/messages/new", self.base_url, invoice_id))
            .await
    }

    pub async fn create_message(
        &self,
        invoice_id: u64,
        req: CreateInvoiceMessageRequest,
    ) -> Result<HarvestResponse> {
        self.transport
            .post(&format!("{}/{}/messages", self.base_url, invoice_id), &req)
            .await
    }

    pub async fn delete_message(
        &self,
        invoice_id: u64,
        message_id: u64,
    ) -> Result<HarvestResponse> {
        self.transport
            .delete(&format!(
                "{}/{}/messages/{}",
                self.base_url, invoice_id, message_id
            ))
            .await
    }

    /// Marks a draft invoice as sent.
    pub async fn mark_sent(&self, invoice_id: u64) -> Result<HarvestResponse> {
        self.post_event(invoice_id, "send").await
    }

    /// Marks an open invoice as closed (written off).
    pub async fn mark_closed(&self, invoice_id: u64) -> Result<HarvestResponse> {
        self.post_event(invoice_id, "close").await
    }

    /// Returns an open invoice to draft state.
    pub async fn mark_draft(&self, invoice_id: u64) -> Result<HarvestResponse> {
        self.post_event(invoice_id, "draft").await
    }

    /// Re-opens a closed invoice.
    pub async fn reopen(&self, invoice_id: u64) -> Result<HarvestResponse> {
        self.post_event(invoice_id, "re-open").await
    }

    async fn post_event(
        &self,
        invoice_id: u64,
        event_type: &'static str,
    ) -> Result<HarvestResponse> {
        self.transport
            .post(
                &format!("{}/{}/messages", self.base_url, invoice_id),
                &EventTypeRequest { event_type },
            )
            .await
    }

    /// Retrieves the payments recorded against an invoice.
    pub async fn list_payments(
        &self,
        invoice_id: u64,
        params: CollectionParams,
    ) -> Result<HarvestResponse> {
        self.transport
            .get_with_query(
                &format!("{}/{}/payments", self.base_url, invoice_id),
                &params.clamped(),
            )
            .await
    }

    pub async fn create_payment(
        &self,
        invoice_id: u64,
        req: CreateInvoicePaymentRequest,
    ) -> Result<HarvestResponse> {
        self.transport
            .post(&format!("{}/{}/payments", self.base_url, invoice_id), &req)
            .await
    }

    pub async fn delete_payment(
        &self,
        invoice_id: u64,
        payment_id: u64,
    ) -> Result<HarvestResponse> {
        self.transport
            .delete(&format!(
                "{}/{}/payments/{}",
                self.base_url, invoice_id, payment_id
            ))
            .await
    }

    /// Retrieves a list of invoice item categories.
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
