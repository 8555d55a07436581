//! Expense endpoints, including receipts and expense categories.

use std::path::Path;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::client::Transport;
use crate::dates::HarvestDate;
use crate::error::Result;
use crate::params::CollectionParams;
use crate::response::HarvestResponse;

/// Encapsulates the Harvest API methods under `/expenses` and
/// `/expense_categories`.
#[derive(Debug, Clone)]
pub struct ExpensesApi {
    base_url: &'static str,
    categories_base_url: &'static str,
    transport: Arc<Transport>,
}

/// Body for creating an expense.
#[derive(Debug, Clone, Serialize)]
pub struct CreateExpenseRequest {
    pub project_id: u64,
    pub expense_category_id: u64,
    /// The date the expense occurred.
    pub spent_date: HarvestDate,
    /// Defaults to the authenticated user; admins may record expenses for
    /// others.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    /// Quantity for unit-priced categories, e.g. mileage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
}

/// Body for updating an expense. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateExpenseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_category_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent_date: Option<HarvestDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    /// Remove the receipt currently attached to the expense.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_receipt: Option<bool>,
}

/// Body for creating an expense category.
#[derive(Debug, Clone, Serialize)]
pub struct CreateExpenseCategoryRequest {
    pub name: String,
    /// Unit label for unit-priced categories, e.g. `mileage`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Body for updating an expense category. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateExpenseCategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ExpensesApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self {
            base_url: "v2/expenses",
            categories_base_url: "v2/expense_categories",
            transport,
        }
    }

    /// Retrieves a list of expenses.
    pub async fn list(&self, params: CollectionParams) -> Result<HarvestResponse> {
        self.transport
            .get_with_query(self.base_url, &params.clamped())
            .await
    }

    pub async fn get(&self, expense_id: u64) -> Result<HarvestResponse> {
        self.transport
            .get(&format!("{}/{}", self.base_url, expense_id))
            .await
    }

    pub async fn create(&self, req: CreateExpenseRequest) -> Result<HarvestResponse> {
        self.transport.post(self.base_url, &req).await
    }

    /// Creates an expense with a receipt attached.
    ///
    /// Sent as a multipart form: the request fields become form fields and
    /// the file at `receipt` becomes the file part. The receipt must exist
    /// on disk and be a `pdf`, `png`, `jpg`, or `gif`; anything else fails
    /// before a request is made.
    pub async fn create_with_receipt(
        &self,
        req: CreateExpenseRequest,
        receipt: &Path,
    ) -> Result<HarvestResponse> {
        self.transport
            .post_multipart(self.base_url, &req, "receipt", receipt)
            .await
    }

    pub async fn update(
        &self,
        expense_id: u64,
        req: UpdateExpenseRequest,
    ) -> Result<HarvestResponse> {
        self.transport
            .patch(&format!("{}/{}", self.base_url, expense_id), &req)
            .await
    }

    pub async fn delete(&self, expense_id: u64) -> Result<HarvestResponse> {
        self.transport
            .delete(&format!("{}/{}", self.base_url, expense_id))
            .await
    }

    /// Retrieves a list of expense categories.
    pub async fn list_categories(&self, params: CollectionParams) -> Result<HarvestResponse> {
        self.transport
            .get_with_query(self.categories_base_url, &params.clamped())
            .await
    }

    pub async fn get_category(&self, category_id: u64) -> Result<HarvestResponse> {
        self.transport
            .get(&format!("{}/{}", self.categories_base_url, category_id))
            .await
    }

    pub async fn create_category(
        &self,
        req: CreateExpenseCategoryRequest,
    ) -> Result<HarvestResponse> {
        self.transport.post(self.categories_base_url, &req).await
    }

    pub async fn update_category(
        &self,
        category_id: u64,
        req: UpdateExpenseCategoryRequest,
    ) -> Result<HarvestResponse> {
        self.transport
            .patch(
                &format!("{}/{}", self.categories_base_url, category_id),
                &req,
            )
            .await
    }

    pub async fn delete_category(&self, category_id: u64) -> Result<HarvestResponse> {
        self.transport
            .delete(&format!("{}/{}", self.categories_base_url, category_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_omits_unset_fields() {
        let req = CreateExpenseRequest {
            project_id: 14308069,
            expense_category_id: 4195926,
            spent_date: "2022-12-01".parse().unwrap(),
            user_id: None,
            units: None,
            total_cost: Some(Decimal::new(1350, 2)),
            notes: None,
            billable: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "project_id": 14308069,
                "expense_category_id": 4195926,
                "spent_date": "2022-12-01",
                "total_cost": 13.5,
            })
        );
    }
}
