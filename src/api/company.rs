//! Company settings endpoints.

use std::sync::Arc;

use serde::Serialize;

use crate::client::Transport;
use crate::error::Result;
use crate::response::HarvestResponse;

/// Encapsulates the Harvest API methods under `/company`.
#[derive(Debug, Clone)]
pub struct CompanyApi {
    base_url: &'static str,
    transport: Arc<Transport>,
}

/// Body for updating company settings. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCompanyRequest {
    /// Whether time entries are tracked via start/stop timestamps rather
    /// than durations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wants_timestamp_timers: Option<bool>,
    /// The weekly capacity in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_capacity: Option<u32>,
}

impl CompanyApi {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self {
            base_url: "v2/company",
            transport,
        }
    }

    /// Retrieves the company of the currently authenticated user.
    pub async fn my_company(&self) -> Result<HarvestResponse> {
        self.transport.get(self.base_url).await
    }

    pub async fn update(&self, req: UpdateCompanyRequest) -> Result<HarvestResponse> {
        self.transport.patch(self.base_url, &req).await
    }
}
