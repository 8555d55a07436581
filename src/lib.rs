//! Harvest API client library.
//!
//! A Rust library for interacting with the [Harvest v2 REST
//! API](https://help.getharvest.com/api-v2/). Each Harvest resource
//! collection (time entries, invoices, projects, ...) is exposed as a group
//! of methods on the [`HarvestClient`] handle; requests carry the headers
//! Harvest requires and responses come back as a [`HarvestResponse`]
//! envelope holding the HTTP status code and the decoded JSON payload.
//!
//! # Quick Start
//!
//! ```no_run
//! use harvestapi::{CollectionParams, HarvestClient};
//!
//! #[tokio::main]
//! async fn main() -> harvestapi::Result<()> {
//!     let client = HarvestClient::new(
//!         "account-id",
//!         "access-token",
//!         "my-app",
//!         "dev@example.com",
//!     )?;
//!
//!     // Who am I?
//!     let me = client.users.me().await?;
//!     println!("user id: {}", me.data["id"]);
//!
//!     // This week's time entries
//!     let entries = client
//!         .time_entries
//!         .list(harvestapi::TimeEntryListParams {
//!             from: Some("2022-11-28".parse().unwrap()),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("{} entries", entries.data["time_entries"].as_array().map_or(0, Vec::len));
//!
//!     // Active projects, first page
//!     let projects = client
//!         .projects
//!         .list(CollectionParams {
//!             is_active: Some(true),
//!             ..Default::default()
//!         })
//!         .await?;
//!     assert!(projects.is_success());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Response handling
//!
//! The library does not branch on HTTP status codes: Harvest's application
//! errors (validation failures, missing resources, throttling) arrive in the
//! envelope for the caller to inspect. Only transport failures, undecodable
//! bodies, and receipt validation produce an [`HarvestError`].
//!
//! # Configuration
//!
//! [`HarvestClient::new`] takes the account ID, access token, and User-Agent
//! app/email as already-validated strings; how they are loaded (environment,
//! config file, secret store) is up to the caller. No timeouts are set by
//! the library — pass a preconfigured `reqwest::Client` through
//! [`HarvestClient::with_http_client`] to control deadlines.

mod api;
mod client;
mod dates;
mod error;
mod params;
mod response;

// Re-export core types
pub use client::HarvestClient;
pub use dates::HarvestDate;
pub use error::{HarvestError, Result};
pub use params::{CollectionParams, MAX_PER_PAGE};
pub use response::HarvestResponse;

// Re-export resource groups and their request types
pub use api::*;
