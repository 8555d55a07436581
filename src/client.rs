//! Harvest API client.
//!
//! Low-level HTTP transport that attaches the headers Harvest requires and
//! performs the exchange. Endpoint operations live on the resource group
//! handles exposed by [`HarvestClient`].

use std::path::Path;
use std::sync::Arc;

use reqwest::header::USER_AGENT;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;

use crate::api::{
    ClientsApi, CompanyApi, ContactsApi, EstimatesApi, ExpensesApi, InvoicesApi, ProjectsApi,
    RolesApi, TasksApi, TimeEntriesApi, UsersApi,
};
use crate::error::{HarvestError, Result};
use crate::response::HarvestResponse;

const DEFAULT_BASE_URL: &str = "https://api.harvestapp.com";
const ACCOUNT_ID_HEADER: &str = "Harvest-Account-ID";

/// Receipt extensions Harvest accepts, with the MIME type sent for each.
const ACCEPTED_RECEIPT_TYPES: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("gif", "image/gif"),
];

/// The entry point for interacting with the Harvest v2 API.
///
/// Holds one handle per resource group; all handles share a single owned
/// HTTP transport. The client is cheaply cloneable and safe to use from
/// multiple tasks concurrently.
///
/// # Example
///
/// ```no_run
/// use harvestapi::HarvestClient;
///
/// # async fn example() -> harvestapi::Result<()> {
/// let client = HarvestClient::new("12345", "access-token", "my-app", "dev@example.com")?;
///
/// let me = client.users.me().await?;
/// println!("authenticated as user {}", me.data["id"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HarvestClient {
    /// Methods under `v2/clients`.
    pub clients: ClientsApi,
    /// Methods under `v2/company`.
    pub company: CompanyApi,
    /// Methods under `v2/contacts`.
    pub contacts: ContactsApi,
    /// Methods under `v2/estimates` and `v2/estimate_item_categories`.
    pub estimates: EstimatesApi,
    /// Methods under `v2/expenses` and `v2/expense_categories`.
    pub expenses: ExpensesApi,
    /// Methods under `v2/invoices` and `v2/invoice_item_categories`.
    pub invoices: InvoicesApi,
    /// Methods under `v2/projects`.
    pub projects: ProjectsApi,
    /// Methods under `v2/roles`.
    pub roles: RolesApi,
    /// Methods under `v2/tasks`.
    pub tasks: TasksApi,
    /// Methods under `v2/time_entries`.
    pub time_entries: TimeEntriesApi,
    /// Methods under `v2/users`.
    pub users: UsersApi,
}

impl HarvestClient {
    /// Create a client against the production Harvest origin.
    ///
    /// Requests made through the client carry the headers Harvest requires,
    /// built from the passed-in values: `Harvest-Account-ID`, a bearer
    /// `Authorization` token, and a `User-Agent` of the form
    /// `"<app> (<email>)"`. The values are used as given; loading and
    /// validating them (from the environment or elsewhere) is the caller's
    /// job.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(
        account_id: &str,
        access_token: &str,
        user_agent_app: &str,
        user_agent_email: &str,
    ) -> Result<Self> {
        Self::with_base_url(
            account_id,
            access_token,
            user_agent_app,
            user_agent_email,
            DEFAULT_BASE_URL,
        )
    }

    /// Create a client against an alternate origin.
    ///
    /// Useful for tests and proxies; otherwise identical to [`Self::new`].
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL or the HTTP client
    /// cannot be constructed.
    pub fn with_base_url(
        account_id: &str,
        access_token: &str,
        user_agent_app: &str,
        user_agent_email: &str,
        base_url: &str,
    ) -> Result<Self> {
        let http = Client::builder()
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(HarvestError::Http)?;

        Self::with_http_client(
            account_id,
            access_token,
            user_agent_app,
            user_agent_email,
            base_url,
            http,
        )
    }

    /// Create a client that performs requests through a caller-supplied
    /// `reqwest::Client`.
    ///
    /// The library sets no timeouts of its own; configure deadlines on the
    /// supplied client.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL.
    pub fn with_http_client(
        account_id: &str,
        access_token: &str,
        user_agent_app: &str,
        user_agent_email: &str,
        base_url: &str,
        http: Client,
    ) -> Result<Self> {
        let transport = Arc::new(Transport::new(
            http,
            base_url,
            account_id,
            access_token,
            user_agent_app,
            user_agent_email,
        )?);

        Ok(Self {
            clients: ClientsApi::new(Arc::clone(&transport)),
            company: CompanyApi::new(Arc::clone(&transport)),
            contacts: ContactsApi::new(Arc::clone(&transport)),
            estimates: EstimatesApi::new(Arc::clone(&transport)),
            expenses: ExpensesApi::new(Arc::clone(&transport)),
            invoices: InvoicesApi::new(Arc::clone(&transport)),
            projects: ProjectsApi::new(Arc::clone(&transport)),
            roles: RolesApi::new(Arc::clone(&transport)),
            tasks: TasksApi::new(Arc::clone(&transport)),
            time_entries: TimeEntriesApi::new(Arc::clone(&transport)),
            users: UsersApi::new(transport),
        })
    }
}

/// Shared HTTP transport: base URL, header values, and the connection pool.
///
/// Owned once per [`HarvestClient`] and handed to every resource group by
/// reference; there is no process-wide state.
pub(crate) struct Transport {
    http: Client,
    base_url: url::Url,
    account_id: String,
    access_token: String,
    user_agent: String,
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url.as_str())
            .field("account_id", &self.account_id)
            .finish_non_exhaustive()
    }
}

impl Transport {
    fn new(
        http: Client,
        base_url: &str,
        account_id: &str,
        access_token: &str,
        user_agent_app: &str,
        user_agent_email: &str,
    ) -> Result<Self> {
        // Ensure the base URL ends with / so Url::join keeps the full path.
        let base_url = if base_url.ends_with('/') {
            url::Url::parse(base_url)?
        } else {
            url::Url::parse(&format!("{base_url}/"))?
        };

        Ok(Self {
            http,
            base_url,
            account_id: account_id.to_string(),
            access_token: access_token.to_string(),
            user_agent: format!("{user_agent_app} ({user_agent_email})"),
        })
    }

    /// Start a request with the three headers Harvest requires on every call.
    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(path)?;

        Ok(self
            .http
            .request(method, url)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCOUNT_ID_HEADER, &self.account_id)
            .bearer_auth(&self.access_token))
    }

    #[tracing::instrument(skip(self))]
    pub(crate) async fn get(&self, path: &str) -> Result<HarvestResponse> {
        let response = self.request(Method::GET, path)?.send().await?;
        Self::read_response(response).await
    }

    #[tracing::instrument(skip(self, query))]
    pub(crate) async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<HarvestResponse> {
        let response = self.request(Method::GET, path)?.query(query).send().await?;
        Self::read_response(response).await
    }

    #[tracing::instrument(skip(self, body))]
    pub(crate) async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<HarvestResponse> {
        let response = self.request(Method::POST, path)?.json(body).send().await?;
        Self::read_response(response).await
    }

    /// POST a multipart form: the request struct's fields become form fields
    /// and the file at `file_path` becomes a file part named `file_field`.
    ///
    /// The file must exist and carry an accepted extension; both are checked
    /// before anything goes on the wire.
    #[tracing::instrument(skip(self, fields))]
    pub(crate) async fn post_multipart<B: Serialize + ?Sized>(
        &self,
        path: &str,
        fields: &B,
        file_field: &str,
        file_path: &Path,
    ) -> Result<HarvestResponse> {
        let mime = accepted_mime(file_path)?;

        if !file_path.is_file() {
            return Err(HarvestError::ReceiptNotFound(file_path.to_path_buf()));
        }

        let mut form = Form::new();

        if let Value::Object(map) = serde_json::to_value(fields)? {
            for (key, value) in map {
                let text = match value {
                    Value::Null => continue,
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                form = form.text(key, text);
            }
        }

        let bytes = tokio::fs::read(file_path).await?;
        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(file_field)
            .to_string();
        let part = Part::bytes(bytes).file_name(file_name).mime_str(mime)?;
        form = form.part(file_field.to_string(), part);

        let response = self
            .request(Method::POST, path)?
            .multipart(form)
            .send()
            .await?;
        Self::read_response(response).await
    }

    #[tracing::instrument(skip(self, body))]
    pub(crate) async fn patch<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<HarvestResponse> {
        let response = self.request(Method::PATCH, path)?.json(body).send().await?;
        Self::read_response(response).await
    }

    /// PATCH with no body, used by action endpoints like
    /// `time_entries/{id}/restart`.
    #[tracing::instrument(skip(self))]
    pub(crate) async fn patch_empty(&self, path: &str) -> Result<HarvestResponse> {
        let response = self.request(Method::PATCH, path)?.send().await?;
        Self::read_response(response).await
    }

    #[tracing::instrument(skip(self))]
    pub(crate) async fn delete(&self, path: &str) -> Result<HarvestResponse> {
        let response = self.request(Method::DELETE, path)?.send().await?;
        Self::read_response(response).await
    }

    /// Wrap the response into the envelope. The status code is passed
    /// through untouched; 4xx/5xx are the caller's to inspect.
    async fn read_response(response: reqwest::Response) -> Result<HarvestResponse> {
        let status_code = response.status().as_u16();
        let body = response.text().await?;

        // Harvest's DELETE endpoints answer 200 with an empty body.
        let data = if body.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&body)?
        };

        Ok(HarvestResponse { status_code, data })
    }
}

/// Map an accepted receipt extension to the MIME type sent on the wire.
fn accepted_mime(path: &Path) -> Result<&'static str> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    ACCEPTED_RECEIPT_TYPES
        .iter()
        .find(|(accepted, _)| *accepted == ext)
        .map(|(_, mime)| *mime)
        .ok_or(HarvestError::UnsupportedReceiptType(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> HarvestClient {
        HarvestClient::new("12345", "secret-token", "my-app", "dev@example.com").unwrap()
    }

    #[test]
    fn debug_does_not_leak_token() {
        let client = test_client();
        let debug = format!("{:?}", client);
        assert!(debug.contains("12345"));
        assert!(!debug.contains("secret-token"));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let a = Transport::new(Client::new(), "https://example.com/api", "1", "t", "a", "e")
            .unwrap();
        let b = Transport::new(Client::new(), "https://example.com/api/", "1", "t", "a", "e")
            .unwrap();
        assert_eq!(a.base_url.as_str(), b.base_url.as_str());
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = HarvestClient::with_base_url("1", "t", "a", "e", "not a url");
        assert!(matches!(result, Err(HarvestError::Url(_))));
    }

    #[test]
    fn user_agent_combines_app_and_email() {
        let transport =
            Transport::new(Client::new(), DEFAULT_BASE_URL, "1", "t", "my-app", "dev@example.com")
                .unwrap();
        assert_eq!(transport.user_agent, "my-app (dev@example.com)");
    }

    #[test]
    fn receipt_extension_check_is_case_insensitive() {
        assert_eq!(accepted_mime(Path::new("receipt.PDF")).unwrap(), "application/pdf");
        assert_eq!(accepted_mime(Path::new("scan.jpg")).unwrap(), "image/jpeg");
    }

    #[test]
    fn disallowed_receipt_extension_is_rejected() {
        let err = accepted_mime(Path::new("receipt.docx")).unwrap_err();
        assert!(matches!(err, HarvestError::UnsupportedReceiptType(ext) if ext == "docx"));

        let err = accepted_mime(Path::new("no_extension")).unwrap_err();
        assert!(matches!(err, HarvestError::UnsupportedReceiptType(_)));
    }
}
