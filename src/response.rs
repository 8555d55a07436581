//! The response envelope returned from every Harvest call.

use serde_json::Value;

/// The general response object for any payload sent back by the Harvest API.
///
/// Harvest communicates application-level failures (validation errors,
/// missing resources, throttling) through HTTP status codes with a JSON error
/// body. The library does not branch on the status: every completed exchange
/// produces an envelope and the caller inspects `status_code` itself.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> harvestapi::Result<()> {
/// let client = harvestapi::HarvestClient::new("12345", "token", "my-app", "dev@example.com")?;
/// let resp = client.users.me().await?;
///
/// if resp.is_success() {
///     println!("user id: {}", resp.data["id"]);
/// } else {
///     eprintln!("harvest returned {}", resp.status_code);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HarvestResponse {
    /// The HTTP status code of the response from Harvest.
    pub status_code: u16,
    /// The decoded JSON payload of the response from Harvest.
    ///
    /// `Value::Null` when the response body was empty (Harvest's DELETE
    /// endpoints return `200 OK` with no body).
    pub data: Value,
}

impl HarvestResponse {
    /// Returns true if the status code is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
