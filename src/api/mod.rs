//! Resource group modules, one per Harvest REST collection.
//!
//! Each group is a stateless set of methods over a fixed base path plus a
//! reference to the shared transport. Methods build the concrete path,
//! serialize an optional body or query, and return the raw
//! [`HarvestResponse`](crate::HarvestResponse) envelope.

mod clients;
mod company;
mod contacts;
mod estimates;
mod expenses;
mod invoices;
mod projects;
mod roles;
mod tasks;
mod time_entries;
mod users;

pub use clients::*;
pub use company::*;
pub use contacts::*;
pub use estimates::*;
pub use expenses::*;
pub use invoices::*;
pub use projects::*;
pub use roles::*;
pub use tasks::*;
pub use time_entries::*;
pub use users::*;

use serde::Serialize;

/// A recipient of an invoice or estimate message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageRecipient {
    /// Display name of the recipient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email address the message is sent to.
    pub email: String,
}

/// Body for the message endpoints that only flip a resource's state
/// (send/accept/decline/close/re-open). The sole field selects the action.
#[derive(Debug, Serialize)]
pub(crate) struct EventTypeRequest {
    pub(crate) event_type: &'static str,
}

/// Body shared by invoice and estimate item category create/update, which
/// take nothing but a name.
#[derive(Debug, Serialize)]
pub(crate) struct ItemCategoryRequest<'a> {
    pub(crate) name: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_body_has_single_field() {
        let body = EventTypeRequest { event_type: "send" };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"event_type": "send"})
        );
    }

    #[test]
    fn recipient_name_is_optional() {
        let recipient = MessageRecipient {
            name: None,
            email: "billing@example.com".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&recipient).unwrap(),
            serde_json::json!({"email": "billing@example.com"})
        );
    }
}
