//! [`CheckIn`] definitions.

use common::{define_kind, unit, DateTime, DateTimeOf};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Timestamped duty status report of a field user.
///
/// Immutable once created; lists of check-ins keep the server-assigned
/// order and are never re-sorted client-side.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CheckIn {
    /// ID of this [`CheckIn`].
    pub id: Id,

    /// Reported [`Status`].
    pub status: Status,

    /// Human-readable message accompanying the report.
    #[serde(default)]
    pub message: String,

    /// [`DateTime`] when this [`CheckIn`] was reported.
    ///
    /// [`DateTime`]: common::DateTime
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub timestamp: ReportDateTime,
}

/// ID of a [`CheckIn`].
///
/// Opaque and server-assigned.
#[derive(
    Clone, Debug, Deserialize, Display, Eq, From, Hash, PartialEq, Serialize,
)]
pub struct Id(String);

define_kind! {
    #[doc = "Status reported by a `CheckIn`."]
    enum Status {
        #[doc = "Everything is fine."]
        #[text = "Alles OK"]
        Ok,

        #[doc = "Assistance is needed."]
        #[text = "Hilfe benötigt"]
        HelpNeeded,

        #[doc = "Emergency."]
        #[text = "Notfall"]
        Emergency,

        #[doc = "Report acknowledged and approved."]
        #[text = "Genehmigt"]
        Approved,

        #[doc = "Report rejected."]
        #[text = "Abgelehnt"]
        Rejected,

        #[doc = "Report awaiting acknowledgement."]
        #[text = "Ausstehend"]
        Pending,
    }
}

/// Outgoing [`CheckIn`] payload, built entirely client-side.
#[derive(Clone, Debug, Serialize)]
pub struct Draft {
    /// [`Status`] to report.
    pub status: Status,

    /// Human-readable message derived from the [`Status`].
    pub message: String,

    /// Client-generated timestamp of the report.
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub timestamp: ReportDateTime,
}

impl Draft {
    /// Builds a new [`Draft`] reporting the provided [`Status`], stamped
    /// with the current time and carrying the status' display text as
    /// its message.
    #[must_use]
    pub fn now(status: Status) -> Self {
        Self {
            status,
            message: status.text().to_owned(),
            timestamp: DateTime::now().coerce(),
        }
    }
}

/// [`DateTime`] when a [`CheckIn`] was reported.
///
/// [`DateTime`]: common::DateTime
pub type ReportDateTime = DateTimeOf<(CheckIn, unit::Report)>;

#[cfg(test)]
mod spec {
    use common::DateTime;

    use super::{Draft, Status};

    #[test]
    fn status_texts_match_the_ui() {
        assert_eq!(Status::Ok.text(), "Alles OK");
        assert_eq!(Status::HelpNeeded.text(), "Hilfe benötigt");
        assert_eq!(Status::Emergency.text(), "Notfall");
        assert_eq!(Status::Approved.text(), "Genehmigt");
        assert_eq!(Status::Rejected.text(), "Abgelehnt");
        assert_eq!(Status::Pending.text(), "Ausstehend");
    }

    #[test]
    fn status_is_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::json!(Status::HelpNeeded),
            serde_json::json!("help_needed"),
        );
        assert_eq!("emergency".parse::<Status>().unwrap(), Status::Emergency);
    }

    #[test]
    fn draft_carries_status_text_and_rfc3339_timestamp() {
        let draft = Draft::now(Status::Emergency);
        assert_eq!(draft.message, "Notfall");

        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["status"], "emergency");
        assert_eq!(body["message"], "Notfall");

        let timestamp = body["timestamp"].as_str().unwrap();
        assert!(DateTime::from_rfc3339(timestamp).is_ok());
    }
}
