//! [`VacationRequest`] definitions.

use std::fmt;

use common::{define_kind, unit, DateOf};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};

/// Date-range leave request awaiting approval.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct VacationRequest {
    /// ID of this [`VacationRequest`].
    pub id: Id,

    /// First day of the requested range.
    #[serde(with = "common::datetime::serde::iso_date")]
    pub start_date: StartDate,

    /// Last day of the requested range, inclusive.
    #[serde(with = "common::datetime::serde::iso_date")]
    pub end_date: EndDate,

    /// Reason for the request.
    pub reason: String,

    /// Approval [`Status`], owned by the server.
    pub status: Status,
}

/// ID of a [`VacationRequest`].
///
/// Opaque and server-assigned.
#[derive(
    Clone, Debug, Deserialize, Display, Eq, From, Hash, PartialEq, Serialize,
)]
pub struct Id(String);

define_kind! {
    #[doc = "Approval status of a `VacationRequest`."]
    enum Status {
        #[doc = "Awaiting a decision."]
        #[text = "Ausstehend"]
        Pending,

        #[doc = "Approved."]
        #[text = "Genehmigt"]
        Approved,

        #[doc = "Rejected."]
        #[text = "Abgelehnt"]
        Rejected,
    }
}

/// Transient vacation-request form, submitted as-is.
///
/// Fields are raw form strings: only presence is validated client-side.
/// In particular, `start_date <= end_date` is NOT checked here; the
/// server owns date ordering.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Draft {
    /// First day of the requested range, as a `YYYY-MM-DD` string.
    pub start_date: String,

    /// Last day of the requested range, as a `YYYY-MM-DD` string.
    pub end_date: String,

    /// Reason for the request.
    pub reason: String,
}

impl Draft {
    /// Checks that every field of this [`Draft`] is filled in.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidDraft`] naming the missing fields.
    pub fn validate(&self) -> Result<(), InvalidDraft> {
        let missing = [
            (self.start_date.as_str(), Field::StartDate),
            (self.end_date.as_str(), Field::EndDate),
            (self.reason.as_str(), Field::Reason),
        ]
        .into_iter()
        .filter_map(|(value, field)| value.trim().is_empty().then_some(field))
        .collect::<Vec<_>>();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(InvalidDraft { missing })
        }
    }
}

/// Error of validating a [`Draft`]: some required fields are empty.
#[derive(Clone, Debug, Error)]
pub struct InvalidDraft {
    /// [`Field`]s missing from the [`Draft`].
    pub missing: Vec<Field>,
}

impl fmt::Display for InvalidDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = self
            .missing
            .iter()
            .map(|field| field.text())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "bitte alle Felder ausfüllen (fehlend: {fields})")
    }
}

define_kind! {
    #[doc = "Required field of a `Draft`."]
    enum Field {
        #[doc = "First day of the requested range."]
        #[text = "Startdatum"]
        StartDate,

        #[doc = "Last day of the requested range."]
        #[text = "Enddatum"]
        EndDate,

        #[doc = "Reason for the request."]
        #[text = "Grund"]
        Reason,
    }
}

/// First day of a [`VacationRequest`].
pub type StartDate = DateOf<(VacationRequest, unit::Start)>;

/// Last day of a [`VacationRequest`], inclusive.
pub type EndDate = DateOf<(VacationRequest, unit::End)>;
