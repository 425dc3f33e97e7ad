//! Test doubles for the [`Gateway`] seam.
//!
//! [`Mock`] answers every API operation from programmable in-memory
//! state and records each issued [`Call`], so tests can assert both
//! outcomes and traffic.

use std::sync::Mutex;

use common::operations::{By, Insert, Perform, Select};
use common::{Date, DateTime};
use tracerr::Traced;

use crate::{
    domain::{
        checkin,
        user::{session::Session, Role, User},
        vacation, CheckIn, VacationRequest,
    },
    infra::gateway::{Auth, Authorized, Credentials, Error, Gateway},
};

/// Token every [`session`] carries.
pub(crate) const TOKEN: &str = "test-token";

/// Programmable in-memory [`Gateway`].
#[derive(Debug, Default)]
pub(crate) struct Mock {
    /// Mutable state of this [`Mock`].
    state: Mutex<State>,
}

/// State of a [`Mock`].
#[derive(Debug, Default)]
struct State {
    /// Outcome of the next login call ([`None`] means rejection).
    login: Option<Session>,

    /// Canned list of check-ins.
    checkins: Vec<CheckIn>,

    /// Canned list of vacation requests.
    vacations: Vec<VacationRequest>,

    /// Failure injected into the next check-ins fetch.
    fail_checkins: Option<Error>,

    /// Failure injected into the next vacations fetch.
    fail_vacations: Option<Error>,

    /// Failure injected into the next check-in creation.
    fail_create_checkin: Option<Error>,

    /// Failure injected into the next vacation creation.
    fail_create_vacation: Option<Error>,

    /// Calls issued so far.
    calls: Vec<Call>,
}

/// A call issued to a [`Mock`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Call {
    /// Login attempt.
    Login {
        /// Email the attempt was made with.
        email: String,
    },

    /// Check-ins list fetch.
    ListCheckIns {
        /// Whether a bearer token was attached.
        authorized: bool,
    },

    /// Vacation requests list fetch.
    ListVacations {
        /// Whether a bearer token was attached.
        authorized: bool,
    },

    /// Check-in creation.
    CreateCheckIn {
        /// Reported status.
        status: checkin::Status,

        /// Accompanying message.
        message: String,

        /// Client-generated RFC 3339 timestamp.
        timestamp: String,

        /// Whether a bearer token was attached.
        authorized: bool,
    },

    /// Vacation request creation.
    CreateVacation {
        /// First day of the requested range, as submitted.
        start_date: String,

        /// Last day of the requested range, as submitted.
        end_date: String,

        /// Reason, as submitted.
        reason: String,

        /// Whether a bearer token was attached.
        authorized: bool,
    },
}

impl Mock {
    /// Makes the next login attempt succeed with the given [`Session`].
    pub(crate) fn respond_login(&self, session: Session) {
        self.state.lock().unwrap().login = Some(session);
    }

    /// Sets the canned check-ins list.
    pub(crate) fn respond_checkins(&self, list: Vec<CheckIn>) {
        self.state.lock().unwrap().checkins = list;
    }

    /// Sets the canned vacation requests list.
    pub(crate) fn respond_vacations(&self, list: Vec<VacationRequest>) {
        self.state.lock().unwrap().vacations = list;
    }

    /// Injects a failure into the next check-ins fetch.
    pub(crate) fn fail_checkins(&self, err: Error) {
        self.state.lock().unwrap().fail_checkins = Some(err);
    }

    /// Injects a failure into the next vacations fetch.
    pub(crate) fn fail_vacations(&self, err: Error) {
        self.state.lock().unwrap().fail_vacations = Some(err);
    }

    /// Injects a failure into the next check-in creation.
    pub(crate) fn fail_create_checkin(&self, err: Error) {
        self.state.lock().unwrap().fail_create_checkin = Some(err);
    }

    /// Injects a failure into the next vacation creation.
    pub(crate) fn fail_create_vacation(&self, err: Error) {
        self.state.lock().unwrap().fail_create_vacation = Some(err);
    }

    /// Returns every [`Call`] issued so far.
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }
}

impl Gateway<Perform<Credentials>> for Mock {
    type Ok = Session;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Perform(creds): Perform<Credentials>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Login {
            email: AsRef::<str>::as_ref(&creds.email).to_owned(),
        });
        state.login.take().ok_or_else(|| {
            tracerr::new!(rejected_with(401, "Ungültige Anmeldedaten"))
        })
    }
}

impl Gateway<Select<By<Vec<CheckIn>, Auth>>> for Mock {
    type Ok = Vec<CheckIn>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<CheckIn>, Auth>>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::ListCheckIns {
            authorized: by.into_inner().is_some(),
        });
        match state.fail_checkins.take() {
            Some(e) => Err(tracerr::new!(e)),
            None => Ok(state.checkins.clone()),
        }
    }
}

impl Gateway<Select<By<Vec<VacationRequest>, Auth>>> for Mock {
    type Ok = Vec<VacationRequest>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<VacationRequest>, Auth>>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::ListVacations {
            authorized: by.into_inner().is_some(),
        });
        match state.fail_vacations.take() {
            Some(e) => Err(tracerr::new!(e)),
            None => Ok(state.vacations.clone()),
        }
    }
}

impl Gateway<Insert<Authorized<checkin::Draft>>> for Mock {
    type Ok = CheckIn;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Insert(Authorized { auth, payload }): Insert<Authorized<checkin::Draft>>,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateCheckIn {
            status: payload.status,
            message: payload.message.clone(),
            timestamp: payload.timestamp.to_rfc3339(),
            authorized: auth.is_some(),
        });
        match state.fail_create_checkin.take() {
            Some(e) => Err(tracerr::new!(e)),
            None => Ok(CheckIn {
                id: "created".to_owned().into(),
                status: payload.status,
                message: payload.message,
                timestamp: payload.timestamp,
            }),
        }
    }
}

impl Gateway<Insert<Authorized<vacation::Draft>>> for Mock {
    type Ok = VacationRequest;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Insert(Authorized { auth, payload }): Insert<
            Authorized<vacation::Draft>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateVacation {
            start_date: payload.start_date.clone(),
            end_date: payload.end_date.clone(),
            reason: payload.reason.clone(),
            authorized: auth.is_some(),
        });
        match state.fail_create_vacation.take() {
            Some(e) => Err(tracerr::new!(e)),
            None => Ok(vacation_from_draft(&payload)),
        }
    }
}

/// Creates a [`Session`] of a user with the provided [`Role`].
pub(crate) fn session(role: Role) -> Session {
    Session {
        user: User {
            id: "u1".to_owned().into(),
            username: "Admin".to_owned().into(),
            role,
        },
        token: TOKEN.to_owned().into(),
    }
}

/// Creates a [`CheckIn`] with the provided `id` and `status`.
pub(crate) fn checkin(id: &str, status: checkin::Status) -> CheckIn {
    CheckIn {
        id: id.to_owned().into(),
        status,
        message: status.text().to_owned(),
        timestamp: DateTime::now().coerce(),
    }
}

/// Creates a pending [`VacationRequest`] with the provided dates.
pub(crate) fn vacation(id: &str, start: &str, end: &str) -> VacationRequest {
    VacationRequest {
        id: id.to_owned().into(),
        start_date: Date::from_iso(start).expect("valid date").coerce(),
        end_date: Date::from_iso(end).expect("valid date").coerce(),
        reason: "Familienurlaub".to_owned(),
        status: vacation::Status::Pending,
    }
}

/// Echoes a created [`VacationRequest`] back from its [`Draft`].
///
/// [`Draft`]: vacation::Draft
fn vacation_from_draft(draft: &vacation::Draft) -> VacationRequest {
    VacationRequest {
        id: "created".to_owned().into(),
        start_date: Date::from_iso(&draft.start_date)
            .expect("valid date")
            .coerce(),
        end_date: Date::from_iso(&draft.end_date)
            .expect("valid date")
            .coerce(),
        reason: draft.reason.clone(),
        status: vacation::Status::Pending,
    }
}

/// Creates an [`Error::Rejected`] with the provided HTTP status.
pub(crate) fn rejected(status: u16) -> Error {
    Error::Rejected {
        status: reqwest::StatusCode::from_u16(status).expect("valid status"),
        detail: None,
    }
}

/// Creates an [`Error::Rejected`] with the provided HTTP status and
/// server detail.
pub(crate) fn rejected_with(status: u16, detail: &str) -> Error {
    Error::Rejected {
        status: reqwest::StatusCode::from_u16(status).expect("valid status"),
        detail: Some(detail.to_owned()),
    }
}
