//! HTTP implementation of the [`Gateway`].

use std::time::Duration;

use common::operations::{By, Insert, Perform, Select};
use secrecy::ExposeSecret as _;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracerr::Traced;

use crate::domain::{checkin, user::Session, vacation, CheckIn, VacationRequest};

use super::{Auth, Authorized, Credentials, Error, Gateway};

/// Configuration of an [`Http`] gateway.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the remote API the endpoint paths are appended to.
    pub base_url: String,

    /// Timeout of a single request.
    ///
    /// There is no per-call override: a hung request holds its caller
    /// until this transport-level timeout fires.
    pub timeout: Duration,
}

/// [`Gateway`] speaking HTTP to the remote Stadtwache API.
#[derive(Clone, Debug)]
pub struct Http {
    /// Underlying HTTP client.
    client: reqwest::Client,

    /// Base URL of the remote API, without a trailing slash.
    base_url: String,
}

impl Http {
    /// Creates a new [`Http`] gateway.
    ///
    /// # Errors
    ///
    /// Errors if the underlying HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, Traced<Error>> {
        Ok(Self {
            client: reqwest::Client::builder()
                .timeout(config.timeout)
                .build()
                .map_err(tracerr::from_and_wrap!(=> Error))?,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Builds a request to the provided endpoint `path`, attaching the
    /// bearer credential when present.
    fn request(
        &self,
        method: reqwest::Method,
        path: &str,
        auth: &Auth,
    ) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .request(method, format!("{}{path}", self.base_url));
        if let Some(token) = auth {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Sends the built request and decodes a JSON response, mapping a
    /// non-success status into [`Error::Rejected`] with the
    /// server-provided detail, if any.
    async fn send<T: DeserializeOwned>(
        req: reqwest::RequestBuilder,
    ) -> Result<T, Traced<Error>> {
        let resp = req
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))?;

        let status = resp.status();
        if !status.is_success() {
            let detail =
                resp.json::<Rejection>().await.ok().and_then(|r| r.detail);
            return Err(tracerr::new!(Error::Rejected { status, detail }));
        }

        resp.json().await.map_err(tracerr::from_and_wrap!(=> Error))
    }
}

/// Body of a `POST /api/auth/login` request.
#[derive(Debug, Serialize)]
struct LoginBody<'r> {
    /// Email to authenticate with.
    email: &'r str,

    /// Password to authenticate with.
    password: &'r str,
}

/// Error payload of a rejected call.
#[derive(Debug, Deserialize)]
struct Rejection {
    /// Server-provided reason of the rejection.
    detail: Option<String>,
}

impl Gateway<Perform<Credentials>> for Http {
    type Ok = Session;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Perform(creds): Perform<Credentials>,
    ) -> Result<Self::Ok, Self::Err> {
        Self::send(
            self.request(reqwest::Method::POST, "/api/auth/login", &None)
                .json(&LoginBody {
                    email: creds.email.as_ref(),
                    password: creds.password.expose_secret().as_ref(),
                }),
        )
        .await
    }
}

impl Gateway<Select<By<Vec<CheckIn>, Auth>>> for Http {
    type Ok = Vec<CheckIn>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<CheckIn>, Auth>>,
    ) -> Result<Self::Ok, Self::Err> {
        let auth = by.into_inner();
        Self::send(self.request(reqwest::Method::GET, "/api/checkins", &auth))
            .await
    }
}

impl Gateway<Select<By<Vec<VacationRequest>, Auth>>> for Http {
    type Ok = Vec<VacationRequest>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<VacationRequest>, Auth>>,
    ) -> Result<Self::Ok, Self::Err> {
        let auth = by.into_inner();
        Self::send(self.request(reqwest::Method::GET, "/api/vacations", &auth))
            .await
    }
}

impl Gateway<Insert<Authorized<checkin::Draft>>> for Http {
    type Ok = CheckIn;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Insert(Authorized { auth, payload }): Insert<Authorized<checkin::Draft>>,
    ) -> Result<Self::Ok, Self::Err> {
        Self::send(
            self.request(reqwest::Method::POST, "/api/checkin", &auth)
                .json(&payload),
        )
        .await
    }
}

impl Gateway<Insert<Authorized<vacation::Draft>>> for Http {
    type Ok = VacationRequest;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Insert(Authorized { auth, payload }): Insert<
            Authorized<vacation::Draft>,
        >,
    ) -> Result<Self::Ok, Self::Err> {
        Self::send(
            self.request(reqwest::Method::POST, "/api/vacations", &auth)
                .json(&payload),
        )
        .await
    }
}
