//! Service contains the client-side core of the Stadtwache application:
//! the session store, the gateway to the remote HTTP API, the in-memory
//! resource cache and the check-in / vacation-request workflows.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod cache;
pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod session;
#[cfg(test)]
pub(crate) mod testing;

#[cfg(doc)]
use self::infra::Gateway;

pub use self::{command::Command, query::Query};

/// Domain service.
///
/// All state mutation goes through [`Command`]s and [`Query`]s executed
/// on this service; the session store and the resource cache are not
/// mutable from the outside.
#[derive(Debug)]
pub struct Service<Gw> {
    /// [`Gateway`] to the remote API.
    gateway: Gw,

    /// Holder of the current session.
    session: session::Store,

    /// Client-held copy of server list data.
    cache: cache::Resources,
}

impl<Gw> Service<Gw> {
    /// Creates a new [`Service`] on top of the provided [`Gateway`],
    /// anonymous and with empty caches.
    pub fn new(gateway: Gw) -> Self {
        Self {
            gateway,
            session: session::Store::default(),
            cache: cache::Resources::default(),
        }
    }

    /// Returns the [`Gateway`] of this [`Service`].
    #[must_use]
    pub fn gateway(&self) -> &Gw {
        &self.gateway
    }

    /// Returns the session [`Store`] of this [`Service`].
    ///
    /// [`Store`]: session::Store
    #[must_use]
    pub fn session(&self) -> &session::Store {
        &self.session
    }

    /// Returns the [`Resources`] cache of this [`Service`].
    ///
    /// [`Resources`]: cache::Resources
    #[must_use]
    pub fn cache(&self) -> &cache::Resources {
        &self.cache
    }
}
