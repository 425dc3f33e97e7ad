//! [`Command`] definition.

pub mod login;
pub mod logout;
pub mod refresh_resources;
pub mod submit_check_in;
pub mod submit_vacation_request;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    login::Login, logout::Logout, refresh_resources::RefreshResources,
    submit_check_in::SubmitCheckIn,
    submit_vacation_request::SubmitVacationRequest,
};
