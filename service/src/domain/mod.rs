//! Domain definitions.

pub mod checkin;
pub mod user;
pub mod vacation;

pub use self::{
    checkin::CheckIn,
    user::{Session, User},
    vacation::VacationRequest,
};
