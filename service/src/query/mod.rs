//! [`Query`] definition.

pub mod checkins;
pub mod vacations;

/// [`Query`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Query;

/// Policy applied when a list fetch fails.
///
/// Kept explicit on the fetch operation (rather than buried in a
/// generic error handler) so callers and tests can assert it directly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Fallback {
    /// Swallow the failure and resolve to an empty list.
    ///
    /// The corresponding cache slot ends up empty and the screen keeps
    /// rendering its empty state instead of an error.
    EmptyList,

    /// Return the failure to the caller.
    Propagate,
}
