//! Marker types.

/// Marker type describing an entity report.
#[derive(Clone, Copy, Debug)]
pub struct Report;

/// Marker type describing a range start.
#[derive(Clone, Copy, Debug)]
pub struct Start;

/// Marker type describing a range end.
#[derive(Clone, Copy, Debug)]
pub struct End;
