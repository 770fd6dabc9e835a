//! Shared constants used across the application.

/// User agent sent with the forum search request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Atom namespace for the `<feed>` root element.
pub const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";
