//! Utility modules for RFC 3339 handling.

pub(crate) mod civil;
