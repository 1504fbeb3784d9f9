//! Shared HTTP plumbing for the hero API.

pub(crate) mod client;
pub(crate) mod endpoints;
