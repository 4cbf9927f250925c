//! SCOLARIS Client — typed access to the SCOLARIS HTTP API.
//!
//! Mirrors the admin frontend's dispatch contract: every operation
//! moves a [`FetchState`] through Loading → Succeeded/Failed, and a
//! successful mutation is followed by a sequential refetch of the
//! owning school's listing.

mod api;
mod state;
mod store;

pub use api::{ApiClient, ClientError, ClientResource, Listing};
pub use state::FetchState;
pub use store::ResourceStore;
