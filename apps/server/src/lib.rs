//! # atlas-server: the RPC surface of Atlas SMB
//!
//! Exposes every procedure the single-page client calls as a route under
//! `/rpc/`, backed by the atlas-db repositories. The library crate exists so
//! integration tests can build the router against an in-memory database
//! without binding a socket.

pub mod config;
pub mod error;
pub mod rpc;

use atlas_db::Database;

/// Shared application state handed to every handler.
///
/// `Database` wraps a connection pool, so cloning per-request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

pub use rpc::router;
