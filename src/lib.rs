//! A small Rust client for an IMS inventory-management HTTP API.
//!
//! The flow is deliberately minimal: log in with a username and password to
//! obtain a bearer token, then list the server's asset records in one call.
//! Everything is synchronous; each operation blocks until the round trip
//! completes or the per-request timeout fires.
//!
//! ## Quick start
//! - Configure credentials via environment variables (`IMSAPI_URL`,
//!   `IMSAPI_USERNAME`, `IMSAPI_PASSWORD`) or pass them to [`Connector::new`].
//! - Call [`Connector::authenticate`], then [`Connector::get_assets`].
//!
//! ```no_run
//! use imsapi::Connector;
//!
//! fn main() -> imsapi::Result<()> {
//!     let mut connector = Connector::new("some_username", "some_password", "192.168.1.1:8000", 5)?;
//!     if connector.authenticate()? {
//!         for asset in connector.get_assets()? {
//!             println!("{} {}", asset.id, asset.name);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! A rejected login is reported as `Ok(false)`, not as an error; see
//! [`Error`] for the failure kinds proper.

#![forbid(unsafe_code)]

mod client;
mod config;
mod error;
mod models;
mod util;

pub use client::Connector;
pub use error::{Error, Result};
pub use models::Asset;
