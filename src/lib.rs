//! Async Rust client for the aaPanel / BT-Panel HTTP control API.
//!
//! One [`Client`] instance represents one authenticated session against one
//! panel endpoint. Every call is a single form-encoded POST carrying two
//! signing fields (`request_token`, `request_time`) derived from the shared
//! API key, plus the operation's own parameters. Session cookies returned by
//! the panel are captured and replayed on subsequent calls to skip the
//! panel-side handshake; the most recent response always wins.
//!
//! The typed operations are grouped by panel surface:
//!
//! - [`system`]: realtime load, system totals, disk usage, panel updates
//! - [`site`]: site lifecycle, domains, backups, rewrite rules, throttling
//! - [`files`]: reading and saving file contents
//!
//! For endpoints not yet covered there is a low-level [`Client::raw`]
//! passthrough that performs the signed call and returns the body verbatim.
//!
//! ```no_run
//! use aapanel_client_sdk::{Client, Result};
//!
//! # async fn demo() -> Result<()> {
//! let client = Client::new("http://10.0.0.14:8888", "api-key")?;
//! let status = client.network_status().await?;
//! println!("one-minute load: {:.2}", status.load.one);
//! # Ok(())
//! # }
//! ```
//!
//! The API key must be whitelisted for the caller's IP in the panel's API
//! settings. The key itself never goes over the wire; see [`auth`] for the
//! signing scheme.

pub mod auth;
mod client;
mod config;
pub mod error;
pub mod files;
mod params;
mod session;
pub mod site;
pub mod system;

pub use client::Client;
pub use config::PanelConfig;
pub use error::{Error, Kind};
pub use params::Params;

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;
