//! bls-rs
//!
//! A lightweight Rust library for retrieving time-series data from the
//! U.S. Bureau of Labor Statistics public API (v2). Pairs with the `bls` CLI.
//!
//! ### Features
//! - Load the registration key from a local settings file
//! - Fetch one or more series for an inclusive year range in a single request
//! - Parse the BLS response into plain data types
//! - Print a per-data-point report to any writer
//!
//! ### Example
//! ```no_run
//! use bls_rs::{ApiResponse, Client, Payload, Settings};
//!
//! let settings = Settings::load("appsettings.json")?;
//! let payload = Payload::new(
//!     settings.api_key,
//!     vec!["SMU18000000000000001".into()],
//!     2023,
//!     2025,
//! );
//! let client = Client::default();
//! let reply = client.send(&payload)?;
//! if reply.status.is_success() {
//!     let response = ApiResponse::parse(&reply.body)?;
//!     bls_rs::output::write_report(&mut std::io::stdout(), &response, &reply.body)?;
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod api;
pub mod config;
pub mod models;
pub mod output;

pub use api::{ApiReply, Client};
pub use config::{ConfigError, Settings};
pub use models::{ApiResponse, DataPoint, Payload, Results, Series};
