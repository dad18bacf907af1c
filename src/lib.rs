//! # Simple blocking client for the easyDNS REST API.
//!
//! Creates and deletes TXT records through the [easyDNS REST API], as needed
//! for DNS-01 challenges and other domain-ownership checks.
//!
//! ## Examples
//!
//! ```no_run
//! use easydns::Client;
//!
//! let client = Client::builder()
//!     .token("<TOKEN>")
//!     .key("<KEY>")
//!     .build()
//!     .unwrap();
//!
//! let handle = client
//!     .add_txt_record("_acme-challenge.example.com", "<KEY AUTHORIZATION>", 300)
//!     .unwrap();
//!
//! client.delete_txt_record(&handle).unwrap();
//! ```
//!
//! Requests are logged with [tracing] at the debug level; no subscriber is installed.
//!
//! [easyDNS REST API]: https://rest.easydns.net

mod client;
mod errors;
pub mod record;
mod utils;

pub use client::*;
pub use errors::*;
