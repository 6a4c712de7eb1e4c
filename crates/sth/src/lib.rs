//! Client for the STH-Comet context-history API.
//!
//! [`SthClient`](client::SthClient) fetches the last-N window of one
//! attribute per call; the [`records`] module decodes the raw history
//! payload into domain readings. The [`SampleSource`](client::SampleSource)
//! trait is the seam the refresh scheduler consumes, so tests can swap in
//! a fake source.

pub mod client;
pub mod records;

pub use client::{SampleSource, SthClient, SthConfig, SthError};
pub use records::{HistoryResponse, RawSample};
