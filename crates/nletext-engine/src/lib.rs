//! Observation encoder for NetHack learning environments.
//!
//! [`ObservationEncoder`] turns one raw observation into the five text
//! sections of a [`TextObservation`](nletext_core::TextObservation).
//! [`BatchedEncoder`] does the same for a batch, either sequentially or
//! over a scoped worker pool.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batched;
pub mod config;
pub mod encoder;
pub mod metrics;

pub use batched::{BatchError, BatchedEncoder};
pub use config::{BatchConfig, ConfigError, EncoderConfig};
pub use encoder::ObservationEncoder;
pub use metrics::EncodeMetrics;
