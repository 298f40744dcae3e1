//! Batched encoding for vectorized environments.
//!
//! [`BatchedEncoder`] encodes a slice of observations, one per
//! environment, in a single call. The sequential path is a plain loop.
//! The parallel path spawns scoped workers that pull observation indices
//! from a crossbeam job channel and push results back on a second
//! channel; results are reassembled in input order, so both paths return
//! identical output.

use std::thread;

use tracing::{debug, warn};

use nletext_core::{EncodeError, RawObservation, TextObservation};

use crate::config::{ConfigError, EncoderConfig};
use crate::encoder::ObservationEncoder;

// ── Error type ──────────────────────────────────────────────────

/// Error from a batched operation, annotated with the failing index.
#[derive(Debug, PartialEq)]
pub enum BatchError {
    /// Encoding one observation failed.
    Encode {
        /// Index of the observation that failed (0-based).
        index: usize,
        /// The underlying error.
        error: EncodeError,
    },
    /// A worker thread panicked.
    WorkerPanicked {
        /// Index of the worker (0-based).
        worker: usize,
    },
    /// Batch-level argument validation failed.
    InvalidArgument {
        /// Human-readable description of what's wrong.
        reason: String,
    },
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchError::Encode { index, error } => {
                write!(f, "observation {index}: {error}")
            }
            BatchError::WorkerPanicked { worker } => write!(f, "worker {worker} panicked"),
            BatchError::InvalidArgument { reason } => {
                write!(f, "invalid argument: {reason}")
            }
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchError::Encode { error, .. } => Some(error),
            _ => None,
        }
    }
}

// ── BatchedEncoder ──────────────────────────────────────────────

/// Encodes many observations per call.
#[derive(Clone, Debug)]
pub struct BatchedEncoder {
    encoder: ObservationEncoder,
    workers: usize,
}

impl BatchedEncoder {
    /// Create a batched encoder from `config`.
    pub fn new(config: EncoderConfig) -> Result<Self, ConfigError> {
        let workers = config.batch.resolved_worker_count();
        Ok(Self {
            encoder: ObservationEncoder::new(config)?,
            workers,
        })
    }

    /// Wrap an existing encoder with an explicit worker count.
    pub fn from_encoder(encoder: ObservationEncoder, workers: usize) -> Result<Self, BatchError> {
        if workers == 0 {
            return Err(BatchError::InvalidArgument {
                reason: "worker count must be at least 1".into(),
            });
        }
        Ok(Self { encoder, workers })
    }

    /// The single-observation encoder.
    pub fn encoder(&self) -> &ObservationEncoder {
        &self.encoder
    }

    /// Number of worker threads used by [`encode_all_parallel`](Self::encode_all_parallel).
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Encode `batch` on the calling thread.
    pub fn encode_all(
        &self,
        batch: &[RawObservation<'_>],
    ) -> Result<Vec<TextObservation>, BatchError> {
        batch
            .iter()
            .enumerate()
            .map(|(index, obs)| {
                self.encoder
                    .encode(obs)
                    .map_err(|error| BatchError::Encode { index, error })
            })
            .collect()
    }

    /// Encode `batch` across the worker pool.
    ///
    /// Output order matches input order. If several observations fail,
    /// the error for the lowest index is returned.
    pub fn encode_all_parallel(
        &self,
        batch: &[RawObservation<'_>],
    ) -> Result<Vec<TextObservation>, BatchError> {
        let workers = self.workers.min(batch.len());
        if workers <= 1 {
            if batch.len() > 1 {
                warn!(
                    batch = batch.len(),
                    "single worker available, encoding batch sequentially"
                );
            }
            return self.encode_all(batch);
        }
        debug!(batch = batch.len(), workers, "encoding batch in parallel");

        let (job_tx, job_rx) = crossbeam_channel::bounded::<usize>(batch.len());
        for index in 0..batch.len() {
            // Capacity equals the batch size, so this never blocks.
            let _ = job_tx.send(index);
        }
        drop(job_tx);

        let (result_tx, result_rx) =
            crossbeam_channel::unbounded::<(usize, Result<TextObservation, EncodeError>)>();

        thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    let job_rx = job_rx.clone();
                    let result_tx = result_tx.clone();
                    let encoder = &self.encoder;
                    scope.spawn(move || {
                        while let Ok(index) = job_rx.recv() {
                            let result = encoder.encode(&batch[index]);
                            if result_tx.send((index, result)).is_err() {
                                break;
                            }
                        }
                    })
                })
                .collect();
            drop(result_tx);

            let mut slots: Vec<Option<TextObservation>> = vec![None; batch.len()];
            let mut first_error: Option<(usize, EncodeError)> = None;
            for (index, result) in result_rx.iter() {
                match result {
                    Ok(text) => slots[index] = Some(text),
                    Err(error) => {
                        if first_error.as_ref().is_none_or(|(i, _)| index < *i) {
                            first_error = Some((index, error));
                        }
                    }
                }
            }

            let panicked: Vec<usize> = handles
                .into_iter()
                .enumerate()
                .filter_map(|(worker, h)| h.join().is_err().then_some(worker))
                .collect();
            if let Some(&worker) = panicked.first() {
                return Err(BatchError::WorkerPanicked { worker });
            }
            if let Some((index, error)) = first_error {
                return Err(BatchError::Encode { index, error });
            }
            slots
                .into_iter()
                .map(|slot| slot.ok_or(BatchError::WorkerPanicked { worker: 0 }))
                .collect()
        })
    }
}
