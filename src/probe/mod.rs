//! Segment duration probing

mod resolver;
mod sox;

pub use resolver::{resolve_concurrent, DurationResolver};
#[cfg(test)]
pub(crate) use resolver::LENGTH_FIELD;
pub use sox::SoxProbe;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Numeric fields reported by a probe, keyed by the probe's own field names
pub type ProbeReport = HashMap<String, f64>;

/// Something that can measure an audio segment
pub trait DurationProbe {
    fn probe(&self, segment: &Path) -> Result<ProbeReport, ProbeError>;
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Segment not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with code {exit_code}: {message}")]
    CommandFailed {
        tool: String,
        exit_code: i32,
        message: String,
    },

    #[error("Probe output has no {0:?} field")]
    MissingField(String),

    #[error("Probe reported an unusable {field:?} value: {value}")]
    InvalidValue { field: String, value: f64 },

    #[error("Probe task failed: {0}")]
    TaskFailed(String),
}
