use super::{DurationProbe, ProbeError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Probe field holding the total length in seconds
pub const LENGTH_FIELD: &str = "Length (seconds)";

/// Turns a probe report into a whole-millisecond duration
#[derive(Debug, Clone)]
pub struct DurationResolver<P> {
    probe: P,
}

impl<P: DurationProbe> DurationResolver<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    #[cfg(test)]
    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Duration of `segment` in milliseconds
    pub fn resolve(&self, segment: &Path) -> Result<u64, ProbeError> {
        let report = self.probe.probe(segment)?;
        let seconds = report
            .get(LENGTH_FIELD)
            .copied()
            .ok_or_else(|| ProbeError::MissingField(LENGTH_FIELD.to_string()))?;

        let duration_ms = duration_ms_from_seconds(seconds)?;
        debug!("{}: {} ms", segment.display(), duration_ms);
        Ok(duration_ms)
    }
}

/// Whole seconds, truncated toward zero, then scaled to milliseconds.
///
/// Sub-second precision is dropped: 12.9 s becomes 12000 ms.
pub fn duration_ms_from_seconds(seconds: f64) -> Result<u64, ProbeError> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(ProbeError::InvalidValue {
            field: LENGTH_FIELD.to_string(),
            value: seconds,
        });
    }

    (seconds.trunc() as u64)
        .checked_mul(1000)
        .ok_or(ProbeError::InvalidValue {
            field: LENGTH_FIELD.to_string(),
            value: seconds,
        })
}

/// Resolve every segment on the blocking pool.
///
/// Results come back in the order of `segments`, whatever order the probes
/// finish in.
pub async fn resolve_concurrent<P>(
    resolver: Arc<DurationResolver<P>>,
    segments: Vec<PathBuf>,
) -> Vec<Result<u64, ProbeError>>
where
    P: DurationProbe + Send + Sync + 'static,
{
    let handles: Vec<_> = segments
        .into_iter()
        .map(|segment| {
            let resolver = Arc::clone(&resolver);
            tokio::task::spawn_blocking(move || resolver.resolve(&segment))
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let result = handle
            .await
            .unwrap_or_else(|e| Err(ProbeError::TaskFailed(e.to_string())));
        results.push(result);
    }

    results
}
