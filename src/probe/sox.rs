use super::{DurationProbe, ProbeError, ProbeReport};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// Probe backed by `sox <file> -n stat`
#[derive(Debug, Clone)]
pub struct SoxProbe {
    sox: PathBuf,
}

impl SoxProbe {
    pub fn new(sox: impl Into<PathBuf>) -> Self {
        Self { sox: sox.into() }
    }

    fn tool_name(&self) -> String {
        self.sox.display().to_string()
    }
}

impl Default for SoxProbe {
    fn default() -> Self {
        Self::new("sox")
    }
}

impl DurationProbe for SoxProbe {
    fn probe(&self, segment: &Path) -> Result<ProbeReport, ProbeError> {
        if !segment.exists() {
            return Err(ProbeError::NotFound(segment.to_path_buf()));
        }

        debug!("Probing {} with {}", segment.display(), self.tool_name());

        let output = Command::new(&self.sox)
            .arg(segment)
            .args(["-n", "stat"])
            .output()
            .map_err(|e| ProbeError::Spawn {
                tool: self.tool_name(),
                source: e,
            })?;

        // The stat effect reports on stderr, not stdout
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            return Err(ProbeError::CommandFailed {
                tool: self.tool_name(),
                exit_code: output.status.code().unwrap_or(-1),
                message: stderr.trim().to_string(),
            });
        }

        Ok(parse_stat_output(&stderr))
    }
}

/// Parse `key: value` lines from the sox stat effect.
///
/// Lines without a colon or with a non-numeric value are skipped.
pub fn parse_stat_output(output: &str) -> ProbeReport {
    let mut report = ProbeReport::new();

    for line in output.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };

        let key = key.trim();
        match value.trim().parse::<f64>() {
            Ok(v) => {
                report.insert(key.to_string(), v);
            }
            Err(_) => {
                if !key.is_empty() {
                    warn!("Ignoring non-numeric probe field {:?}", key);
                }
            }
        }
    }

    report
}
