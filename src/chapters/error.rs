use thiserror::Error;

use crate::probe::ProbeError;

/// Errors raised while assembling a chapter tree.
///
/// Chapter-scoped variants carry the 1-based ordinal and the title so the
/// CLI can report exactly which entry aborted the build.
#[derive(Debug, Error)]
pub enum ChapterError {
    #[error("Invalid chapter list: {0}")]
    Validation(String),

    #[error("Chapter {ordinal} ({title:?}) is invalid: {reason}")]
    InvalidChapter {
        ordinal: usize,
        title: String,
        reason: String,
    },

    #[error("Chapter {ordinal} ({title:?}): could not resolve duration: {source}")]
    Resolution {
        ordinal: usize,
        title: String,
        #[source]
        source: ProbeError,
    },

    #[error("Chapter {ordinal} ({title:?}): could not read image {image}: {source}")]
    Storage {
        ordinal: usize,
        title: String,
        image: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Chapter {ordinal} ({title:?}): timeline reaches {end_ms} ms, past the 0xFFFFFFFF time sentinel")]
    TimeOverflow {
        ordinal: usize,
        title: String,
        end_ms: u64,
    },
}

impl ChapterError {
    /// Short name of the error class, used in the one-line CLI failure report.
    pub fn kind(&self) -> &'static str {
        match self {
            ChapterError::Validation(_) | ChapterError::InvalidChapter { .. } => "validation",
            ChapterError::Resolution { .. } => "resolution",
            ChapterError::Storage { .. } => "storage",
            ChapterError::TimeOverflow { .. } => "overflow",
        }
    }

    /// Ordinal of the chapter that caused the failure, if any.
    pub fn ordinal(&self) -> Option<usize> {
        match self {
            ChapterError::Validation(_) => None,
            ChapterError::InvalidChapter { ordinal, .. }
            | ChapterError::Resolution { ordinal, .. }
            | ChapterError::Storage { ordinal, .. }
            | ChapterError::TimeOverflow { ordinal, .. } => Some(*ordinal),
        }
    }
}

pub type ChapterResult<T> = Result<T, ChapterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_ordinal() {
        let err = ChapterError::Validation("no chapters".to_string());
        assert_eq!(err.kind(), "validation");
        assert_eq!(err.ordinal(), None);

        let err = ChapterError::Resolution {
            ordinal: 2,
            title: "The Raven".to_string(),
            source: ProbeError::MissingField("Length (seconds)".to_string()),
        };
        assert_eq!(err.kind(), "resolution");
        assert_eq!(err.ordinal(), Some(2));
        assert!(err.to_string().contains("Chapter 2"));
        assert!(err.to_string().contains("The Raven"));
    }
}
