use thiserror::Error;

/// Failures that end a benchmark invocation.
///
/// Every variant maps to a distinct process exit code so scripts wrapping
/// the binary can tell a configuration mistake from a sort that produced an
/// out-of-order list.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BenchError {
    #[error("unknown pattern '{name}' (expected one of: random, ascending, descending, organpipe, sawtooth, staggered)")]
    UnknownPattern { name: String },

    #[error("sort left the {pattern} list out of order (n = {n})")]
    VerifyFailed { pattern: &'static str, n: usize },

    #[error("could not emit result record: {detail}")]
    Emit { detail: String },
}

impl BenchError {
    /// Process exit code for this failure class.
    ///
    /// 2 is an unknown distribution name, 3 is a post-sort order violation,
    /// 1 covers everything else (the same code the usage path uses).
    pub fn exit_code(&self) -> i32 {
        match self {
            BenchError::UnknownPattern { .. } => 2,
            BenchError::VerifyFailed { .. } => 3,
            BenchError::Emit { .. } => 1,
        }
    }
}

pub type BenchResult<T> = Result<T, BenchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_class() {
        let unknown = BenchError::UnknownPattern {
            name: "zigzag".to_string(),
        };
        let unsorted = BenchError::VerifyFailed {
            pattern: "random",
            n: 100,
        };
        let emit = BenchError::Emit {
            detail: "broken pipe".to_string(),
        };

        assert_eq!(unknown.exit_code(), 2);
        assert_eq!(unsorted.exit_code(), 3);
        assert_eq!(emit.exit_code(), 1);
    }

    #[test]
    fn test_unknown_pattern_message_names_the_offender_and_the_choices() {
        let err = BenchError::UnknownPattern {
            name: "zigzag".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("zigzag"));
        assert!(msg.contains("organpipe"));
        assert!(msg.contains("staggered"));
    }

    #[test]
    fn test_verify_failed_message_carries_pattern_and_size() {
        let err = BenchError::VerifyFailed {
            pattern: "sawtooth",
            n: 1000,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("sawtooth"));
        assert!(msg.contains("1000"));
        assert!(msg.contains("out of order"));
    }
}
