//! Error kinds shared by the reader, writer and reconciler

use std::fmt;

use crate::doc_type::DocumentType;
use crate::http::TransportError;

/// Failure classification for a synchronization run.
///
/// Only [`Transport`](Self::Transport) and [`Configuration`](Self::Configuration)
/// abort a run. The other kinds are handled where they occur: a missing
/// document on delete is already satisfied, a malformed record is skipped,
/// and an oversized removal set skips the removal step.
#[derive(Debug)]
pub enum SyncError {
    /// Source or index unreachable, or answered with an unexpected status/body
    Transport(TransportError),
    /// Delete of an id the index does not hold
    NotFound { namespace: String, id: String },
    /// Record lacks metadata required to build its document
    MalformedRecord { id: String, reason: String },
    /// Invalid document type, aggregation or filter name
    Configuration(String),
    /// Removal candidates exceed the safety ceiling for this document type
    ExcessiveRemoval {
        doc_type: DocumentType,
        candidates: usize,
        ceiling: usize,
    },
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "ServerError: {e}"),
            Self::NotFound { namespace, id } => write!(f, "{namespace}/{id} not found"),
            Self::MalformedRecord { id, reason } => {
                write!(f, "malformed record {id}: {reason}")
            }
            Self::Configuration(msg) => write!(f, "configuration error: {msg}"),
            Self::ExcessiveRemoval {
                doc_type,
                candidates,
                ceiling,
            } => write!(
                f,
                "{candidates} {doc_type} removal candidates exceed the ceiling of {ceiling}"
            ),
        }
    }
}

impl std::error::Error for SyncError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TransportError> for SyncError {
    fn from(e: TransportError) -> Self {
        Self::Transport(e)
    }
}

impl SyncError {
    /// Whether this error must stop the current run
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Configuration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> SyncError {
        SyncError::Transport(TransportError::Http {
            status: Some(503),
            message: "unavailable".to_string(),
        })
    }

    #[test]
    fn transport_is_fatal() {
        assert!(transport().is_fatal());
    }

    #[test]
    fn configuration_is_fatal() {
        assert!(SyncError::Configuration("bad facet".into()).is_fatal());
    }

    #[test]
    fn per_record_kinds_are_not_fatal() {
        let not_found = SyncError::NotFound {
            namespace: "article".into(),
            id: "scl_S0001".into(),
        };
        let malformed = SyncError::MalformedRecord {
            id: "scl_S0001".into(),
            reason: "missing publisher_id".into(),
        };
        let excessive = SyncError::ExcessiveRemoval {
            doc_type: DocumentType::Journal,
            candidates: 50,
            ceiling: 20,
        };
        assert!(!not_found.is_fatal());
        assert!(!malformed.is_fatal());
        assert!(!excessive.is_fatal());
    }

    #[test]
    fn transport_display_is_labelled_server_error() {
        assert_eq!(format!("{}", transport()), "ServerError: HTTP 503: unavailable");
    }

    #[test]
    fn excessive_removal_display() {
        let err = SyncError::ExcessiveRemoval {
            doc_type: DocumentType::Article,
            candidates: 2500,
            ceiling: 2000,
        };
        assert_eq!(
            err.to_string(),
            "2500 article removal candidates exceed the ceiling of 2000"
        );
    }
}
