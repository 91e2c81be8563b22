//! Pubstats Core - Common infrastructure for publication index synchronization
//!
//! Shared pieces used by the source reader, the shaper, the index writer
//! and the reconciler: document types, error kinds, the blocking HTTP
//! facade, logging and progress reporting.

pub mod doc_type;
pub mod error;
pub mod http;
pub mod logging;
pub mod progress;
pub mod shutdown;

// Re-exports for convenience
pub use doc_type::DocumentType;
pub use error::SyncError;
pub use http::{HttpClient, HttpConfig, HttpResponse, SHARED_RUNTIME, TransportError};
pub use logging::{IndicatifLogger, init_logging};
pub use progress::{ProgressContext, SharedProgress, fmt_num};
pub use shutdown::{clear_shutdown, is_shutdown_requested, request_shutdown, shutdown_flag};
