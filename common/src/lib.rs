//! MARS Common Library
//!
//! Types and pure logic shared with the Web (WASM) front end

pub mod chart;
pub mod error;
pub mod intake;
pub mod topics;
pub mod types;

pub use chart::{pie_slices, slice_path, Slice};
pub use error::{Error, Result};
pub use intake::{validate_batch, CandidateFile, IntakeError, MAX_BATCH_FILES, PDF_MIME};
pub use topics::{filter_topics, TOPIC_CATALOG};
pub use types::AnalysisResult;
