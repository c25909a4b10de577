//! Batch validation for the file intake surface

use thiserror::Error;

/// Media type a candidate must declare to be accepted.
pub const PDF_MIME: &str = "application/pdf";

/// Most files accepted in one batch.
pub const MAX_BATCH_FILES: usize = 10;

/// A file offered by a drop or picker event, before acceptance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub name: String,
    pub media_type: String,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
        }
    }
}

/// Why a candidate batch was rejected as a whole.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error("empty batch")]
    Empty,

    #[error("`{0}` is not a PDF")]
    NotPdf(String),

    #[error("batch of {count} exceeds the limit of {limit} files")]
    TooMany { count: usize, limit: usize },
}

/// Validates a candidate batch. All-or-nothing: one violation rejects
/// every file in the batch, and the caller keeps its previous selection.
pub fn validate_batch(candidates: &[CandidateFile]) -> Result<(), IntakeError> {
    if candidates.is_empty() {
        return Err(IntakeError::Empty);
    }
    if candidates.len() > MAX_BATCH_FILES {
        return Err(IntakeError::TooMany {
            count: candidates.len(),
            limit: MAX_BATCH_FILES,
        });
    }
    if let Some(bad) = candidates.iter().find(|c| c.media_type != PDF_MIME) {
        return Err(IntakeError::NotPdf(bad.name.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(name: &str) -> CandidateFile {
        CandidateFile::new(name, PDF_MIME)
    }

    #[test]
    fn test_accepts_single_pdf() {
        assert_eq!(validate_batch(&[pdf("paper.pdf")]), Ok(()));
    }

    #[test]
    fn test_accepts_batch_at_limit() {
        let batch: Vec<CandidateFile> = (0..MAX_BATCH_FILES)
            .map(|i| pdf(&format!("paper-{i}.pdf")))
            .collect();
        assert_eq!(validate_batch(&batch), Ok(()));
    }

    #[test]
    fn test_rejects_empty_batch() {
        assert_eq!(validate_batch(&[]), Err(IntakeError::Empty));
    }

    #[test]
    fn test_rejects_oversize_batch() {
        let batch: Vec<CandidateFile> = (0..MAX_BATCH_FILES + 1)
            .map(|i| pdf(&format!("paper-{i}.pdf")))
            .collect();
        assert_eq!(
            validate_batch(&batch),
            Err(IntakeError::TooMany {
                count: MAX_BATCH_FILES + 1,
                limit: MAX_BATCH_FILES,
            })
        );
    }

    #[test]
    fn test_rejects_whole_batch_on_one_non_pdf() {
        let batch = [
            pdf("good.pdf"),
            CandidateFile::new("notes.txt", "text/plain"),
            pdf("also-good.pdf"),
        ];
        assert_eq!(
            validate_batch(&batch),
            Err(IntakeError::NotPdf("notes.txt".to_string()))
        );
    }

    #[test]
    fn test_rejects_pdf_extension_with_wrong_media_type() {
        // the declared media type decides, not the file name
        let batch = [CandidateFile::new("looks-like.pdf", "application/octet-stream")];
        assert!(matches!(
            validate_batch(&batch),
            Err(IntakeError::NotPdf(_))
        ));
    }

    #[test]
    fn test_error_display() {
        let error = IntakeError::TooMany { count: 12, limit: 10 };
        assert_eq!(
            format!("{}", error),
            "batch of 12 exceeds the limit of 10 files"
        );
    }
}
