//! Screening result types

use serde::{Deserialize, Serialize};

/// Summary the analysis service returns for one screened batch.
///
/// The wire form is camelCase (`goodCount`, `badCount`, `pdfCount`).
/// Unknown fields are ignored and missing fields default, so the UI only
/// depends on the fields it actually renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisResult {
    pub topic: String,
    pub good_count: u32,
    pub bad_count: u32,
    pub pdf_count: u32,

    /// Mean per-document confidence in [0, 1].
    pub confidence: f64,
}

impl AnalysisResult {
    /// Confidence as a whole-number percentage for display.
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_summary() {
        let json = r#"{"topic":"X","goodCount":7,"badCount":3,"pdfCount":10,"confidence":0.85}"#;
        let result: AnalysisResult = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(result.topic, "X");
        assert_eq!(result.good_count, 7);
        assert_eq!(result.bad_count, 3);
        assert_eq!(result.pdf_count, 10);
        assert!((result.confidence - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialize_missing_fields_default() {
        let json = r#"{"topic":"COVID-19 in pregnancy"}"#;
        let result: AnalysisResult = serde_json::from_str(json).expect("deserialize failed");
        assert_eq!(result.topic, "COVID-19 in pregnancy");
        assert_eq!(result.good_count, 0);
        assert_eq!(result.pdf_count, 0);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_serialize_camel_case() {
        let result = AnalysisResult {
            topic: "X".to_string(),
            good_count: 7,
            bad_count: 3,
            pdf_count: 10,
            confidence: 0.85,
        };
        let json = serde_json::to_string(&result).expect("serialize failed");
        assert!(json.contains("\"goodCount\":7"));
        assert!(json.contains("\"badCount\":3"));
        assert!(json.contains("\"pdfCount\":10"));
        assert!(json.contains("\"confidence\":0.85"));
    }

    #[test]
    fn test_confidence_percent() {
        let result = AnalysisResult {
            confidence: 0.85,
            ..Default::default()
        };
        assert_eq!(result.confidence_percent(), 85);
    }

    #[test]
    fn test_confidence_percent_rounds() {
        let result = AnalysisResult {
            confidence: 0.846,
            ..Default::default()
        };
        assert_eq!(result.confidence_percent(), 85);
    }
}
