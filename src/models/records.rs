use serde::{Deserialize, Serialize};

/// One analyzed item as returned by the analysis service. Received wholesale,
/// rendered once, never persisted.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnalyzedRecord {
    pub title: String,
    // `type` on the wire
    #[serde(rename = "type")]
    pub kind: String,
}

impl AnalyzedRecord {
    /// List-entry text: `"{title} ({type})"`.
    pub fn display_line(&self) -> String {
        format!("{} ({})", self.title, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_wire_type_field() {
        let body = r#"[{"title":"Doc A","type":"pdf"},{"title":"Doc B","type":"note"}]"#;
        let records: Vec<AnalyzedRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Doc A");
        assert_eq!(records[0].kind, "pdf");
        assert_eq!(records[1].kind, "note");
    }

    #[test]
    fn test_display_line_order_preserved() {
        let body = r#"[{"title":"Doc A","type":"pdf"},{"title":"Doc B","type":"note"}]"#;
        let records: Vec<AnalyzedRecord> = serde_json::from_str(body).unwrap();
        let lines: Vec<String> = records.iter().map(AnalyzedRecord::display_line).collect();
        assert_eq!(lines, vec!["Doc A (pdf)", "Doc B (note)"]);
    }

    #[test]
    fn test_empty_array() {
        let records: Vec<AnalyzedRecord> = serde_json::from_str("[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(serde_json::from_str::<Vec<AnalyzedRecord>>("<!DOCTYPE html>").is_err());
        assert!(serde_json::from_str::<Vec<AnalyzedRecord>>(r#"{"title":"x"}"#).is_err());
    }

    #[test]
    fn test_serializes_back_to_type() {
        let record = AnalyzedRecord {
            title: "Doc A".to_string(),
            kind: "pdf".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""type":"pdf""#));
        assert!(!json.contains("kind"));
    }
}
