//! JSON output writer.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::record::MessageRecord;

/// Renders records as a pretty-printed JSON array.
///
/// All fields are included, derived calendar fields too, so consumers can
/// group without reparsing timestamps.
pub fn to_json(records: &[MessageRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Writes records to a JSON file.
pub fn write_json(records: &[MessageRecord], output_path: impl AsRef<Path>) -> Result<()> {
    fs::write(output_path, to_json(records)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::LogParser;
    use tempfile::NamedTempFile;

    fn fixture() -> Vec<MessageRecord> {
        LogParser::new().parse("1/2/23, 10:00 am - Alice: hello")
    }

    #[test]
    fn test_to_json() {
        let json = to_json(&fixture()).unwrap();

        assert!(json.contains("\"sender\": \"Alice\""));
        assert!(json.contains("\"body\": \"hello\""));
        assert!(json.contains("\"period\": \"10-11\""));
    }

    #[test]
    fn test_json_round_trip() {
        let records = fixture();
        let json = to_json(&records).unwrap();
        let parsed: Vec<MessageRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(records, parsed);
    }

    #[test]
    fn test_write_json() {
        let temp_file = NamedTempFile::new().unwrap();
        write_json(&fixture(), temp_file.path()).unwrap();

        let content = fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("Alice"));
    }

    #[test]
    fn test_empty_records() {
        assert_eq!(to_json(&[]).unwrap(), "[]");
    }
}
