//! CSV output writer.

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::Result;
use crate::record::MessageRecord;

/// Writes records to a CSV file with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Sender`, `Body`
/// - Encoding: UTF-8
pub fn write_csv(records: &[MessageRecord], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(file);
    write_records(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

/// Renders records as a semicolon-delimited CSV string.
pub fn to_csv(records: &[MessageRecord]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());
    write_records(&mut writer, records)?;

    let bytes = writer
        .into_inner()
        .map_err(|e| io::Error::other(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

fn write_records<W: io::Write>(
    writer: &mut csv::Writer<W>,
    records: &[MessageRecord],
) -> Result<()> {
    writer.write_record(["Timestamp", "Sender", "Body"])?;

    for record in records {
        writer.write_record([
            record.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            record.sender.clone(),
            record.body.clone(),
        ])?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::LogParser;
    use std::fs;
    use tempfile::NamedTempFile;

    fn fixture() -> Vec<MessageRecord> {
        LogParser::new().parse(
            "1/2/23, 10:00 am - Alice: hello\n1/2/23, 10:05 am - Bob: hi there",
        )
    }

    #[test]
    fn test_to_csv() {
        let csv = to_csv(&fixture()).unwrap();

        assert!(csv.starts_with("Timestamp;Sender;Body\n"));
        assert!(csv.contains("2023-02-01 10:00;Alice;hello"));
        assert!(csv.contains("2023-02-01 10:05;Bob;hi there"));
    }

    #[test]
    fn test_write_csv() {
        let temp_file = NamedTempFile::new().unwrap();
        write_csv(&fixture(), temp_file.path()).unwrap();

        let content = fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("Alice;hello"));
    }

    #[test]
    fn test_empty_records_still_writes_header() {
        let csv = to_csv(&[]).unwrap();
        assert_eq!(csv, "Timestamp;Sender;Body\n");
    }
}
