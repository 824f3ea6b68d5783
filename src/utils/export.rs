//! Export - CSV Export of the Loaded Rows
//!
//! Writes a header row from the column labels followed by one line per loaded
//! row, to `export-<ISO-8601 timestamp>.csv`.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use directories::UserDirs;

use crate::domain::column::ProcessedColumn;
use crate::domain::config::ExportConfig;
use crate::domain::record::{Record, cell_text};
use crate::error::{Error, Result};
use crate::utils::config_store::app_data_dir;

/// `export-2024-05-01T10-30-00.123Z.csv` (colons replaced so the name is
/// valid on every platform)
pub fn export_file_name(now: DateTime<Utc>) -> String {
    let stamp = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace(':', "-");
    format!("export-{stamp}.csv")
}

/// Write rows as CSV
pub fn write_csv<W: Write>(writer: W, columns: &[ProcessedColumn], rows: &[Record]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(columns.iter().map(|c| c.descriptor.header_label()))?;
    for row in rows {
        csv.write_record(
            columns
                .iter()
                .map(|c| cell_text(row, &c.descriptor.field)),
        )?;
    }
    csv.flush()?;
    Ok(())
}

/// Export into `dir`, returning the written file
pub fn export_to_dir(
    dir: &Path,
    columns: &[ProcessedColumn],
    rows: &[Record],
    now: DateTime<Utc>,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(now));
    let file = File::create(&path)?;
    write_csv(file, columns, rows)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "Exported CSV");
    Ok(path)
}

/// Configured export directory, else the download directory, else the data dir
pub fn export_dir(config: &ExportConfig) -> Result<PathBuf> {
    if let Some(dir) = &config.directory {
        return Ok(dir.clone());
    }
    if let Some(dir) = UserDirs::new().and_then(|d| d.download_dir().map(Path::to_path_buf)) {
        return Ok(dir);
    }
    app_data_dir().map_err(|e| Error::invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::column::{ColumnDescriptor, process_columns};
    use chrono::TimeZone;
    use serde_json::json;

    fn columns() -> Vec<ProcessedColumn> {
        process_columns(&[
            ColumnDescriptor::new("id").header("ID"),
            ColumnDescriptor::new("name"),
            ColumnDescriptor::new("company.name").header("Company"),
        ])
    }

    fn rows() -> Vec<Record> {
        json!([
            { "id": 1, "name": "Doe, John", "company": { "name": "ABC" } },
            { "id": 2, "name": "Ann" },
        ])
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|r| r.as_object().cloned())
        .collect()
    }

    #[test]
    fn file_name_is_timestamped() {
        let now = Utc
            .with_ymd_and_hms(2024, 5, 1, 10, 30, 0)
            .single()
            .expect("valid time");
        assert_eq!(export_file_name(now), "export-2024-05-01T10-30-00.000Z.csv");
    }

    #[test]
    fn csv_has_header_and_quoted_cells() {
        let mut out = Vec::new();
        write_csv(&mut out, &columns(), &rows()).expect("csv");
        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text, "ID,name,Company\n1,\"Doe, John\",ABC\n2,Ann,\n");
    }

    #[test]
    fn export_writes_file() {
        let dir = std::env::temp_dir().join(format!("rest-grid-export-{}", std::process::id()));
        let path = export_to_dir(&dir, &columns(), &rows(), Utc::now()).expect("export");
        let written = std::fs::read_to_string(&path).expect("read back");
        let _ = std::fs::remove_dir_all(&dir);

        assert!(written.starts_with("ID,name,Company\n"));
        assert_eq!(written.lines().count(), 3);
    }

    #[test]
    fn configured_directory_wins() {
        let config = ExportConfig {
            directory: Some(PathBuf::from("/tmp/exports")),
        };
        assert_eq!(export_dir(&config).expect("dir"), PathBuf::from("/tmp/exports"));
    }
}
