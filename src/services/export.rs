use crate::domain::constants::REPORT_CSV_HEADER;
use crate::domain::models::{ExportOutcome, SummaryReport};
use std::path::Path;

/// Write the summary report as semicolon-delimited CSV.
///
/// The header record is always written. `None` means no report has been
/// generated this session; the file then contains the header line only —
/// that is the expected output, not an error.
pub fn write_summary(
    report: Option<&SummaryReport>,
    path: &Path,
) -> anyhow::Result<ExportOutcome> {
    let mut wtr = csv::WriterBuilder::new().delimiter(b';').from_path(path)?;
    wtr.write_record(REPORT_CSV_HEADER)?;

    let mut rows_written = 0usize;
    if let Some(report) = report {
        for row in &report.rows {
            wtr.write_record(&[
                row.department.clone(),
                row.headcount.to_string(),
                format!("{:.2}", row.min_salary as f64),
                format!("{:.2}", row.max_salary as f64),
                format!("{:.2}", row.avg_salary),
            ])?;
            rows_written += 1;
        }
    }
    wtr.flush()?;

    Ok(ExportOutcome {
        path: path.to_string_lossy().to_string(),
        rows_written,
    })
}
