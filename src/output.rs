//! Console report over a parsed response.
//!
//! Purely a sequential traversal with write side effects. Series and data
//! points are printed in the order the API returned them; nothing is
//! re-sorted.

use crate::models::ApiResponse;
use std::io::{self, Write};

/// Write the report: status, response time, the full raw body, then one
/// line per data point grouped by series. API messages are not printed
/// separately; they reach the reader inside the raw body.
///
/// Absent `status`/`results` print as `unknown`/no series section rather
/// than failing.
pub fn write_report<W: Write>(w: &mut W, response: &ApiResponse, raw_body: &str) -> io::Result<()> {
    writeln!(
        w,
        "Status: {}",
        response.status.as_deref().unwrap_or("unknown")
    )?;
    match response.response_time {
        Some(ms) => writeln!(w, "Response Time: {}", ms)?,
        None => writeln!(w, "Response Time: unknown")?,
    }
    writeln!(w, "{}", raw_body)?;

    if let Some(results) = &response.results {
        for series in &results.series {
            writeln!(w, "\nSeries ID: {}", series.series_id)?;
            for point in &series.data {
                writeln!(
                    w,
                    "Year: {}, Month: {}, Value: {}",
                    point.year, point.period_name, point.value
                )?;
            }
        }
    }
    Ok(())
}
