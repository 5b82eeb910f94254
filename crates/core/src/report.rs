//! Final report rendering

use ttlsim_common::cache::CacheStatistics;

use crate::config::OutputFormat;
use crate::errors::Result;

/// Render `stats` in the requested format, newline terminated
pub fn render_report(stats: &CacheStatistics, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(stats.to_string()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&stats.snapshot())?;
            json.push('\n');
            Ok(json)
        }
    }
}
