use crate::error::PoseError;
use crate::report::SummaryData;

pub fn render_summary_json(data: &SummaryData) -> Result<String, PoseError> {
    let mut out = serde_json::to_string_pretty(data)?;
    out.push('\n');
    Ok(out)
}
