use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::PoseError;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{ReportInput, SummaryData, build_summary, format_f32_6};

pub fn write_reports(input: &ReportInput<'_>, out_dir: &Path) -> Result<SummaryData, PoseError> {
    fs::create_dir_all(out_dir)?;

    let summary = build_summary(input);

    let tsv_path = out_dir.join("angles.tsv");
    write_angles_tsv(input, &tsv_path)?;

    let summary_path = out_dir.join("summary.json");
    write_text(&summary_path, &render_summary_json(&summary)?)?;

    let report_path = out_dir.join("report.txt");
    write_text(&report_path, &render_report_text(&summary))?;

    info!(out_dir = %out_dir.display(), "reports written");
    Ok(summary)
}

fn write_angles_tsv(input: &ReportInput<'_>, path: &Path) -> Result<(), PoseError> {
    let mut w = BufWriter::new(File::create(path)?);
    write!(w, "index\tname\tfirst\tmid\tlast\treference")?;
    if input.comparison.is_some() {
        write!(w, "\tcandidate\tscore")?;
    }
    writeln!(w)?;

    for (i, d) in input.layout.angles.iter().enumerate() {
        let reference = input.reference.get(i).copied().unwrap_or(0.0);
        write!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}",
            i,
            d.id,
            d.first.index(),
            d.mid.index(),
            d.last.index(),
            format_f32_6(reference)
        )?;
        if let Some(c) = &input.comparison {
            let candidate = c.candidate.get(i).copied().unwrap_or(0.0);
            let score = c.score.per_angle.get(i).copied().unwrap_or(0.0);
            write!(w, "\t{}\t{}", format_f32_6(candidate), format_f32_6(score))?;
        }
        writeln!(w)?;
    }
    w.flush()?;
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> Result<(), PoseError> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/write.rs"]
mod tests;
