use crate::report::{SummaryData, format_f32_6};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Pose Angle & Similarity Report\n");
    out.push_str("==============================\n\n");

    out.push_str("1. Input\n");
    out.push_str(&format!("Layout: {} ({} angles)\n", data.layout, data.n_angles));
    out.push_str(&format!("Reference: {}\n", data.reference_source));
    if let Some(score) = &data.score {
        out.push_str(&format!("Candidate: {}\n", score.candidate_source));
        out.push_str(&format!("Scoring profile: {}\n", score.profile));
    }
    out.push('\n');

    out.push_str("2. Joint angles (degrees)\n");
    for a in &data.angles {
        match (a.candidate, a.score) {
            (Some(c), Some(s)) => out.push_str(&format!(
                "{:>2} {:<16} ref {:>11} cand {:>11} score {:>11}\n",
                a.index,
                a.name,
                format_f32_6(a.reference),
                format_f32_6(c),
                format_f32_6(s)
            )),
            _ => out.push_str(&format!(
                "{:>2} {:<16} {:>11}\n",
                a.index,
                a.name,
                format_f32_6(a.reference)
            )),
        }
    }
    out.push('\n');

    if let Some(score) = &data.score {
        out.push_str("3. Similarity\n");
        out.push_str(&format!("Mean score: {}\n", format_f32_6(score.mean)));
        out.push_str(&format!(
            "Per-angle median: {}\nPer-angle p10: {}\nPer-angle min: {}\n",
            format_f32_6(score.median),
            format_f32_6(score.p10),
            format_f32_6(score.min)
        ));
        if !score.weakest.is_empty() {
            out.push_str(&format!("Weakest angles: {}\n", score.weakest.join(", ")));
        }
        out.push_str(&format!("Conclusion: {}\n\n", match_statement(score.mean)));
    }

    out.push_str("Tool\n");
    out.push_str(&format!(
        "{} {} (simd: {})\n",
        data.tool.name, data.tool.version, data.tool.simd_backend
    ));

    out
}

pub fn match_statement(mean: f32) -> &'static str {
    if mean >= 80.0 {
        "strong match; the candidate reproduces the reference pose"
    } else if mean >= 50.0 {
        "partial match; some joints deviate noticeably"
    } else {
        "weak match; the candidate pose differs substantially"
    }
}
