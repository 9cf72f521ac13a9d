use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use posescore::input::load_pose_file;
use posescore::report::format_f32_6;
use posescore::report::write::write_reports;
use posescore::report::{Comparison, ReportInput};
use posescore::score::{ScoreProfile, score_breakdown};
use posescore::skeleton::AngleLayout;
use posescore::{PoseError, simd, telemetry};

#[derive(Debug, Parser)]
#[command(name = "posescore", version)]
#[command(about = "Joint angles and pose similarity scores from 2-D keypoints")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Extract joint angles from one pose file
    Angles {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = LayoutArg::Native)]
        layout: LayoutArg,
        /// Directory for angles.tsv, summary.json and report.txt
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Score a candidate pose against a reference pose
    Score {
        #[arg(long)]
        reference: PathBuf,
        #[arg(long)]
        candidate: PathBuf,
        #[arg(long, value_enum, default_value_t = LayoutArg::Native)]
        layout: LayoutArg,
        #[arg(long, value_enum, default_value_t = ModeArg::Native)]
        mode: ModeArg,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LayoutArg {
    Native,
    Extended,
}

impl LayoutArg {
    fn layout(self) -> AngleLayout {
        match self {
            LayoutArg::Native => AngleLayout::native_v1(),
            LayoutArg::Extended => AngleLayout::extended_v1(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Native,
    Gated,
    Strict,
}

impl ModeArg {
    fn profile(self, layout: &AngleLayout) -> ScoreProfile {
        let base = match self {
            ModeArg::Native => ScoreProfile::native_v1(),
            ModeArg::Gated => ScoreProfile::gated_v1(),
            ModeArg::Strict => ScoreProfile::strict_v1(),
        };
        base.for_layout(layout)
    }
}

fn main() {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), PoseError> {
    info!(simd_backend = simd::backend_name(), "posescore starting");
    match command {
        Command::Angles { input, layout, out } => {
            run_angles(&input, layout.layout(), out.as_deref())
        }
        Command::Score {
            reference,
            candidate,
            layout,
            mode,
            out,
        } => {
            let layout = layout.layout();
            let profile = mode.profile(&layout);
            run_score(&reference, &candidate, layout, &profile, out.as_deref())
        }
    }
}

fn run_angles(input: &Path, layout: AngleLayout, out: Option<&Path>) -> Result<(), PoseError> {
    let pose = load_pose_file(input)?;
    let angles = pose.resolve_angles(&layout)?;

    for (name, value) in layout.names().zip(&angles) {
        println!("{name}\t{}", format_f32_6(*value));
    }

    if let Some(out_dir) = out {
        let report = report_input(&layout, &angles, input, None);
        write_reports(&report, out_dir)?;
    }
    Ok(())
}

fn run_score(
    reference_path: &Path,
    candidate_path: &Path,
    layout: AngleLayout,
    profile: &ScoreProfile,
    out: Option<&Path>,
) -> Result<(), PoseError> {
    let reference = load_pose_file(reference_path)?.resolve_angles(&layout)?;
    let candidate = load_pose_file(candidate_path)?.resolve_angles(&layout)?;
    let score = score_breakdown(profile, &reference, &candidate)?;

    println!("{}", format_f32_6(score.mean));

    if let Some(out_dir) = out {
        let comparison = Comparison {
            candidate: &candidate,
            candidate_source: candidate_path.display().to_string(),
            profile,
            score: &score,
        };
        let report = report_input(&layout, &reference, reference_path, Some(comparison));
        write_reports(&report, out_dir)?;
    }
    Ok(())
}

fn report_input<'a>(
    layout: &'a AngleLayout,
    reference: &'a [f32],
    reference_path: &Path,
    comparison: Option<Comparison<'a>>,
) -> ReportInput<'a> {
    ReportInput {
        layout,
        reference,
        reference_source: reference_path.display().to_string(),
        comparison,
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        simd_backend: simd::backend_name().to_string(),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
