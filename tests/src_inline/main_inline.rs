use super::*;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("posescore_cli_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_parse_angles_defaults() {
    let cli = Cli::try_parse_from(["posescore", "angles", "--input", "pose.json"]).unwrap();
    assert_eq!(cli.verbose, 0);
    match cli.command {
        Command::Angles { input, layout, out } => {
            assert_eq!(input, PathBuf::from("pose.json"));
            assert_eq!(layout, LayoutArg::Native);
            assert!(out.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_score_flags() {
    let cli = Cli::try_parse_from([
        "posescore",
        "-vv",
        "score",
        "--reference",
        "ref.json",
        "--candidate",
        "cand.json.gz",
        "--layout",
        "extended",
        "--mode",
        "strict",
        "--out",
        "out",
    ])
    .unwrap();
    assert_eq!(cli.verbose, 2);
    match cli.command {
        Command::Score {
            layout, mode, out, ..
        } => {
            assert_eq!(layout, LayoutArg::Extended);
            assert_eq!(mode, ModeArg::Strict);
            assert_eq!(out, Some(PathBuf::from("out")));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_rejects_unknown_mode() {
    let parsed = Cli::try_parse_from([
        "posescore",
        "score",
        "--reference",
        "a",
        "--candidate",
        "b",
        "--mode",
        "lenient",
    ]);
    assert!(parsed.is_err());
}

#[test]
fn test_mode_profile_sized_for_layout() {
    let layout = AngleLayout::extended_v1();
    let profile = ModeArg::Gated.profile(&layout);
    assert_eq!(profile.expected_len, 14);
    assert_eq!(profile.id, "gated_v1");
}

#[test]
fn test_run_score_end_to_end() {
    let dir = make_temp_dir();
    let reference = dir.join("ref.json");
    let candidate = dir.join("cand.json");
    fs::write(&reference, r#"{"angles": [0, 0, 0, 0, 0, 0, 0, 0, 0, 0]}"#).unwrap();
    fs::write(
        &candidate,
        r#"{"angles": [180, 180, 180, 180, 180, 180, 180, 180, 180, 180]}"#,
    )
    .unwrap();
    let out = dir.join("out");
    run(Command::Score {
        reference,
        candidate,
        layout: LayoutArg::Native,
        mode: ModeArg::Native,
        out: Some(out.clone()),
    })
    .unwrap();
    let json = fs::read_to_string(out.join("summary.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["score"]["mean"], 0.0);
}

#[test]
fn test_run_angles_missing_file() {
    let dir = make_temp_dir();
    let err = run(Command::Angles {
        input: dir.join("absent.json"),
        layout: LayoutArg::Native,
        out: None,
    })
    .unwrap_err();
    assert!(matches!(err, PoseError::Io(_)));
}
