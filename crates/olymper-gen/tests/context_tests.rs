use std::fs;
use std::path::Path;

use olymper_gen::case::{Bounds, Sequence};
use olymper_gen::config::GenConfig;
use olymper_gen::context::RunContext;
use olymper_gen::error::GenError;
use olymper_gen::mode::OutputMode;
use olymper_testlib::Random;

const VALUES: Bounds = Bounds::new(1, 1_000_000);

/// Config rooted in `root`, with the tests directory already created.
fn config_in(root: &Path) -> GenConfig {
    let cfg = GenConfig {
        tests_dir: root.join("tests"),
        info_file: root.join("tests.info"),
        test_num_width: 2,
    };
    fs::create_dir_all(&cfg.tests_dir).unwrap();
    cfg
}

fn file_context(cfg: &GenConfig) -> RunContext<Vec<u8>> {
    let mode = OutputMode::from_code(0, cfg).unwrap();
    RunContext::with_writer(mode, cfg, Random::from_seed(1), Vec::new())
}

#[test]
fn test_file_mode_numbers_tests_sequentially() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = config_in(tmp.path());
    let mut ctx = file_context(&cfg);

    ctx.emit(&Sequence::handcrafted(&[4, 3, 4, 3])).unwrap();
    ctx.emit(&Sequence::handcrafted(&[2, 4, 7, 5, 6])).unwrap();

    assert_eq!(ctx.test_num(), 2);
    assert_eq!(
        fs::read_to_string(cfg.tests_dir.join("01")).unwrap(),
        "4\n4 3 4 3\n"
    );
    assert_eq!(
        fs::read_to_string(cfg.tests_dir.join("02")).unwrap(),
        "5\n2 4 7 5 6\n"
    );
    assert!(ctx.into_writer().is_empty(), "file mode must not touch stdout");
}

#[test]
fn test_info_log_truncates_then_appends() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = config_in(tmp.path());
    fs::write(&cfg.info_file, "stale content from an old run\n").unwrap();

    let mut ctx = file_context(&cfg);
    ctx.note(format_args!("hand test, n = {}", 4)).unwrap();
    ctx.emit(&Sequence::handcrafted(&[4, 3, 4, 3])).unwrap();
    ctx.note(format_args!("")).unwrap();
    ctx.note(format_args!("group 1, maxn = {}", 100)).unwrap();

    let info = fs::read_to_string(&cfg.info_file).unwrap();
    assert_eq!(info, "001: hand test, n = 4\n002: \n002: group 1, maxn = 100\n");
}

#[test]
fn test_missing_tests_dir_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = GenConfig {
        tests_dir: tmp.path().join("absent"),
        info_file: tmp.path().join("tests.info"),
        test_num_width: 2,
    };
    let mut ctx = file_context(&cfg);

    let err = ctx.emit(&Sequence::handcrafted(&[1])).unwrap_err();
    match err {
        GenError::Io { path, .. } => assert_eq!(path, cfg.tests_dir.join("01")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_framed_mode_marks_each_test() {
    let cfg = GenConfig::default();
    let mut ctx =
        RunContext::with_writer(OutputMode::Framed, &cfg, Random::from_seed(1), Vec::new());

    ctx.emit(&Sequence::handcrafted(&[1, 2])).unwrap();
    ctx.emit(&Sequence::handcrafted(&[3])).unwrap();
    ctx.note(format_args!("ignored outside file mode")).unwrap();

    let out = String::from_utf8(ctx.into_writer()).unwrap();
    assert_eq!(out, "=== test 1 ===\n2\n1 2\n=== test 2 ===\n1\n3\n");
}

#[test]
fn test_single_mode_writes_raw() {
    let cfg = GenConfig::default();
    let mut ctx =
        RunContext::with_writer(OutputMode::Single, &cfg, Random::from_seed(1), Vec::new());

    ctx.emit(&Sequence::handcrafted(&[9, 8])).unwrap();

    assert_eq!(ctx.into_writer(), b"2\n9 8\n");
}

#[test]
fn test_same_seed_same_output() {
    let run = || {
        let cfg = GenConfig::default();
        let mut ctx =
            RunContext::with_writer(OutputMode::Single, &cfg, Random::from_seed(99), Vec::new());
        let case = Sequence::random(ctx.rng(), 200, true, VALUES);
        ctx.emit(&case).unwrap();
        ctx.into_writer()
    };
    assert_eq!(run(), run());
}
