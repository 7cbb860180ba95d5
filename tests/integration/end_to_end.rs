use langcount::{app::execute, config::RunConfig, presentation::OutputFormat};
use langcount_domain::{FileStats, config::ScanOptions};
use langcount_infra::{FsFileScanner, ProfileCatalog};
use langcount_ports::filesystem::ListingPlan;
use langcount_usecase::Aggregator;
use serde_json::Value;

use crate::common::{MIXED_C, PYTHON_DOC, project, write};

fn run_json(config: &RunConfig) -> Value {
    let mut out = Vec::new();
    execute(config, &mut out).expect("run succeeds");
    serde_json::from_slice(&out).expect("valid json")
}

fn config_for(root: &std::path::Path, options: ScanOptions) -> RunConfig {
    RunConfig {
        listing: ListingPlan { roots: vec![root.to_path_buf()], ..ListingPlan::default() },
        options,
        format: OutputFormat::Json,
        languages: None,
        list_languages: false,
    }
}

#[test]
fn mixed_tree_is_split_by_language() {
    let dir = project(&[
        ("src/main.c", MIXED_C),
        ("src/util.c", "/* one-line block */\nint z;\n"),
        ("tools/gen.py", PYTHON_DOC),
        ("Makefile", "# build\nall:\n\tcc main.c\n"),
    ]);

    let value = run_json(&config_for(dir.path(), ScanOptions::default()));
    let c = &value["languages"]["c"];
    assert_eq!(c["files"], 2);
    assert_eq!(c["lines"], 9);
    assert_eq!(c["code"], 3);
    assert_eq!(c["comments"], 5);

    // docstring body is code, the line after it a comment
    let py = &value["languages"]["python"];
    assert_eq!(py["lines"], 6);
    assert_eq!(py["code"], 5);
    assert_eq!(py["comments"], 1);

    let make = &value["languages"]["makefile"];
    assert_eq!(make["comments"], 1);
    assert_eq!(make["code"], 2);

    assert_eq!(value["totals"]["files"], 4);
    assert_eq!(value["most_used_language"], "c");
}

#[test]
fn worker_count_does_not_change_results() {
    let dir = project(&[]);
    for i in 0..40 {
        write(dir.path(), &format!("pkg/f{i}.go"), "package pkg\n\n// doc\nfunc F() {}\n");
        write(dir.path(), &format!("pkg/s{i}.sql"), "-- q\nSELECT 1;\n");
    }

    let serial = run_json(&config_for(dir.path(), ScanOptions { concurrency: 1, ..ScanOptions::default() }));
    let parallel = run_json(&config_for(dir.path(), ScanOptions { concurrency: 16, ..ScanOptions::default() }));
    assert_eq!(serial, parallel);
    assert_eq!(serial["languages"]["go"]["files"], 40);
    assert_eq!(serial["languages"]["sql"]["comments"], 40);
}

#[test]
fn overlapping_roots_count_each_file_once() {
    let dir = project(&[("lib/a.rs", "fn a() {}\n")]);
    let mut config = config_for(dir.path(), ScanOptions::default());
    config.listing.roots.push(dir.path().join("lib/a.rs"));
    config.listing.roots.push(dir.path().to_path_buf());

    let value = run_json(&config);
    assert_eq!(value["languages"]["rust"]["files"], 1);
}

#[test]
fn override_table_changes_classification() {
    let dir = project(&[
        ("langs.yaml", "languages:\n  rust:\n    line_comment: [\"#\"]\n    extensions: [rs]\n"),
        ("src/a.rs", "# now a comment\n// now code\n"),
    ]);
    let mut config = config_for(&dir.path().join("src"), ScanOptions::default());
    config.languages = Some(dir.path().join("langs.yaml"));

    let value = run_json(&config);
    let rust = &value["languages"]["rust"];
    assert_eq!(rust["comments"], 1);
    assert_eq!(rust["code"], 1);
}

#[test]
fn list_languages_ignores_inputs() {
    let config = RunConfig {
        listing: ListingPlan::default(),
        options: ScanOptions::default(),
        format: OutputFormat::Table,
        languages: None,
        list_languages: true,
    };
    let mut out = Vec::new();
    execute(&config, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let names: Vec<_> = text.lines().collect();
    assert!(names.windows(2).all(|w| w[0] < w[1]));
    assert!(names.contains(&"go"));
}

#[test]
fn unreadable_file_is_skipped_in_its_language_bucket() {
    let dir = project(&[("ok.go", "package ok\n\n// doc\n")]);
    let catalog = ProfileCatalog::embedded().unwrap();
    let scanner = FsFileScanner::new();
    let aggregator = Aggregator::new(&catalog, &scanner, ScanOptions::default());

    let gone = dir.path().join("vanished.go");
    let map = aggregator.aggregate(&[gone]).unwrap();
    assert_eq!(map.get("go"), Some(&FileStats::skipped_file()));

    let map = aggregator.aggregate(&[dir.path().join("ok.go"), dir.path().join("vanished.go")]).unwrap();
    assert_eq!(
        map.get("go"),
        Some(&FileStats { files: 2, skipped: 1, lines: 3, code: 1, comments: 1, blanks: 1 })
    );
}
