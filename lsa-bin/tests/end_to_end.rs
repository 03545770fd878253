use clap::Parser;
use lsa_bin::{cli::Cli, run};
use lsa_test::{brute_force_cost, random_recipe};
use lsa_types::{generate::Recipe, CostModel, GAP};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::{fs, path::Path};
use tempfile::TempDir;

fn write_input(dir: &Path, a: &Recipe, b: &Recipe) -> std::path::PathBuf {
    let mut text = String::new();
    for r in [a, b] {
        text += std::str::from_utf8(&r.base).unwrap();
        text.push('\n');
        for i in &r.indices {
            text += &format!("{i}\n");
        }
    }
    let path = dir.join("input.txt");
    fs::write(&path, text).unwrap();
    path
}

fn run_with(args: &[&str], input: &Path, output: &Path) -> Vec<String> {
    let mut argv = vec!["lsa"];
    argv.extend_from_slice(args);
    argv.push(input.to_str().unwrap());
    argv.push(output.to_str().unwrap());
    run(&Cli::try_parse_from(argv).unwrap()).unwrap();
    fs::read_to_string(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn strip(row: &str) -> Vec<u8> {
    row.bytes().filter(|&c| c != GAP).collect()
}

#[test]
fn writes_five_lines() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "AC\nAG\n").unwrap();
    let output = dir.path().join("output.txt");

    let lines = run_with(&[], &input, &output);
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "60");
    assert_eq!(lines[1], "A_C");
    assert_eq!(lines[2], "AG_");
    assert!(lines[3].parse::<f64>().unwrap() >= 0.);
    lines[4].parse::<u64>().unwrap();
}

#[test]
fn both_algorithms_agree() {
    let dir = TempDir::new().unwrap();
    let rng = &mut ChaCha8Rng::seed_from_u64(7);
    let cm = CostModel::default();
    for _ in 0..10 {
        let ra = random_recipe(6, 4, rng);
        let rb = random_recipe(6, 4, rng);
        let input = write_input(dir.path(), &ra, &rb);
        let full = run_with(&["-a", "full"], &input, &dir.path().join("full.txt"));
        let hb = run_with(
            &["--algorithm", "hirschberg"],
            &input,
            &dir.path().join("hb.txt"),
        );
        assert_eq!(full[0], hb[0]);

        let (a, b) = (ra.expand().unwrap(), rb.expand().unwrap());
        for lines in [&full, &hb] {
            assert_eq!(strip(&lines[1]), a);
            assert_eq!(strip(&lines[2]), b);
            assert_eq!(lines[1].len(), lines[2].len());
        }
        if a.len() <= 8 && b.len() <= 8 {
            assert_eq!(full[0], brute_force_cost(&cm, &a, &b).to_string());
        }
    }
}

#[test]
fn custom_cost_model_and_cigar() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "ACGT\n\nAGT\n").unwrap();
    let cm = dir.path().join("unit.json");
    fs::write(&cm, serde_json::to_string(&CostModel::unit()).unwrap()).unwrap();
    let output = dir.path().join("output.txt");

    let lines = run_with(
        &["--cost-model", cm.to_str().unwrap(), "--cigar"],
        &input,
        &output,
    );
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "1");
    assert_eq!(lines[1], "ACGT");
    assert_eq!(lines[2], "A_GT");
    assert_eq!(lines[5], "1=1D2=");
}

#[test]
fn reports_bad_input() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("output.txt");
    let run_on = |text: &str| {
        let input = dir.path().join("input.txt");
        fs::write(&input, text).unwrap();
        let cli = Cli::try_parse_from([
            "lsa",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ])
        .unwrap();
        run(&cli).map(|_| ()).unwrap_err().to_string()
    };
    assert!(run_on("").starts_with("reading input"));
    assert!(run_on("ACGT\n9\nAC\n").starts_with("generating sequences"));
    assert!(run_on("ACGN\nAC\n").starts_with("aligning"));
    assert!(!output.exists());

    let missing = dir.path().join("missing.txt");
    let cli = Cli::try_parse_from([
        "lsa",
        missing.to_str().unwrap(),
        output.to_str().unwrap(),
    ])
    .unwrap();
    assert!(run(&cli).is_err());
}

#[test]
fn rejects_cost_model_that_overflows() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "AC\nGT\n").unwrap();
    let cm = dir.path().join("huge.json");
    fs::write(&cm, r#"{"gap": 3000000000, "sub": [[0,1,1,1],[1,0,1,1],[1,1,0,1],[1,1,1,0]]}"#)
        .unwrap();
    let output = dir.path().join("output.txt");
    let cli = Cli::try_parse_from([
        "lsa",
        "--cost-model",
        cm.to_str().unwrap(),
        input.to_str().unwrap(),
        output.to_str().unwrap(),
    ])
    .unwrap();
    let err = run(&cli).map(|_| ()).unwrap_err();
    assert!(err.to_string().starts_with("aligning"));
    assert!(format!("{err:#}").contains("overflow"));
    assert!(!output.exists());
}
