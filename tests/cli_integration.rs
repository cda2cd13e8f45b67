// End-to-end tests driving the titleclean binary
use std::io::Write;
use std::process::{Command, Stdio};

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::{read_output_rows, TestFixture};

fn titleclean() -> Command {
    Command::new(env!("CARGO_BIN_EXE_titleclean"))
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_title_subcommand() {
    let output = titleclean()
        .args(["title", "cto", "n/a", "sales and marketing"])
        .output()
        .expect("Failed to run titleclean");
    assert!(output.status.success());

    let lines: Vec<String> = stdout_of(&output).lines().map(str::to_string).collect();
    assert_eq!(lines, vec!["Chief Technology Officer", "<discarded>", "Sales and Marketing"]);
}

#[test]
fn test_title_subcommand_baseline() {
    let output = titleclean()
        .args(["title", "--baseline", "cto"])
        .output()
        .expect("Failed to run titleclean");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output).trim(), "Cto");
}

#[test]
fn test_clean_subcommand_with_stats() {
    let fixture = TestFixture::new();
    let input = fixture.create_title_csv("export.csv", "Job Title", &["CTO", "cto", "aaaa", "n/a"]);
    let stats_path = fixture.root_path.join("stats.json");

    let output = titleclean()
        .arg("clean")
        .arg(&input)
        .arg("--baseline")
        .arg("--no-progress")
        .arg("--stats-out")
        .arg(&stats_path)
        .output()
        .expect("Failed to run titleclean");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = stdout_of(&output);
    assert!(stdout.contains("export-cleaned.csv"));
    assert!(stdout.contains("Removed:    2"));

    let cleaned_path = fixture.root_path.join("export-cleaned.csv");
    let rows = read_output_rows(&cleaned_path);
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0][1], "Original Job Title");

    let stats: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&stats_path).unwrap()).unwrap();
    assert_eq!(stats["total_rows"], 4);
    assert_eq!(stats["good"], 1);
    assert_eq!(stats["cleaned"], 1);
    assert_eq!(stats["removed"], 2);
    assert_eq!(stats["generation"], "baseline");
}

#[test]
fn test_clean_subcommand_missing_input() {
    let fixture = TestFixture::new();
    let output = titleclean()
        .arg("clean")
        .arg(fixture.root_path.join("missing.csv"))
        .arg("--no-progress")
        .output()
        .expect("Failed to run titleclean");
    assert!(!output.status.success());
}

#[test]
fn test_validate_subcommand_json() {
    let fixture = TestFixture::new();
    let original = fixture.create_job("JobTitleClean003", &["cto", "Director"]);

    let status = titleclean()
        .arg("clean")
        .arg(&original)
        .arg("-o")
        .arg(fixture.job_cleaned_path("JobTitleClean003"))
        .arg("--no-progress")
        .status()
        .expect("Failed to run titleclean");
    assert!(status.success());

    let output = titleclean()
        .args(["validate", "JobTitleClean003", "--json", "--jobs-dir"])
        .arg(fixture.jobs_dir())
        .output()
        .expect("Failed to run titleclean");
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(summary["job"], "JobTitleClean003");
    assert_eq!(summary["total_rows"], 2);
    assert_eq!(summary["changed_rows"], 1);
    assert_eq!(summary["sample"][0]["Original Job Title"], "cto");
    assert_eq!(summary["sample"][0]["Cleaned Job Title"], "Chief Technology Officer");
}

#[test]
fn test_validate_rejects_bad_job_name() {
    let output = titleclean()
        .args(["validate", "../etc"])
        .output()
        .expect("Failed to run titleclean");
    assert!(!output.status.success());
}

#[test]
fn test_workflow_subcommand() {
    let mut child = titleclean()
        .arg("workflow")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn titleclean");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"{"inputFields": {"jobTitle": "R&amp;D"}}"#)
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let response: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    let fields = &response["outputFields"];
    assert_eq!(fields["newTitle"], "Research and Development");
    assert_eq!(fields["outcome"], "changed");
    assert_eq!(fields["hs_execution_state"], "Succeeded");
    assert_eq!(fields["error_state"], 0);
}
