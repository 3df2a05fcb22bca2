//! Integration tests for JSON-lines batch anonymisation

use mindrep::anonymisation::BatchReport;
use mindrep::cli::commands::batch::BatchArgs;
use std::fs;
use tempfile::tempdir;

const INPUT: &str = r#"{"id": "a1", "text": "My boss Sarah at Deloitte in Manchester is stressing me out"}
{"id": "a2", "text": "bad day. need to sleep"}

{"id": "a3", "text": "Called the helpline on 07911 123456 but no answer"}
{"id": "a4", "text": ""}
"#;

#[tokio::test]
async fn test_batch_command_end_to_end() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("entries.jsonl");
    let output = dir.path().join("sanitised.jsonl");
    let report_path = dir.path().join("report.json");
    let config = dir.path().join("mindrep.toml");
    fs::write(&input, INPUT).unwrap();
    fs::write(&config, "[batch]\nparallelism = 2\n").unwrap();

    let args = BatchArgs {
        input: input.clone(),
        output: Some(output.clone()),
        report: Some(report_path.clone()),
    };
    let code = args.execute(config.to_str().unwrap()).await.unwrap();
    assert_eq!(code, 0);

    let lines: Vec<serde_json::Value> = fs::read_to_string(&output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["id"], "a1");
    assert_eq!(
        lines[0]["sanitised_text"],
        "My boss [NAME] at [ORG] in [LOCATION] is stressing me out"
    );
    assert_eq!(lines[1]["sanitised_text"], "bad day. need to sleep");
    assert_eq!(lines[2]["replacements"]["PHONE_UK"], 1);
    assert_eq!(lines[3]["sanitised_text"], "");

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["total_entries"], 4);
    assert_eq!(report["failed_entries"], 0);
    assert_eq!(report["replacements_by_label"]["PERSON"], 1);
    assert_eq!(report["stats"]["entries_with_pii"], 2);
}

#[tokio::test]
async fn test_batch_command_rejects_bad_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("entries.jsonl");
    fs::write(&input, "{\"id\": \"a1\"}\n").unwrap();

    let args = BatchArgs {
        input,
        output: Some(dir.path().join("out.jsonl")),
        report: None,
    };
    let code = args
        .execute(dir.path().join("missing.toml").to_str().unwrap())
        .await
        .unwrap();
    assert_eq!(code, 5);
    assert!(!dir.path().join("out.jsonl").exists());
}

#[test]
fn test_report_console_format() {
    let report = BatchReport::new(false);
    let text = report.format_console();
    assert!(text.contains("BATCH ANONYMISATION REPORT"));
    assert!(text.contains("UNAVAILABLE (pattern-only)"));
}
