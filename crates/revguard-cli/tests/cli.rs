use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new(blacklist: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let blacklist_path = dir.path().join("cursewords.txt");
        fs::write(&blacklist_path, blacklist).unwrap();

        let config = format!(
            "[validation]\nblacklist_path = {:?}\n\n[storage]\ndata_dir = {:?}\n",
            blacklist_path.display().to_string(),
            dir.path().join("data").display().to_string(),
        );
        fs::write(dir.path().join("config.toml"), config).unwrap();

        Self { dir }
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("revguard").unwrap();
        cmd.current_dir(self.dir.path())
            .env_remove("REVGUARD_CONFIG")
            .arg("--no-color")
            .arg("--config")
            .arg(self.config_path());
        cmd
    }

    fn submit(&self, product: &str, range: &str) {
        self.cmd()
            .args(["submit", "--product", product, "--rating", "4", "--range", range])
            .args(["--comment", "solid"])
            .assert()
            .success();
    }
}

#[test]
fn validate_accepts_clean_review() {
    let ws = Workspace::new("damn\nterrible\n");
    ws.cmd()
        .args(["validate", "--rating", "0", "--comment", "great product"])
        .assert()
        .success()
        .stdout(predicate::str::contains("admissible"));
}

#[test]
fn validate_rejects_negative_rating() {
    let ws = Workspace::new("damn\n");
    ws.cmd()
        .args(["validate", "--rating", "-1", "--comment", "fine"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Rating is invalid"));
}

#[test]
fn validate_rejects_profanity_without_naming_term() {
    let ws = Workspace::new("damn\n");
    ws.cmd()
        .args(["validate", "--rating", "4.5", "--comment", "this is damn good"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("forbidden language"))
        .stderr(predicate::str::contains("damn").not());
}

#[test]
fn validate_fails_when_blacklist_missing() {
    let ws = Workspace::new("damn\n");
    fs::remove_file(ws.dir.path().join("cursewords.txt")).unwrap();
    ws.cmd()
        .args(["validate", "--rating", "3", "--comment", "fine"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Blacklist unavailable"));
}

#[test]
fn submit_then_list_in_range_newest_first() {
    let ws = Workspace::new("damn\n");
    for range in ["5", "15", "20", "25"] {
        ws.submit("P", range);
    }
    ws.submit("Q", "15");

    let output = ws
        .cmd()
        .args(["list", "--product", "P", "--start", "10", "--end", "20", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let reviews: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ranges: Vec<f64> = reviews
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["range"].as_f64().unwrap())
        .collect();
    assert_eq!(ranges, vec![20.0, 15.0]);
}

#[test]
fn submit_rejected_review_is_not_stored() {
    let ws = Workspace::new("damn\n");
    ws.cmd()
        .args(["submit", "--product", "P", "--rating", "2", "--comment", "damn it"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Review rejected"));

    ws.cmd()
        .args(["list", "--product", "P", "--start", "-100", "--end", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No reviews found."));
}

#[test]
fn list_rejects_reversed_range() {
    let ws = Workspace::new("damn\n");
    ws.cmd()
        .args(["list", "--product", "P", "--start", "20", "--end", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid range"));
}

#[test]
fn blacklist_check_reports_entries() {
    let ws = Workspace::new("damn\n\nterrible\n");
    ws.cmd()
        .args(["blacklist", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 entries"));
}

#[test]
fn config_init_writes_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Command::cargo_bin("revguard")
        .unwrap()
        .current_dir(dir.path())
        .args(["--no-color", "--config"])
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .success();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[validation]"));
}
