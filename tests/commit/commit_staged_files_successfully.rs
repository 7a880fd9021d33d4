use crate::common::command::{repository_dir, run_tig_command, stdout_of, tig_commit};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use sha1::{Digest, Sha1};

fn expected_commit_id(message: &str, date: &str) -> String {
    let digest = Sha1::digest(format!("{}{}", message, date).as_bytes());
    format!("{:x}", digest)[..8].to_string()
}

#[rstest]
fn commit_staged_files_successfully(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_tig_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));
    write_file(FileSpec::new(dir.join("notes.md"), "not staged".to_string()));
    run_tig_command(dir, &["add", "a.txt"]).assert().success();

    let commit_id = expected_commit_id("first", "2024-01-01 12:00:00");
    tig_commit(dir, "first", "2024-01-01 12:00:00")
        .assert()
        .success()
        .stdout(format!("[{}] first\n", commit_id));

    let commit_file = dir
        .join(".tig/commits")
        .join(format!("commit_{}_2024-01-01_12-00-00.json", commit_id));
    let commit: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(commit_file)?)?;
    assert_eq!(commit["commit_id"], commit_id.as_str());
    assert_eq!(commit["date"], "2024-01-01 12:00:00");
    assert_eq!(commit["message"], "first");
    assert_eq!(
        commit["records"],
        serde_json::json!([{ "filename": "a.txt", "hash": "aaf4c61d", "status": 3 }])
    );

    let status = stdout_of(dir, &["status"])?;
    assert_eq!(
        status,
        "Untracked files:\n\tuntracked: notes.md\n\nCommitted files:\n\tcommitted: a.txt\n\n"
    );

    run_tig_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "[{} | 2024-01-01 12:00:00 | first]",
            commit_id
        )));

    Ok(())
}
