use crate::common::command::{init_repository_dir, tig_commit};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn commit_with_nothing_staged(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let commits_dir = init_repository_dir.path().join(".tig/commits");
    let commits_before = std::fs::read_dir(&commits_dir)?.count();

    tig_commit(init_repository_dir.path(), "empty", "2024-02-01 00:00:00")
        .assert()
        .success()
        .stdout("no changes to commit\n");

    assert_eq!(std::fs::read_dir(&commits_dir)?.count(), commits_before);

    Ok(())
}
