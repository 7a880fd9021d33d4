use crate::common::command::{repository_dir, run_tig_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn stage_file_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_tig_command(repository_dir.path(), &["init"])
        .assert()
        .success();
    write_file(FileSpec::new(
        repository_dir.path().join("a.txt"),
        "hello".to_string(),
    ));

    run_tig_command(repository_dir.path(), &["add", "a.txt"])
        .assert()
        .success()
        .stdout("");

    let status = stdout_of(repository_dir.path(), &["status"])?;
    assert_eq!(status, "Changes to be committed:\n\tstaged:    a.txt\n\n");

    let blob = repository_dir.path().join(".tig/backup/aaf4c61d.txt");
    assert_eq!(std::fs::read_to_string(blob)?, "hello");

    Ok(())
}
