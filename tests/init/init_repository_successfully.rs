use crate::common::command::{repository_dir, run_tig_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir_absolute_path = repository_dir.path().canonicalize()?.display().to_string();

    run_tig_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty tig repository in .+\.tig\n$",
        )?)
        .stdout(predicate::str::contains(dir_absolute_path));

    assert!(repository_dir.path().join(".tig").join("commits").is_dir());
    assert!(repository_dir.path().join(".tig").join("backup").is_dir());
    // the status store is created on first write
    assert!(!repository_dir.path().join(".tig").join(".status.json").exists());

    Ok(())
}

#[rstest]
fn init_repository_at_given_path(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_tig_command(repository_dir.path(), &["init", "nested/project"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Initialized empty tig repository in"));

    assert!(
        repository_dir
            .path()
            .join("nested/project/.tig/commits")
            .is_dir()
    );

    Ok(())
}
