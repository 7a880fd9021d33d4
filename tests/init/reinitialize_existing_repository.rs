use crate::common::command::{init_repository_dir, run_tig_command, stdout_of};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn reinitialize_existing_repository(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let history_before = stdout_of(init_repository_dir.path(), &["log"])?;

    run_tig_command(init_repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Reinitialized existing tig repository in",
        ));

    let history_after = stdout_of(init_repository_dir.path(), &["log"])?;
    pretty_assertions::assert_eq!(history_before, history_after);

    Ok(())
}
