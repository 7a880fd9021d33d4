use crate::common::command::{init_repository_dir, run_tig_command};
use assert_fs::TempDir;
use predicates::prelude::{PredicateBooleanExt, predicate};
use rstest::rstest;

#[rstest]
#[case("missing.txt")]
#[case("../outside.txt")]
fn adding_a_missing_file_fails(
    init_repository_dir: TempDir,
    #[case] file: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    run_tig_command(init_repository_dir.path(), &["add", file])
        .assert()
        .failure()
        .stderr(predicate::str::is_empty().not());

    Ok(())
}
