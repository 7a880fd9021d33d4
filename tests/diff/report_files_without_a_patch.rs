use crate::common::command::{init_repository_dir, run_tig_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case("missing.txt", "missing.txt: not found in the working tree\n")]
#[case("untracked.txt", "untracked.txt: no committed version\n")]
#[case("1.txt", "1.txt: no changes\n")]
fn report_files_without_a_patch(
    init_repository_dir: TempDir,
    #[case] file: &str,
    #[case] expected: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        init_repository_dir.path().join("untracked.txt"),
        "untracked".to_string(),
    ));

    run_tig_command(init_repository_dir.path(), &["diff", file])
        .assert()
        .success()
        .stdout(expected.to_string());

    Ok(())
}
