use crate::common::command::{repository_dir, run_tig_command, tig_commit};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_diff_against_first_commit(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_tig_command(dir, &["init"]).assert().success();
    write_file(FileSpec::new(dir.join("a.txt"), "hello".to_string()));
    run_tig_command(dir, &["add", "a.txt"]).assert().success();
    tig_commit(dir, "first", "2024-01-01 12:00:00")
        .assert()
        .success();

    write_file(FileSpec::new(dir.join("a.txt"), "world".to_string()));

    run_tig_command(dir, &["diff", "a.txt"])
        .assert()
        .success()
        .stdout(
            "--- a.txt (old)\n+++ a.txt (new)\n@@ -1 +1 @@\n\
             -hello\n\\ No newline at end of file\n\
             +world\n\\ No newline at end of file\n",
        );

    Ok(())
}
