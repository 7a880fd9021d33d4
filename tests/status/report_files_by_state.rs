use crate::common::command::{init_repository_dir, run_tig_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn report_files_by_state(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "modified one".to_string()));
    write_file(FileSpec::new(dir.join("a/2.txt"), "staged two".to_string()));
    write_file(FileSpec::new(dir.join("new.txt"), "brand new".to_string()));
    run_tig_command(dir, &["add", "a/2.txt"]).assert().success();

    let status = stdout_of(dir, &["status"])?;

    assert_eq!(
        status,
        "Changes to be committed:\n\
         \tstaged:    a/2.txt\n\
         \n\
         Changes not staged for commit:\n\
         \tmodified:  1.txt\n\
         \n\
         Untracked files:\n\
         \tuntracked: new.txt\n\
         \n\
         Committed files:\n\
         \tcommitted: a/b/3.txt\n\
         \n"
    );

    Ok(())
}
