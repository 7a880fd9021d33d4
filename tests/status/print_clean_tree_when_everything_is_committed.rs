use crate::common::command::{init_repository_dir, stdout_of};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn print_clean_tree_when_everything_is_committed(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = stdout_of(init_repository_dir.path(), &["status"])?;

    assert_eq!(
        status,
        "Committed files:\n\
         \tcommitted: 1.txt\n\
         \tcommitted: a/2.txt\n\
         \tcommitted: a/b/3.txt\n\
         \n\
         nothing to commit, working tree clean\n"
    );

    // running status again leaves the store untouched
    let store = init_repository_dir.path().join(".tig/.status.json");
    let before = std::fs::read(&store)?;
    stdout_of(init_repository_dir.path(), &["status"])?;
    assert_eq!(std::fs::read(&store)?, before);

    Ok(())
}
