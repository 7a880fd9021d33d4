use crate::common::command::{
    FIRST_COMMIT_DATE, commit_id_of, init_repository_dir, run_tig_command, stdout_of,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use sha1::{Digest, Sha1};

fn first_commit_id() -> String {
    let digest = Sha1::digest(format!("Initial commit{}", FIRST_COMMIT_DATE).as_bytes());
    format!("{:x}", digest)[..8].to_string()
}

#[rstest]
fn restore_working_tree_to_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();

    // second commit: change 1.txt, add c/4.txt
    write_file(FileSpec::new(dir.join("1.txt"), "changed".to_string()));
    write_file(FileSpec::new(dir.join("c/4.txt"), "four".to_string()));
    run_tig_command(dir, &["add", "1.txt"]).assert().success();
    run_tig_command(dir, &["add", "c/4.txt"]).assert().success();
    commit_id_of(dir, "Second commit", "2024-01-02 12:00:00")?;

    // local state on top of it
    write_file(FileSpec::new(dir.join("a/2.txt"), "local edit".to_string()));
    write_file(FileSpec::new(dir.join("scratch.txt"), "untracked".to_string()));

    let first_id = first_commit_id();
    run_tig_command(dir, &["checkout", &first_id])
        .assert()
        .success()
        .stdout(format!("checked out {}: 3 restored, 1 removed\n", first_id));

    assert_eq!(read_file(&dir.join("1.txt")), "one");
    assert_eq!(read_file(&dir.join("a/2.txt")), "two");
    assert_eq!(read_file(&dir.join("a/b/3.txt")), "three");
    assert!(!dir.join("c").exists());
    assert_eq!(read_file(&dir.join("scratch.txt")), "untracked");

    let status = stdout_of(dir, &["status"])?;
    assert_eq!(
        status,
        "Untracked files:\n\
         \tuntracked: scratch.txt\n\
         \n\
         Committed files:\n\
         \tcommitted: 1.txt\n\
         \tcommitted: a/2.txt\n\
         \tcommitted: a/b/3.txt\n\
         \n"
    );

    Ok(())
}
