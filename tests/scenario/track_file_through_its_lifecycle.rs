use crate::common::command::repository_dir;
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use chrono::NaiveDateTime;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tig::areas::commits::CommitOutcome;
use tig::areas::repository::Repository;
use tig::artifacts::checkout::CheckoutOutcome;
use tig::artifacts::diff::file_diff::DiffOutcome;
use tig::artifacts::objects::commit::DATE_FORMAT;
use tig::artifacts::objects::content_hash::ContentHash;
use tig::artifacts::objects::record::Record;
use tig::artifacts::status::record_status::RecordStatus;

fn record(filename: &str, content: &str, status: RecordStatus) -> Record {
    Record::new(
        filename.to_string(),
        ContentHash::of_bytes(content.as_bytes()),
        status,
    )
}

#[rstest]
fn track_file_through_its_lifecycle(repository_dir: TempDir) -> anyhow::Result<()> {
    let repository = Repository::init(repository_dir.path(), Box::new(std::io::sink()))?;
    let store = repository.status_store();

    repository_dir.child("a.txt").write_str("hello")?;
    store.sync()?;
    assert_eq!(store.all()?, vec![record("a.txt", "hello", RecordStatus::Untracked)]);

    repository.stage().add("a.txt")?;
    assert_eq!(store.all()?, vec![record("a.txt", "hello", RecordStatus::Staged)]);

    let date = NaiveDateTime::parse_from_str("2024-01-01 12:00:00", DATE_FORMAT)?;
    let first = match repository.commits().commit_at("first", date)? {
        CommitOutcome::Committed(commit) => commit,
        CommitOutcome::NothingToCommit => anyhow::bail!("nothing was committed"),
    };
    assert_eq!(store.all()?, vec![record("a.txt", "hello", RecordStatus::Committed)]);
    assert_eq!(
        std::fs::read_to_string(repository.backup_path().join("aaf4c61d.txt"))?,
        "hello"
    );
    assert_eq!(repository.commits().all()?, vec![first.clone()]);
    assert_eq!(
        first.manifest(),
        &[record("a.txt", "hello", RecordStatus::Committed)]
    );

    repository_dir.child("a.txt").write_str("world")?;
    repository_dir.child("b.txt").write_str("extra")?;
    store.sync()?;
    repository.stage().add("b.txt")?;
    assert_eq!(
        store.all()?,
        vec![
            record("a.txt", "world", RecordStatus::Modified),
            record("b.txt", "extra", RecordStatus::Staged),
        ]
    );

    let patch = match repository.file_diff().diff("a.txt")? {
        DiffOutcome::Patch(patch) => patch.to_string(),
        other => anyhow::bail!("expected a patch, got {:?}", other),
    };
    assert!(patch.contains("-hello\n\\ No newline at end of file\n+world\n"));

    match repository.backup().checkout(first.id().as_ref())? {
        CheckoutOutcome::Restored {
            restored, removed, ..
        } => {
            assert_eq!(restored, vec!["a.txt"]);
            assert_eq!(removed, vec!["b.txt"]);
        }
        CheckoutOutcome::UnknownCommit(id) => anyhow::bail!("commit {} not found", id),
    }

    assert_eq!(std::fs::read_to_string(repository_dir.path().join("a.txt"))?, "hello");
    assert!(!repository_dir.path().join("b.txt").exists());
    assert_eq!(store.all()?, vec![record("a.txt", "hello", RecordStatus::Committed)]);

    Ok(())
}
