use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tig::COMMIT_DATE_ENV;
use tig::areas::repository::Repository;
use tig::artifacts::objects::commit::DATE_FORMAT;
use tig::commands::porcelain::log::DEFAULT_LOG_COUNT;

#[derive(Parser)]
#[command(
    name = "tig",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A miniature version control system",
    long_about = "tig tracks the files of a directory through a small state machine, \
    snapshots staged files into immutable commits and restores the working tree \
    from any of them.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .tig directory in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Stage a file for the next commit",
        long_about = "This command records the current content of a file as staged and stores a copy of it."
    )]
    Add {
        #[arg(index = 1, help = "The file to stage")]
        file: String,
    },
    #[command(
        name = "commit",
        about = "Create a new commit from the staged files",
        long_about = "This command snapshots every staged file into a new commit with the specified message. \
        The commit date can be fixed through the TIG_COMMIT_DATE environment variable."
    )]
    Commit {
        #[arg(index = 1, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show the most recent commits",
        long_about = "This command lists the most recent commits, newest first."
    )]
    Log {
        #[arg(
            short = 'n',
            long = "max-count",
            default_value_t = DEFAULT_LOG_COUNT,
            help = "The number of commits to show"
        )]
        count: usize,
    },
    #[command(
        name = "status",
        about = "Show the state of every known file",
        long_about = "This command lists the files of the working tree grouped by their state."
    )]
    Status,
    #[command(
        name = "diff",
        about = "Show changes of a file since it was first committed",
        long_about = "This command prints a unified diff between the first committed version of a file \
        and its content in the working tree."
    )]
    Diff {
        #[arg(index = 1, help = "The file to compare")]
        file: String,
    },
    #[command(
        name = "checkout",
        about = "Restore the working tree to a commit",
        long_about = "This command restores every file of the specified commit and removes the tracked files \
        that are not part of it. Untracked files are left alone."
    )]
    Checkout {
        #[arg(index = 1, help = "The id of the commit to restore")]
        commit_id: String,
    },
    #[command(
        name = "hash-object",
        about = "Print the content hash of a file",
        long_about = "This command prints the 8 character content hash of a file without storing it."
    )]
    HashObject {
        #[arg(index = 1)]
        file: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let pwd = std::env::current_dir()?
        .canonicalize()
        .context("Unable to resolve the current directory")?;

    match &cli.command {
        Commands::Init { path } => {
            let path = match path {
                Some(path) => PathBuf::from(path),
                None => pwd.clone(),
            };

            Repository::init(&path, Box::new(std::io::stdout()))?;
        }
        Commands::Add { file } => open_repository(&pwd)?.add(&resolve(&pwd, file))?,
        Commands::Commit { message } => {
            open_repository(&pwd)?.commit(message, commit_date_from_env()?)?
        }
        Commands::Log { count } => open_repository(&pwd)?.log(*count)?,
        Commands::Status => open_repository(&pwd)?.status()?,
        Commands::Diff { file } => open_repository(&pwd)?.diff(&resolve(&pwd, file))?,
        Commands::Checkout { commit_id } => open_repository(&pwd)?.checkout(commit_id)?,
        Commands::HashObject { file } => {
            open_repository(&pwd)?.hash_object(&resolve(&pwd, file))?
        }
    }

    Ok(())
}

/// Locate the enclosing repository and bring its status store up to date
fn open_repository(pwd: &Path) -> Result<Repository> {
    let repository = Repository::discover(pwd, Box::new(std::io::stdout()))?;
    repository.status_store().sync()?;

    Ok(repository)
}

// file arguments are relative to the invocation directory, not the repository root
fn resolve(pwd: &Path, file: &str) -> String {
    pwd.join(file).to_string_lossy().into_owned()
}

fn commit_date_from_env() -> Result<Option<NaiveDateTime>> {
    match std::env::var(COMMIT_DATE_ENV) {
        Ok(raw) => {
            let date = NaiveDateTime::parse_from_str(&raw, DATE_FORMAT)
                .with_context(|| format!("Invalid {} value: {}", COMMIT_DATE_ENV, raw))?;
            Ok(Some(date))
        }
        Err(_) => Ok(None),
    }
}
