mod commit_staged_files_successfully;
mod commit_with_nothing_staged;
