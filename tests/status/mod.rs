mod print_clean_tree_when_everything_is_committed;
mod report_files_by_state;
