mod report_files_without_a_patch;
mod show_diff_against_first_commit;
