mod restore_working_tree_to_commit;
