mod adding_a_missing_file_fails;
mod stage_file_successfully;
