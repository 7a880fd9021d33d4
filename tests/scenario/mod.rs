mod track_file_through_its_lifecycle;
