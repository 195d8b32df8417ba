use woodcraft_designer::{
    ProjectFile, ProjectFileError, ProjectState, TemplateLibrary, Vec3, SCHEMA_VERSION,
};

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();

    let mut project = ProjectState::new();
    project.apply_template(TemplateLibrary::builtin().get_template("workbench").unwrap());
    project.set_project_name("Garden Bench");
    let path = dir.path().join(project.suggested_file_name());
    project.save_to_file(&path).unwrap();
    assert!(path.ends_with("Garden_Bench.woodcraft"));

    let mut loaded = ProjectState::new();
    loaded.load_from_file(&path).unwrap();
    assert_eq!(loaded.pieces(), project.pieces());
    assert_eq!(loaded.cut_list(), project.cut_list());
    assert_eq!(loaded.project_name(), "Garden Bench");
}

#[test]
fn test_exported_document_shape() {
    let mut project = ProjectState::new();
    project.set_project_name("Shelf");
    let id = project.add_piece_by_id("1x6", Some(Vec3::new(0.0, 5.0, 0.0))).unwrap();
    project.edit_length(id, "36");

    let value: serde_json::Value = serde_json::from_str(&project.export_json().unwrap()).unwrap();
    assert_eq!(value["name"], "Shelf");
    assert_eq!(value["schemaVersion"], SCHEMA_VERSION);
    assert_eq!(value["pieces"][0]["id"], id.to_string());
    assert_eq!(value["pieces"][0]["profileId"], "1x6");
    assert_eq!(value["pieces"][0]["customLength"], 36.0);
    assert_eq!(value["pieces"][0]["scale"], serde_json::json!([1.0, 1.0, 1.0]));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut project = ProjectState::new();
    let err = project
        .load_from_file(dir.path().join("missing.woodcraft"))
        .unwrap_err();
    assert!(err.to_string().contains("Failed to read project file"));
}

#[test]
fn test_blank_name_uses_default() {
    let mut file = ProjectFile::new("   ");
    file.schema_version = SCHEMA_VERSION.to_string();
    let mut project = ProjectState::new();
    project.set_project_name("Current");
    project.load_project_file(&file).unwrap();
    assert_eq!(project.project_name(), "Untitled Project");
    assert!(project.is_empty());
}

#[test]
fn test_import_rejects_repeated_piece_ids() {
    let mut source = ProjectState::new();
    source.add_piece_by_id("2x4", None).unwrap();
    source.add_piece_by_id("2x4", Some(Vec3::new(9.0, 9.0, 9.0))).unwrap();
    let mut file = source.to_project_file();
    file.pieces[1].id = file.pieces[0].id;

    let mut project = ProjectState::new();
    let kept = project.add_piece_by_id("oak", None).unwrap();
    let err = project.load_project_file(&file).unwrap_err();

    assert!(matches!(err, ProjectFileError::DuplicatePieceId { piece } if piece == file.pieces[0].id));
    assert_eq!(project.piece_count(), 1);
    assert!(project.piece(kept).is_some());
}

#[test]
fn test_imported_ids_stay_unique() {
    let mut source = ProjectState::new();
    for profile in ["2x4", "2x4", "4x4"] {
        source.add_piece_by_id(profile, None).unwrap();
    }
    let mut project = ProjectState::new();
    project.import_json(&source.export_json().unwrap()).unwrap();

    let mut ids: Vec<_> = project.pieces().iter().map(|p| p.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), project.piece_count());

    let first = project.pieces()[0].id;
    assert!(project.remove_piece(first));
    assert!(project.piece(first).is_none());
}
