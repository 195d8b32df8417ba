use woodcraft_designer::{FurnitureTemplate, ProjectState, TemplateLibrary, TemplatePiece, Vec3};

#[test]
fn test_each_builtin_template_applies_fully() {
    let library = TemplateLibrary::builtin();
    let expected = [("simple-table", 8), ("basic-shelf", 5), ("workbench", 8)];

    for (id, count) in expected {
        let mut project = ProjectState::new();
        let template = library.get_template(id).unwrap();
        let result = project.apply_template(template);
        assert_eq!(result.added.len(), count, "{}", id);
        assert_eq!(project.piece_count(), count);
        assert!(result.skipped.is_empty());
    }
}

#[test]
fn test_table_cut_list() {
    let library = TemplateLibrary::builtin();
    let mut project = ProjectState::new();
    project.apply_template(library.get_template("simple-table").unwrap());

    let rows: Vec<_> = project
        .cut_list()
        .into_iter()
        .map(|r| (r.lumber_type, r.length, r.quantity))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("2×4".to_string(), 48.0, 2),
            ("2×4".to_string(), 30.0, 2),
            ("4×4".to_string(), 30.0, 4),
        ]
    );
}

#[test]
fn test_apply_replaces_existing_work() {
    let library = TemplateLibrary::builtin();
    let mut project = ProjectState::new();
    project.set_project_name("Old");
    let old = project.add_piece_by_id("oak", None).unwrap();
    project.select_piece(Some(old));

    project.apply_template(library.get_template("workbench").unwrap());
    assert!(project.piece(old).is_none());
    assert_eq!(project.selected_piece_id(), None);
    assert_eq!(project.project_name(), "Untitled Project");
}

#[test]
fn test_library_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("templates.json");

    let mut library = TemplateLibrary::builtin();
    library
        .add_template(FurnitureTemplate {
            id: "stool".to_string(),
            name: "Stool".to_string(),
            description: "Three legs".to_string(),
            pieces: vec![TemplatePiece {
                profile_id: "2x4".into(),
                position: Vec3::new(0.0, 9.0, 0.0),
                rotation: Vec3::ZERO,
                length: Some(18.0),
            }],
        })
        .unwrap();
    library.save_to_file(&path).unwrap();

    let loaded = TemplateLibrary::load_from_file(&path).unwrap();
    assert_eq!(loaded, library);
    assert_eq!(loaded.search("legs").len(), 2);
}
