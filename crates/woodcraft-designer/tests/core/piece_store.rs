use woodcraft_designer::{PiecePatch, ProjectState, Vec3};

#[test]
fn test_revision_moves_on_piece_mutations_only() {
    let mut project = ProjectState::new();
    let r0 = project.store().revision();

    let id = project.add_piece_by_id("2x4", None).unwrap();
    let r1 = project.store().revision();
    assert!(r1 > r0);

    project.select_piece(Some(id));
    project.toggle_show_dimensions();
    project.set_project_name("Shelf");
    assert_eq!(project.store().revision(), r1);

    project.update_piece(id, &PiecePatch::new().position(Vec3::new(1.0, 1.75, 0.0)));
    let r2 = project.store().revision();
    assert!(r2 > r1);

    project.remove_piece(id);
    assert!(project.store().revision() > r2);
}

#[test]
fn test_store_keeps_insertion_order() {
    let mut project = ProjectState::new();
    let ids: Vec<_> = ["2x4", "4x4", "oak", "2x4"]
        .iter()
        .map(|p| project.add_piece_by_id(p, None).unwrap())
        .collect();

    project.remove_piece(ids[1]);
    let remaining: Vec<_> = project.store().iter().map(|p| p.id).collect();
    assert_eq!(remaining, vec![ids[0], ids[2], ids[3]]);
    assert!(project.store().contains(ids[2]));
    assert!(!project.store().contains(ids[1]));
}

#[test]
fn test_duplicate_appends_to_end() {
    let mut project = ProjectState::new();
    let a = project.add_piece_by_id("2x4", None).unwrap();
    let b = project.add_piece_by_id("2x6", None).unwrap();
    let copy = project.duplicate_piece(a).unwrap();

    let order: Vec<_> = project.pieces().iter().map(|p| p.id).collect();
    assert_eq!(order, vec![a, b, copy]);
}
