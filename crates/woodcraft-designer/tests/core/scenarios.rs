use woodcraft_core::{standard_catalog, PieceId};
use woodcraft_designer::{ActiveTool, InputEvent, PiecePatch, ProjectState, Vec3};

#[test]
fn test_add_piece_at_default_position() {
    let mut project = ProjectState::new();
    let id = project.add_piece_by_id("2x4", None).unwrap();

    assert_eq!(project.piece_count(), 1);
    let piece = project.piece(id).unwrap();
    assert_eq!(piece.position, Vec3::new(0.0, 1.75, 0.0));
    assert_eq!(piece.custom_length, Some(96.0));
    assert_eq!(piece.rotation, Vec3::ZERO);
    assert_eq!(piece.scale, Vec3::ONE);
}

#[test]
fn test_two_equal_pieces_make_one_row() {
    let mut project = ProjectState::new();
    project.add_piece_by_id("2x4", None).unwrap();
    project
        .add_piece_by_id("2x4", Some(Vec3::new(30.0, 1.75, 0.0)))
        .unwrap();

    let rows = project.cut_list();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].quantity, 2);
    assert_eq!(rows[0].length, 96.0);
    assert_eq!(rows[0].lumber_type, "2×4");
}

#[test]
fn test_duplicate_offsets_copy() {
    let mut project = ProjectState::new();
    let id = project.add_piece_by_id("1x6", Some(Vec3::ZERO)).unwrap();
    let copy_id = project.duplicate_piece(id).unwrap();

    assert_ne!(copy_id, id);
    let original = project.piece(id).unwrap();
    let copy = project.piece(copy_id).unwrap();
    assert_eq!(copy.position, Vec3::new(5.0, 0.0, 5.0));
    assert_eq!(copy.profile, original.profile);
    assert_eq!(copy.color, original.color);
    assert_eq!(copy.effective_length(), original.effective_length());
}

#[test]
fn test_snapped_move_commits_grid_position() {
    let mut project = ProjectState::new();
    let id = project.add_piece_by_id("2x4", None).unwrap();
    project.select_piece(Some(id));
    project.set_active_tool(ActiveTool::Move);
    project.set_grid_size(1.0);
    assert!(project.snap_to_grid());

    project.dispatch(&InputEvent::TransformDrag {
        piece: id,
        position: Vec3::new(2.3, 0.0, -1.7),
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    });

    assert_eq!(project.piece(id).unwrap().position, Vec3::new(2.0, 0.0, -2.0));
}

#[test]
fn test_remove_selected_clears_selection() {
    let mut project = ProjectState::new();
    let keep = project.add_piece_by_id("2x6", None).unwrap();
    let before = project.pieces().to_vec();

    let id = project.add_piece_by_id("4x4", None).unwrap();
    project.select_piece(Some(id));
    assert!(project.remove_piece(id));

    assert_eq!(project.pieces(), before.as_slice());
    assert_eq!(project.selected_piece_id(), None);
    assert!(project.piece(keep).is_some());
}

#[test]
fn test_unknown_ids_are_ignored() {
    let mut project = ProjectState::new();
    project.add_piece_by_id("2x4", None).unwrap();
    let ghost = PieceId::new();
    let revision = project.store().revision();

    assert!(!project.remove_piece(ghost));
    assert!(!project.update_piece(ghost, &PiecePatch::new().position(Vec3::ONE)));
    assert!(project.duplicate_piece(ghost).is_none());
    project.select_piece(Some(ghost));

    assert_eq!(project.selected_piece_id(), None);
    assert_eq!(project.piece_count(), 1);
    assert_eq!(project.store().revision(), revision);
}

#[test]
fn test_non_finite_update_rejected() {
    let mut project = ProjectState::new();
    let id = project.add_piece_by_id("2x4", None).unwrap();
    let before = project.piece(id).unwrap().clone();

    let patch = PiecePatch::new()
        .rotation(Vec3::new(0.0, 1.0, 0.0))
        .position(Vec3::new(f64::NAN, 0.0, 0.0));
    assert!(!project.update_piece(id, &patch));
    assert!(!project.update_piece(id, &PiecePatch::new().custom_length(0.0)));
    assert!(!project.update_piece(id, &PiecePatch::new().scale(Vec3::new(1.0, 0.0, 1.0))));

    assert_eq!(project.piece(id).unwrap(), &before);
}

#[test]
fn test_clear_resets_name_and_selection() {
    let mut project = ProjectState::new();
    project.set_project_name("Bench");
    let id = project.add_piece_by_id("2x4", None).unwrap();
    project.select_piece(Some(id));

    project.clear_project();
    assert!(project.is_empty());
    assert_eq!(project.selected_piece_id(), None);
    assert_eq!(project.project_name(), "Untitled Project");
}

#[test]
fn test_catalog_profiles_resolve_by_id() {
    let mut project = ProjectState::new();
    for profile in standard_catalog().profiles() {
        project.add_piece_by_id(profile.id.as_str(), None).unwrap();
    }
    assert_eq!(project.piece_count(), standard_catalog().len());
    assert!(project.add_piece_by_id("3x5", None).is_err());
}
