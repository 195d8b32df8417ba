use std::f64::consts::PI;

use woodcraft_designer::{
    quantize, Face, ProjectState, SnapCandidateCache, SnapSettings, Vec3,
};

#[test]
fn test_quantize_rounds_to_grid() {
    assert_eq!(quantize(2.3, 1.0), 2.0);
    assert_eq!(quantize(-1.7, 1.0), -2.0);
    assert_eq!(quantize(0.5, 1.0), 1.0);
    assert_eq!(quantize(-0.5, 1.0), 0.0);
    assert_eq!(quantize(7.3, 0.5), 7.5);
    assert!(quantize(-0.2, 1.0).is_sign_positive());
}

#[test]
fn test_rotation_snaps_to_fifteen_degrees() {
    let snap = SnapSettings::default();
    let r = snap.snap_rotation(Vec3::new(0.3, PI / 2.0 + 0.05, -0.1));
    assert!((r.x - PI / 12.0).abs() < 1e-12);
    assert!((r.y - PI / 2.0).abs() < 1e-12);
    assert_eq!(r.z, 0.0);
}

#[test]
fn test_disabled_snap_passes_through() {
    let snap = SnapSettings {
        enabled: false,
        ..SnapSettings::default()
    };
    let v = Vec3::new(2.3, 0.04, -1.7);
    assert_eq!(snap.snap_position(v), v);
    assert_eq!(snap.snap_rotation(v), v);
    assert_eq!(snap.snap_scale(v), v);
}

#[test]
fn test_candidates_from_nearby_piece_faces() {
    let mut project = ProjectState::new();
    let a = project.add_piece_by_id("2x4", Some(Vec3::ZERO)).unwrap();
    let b = project
        .add_piece_by_id("2x4", Some(Vec3::new(10.0, 0.0, 0.0)))
        .unwrap();
    project
        .add_piece_by_id("2x4", Some(Vec3::new(500.0, 0.0, 0.0)))
        .unwrap();

    assert!(project.snap_candidates().is_empty());

    project.select_piece(Some(a));
    let candidates = project.snap_candidates();
    assert_eq!(candidates.len(), 6);
    assert!(candidates.iter().all(|c| c.source == b));

    let pos_x = candidates.iter().find(|c| c.face == Face::PosX).unwrap();
    assert!((pos_x.point.x - 58.0).abs() < 1e-9);

    project.toggle_snap_to_grid();
    assert!(project.snap_candidates().is_empty());
}

#[test]
fn test_cache_recomputes_on_key_change() {
    let mut project = ProjectState::new();
    let a = project.add_piece_by_id("2x4", Some(Vec3::ZERO)).unwrap();
    project
        .add_piece_by_id("2x6", Some(Vec3::new(4.0, 0.0, 0.0)))
        .unwrap();
    project.select_piece(Some(a));

    let mut cache = SnapCandidateCache::new();
    let first = cache
        .get(project.store(), project.selected_piece_id(), project.snap_settings())
        .to_vec();
    cache.get(project.store(), project.selected_piece_id(), project.snap_settings());
    assert_eq!(cache.recomputations(), 1);
    assert_eq!(first, project.snap_candidates());

    project.add_piece_by_id("oak", None).unwrap();
    cache.get(project.store(), project.selected_piece_id(), project.snap_settings());
    assert_eq!(cache.recomputations(), 2);

    project.toggle_snap_to_grid();
    let empty = cache.get(project.store(), project.selected_piece_id(), project.snap_settings());
    assert!(empty.is_empty());
    assert_eq!(cache.recomputations(), 3);
}
