use woodcraft_designer::{reduce, ActiveTool, InputEvent, Key, KeyPress, ProjectState, Vec3};

fn key(c: char) -> InputEvent {
    InputEvent::Key(KeyPress::char(c))
}

#[test]
fn test_reducer_session() {
    let events = [
        InputEvent::DropProfile {
            profile_id: "2x4".to_string(),
            position: Some(Vec3::new(0.0, 1.75, 0.0)),
        },
        InputEvent::DropProfile {
            profile_id: "2x6".to_string(),
            position: Some(Vec3::new(20.0, 2.75, 0.0)),
        },
    ];
    let state = events.iter().fold(ProjectState::new(), reduce);
    assert_eq!(state.piece_count(), 2);
    let first = state.pieces()[0].id;

    let state = reduce(state, &InputEvent::PointerDown { piece: Some(first) });
    let state = reduce(state, &key('g'));
    let state = reduce(
        state,
        &InputEvent::TransformDrag {
            piece: first,
            position: Vec3::new(3.4, 1.75, 8.6),
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        },
    );

    assert_eq!(state.active_tool(), ActiveTool::Move);
    assert_eq!(state.piece(first).unwrap().position, Vec3::new(3.0, 2.0, 9.0));
}

#[test]
fn test_tool_switches_keep_selection() {
    let mut state = ProjectState::new();
    let id = state.add_piece_by_id("4x4", None).unwrap();
    state.select_piece(Some(id));

    for c in ['g', 'r', 's', 'm', 'v'] {
        state.dispatch(&key(c));
        assert_eq!(state.selected_piece_id(), Some(id));
    }
    assert_eq!(state.active_tool(), ActiveTool::Select);
}

#[test]
fn test_click_to_delete_session() {
    let mut state = ProjectState::new();
    let ids: Vec<_> = (0..3)
        .map(|i| {
            state
                .add_piece_by_id("1x4", Some(Vec3::new(i as f64 * 10.0, 0.375, 0.0)))
                .unwrap()
        })
        .collect();
    state.select_piece(Some(ids[1]));
    state.set_active_tool(ActiveTool::Delete);

    state.dispatch(&InputEvent::PointerDown { piece: Some(ids[1]) });
    state.dispatch(&InputEvent::PointerDown { piece: Some(ids[1]) });
    assert_eq!(state.piece_count(), 2);
    assert_eq!(state.selected_piece_id(), None);
}

#[test]
fn test_dimensions_and_duplicate_keys() {
    let mut state = ProjectState::new();
    state.dispatch(&key('d'));
    assert!(!state.show_dimensions());

    // Nothing selected
    state.dispatch(&InputEvent::Key(KeyPress::ctrl(Key::Char('d'))));
    assert!(state.is_empty());
    assert!(!state.show_dimensions());
}
