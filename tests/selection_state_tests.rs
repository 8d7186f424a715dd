use graph_range_slider::core::SelectionRange;
use graph_range_slider::interaction::{
    DraggingState, HandleSide, RangeSelectionState, Transition,
};

#[test]
fn new_state_selects_full_range() {
    let state = RangeSelectionState::new(6, 1);
    assert_eq!(state.range(), SelectionRange::new(0, 5));
    assert_eq!(state.dragging(), DraggingState::None);
    assert_eq!(state.element_count(), 5);
}

#[test]
fn moves_are_rejected_without_drag() {
    let mut state = RangeSelectionState::new(6, 1);
    assert_eq!(state.move_left(2), Transition::Rejected);
    assert_eq!(state.move_right(2), Transition::Rejected);
    assert_eq!(state.range(), SelectionRange::new(0, 5));
}

#[test]
fn left_drag_disables_right_handle() {
    let mut state = RangeSelectionState::new(6, 1);
    assert!(state.begin_drag(HandleSide::Left));
    assert!(!state.is_enabled(HandleSide::Right));
    assert!(!state.begin_drag(HandleSide::Right));

    assert_eq!(state.move_right(3), Transition::Rejected);
    assert_eq!(state.range(), SelectionRange::new(0, 5));
    assert_eq!(state.dragging(), DraggingState::Left);
}

#[test]
fn left_handle_stops_before_right_minus_min_count() {
    let mut state = RangeSelectionState::new(6, 2);
    assert!(state.begin_drag(HandleSide::Left));

    assert_eq!(
        state.move_left(5),
        Transition::Changed(SelectionRange::new(3, 5))
    );
    assert_eq!(state.move_left(4), Transition::Unchanged);
}

#[test]
fn right_handle_clamps_to_min_span_and_table_end() {
    let mut state = RangeSelectionState::new(6, 3);
    assert!(state.begin_drag(HandleSide::Right));

    assert_eq!(
        state.move_right(1),
        Transition::Changed(SelectionRange::new(0, 3))
    );
    assert_eq!(
        state.move_right(40),
        Transition::Changed(SelectionRange::new(0, 5))
    );
}

#[test]
fn move_dragged_routes_to_active_side() {
    let mut state = RangeSelectionState::new(6, 1);
    assert_eq!(state.move_dragged(2), Transition::Rejected);

    state.begin_drag(HandleSide::Right);
    assert_eq!(
        state.move_dragged(2),
        Transition::Changed(SelectionRange::new(0, 2))
    );
}

#[test]
fn end_drag_releases_once() {
    let mut state = RangeSelectionState::new(6, 1);
    state.begin_drag(HandleSide::Left);
    state.move_left(1);

    assert_eq!(
        state.end_drag(),
        Transition::Ended(SelectionRange::new(1, 5))
    );
    assert_eq!(state.dragging(), DraggingState::None);
    assert_eq!(state.end_drag(), Transition::Rejected);
    assert!(state.is_enabled(HandleSide::Right));
}

#[test]
fn reset_normalizes_against_new_table() {
    let mut state = RangeSelectionState::new(6, 1);
    state.reset(SelectionRange::new(2, 4), 4);
    assert_eq!(state.range(), SelectionRange::new(2, 3));

    state.reset(SelectionRange::new(0, 3), 0);
    assert_eq!(state.range(), SelectionRange::default());
    assert!(!state.begin_drag(HandleSide::Left));
}

#[test]
fn emptied_table_keeps_drag_pending_until_release() {
    let mut state = RangeSelectionState::new(6, 1);
    state.begin_drag(HandleSide::Right);
    state.reset(SelectionRange::new(0, 5), 0);

    assert_eq!(state.dragging(), DraggingState::Right);
    assert_eq!(state.move_right(1), Transition::Unchanged);
    assert_eq!(state.end_drag(), Transition::Ended(SelectionRange::default()));
    assert_eq!(state.dragging(), DraggingState::None);
}

#[test]
fn raising_min_count_widens_selection() {
    let mut state = RangeSelectionState::new(6, 1);
    state.begin_drag(HandleSide::Left);
    state.move_left(4);
    state.end_drag();

    state.set_min_count(3);
    assert_eq!(state.range(), SelectionRange::new(2, 5));

    state.set_min_count(0);
    assert_eq!(state.min_count(), 1);
}
