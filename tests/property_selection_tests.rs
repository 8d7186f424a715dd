use graph_range_slider::api::GraphRangeSlider;
use graph_range_slider::core::{
    DataPoint, IdentityIndex, Identifiable, SelectionRange, effective_min_span,
    indices_for_selection, slice_selection,
};
use graph_range_slider::interaction::{DraggingState, HandleSide, Transition};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Begin(HandleSide),
    MoveLeft(usize),
    MoveRight(usize),
    Pointer(f64),
    End,
    Resize(f64),
    MinCount(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop_oneof![Just(HandleSide::Left), Just(HandleSide::Right)].prop_map(Op::Begin),
        (0usize..64).prop_map(Op::MoveLeft),
        (0usize..64).prop_map(Op::MoveRight),
        (-50.0f64..1_000.0).prop_map(Op::Pointer),
        Just(Op::End),
        (0.0f64..1_000.0).prop_map(Op::Resize),
        (0usize..8).prop_map(Op::MinCount),
    ]
}

fn series(count: usize) -> Vec<DataPoint> {
    (0..count)
        .map(|i| DataPoint::new(i as f64, (i % 7) as f64))
        .collect()
}

proptest! {
    #[test]
    fn selection_invariants_hold_after_every_transition(
        count in 1usize..40,
        ops in proptest::collection::vec(op_strategy(), 1..64)
    ) {
        let mut slider = GraphRangeSlider::identified(series(count), Vec::new());
        slider.set_container_width(480.0).expect("valid width");

        for op in ops {
            let before = slider.selection_range();
            let dragging = slider.dragging();
            match op {
                Op::Begin(side) => {
                    slider.begin_drag(side);
                }
                Op::MoveLeft(index) => {
                    let transition = slider.move_left(index);
                    if dragging != DraggingState::Left {
                        prop_assert_eq!(transition, Transition::Rejected);
                        prop_assert_eq!(slider.selection_range(), before);
                    }
                }
                Op::MoveRight(index) => {
                    let transition = slider.move_right(index);
                    if dragging != DraggingState::Right {
                        prop_assert_eq!(transition, Transition::Rejected);
                        prop_assert_eq!(slider.selection_range(), before);
                    }
                }
                Op::Pointer(x) => {
                    slider.drag_to(x);
                }
                Op::End => {
                    slider.end_drag();
                }
                Op::Resize(width) => {
                    slider.set_container_width(width).expect("valid width");
                    prop_assert_eq!(slider.selection_range(), before);
                }
                Op::MinCount(min_count) => slider.set_min_count(min_count),
            }

            let SelectionRange { left, right } = slider.selection_range();
            let span = effective_min_span(count, slider.config().min_count);
            prop_assert!(left < right);
            prop_assert!(right <= slider.positions().len() - 1);
            prop_assert!(right - left >= span);
            prop_assert_eq!(slider.selected_data(), &slider.data()[left..right]);
        }
    }

    #[test]
    fn selection_round_trips_through_slice_and_lookup(
        count in 1usize..200,
        a in 0usize..200,
        b in 0usize..200
    ) {
        let left = a % count;
        let right = left + 1 + b % (count - left);
        let data = series(count);
        let index = IdentityIndex::build(&data, DataPoint::id);

        let selection = slice_selection(&data, left, right);
        let range = indices_for_selection(selection, &index, DataPoint::id, count + 1);
        prop_assert_eq!(range, SelectionRange::new(left, right));
    }
}
