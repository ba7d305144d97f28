//! Property-based tests over arbitrary command and pointer-event sequences.

use std::collections::{HashMap, HashSet};

use canvasink_core::{Command, Engine, Point, PointerEvent, ShapeSnapshot, color_for_pointer};
use proptest::prelude::*;

/// Stroke ids that may be started. Updates and finishes also target `s4`,
/// which is never started.
const STARTABLE_IDS: usize = 4;

#[derive(Clone, Debug)]
enum Op {
    Rectangle { x: i16, y: i16 },
    Start { id: usize, x: i16, y: i16 },
    Update { id: usize, x: i16, y: i16 },
    Finish { id: usize },
}

fn stroke_id(index: usize) -> String {
    format!("s{index}")
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => (any::<i16>(), any::<i16>()).prop_map(|(x, y)| Op::Rectangle { x, y }),
        2 => (0..STARTABLE_IDS, any::<i16>(), any::<i16>())
            .prop_map(|(id, x, y)| Op::Start { id, x, y }),
        5 => (0..=STARTABLE_IDS, any::<i16>(), any::<i16>())
            .prop_map(|(id, x, y)| Op::Update { id, x, y }),
        2 => (0..=STARTABLE_IDS).prop_map(|id| Op::Finish { id }),
    ]
}

fn to_command(op: &Op) -> Command {
    match *op {
        Op::Rectangle { x, y } => Command::CreateRectangle {
            x: x.into(),
            y: y.into(),
            width: 10.0,
            height: 10.0,
            color: "#000".into(),
        },
        Op::Start { id, x, y } => Command::StartStroke {
            id: stroke_id(id),
            x: x.into(),
            y: y.into(),
            size: 2.0,
            color: "red".into(),
        },
        Op::Update { id, x, y } => Command::UpdateStroke {
            id: stroke_id(id),
            x: x.into(),
            y: y.into(),
        },
        Op::Finish { id } => Command::FinishStroke { id: stroke_id(id) },
    }
}

/// Expected stroke contents in creation order: points received while active.
fn expected_strokes(ops: &[Op]) -> Vec<(String, Vec<Point>)> {
    let mut strokes: Vec<(String, Vec<Point>)> = Vec::new();
    let mut active: HashMap<usize, usize> = HashMap::new();
    for op in ops {
        match *op {
            Op::Rectangle { .. } => {}
            Op::Start { id, x, y } => {
                active.insert(id, strokes.len());
                strokes.push((stroke_id(id), vec![Point::new(x.into(), y.into())]));
            }
            Op::Update { id, x, y } => {
                if let Some(&slot) = active.get(&id) {
                    strokes[slot].1.push(Point::new(x.into(), y.into()));
                }
            }
            Op::Finish { id } => {
                active.remove(&id);
            }
        }
    }
    strokes
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Rectangle ids and names count up from 1 regardless of interleaved stroke commands.
    #[test]
    fn rectangle_ids_follow_creation_order(ops in prop::collection::vec(arbitrary_op(), 0..60)) {
        let mut engine = Engine::new();
        for op in &ops {
            engine.execute(to_command(op));
        }

        let snapshot = engine.tick();
        let rectangles: Vec<_> = snapshot
            .document
            .shapes
            .iter()
            .filter(|s| s.kind() == "rectangle")
            .collect();
        let created = ops.iter().filter(|op| matches!(op, Op::Rectangle { .. })).count();
        prop_assert_eq!(rectangles.len(), created);
        for (index, rect) in rectangles.iter().enumerate() {
            prop_assert_eq!(rect.id(), format!("rect-{}", index + 1));
            prop_assert_eq!(rect.name(), format!("Rectangle {}", index + 1));
        }
        // Rectangles always lead the shape list.
        prop_assert!(snapshot.document.shapes[..created].iter().all(|s| s.kind() == "rectangle"));
    }

    /// Stroke points are the start point plus every update received while active, in order.
    #[test]
    fn stroke_points_only_grow_while_active(ops in prop::collection::vec(arbitrary_op(), 0..80)) {
        let mut engine = Engine::new();
        for op in &ops {
            engine.execute(to_command(op));
        }

        let actual: Vec<(String, Vec<Point>)> = engine
            .tick()
            .document
            .shapes
            .into_iter()
            .filter_map(|shape| match shape {
                ShapeSnapshot::Stroke { id, points, .. } => Some((id, points)),
                ShapeSnapshot::Rectangle { .. } => None,
            })
            .collect();
        prop_assert_eq!(actual, expected_strokes(&ops));
    }

    /// Each pointer appears once, at its latest position, in its palette color.
    #[test]
    fn presences_are_unique_per_pointer(
        moves in prop::collection::vec((-20i32..20, any::<i16>(), any::<i16>()), 0..60),
    ) {
        let mut engine = Engine::new();
        let mut latest: HashMap<i32, (f64, f64)> = HashMap::new();
        for &(pointer_id, x, y) in &moves {
            engine.pointer_event(PointerEvent::PointerMove {
                pointer_id,
                x: x.into(),
                y: y.into(),
            });
            latest.insert(pointer_id, (x.into(), y.into()));
        }

        let presences = engine.tick().presences;
        prop_assert_eq!(presences.len(), latest.len());

        let mut seen = HashSet::new();
        for presence in &presences {
            prop_assert!(seen.insert(presence.id.clone()));
            let pointer_id: i32 = presence.id.parse().unwrap();
            prop_assert_eq!(presence.color.as_str(), color_for_pointer(pointer_id));
            prop_assert_eq!(latest.get(&pointer_id).copied(), Some((presence.x, presence.y)));
        }
    }
}
