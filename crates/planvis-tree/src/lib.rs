//! # planvis-tree
//!
//! Parent inference: reconstructs a tree from the flat, ordered trace event
//! sequence.
//!
//! The log carries no explicit parent pointers, so ancestry is inferred from
//! two signals: `state` equality (same logical execution context) and the
//! branching kinds (`branch`, `plan`, `goal`) that mark fan-out points.
//! The resulting [`ParentMap`] is acyclic and connected by construction
//! because every assigned parent index is strictly smaller than its child.

#![deny(unsafe_code)]

use tracing::debug;

use planvis_core::{ParentMap, TraceEvent};

/// Infer the parent of every non-root event.
///
/// For each event at position `i > 0`, scan backward over `j = i-1..=0` and
/// pick the first `j` whose `state` equals `events[i].state` and whose kind
/// is branching. When no such `j` exists, fall back to `i - 1`, so every
/// non-root event gets exactly one parent and the structure is a single
/// tree rooted at index 0, never a forest or a cycle.
///
/// `session` is parsed and carried on the events but deliberately does not
/// scope this scan: interleaved sessions in one log will cross-contaminate
/// ancestry. Known limitation of the current heuristic.
pub fn infer_parents(events: &[TraceEvent]) -> ParentMap {
    let mut parents = Vec::with_capacity(events.len().saturating_sub(1));
    for (i, event) in events.iter().enumerate().skip(1) {
        let parent = events[..i]
            .iter()
            .enumerate()
            .rev()
            .find(|(_, candidate)| {
                candidate.state == event.state && candidate.kind.is_branching()
            })
            .map_or(i - 1, |(j, _)| j);
        parents.push(parent);
    }
    debug!(nodes = events.len(), edges = parents.len(), "inferred parent map");
    ParentMap::from_parents(events.len(), parents)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use planvis_core::EventType;
    use planvis_parser::parse_lines;

    use super::*;

    fn event(index: usize, kind: &str, state: &str) -> TraceEvent {
        TraceEvent {
            index,
            kind: EventType::from(kind),
            value: format!("v{index}"),
            state: state.to_string(),
            score: None,
            session: "default".to_string(),
        }
    }

    #[test]
    fn empty_sequence_yields_empty_map() {
        let map = infer_parents(&[]);
        assert_eq!(map.node_count(), 0);
    }

    #[test]
    fn single_event_is_the_root() {
        let map = infer_parents(&[event(0, "plan", "S1")]);
        assert_eq!(map.node_count(), 1);
        assert_eq!(map.edge_count(), 0);
        assert_eq!(map.parent(0), None);
    }

    #[test]
    fn nearest_branching_state_match_wins() {
        // Two qualifying ancestors at state S1; the closer one (index 2)
        // must be chosen over the farther one (index 0).
        let events = [
            event(0, "plan", "S1"),
            event(1, "execute", "S1"),
            event(2, "branch", "S1"),
            event(3, "simulate", "S1"),
        ];
        let map = infer_parents(&events);
        assert_eq!(map.parent(3), Some(2));
    }

    #[test]
    fn state_match_without_branching_kind_does_not_qualify() {
        let events = [
            event(0, "plan", "S1"),
            event(1, "execute", "S2"),
            event(2, "simulate", "S2"),
        ];
        let map = infer_parents(&events);
        // Index 1 shares state S2 with index 2 but `execute` is not a
        // branching kind, so the fallback to the previous event applies.
        assert_eq!(map.parent(2), Some(1));
    }

    #[test]
    fn fallback_links_to_the_previous_event() {
        let events = [
            event(0, "plan", "S1"),
            event(1, "reflect", "S9"),
        ];
        let map = infer_parents(&events);
        assert_eq!(map.parent(1), Some(0));
    }

    #[test]
    fn four_line_scenario_from_the_planner_log() {
        let events = parse_lines([
            "[TRACE] type=plan value=A state=S1",
            "[TRACE] type=branch value=B state=S1",
            "[TRACE] type=execute value=C state=S1",
            "[TRACE] type=reflect value=D state=S2",
        ]);
        let map = infer_parents(&events);
        assert_eq!(map.parent(1), Some(0));
        assert_eq!(map.parent(2), Some(1));
        assert_eq!(map.parent(3), Some(2));
    }

    #[test]
    fn sessions_do_not_scope_the_scan() {
        // Interleaved sessions share ancestry when states collide.
        let mut a = event(0, "branch", "S1");
        a.session = "alpha".to_string();
        let mut b = event(1, "execute", "S1");
        b.session = "beta".to_string();
        let map = infer_parents(&[a, b]);
        assert_eq!(map.parent(1), Some(0));
    }

    proptest! {
        #[test]
        fn every_parent_strictly_precedes_its_child(
            kinds in proptest::collection::vec(0usize..6, 1..30),
            states in proptest::collection::vec(0usize..4, 1..30),
        ) {
            let n = kinds.len().min(states.len());
            let events: Vec<TraceEvent> = (0..n)
                .map(|i| {
                    let kind = ["plan", "branch", "goal", "execute", "reflect", "score"][kinds[i]];
                    event(i, kind, &format!("S{}", states[i]))
                })
                .collect();
            let map = infer_parents(&events);
            prop_assert_eq!(map.edge_count(), n - 1);
            for (child, parent) in map.iter() {
                prop_assert!(parent < child);
            }
        }
    }
}
