// Integration tests for the graph algorithm engines

use algoviz::engine::errors::OperationError;
use algoviz::engine::graph as engine;
use algoviz::session::{Operation, StructureKind, VisualizerSession};
use algoviz::step::{NodeId, StepKind, StepSequence};
use algoviz::store::graph::Graph;

/// Node ids of every Visit step, in recorded order
fn visit_order(steps: &StepSequence) -> Vec<NodeId> {
    steps
        .iter()
        .filter(|s| s.kind == StepKind::Visit)
        .map(|s| s.overlay.nodes[0])
        .collect()
}

/// A-B, A-C, B-D, C-E, all weight 1, undirected
fn two_branch_graph() -> (Graph, Vec<NodeId>) {
    let mut g = Graph::new(false);
    let ids: Vec<NodeId> = ["A", "B", "C", "D", "E"]
        .iter()
        .map(|l| g.add_node(l.to_string()))
        .collect();
    for (from, to) in [(0, 1), (0, 2), (1, 3), (2, 4)] {
        g.add_edge(ids[from], ids[to], 1).expect("edge");
    }
    (g, ids)
}

#[test]
fn bfs_visits_in_level_order() {
    let (g, ids) = two_branch_graph();
    let steps = engine::bfs(&g, ids[0]);
    assert_eq!(visit_order(&steps), vec![ids[0], ids[1], ids[2], ids[3], ids[4]]);
    let last = steps.last().expect("steps recorded");
    assert_eq!(last.kind, StepKind::Complete);
    assert_eq!(last.overlay.visited.len(), 5);
}

#[test]
fn dfs_explores_first_branch_fully_before_second() {
    let (g, ids) = two_branch_graph();
    let steps = engine::dfs(&g, ids[0]);
    // First-discovered neighbor is popped first, so the B branch finishes
    // before C is visited
    assert_eq!(visit_order(&steps), vec![ids[0], ids[1], ids[3], ids[2], ids[4]]);
}

#[test]
fn bfs_and_dfs_cover_the_same_nodes() {
    let (g, ids) = two_branch_graph();
    let mut bfs: Vec<NodeId> = visit_order(&engine::bfs(&g, ids[0]));
    let mut dfs: Vec<NodeId> = visit_order(&engine::dfs(&g, ids[0]));
    bfs.sort_unstable();
    dfs.sort_unstable();
    assert_eq!(bfs, dfs);
}

#[test]
fn dijkstra_relaxes_through_the_cheaper_path() {
    let mut g = Graph::new(false);
    let a = g.add_node("A".to_string());
    let b = g.add_node("B".to_string());
    let c = g.add_node("C".to_string());
    g.add_edge(a, b, 4).expect("edge");
    g.add_edge(a, c, 1).expect("edge");
    g.add_edge(c, b, 1).expect("edge");

    let steps = engine::dijkstra(&g, a);
    let last = steps.last().expect("steps recorded");
    assert_eq!(last.kind, StepKind::Complete);
    let dist = |id: NodeId| {
        last.overlay
            .distances
            .iter()
            .find(|(n, _)| *n == id)
            .and_then(|(_, d)| *d)
    };
    assert_eq!(dist(a), Some(0));
    assert_eq!(dist(b), Some(2));
    assert_eq!(dist(c), Some(1));
    // The direct A-B edge settles B at 4 first, then C relaxes it to 2
    let relaxed_to_two = steps
        .iter()
        .any(|s| s.kind == StepKind::Relax && s.overlay.nodes == vec![b] && s.description.contains("2"));
    assert!(relaxed_to_two);
}

#[test]
fn dijkstra_leaves_unreachable_nodes_infinite() {
    let mut g = Graph::new(false);
    let a = g.add_node("A".to_string());
    let b = g.add_node("B".to_string());
    let island = g.add_node("Z".to_string());
    g.add_edge(a, b, 3).expect("edge");

    let steps = engine::dijkstra(&g, a);
    let last = steps.last().expect("steps recorded");
    let entry = last
        .overlay
        .distances
        .iter()
        .find(|(n, _)| *n == island)
        .expect("island in the table");
    assert_eq!(entry.1, None);
    assert!(!last.overlay.visited.contains(&island));
}

#[test]
fn prim_and_boruvka_agree_on_total_mst_weight() {
    let mut g = Graph::new(false);
    let ids: Vec<NodeId> = ["A", "B", "C", "D", "E"]
        .iter()
        .map(|l| g.add_node(l.to_string()))
        .collect();
    for (from, to, w) in [
        (0, 1, 4),
        (0, 2, 1),
        (2, 1, 1),
        (1, 3, 5),
        (2, 3, 8),
        (3, 4, 2),
    ] {
        g.add_edge(ids[from], ids[to], w).expect("edge");
    }

    let total = |steps: &StepSequence| -> i64 {
        let last = steps.last().expect("steps recorded");
        last.overlay
            .mst_edges
            .iter()
            .map(|&id| {
                g.edges()
                    .iter()
                    .find(|e| e.id == id)
                    .map(|e| e.weight)
                    .expect("edge exists")
            })
            .sum()
    };
    let prim = engine::prim(&g);
    let boruvka = engine::boruvka(&g);
    assert_eq!(prim.last().expect("steps").overlay.mst_edges.len(), 4);
    assert_eq!(boruvka.last().expect("steps").overlay.mst_edges.len(), 4);
    assert_eq!(total(&prim), total(&boruvka));
    assert_eq!(total(&prim), 9);
}

#[test]
fn prim_reports_a_partial_tree_on_a_disconnected_graph() {
    let mut g = Graph::new(false);
    let a = g.add_node("A".to_string());
    let b = g.add_node("B".to_string());
    let c = g.add_node("C".to_string());
    let d = g.add_node("D".to_string());
    g.add_edge(a, b, 1).expect("edge");
    g.add_edge(c, d, 1).expect("edge");

    let steps = engine::prim(&g);
    let last = steps.last().expect("steps recorded");
    assert_eq!(last.kind, StepKind::Complete);
    assert_eq!(last.overlay.mst_edges.len(), 1);
    assert!(last.description.contains("partial"));
}

#[test]
fn boruvka_terminates_on_a_disconnected_graph() {
    let mut g = Graph::new(false);
    let a = g.add_node("A".to_string());
    let b = g.add_node("B".to_string());
    let c = g.add_node("C".to_string());
    let d = g.add_node("D".to_string());
    g.add_edge(a, b, 1).expect("edge");
    g.add_edge(c, d, 2).expect("edge");

    let steps = engine::boruvka(&g);
    let last = steps.last().expect("steps recorded");
    assert_eq!(last.kind, StepKind::Complete);
    // Both components build their own tree; no spanning tree exists
    assert_eq!(last.overlay.mst_edges.len(), 2);
    assert!(last.description.contains("disconnected"));
}

#[test]
fn floyd_warshall_computes_all_pairs() {
    let mut g = Graph::new(false);
    let a = g.add_node("A".to_string());
    let b = g.add_node("B".to_string());
    let c = g.add_node("C".to_string());
    g.add_edge(a, b, 4).expect("edge");
    g.add_edge(a, c, 1).expect("edge");
    g.add_edge(c, b, 1).expect("edge");

    let steps = engine::floyd_warshall(&g);
    let last = steps.last().expect("steps recorded");
    let matrix = last.overlay.matrix.as_ref().expect("final matrix");
    assert_eq!(matrix[0][0], Some(0));
    assert_eq!(matrix[0][1], Some(2));
    assert_eq!(matrix[1][0], Some(2));
    assert_eq!(matrix[0][2], Some(1));
    assert_eq!(matrix[2][1], Some(1));
}

#[test]
fn every_step_carries_its_own_overlay_snapshot() {
    let (g, ids) = two_branch_graph();
    let steps = engine::bfs(&g, ids[0]);
    // Visited sets must be cumulative snapshots, each one extending the last
    let mut prev: Vec<NodeId> = Vec::new();
    for step in steps.iter().filter(|s| s.kind == StepKind::Visit) {
        assert_eq!(&step.overlay.visited[..prev.len()], &prev[..]);
        assert_eq!(step.overlay.visited.len(), prev.len() + 1);
        prev = step.overlay.visited.clone();
    }
    assert_eq!(prev.len(), 5);
}

#[test]
fn unknown_start_label_is_rejected_before_anything_changes() {
    let mut session = VisualizerSession::new(StructureKind::Graph);
    session
        .apply(Operation::AddNode {
            label: "A".to_string(),
        })
        .expect("add node");
    let loaded = session.playback().len();

    let err = session
        .apply(Operation::Bfs {
            start: "Z".to_string(),
        })
        .expect_err("unknown label");
    assert!(matches!(err, OperationError::UnknownNode { .. }));
    // The previously loaded sequence is untouched
    assert_eq!(session.playback().len(), loaded);
}

#[test]
fn wrong_structure_operation_is_rejected() {
    let mut session = VisualizerSession::new(StructureKind::Graph);
    let err = session
        .apply(Operation::StackPush { value: 1 })
        .expect_err("stack op on a graph");
    assert!(matches!(err, OperationError::WrongStructure { .. }));
}
