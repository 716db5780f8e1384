//! Graph algorithm engines
//!
//! All six routines take the graph read-only and return a step sequence.
//! Tie-breaks everywhere are "first found in iteration order": node order is
//! insertion order, edge order is insertion order.
//!
//! Dijkstra assumes non-negative weights; behavior under negative weights is
//! undefined (no validation, known limitation).

use crate::step::{EdgeId, NodeId, Overlay, StepKind, StepRecorder, StepSequence};
use crate::store::graph::Graph;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

fn frontier_of(queue: &VecDeque<NodeId>) -> Vec<NodeId> {
    queue.iter().copied().collect()
}

/// The running distance table in node insertion order
fn distance_table(graph: &Graph, dist: &FxHashMap<NodeId, i64>) -> Vec<(NodeId, Option<i64>)> {
    graph
        .nodes()
        .iter()
        .map(|n| (n.id, dist.get(&n.id).copied()))
        .collect()
}

/// Breadth-first search from `start` with an explicit FIFO queue
pub fn bfs(graph: &Graph, start: NodeId) -> StepSequence {
    let mut rec = StepRecorder::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    let mut queued: FxHashSet<NodeId> = FxHashSet::default();
    let mut visited: Vec<NodeId> = Vec::new();

    queue.push_back(start);
    queued.insert(start);
    rec.push(
        StepKind::Enqueue,
        format!("Enqueue start node {}", graph.label(start)),
        Overlay {
            nodes: vec![start],
            frontier: frontier_of(&queue),
            ..Overlay::default()
        },
    );

    while let Some(current) = queue.pop_front() {
        rec.push(
            StepKind::Dequeue,
            format!("Dequeue {} from the front of the queue", graph.label(current)),
            Overlay {
                nodes: vec![current],
                frontier: frontier_of(&queue),
                visited: visited.clone(),
                ..Overlay::default()
            },
        );
        if visited.contains(&current) {
            rec.push(
                StepKind::Skip,
                format!("{} was already visited, skip it", graph.label(current)),
                Overlay {
                    nodes: vec![current],
                    frontier: frontier_of(&queue),
                    visited: visited.clone(),
                    ..Overlay::default()
                },
            );
            continue;
        }
        visited.push(current);
        rec.push(
            StepKind::Visit,
            format!("Mark {} visited", graph.label(current)),
            Overlay {
                nodes: vec![current],
                frontier: frontier_of(&queue),
                visited: visited.clone(),
                ..Overlay::default()
            },
        );
        for edge in graph.edges() {
            if !edge.leaves(current) {
                continue;
            }
            let Some(neighbor) = edge.other(current) else {
                continue;
            };
            if queued.contains(&neighbor) {
                continue;
            }
            queued.insert(neighbor);
            queue.push_back(neighbor);
            rec.push(
                StepKind::Enqueue,
                format!(
                    "Enqueue neighbor {} of {} at the rear",
                    graph.label(neighbor),
                    graph.label(current)
                ),
                Overlay {
                    nodes: vec![neighbor],
                    edge: Some(edge.id),
                    frontier: frontier_of(&queue),
                    visited: visited.clone(),
                    ..Overlay::default()
                },
            );
        }
    }

    rec.push(
        StepKind::Complete,
        format!("BFS complete: visited {} node(s)", visited.len()),
        Overlay {
            visited: visited.clone(),
            ..Overlay::default()
        },
    );
    rec.finish()
}

/// Depth-first search from `start` with an explicit LIFO stack.
///
/// Neighbors are pushed in reverse discovery order so pops see them in the
/// original left-to-right order.
pub fn dfs(graph: &Graph, start: NodeId) -> StepSequence {
    let mut rec = StepRecorder::new();
    let mut stack: Vec<NodeId> = vec![start];
    let mut visited: Vec<NodeId> = Vec::new();

    rec.push(
        StepKind::Push,
        format!("Push start node {} onto the stack", graph.label(start)),
        Overlay {
            nodes: vec![start],
            frontier: stack.clone(),
            ..Overlay::default()
        },
    );

    while let Some(current) = stack.pop() {
        rec.push(
            StepKind::Pop,
            format!("Pop {} off the top of the stack", graph.label(current)),
            Overlay {
                nodes: vec![current],
                frontier: stack.clone(),
                visited: visited.clone(),
                ..Overlay::default()
            },
        );
        if visited.contains(&current) {
            rec.push(
                StepKind::Skip,
                format!("{} was already visited, skip it", graph.label(current)),
                Overlay {
                    nodes: vec![current],
                    frontier: stack.clone(),
                    visited: visited.clone(),
                    ..Overlay::default()
                },
            );
            continue;
        }
        visited.push(current);
        rec.push(
            StepKind::Visit,
            format!("Mark {} visited", graph.label(current)),
            Overlay {
                nodes: vec![current],
                frontier: stack.clone(),
                visited: visited.clone(),
                ..Overlay::default()
            },
        );

        let mut neighbors: Vec<(NodeId, EdgeId)> = Vec::new();
        for edge in graph.edges() {
            if !edge.leaves(current) {
                continue;
            }
            let Some(neighbor) = edge.other(current) else {
                continue;
            };
            if !visited.contains(&neighbor) {
                neighbors.push((neighbor, edge.id));
            }
        }
        // Reverse push order so the first-discovered neighbor is popped first
        for &(neighbor, edge) in neighbors.iter().rev() {
            stack.push(neighbor);
            rec.push(
                StepKind::Push,
                format!(
                    "Push neighbor {} of {}",
                    graph.label(neighbor),
                    graph.label(current)
                ),
                Overlay {
                    nodes: vec![neighbor],
                    edge: Some(edge),
                    frontier: stack.clone(),
                    visited: visited.clone(),
                    ..Overlay::default()
                },
            );
        }
    }

    rec.push(
        StepKind::Complete,
        format!("DFS complete: visited {} node(s)", visited.len()),
        Overlay {
            visited: visited.clone(),
            ..Overlay::default()
        },
    );
    rec.finish()
}

/// Dijkstra's shortest paths from `start`.
///
/// Each round selects the unvisited node with the minimum known distance
/// (first found wins ties) and relaxes its incident edges, recording a step
/// on every strict improvement.  Terminates when no unvisited node has a
/// finite distance.
pub fn dijkstra(graph: &Graph, start: NodeId) -> StepSequence {
    let mut rec = StepRecorder::new();
    let mut dist: FxHashMap<NodeId, i64> = FxHashMap::default();
    let mut unvisited: FxHashSet<NodeId> = graph.nodes().iter().map(|n| n.id).collect();
    let mut visited: Vec<NodeId> = Vec::new();
    dist.insert(start, 0);

    rec.push(
        StepKind::Update,
        format!(
            "Initialize distances: {} = 0, all other nodes unreachable",
            graph.label(start)
        ),
        Overlay {
            nodes: vec![start],
            distances: distance_table(graph, &dist),
            ..Overlay::default()
        },
    );

    loop {
        let mut selected: Option<(NodeId, i64)> = None;
        for node in graph.nodes() {
            if !unvisited.contains(&node.id) {
                continue;
            }
            if let Some(&d) = dist.get(&node.id) {
                if selected.is_none_or(|(_, best)| d < best) {
                    selected = Some((node.id, d));
                }
            }
        }
        let Some((current, d)) = selected else {
            break;
        };
        unvisited.remove(&current);
        visited.push(current);
        rec.push(
            StepKind::Select,
            format!(
                "Select {} with the smallest known distance {}",
                graph.label(current),
                d
            ),
            Overlay {
                nodes: vec![current],
                visited: visited.clone(),
                distances: distance_table(graph, &dist),
                ..Overlay::default()
            },
        );

        for edge in graph.edges() {
            if !edge.leaves(current) {
                continue;
            }
            let Some(neighbor) = edge.other(current) else {
                continue;
            };
            let candidate = d + edge.weight;
            if dist.get(&neighbor).is_none_or(|&old| candidate < old) {
                dist.insert(neighbor, candidate);
                rec.push(
                    StepKind::Relax,
                    format!(
                        "Relax edge {}-{}: distance to {} improves to {}",
                        graph.label(current),
                        graph.label(neighbor),
                        graph.label(neighbor),
                        candidate
                    ),
                    Overlay {
                        nodes: vec![neighbor],
                        edge: Some(edge.id),
                        visited: visited.clone(),
                        distances: distance_table(graph, &dist),
                        ..Overlay::default()
                    },
                );
            }
        }
    }

    rec.push(
        StepKind::Complete,
        format!("Dijkstra complete: settled {} node(s)", visited.len()),
        Overlay {
            visited: visited.clone(),
            distances: distance_table(graph, &dist),
            ..Overlay::default()
        },
    );
    rec.finish()
}

/// Prim's minimum spanning tree from the first node in iteration order.
///
/// Each round linearly scans for the minimum-weight edge crossing the
/// visited/unvisited cut.  A disconnected graph yields a partial MST, not an
/// error.
pub fn prim(graph: &Graph) -> StepSequence {
    let mut rec = StepRecorder::new();
    let Some(start) = graph.nodes().first().map(|n| n.id) else {
        rec.push_plain(StepKind::Complete, "The graph has no nodes");
        return rec.finish();
    };

    let mut in_tree: FxHashSet<NodeId> = FxHashSet::default();
    let mut visited: Vec<NodeId> = vec![start];
    let mut mst: Vec<EdgeId> = Vec::new();
    let mut total: i64 = 0;
    in_tree.insert(start);

    rec.push(
        StepKind::Visit,
        format!("Start the tree at {}", graph.label(start)),
        Overlay {
            nodes: vec![start],
            visited: visited.clone(),
            ..Overlay::default()
        },
    );

    let mut connected = true;
    while visited.len() < graph.node_count() {
        let mut best: Option<(EdgeId, NodeId, i64)> = None;
        for edge in graph.edges() {
            let from_in = in_tree.contains(&edge.from);
            let to_in = in_tree.contains(&edge.to);
            if from_in == to_in {
                continue;
            }
            let outside = if from_in { edge.to } else { edge.from };
            if best.is_none_or(|(_, _, w)| edge.weight < w) {
                best = Some((edge.id, outside, edge.weight));
            }
        }
        let Some((edge, node, weight)) = best else {
            connected = false;
            break;
        };
        mst.push(edge);
        total += weight;
        in_tree.insert(node);
        visited.push(node);
        rec.push(
            StepKind::Select,
            format!(
                "Select the cheapest crossing edge (weight {}) and add {} to the tree",
                weight,
                graph.label(node)
            ),
            Overlay {
                nodes: vec![node],
                edge: Some(edge),
                visited: visited.clone(),
                mst_edges: mst.clone(),
                ..Overlay::default()
            },
        );
    }

    let summary = if connected {
        format!("MST complete: {} edge(s), total weight {}", mst.len(), total)
    } else {
        format!(
            "No crossing edge remains: partial MST with {} edge(s), total weight {}",
            mst.len(),
            total
        )
    };
    rec.push(
        StepKind::Complete,
        summary,
        Overlay {
            visited: visited.clone(),
            mst_edges: mst.clone(),
            ..Overlay::default()
        },
    );
    rec.finish()
}

/// Borůvka's minimum spanning tree.
///
/// Every node starts as its own component; each round picks, per component,
/// the cheapest edge leaving it (first encountered wins ties), adds the
/// deduplicated picks that still connect distinct components, and merges.
/// Stops when one component remains or a round adds nothing.
pub fn boruvka(graph: &Graph) -> StepSequence {
    let mut rec = StepRecorder::new();
    if graph.node_count() == 0 {
        rec.push_plain(StepKind::Complete, "The graph has no nodes");
        return rec.finish();
    }

    let mut comp: FxHashMap<NodeId, usize> = graph
        .nodes()
        .iter()
        .enumerate()
        .map(|(i, n)| (n.id, i))
        .collect();
    let mut components = graph.node_count();
    let mut mst: Vec<EdgeId> = Vec::new();
    let mut total: i64 = 0;
    let mut round = 0;

    while components > 1 {
        round += 1;
        // Cheapest edge leaving each component, first encountered wins ties
        let mut cheapest: FxHashMap<usize, EdgeId> = FxHashMap::default();
        for edge in graph.edges() {
            let ca = comp[&edge.from];
            let cb = comp[&edge.to];
            if ca == cb {
                continue;
            }
            for c in [ca, cb] {
                let better = match cheapest.get(&c) {
                    Some(&held) => {
                        let held_weight = graph
                            .edges()
                            .iter()
                            .find(|e| e.id == held)
                            .map(|e| e.weight)
                            .unwrap_or(i64::MAX);
                        edge.weight < held_weight
                    }
                    None => true,
                };
                if better {
                    cheapest.insert(c, edge.id);
                }
            }
        }
        if cheapest.is_empty() {
            break;
        }
        rec.push(
            StepKind::Select,
            format!(
                "Round {}: pick the cheapest edge out of each of the {} component(s)",
                round, components
            ),
            Overlay {
                mst_edges: mst.clone(),
                ..Overlay::default()
            },
        );

        // Deduplicate picks by edge id, in node iteration order
        let mut picks: Vec<EdgeId> = Vec::new();
        for node in graph.nodes() {
            if let Some(&edge) = cheapest.get(&comp[&node.id]) {
                if !picks.contains(&edge) {
                    picks.push(edge);
                }
            }
        }

        let mut merged_any = false;
        for pick in picks {
            let Some(edge) = graph.edges().iter().find(|e| e.id == pick) else {
                continue;
            };
            let ca = comp[&edge.from];
            let cb = comp[&edge.to];
            if ca == cb {
                // an earlier merge this round already joined these components
                continue;
            }
            for c in comp.values_mut() {
                if *c == cb {
                    *c = ca;
                }
            }
            components -= 1;
            merged_any = true;
            mst.push(edge.id);
            total += edge.weight;
            rec.push(
                StepKind::Merge,
                format!(
                    "Merge the components of {} and {} via their cheapest edge (weight {})",
                    graph.label(edge.from),
                    graph.label(edge.to),
                    edge.weight
                ),
                Overlay {
                    nodes: vec![edge.from, edge.to],
                    edge: Some(edge.id),
                    mst_edges: mst.clone(),
                    ..Overlay::default()
                },
            );
        }
        if !merged_any {
            break;
        }
    }

    let summary = if components == 1 {
        format!("MST complete: {} edge(s), total weight {}", mst.len(), total)
    } else {
        format!(
            "Graph is disconnected: partial forest with {} edge(s), total weight {}",
            mst.len(),
            total
        )
    };
    rec.push(
        StepKind::Complete,
        summary,
        Overlay {
            mst_edges: mst.clone(),
            ..Overlay::default()
        },
    );
    rec.finish()
}

/// Floyd–Warshall all-pairs shortest paths.
///
/// Builds the n x n matrix (0 on the diagonal, edge weight where present,
/// infinity otherwise, symmetric fill when undirected), then runs the
/// standard triple loop, recording a full-matrix snapshot on every strict
/// improvement.
pub fn floyd_warshall(graph: &Graph) -> StepSequence {
    let mut rec = StepRecorder::new();
    let n = graph.node_count();
    if n == 0 {
        rec.push_plain(StepKind::Complete, "The graph has no nodes");
        return rec.finish();
    }

    let index: FxHashMap<NodeId, usize> = graph
        .nodes()
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id, i))
        .collect();
    let mut matrix: Vec<Vec<Option<i64>>> = vec![vec![None; n]; n];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    for edge in graph.edges() {
        let i = index[&edge.from];
        let j = index[&edge.to];
        if matrix[i][j].is_none_or(|w| edge.weight < w) {
            matrix[i][j] = Some(edge.weight);
        }
        if !edge.directed && matrix[j][i].is_none_or(|w| edge.weight < w) {
            matrix[j][i] = Some(edge.weight);
        }
    }
    rec.push(
        StepKind::Update,
        format!("Initialize the {}x{} distance matrix from the edges", n, n),
        Overlay {
            matrix: Some(matrix.clone()),
            ..Overlay::default()
        },
    );

    let ids: Vec<NodeId> = graph.nodes().iter().map(|node| node.id).collect();
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let (Some(ik), Some(kj)) = (matrix[i][k], matrix[k][j]) else {
                    continue;
                };
                let via = ik + kj;
                if matrix[i][j].is_none_or(|d| via < d) {
                    matrix[i][j] = Some(via);
                    rec.push(
                        StepKind::Relax,
                        format!(
                            "Distance {} to {} improves to {} through {}",
                            graph.label(ids[i]),
                            graph.label(ids[j]),
                            via,
                            graph.label(ids[k])
                        ),
                        Overlay {
                            nodes: vec![ids[i], ids[j], ids[k]],
                            matrix: Some(matrix.clone()),
                            ..Overlay::default()
                        },
                    );
                }
            }
        }
    }

    rec.push(
        StepKind::Complete,
        "All-pairs shortest paths complete".to_string(),
        Overlay {
            matrix: Some(matrix),
            ..Overlay::default()
        },
    );
    rec.finish()
}
