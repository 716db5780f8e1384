//! Stateless render functions for the visualizer panes

use crate::playback::PlaybackController;
use crate::session::{StructureKind, VisualizerSession};
use crate::step::{NodeId, Overlay};
use crate::store::bst::Bst;
use crate::store::trie::Trie;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            DEFAULT_THEME.border_focused
        } else {
            DEFAULT_THEME.border_normal
        }))
}

/// Style for one node id under the current step's overlay
fn node_style(id: NodeId, overlay: Option<&Overlay>) -> Style {
    let Some(overlay) = overlay else {
        return Style::default().fg(DEFAULT_THEME.fg);
    };
    if overlay.nodes.contains(&id) {
        Style::default()
            .fg(DEFAULT_THEME.highlight)
            .add_modifier(Modifier::BOLD)
    } else if overlay.swap.is_some_and(|(a, b)| a == id || b == id) {
        Style::default()
            .fg(DEFAULT_THEME.secondary)
            .add_modifier(Modifier::BOLD)
    } else if overlay.visited.contains(&id) {
        Style::default().fg(DEFAULT_THEME.visited)
    } else if overlay.frontier.contains(&id) {
        Style::default().fg(DEFAULT_THEME.frontier)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

/// Render the live structure with the current step's overlay highlights
pub fn render_structure_pane(frame: &mut Frame, area: Rect, session: &VisualizerSession) {
    let overlay = session.playback().current_step().map(|s| &s.overlay);
    let lines = match session.kind() {
        StructureKind::Graph => graph_lines(session, overlay),
        StructureKind::Heap => heap_lines(session, overlay),
        StructureKind::Trie => trie_lines(session, overlay),
        StructureKind::HashSet | StructureKind::HashTable => hash_lines(session, overlay),
        StructureKind::Bst => bst_lines(session, overlay),
        StructureKind::LinkedList => list_lines(session, overlay),
        StructureKind::Stack => stack_lines(session, overlay),
        StructureKind::Queue => queue_lines(session, overlay),
    };
    let paragraph = Paragraph::new(lines).block(pane_block(session.kind().label(), false));
    frame.render_widget(paragraph, area);
}

fn graph_lines<'a>(session: &VisualizerSession, overlay: Option<&Overlay>) -> Vec<Line<'a>> {
    let Some(graph) = session.graph() else {
        return Vec::new();
    };
    let mut lines = vec![Line::from(Span::styled(
        format!(
            "{} graph, {} node(s), {} edge(s)",
            if graph.directed() {
                "directed"
            } else {
                "undirected"
            },
            graph.node_count(),
            graph.edges().len()
        ),
        Style::default().fg(DEFAULT_THEME.comment),
    ))];
    let mut node_spans = vec![Span::styled(
        "Nodes: ",
        Style::default().fg(DEFAULT_THEME.comment),
    )];
    for node in graph.nodes() {
        node_spans.push(Span::styled(
            format!("{} ", node.label),
            node_style(node.id, overlay),
        ));
    }
    lines.push(Line::from(node_spans));
    lines.push(Line::from(Span::styled(
        "Edges:",
        Style::default().fg(DEFAULT_THEME.comment),
    )));
    for edge in graph.edges() {
        let on_path = overlay.is_some_and(|ov| {
            ov.edge == Some(edge.id) || ov.mst_edges.contains(&edge.id)
        });
        let style = if on_path {
            Style::default()
                .fg(DEFAULT_THEME.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        let arrow = if edge.directed { ">" } else { "" };
        lines.push(Line::from(Span::styled(
            format!(
                "  {} -({})-{} {}",
                graph.label(edge.from),
                edge.weight,
                arrow,
                graph.label(edge.to)
            ),
            style,
        )));
    }
    lines
}

fn heap_lines<'a>(session: &VisualizerSession, overlay: Option<&Overlay>) -> Vec<Line<'a>> {
    let Some(heap) = session.heap() else {
        return Vec::new();
    };
    let mut lines = vec![Line::from(Span::styled(
        format!(
            "{} with {} element(s), array layout:",
            if heap.is_min() { "min-heap" } else { "max-heap" },
            heap.len()
        ),
        Style::default().fg(DEFAULT_THEME.comment),
    ))];
    let mut array = vec![Span::styled("  ", Style::default())];
    for (i, node) in heap.items().iter().enumerate() {
        array.push(Span::styled(
            format!("[{}]{} ", i, node.value),
            node_style(node.id, overlay),
        ));
    }
    lines.push(Line::from(array));
    // One line per tree level
    let mut level = 0;
    let mut start = 0;
    while start < heap.len() {
        let width = 1 << level;
        let mut spans = vec![Span::styled(
            format!("  L{}: ", level),
            Style::default().fg(DEFAULT_THEME.comment),
        )];
        for node in heap.items().iter().skip(start).take(width) {
            spans.push(Span::styled(
                format!("{} ", node.value),
                node_style(node.id, overlay),
            ));
        }
        lines.push(Line::from(spans));
        start += width;
        level += 1;
    }
    lines
}

fn trie_subtree(
    trie: &Trie,
    id: NodeId,
    depth: usize,
    overlay: Option<&Overlay>,
    lines: &mut Vec<Line<'static>>,
) {
    let Some(node) = trie.node(id) else { return };
    if let Some(ch) = node.ch {
        let marker = if node.is_end_of_word { "*" } else { "" };
        lines.push(Line::from(Span::styled(
            format!("{}{}{}", "  ".repeat(depth), ch, marker),
            node_style(id, overlay),
        )));
    }
    // FxHashMap iteration order is arbitrary; sort for a stable display
    let mut children: Vec<(char, NodeId)> = node.children.iter().map(|(&c, &n)| (c, n)).collect();
    children.sort_by_key(|(c, _)| *c);
    for (_, child) in children {
        trie_subtree(trie, child, depth + 1, overlay, lines);
    }
}

fn trie_lines<'a>(session: &VisualizerSession, overlay: Option<&Overlay>) -> Vec<Line<'a>> {
    let Some(trie) = session.trie() else {
        return Vec::new();
    };
    let mut lines = vec![Line::from(Span::styled(
        format!("{} node(s), * marks a complete word", trie.node_count() - 1),
        Style::default().fg(DEFAULT_THEME.comment),
    ))];
    trie_subtree(trie, trie.root(), 0, overlay, &mut lines);
    lines
}

fn hash_lines<'a>(session: &VisualizerSession, overlay: Option<&Overlay>) -> Vec<Line<'a>> {
    let Some(store) = session.hash() else {
        return Vec::new();
    };
    let mut lines = Vec::new();
    for (i, chain) in store.buckets().iter().enumerate() {
        let bucket_hot = overlay.is_some_and(|ov| ov.indices.contains(&i));
        let mut spans = vec![Span::styled(
            format!("[{}] ", i),
            Style::default().fg(if bucket_hot {
                DEFAULT_THEME.secondary
            } else {
                DEFAULT_THEME.comment
            }),
        )];
        for (pos, entry) in chain.iter().enumerate() {
            if pos > 0 {
                spans.push(Span::styled(
                    "-> ",
                    Style::default().fg(DEFAULT_THEME.comment),
                ));
            }
            let text = match &entry.value {
                Some(v) => format!("{}:{} ", entry.key, v),
                None => format!("{} ", entry.key),
            };
            spans.push(Span::styled(text, node_style(entry.id, overlay)));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn bst_subtree(
    bst: &Bst,
    id: Option<NodeId>,
    depth: usize,
    overlay: Option<&Overlay>,
    lines: &mut Vec<Line<'static>>,
) {
    let Some(id) = id else { return };
    let Some(node) = bst.node(id) else { return };
    // Sideways tree: right subtree above, left below
    bst_subtree(bst, node.right, depth + 1, overlay, lines);
    lines.push(Line::from(Span::styled(
        format!("{}{}", "    ".repeat(depth), node.value),
        node_style(id, overlay),
    )));
    bst_subtree(bst, node.left, depth + 1, overlay, lines);
}

fn bst_lines<'a>(session: &VisualizerSession, overlay: Option<&Overlay>) -> Vec<Line<'a>> {
    let Some(bst) = session.bst() else {
        return Vec::new();
    };
    let mut lines = vec![Line::from(Span::styled(
        format!("{} node(s), root on the left", bst.len()),
        Style::default().fg(DEFAULT_THEME.comment),
    ))];
    bst_subtree(bst, bst.root(), 0, overlay, &mut lines);
    lines
}

fn list_lines<'a>(session: &VisualizerSession, overlay: Option<&Overlay>) -> Vec<Line<'a>> {
    let Some(list) = session.list() else {
        return Vec::new();
    };
    let mut spans = vec![Span::styled(
        "head -> ",
        Style::default().fg(DEFAULT_THEME.comment),
    )];
    for id in list.iter_ids() {
        let value = list.node(id).map(|n| n.value).unwrap_or_default();
        spans.push(Span::styled(format!("{}", value), node_style(id, overlay)));
        spans.push(Span::styled(
            " -> ",
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }
    spans.push(Span::styled(
        "None",
        Style::default().fg(DEFAULT_THEME.comment),
    ));
    vec![Line::from(spans)]
}

fn stack_lines<'a>(session: &VisualizerSession, overlay: Option<&Overlay>) -> Vec<Line<'a>> {
    let Some(stack) = session.stack() else {
        return Vec::new();
    };
    let mut lines = vec![Line::from(Span::styled(
        "top",
        Style::default().fg(DEFAULT_THEME.comment),
    ))];
    for node in stack.items().iter().rev() {
        lines.push(Line::from(Span::styled(
            format!("  | {} |", node.value),
            node_style(node.id, overlay),
        )));
    }
    lines.push(Line::from(Span::styled(
        "  +---+",
        Style::default().fg(DEFAULT_THEME.comment),
    )));
    lines
}

fn queue_lines<'a>(session: &VisualizerSession, overlay: Option<&Overlay>) -> Vec<Line<'a>> {
    let Some(queue) = session.queue() else {
        return Vec::new();
    };
    let mut spans = vec![Span::styled(
        "front -> ",
        Style::default().fg(DEFAULT_THEME.comment),
    )];
    for node in queue.items() {
        spans.push(Span::styled(
            format!("{} ", node.value),
            node_style(node.id, overlay),
        ));
    }
    spans.push(Span::styled(
        "<- rear",
        Style::default().fg(DEFAULT_THEME.comment),
    ));
    vec![Line::from(spans)]
}

/// Render the recorded narration list, current step marked and kept in view
pub fn render_steps_pane(frame: &mut Frame, area: Rect, playback: &PlaybackController) {
    let height = area.height.saturating_sub(2) as usize;
    let cursor = playback.position();
    let offset = match cursor {
        Some(i) if i + 1 > height => i + 1 - height,
        _ => 0,
    };
    let mut lines = Vec::new();
    for (i, step) in playback.steps().iter().enumerate().skip(offset) {
        let current = cursor == Some(i);
        let style = if current {
            Style::default()
                .fg(DEFAULT_THEME.highlight)
                .bg(DEFAULT_THEME.current_line_bg)
                .add_modifier(Modifier::BOLD)
        } else if cursor.is_some_and(|c| i < c) {
            Style::default().fg(DEFAULT_THEME.fg)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };
        let marker = if current { ">" } else { " " };
        lines.push(Line::from(Span::styled(
            format!("{} {:>3}. [{}] {}", marker, i + 1, step.kind, step.description),
            style,
        )));
    }
    let title = format!("steps ({})", playback.len());
    let paragraph = Paragraph::new(lines).block(pane_block(&title, playback.is_playing()));
    frame.render_widget(paragraph, area);
}

/// Render the current step's overlay state (frontier, visited, tables)
pub fn render_state_pane(frame: &mut Frame, area: Rect, session: &VisualizerSession) {
    let mut lines = Vec::new();
    match session.playback().current_step() {
        None => lines.push(Line::from(Span::styled(
            "No step active: structure shown in its final state",
            Style::default().fg(DEFAULT_THEME.comment),
        ))),
        Some(step) => {
            let ov = &step.overlay;
            if !ov.frontier.is_empty() {
                lines.push(kv_line("frontier", ids_text(session, &ov.frontier)));
            }
            if !ov.visited.is_empty() {
                lines.push(kv_line("visited", ids_text(session, &ov.visited)));
            }
            if !ov.distances.is_empty() {
                let text = ov
                    .distances
                    .iter()
                    .map(|(id, d)| {
                        let name = id_text(session, *id);
                        match d {
                            Some(d) => format!("{}={}", name, d),
                            None => format!("{}=inf", name),
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("  ");
                lines.push(kv_line("distances", text));
            }
            if let Some(matrix) = &ov.matrix {
                lines.push(Line::from(Span::styled(
                    "matrix:",
                    Style::default().fg(DEFAULT_THEME.comment),
                )));
                for row in matrix {
                    let text = row
                        .iter()
                        .map(|c| match c {
                            Some(d) => format!("{:>4}", d),
                            None => format!("{:>4}", "."),
                        })
                        .collect::<String>();
                    lines.push(Line::from(Span::styled(
                        format!("  {}", text),
                        Style::default().fg(DEFAULT_THEME.fg),
                    )));
                }
            }
            if !ov.mst_edges.is_empty() {
                lines.push(kv_line("tree edges", format!("{}", ov.mst_edges.len())));
            }
            if let Some((a, b)) = ov.swap {
                lines.push(kv_line(
                    "swap",
                    format!("{} <-> {}", id_text(session, a), id_text(session, b)),
                ));
            }
            if !ov.indices.is_empty() {
                let text = ov
                    .indices
                    .iter()
                    .map(|i| i.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                lines.push(kv_line("indices", text));
            }
        }
    }
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(pane_block("step state", false));
    frame.render_widget(paragraph, area);
}

fn kv_line(key: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}: ", key),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

/// Human text for one node id, resolved against the session's store
fn id_text(session: &VisualizerSession, id: NodeId) -> String {
    if let Some(graph) = session.graph() {
        return graph.label(id);
    }
    if let Some(heap) = session.heap() {
        if let Some(node) = heap.items().iter().find(|n| n.id == id) {
            return node.value.to_string();
        }
    }
    if let Some(bst) = session.bst() {
        if let Some(node) = bst.node(id) {
            return node.value.to_string();
        }
    }
    if let Some(list) = session.list() {
        if let Some(node) = list.node(id) {
            return node.value.to_string();
        }
    }
    if let Some(trie) = session.trie() {
        if let Some(node) = trie.node(id) {
            return node.ch.map(String::from).unwrap_or_else(|| "root".into());
        }
    }
    if let Some(hash) = session.hash() {
        for chain in hash.buckets() {
            if let Some(entry) = chain.iter().find(|e| e.id == id) {
                return entry.key.to_string();
            }
        }
    }
    if let Some(stack) = session.stack() {
        if let Some(node) = stack.items().iter().find(|n| n.id == id) {
            return node.value.to_string();
        }
    }
    if let Some(queue) = session.queue() {
        if let Some(node) = queue.items().iter().find(|n| n.id == id) {
            return node.value.to_string();
        }
    }
    format!("#{}", id)
}

fn ids_text(session: &VisualizerSession, ids: &[NodeId]) -> String {
    ids.iter()
        .map(|&id| id_text(session, id))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render the command prompt
pub fn render_prompt_pane(frame: &mut Frame, area: Rect, input: &str, help: &str) {
    let lines = vec![
        Line::from(vec![
            Span::styled("> ", Style::default().fg(DEFAULT_THEME.primary)),
            Span::styled(input.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled("_", Style::default().fg(DEFAULT_THEME.comment)),
        ]),
        Line::from(Span::styled(
            help.to_string(),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ];
    let paragraph = Paragraph::new(lines).block(pane_block("command", true));
    frame.render_widget(paragraph, area);
}

/// Render the status bar at the bottom
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    is_error: bool,
    playback: &PlaybackController,
) {
    let layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage(55),
            ratatui::layout::Constraint::Percentage(45),
        ])
        .split(area);

    // Left side: step position and status message
    let position = match playback.position() {
        Some(i) => format!(" Step {}/{} ", i + 1, playback.len()),
        None => format!(" Step -/{} ", playback.len()),
    };
    let left_spans = vec![
        Span::styled(
            position,
            Style::default()
                .bg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];
    let left = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left, layout[0]);

    // Right side: keybinds plus a play-state indicator
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);
    let mut right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" [ ] ", key_style),
        Span::styled(format!(" {} ", playback.speed().label()), desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ^C ", key_style),
        Span::styled(" quit ", desc_style),
    ];
    if playback.is_playing() {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " ▶ PLAYING ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if playback.at_end() {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " END ",
            Style::default()
                .bg(DEFAULT_THEME.success)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }
    let right = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right, layout[1]);
}
