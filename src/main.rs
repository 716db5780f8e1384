// algoviz: interactive data structure visualizer with step-by-step playback

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algoviz::session::{Operation, StructureKind, VisualizerSession};
use algoviz::ui::App;

fn usage(program_name: &str) -> ! {
    eprintln!("Error: no structure selected");
    eprintln!();
    eprintln!("Usage: {} <structure>", program_name);
    eprintln!();
    eprintln!("Structures:");
    eprintln!("  list | bst | stack | queue | graph | digraph");
    eprintln!("  trie | hashset | hashtable | heap | max-heap");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  {} graph     # seeded weighted graph, try: bfs A", program_name);
    std::process::exit(1);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("algoviz");

    let Some(name) = args.get(1) else {
        usage(program_name);
    };

    let mut session = match name.to_lowercase().as_str() {
        "max-heap" => VisualizerSession::max_heap(),
        "digraph" | "directed-graph" => VisualizerSession::directed_graph(),
        other => match StructureKind::from_name(other) {
            Some(kind) => VisualizerSession::new(kind),
            None => {
                eprintln!("Error: unknown structure '{}'", other);
                usage(program_name);
            }
        },
    };

    seed(&mut session);
    session.playback_mut().reset();

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Pre-populate the structure so the first algorithm has something to walk
fn seed(session: &mut VisualizerSession) {
    let ops: Vec<Operation> = match session.kind() {
        StructureKind::Graph => {
            let mut ops: Vec<Operation> = ["A", "B", "C", "D", "E"]
                .iter()
                .map(|label| Operation::AddNode {
                    label: label.to_string(),
                })
                .collect();
            for (from, to, weight) in [
                ("A", "B", 4),
                ("A", "C", 1),
                ("C", "B", 1),
                ("B", "D", 5),
                ("C", "D", 8),
                ("D", "E", 2),
            ] {
                ops.push(Operation::AddEdge {
                    from: from.to_string(),
                    to: to.to_string(),
                    weight,
                });
            }
            ops
        }
        StructureKind::Heap => [30, 10, 50, 20, 40]
            .iter()
            .map(|&value| Operation::HeapInsert { value })
            .collect(),
        StructureKind::Trie => ["cat", "car", "card", "dog"]
            .iter()
            .map(|word| Operation::TrieInsert {
                word: word.to_string(),
            })
            .collect(),
        StructureKind::HashSet => [5, 15, 23, 42]
            .iter()
            .map(|&key| Operation::HashPut { key, value: None })
            .collect(),
        StructureKind::HashTable => [(5, "five"), (15, "fifteen"), (23, "twenty-three")]
            .iter()
            .map(|&(key, value)| Operation::HashPut {
                key,
                value: Some(value.to_string()),
            })
            .collect(),
        StructureKind::Bst => [50, 30, 70, 20, 40, 60, 80]
            .iter()
            .map(|&value| Operation::BstInsert { value })
            .collect(),
        StructureKind::LinkedList => [10, 20, 30]
            .iter()
            .map(|&value| Operation::ListInsertTail { value })
            .collect(),
        StructureKind::Stack => [1, 2, 3]
            .iter()
            .map(|&value| Operation::StackPush { value })
            .collect(),
        StructureKind::Queue => [1, 2, 3]
            .iter()
            .map(|&value| Operation::QueueEnqueue { value })
            .collect(),
    };
    for op in ops {
        // Seeding cannot hit the validation paths that produce errors
        let _ = session.apply(op);
    }
}
