//! Command-line grammar for the visualizer prompt
//!
//! Each structure kind accepts a small set of space-separated commands.
//! Parsing is the [`OperationError::InvalidInput`] boundary: a malformed
//! command never reaches the store.

use super::{Operation, StructureKind};
use crate::engine::bst::TraversalOrder;
use crate::engine::errors::OperationError;

fn invalid(message: impl Into<String>) -> OperationError {
    OperationError::InvalidInput {
        message: message.into(),
    }
}

fn parse_number(token: Option<&str>, what: &str) -> Result<i64, OperationError> {
    let token = token.ok_or_else(|| invalid(format!("missing {}", what)))?;
    token
        .parse::<i64>()
        .map_err(|_| invalid(format!("'{}' is not a number", token)))
}

fn parse_index(token: Option<&str>) -> Result<usize, OperationError> {
    let token = token.ok_or_else(|| invalid("missing position"))?;
    token
        .parse::<usize>()
        .map_err(|_| invalid(format!("'{}' is not a valid position", token)))
}

fn parse_word(token: Option<&str>, what: &str) -> Result<String, OperationError> {
    match token {
        Some(t) if !t.is_empty() => Ok(t.to_string()),
        _ => Err(invalid(format!("missing {}", what))),
    }
}

/// Parse one prompt line into an operation for the given structure kind
pub fn parse_command(kind: StructureKind, input: &str) -> Result<Operation, OperationError> {
    let mut tokens = input.split_whitespace();
    let Some(command) = tokens.next() else {
        return Err(invalid("empty command"));
    };
    let command = command.to_lowercase();

    if command == "clear" {
        return Ok(Operation::Clear);
    }

    match kind {
        StructureKind::Graph => match command.as_str() {
            "node" => Ok(Operation::AddNode {
                label: parse_word(tokens.next(), "node label")?,
            }),
            "edge" => Ok(Operation::AddEdge {
                from: parse_word(tokens.next(), "source label")?,
                to: parse_word(tokens.next(), "target label")?,
                weight: parse_number(tokens.next(), "edge weight")?,
            }),
            "remove" => Ok(Operation::RemoveNode {
                label: parse_word(tokens.next(), "node label")?,
            }),
            "bfs" => Ok(Operation::Bfs {
                start: parse_word(tokens.next(), "start node")?,
            }),
            "dfs" => Ok(Operation::Dfs {
                start: parse_word(tokens.next(), "start node")?,
            }),
            "dijkstra" => Ok(Operation::Dijkstra {
                start: parse_word(tokens.next(), "start node")?,
            }),
            "prim" => Ok(Operation::Prim),
            "boruvka" => Ok(Operation::Boruvka),
            "floyd" => Ok(Operation::FloydWarshall),
            _ => Err(invalid(format!("unknown graph command '{}'", command))),
        },
        StructureKind::Heap => match command.as_str() {
            "insert" => Ok(Operation::HeapInsert {
                value: parse_number(tokens.next(), "value")?,
            }),
            "extract" => Ok(Operation::HeapExtract),
            "peek" => Ok(Operation::HeapPeek),
            _ => Err(invalid(format!("unknown heap command '{}'", command))),
        },
        StructureKind::Trie => match command.as_str() {
            "insert" => Ok(Operation::TrieInsert {
                word: parse_word(tokens.next(), "word")?,
            }),
            "search" => Ok(Operation::TrieSearch {
                word: parse_word(tokens.next(), "word")?,
            }),
            "prefix" => Ok(Operation::TrieStartsWith {
                prefix: parse_word(tokens.next(), "prefix")?,
            }),
            "remove" => Ok(Operation::TrieRemove {
                word: parse_word(tokens.next(), "word")?,
            }),
            _ => Err(invalid(format!("unknown trie command '{}'", command))),
        },
        StructureKind::HashSet => match command.as_str() {
            "add" => Ok(Operation::HashPut {
                key: parse_number(tokens.next(), "key")?,
                value: None,
            }),
            "contains" => Ok(Operation::HashGet {
                key: parse_number(tokens.next(), "key")?,
            }),
            "remove" => Ok(Operation::HashRemove {
                key: parse_number(tokens.next(), "key")?,
            }),
            _ => Err(invalid(format!("unknown hash set command '{}'", command))),
        },
        StructureKind::HashTable => match command.as_str() {
            "put" => Ok(Operation::HashPut {
                key: parse_number(tokens.next(), "key")?,
                value: Some(parse_word(tokens.next(), "value")?),
            }),
            "get" => Ok(Operation::HashGet {
                key: parse_number(tokens.next(), "key")?,
            }),
            "remove" => Ok(Operation::HashRemove {
                key: parse_number(tokens.next(), "key")?,
            }),
            _ => Err(invalid(format!("unknown hash table command '{}'", command))),
        },
        StructureKind::Bst => match command.as_str() {
            "insert" => Ok(Operation::BstInsert {
                value: parse_number(tokens.next(), "value")?,
            }),
            "search" => Ok(Operation::BstSearch {
                value: parse_number(tokens.next(), "value")?,
            }),
            "delete" => Ok(Operation::BstRemove {
                value: parse_number(tokens.next(), "value")?,
            }),
            "inorder" => Ok(Operation::BstTraverse(TraversalOrder::InOrder)),
            "preorder" => Ok(Operation::BstTraverse(TraversalOrder::PreOrder)),
            "postorder" => Ok(Operation::BstTraverse(TraversalOrder::PostOrder)),
            "levelorder" => Ok(Operation::BstTraverse(TraversalOrder::LevelOrder)),
            _ => Err(invalid(format!("unknown BST command '{}'", command))),
        },
        StructureKind::LinkedList => match command.as_str() {
            "head" => Ok(Operation::ListInsertHead {
                value: parse_number(tokens.next(), "value")?,
            }),
            "tail" => Ok(Operation::ListInsertTail {
                value: parse_number(tokens.next(), "value")?,
            }),
            "at" => Ok(Operation::ListInsertAt {
                value: parse_number(tokens.next(), "value")?,
                index: parse_index(tokens.next())?,
            }),
            "delete" => Ok(Operation::ListRemove {
                value: parse_number(tokens.next(), "value")?,
            }),
            "search" => Ok(Operation::ListSearch {
                value: parse_number(tokens.next(), "value")?,
            }),
            "traverse" => Ok(Operation::ListTraverse),
            _ => Err(invalid(format!("unknown list command '{}'", command))),
        },
        StructureKind::Stack => match command.as_str() {
            "push" => Ok(Operation::StackPush {
                value: parse_number(tokens.next(), "value")?,
            }),
            "pop" => Ok(Operation::StackPop),
            "peek" => Ok(Operation::StackPeek),
            _ => Err(invalid(format!("unknown stack command '{}'", command))),
        },
        StructureKind::Queue => match command.as_str() {
            "enqueue" => Ok(Operation::QueueEnqueue {
                value: parse_number(tokens.next(), "value")?,
            }),
            "dequeue" => Ok(Operation::QueueDequeue),
            "peek" => Ok(Operation::QueuePeek),
            _ => Err(invalid(format!("unknown queue command '{}'", command))),
        },
    }
}

/// One-line command summary shown in the prompt pane
pub fn help_line(kind: StructureKind) -> &'static str {
    match kind {
        StructureKind::Graph => {
            "node <l> | edge <a> <b> <w> | remove <l> | bfs/dfs/dijkstra <l> | prim | boruvka | floyd | clear"
        }
        StructureKind::Heap => "insert <n> | extract | peek | clear",
        StructureKind::Trie => "insert <w> | search <w> | prefix <p> | remove <w> | clear",
        StructureKind::HashSet => "add <k> | contains <k> | remove <k> | clear",
        StructureKind::HashTable => "put <k> <v> | get <k> | remove <k> | clear",
        StructureKind::Bst => {
            "insert <n> | search <n> | delete <n> | inorder | preorder | postorder | levelorder | clear"
        }
        StructureKind::LinkedList => {
            "head <n> | tail <n> | at <n> <i> | delete <n> | search <n> | traverse | clear"
        }
        StructureKind::Stack => "push <n> | pop | peek | clear",
        StructureKind::Queue => "enqueue <n> | dequeue | peek | clear",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_commands_parse_labels_and_weights() {
        let op = parse_command(StructureKind::Graph, "edge A B 4").expect("parse");
        assert_eq!(
            op,
            Operation::AddEdge {
                from: "A".to_string(),
                to: "B".to_string(),
                weight: 4,
            }
        );
        assert_eq!(
            parse_command(StructureKind::Graph, "bfs A").expect("parse"),
            Operation::Bfs {
                start: "A".to_string()
            }
        );
        assert_eq!(
            parse_command(StructureKind::Graph, "prim").expect("parse"),
            Operation::Prim
        );
    }

    #[test]
    fn negative_numbers_parse_where_values_are_expected() {
        assert_eq!(
            parse_command(StructureKind::Heap, "insert -5").expect("parse"),
            Operation::HeapInsert { value: -5 }
        );
        assert_eq!(
            parse_command(StructureKind::Graph, "edge A B -2").expect("parse"),
            Operation::AddEdge {
                from: "A".to_string(),
                to: "B".to_string(),
                weight: -2,
            }
        );
    }

    #[test]
    fn commands_are_case_insensitive() {
        assert_eq!(
            parse_command(StructureKind::Stack, "PUSH 3").expect("parse"),
            Operation::StackPush { value: 3 }
        );
    }

    #[test]
    fn clear_is_accepted_by_every_kind() {
        for kind in [
            StructureKind::LinkedList,
            StructureKind::Bst,
            StructureKind::Stack,
            StructureKind::Queue,
            StructureKind::Graph,
            StructureKind::Trie,
            StructureKind::HashSet,
            StructureKind::HashTable,
            StructureKind::Heap,
        ] {
            assert_eq!(parse_command(kind, "clear").expect("parse"), Operation::Clear);
        }
    }

    #[test]
    fn malformed_input_is_invalid_input() {
        for (kind, input) in [
            (StructureKind::Heap, "insert"),
            (StructureKind::Heap, "insert abc"),
            (StructureKind::Graph, "edge A B"),
            (StructureKind::LinkedList, "at 5"),
            (StructureKind::Bst, "spin"),
            (StructureKind::Trie, ""),
        ] {
            let err = parse_command(kind, input).expect_err(input);
            assert!(matches!(err, OperationError::InvalidInput { .. }));
        }
    }

    #[test]
    fn set_and_table_have_distinct_verbs() {
        assert_eq!(
            parse_command(StructureKind::HashSet, "add 5").expect("parse"),
            Operation::HashPut {
                key: 5,
                value: None
            }
        );
        assert_eq!(
            parse_command(StructureKind::HashTable, "put 5 five").expect("parse"),
            Operation::HashPut {
                key: 5,
                value: Some("five".to_string()),
            }
        );
        assert!(parse_command(StructureKind::HashSet, "put 5 five").is_err());
    }
}
