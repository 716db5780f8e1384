// Integration tests for the structure stores and their narration engines

use algoviz::engine::bst::TraversalOrder;
use algoviz::engine::errors::OperationError;
use algoviz::session::{Operation, StructureDelta, StructureKind, VisualizerSession};
use algoviz::step::StepKind;
use algoviz::store::hash::bucket_index;

fn heap_session(values: &[i64]) -> VisualizerSession {
    let mut session = VisualizerSession::new(StructureKind::Heap);
    for &value in values {
        session
            .apply(Operation::HeapInsert { value })
            .expect("insert");
    }
    session
}

#[test]
fn min_heap_inserts_keep_the_invariant() {
    let session = heap_session(&[10, 20, 15, 30, 40, 50, 100, 25, 45]);
    let heap = session.heap().expect("heap store");
    let items = heap.items();
    assert_eq!(items[0].value, 10);
    for i in 1..items.len() {
        let parent = (i - 1) / 2;
        assert!(
            items[parent].value <= items[i].value,
            "parent {} above child {}",
            items[parent].value,
            items[i].value
        );
    }
}

#[test]
fn min_heap_extracts_in_sorted_order() {
    let mut session = heap_session(&[30, 10, 50, 20, 40]);
    let mut drained = Vec::new();
    for _ in 0..5 {
        let outcome = session.apply(Operation::HeapExtract).expect("extract");
        match outcome.delta {
            StructureDelta::Extracted(value) => drained.push(value),
            other => panic!("unexpected delta {:?}", other),
        }
    }
    assert_eq!(drained, vec![10, 20, 30, 40, 50]);
}

#[test]
fn max_heap_keeps_the_largest_at_the_root() {
    let mut session = VisualizerSession::max_heap();
    for value in [10, 20, 15, 30] {
        session
            .apply(Operation::HeapInsert { value })
            .expect("insert");
    }
    let heap = session.heap().expect("heap store");
    assert!(!heap.is_min());
    assert_eq!(heap.items()[0].value, 30);
}

#[test]
fn heap_insert_narration_replays_the_sift() {
    let mut session = heap_session(&[30, 10]);
    let outcome = session
        .apply(Operation::HeapInsert { value: 5 })
        .expect("insert");
    // 5 sifts past 30 to the root, so at least one swap is narrated
    assert!(outcome.steps.iter().any(|s| s.kind == StepKind::Swap));
    assert_eq!(
        outcome.steps.last().expect("steps").kind,
        StepKind::Complete
    );
}

#[test]
fn empty_heap_extract_is_rejected_without_steps() {
    let mut session = VisualizerSession::new(StructureKind::Heap);
    let err = session.apply(Operation::HeapExtract).expect_err("empty");
    assert!(matches!(err, OperationError::EmptyStructure { .. }));
    assert_eq!(session.playback().len(), 0);
}

#[test]
fn trie_distinguishes_prefix_from_complete_word() {
    let mut session = VisualizerSession::new(StructureKind::Trie);
    for word in ["cat", "car"] {
        session
            .apply(Operation::TrieInsert {
                word: word.to_string(),
            })
            .expect("insert");
    }
    let trie = session.trie().expect("trie store");
    assert!(trie.contains("cat"));
    assert!(!trie.contains("ca"));
    assert!(trie.starts_with("ca"));

    let outcome = session
        .apply(Operation::TrieSearch {
            word: "ca".to_string(),
        })
        .expect("search");
    let last = outcome.steps.last().expect("steps");
    assert_eq!(last.kind, StepKind::NotFound);
    assert!(last.description.contains("not a complete word"));
}

#[test]
fn trie_insert_shares_prefix_nodes_and_folds_case() {
    let mut session = VisualizerSession::new(StructureKind::Trie);
    session
        .apply(Operation::TrieInsert {
            word: "Cat".to_string(),
        })
        .expect("insert");
    session
        .apply(Operation::TrieInsert {
            word: "car".to_string(),
        })
        .expect("insert");
    let trie = session.trie().expect("trie store");
    // root + c, a, t + r
    assert_eq!(trie.node_count(), 5);
    assert!(trie.contains("CAT"));
}

#[test]
fn trie_remove_unmarks_without_deleting_nodes() {
    let mut session = VisualizerSession::new(StructureKind::Trie);
    for word in ["cat", "car"] {
        session
            .apply(Operation::TrieInsert {
                word: word.to_string(),
            })
            .expect("insert");
    }
    let before = session.trie().expect("trie").node_count();
    session
        .apply(Operation::TrieRemove {
            word: "cat".to_string(),
        })
        .expect("remove");
    let trie = session.trie().expect("trie store");
    assert!(!trie.contains("cat"));
    assert!(trie.contains("car"));
    assert_eq!(trie.node_count(), before);

    let outcome = session
        .apply(Operation::TrieRemove {
            word: "dog".to_string(),
        })
        .expect("remove miss");
    assert_eq!(outcome.delta, StructureDelta::Missed);
}

#[test]
fn empty_trie_words_are_rejected_before_the_store_is_touched() {
    let mut session = VisualizerSession::new(StructureKind::Trie);
    let err = session
        .apply(Operation::TrieInsert {
            word: String::new(),
        })
        .expect_err("empty word");
    assert!(matches!(err, OperationError::InvalidInput { .. }));
    // The synthetic root must not become a complete word
    let trie = session.trie().expect("trie store");
    assert!(!trie.contains(""));
    assert_eq!(trie.node_count(), 1);
    assert_eq!(session.playback().len(), 0);

    for op in [
        Operation::TrieSearch {
            word: String::new(),
        },
        Operation::TrieStartsWith {
            prefix: String::new(),
        },
        Operation::TrieRemove {
            word: String::new(),
        },
    ] {
        let err = session.apply(op).expect_err("empty input");
        assert!(matches!(err, OperationError::InvalidInput { .. }));
    }
}

#[test]
fn hash_keys_with_the_same_residue_chain_in_one_bucket() {
    assert_eq!(bucket_index(5), 5);
    assert_eq!(bucket_index(15), 5);
    assert_eq!(bucket_index(-3), 3);

    let mut session = VisualizerSession::new(StructureKind::HashSet);
    session
        .apply(Operation::HashPut {
            key: 5,
            value: None,
        })
        .expect("put");
    let outcome = session
        .apply(Operation::HashPut {
            key: 15,
            value: None,
        })
        .expect("put");
    // The second key lands in an occupied bucket
    assert!(outcome.steps.iter().any(|s| s.kind == StepKind::Collision));

    let store = session.hash().expect("hash store");
    assert_eq!(store.chain(5).len(), 2);
    assert_eq!(store.get(15).map(|e| e.key), Some(15));
}

#[test]
fn hash_table_put_updates_the_existing_key() {
    let mut session = VisualizerSession::new(StructureKind::HashTable);
    session
        .apply(Operation::HashPut {
            key: 7,
            value: Some("old".to_string()),
        })
        .expect("put");
    session
        .apply(Operation::HashPut {
            key: 7,
            value: Some("new".to_string()),
        })
        .expect("put");
    let store = session.hash().expect("hash store");
    assert_eq!(store.chain(7).len(), 1);
    assert_eq!(
        store.get(7).and_then(|e| e.value.clone()),
        Some("new".to_string())
    );
}

#[test]
fn hash_get_narrates_a_miss_after_probing_the_chain() {
    let mut session = VisualizerSession::new(StructureKind::HashSet);
    session
        .apply(Operation::HashPut {
            key: 5,
            value: None,
        })
        .expect("put");
    let outcome = session
        .apply(Operation::HashGet { key: 25 })
        .expect("get");
    assert_eq!(
        outcome.steps.last().expect("steps").kind,
        StepKind::NotFound
    );
    // The probe walks the occupied bucket before giving up
    assert!(outcome.steps.iter().any(|s| s.kind == StepKind::Compare));
}

fn bst_session(values: &[i64]) -> VisualizerSession {
    let mut session = VisualizerSession::new(StructureKind::Bst);
    for &value in values {
        session
            .apply(Operation::BstInsert { value })
            .expect("insert");
    }
    session
}

fn traversal_values(session: &mut VisualizerSession, order: TraversalOrder) -> Vec<i64> {
    let outcome = session
        .apply(Operation::BstTraverse(order))
        .expect("traverse");
    let bst = session.bst().expect("bst store");
    outcome
        .steps
        .iter()
        .filter(|s| s.kind == StepKind::Visit)
        .map(|s| bst.node(s.overlay.nodes[0]).expect("node").value)
        .collect()
}

#[test]
fn bst_traversals_emit_the_four_classic_orders() {
    let mut session = bst_session(&[50, 30, 70, 20, 40, 60, 80]);
    assert_eq!(
        traversal_values(&mut session, TraversalOrder::InOrder),
        vec![20, 30, 40, 50, 60, 70, 80]
    );
    assert_eq!(
        traversal_values(&mut session, TraversalOrder::PreOrder),
        vec![50, 30, 20, 40, 70, 60, 80]
    );
    assert_eq!(
        traversal_values(&mut session, TraversalOrder::PostOrder),
        vec![20, 40, 30, 60, 80, 70, 50]
    );
    assert_eq!(
        traversal_values(&mut session, TraversalOrder::LevelOrder),
        vec![50, 30, 70, 20, 40, 60, 80]
    );
}

#[test]
fn bst_remove_with_two_children_relinks_the_successor() {
    let mut session = bst_session(&[50, 30, 70, 20, 40, 60, 80]);
    let outcome = session
        .apply(Operation::BstRemove { value: 30 })
        .expect("remove");
    assert!(matches!(outcome.delta, StructureDelta::NodeRemoved(_)));
    let bst = session.bst().expect("bst store");
    assert!(bst.find(30).is_none());
    assert_eq!(bst.len(), 6);
    // In-order walk stays sorted after the surgery
    assert_eq!(
        traversal_values(&mut session, TraversalOrder::InOrder),
        vec![20, 40, 50, 60, 70, 80]
    );
}

#[test]
fn bst_remove_of_an_absent_value_is_a_narrated_miss() {
    let mut session = bst_session(&[50, 30]);
    let outcome = session
        .apply(Operation::BstRemove { value: 99 })
        .expect("remove");
    assert_eq!(outcome.delta, StructureDelta::Missed);
    assert!(outcome
        .steps
        .iter()
        .any(|s| s.kind == StepKind::NotFound));
    assert_eq!(session.bst().expect("bst").len(), 2);
}

#[test]
fn bst_duplicates_go_right() {
    let mut session = bst_session(&[50, 50]);
    let bst = session.bst().expect("bst store");
    let root = bst.root().and_then(|id| bst.node(id)).expect("root");
    assert!(root.right.is_some());
    assert!(root.left.is_none());
    assert_eq!(
        traversal_values(&mut session, TraversalOrder::InOrder),
        vec![50, 50]
    );
}

#[test]
fn list_insert_positions_and_clamping() {
    let mut session = VisualizerSession::new(StructureKind::LinkedList);
    session
        .apply(Operation::ListInsertTail { value: 20 })
        .expect("tail");
    session
        .apply(Operation::ListInsertHead { value: 10 })
        .expect("head");
    session
        .apply(Operation::ListInsertAt {
            value: 15,
            index: 1,
        })
        .expect("at");
    // An out-of-range index clamps to the tail
    session
        .apply(Operation::ListInsertAt {
            value: 30,
            index: 99,
        })
        .expect("at clamped");
    let list = session.list().expect("list store");
    let values: Vec<i64> = list
        .iter_ids()
        .into_iter()
        .map(|id| list.node(id).expect("node").value)
        .collect();
    assert_eq!(values, vec![10, 15, 20, 30]);
}

#[test]
fn list_remove_narrates_against_the_pre_state() {
    let mut session = VisualizerSession::new(StructureKind::LinkedList);
    for value in [10, 20, 30] {
        session
            .apply(Operation::ListInsertTail { value })
            .expect("tail");
    }
    let outcome = session
        .apply(Operation::ListRemove { value: 20 })
        .expect("remove");
    assert!(matches!(outcome.delta, StructureDelta::NodeRemoved(_)));
    // The walk narrates the list as it was before unlinking
    assert!(outcome.steps.iter().any(|s| s.kind == StepKind::Remove));
    assert_eq!(session.list().expect("list").len(), 2);

    let outcome = session
        .apply(Operation::ListRemove { value: 99 })
        .expect("remove miss");
    assert_eq!(outcome.delta, StructureDelta::Missed);
    assert_eq!(session.list().expect("list").len(), 2);
}

#[test]
fn stack_is_lifo_and_queue_is_fifo() {
    let mut session = VisualizerSession::new(StructureKind::Stack);
    for value in [1, 2, 3] {
        session
            .apply(Operation::StackPush { value })
            .expect("push");
    }
    let outcome = session.apply(Operation::StackPop).expect("pop");
    assert_eq!(outcome.delta, StructureDelta::Extracted(3));

    let mut session = VisualizerSession::new(StructureKind::Queue);
    for value in [1, 2, 3] {
        session
            .apply(Operation::QueueEnqueue { value })
            .expect("enqueue");
    }
    let outcome = session.apply(Operation::QueueDequeue).expect("dequeue");
    assert_eq!(outcome.delta, StructureDelta::Extracted(1));
}

#[test]
fn peek_on_an_empty_structure_is_rejected() {
    let mut session = VisualizerSession::new(StructureKind::Stack);
    let err = session.apply(Operation::StackPeek).expect_err("empty");
    assert!(matches!(
        err,
        OperationError::EmptyStructure { structure: "stack" }
    ));

    let mut session = VisualizerSession::new(StructureKind::Queue);
    let err = session.apply(Operation::QueueDequeue).expect_err("empty");
    assert!(matches!(
        err,
        OperationError::EmptyStructure { structure: "queue" }
    ));
}

#[test]
fn clear_empties_any_structure_and_narrates_one_step() {
    let mut session = heap_session(&[3, 1, 2]);
    let outcome = session.apply(Operation::Clear).expect("clear");
    assert_eq!(outcome.delta, StructureDelta::Cleared);
    assert_eq!(outcome.steps.len(), 1);
    assert!(session.heap().expect("heap").is_empty());
}
