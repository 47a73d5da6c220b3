//! Repository Tests
//!
//! TaskStore over an in-memory slot and a manual clock.

use std::rc::Rc;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::config::StoreConfig;
use crate::domain::{DomainError, Task, MAX_TASK_ID};
use crate::repository::{ManualClock, Repository, TaskRepository, TaskStore};
use crate::storage::{KeyValueStore, MemoryStore, TaskStorage};

const START: u64 = 1_700_000_000_000;

struct Fixture {
    backend: MemoryStore,
    clock: Rc<ManualClock>,
    repo: TaskStore<MemoryStore, Rc<ManualClock>>,
}

fn setup() -> Fixture {
    let backend = MemoryStore::new();
    let clock = Rc::new(ManualClock::new(START));
    let storage = TaskStorage::new(backend.clone(), &StoreConfig::default());
    let repo = TaskStore::new(storage, clock.clone());
    Fixture { backend, clock, repo }
}

/// What a fresh repository over the same slot would see
fn persisted(fx: &Fixture) -> Vec<Task> {
    TaskStorage::new(fx.backend.clone(), &StoreConfig::default()).load()
}

#[test]
fn test_create_appends_and_persists() {
    let fx = setup();
    let first = fx.repo.create("Write report").unwrap();
    fx.clock.advance(5);
    let created = fx.repo.create("Buy milk").unwrap();

    let tasks = fx.repo.list();
    let last = tasks.last().unwrap();
    assert_eq!(last.title, "Buy milk");
    assert_eq!(last.description, "");
    assert_eq!(last.id, created.id);
    assert_ne!(created.id, first.id);
    assert_eq!(persisted(&fx), tasks);
}

#[test]
fn test_create_trims_title() {
    let fx = setup();
    let task = fx.repo.create("   Call mom \n").unwrap();
    assert_eq!(task.title, "Call mom");
}

#[test]
fn test_create_blank_title_rejected() {
    let fx = setup();
    fx.repo.create("keep").unwrap();
    let before = fx.backend.get_item("tasks");

    for title in ["", "   "] {
        let err = fx.repo.create(title).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
    assert_eq!(fx.backend.get_item("tasks"), before);
    assert_eq!(fx.repo.list().len(), 1);
}

#[test]
fn test_ids_unique_when_clock_stalls_or_goes_back() {
    let fx = setup();
    let a = fx.repo.create("a").unwrap();
    let b = fx.repo.create("b").unwrap();
    fx.clock.set(10);
    let c = fx.repo.create("c").unwrap();

    assert_eq!(a.id, START);
    assert_eq!(b.id, START + 1);
    assert_eq!(c.id, START + 2);
}

#[test]
fn test_create_refuses_to_reuse_largest_id() {
    let fx = setup();
    fx.backend
        .set_item("tasks", r#"[{"id":18446744073709551615,"title":"edited","description":""}]"#)
        .unwrap();
    let before = fx.backend.get_item("tasks");

    assert!(matches!(fx.repo.create("new"), Err(DomainError::Storage(_))));
    assert_eq!(fx.repo.list().len(), 1);
    assert_eq!(fx.backend.get_item("tasks"), before);
}

#[test]
fn test_ids_stay_within_safe_integer_range() {
    let fx = setup();
    fx.backend
        .set_item("tasks", &format!(r#"[{{"id":{},"title":"a","description":""}}]"#, MAX_TASK_ID - 1))
        .unwrap();

    assert_eq!(fx.repo.create("last").unwrap().id, MAX_TASK_ID);
    assert!(matches!(fx.repo.create("one more"), Err(DomainError::Storage(_))));

    let ids: Vec<_> = fx.repo.list().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![MAX_TASK_ID - 1, MAX_TASK_ID]);
}

#[test]
fn test_id_not_reused_after_deleting_newest() {
    let fx = setup();
    let a = fx.repo.create("a").unwrap();
    let b = fx.repo.create("b").unwrap();
    fx.repo.delete(b.id).unwrap();
    fx.clock.advance(1_000);
    let c = fx.repo.create("c").unwrap();

    assert_ne!(c.id, a.id);
    assert_ne!(c.id, b.id);
}

#[test]
fn test_find_by_id() {
    let fx = setup();
    let created = fx.repo.create("Find me").unwrap();

    assert_eq!(fx.repo.find_by_id(created.id).unwrap(), created);
    assert_eq!(fx.repo.find_by_id(42), Err(DomainError::NotFound(42)));
}

#[test]
fn test_update_keeps_id_and_position() {
    let fx = setup();
    let a = fx.repo.create("a").unwrap();
    fx.clock.advance(1);
    let b = fx.repo.create("b").unwrap();
    fx.clock.advance(1);
    fx.repo.create("c").unwrap();

    let updated = fx.repo.update(b.id, "New title", "New desc").unwrap();
    assert_eq!(updated.id, b.id);

    let found = fx.repo.find_by_id(b.id).unwrap();
    assert_eq!(found.title, "New title");
    assert_eq!(found.description, "New desc");

    let ids: Vec<_> = fx.repo.list().iter().map(|t| t.id).collect();
    assert_eq!(ids[0], a.id);
    assert_eq!(ids[1], b.id);
    assert_eq!(persisted(&fx), fx.repo.list());
}

#[test]
fn test_update_allows_any_title() {
    let fx = setup();
    let task = fx.repo.create("a").unwrap();
    let updated = fx.repo.update(task.id, "", "").unwrap();
    assert_eq!(updated.title, "");
}

#[test]
fn test_update_missing_is_not_found() {
    let fx = setup();
    fx.repo.create("a").unwrap();
    let before = fx.repo.list();

    assert_eq!(fx.repo.update(99, "x", "y"), Err(DomainError::NotFound(99)));
    assert_eq!(fx.repo.list(), before);
    assert_eq!(persisted(&fx), before);
}

#[test]
fn test_delete_is_idempotent() {
    let fx = setup();
    let keep = fx.repo.create("keep").unwrap();
    fx.clock.advance(1);
    let gone = fx.repo.create("gone").unwrap();

    fx.repo.delete(gone.id).unwrap();
    assert!(fx.repo.find_by_id(gone.id).unwrap_err().is_not_found());
    fx.repo.delete(gone.id).unwrap();

    assert_eq!(fx.repo.list(), vec![keep.clone()]);
    assert_eq!(persisted(&fx), vec![keep]);
}

#[test]
fn test_failed_write_leaves_cache_untouched() {
    let fx = setup();
    let task = fx.repo.create("a").unwrap();
    fx.backend.set_read_only(true);

    assert!(matches!(fx.repo.create("b"), Err(DomainError::Storage(_))));
    assert!(matches!(fx.repo.update(task.id, "x", ""), Err(DomainError::Storage(_))));
    assert!(matches!(fx.repo.delete(task.id), Err(DomainError::Storage(_))));
    assert_eq!(fx.repo.list(), vec![task]);
}

#[test]
fn test_list_loads_existing_slot() {
    let fx = setup();
    fx.backend
        .set_item("tasks", r#"[{"id":5,"title":"old","description":"d"}]"#)
        .unwrap();

    let tasks = fx.repo.list();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "old");

    fx.clock.set(1);
    assert_eq!(fx.repo.create("new").unwrap().id, 6);
}

#[test]
fn test_corrupt_slot_reads_as_empty() {
    let fx = setup();
    fx.backend.set_item("tasks", "}{").unwrap();
    assert!(fx.repo.list().is_empty());

    fx.repo.create("fresh").unwrap();
    assert_eq!(persisted(&fx).len(), 1);
}

#[test]
fn test_cache_until_reload() {
    let fx = setup();
    fx.repo.create("a").unwrap();
    fx.backend.set_item("tasks", "[]").unwrap();

    assert_eq!(fx.repo.list().len(), 1);
    fx.repo.reload();
    assert!(fx.repo.list().is_empty());
}

#[test]
fn test_clear() {
    let fx = setup();
    fx.repo.create("a").unwrap();
    fx.repo.clear().unwrap();

    assert!(fx.repo.list().is_empty());
    assert!(fx.backend.get_item("tasks").is_none());
}

#[derive(Debug, Clone)]
enum Op {
    Create(String),
    Update(usize, String, String),
    Delete(usize),
    DeleteMissing,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[ a-z]{0,8}".prop_map(Op::Create),
        (0usize..8, "[a-z]{0,6}", "[a-z ]{0,10}").prop_map(|(i, t, d)| Op::Update(i, t, d)),
        (0usize..8).prop_map(Op::Delete),
        Just(Op::DeleteMissing),
    ]
}

proptest! {
    #[test]
    fn list_matches_model_after_any_operation_sequence(
        ops in proptest::collection::vec(arb_op(), 0..40),
        ticks in proptest::collection::vec(0u64..3, 40),
    ) {
        let fx = setup();
        let mut model: Vec<Task> = Vec::new();

        for (op, tick) in ops.into_iter().zip(ticks) {
            fx.clock.advance(tick);
            match op {
                Op::Create(title) => match fx.repo.create(&title) {
                    Ok(task) => {
                        prop_assert!(model.iter().all(|t| t.id != task.id));
                        prop_assert_eq!(&task.title, title.trim());
                        model.push(task);
                    }
                    Err(e) => {
                        prop_assert!(title.trim().is_empty());
                        prop_assert!(matches!(e, DomainError::Validation(_)));
                    }
                },
                Op::Update(i, title, description) => {
                    if let Some(target) = model.get_mut(i) {
                        fx.repo.update(target.id, &title, &description).unwrap();
                        target.title = title;
                        target.description = description;
                    }
                }
                Op::Delete(i) => {
                    if i < model.len() {
                        let removed = model.remove(i);
                        fx.repo.delete(removed.id).unwrap();
                    }
                }
                Op::DeleteMissing => {
                    fx.repo.delete(u64::MAX).unwrap();
                }
            }

            let listed = fx.repo.list();
            let mut ids: Vec<_> = listed.iter().map(|t| t.id).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), listed.len());
            prop_assert_eq!(&listed, &model);
            prop_assert_eq!(persisted(&fx), model.clone());
        }
    }
}
