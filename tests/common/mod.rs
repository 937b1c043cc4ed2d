use taskdesk::db::tasks::Tasks;
use taskdesk::libs::task::{TaskFilter, TaskId, TaskStatus};
use std::collections::HashSet;

/// Runs the same CRUD scenario against any backend, starting from an empty store.
///
/// `missing_id` must be well-formed for the backend but never issued by it.
#[allow(dead_code)]
pub fn assert_crud_contract(tasks: &Tasks, missing_id: &TaskId) {
    let study = tasks.add("Study Rust", "Ownership chapter", TaskStatus::Pending).unwrap();
    let exercises = tasks.add("Exercises", "", TaskStatus::Pending).unwrap();
    let docs = tasks.add("Read docs", "Driver guide", TaskStatus::Done).unwrap();

    // Round trip
    let found = tasks.find_by_id(&study.id).unwrap().unwrap();
    assert_eq!(found.id, study.id);
    assert_eq!(found.title, "Study Rust");
    assert_eq!(found.description, "Ownership chapter");
    assert_eq!(found.status, TaskStatus::Pending);

    // Insertion order
    let titles: Vec<String> = tasks.list(TaskFilter::All).unwrap().into_iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["Study Rust", "Exercises", "Read docs"]);

    // Filters partition the full listing
    let ids = |filter: TaskFilter| -> HashSet<TaskId> { tasks.list(filter).unwrap().into_iter().map(|t| t.id).collect() };
    let pending = ids(TaskFilter::Status(TaskStatus::Pending));
    let done = ids(TaskFilter::Status(TaskStatus::Done));
    let all = ids(TaskFilter::All);
    assert!(pending.is_disjoint(&done));
    assert_eq!(pending.union(&done).cloned().collect::<HashSet<_>>(), all);
    assert_eq!(done, HashSet::from([docs.id.clone()]));

    // Unknown filter text lists everything
    assert_eq!(ids(TaskFilter::parse(Some("Archived"))), all);

    // Update on a missing id touches nothing
    let before = tasks.list(TaskFilter::All).unwrap();
    let missed = tasks.update(missing_id, "Ghost", "", TaskStatus::Done).unwrap();
    assert_eq!(missed.affected_count, 0);
    assert_eq!(tasks.list(TaskFilter::All).unwrap(), before);

    // Update in place
    let updated = tasks.update(&study.id, "Study Rust - updated", "Ownership and MongoDB", TaskStatus::Done).unwrap();
    assert_eq!(updated.affected_count, 1);
    let found = tasks.find_by_id(&study.id).unwrap().unwrap();
    assert_eq!(found.title, "Study Rust - updated");
    assert_eq!(found.description, "Ownership and MongoDB");
    assert_eq!(found.status, TaskStatus::Done);

    // Rewriting identical values still counts as a hit
    let same = tasks.update(&study.id, "Study Rust - updated", "Ownership and MongoDB", TaskStatus::Done).unwrap();
    assert_eq!(same.affected_count, 1);

    // Delete, then find and delete again
    assert_eq!(tasks.delete(&exercises.id).unwrap().affected_count, 1);
    assert!(tasks.find_by_id(&exercises.id).unwrap().is_none());
    assert_eq!(tasks.delete(&exercises.id).unwrap().affected_count, 0);
    assert_eq!(tasks.delete(missing_id).unwrap().affected_count, 0);

    let remaining: Vec<TaskId> = tasks.list(TaskFilter::All).unwrap().into_iter().map(|t| t.id).collect();
    assert_eq!(remaining, vec![study.id, docs.id]);
}
