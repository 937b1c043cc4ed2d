#[cfg(test)]
mod tests {
    use taskdesk::libs::task::{MutateResult, Task, TaskDraft, TaskFilter, TaskId, TaskStatus};

    #[test]
    fn test_status_parsing() {
        for raw in ["Pending", "pending", " PENDING ", "Pendente"] {
            assert_eq!(raw.parse::<TaskStatus>().unwrap(), TaskStatus::Pending, "{}", raw);
        }
        for raw in ["Done", "done", "Concluída", "concluida"] {
            assert_eq!(raw.parse::<TaskStatus>().unwrap(), TaskStatus::Done, "{}", raw);
        }
        let err = "Archived".parse::<TaskStatus>().unwrap_err();
        assert!(err.to_string().contains("Archived"));
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&TaskStatus::Pending).unwrap(), "\"Pendente\"");
        assert_eq!(serde_json::to_string(&TaskStatus::Done).unwrap(), "\"Concluída\"");
        assert_eq!(serde_json::from_str::<TaskStatus>("\"Done\"").unwrap(), TaskStatus::Done);
        assert_eq!(TaskStatus::Done.to_string(), "Done");
        assert_eq!(TaskStatus::Pending.as_stored(), "Pendente");
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!(TaskFilter::parse(None), TaskFilter::All);
        assert_eq!(TaskFilter::parse(Some("Done")), TaskFilter::Status(TaskStatus::Done));
        assert_eq!(TaskFilter::parse(Some("Pendente")), TaskFilter::Status(TaskStatus::Pending));
        assert_eq!(TaskFilter::parse(Some("Archived")), TaskFilter::All);
        assert_eq!(TaskFilter::parse(Some("")), TaskFilter::All);
        assert_eq!(TaskFilter::from(Some(TaskStatus::Done)), TaskFilter::Status(TaskStatus::Done));
        assert_eq!(TaskFilter::from(None::<TaskStatus>), TaskFilter::All);
    }

    #[test]
    fn test_filter_matches() {
        let task = Task::from_draft(TaskId::from("1"), &TaskDraft::new("t", "", TaskStatus::Pending));
        assert!(TaskFilter::All.matches(&task));
        assert!(TaskFilter::Status(TaskStatus::Pending).matches(&task));
        assert!(!TaskFilter::Status(TaskStatus::Done).matches(&task));
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut task = Task::from_draft(TaskId::from("abc"), &TaskDraft::new("old", "old", TaskStatus::Pending));
        task.apply(&TaskDraft::new("new", "", TaskStatus::Done));

        assert_eq!(task.id, TaskId::from("abc"));
        assert_eq!(task.draft(), TaskDraft::new("new", "", TaskStatus::Done));
    }

    #[test]
    fn test_mutate_result() {
        assert!(MutateResult::new(0).is_miss());
        assert!(!MutateResult::new(1).is_miss());
    }
}
