#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;
    use taskorg::db::db::Document;
    use taskorg::libs::error::TaskError;
    use taskorg::libs::task::{priority_rank, status_rank, Priority, Status, Task};

    fn document(value: serde_json::Value) -> Document {
        value.as_object().unwrap().clone()
    }

    fn sample(id: u64) -> Task {
        Task {
            id: Some(id),
            owner: Some("Alice".to_string()),
            summary: Some("Complete the project".to_string()),
            status: Some(Status::Todo),
            priority: Some(Priority::High),
            due_date: NaiveDate::from_ymd_opt(2023, 10, 31),
            tags: Some(vec!["work".to_string(), "urgent".to_string()]),
        }
    }

    #[test]
    fn test_task_default_is_empty() {
        let task = Task::default();
        assert!(task.id.is_none());
        assert!(task.owner.is_none());
        assert!(task.summary.is_none());
        assert!(task.status.is_none());
        assert!(task.priority.is_none());
        assert!(task.due_date.is_none());
        assert!(task.tags.is_none());
    }

    #[test]
    fn test_equality_ignores_id() {
        assert_eq!(sample(1), sample(1));
        assert_eq!(sample(1), sample(2));

        let mut other = sample(1);
        other.summary = Some("Something else".to_string());
        assert_ne!(sample(1), other);
    }

    #[test]
    fn test_from_document() {
        let task = Task::from_document(&document(json!({
            "owner": "Alice",
            "summary": "Complete the project",
            "status": "todo",
            "priority": "high",
            "id": 1,
            "due_date": "2023-10-31",
            "tags": ["work", "urgent"]
        })))
        .unwrap();

        assert_eq!(task.id, Some(1));
        assert_eq!(task.owner.as_deref(), Some("Alice"));
        assert_eq!(task.summary.as_deref(), Some("Complete the project"));
        assert_eq!(task.status, Some(Status::Todo));
        assert_eq!(task.priority, Some(Priority::High));
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2023, 10, 31));
        assert_eq!(task.tags, Some(vec!["work".to_string(), "urgent".to_string()]));
    }

    #[test]
    fn test_from_document_partial_and_nulls() {
        let task = Task::from_document(&document(json!({"status": "done", "owner": null}))).unwrap();
        assert_eq!(task, Task::with_status(Status::Done));
    }

    #[test]
    fn test_from_document_normalizes_case() {
        let task = Task::from_document(&document(json!({"status": "IN_PROGRESS", "priority": "Medium"}))).unwrap();
        assert_eq!(task.status, Some(Status::InProgress));
        assert_eq!(task.priority, Some(Priority::Medium));
        let doc = task.to_document().unwrap();
        assert_eq!(doc["status"], json!("in_progress"));
        assert_eq!(doc["priority"], json!("medium"));
    }

    #[test]
    fn test_from_document_rejects_invalid_values() {
        let err = Task::from_document(&document(json!({"priority": "urgent"}))).unwrap_err();
        assert!(matches!(err, TaskError::PriorityInvalid(p) if p == "urgent"));

        let err = Task::from_document(&document(json!({"status": "blocked"}))).unwrap_err();
        assert!(matches!(err, TaskError::StatusInvalid(s) if s == "blocked"));

        let err = Task::from_document(&document(json!({"due_date": "31/10/2023"}))).unwrap_err();
        assert!(matches!(err, TaskError::DueDateInvalid(_)));

        let err = Task::from_document(&document(json!({"tags": "work"}))).unwrap_err();
        assert!(matches!(err, TaskError::Serialization(_)));

        let err = Task::from_document(&document(json!({"id": "seven"}))).unwrap_err();
        assert!(matches!(err, TaskError::Serialization(_)));

        let err = Task::from_document(&document(json!({"colour": "red"}))).unwrap_err();
        assert!(matches!(&err, TaskError::Serialization(_)));
        assert!(err.to_string().contains("colour"));
    }

    #[test]
    fn test_to_document_contains_every_field() {
        let doc = Task::with_status(Status::Done).to_document().unwrap();
        for key in ["id", "owner", "summary", "status", "priority", "due_date", "tags"] {
            assert!(doc.contains_key(key), "missing {}", key);
        }
        assert_eq!(doc["status"], json!("done"));
        assert!(doc["owner"].is_null());
        assert!(doc["id"].is_null());

        let doc = sample(7).to_document().unwrap();
        assert_eq!(doc["id"], json!(7));
        assert_eq!(doc["due_date"], json!("2023-10-31"));
        assert_eq!(doc["tags"], json!(["work", "urgent"]));
    }

    #[test]
    fn test_document_round_trip() {
        let tasks = [
            sample(3),
            Task::default(),
            Task::with_status(Status::InProgress),
            Task {
                tags: Some(vec![]),
                priority: Some(Priority::Low),
                ..Task::default()
            },
        ];
        for task in tasks {
            let restored = Task::from_document(&task.to_document().unwrap()).unwrap();
            assert_eq!(task, restored);
            assert_eq!(task.id, restored.id);
        }
    }

    #[test]
    fn test_enums_serialize_as_lowercase_strings() {
        assert_eq!(serde_json::to_value(Status::InProgress).unwrap(), json!("in_progress"));
        assert_eq!(serde_json::to_value(Priority::High).unwrap(), json!("high"));
        assert_eq!(serde_json::from_value::<Status>(json!("DONE")).unwrap(), Status::Done);
        assert!(serde_json::from_value::<Priority>(json!("urgent")).is_err());
    }

    #[test]
    fn test_priority_rank() {
        assert_eq!(priority_rank("low").unwrap(), 0);
        assert_eq!(priority_rank("medium").unwrap(), 1);
        assert_eq!(priority_rank("high").unwrap(), 2);
        assert_eq!(priority_rank("HIGH").unwrap(), 2);
        assert_eq!(priority_rank("Medium").unwrap(), 1);
        assert!(matches!(priority_rank("critical"), Err(TaskError::PriorityInvalid(_))));
        assert!(matches!(priority_rank(""), Err(TaskError::PriorityInvalid(_))));
    }

    #[test]
    fn test_status_rank_is_distance_from_completion() {
        assert_eq!(status_rank("todo").unwrap(), 2);
        assert_eq!(status_rank("in_progress").unwrap(), 1);
        assert_eq!(status_rank("done").unwrap(), 0);
        assert_eq!(status_rank("ToDo").unwrap(), 2);
        assert!(matches!(status_rank("in progress"), Err(TaskError::StatusInvalid(_))));
    }

    #[test]
    fn test_new_task_starts_as_todo() {
        let due = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let task = Task::new("Bob", "Write docs", Priority::Medium, due, vec!["docs".to_string()]);
        assert_eq!(task.id, None);
        assert_eq!(task.status, Some(Status::Todo));
        assert_eq!(task.priority, Some(Priority::Medium));
        assert_eq!(task.due_date, Some(due));
    }
}
