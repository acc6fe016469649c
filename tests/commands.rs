#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use clap::Parser;
    use taskorg::commands::add::AddArgs;
    use taskorg::commands::list::ListArgs;
    use taskorg::commands::{report, split_list, with_tasks_in, Cli, Commands};
    use taskorg::db::tasks::DB_FILE_NAME;
    use taskorg::libs::data_storage::DataStorage;
    use taskorg::libs::error::TaskError;
    use taskorg::libs::messages::Message;
    use taskorg::libs::task::{Priority, Status, Task};

    fn parse_add(args: &[&str]) -> AddArgs {
        let argv = ["taskorg", "add"].iter().chain(args).copied();
        match Cli::try_parse_from(argv).unwrap().command {
            Some(Commands::Add(args)) => args,
            other => panic!("expected add, got {:?}", other),
        }
    }

    fn parse_list(args: &[&str]) -> ListArgs {
        let argv = ["taskorg", "list"].iter().chain(args).copied();
        match Cli::try_parse_from(argv).unwrap().command {
            Some(Commands::List(args)) => args,
            other => panic!("expected list, got {:?}", other),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("work, urgent ,home"), vec!["work", "urgent", "home"]);
        assert_eq!(split_list("solo"), vec!["solo"]);
        assert!(split_list("").is_empty());
        assert!(split_list(" , ,").is_empty());
    }

    #[test]
    fn test_report_swallows_invalid_id_only() {
        assert!(report(Ok(()), Message::TaskStarted(1)).is_ok());
        assert!(report(Err(TaskError::InvalidTaskId(9)), Message::TaskStarted(9)).is_ok());

        let err = report(Err(TaskError::StatusInvalid("blocked".into())), Message::TaskUpdated(1)).unwrap_err();
        assert!(matches!(err, TaskError::StatusInvalid(_)));
    }

    #[test]
    fn test_message_text() {
        assert_eq!(Message::InvalidTaskId(4).to_string(), "Error: Invalid task id 4");
        assert_eq!(Message::TaskCount(3).to_string(), "3");
        assert_eq!(Message::TaskAdded(1).to_string(), "Task 1 added");
    }

    #[test]
    fn test_error_text() {
        assert_eq!(TaskError::PriorityInvalid("urgent".into()).to_string(), "Invalid priority value: urgent");
        assert_eq!(TaskError::InvalidTaskId(12).to_string(), "Invalid task id 12");
        assert_eq!(
            TaskError::MissingProperty { field: "owner" }.to_string(),
            "Task does not have the property 'owner' to sort by"
        );
    }

    #[test]
    fn test_add_defaults() {
        let task = parse_add(&["Alice", "Ship v1"]).task(today()).unwrap();

        assert_eq!(task.owner.as_deref(), Some("Alice"));
        assert_eq!(task.summary.as_deref(), Some("Ship v1"));
        assert_eq!(task.due_date, Some(today()));
        assert_eq!(task.priority, Some(Priority::Low));
        assert_eq!(task.status, Some(Status::Todo));
        assert_eq!(task.tags, Some(vec![]));
    }

    #[test]
    fn test_add_options() {
        let args = parse_add(&["Bob", "Write docs", "-d", "2024-04-30", "-t", "docs, work", "-p", "HIGH"]);
        let task = args.task(today()).unwrap();

        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 4, 30));
        assert_eq!(task.priority, Some(Priority::High));
        assert_eq!(task.tags, Some(vec!["docs".to_string(), "work".to_string()]));

        let err = parse_add(&["Bob", "Write docs", "-p", "urgent"]).task(today()).unwrap_err();
        assert!(matches!(err, TaskError::PriorityInvalid(_)));
        let err = parse_add(&["Bob", "Write docs", "-d", "tomorrow"]).task(today()).unwrap_err();
        assert!(matches!(err, TaskError::DueDateInvalid(_)));
    }

    #[test]
    fn test_list_filter_from_flags() {
        let filter = parse_list(&["--status", "todo, IN_PROGRESS", "-p", "high", "-o", "Alice,Bob", "-t", "work"])
            .filter()
            .unwrap();

        assert_eq!(filter.statuses, vec![Status::Todo, Status::InProgress]);
        assert_eq!(filter.priorities, vec![Priority::High]);
        assert_eq!(filter.owners, vec!["Alice", "Bob"]);
        assert_eq!(filter.tags, vec!["work"]);
        assert!(filter.summary.is_none());
        assert!(filter.due_date.is_none());
    }

    #[test]
    fn test_list_filter_rejects_unknown_values() {
        let err = parse_list(&["--status", "blocked"]).filter().unwrap_err();
        assert!(matches!(err, TaskError::StatusInvalid(s) if s == "blocked"));

        let err = parse_list(&["-p", "low,critical"]).filter().unwrap_err();
        assert!(matches!(err, TaskError::PriorityInvalid(p) if p == "critical"));
    }

    #[test]
    fn test_no_subcommand_means_list() {
        assert!(Cli::try_parse_from(["taskorg"]).unwrap().command.is_none());
        assert!(Cli::try_parse_from(["taskorg", "delete"]).is_err());
        assert!(Cli::try_parse_from(["taskorg", "delete", "3", "--all"]).is_err());
    }

    #[test]
    fn test_session_closes_when_operation_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = || DataStorage::from_path(temp_dir.path());

        let err = with_tasks_in(storage(), |tasks| {
            tasks.add(&Task::with_status(Status::Todo))?;
            tasks.delete(99)
        })
        .unwrap_err();
        assert!(matches!(err.downcast_ref::<TaskError>(), Some(TaskError::InvalidTaskId(99))));

        let count = with_tasks_in(storage(), |tasks| Ok(tasks.count())).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_read_only_session_creates_no_file() {
        let temp_dir = tempfile::tempdir().unwrap();

        let count = with_tasks_in(DataStorage::from_path(temp_dir.path()), |tasks| Ok(tasks.count())).unwrap();
        assert_eq!(count, 0);
        assert!(!temp_dir.path().join(DB_FILE_NAME).exists());
    }
}
