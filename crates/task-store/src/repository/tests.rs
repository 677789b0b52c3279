//! Repository Integration Tests
//!
//! TaskRepository against in-memory and failing storage backends.

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, DomainResult, Task, TaskList};
    use crate::repository::{KeyValueStorage, MemoryStorage, TaskRepository, DEFAULT_STORAGE_KEY};

    fn setup_repo() -> (TaskRepository<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        (TaskRepository::with_key(storage.clone(), DEFAULT_STORAGE_KEY), storage)
    }

    /// Storage whose writes always fail, like a full quota
    struct ReadOnlyStorage;

    impl KeyValueStorage for ReadOnlyStorage {
        fn get_item(&self, _key: &str) -> DomainResult<Option<String>> {
            Ok(None)
        }

        fn set_item(&self, _key: &str, _value: &str) -> DomainResult<()> {
            Err(DomainError::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_load_without_stored_data() {
        let (repo, _) = setup_repo();
        let list = repo.load().expect("Load failed");
        assert!(list.is_empty());
        assert_eq!(list.next_id(), Some(1));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let (repo, _) = setup_repo();
        let mut list = TaskList::new();
        list.add("Buy milk");
        list.add("Walk the dog");
        list.add("Call mom");
        list.toggle(2);
        list.reorder(2, 0).unwrap();

        repo.save(&list).expect("Save failed");
        let loaded = repo.load().expect("Load failed");

        assert_eq!(loaded, list);
        assert_eq!(loaded.next_id(), Some(4));
    }

    #[test]
    fn test_saved_format_is_json_array() {
        let (repo, storage) = setup_repo();
        let mut list = TaskList::new();
        list.add("Buy milk");
        repo.save(&list).unwrap();

        let raw = storage.get_item(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"[{"id":1,"text":"Buy milk","completed":false}]"#);
    }

    #[test]
    fn test_load_existing_json() {
        let (repo, storage) = setup_repo();
        storage
            .set_item(
                DEFAULT_STORAGE_KEY,
                r#"[{"id":5,"text":"b","completed":true},{"id":2,"text":"a","completed":false}]"#,
            )
            .unwrap();

        let list = repo.load().unwrap();
        assert_eq!(list.ids(), vec![5, 2]);
        assert!(list.get(5).unwrap().completed);
        assert_eq!(list.next_id(), Some(6));
    }

    #[test]
    fn test_load_malformed_json_is_corrupt() {
        let (repo, storage) = setup_repo();
        storage.set_item(DEFAULT_STORAGE_KEY, "{not json").unwrap();
        assert!(matches!(repo.load(), Err(DomainError::Corrupt(_))));

        storage.set_item(DEFAULT_STORAGE_KEY, r#"{"id":1}"#).unwrap();
        assert!(matches!(repo.load(), Err(DomainError::Corrupt(_))));

        storage
            .set_item(
                DEFAULT_STORAGE_KEY,
                r#"[{"id":1,"text":"a","completed":false},{"id":1,"text":"b","completed":false}]"#,
            )
            .unwrap();
        assert!(matches!(repo.load(), Err(DomainError::Corrupt(_))));
    }

    #[test]
    fn test_custom_key_is_isolated() {
        let storage = MemoryStorage::new();
        let work = TaskRepository::with_key(storage.clone(), "work");
        let home = TaskRepository::with_key(storage.clone(), "home");

        let mut list = TaskList::new();
        list.add("Report");
        work.save(&list).unwrap();

        assert_eq!(work.load().unwrap().len(), 1);
        assert!(home.load().unwrap().is_empty());
        assert!(storage.get_item("work").unwrap().is_some());
        assert!(storage.get_item("home").unwrap().is_none());
    }

    #[test]
    fn test_stored_max_id_survives_add_and_reload() {
        let (repo, storage) = setup_repo();
        storage
            .set_item(
                DEFAULT_STORAGE_KEY,
                &format!(r#"[{{"id":{},"text":"stored","completed":false}}]"#, u32::MAX),
            )
            .unwrap();

        let mut list = repo.load().expect("Load failed");
        assert!(list.add("new").is_none());
        repo.save(&list).expect("Save failed");

        let reloaded = repo.load().expect("Reload failed");
        assert_eq!(reloaded.ids(), vec![u32::MAX]);
        assert_eq!(reloaded.get(u32::MAX).unwrap().text, "stored");
    }

    #[test]
    fn test_storage_failure_is_reported() {
        let repo = TaskRepository::with_key(ReadOnlyStorage, DEFAULT_STORAGE_KEY);
        let mut list = TaskList::new();
        list.add("x");
        let err = repo.save(&list).unwrap_err();
        assert_eq!(err, DomainError::Storage("quota exceeded".to_string()));
    }

    #[test]
    fn test_task_order_survives_reload() {
        let (repo, _) = setup_repo();
        let mut list = TaskList::from_tasks(vec![
            Task::new(3, "c"),
            Task::new(1, "a"),
            Task::new(2, "b"),
        ])
        .unwrap();
        list.delete(1);
        repo.save(&list).unwrap();
        assert_eq!(repo.load().unwrap().ids(), vec![3, 2]);
    }
}
