mod common;

#[cfg(test)]
mod tests {
    use super::common::assert_crud_contract;
    use mongodb::bson::{self, doc, oid::ObjectId};
    use mongodb::sync::Client;
    use taskdesk::db::mongo::{readable_tasks, MongoStore, TaskDocument};
    use taskdesk::db::probe;
    use taskdesk::db::tasks::{BackendKind, TaskStore, Tasks};
    use taskdesk::db::StoreError;
    use taskdesk::libs::config::DatabaseConfig;
    use taskdesk::libs::task::{TaskDraft, TaskId, TaskStatus};

    /// A store whose client never connects: only usable for checks that fail before I/O.
    fn offline_store() -> MongoStore {
        let client = Client::with_uri_str("mongodb://127.0.0.1:1/").unwrap();
        MongoStore::new(client.database("taskdesk_offline").collection("tarefas"))
    }

    #[test]
    fn test_document_layout_matches_collection() {
        let draft = TaskDraft::new("Estudar Python", "Revisar POO", TaskStatus::Pending);
        let document = bson::to_document(&TaskDocument::from_draft(&draft)).unwrap();

        assert_eq!(document, doc! { "titulo": "Estudar Python", "descricao": "Revisar POO", "status": "Pendente" });
    }

    #[test]
    fn test_document_into_task() {
        let oid = ObjectId::new();
        let stored = doc! { "_id": oid, "titulo": "Ler documentação", "descricao": "MongoDB", "status": "Concluída" };
        let task = bson::from_document::<TaskDocument>(stored).unwrap().into_task().unwrap();

        assert_eq!(task.id, TaskId::new(oid.to_hex()));
        assert_eq!(task.title, "Ler documentação");
        assert_eq!(task.description, "MongoDB");
        assert_eq!(task.status, TaskStatus::Done);
    }

    #[test]
    fn test_document_without_description() {
        let stored = doc! { "_id": ObjectId::new(), "titulo": "Sem descrição", "status": "Pendente" };
        let task = bson::from_document::<TaskDocument>(stored).unwrap().into_task().unwrap();

        assert_eq!(task.description, "");
    }

    #[test]
    fn test_document_without_id_is_invalid() {
        let document = TaskDocument::from_draft(&TaskDraft::new("No id", "", TaskStatus::Pending));

        assert!(matches!(document.into_task(), Err(StoreError::InvalidDocument(_))));
    }

    #[test]
    fn test_unreadable_documents_are_skipped() {
        let kept = ObjectId::new();
        let last = ObjectId::new();
        let stored = vec![
            doc! { "_id": kept, "titulo": "Estudar Python", "descricao": "", "status": "Pendente" },
            doc! { "_id": ObjectId::new(), "titulo": "Arquivada", "status": "Arquivada" },
            doc! { "_id": ObjectId::new(), "descricao": "sem título", "status": "Pendente" },
            doc! { "_id": last, "titulo": "Ler documentação", "status": "Concluída" },
        ];

        let tasks = readable_tasks(stored);
        let ids: Vec<TaskId> = tasks.into_iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![TaskId::new(kept.to_hex()), TaskId::new(last.to_hex())]);
    }

    #[test]
    fn test_unknown_status_is_an_invalid_document() {
        let stored = doc! { "_id": ObjectId::new(), "titulo": "Arquivada", "status": "Arquivada" };

        assert!(matches!(TaskDocument::from_stored(stored), Err(StoreError::InvalidDocument(_))));
    }

    #[test]
    fn test_mongo_rejects_malformed_ids() {
        let store = offline_store();
        let draft = TaskDraft::new("x", "", TaskStatus::Pending);

        for raw in ["", "123", "not-an-object-id", "0b5a6c1e-3f1d-4c7e-9a57-2f4f0c1d9e11"] {
            let id = TaskId::from(raw);
            assert!(matches!(store.find_by_id(&id), Err(StoreError::MalformedId { .. })), "{}", raw);
            assert!(matches!(store.update(&id, &draft), Err(StoreError::MalformedId { .. })), "{}", raw);
            assert!(matches!(store.delete(&id), Err(StoreError::MalformedId { .. })), "{}", raw);
        }
        assert_eq!(store.kind(), BackendKind::Remote);
    }

    #[test]
    #[ignore = "requires a running MongoDB server (MONGODB_URI)"]
    fn test_mongo_crud_contract() {
        // Only the endpoint comes from the environment; the collection is always a throwaway.
        let config = DatabaseConfig {
            database: "taskdesk_test".to_string(),
            collection: format!("tarefas_{}", ObjectId::new().to_hex()),
            ..DatabaseConfig::default().apply_env()
        };

        let store = probe::connect(&config).unwrap();
        let collection = store.collection().clone();
        let tasks = Tasks::from_probe(Ok(store));
        assert!(tasks.is_connected());

        assert_crud_contract(&tasks, &TaskId::new(ObjectId::new().to_hex()));

        collection.drop().run().unwrap();
    }
}
