use super::tasks::{BackendKind, TaskStore};
use super::{Result, StoreError};
use crate::libs::task::{AddResult, MutateResult, Task, TaskDraft, TaskFilter, TaskId, TaskStatus};
use mongodb::bson::{self, doc, oid::ObjectId, Document};
use mongodb::sync::Collection;
use serde::{Deserialize, Serialize};

/// Shape of a task document in the collection.
///
/// Field names match the collection layout written by earlier releases of the
/// application, so existing data is read without migration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
    pub status: TaskStatus,
}

impl TaskDocument {
    pub fn from_draft(draft: &TaskDraft) -> Self {
        TaskDocument {
            id: None,
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status,
        }
    }

    pub fn into_task(self) -> Result<Task> {
        let id = self
            .id
            .ok_or_else(|| StoreError::InvalidDocument(format!("task '{}' has no _id", self.title)))?;

        Ok(Task {
            id: TaskId::new(id.to_hex()),
            title: self.title,
            description: self.description,
            status: self.status,
        })
    }

    /// Maps a raw stored document, rejecting ones with missing fields or an unknown status.
    pub fn from_stored(document: Document) -> Result<Task> {
        let id = document.get_object_id("_id").map(|id| id.to_hex()).unwrap_or_default();
        bson::from_document::<TaskDocument>(document)
            .map_err(|err| StoreError::InvalidDocument(format!("document '{}': {}", id, err)))?
            .into_task()
    }
}

/// Maps every readable document and skips the rest with a warning.
pub fn readable_tasks(documents: impl IntoIterator<Item = Document>) -> Vec<Task> {
    documents
        .into_iter()
        .filter_map(|document| match TaskDocument::from_stored(document) {
            Ok(task) => Some(task),
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable task document");
                None
            }
        })
        .collect()
}

/// Tasks stored in a MongoDB collection.
pub struct MongoStore {
    collection: Collection<TaskDocument>,
}

impl MongoStore {
    pub fn new(collection: Collection<TaskDocument>) -> Self {
        Self { collection }
    }

    pub fn collection(&self) -> &Collection<TaskDocument> {
        &self.collection
    }

    fn parse_id(id: &TaskId) -> Result<ObjectId> {
        ObjectId::parse_str(id.as_str()).map_err(|_| StoreError::MalformedId {
            id: id.to_string(),
            expected: "a 24-character hex object id",
        })
    }

    fn by_id(id: &TaskId) -> Result<Document> {
        Ok(doc! { "_id": Self::parse_id(id)? })
    }
}

impl TaskStore for MongoStore {
    fn kind(&self) -> BackendKind {
        BackendKind::Remote
    }

    fn list(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        let query = match filter {
            TaskFilter::All => doc! {},
            TaskFilter::Status(status) => doc! { "status": status.as_stored() },
        };

        // Raw documents, so a single malformed one is skipped instead of failing the cursor.
        let documents = self
            .collection
            .clone_with_type::<Document>()
            .find(query)
            .run()?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(readable_tasks(documents))
    }

    fn add(&self, draft: &TaskDraft) -> Result<AddResult> {
        let inserted = self.collection.insert_one(TaskDocument::from_draft(draft)).run()?;
        let id = inserted
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::InvalidDocument(format!("unexpected inserted id {}", inserted.inserted_id)))?;
        tracing::debug!(id = %id, "task inserted");

        Ok(AddResult { id: TaskId::new(id.to_hex()) })
    }

    fn update(&self, id: &TaskId, draft: &TaskDraft) -> Result<MutateResult> {
        let changes = doc! {
            "$set": {
                "titulo": draft.title.as_str(),
                "descricao": draft.description.as_str(),
                "status": draft.status.as_stored(),
            }
        };
        let result = self.collection.update_one(Self::by_id(id)?, changes).run()?;

        // Matched rather than modified, so rewriting identical values still counts.
        Ok(MutateResult::new(result.matched_count))
    }

    fn delete(&self, id: &TaskId) -> Result<MutateResult> {
        let result = self.collection.delete_one(Self::by_id(id)?).run()?;

        Ok(MutateResult::new(result.deleted_count))
    }

    fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>> {
        self.collection.find_one(Self::by_id(id)?).run()?.map(TaskDocument::into_task).transpose()
    }
}
