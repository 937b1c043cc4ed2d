/// Every piece of user-facing text the application prints.
///
/// Text lives in the `Display` implementation in `display.rs`; call sites only
/// pick a variant and pass its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String), // title
    TaskUpdated,
    TaskDeleted,
    TaskNotFound(String), // id
    TaskTitleEmpty,
    NoTaskSelected,
    TaskSelected(String), // title
    TasksNotFound,
    TasksHeader(String), // filter description
    ConfirmDeleteTask(String), // title
    FilterIgnored(String), // raw filter

    // === DATABASE MESSAGES ===
    DatabaseConnected {
        database: String,
        collection: String,
    },
    DatabaseUnavailable(String), // error
    ChangesNotPersisted,
    BackendInUse(String),        // backend name
    MalformedTaskId(String),     // error

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigSummary {
        uri: String,
        database: String,
        collection: String,
        timeout_ms: u64,
    },

    // === PROMPTS ===
    PromptDatabaseUri,
    PromptDatabaseName,
    PromptCollectionName,
    PromptTimeoutMs,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskStatus,
    PromptFilter,
    PromptSelectTask,
    PromptSelectAction,

    // === MENU ITEMS ===
    MenuList,
    MenuFilter,
    MenuAdd,
    MenuEdit,
    MenuDelete,
    MenuQuit,
    FilterAll,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
