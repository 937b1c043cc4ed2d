use crate::{
    db::StoreError,
    libs::{
        controller::{TaskController, ValidationError},
        messages::Message,
        task::{MutateResult, Task, TaskFilter, TaskId, TaskStatus},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show tasks with this status (Pending or Done)
    #[arg(short, long)]
    status: Option<String>,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    title: String,
    /// Task description
    #[arg(short, long, default_value = "")]
    description: String,
    /// Initial status
    #[arg(short, long, default_value = "Pending")]
    status: TaskStatus,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID of the task to edit
    id: String,
    /// New title
    #[arg(short, long)]
    title: Option<String>,
    /// New description
    #[arg(short, long)]
    description: Option<String>,
    /// New status
    #[arg(short, long)]
    status: Option<TaskStatus>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the task to delete
    id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// ID of the task to show
    id: String,
}

pub fn list(controller: &TaskController, args: ListArgs) -> Result<()> {
    let filter = controller.resolve_filter(args.status.as_deref());
    let tasks = controller.load_tasks(filter)?;
    render(&tasks, filter);

    Ok(())
}

pub fn add(controller: &mut TaskController, args: AddArgs) -> Result<()> {
    report(controller.add_task(&args.title, &args.description, args.status).map(|_| {
        msg_success!(Message::TaskCreated(args.title.clone()));
        session_only(controller);
    }))
}

pub fn edit(controller: &mut TaskController, args: EditArgs) -> Result<()> {
    let id = TaskId::from(args.id);
    report(select(controller, &id).and_then(|task| {
        let Some(task) = task else {
            return Ok(());
        };
        let title = args.title.unwrap_or(task.title);
        let description = args.description.unwrap_or(task.description);
        let status = args.status.unwrap_or(task.status);
        let selected = controller.selected().cloned();

        let result = controller.update_task(selected.as_ref(), &title, &description, status)?;
        if result.is_miss() {
            msg_error!(Message::TaskNotFound(id.to_string()));
        } else {
            msg_success!(Message::TaskUpdated);
            session_only(controller);
        }
        Ok(())
    }))
}

pub fn delete(controller: &mut TaskController, args: DeleteArgs) -> Result<()> {
    let id = TaskId::from(args.id);
    report(select(controller, &id).and_then(|task| {
        let Some(task) = task else {
            return Ok(());
        };
        let selected = controller.selected().cloned();
        let confirm = |_: &TaskId| -> Result<bool> {
            if args.yes {
                return Ok(true);
            }
            Ok(Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
                .default(false)
                .interact()?)
        };

        let outcome = controller.delete_task(selected.as_ref(), confirm)?;
        let removed = outcome.is_some_and(|result| !result.is_miss());
        deleted(outcome, &id);
        if removed {
            session_only(controller);
        }
        Ok(())
    }))
}

pub fn show(controller: &mut TaskController, args: ShowArgs) -> Result<()> {
    let id = TaskId::from(args.id);
    report(select(controller, &id).map(|task| {
        if let Some(task) = task {
            View::task(&task);
        }
    }))
}

/// Menu-driven session. Runs until the user quits.
pub fn interactive(controller: &mut TaskController) -> Result<()> {
    let theme = ColorfulTheme::default();
    let actions = [
        Message::MenuList,
        Message::MenuFilter,
        Message::MenuAdd,
        Message::MenuEdit,
        Message::MenuDelete,
        Message::MenuQuit,
    ];
    let items: Vec<String> = actions.iter().map(|action| action.to_string()).collect();

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt(Message::PromptSelectAction.to_string())
            .items(&items)
            .default(0)
            .interact_opt()?;

        let outcome = match choice.map(|index| &actions[index]) {
            Some(Message::MenuList) => controller.load_tasks(TaskFilter::All).map(|tasks| render(&tasks, TaskFilter::All)),
            Some(Message::MenuFilter) => interactive_filter(controller, &theme),
            Some(Message::MenuAdd) => interactive_add(controller, &theme),
            Some(Message::MenuEdit) => interactive_edit(controller, &theme),
            Some(Message::MenuDelete) => interactive_delete(controller, &theme),
            _ => break,
        };

        // A failed action should not end the session.
        if let Err(err) = report(outcome) {
            msg_error!(err);
        }
    }

    Ok(())
}

fn interactive_filter(controller: &TaskController, theme: &ColorfulTheme) -> Result<()> {
    let mut items = vec![Message::FilterAll.to_string()];
    items.extend(TaskStatus::ALL.iter().map(|status| status.to_string()));

    let choice = Select::with_theme(theme)
        .with_prompt(Message::PromptFilter.to_string())
        .items(&items)
        .default(0)
        .interact()?;
    let raw = (choice > 0).then(|| items[choice].as_str());

    let filter = controller.resolve_filter(raw);
    render(&controller.load_tasks(filter)?, filter);
    Ok(())
}

fn interactive_add(controller: &mut TaskController, theme: &ColorfulTheme) -> Result<()> {
    let title: String = Input::with_theme(theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .allow_empty(true)
        .interact_text()?;
    let description: String = Input::with_theme(theme)
        .with_prompt(Message::PromptTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?;
    let status = prompt_status(theme, TaskStatus::Pending)?;

    controller.add_task(&title, &description, status)?;
    msg_success!(Message::TaskCreated(title));
    Ok(())
}

fn interactive_edit(controller: &mut TaskController, theme: &ColorfulTheme) -> Result<()> {
    let Some(task) = pick_task(controller, theme)? else {
        return Ok(());
    };

    let title: String = Input::with_theme(theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .with_initial_text(task.title.clone())
        .allow_empty(true)
        .interact_text()?;
    let description: String = Input::with_theme(theme)
        .with_prompt(Message::PromptTaskDescription.to_string())
        .with_initial_text(task.description.clone())
        .allow_empty(true)
        .interact_text()?;
    let status = prompt_status(theme, task.status)?;

    let selected = controller.selected().cloned();
    let result = controller.update_task(selected.as_ref(), &title, &description, status)?;
    if result.is_miss() {
        msg_error!(Message::TaskNotFound(task.id.to_string()));
    } else {
        msg_success!(Message::TaskUpdated);
    }
    Ok(())
}

fn interactive_delete(controller: &mut TaskController, theme: &ColorfulTheme) -> Result<()> {
    let Some(task) = pick_task(controller, theme)? else {
        return Ok(());
    };

    let selected = controller.selected().cloned();
    let outcome = controller.delete_task(selected.as_ref(), |_| {
        Ok(Confirm::with_theme(theme)
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?)
    })?;
    deleted(outcome, &task.id);
    Ok(())
}

/// Lets the user choose a task from the full list and selects it.
fn pick_task(controller: &mut TaskController, theme: &ColorfulTheme) -> Result<Option<Task>> {
    let tasks = controller.load_tasks(TaskFilter::All)?;
    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(None);
    }

    let items: Vec<String> = tasks.iter().map(|task| format!("{} [{}]", task.title, task.status)).collect();
    let Some(index) = Select::with_theme(theme)
        .with_prompt(Message::PromptSelectTask.to_string())
        .items(&items)
        .default(0)
        .interact_opt()?
    else {
        return Ok(None);
    };

    select(controller, &tasks[index].id)
}

fn prompt_status(theme: &ColorfulTheme, current: TaskStatus) -> Result<TaskStatus> {
    let items: Vec<String> = TaskStatus::ALL.iter().map(|status| status.to_string()).collect();
    let default = TaskStatus::ALL.iter().position(|status| *status == current).unwrap_or(0);
    let choice = Select::with_theme(theme)
        .with_prompt(Message::PromptTaskStatus.to_string())
        .items(&items)
        .default(default)
        .interact()?;

    Ok(TaskStatus::ALL[choice])
}

/// Selects `id`, reporting when no such task exists.
fn select(controller: &mut TaskController, id: &TaskId) -> Result<Option<Task>> {
    let task = controller.select_task(id)?;
    match &task {
        Some(task) => msg_print!(Message::TaskSelected(task.title.clone())),
        None => msg_error!(Message::TaskNotFound(id.to_string())),
    }
    Ok(task)
}

fn deleted(outcome: Option<MutateResult>, id: &TaskId) {
    match outcome {
        None => msg_info!(Message::OperationCancelled),
        Some(result) if result.is_miss() => msg_error!(Message::TaskNotFound(id.to_string())),
        Some(_) => msg_success!(Message::TaskDeleted),
    }
}

/// One-shot commands against the in-memory fallback lose their changes on exit.
fn session_only(controller: &TaskController) {
    if !controller.tasks().is_connected() {
        msg_warning!(Message::ChangesNotPersisted);
    }
}

fn render(tasks: &[Task], filter: TaskFilter) {
    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return;
    }
    msg_print!(Message::TasksHeader(filter.to_string()));
    View::tasks(tasks);
}

/// Shows input problems the way the user expects to see them and passes
/// everything else up.
fn report(outcome: Result<()>) -> Result<()> {
    let Err(err) = outcome else {
        return Ok(());
    };

    if let Some(validation) = err.downcast_ref::<ValidationError>() {
        msg_warning!(validation);
        return Ok(());
    }
    if let Some(store @ StoreError::MalformedId { .. }) = err.downcast_ref::<StoreError>() {
        msg_error!(Message::MalformedTaskId(store.to_string()));
        return Ok(());
    }

    Err(err)
}
