pub mod init;
pub mod status;
pub mod task;

use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::controller::TaskController;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the database connection")]
    Init,
    #[command(about = "Show which storage backend is in use")]
    Status,
    #[command(about = "List tasks, optionally filtered by status")]
    List(task::ListArgs),
    #[command(about = "Add a task")]
    Add(task::AddArgs),
    #[command(about = "Edit a task")]
    Edit(task::EditArgs),
    #[command(about = "Delete a task")]
    Delete(task::DeleteArgs),
    #[command(about = "Show a single task")]
    Show(task::ShowArgs),
}

/// Without a subcommand the interactive menu is started.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        let Some(command) = cli.command else {
            return task::interactive(&mut connect()?.1);
        };

        match command {
            Commands::Init => init::cmd(),
            Commands::Status => {
                let (config, controller) = connect()?;
                status::cmd(&controller, &config)
            }
            Commands::List(args) => task::list(&connect()?.1, args),
            Commands::Add(args) => task::add(&mut connect()?.1, args),
            Commands::Edit(args) => task::edit(&mut connect()?.1, args),
            Commands::Delete(args) => task::delete(&mut connect()?.1, args),
            Commands::Show(args) => task::show(&mut connect()?.1, args),
        }
    }
}

/// Loads the configuration and probes the database once for this process.
fn connect() -> Result<(Config, TaskController)> {
    let config = Config::load()?;
    let controller = TaskController::new(Tasks::connect(&config.database));
    Ok((config, controller))
}
