use super::task::Task;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["#", "ID", "TITLE", "DESCRIPTION", "STATUS"]);
        for (index, task) in tasks.iter().enumerate() {
            table.add_row(row![index + 1, task.id, task.title, task.description, task.status]);
        }
        table.printstd();
    }

    pub fn task(task: &Task) {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id]);
        table.add_row(row!["TITLE", task.title]);
        table.add_row(row!["DESCRIPTION", task.description]);
        table.add_row(row!["STATUS", task.status]);
        table.printstd();
    }
}
