//! Rendering for the interactive shell

use colored::Colorize;

use todo_core::task::{Task, TaskStatus};
use todo_core::Error;

/// Symbol shown next to a task in the list view
pub fn status_symbol(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Completed => "✓",
        TaskStatus::Pending => "○",
    }
}

pub fn print_menu() {
    println!("\n=== TODO APPLICATION ===");
    println!("1. Add Task");
    println!("2. View Tasks");
    println!("3. Update Task");
    println!("4. Delete Task");
    println!("5. Mark Complete");
    println!("6. Mark Incomplete");
    println!("7. Exit");
    println!();
}

pub fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("\nYour task list is empty.");
        return;
    }

    println!("\n--- TASK LIST ---");
    for task in tasks {
        let symbol = match task.status {
            TaskStatus::Completed => status_symbol(task.status).green().to_string(),
            TaskStatus::Pending => status_symbol(task.status).to_string(),
        };
        println!("{}. [{}] {}", task.id, symbol, task.text);
    }
    println!("-----------------");
}

pub fn print_error(err: &Error) {
    println!("{}", format!("Error: {}", err).red());
}
