//! Menu loop and dispatch
//!
//! One handler per menu entry; each gathers its inputs, calls a single
//! store operation, and prints the outcome. Core errors are displayed
//! and the loop returns to the menu.

use anyhow::Result;
use rustyline::DefaultEditor;
use tracing::debug;

use todo_core::task::TaskStore;

use crate::display;
use crate::input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddTask,
    ViewTasks,
    UpdateTask,
    DeleteTask,
    MarkComplete,
    MarkIncomplete,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddTask),
            "2" => Some(Self::ViewTasks),
            "3" => Some(Self::UpdateTask),
            "4" => Some(Self::DeleteTask),
            "5" => Some(Self::MarkComplete),
            "6" => Some(Self::MarkIncomplete),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether to keep showing the menu after a handler returns
enum Flow {
    Continue,
    Quit,
}

/// Run the menu loop until the user exits or closes the input stream
pub fn run(store: &mut TaskStore, editor: &mut DefaultEditor) -> Result<()> {
    println!("Welcome to the CLI Todo Application!");

    loop {
        display::print_menu();
        let Some(choice) = read_choice(editor)? else {
            break;
        };
        debug!(?choice, "menu choice");

        let flow = match choice {
            MenuChoice::AddTask => add_task(store, editor)?,
            MenuChoice::ViewTasks => {
                display::print_tasks(&store.list());
                Flow::Continue
            }
            MenuChoice::UpdateTask => update_task(store, editor)?,
            MenuChoice::DeleteTask => delete_task(store, editor)?,
            MenuChoice::MarkComplete => mark_complete(store, editor)?,
            MenuChoice::MarkIncomplete => mark_incomplete(store, editor)?,
            MenuChoice::Exit => Flow::Quit,
        };

        if let Flow::Quit = flow {
            break;
        }
    }

    println!("Thank you for using the CLI Todo Application. Goodbye!");
    Ok(())
}

fn read_choice(editor: &mut DefaultEditor) -> Result<Option<MenuChoice>> {
    loop {
        let Some(line) = input::read_line(editor, "Enter choice (1-7): ")? else {
            return Ok(None);
        };
        match MenuChoice::parse(&line) {
            Some(choice) => return Ok(Some(choice)),
            None => println!("Invalid choice. Please enter a number between 1 and 7."),
        }
    }
}

fn add_task(store: &mut TaskStore, editor: &mut DefaultEditor) -> Result<Flow> {
    let Some(text) = input::read_task_text(editor, "Enter task: ")? else {
        return Ok(Flow::Quit);
    };
    match store.create(&text) {
        Ok(task) => {
            debug!(id = task.id, "task created");
            println!("Task added successfully with ID {}", task.id);
        }
        Err(e) => display::print_error(&e),
    }
    Ok(Flow::Continue)
}

fn update_task(store: &mut TaskStore, editor: &mut DefaultEditor) -> Result<Flow> {
    let Some(id) = input::read_task_id(editor, "Enter task ID to update: ")? else {
        return Ok(Flow::Quit);
    };
    let Some(text) = input::read_task_text(editor, "Enter task: ")? else {
        return Ok(Flow::Quit);
    };
    match store.update(id, &text) {
        Ok(task) => {
            debug!(id = task.id, "task updated");
            println!("Task {} updated successfully", task.id);
        }
        Err(e) => display::print_error(&e),
    }
    Ok(Flow::Continue)
}

fn delete_task(store: &mut TaskStore, editor: &mut DefaultEditor) -> Result<Flow> {
    let Some(id) = input::read_task_id(editor, "Enter task ID to delete: ")? else {
        return Ok(Flow::Quit);
    };
    match store.delete(id) {
        Ok(task) => {
            debug!(id = task.id, "task deleted");
            println!("Task {} deleted successfully", task.id);
        }
        Err(e) => display::print_error(&e),
    }
    Ok(Flow::Continue)
}

fn mark_complete(store: &mut TaskStore, editor: &mut DefaultEditor) -> Result<Flow> {
    let Some(id) = input::read_task_id(editor, "Enter task ID to mark complete: ")? else {
        return Ok(Flow::Quit);
    };
    match store.mark_complete(id) {
        Ok(task) => {
            debug!(id = task.id, "task marked complete");
            println!("Task {} marked as complete", task.id);
        }
        Err(e) => display::print_error(&e),
    }
    Ok(Flow::Continue)
}

fn mark_incomplete(store: &mut TaskStore, editor: &mut DefaultEditor) -> Result<Flow> {
    let Some(id) = input::read_task_id(editor, "Enter task ID to mark incomplete: ")? else {
        return Ok(Flow::Quit);
    };
    match store.mark_incomplete(id) {
        Ok(task) => {
            debug!(id = task.id, "task marked incomplete");
            println!("Task {} marked as incomplete", task.id);
        }
        Err(e) => display::print_error(&e),
    }
    Ok(Flow::Continue)
}
