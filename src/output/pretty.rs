use std::fmt::Write;

use colored::Colorize;

use crate::parser::{Command, EntryArgs, EntryType};

/// Format a parsed command for the terminal
pub fn format_command_pretty(command: &Command) -> String {
    match command {
        Command::AddEntry(entry) => format_entry_pretty(entry),
        Command::Modify { position } => format!("{} #{position}", "Modify".cyan().bold()),
        Command::Sort { criterion } => format!("{} by {criterion}", "Sort".cyan().bold()),
        Command::Complete { index } => format!("{} {index}", "Done".green().bold()),
        Command::Remove { index } => format!("{} {index}", "Remove".red().bold()),
        Command::Find { term } => format!("{} \"{term}\"", "Find".cyan().bold()),
        Command::List => "List".cyan().bold().to_string(),
        Command::AddTodo { description } => format_task_pretty("Todo", description),
        Command::AddEvent { description } => format_task_pretty("Event", description),
        Command::AddDeadline { description } => format_task_pretty("Deadline", description),
        Command::Undo => "Undo".yellow().bold().to_string(),
        Command::Redo => "Redo".yellow().bold().to_string(),
        Command::SwitchMode { mode } => format!("{} {mode}", "Mode:".magenta().bold()),
        Command::Exit => "Bye. Hope to see you again soon!".to_string(),
        Command::Error { kind } => format!("{} {kind:?}", "Error:".red().bold()),
    }
}

/// Format an entry with its date and tag on their own lines
fn format_entry_pretty(entry: &EntryArgs) -> String {
    let kind = match entry.entry_type {
        EntryType::Income => entry.entry_type.as_str().green(),
        EntryType::Expense => entry.entry_type.as_str().red(),
    };

    let mut output = format!(
        "{} {kind} {:.2} {}\n",
        "Entry:".cyan().bold(),
        entry.amount,
        entry.fields.description.bold()
    );
    writeln!(output, "  {} {}", "On:".dimmed(), entry.fields.date.format("%Y-%m-%d")).ok();
    if let Some(tag) = &entry.fields.tag {
        writeln!(output, "  {} {}", "Tag:".dimmed(), format!("#{tag}").yellow()).ok();
    }

    output
}

fn format_task_pretty(label: &str, description: &str) -> String {
    if description.is_empty() {
        return format!("{} {}", format!("{label}:").cyan().bold(), "(no description)".dimmed());
    }
    format!("{} {description}", format!("{label}:").cyan().bold())
}
