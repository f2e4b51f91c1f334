use crate::modules::checklist::commands::{ChecklistResponse, UpdateProgressResponse};
use crate::shared::errors::{AppError, AppResult};

pub const USAGE: &str = "\
Usage:
  brick-checklist show <set>
  brick-checklist add <set> <part> <color>
  brick-checklist remove <set> <part> <color>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Show {
        set: String,
    },
    Add {
        set: String,
        part: String,
        color: String,
    },
    Remove {
        set: String,
        part: String,
        color: String,
    },
}

impl CliCommand {
    /// Parse arguments without the program name
    pub fn parse<I, S>(args: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let usage = || AppError::ValidationError(USAGE.to_string());

        match args.as_slice() {
            [cmd, set] if cmd == "show" => Ok(CliCommand::Show { set: set.clone() }),
            [cmd, set, part, color] if cmd == "add" => Ok(CliCommand::Add {
                set: set.clone(),
                part: part.clone(),
                color: color.clone(),
            }),
            [cmd, set, part, color] if cmd == "remove" => Ok(CliCommand::Remove {
                set: set.clone(),
                part: part.clone(),
                color: color.clone(),
            }),
            _ => Err(usage()),
        }
    }

    pub fn set(&self) -> &str {
        match self {
            CliCommand::Show { set }
            | CliCommand::Add { set, .. }
            | CliCommand::Remove { set, .. } => set,
        }
    }
}

pub fn render_checklist(checklist: &ChecklistResponse) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} ({})\n",
        checklist.display_name.as_deref().unwrap_or("-"),
        checklist.identifier.as_deref().unwrap_or("no set loaded")
    ));
    out.push_str(&format!(
        "{} / {} parts ({:.0}%)\n",
        checklist.progress.collected, checklist.progress.required, checklist.progress.percent
    ));

    for row in &checklist.components {
        out.push_str(&format!(
            "[{}] {:>3}/{:<3} {} ({}) #{} color {}\n",
            if row.is_complete { "x" } else { " " },
            row.collected,
            row.quantity,
            row.name,
            row.variant_name,
            row.key.component_id,
            row.key.variant_id
        ));
    }
    out
}

pub fn render_update(update: &UpdateProgressResponse) -> String {
    format!(
        "#{} color {}: {} collected ({} / {} parts)",
        update.component_id,
        update.variant_id,
        update.collected,
        update.progress.collected,
        update.progress.required
    )
}
