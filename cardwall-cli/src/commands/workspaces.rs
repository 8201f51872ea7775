//! Workspace listing

use crate::cli::OutputFormat;
use anyhow::Result;
use cardwall_api::WorkspaceResponse;
use comfy_table::{presets::UTF8_FULL, Table};

pub fn print_workspaces(workspaces: &[WorkspaceResponse], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(workspaces)?),
        OutputFormat::Table => {
            if workspaces.is_empty() {
                println!("No workspaces");
                return Ok(());
            }
            println!("{}", workspaces_table(workspaces));
        }
    }
    Ok(())
}

pub fn workspaces_table(workspaces: &[WorkspaceResponse]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Workspace", "Board", "Title"]);

    for workspace in workspaces {
        let name = format!("{} ({})", workspace.title, workspace.id);
        if workspace.boards.is_empty() {
            table.add_row(vec![name, "-".to_string(), String::new()]);
            continue;
        }
        for board in &workspace.boards {
            table.add_row(vec![name.clone(), board.id.to_string(), board.title.clone()]);
        }
    }
    table
}
