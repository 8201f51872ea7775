//! Board display

use crate::cli::OutputFormat;
use anyhow::Result;
use cardwall_board::{BoardPage, BoardService};
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;

/// Print a board's lists and cards with the drop-zone slot of each item
pub fn print_board<B: BoardService + 'static>(page: &BoardPage<B>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let snapshot = page.snapshot();
            let value = json!({
                "id": page.board_id(),
                "title": page.title(),
                "lists": snapshot.lists,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Table => {
            println!("{} (board {})", page.title(), page.board_id());
            println!("{}", board_table(page));
        }
    }
    Ok(())
}

/// One row per list followed by its cards. The slot column is the zone text a
/// drop in front of that item uses.
pub fn board_table<B: BoardService + 'static>(page: &BoardPage<B>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Slot", "Kind", "Id", "Title"]);

    for (li, list) in page.snapshot().lists.iter().enumerate() {
        table.add_row(vec![
            Cell::new(li),
            Cell::new("list"),
            Cell::new(list.id),
            Cell::new(&list.title),
        ]);
        for (ci, card) in list.cards.iter().enumerate() {
            table.add_row(vec![
                Cell::new(format!("{}-{}", li, ci)),
                Cell::new("card"),
                Cell::new(card.id),
                Cell::new(&card.title),
            ]);
        }
    }
    table
}
