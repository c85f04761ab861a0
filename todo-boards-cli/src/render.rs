//! Output formatting for boards

use crate::cli::OutputFormat;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use todo_boards::Boards;

/// Render boards in the requested format
pub fn render(boards: &Boards, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(boards)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(boards)?),
    }
}

/// One row per item, grouped under its board; empty boards get one row
pub fn render_table(boards: &Boards) -> String {
    if boards.is_empty() {
        return "No boards.".to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Board", "Board ID", "#", "Item", "Item ID"]);

    for board in boards {
        if board.items.is_empty() {
            table.add_row(vec![board.title.as_str(), board.id.as_str(), "", "", ""]);
            continue;
        }
        for (i, item) in board.items.iter().enumerate() {
            let (title, id) = if i == 0 {
                (board.title.as_str(), board.id.as_str())
            } else {
                ("", "")
            };
            table.add_row(vec![
                title.to_string(),
                id.to_string(),
                (i + 1).to_string(),
                item.text.clone(),
                item.id.to_string(),
            ]);
        }
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boards() -> Boards {
        serde_json::from_str(
            r#"[
            {"id":"b1","title":"Groceries","todos":[
                {"id":"i1","text":"Milk","boardId":"b1","createdAt":"2024-01-01T00:00:00Z"},
                {"id":"i2","text":"Eggs","boardId":"b1","createdAt":"2024-01-01T00:00:00Z"}
            ],"createdAt":"2024-01-01T00:00:00Z"},
            {"id":"b2","title":"Chores","todos":[],"createdAt":"2024-01-01T00:00:00Z"}
        ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_table_lists_everything() {
        let out = render_table(&boards());
        for needle in ["Groceries", "Milk", "Eggs", "Chores", "i2", "b2"] {
            assert!(out.contains(needle), "missing {needle} in\n{out}");
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(render_table(&Boards::new()), "No boards.");
    }

    #[test]
    fn test_json_is_the_stored_format() {
        let out = render(&boards(), OutputFormat::Json).unwrap();
        let parsed: Boards = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, boards());
    }
}
