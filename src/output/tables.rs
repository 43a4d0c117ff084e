use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color as TableColor, ContentArrangement, Table};

/// Table and cell creation helpers
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn header_cells(labels: &[&str]) -> Vec<Cell> {
    labels
        .iter()
        .map(|label| Cell::new(*label).fg(TableColor::Cyan))
        .collect()
}

/// Color a job outcome: green for success, red for hard failures, yellow
/// for everything in between (skipped, cancelled, still running).
pub fn result_cell(outcome: &str) -> Cell {
    match outcome {
        "success" => Cell::new(outcome).fg(TableColor::Green),
        "failure" | "timed_out" | "startup_failure" => Cell::new(outcome).fg(TableColor::Red),
        _ => Cell::new(outcome).fg(TableColor::Yellow),
    }
}
