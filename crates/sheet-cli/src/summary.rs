use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ConvertResult;

pub fn print_summary(result: &ConvertResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Character"),
        header_cell("Race"),
        header_cell("Classes"),
        header_cell("Level"),
        header_cell("Hit Dice"),
        header_cell("Bytes"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(3) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    if let Some(column) = table.column_mut(5) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(or_dash(&result.character)).add_attribute(Attribute::Bold),
        Cell::new(or_dash(&result.race)),
        Cell::new(or_dash(&result.classes)),
        Cell::new(&result.level),
        Cell::new(or_dash(&result.hit_dice)),
        Cell::new(result.bytes),
    ]);
    println!("{table}");
    if result.written {
        println!("Output: {}", result.output_path.display());
    } else {
        println!("Output (dry run, not written): {}", result.output_path.display());
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).fg(Color::Cyan).add_attribute(Attribute::Bold)
}

fn or_dash(text: &str) -> &str {
    if text.is_empty() { "-" } else { text }
}
