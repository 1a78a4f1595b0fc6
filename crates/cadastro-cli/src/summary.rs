use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use cadastro_model::ValidationResult;

use crate::commands::Outcome;

pub fn print_outcome(outcome: &Outcome) {
    if outcome.result.is_valid() {
        println!("{}: válido", outcome.kind);
        return;
    }
    println!(
        "{}: inválido ({} campo(s) com erro)",
        outcome.kind,
        outcome.result.error_field_count()
    );
    print_error_table(&outcome.result);
}

fn print_error_table(result: &ValidationResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Campo"), header_cell("Mensagem")]);
    apply_table_style(&mut table);
    for (field, messages) in result.iter() {
        for message in messages {
            table.add_row(vec![field_cell(field), Cell::new(message)]);
        }
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn field_cell(field: &str) -> Cell {
    Cell::new(field)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}
