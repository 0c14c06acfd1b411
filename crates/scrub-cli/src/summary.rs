//! Terminal summaries for scrub runs and the configured rule set.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use scrub_model::FieldRule;

use crate::commands::describe_check;
use crate::types::ChunkResult;

pub fn print_summary(result: &ChunkResult) {
    println!("Chunk: {}", result.chunk);
    println!("Output: {}", result.output_dir.display());
    if let Some(artifacts) = &result.artifacts {
        println!("Clean data: {}", artifacts.clean.display());
        println!("Hard rejects: {}", artifacts.hard_rejects.display());
        println!("Soft rejects: {}", artifacts.soft_rejects.display());
    }
    if let Some(path) = &result.summary_path {
        println!("Summary: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Phase"),
        header_cell("Rejected rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (field, count) in &result.hard_counts {
        table.add_row(vec![
            Cell::new(field),
            phase_cell("hard"),
            count_cell(*count, Color::Red),
        ]);
    }
    for (field, count) in &result.soft_counts {
        table.add_row(vec![
            Cell::new(field),
            phase_cell("soft"),
            count_cell(*count, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL rows excluded")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        phase_cell("hard"),
        count_cell(result.hard_rows, Color::Red).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("TOTAL rows with nulled fields")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        phase_cell("soft"),
        count_cell(result.soft_rows, Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!(
        "{} of {} rows clean, {} fields nulled",
        result.rows_clean, result.rows_in, result.soft_field_hits
    );
}

pub fn print_fields(mandatory: &[(String, FieldRule)], optional: &[(String, FieldRule)]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Phase"),
        header_cell("Validation"),
        header_cell("Generates"),
        header_cell("Post-processing"),
        header_cell("Drops source"),
    ]);
    apply_table_style(&mut table);
    for (field, rule) in mandatory {
        table.add_row(field_row(field, "hard", rule));
    }
    for (field, rule) in optional {
        table.add_row(field_row(field, "soft", rule));
    }
    println!("{table}");
}

fn field_row(field: &str, phase: &str, rule: &FieldRule) -> Vec<Cell> {
    let generates: Vec<&str> = rule
        .generators
        .iter()
        .flat_map(|generator| generator.outputs.iter().copied())
        .collect();
    let generates = if generates.is_empty() {
        "-".to_string()
    } else {
        generates.join(", ")
    };
    let post = if rule.post_process.is_empty() {
        "-".to_string()
    } else {
        format!("{} step(s)", rule.post_process.len())
    };
    vec![
        Cell::new(field).fg(Color::Blue).add_attribute(Attribute::Bold),
        phase_cell(phase),
        Cell::new(describe_check(rule)),
        Cell::new(generates),
        Cell::new(post),
        Cell::new(if rule.drop_field { "yes" } else { "-" }),
    ]
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn phase_cell(phase: &str) -> Cell {
    match phase {
        "hard" => Cell::new("HARD").fg(Color::Red),
        _ => Cell::new("SOFT").fg(Color::Yellow),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
