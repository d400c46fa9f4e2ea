mod formatters;

use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use formatters::{format_default, format_required, format_tags};
use indexmap::IndexMap;

use crate::commands::OptionRow;
use crate::registry::Registry;

pub fn print_summary<T: AsRef<str>>(registry: &Registry, tags: &[T], selected: usize) {
    println!(
        "✓ {} of {} declared options selected for {}",
        selected,
        registry.len(),
        format_tags(tags)
    );
}

fn header(names: &[&str]) -> Vec<Cell> {
    names
        .iter()
        .map(|name| Cell::new(name).add_attribute(Attribute::Bold))
        .collect()
}

pub fn print_options(rows: &[OptionRow]) {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header(&[
            "Flag", "Tags", "Action", "Type", "Default", "Required", "Dest",
        ]));

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.spellings),
            Cell::new(&row.tags),
            Cell::new(row.action),
            Cell::new(row.value_type),
            Cell::new(format_default(&row.default)),
            Cell::new(format_required(row.required)),
            Cell::new(&row.dest),
        ]);
    }

    println!("{table}");
}

pub fn print_values(values: &IndexMap<String, String>) {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header(&["Dest", "Value"]));

    for (dest, value) in values {
        table.add_row(vec![Cell::new(dest), Cell::new(value)]);
    }

    println!("{table}");
}
