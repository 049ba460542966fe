use super::format::{format_bucket, or_dash};
use super::table::{ComparisonTable, ModelCell, TableOptions};
use crate::model::{ComparisonResult, Group, ProductType, ReferenceSpecs};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};

pub fn empty_message(product_type: ProductType) -> String {
    format!("No {} machines found in the uploaded data.", product_type.as_str())
}

fn reference_text(specs: &ReferenceSpecs) -> String {
    let mut text = format!(
        "Clamping Force: {} US Ton\nShot Size: {}\nScrew Type: {}",
        format_bucket(specs.clamping_force),
        format_bucket(specs.shot_size),
        or_dash(&specs.screw_type),
    );
    if let Some(tier) = specs.performance {
        text.push_str(&format!("\nPerformance: {}", tier));
    }
    text
}

fn model_text(cell: &ModelCell) -> String {
    let mut lines = vec![
        or_dash(&cell.model_name).to_string(),
        format!("Clamping Force: {} US Ton", or_dash(&cell.clamping_force)),
        format!("Tie-bar Distance: {}", or_dash(&cell.tie_bar_distance)),
        format!("Screw Type: {}", or_dash(&cell.screw_type)),
        format!("Shot Size: {}", or_dash(&cell.shot_size)),
    ];
    if !cell.injection_unit.is_empty() {
        lines.push(format!("Injection Unit: {}", cell.injection_unit));
    }
    lines.push(format!("Sales Type: {}", or_dash(&cell.sales_type)));
    lines.push(format!("List Price: {}", or_dash(&cell.list_price)));
    lines.push(format!("Option Price: {}", or_dash(&cell.option_price)));
    lines.push(format!("Freight: {}", or_dash(&cell.freight)));
    lines.push(format!("Sales Price: {}", or_dash(&cell.sales_price)));
    if !cell.customer.is_empty() {
        lines.push(format!("Customer: {}", cell.customer));
    }
    lines.push(format!("Checked: {}", or_dash(&cell.checked_time)));
    lines.join("\n")
}

/// One product family as a terminal table, or the empty-view message.
pub fn render_groups(groups: &[Group], product_type: ProductType, options: &TableOptions) -> String {
    let model = ComparisonTable::build(groups, options);
    if model.is_empty() {
        return empty_message(product_type);
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Reference Specs")];
    header.extend(model.manufacturers.iter().map(Cell::new));
    table.set_header(header);

    for row in &model.rows {
        let mut cells = vec![Cell::new(
            row.reference.as_ref().map(reference_text).unwrap_or_default(),
        )];
        cells.extend(row.cells.iter().map(|cell| match cell {
            Some(cell) => Cell::new(model_text(cell)),
            None => Cell::new("—"),
        }));
        table.add_row(cells);
    }

    table.to_string()
}

/// Both product families, each under a heading with its group count.
pub fn render_result(result: &ComparisonResult, options: &TableOptions) -> String {
    ProductType::ALL
        .iter()
        .map(|&product_type| {
            let groups = result.groups(product_type);
            format!(
                "{} Machines ({} groups)\n{}",
                product_type,
                groups.len(),
                render_groups(groups, product_type, options)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
