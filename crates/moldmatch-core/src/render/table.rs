use super::format::format_currency;
use crate::model::{Group, MachineRecord, ReferenceSpecs};
use serde::Serialize;

/// Column selection for a rendered comparison.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// Manufacturers to place first, in this order (case-insensitive).
    pub manufacturer_order: Vec<String>,
    /// Show only the manufacturers named in `manufacturer_order`.
    pub only_listed: bool,
}

impl TableOptions {
    fn position(&self, manufacturer: &str) -> Option<usize> {
        self.manufacturer_order
            .iter()
            .position(|m| m.eq_ignore_ascii_case(manufacturer))
    }
}

/// Display fields of one machine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelCell {
    pub model_name: String,
    pub clamping_force: String,
    pub shot_size: String,
    pub screw_type: String,
    pub tie_bar_distance: String,
    pub injection_unit: String,
    pub sales_type: String,
    pub list_price: String,
    pub option_price: String,
    pub freight: String,
    pub sales_price: String,
    pub customer: String,
    pub checked_time: String,
}

impl From<&MachineRecord> for ModelCell {
    fn from(machine: &MachineRecord) -> Self {
        Self {
            model_name: machine.model_name.clone(),
            clamping_force: machine.clamping_force.clone(),
            shot_size: machine.shot_size.clone(),
            screw_type: machine.screw_type.clone(),
            tie_bar_distance: machine.tie_bar_distance.clone(),
            injection_unit: machine.injection_unit.clone().unwrap_or_default(),
            sales_type: machine.sales_type.clone(),
            list_price: format_currency(&machine.list_price),
            option_price: format_currency(&machine.option_price),
            freight: format_currency(&machine.freight),
            sales_price: format_currency(&machine.sales_price),
            customer: machine.customer.clone(),
            checked_time: machine.checked_time.clone(),
        }
    }
}

/// One rendered row. The first row of a group carries its reference specs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub group_index: usize,
    pub reference: Option<ReferenceSpecs>,
    /// Rows the reference block spans; zero on continuation rows.
    pub row_span: usize,
    /// One entry per manufacturer column.
    pub cells: Vec<Option<ModelCell>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub manufacturers: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl ComparisonTable {
    pub fn build(groups: &[Group], options: &TableOptions) -> Self {
        let manufacturers = manufacturer_columns(groups, options);
        let mut rows = Vec::new();

        for (group_index, group) in groups.iter().enumerate() {
            let models: Vec<&[MachineRecord]> =
                manufacturers.iter().map(|m| group.models(m)).collect();
            let visible = models.iter().any(|m| !m.is_empty());
            if options.only_listed && !visible {
                continue;
            }

            let span = models.iter().map(|m| m.len()).max().unwrap_or(0).max(1);
            for row_index in 0..span {
                rows.push(TableRow {
                    group_index,
                    reference: (row_index == 0).then(|| group.reference_specs.clone()),
                    row_span: if row_index == 0 { span } else { 0 },
                    cells: models
                        .iter()
                        .map(|m| m.get(row_index).map(ModelCell::from))
                        .collect(),
                });
            }
        }

        Self { manufacturers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Every manufacturer in first-seen order, then reordered and filtered by the options.
pub fn manufacturer_columns(groups: &[Group], options: &TableOptions) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for name in groups.iter().flat_map(Group::manufacturer_names) {
        if !seen.iter().any(|s| s == name) {
            seen.push(name.to_string());
        }
    }

    if options.only_listed {
        seen.retain(|name| options.position(name).is_some());
    }
    seen.sort_by_key(|name| options.position(name).unwrap_or(usize::MAX));
    seen
}
