use crate::model::MachineRecord;

pub const MANUFACTURER: &[&str] = &["Manufacturer"];
pub const MODEL_SERIES: &[&str] = &["Model Series"];
pub const MODEL_NAME: &[&str] = &["Model Name"];
pub const PRODUCT_TYPE: &[&str] = &["Product Type"];
pub const CLAMPING_FORCE: &[&str] = &[
    "Clamping force (US Ton)",
    "Clamping Force (US Ton)",
    "Clamping Force",
];
pub const SCREW_TYPE: &[&str] = &["Screw Type"];
pub const SCREW_DIAMETER: &[&str] = &["Screw Diameter"];
pub const TIE_BAR_DISTANCE: &[&str] = &["Tie-bar Distance", "Tie-Bar Distance", "Tiebar Distance"];
pub const SCREW_STROKE: &[&str] = &["Screw Stroke"];
pub const SHOT_SIZE: &[&str] = &["Shot size", "Shot Size"];
pub const OPTION_PRICE: &[&str] = &["Option Price"];
pub const FREIGHT: &[&str] = &["Freight"];
pub const LIST_PRICE: &[&str] = &["List Price"];
pub const SALES_PRICE: &[&str] = &["Sales Price"];
pub const CUSTOMER: &[&str] = &["Customer"];
pub const CHECKED_TIME: &[&str] = &["Checked Time"];
pub const SALES_TYPE: &[&str] = &["Sales Type"];
pub const PERFORMANCE: &[&str] = &["Performance"];
pub const INJECTION_UNIT: &[&str] = &["Injection Unit"];

/// One sheet row as (header, cell text) pairs. Blank cells are absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: Vec<(String, String)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        self.cells.push((header.into(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Text under the first matching header.
    ///
    /// Synonyms are tried in order; for each, an exact header match wins over
    /// a case-insensitive one. No match gives `""`.
    pub fn value(&self, synonyms: &[&str]) -> &str {
        for key in synonyms {
            if let Some((_, v)) = self.cells.iter().find(|(h, _)| h == key) {
                return v;
            }
            let lowered = key.to_lowercase();
            if let Some((_, v)) = self.cells.iter().find(|(h, _)| h.to_lowercase() == lowered) {
                return v;
            }
        }
        ""
    }

    fn optional(&self, synonyms: &[&str]) -> Option<String> {
        let value = self.value(synonyms);
        if value.trim().is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

impl<H: Into<String>, V: Into<String>> FromIterator<(H, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (H, V)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (h, v) in iter {
            row.insert(h, v);
        }
        row
    }
}

pub fn machine_from_row(row: &RawRow) -> MachineRecord {
    MachineRecord {
        manufacturer: row.value(MANUFACTURER).to_string(),
        model_series: row.value(MODEL_SERIES).to_string(),
        model_name: row.value(MODEL_NAME).to_string(),
        product_type: row.value(PRODUCT_TYPE).to_string(),
        clamping_force: row.value(CLAMPING_FORCE).to_string(),
        screw_type: row.value(SCREW_TYPE).to_string(),
        screw_diameter: row.value(SCREW_DIAMETER).to_string(),
        tie_bar_distance: row.value(TIE_BAR_DISTANCE).to_string(),
        screw_stroke: row.value(SCREW_STROKE).to_string(),
        shot_size: row.value(SHOT_SIZE).to_string(),
        option_price: row.value(OPTION_PRICE).to_string(),
        freight: row.value(FREIGHT).to_string(),
        list_price: row.value(LIST_PRICE).to_string(),
        sales_price: row.value(SALES_PRICE).to_string(),
        customer: row.value(CUSTOMER).to_string(),
        checked_time: row.value(CHECKED_TIME).to_string(),
        sales_type: row.value(SALES_TYPE).to_string(),
        performance: row.optional(PERFORMANCE),
        injection_unit: row.optional(INJECTION_UNIT),
    }
}
