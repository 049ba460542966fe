use serde::{Deserialize, Serialize};
use std::fmt;

/// Manufacturer bucket used when the manufacturer cell is blank.
pub const UNKNOWN_MANUFACTURER: &str = "Unknown";

/// One row of the machine sheet, kept as the text that was ingested.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineRecord {
    pub manufacturer: String,
    pub model_series: String,
    pub model_name: String,
    pub product_type: String,
    pub clamping_force: String,
    pub screw_type: String,
    pub screw_diameter: String,
    pub tie_bar_distance: String,
    pub screw_stroke: String,
    pub shot_size: String,
    pub option_price: String,
    pub freight: String,
    pub list_price: String,
    pub sales_price: String,
    pub customer: String,
    /// "MM.YYYY" period the price was last checked.
    pub checked_time: String,
    pub sales_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injection_unit: Option<String>,
}

impl MachineRecord {
    /// Manufacturer name used for grouping; blank collapses to "Unknown".
    pub fn manufacturer_key(&self) -> &str {
        let trimmed = self.manufacturer.trim();
        if trimmed.is_empty() {
            UNKNOWN_MANUFACTURER
        } else {
            trimmed
        }
    }

    pub fn performance_text(&self) -> &str {
        self.performance.as_deref().unwrap_or("")
    }
}

/// Coarse feature level of a machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerformanceTier {
    Standard,
    High,
    Multi,
}

impl PerformanceTier {
    pub fn as_key(&self) -> &'static str {
        match self {
            PerformanceTier::Standard => "standard",
            PerformanceTier::High => "high",
            PerformanceTier::Multi => "multi",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PerformanceTier::Standard => "Standard",
            PerformanceTier::High => "High",
            PerformanceTier::Multi => "Multi",
        };
        f.write_str(label)
    }
}

/// The bucketed spec shared by every machine in a group.
///
/// Fixed by the first machine inserted into the group; later members never
/// change it, so only that machine's screw-type spelling is shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceSpecs {
    pub clamping_force: f64,
    pub shot_size: f64,
    pub screw_type: String,
    /// Present only for the high and multi tiers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceTier>,
}

/// Machines of one manufacturer inside a group, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManufacturerModels {
    pub manufacturer: String,
    pub machines: Vec<MachineRecord>,
}

/// An equivalence class of comparable machines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub reference_specs: ReferenceSpecs,
    /// Manufacturers in first-seen order.
    pub manufacturers: Vec<ManufacturerModels>,
}

impl Group {
    pub fn new(reference_specs: ReferenceSpecs) -> Self {
        Self {
            reference_specs,
            manufacturers: Vec::new(),
        }
    }

    pub fn models(&self, manufacturer: &str) -> &[MachineRecord] {
        self.manufacturers
            .iter()
            .find(|m| m.manufacturer == manufacturer)
            .map(|m| m.machines.as_slice())
            .unwrap_or(&[])
    }

    pub fn manufacturer_names(&self) -> impl Iterator<Item = &str> {
        self.manufacturers.iter().map(|m| m.manufacturer.as_str())
    }

    pub fn machine_count(&self) -> usize {
        self.manufacturers.iter().map(|m| m.machines.len()).sum()
    }
}

/// Product family a machine is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Hydraulic,
    Electric,
}

impl ProductType {
    pub const ALL: [ProductType; 2] = [ProductType::Hydraulic, ProductType::Electric];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Hydraulic => "hydraulic",
            ProductType::Electric => "electric",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductType::Hydraulic => f.write_str("Hydraulic"),
            ProductType::Electric => f.write_str("Electric"),
        }
    }
}

/// Ordered groups for each product family.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub hydraulic: Vec<Group>,
    pub electric: Vec<Group>,
}

impl ComparisonResult {
    pub fn groups(&self, product_type: ProductType) -> &[Group] {
        match product_type {
            ProductType::Hydraulic => &self.hydraulic,
            ProductType::Electric => &self.electric,
        }
    }

    pub fn machine_count(&self) -> usize {
        self.hydraulic
            .iter()
            .chain(self.electric.iter())
            .map(Group::machine_count)
            .sum()
    }
}

/// Both renderings of one upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonViews {
    /// Newest record per manufacturer per group.
    pub representative: ComparisonResult,
    /// Every classified record.
    pub entire: ComparisonResult,
}
