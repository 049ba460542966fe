use super::format::format_bucket;
use crate::error::Error;
use crate::model::{ComparisonResult, ProductType};
use std::io::Write;

const HEADER: [&str; 22] = [
    "Product Type",
    "Group",
    "Reference Clamping Force",
    "Reference Shot Size",
    "Reference Screw Type",
    "Reference Performance",
    "Manufacturer",
    "Model Series",
    "Model Name",
    "Clamping Force",
    "Shot Size",
    "Screw Type",
    "Tie-bar Distance",
    "Injection Unit",
    "Sales Type",
    "List Price",
    "Option Price",
    "Freight",
    "Sales Price",
    "Customer",
    "Checked Time",
    "Performance",
];

/// Write one CSV line per machine, groups numbered from 1 within each product type.
/// Returns the number of machine lines written.
pub fn write_csv<W: Write>(result: &ComparisonResult, writer: W) -> Result<usize, Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;
    let mut written = 0;

    for product_type in ProductType::ALL {
        for (index, group) in result.groups(product_type).iter().enumerate() {
            let specs = &group.reference_specs;
            let group_number = (index + 1).to_string();
            let force = format_bucket(specs.clamping_force);
            let shot = format_bucket(specs.shot_size);
            let tier = specs.performance.map(|t| t.to_string()).unwrap_or_default();
            let product_label = product_type.to_string();

            for models in &group.manufacturers {
                for machine in &models.machines {
                    wtr.write_record([
                        product_label.as_str(),
                        group_number.as_str(),
                        force.as_str(),
                        shot.as_str(),
                        specs.screw_type.as_str(),
                        tier.as_str(),
                        models.manufacturer.as_str(),
                        machine.model_series.as_str(),
                        machine.model_name.as_str(),
                        machine.clamping_force.as_str(),
                        machine.shot_size.as_str(),
                        machine.screw_type.as_str(),
                        machine.tie_bar_distance.as_str(),
                        machine.injection_unit.as_deref().unwrap_or(""),
                        machine.sales_type.as_str(),
                        machine.list_price.as_str(),
                        machine.option_price.as_str(),
                        machine.freight.as_str(),
                        machine.sales_price.as_str(),
                        machine.customer.as_str(),
                        machine.checked_time.as_str(),
                        machine.performance_text(),
                    ])?;
                    written += 1;
                }
            }
        }
    }

    wtr.flush()?;
    Ok(written)
}
