use crate::model::{MachineRecord, ProductType};

/// Route a machine by its product-type text.
///
/// Matching both families, or neither, returns `None` and the machine is
/// left out of every view.
pub fn classify(product_type: &str) -> Option<ProductType> {
    let text = product_type.to_lowercase();
    match (text.contains("hydraulic"), text.contains("electric")) {
        (true, false) => Some(ProductType::Hydraulic),
        (false, true) => Some(ProductType::Electric),
        _ => None,
    }
}

/// Machines of one product family, in input order.
pub fn machines_of_type(machines: &[MachineRecord], product_type: ProductType) -> Vec<MachineRecord> {
    machines
        .iter()
        .filter(|m| classify(&m.product_type) == Some(product_type))
        .cloned()
        .collect()
}
