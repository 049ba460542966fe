#![allow(dead_code)]

use moldmatch_core::MachineRecord;
use rust_xlsxwriter::Workbook;
use std::path::Path;

pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

/// Write a single-sheet workbook; the first row is the header.
pub fn write_workbook(path: &Path, sheet_name: &str, rows: &[Vec<Cell>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name).unwrap();
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string(r as u32, c as u16, *text).unwrap();
                }
                Cell::Number(n) => {
                    worksheet.write_number(r as u32, c as u16, *n).unwrap();
                }
                Cell::Blank => {}
            }
        }
    }
    workbook.save(path).unwrap();
}

pub fn header() -> Vec<Cell<'static>> {
    [
        "Manufacturer",
        "Model Name",
        "Product Type",
        "Clamping Force (US Ton)",
        "Screw Type",
        "Shot Size",
        "Sales Price",
        "Checked Time",
        "Performance",
    ]
    .into_iter()
    .map(Cell::Text)
    .collect()
}

#[allow(clippy::too_many_arguments)]
pub fn machine_row<'a>(
    manufacturer: &'a str,
    model: &'a str,
    product_type: &'a str,
    force: f64,
    screw: &'a str,
    shot: &'a str,
    price: f64,
    checked: &'a str,
    performance: Option<&'a str>,
) -> Vec<Cell<'a>> {
    vec![
        Cell::Text(manufacturer),
        Cell::Text(model),
        Cell::Text(product_type),
        Cell::Number(force),
        Cell::Text(screw),
        Cell::Text(shot),
        Cell::Number(price),
        Cell::Text(checked),
        performance.map(Cell::Text).unwrap_or(Cell::Blank),
    ]
}

/// Sample sheet: three comparable hydraulic machines around 400 t, one
/// electric machine, one hybrid that belongs to neither family.
pub fn sample_rows() -> Vec<Vec<Cell<'static>>> {
    vec![
        header(),
        machine_row("Engel", "duo 400", "Hydraulic", 410.0, "Standard", "48", 250000.0, "01.2023", None),
        machine_row("Engel", "duo 400 pico", "Hydraulic", 415.0, "standard", "52", 240000.0, "06.2023", None),
        machine_row("Haitian", "MA 4000", "Hydraulic", 390.0, "Standard", "50", 150000.0, "03.2023", None),
        machine_row("Arburg", "allrounder 570 A", "Electric Servo", 220.0, "Barrier", "20", 310000.0, "02.2023", Some("High")),
        machine_row("Yizumi", "UN 400 SK", "Hybrid", 400.0, "Standard", "50", 120000.0, "05.2023", None),
    ]
}

pub fn record(manufacturer: &str, product_type: &str, force: &str, shot: &str, screw: &str, checked: &str) -> MachineRecord {
    MachineRecord {
        manufacturer: manufacturer.to_string(),
        product_type: product_type.to_string(),
        clamping_force: force.to_string(),
        shot_size: shot.to_string(),
        screw_type: screw.to_string(),
        checked_time: checked.to_string(),
        ..Default::default()
    }
}
