use super::columns::{machine_from_row, RawRow};
use crate::error::Error;
use crate::model::MachineRecord;
use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use tracing::{debug, info};

/// Read machine rows from the named sheet of a workbook on disk.
pub fn read_machine_records(
    path: impl AsRef<Path>,
    sheet_name: &str,
) -> Result<Vec<MachineRecord>, Error> {
    let path = path.as_ref();
    debug!("Opening workbook {}", path.display());
    let mut workbook = open_workbook_auto(path)?;
    read_from_workbook(&mut workbook, sheet_name)
}

/// Read machine rows from an uploaded workbook held in memory.
pub fn read_machine_records_from_bytes(
    bytes: Vec<u8>,
    sheet_name: &str,
) -> Result<Vec<MachineRecord>, Error> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    read_from_workbook(&mut workbook, sheet_name)
}

fn read_from_workbook<RS: Read + Seek>(
    workbook: &mut Sheets<RS>,
    sheet_name: &str,
) -> Result<Vec<MachineRecord>, Error> {
    if !workbook.sheet_names().iter().any(|name| name == sheet_name) {
        return Err(Error::MissingSheet(sheet_name.to_string()));
    }

    let range = workbook.worksheet_range(sheet_name)?;
    let rows = range_to_rows(&range);
    let machines: Vec<MachineRecord> = rows.iter().map(machine_from_row).collect();
    info!("Read {} machine rows from sheet '{}'", machines.len(), sheet_name);
    Ok(machines)
}

/// First row is the header. Blank header cells drop their column; rows with
/// no filled cell are skipped.
pub fn range_to_rows(range: &Range<Data>) -> Vec<RawRow> {
    let mut rows = range.rows();
    let headers: Vec<Option<String>> = match rows.next() {
        Some(header_row) => header_row.iter().map(cell_text).collect(),
        None => return Vec::new(),
    };

    let mut result = Vec::new();
    for cells in rows {
        let mut row = RawRow::new();
        for (header, cell) in headers.iter().zip(cells.iter()) {
            if let (Some(header), Some(value)) = (header, cell_text(cell)) {
                row.insert(header.as_str(), value);
            }
        }
        if !row.is_empty() {
            result.push(row);
        }
    }
    result
}

/// Cell rendered as text. Whole floats print without a fractional part.
pub fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(f.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => Some(dt.as_f64().to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        _ => None,
    }
}
