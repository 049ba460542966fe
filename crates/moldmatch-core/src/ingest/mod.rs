pub mod columns;
pub mod workbook;

pub use columns::{machine_from_row, RawRow};
pub use workbook::{read_machine_records, read_machine_records_from_bytes};
