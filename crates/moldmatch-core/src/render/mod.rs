pub mod export;
pub mod format;
pub mod table;
pub mod terminal;

pub use format::format_currency;
pub use table::{ComparisonTable, ModelCell, TableOptions, TableRow};
