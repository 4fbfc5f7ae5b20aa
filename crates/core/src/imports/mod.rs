//! Holding import - CSV decoding, header mapping and row validation.

mod csv_parser;
mod import_model;
mod import_service;


pub use csv_parser::{read_table, RawTable};
pub use import_model::{HoldingInput, ImportResult, ImportWarning};
pub use import_service::{HoldingImportService, SHARES_COLUMN, SYMBOL_COLUMN};
