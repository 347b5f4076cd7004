// I/O module
// CSV format handling and file readers

pub mod csv_format;
pub mod reader;

pub use csv_format::write_accounts_csv;
pub use reader::{read_account_seeds, CommandReader};
