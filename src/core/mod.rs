pub mod file_scanner;
pub mod key_usage;
pub mod prune;
pub mod string_table;

pub use file_scanner::{ScanOptions, collect_source_files};
pub use key_usage::UsageMatcher;
pub use prune::{PruneContext, UnusedKey};
pub use string_table::StringTable;
