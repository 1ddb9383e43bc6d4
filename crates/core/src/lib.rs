mod config;
mod exif_reader;
mod naming;
mod renamer;
mod report;

#[cfg(test)]
mod jpeg_fixture;

pub use config::{app_paths, load_config, AppConfig, AppPaths};
pub use exif_reader::extract_capture_date;
pub use naming::{canonical_stem, NamingError, CANONICAL_SUFFIX};
pub use renamer::{rename_folder, RenameOptions};
pub use report::{FileOutcome, RenameOutcome, RenameReport, RenameStats};
