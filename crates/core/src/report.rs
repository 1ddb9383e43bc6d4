use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed { target_path: PathBuf },
    SkippedNoDate,
    SkippedInvalidDate { raw_date: String },
    SkippedDestinationExists { target_path: PathBuf },
    SkippedError { cause: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileOutcome {
    pub original_path: PathBuf,
    pub outcome: RenameOutcome,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RenameStats {
    pub scanned_files: usize,
    pub image_files: usize,
    pub skipped_non_image: usize,
    pub skipped_hidden: usize,
    pub renamed: usize,
    pub skipped_no_date: usize,
    pub skipped_invalid_date: usize,
    pub skipped_existing: usize,
    pub skipped_error: usize,
}

impl RenameStats {
    pub fn record(&mut self, outcome: &RenameOutcome) {
        match outcome {
            RenameOutcome::Renamed { .. } => self.renamed += 1,
            RenameOutcome::SkippedNoDate => self.skipped_no_date += 1,
            RenameOutcome::SkippedInvalidDate { .. } => self.skipped_invalid_date += 1,
            RenameOutcome::SkippedDestinationExists { .. } => self.skipped_existing += 1,
            RenameOutcome::SkippedError { .. } => self.skipped_error += 1,
        }
    }

    pub fn skipped_total(&self) -> usize {
        self.skipped_no_date
            + self.skipped_invalid_date
            + self.skipped_existing
            + self.skipped_error
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameReport {
    pub folder: PathBuf,
    pub applied: bool,
    pub outcomes: Vec<FileOutcome>,
    pub stats: RenameStats,
}
