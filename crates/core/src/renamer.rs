use crate::exif_reader::extract_capture_date;
use crate::naming::{canonical_stem, CANONICAL_SUFFIX};
use crate::report::{FileOutcome, RenameOutcome, RenameReport, RenameStats};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct RenameOptions {
    pub folder: PathBuf,
    pub include_hidden: bool,
    pub apply: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            folder: PathBuf::new(),
            include_hidden: false,
            apply: false,
        }
    }
}

pub fn rename_folder(options: &RenameOptions) -> Result<RenameReport> {
    if !options.folder.exists() {
        anyhow::bail!("対象フォルダが存在しません: {}", options.folder.display());
    }

    let mut stats = RenameStats::default();
    let files = collect_image_files(&options.folder, options.include_hidden, &mut stats)?;

    let mut outcomes = Vec::with_capacity(files.len());
    let mut claimed = HashSet::<PathBuf>::new();

    for path in files {
        let outcome = process_file(&options.folder, &path, options.apply, &mut claimed);
        stats.record(&outcome);
        outcomes.push(FileOutcome {
            original_path: path,
            outcome,
        });
    }

    Ok(RenameReport {
        folder: options.folder.clone(),
        applied: options.apply,
        outcomes,
        stats,
    })
}

fn process_file(
    folder: &Path,
    path: &Path,
    apply: bool,
    claimed: &mut HashSet<PathBuf>,
) -> RenameOutcome {
    let raw = match extract_capture_date(path) {
        Ok(Some(raw)) => raw,
        Ok(None) => return RenameOutcome::SkippedNoDate,
        Err(err) => {
            return RenameOutcome::SkippedError {
                cause: format!("{err:#}"),
            }
        }
    };

    let stem = match canonical_stem(&raw) {
        Ok(stem) => stem,
        Err(_) => return RenameOutcome::SkippedInvalidDate { raw_date: raw },
    };
    let target = folder.join(format!("{}{}", stem, CANONICAL_SUFFIX));

    if claimed.contains(&target) || target.exists() {
        return RenameOutcome::SkippedDestinationExists {
            target_path: target,
        };
    }

    if apply {
        if let Err(err) = fs::rename(path, &target) {
            return RenameOutcome::SkippedError {
                cause: format!(
                    "リネームに失敗しました: {} -> {}: {}",
                    path.display(),
                    target.display(),
                    err
                ),
            };
        }
    }

    claimed.insert(target.clone());
    RenameOutcome::Renamed {
        target_path: target,
    }
}

fn collect_image_files(
    root: &Path,
    include_hidden: bool,
    stats: &mut RenameStats,
) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();

    for entry in fs::read_dir(root)
        .with_context(|| format!("フォルダを読めませんでした: {}", root.display()))?
    {
        let entry = entry.with_context(|| format!("エントリ読み取り失敗: {}", root.display()))?;
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        stats.scanned_files += 1;
        if is_hidden(&path) && !include_hidden {
            stats.skipped_hidden += 1;
            continue;
        }
        if is_supported_image(&path) {
            stats.image_files += 1;
            out.push(path);
        } else {
            stats.skipped_non_image += 1;
        }
    }
    out.sort();

    Ok(out)
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy();
            ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg")
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}
