use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{ask_confirmation, info, success, warning};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database to `dest_file`, optionally replacing the copy with a
    /// deflated `.zip`. Returns the final path, or `None` if the user refused
    /// to overwrite an existing file.
    pub fn backup(
        cfg: &Config,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )));
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if !compress {
            if is_same_file(src, dest) {
                return Err(same_file_error(dest));
            }
            if !confirm_overwrite(dest, force) {
                info("Backup cancelled.");
                return Ok(None);
            }

            fs::copy(src, dest)?;
            success(format!("Backup created: {}", dest.display()));
            return Ok(Some(dest.to_path_buf()));
        }

        // the plain copy must not collide with the archive name
        let raw = if dest.extension().is_some_and(|e| e == "zip") {
            dest.with_extension("sqlite")
        } else {
            dest.to_path_buf()
        };
        let final_target = raw.with_extension("zip");

        for target in [&raw, &final_target] {
            if is_same_file(src, target) {
                return Err(same_file_error(target));
            }
        }
        for target in [&raw, &final_target] {
            if !confirm_overwrite(target, force) {
                info("Backup cancelled.");
                return Ok(None);
            }
        }

        fs::copy(src, &raw)?;
        success(format!("Backup created: {}", raw.display()));

        let compressed = compress_backup(&raw)?;
        if let Err(e) = fs::remove_file(&raw) {
            warning(format!("Failed to remove uncompressed backup: {}", e));
        } else {
            info(format!("Removed uncompressed backup: {}", raw.display()));
        }

        Ok(Some(compressed))
    }
}

/// True when `target` exists and is the same file as `src`.
fn is_same_file(src: &Path, target: &Path) -> bool {
    match (fs::canonicalize(src), fs::canonicalize(target)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn same_file_error(target: &Path) -> AppError {
    AppError::Io(std::io::Error::new(
        std::io::ErrorKind::InvalidInput,
        format!(
            "Backup target '{}' is the database itself",
            target.display()
        ),
    ))
}

/// Ask before replacing an existing file, unless `force` is set.
fn confirm_overwrite(target: &Path, force: bool) -> bool {
    !target.exists()
        || force
        || ask_confirmation(&format!(
            "The file '{}' already exists. Overwrite it?",
            target.display()
        ))
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "backup.sqlite".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(name, options)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish()?;

    success(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
