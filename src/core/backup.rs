use crate::config::Config;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::ui::prompt::confirm;
use rusqlite::Connection;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        if !src.exists() {
            let msg = format!("Database not found: {}", src.display());
            return Err(io::Error::new(io::ErrorKind::NotFound, msg).into());
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        if dest.exists() && !confirm_overwrite(dest)? {
            println!("Backup cancelled.");
            return Ok(());
        }

        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        let final_path = if compress {
            let archive = zip_backup(dest)?;

            // A dest already named *.zip compresses onto itself.
            if archive != dest {
                if let Err(e) = fs::remove_file(dest) {
                    eprintln!("⚠️ Failed to remove uncompressed backup: {}", e);
                }
            }

            archive
        } else {
            dest.to_path_buf()
        };

        record_backup(src, &final_path, compress);

        Ok(())
    }
}

fn confirm_overwrite(dest: &Path) -> AppResult<bool> {
    warning(format!("The file '{}' already exists.", dest.display()));
    Ok(confirm("Overwrite?")?)
}

/// Compress a backup into a sibling `.zip` archive.
fn zip_backup(path: &Path) -> AppResult<PathBuf> {
    let archive_path = path.with_extension("zip");

    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "backup".to_string());

    let mut reader = File::open(path)?;
    let mut writer = ZipWriter::new(File::create(&archive_path)?);

    let opts: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    writer.start_file(entry_name, opts).map_err(io::Error::other)?;
    io::copy(&mut reader, &mut writer)?;
    writer.finish().map_err(io::Error::other)?;

    success(format!("Compressed: {}", archive_path.display()));

    Ok(archive_path)
}

/// Best-effort audit entry; the backup itself already succeeded.
fn record_backup(db: &Path, stored_at: &Path, compressed: bool) {
    let message = if compressed {
        "Backup created and compressed"
    } else {
        "Backup created"
    };

    if let Ok(conn) = Connection::open(db) {
        let _ = audit(&conn, "backup", &stored_at.to_string_lossy(), message);
    }
}
