use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Overrides the directory scanned for exports
pub const EXPORT_DIR_ENV: &str = "CONTEXT_EXPORT_DIR";
/// Overrides the directory reports are written to
pub const OUTPUT_DIR_ENV: &str = "CONTEXT_EXPORT_OUTPUT_DIR";

const DEFAULT_EXPORT_SUBDIR: &str = ".kode/context_export";
const DEFAULT_OUTPUT_SUBDIR: &str = "scripts";

/// Get the export directory: `$CONTEXT_EXPORT_DIR`, else `<cwd>/.kode/context_export`
pub fn get_export_dir() -> Result<PathBuf> {
    let cwd = env::current_dir().context("Failed to determine current directory")?;
    Ok(resolve_export_dir(env::var(EXPORT_DIR_ENV).ok(), &cwd))
}

/// Get the report directory: `$CONTEXT_EXPORT_OUTPUT_DIR`, else `<export_dir>/scripts`
pub fn get_output_dir(export_dir: &Path) -> PathBuf {
    resolve_output_dir(env::var(OUTPUT_DIR_ENV).ok(), export_dir)
}

pub(crate) fn resolve_export_dir(env_value: Option<String>, cwd: &Path) -> PathBuf {
    match env_value.filter(|v| !v.trim().is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => cwd.join(DEFAULT_EXPORT_SUBDIR),
    }
}

pub(crate) fn resolve_output_dir(env_value: Option<String>, export_dir: &Path) -> PathBuf {
    match env_value.filter(|v| !v.trim().is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => export_dir.join(DEFAULT_OUTPUT_SUBDIR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_dir_defaults_under_cwd() {
        let dir = resolve_export_dir(None, Path::new("/work/project"));
        assert_eq!(dir, PathBuf::from("/work/project/.kode/context_export"));
    }

    #[test]
    fn test_export_dir_from_env() {
        let dir = resolve_export_dir(Some("/data/exports".to_string()), Path::new("/work"));
        assert_eq!(dir, PathBuf::from("/data/exports"));
    }

    #[test]
    fn test_blank_env_value_is_ignored() {
        let dir = resolve_export_dir(Some("  ".to_string()), Path::new("/work"));
        assert_eq!(dir, PathBuf::from("/work/.kode/context_export"));
    }

    #[test]
    fn test_output_dir_defaults_to_scripts_subdir() {
        let dir = resolve_output_dir(None, Path::new("/data/exports"));
        assert_eq!(dir, PathBuf::from("/data/exports/scripts"));
    }

    #[test]
    fn test_output_dir_from_env() {
        let dir = resolve_output_dir(Some("/reports".to_string()), Path::new("/data/exports"));
        assert_eq!(dir, PathBuf::from("/reports"));
    }

    #[test]
    fn test_get_output_dir_reads_env() {
        let original = env::var(OUTPUT_DIR_ENV).ok();

        // SAFETY: this is the only test touching CONTEXT_EXPORT_OUTPUT_DIR and it
        // restores the original value afterwards
        unsafe {
            env::set_var(OUTPUT_DIR_ENV, "/tmp/reports");
        }
        assert_eq!(get_output_dir(Path::new("/x")), PathBuf::from("/tmp/reports"));

        unsafe {
            match original {
                Some(value) => env::set_var(OUTPUT_DIR_ENV, value),
                None => env::remove_var(OUTPUT_DIR_ENV),
            }
        }
    }
}
