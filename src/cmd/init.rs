//! Init command implementation
//!
//! Handles the `next-build-parser init` command which writes a
//! `.next-build-parser.toml` with default display settings and a starter
//! First Load JS budget.

use anyhow::{Context, Result};
use console::style;
use std::env;
use std::path::{Path, PathBuf};

use crate::config::{self, ConfigFile, ConfigLoader, FirstLoadBudget};
use crate::error::BuildParserError;
use crate::fmt::{CHECKMARK, INFO, SPARKLES};
use crate::infra::{FileSystem, RealFileSystem};

/// Configuration written by `init`
pub fn starter_config() -> ConfigFile {
    ConfigFile {
        first_load_budget: Some(FirstLoadBudget {
            target_size_kb: Some(200),
            warn_threshold_kb: Some(500),
            max_size_kb: Some(1000),
        }),
        ..Default::default()
    }
}

/// Create `.next-build-parser.toml` in the current directory
///
/// # Examples
///
/// ```no_run
/// use next_build_parser::cmd::init::cmd_init;
///
/// // Fails if the file exists
/// cmd_init(false)?;
///
/// // Overwrite an existing file
/// cmd_init(true)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_init(force: bool) -> Result<()> {
    let project_root = env::current_dir().context("Failed to determine current directory")?;
    let path = init_config(&project_root, force, &RealFileSystem)?;

    println!(
        "{} Created {}",
        CHECKMARK,
        style(path.display()).cyan().bold()
    );
    println!();
    println!("{}  First Load JS budget:", INFO);
    println!("   target = {} kB", style(200).green());
    println!("   warn   = {} kB", style(500).yellow());
    println!("   max    = {} kB", style(1000).red());
    println!();
    println!("{} Next Steps:", SPARKLES);
    println!(
        "   1. Run {} to see the dashboard",
        style("next build | next-build-parser analyze").cyan()
    );
    println!(
        "   2. Add {} to CI to enforce the budget",
        style("next-build-parser analyze build.txt --check").cyan()
    );

    Ok(())
}

/// Write the starter config into `project_root`
///
/// Refuses to replace an existing file unless `force` is set.
pub fn init_config<FS: FileSystem>(project_root: &Path, force: bool, fs: &FS) -> Result<PathBuf> {
    let path = project_root.join(config::CONFIG_FILE_NAME);

    if ConfigLoader::exists_with_fs(project_root, fs) {
        if !force {
            return Err(BuildParserError::ConfigExists { path }.into());
        }
        log::debug!("Overwriting {}", path.display());
    }

    ConfigLoader::save_with_fs(&starter_config(), project_root, fs)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::testing::MemoryFileSystem;

    #[test]
    fn test_init_writes_loadable_config() {
        let fs = MemoryFileSystem::default();
        let path = init_config(Path::new("/project"), false, &fs).unwrap();
        assert_eq!(path, Path::new("/project/.next-build-parser.toml"));

        let loaded = ConfigLoader::load_with_fs(Path::new("/project"), &fs).unwrap();
        assert_eq!(loaded, starter_config());
    }

    #[test]
    fn test_init_refuses_existing_config() {
        let fs = MemoryFileSystem::with_file("/project/.next-build-parser.toml", "");
        let err = init_config(Path::new("/project"), false, &fs).unwrap_err();
        let err = err.downcast_ref::<BuildParserError>().unwrap();
        assert!(matches!(err, BuildParserError::ConfigExists { .. }));
        assert_eq!(err.exit_code(), 73);
    }

    #[test]
    fn test_init_force_overwrites() {
        let fs = MemoryFileSystem::with_file("/project/.next-build-parser.toml", "");
        init_config(Path::new("/project"), true, &fs).unwrap();
        let written = fs
            .contents(Path::new("/project/.next-build-parser.toml"))
            .unwrap();
        assert!(written.contains("max-size-kb = 1000"));
    }

    #[test]
    fn test_starter_budget_is_valid() {
        starter_config()
            .first_load_budget
            .unwrap()
            .validate()
            .unwrap();
    }
}
