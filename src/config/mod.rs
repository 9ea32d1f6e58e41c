//! Configuration for next-build-parser
//!
//! This module provides:
//! - .next-build-parser.toml config file support
//! - Display settings for reports
//! - First Load JS budget thresholds

pub mod file;
pub mod loader;

pub use file::{ConfigFile, DisplaySettings, FirstLoadBudget, CONFIG_FILE_NAME};
pub use loader::ConfigLoader;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_module_exports_are_accessible() {
        let _: Option<ConfigFile> = None;
        let _: Option<FirstLoadBudget> = None;
    }

    #[test]
    fn test_config_file_name_constant_is_correct() {
        assert_eq!(CONFIG_FILE_NAME, ".next-build-parser.toml");
    }
}
