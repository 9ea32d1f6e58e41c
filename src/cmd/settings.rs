//! Settings command implementation
//!
//! Handles `next-build-parser settings` which reads and writes the boolean
//! preferences stored in `.next-build-parser/settings.json`.

use anyhow::{Context, Result};
use clap::Subcommand;
use console::style;
use std::env;

use crate::error::BuildParserError;
use crate::settings::{
    is_known_setting, toggle, JsonSettingsStore, SettingsStore, KNOWN_SETTINGS,
};

/// `settings` subcommands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum SettingsAction {
    /// Print the value of a setting
    Get {
        /// Setting name
        key: String,
    },
    /// Set a setting to true or false
    Set {
        /// Setting name
        key: String,
        /// New value
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Flip a setting
    Toggle {
        /// Setting name
        key: String,
    },
    /// List all settings with their values
    List,
}

/// Run a settings action against the project in the current directory
pub fn cmd_settings(action: &SettingsAction) -> Result<()> {
    let project_root = env::current_dir().context("Failed to determine current directory")?;
    let mut store = JsonSettingsStore::open(&project_root)?;
    print!("{}", run_settings(action, &mut store)?);
    Ok(())
}

/// Apply `action` to `store` and return the text to print
pub fn run_settings<S: SettingsStore + ?Sized>(
    action: &SettingsAction,
    store: &mut S,
) -> Result<String> {
    match action {
        SettingsAction::Get { key } => {
            ensure_known(key)?;
            let value = store.get(key)?.unwrap_or(false);
            Ok(format!("{}\n", value))
        }
        SettingsAction::Set { key, value } => {
            ensure_known(key)?;
            store.set(key, *value)?;
            Ok(format!("{} = {}\n", key, value))
        }
        SettingsAction::Toggle { key } => {
            ensure_known(key)?;
            let value = toggle(store, key)?;
            Ok(format!("{} = {}\n", key, value))
        }
        SettingsAction::List => {
            let mut output = String::new();
            for (key, description) in KNOWN_SETTINGS {
                let value = store.get(key)?.unwrap_or(false);
                output.push_str(&format!(
                    "{} = {}  {}\n",
                    style(key).bold(),
                    value,
                    style(description).dim()
                ));
            }
            Ok(output)
        }
    }
}

fn ensure_known(key: &str) -> Result<()> {
    if is_known_setting(key) {
        Ok(())
    } else {
        Err(BuildParserError::UnknownSetting {
            key: key.to_string(),
            known: KNOWN_SETTINGS.iter().map(|(k, _)| k.to_string()).collect(),
        }
        .into())
    }
}
