// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Get or set configuration values

use crate::config::{set_value, Config};
use anyhow::{Context, Result};
use std::path::Path;

/// Run config command
pub fn run(path: &Path, config: &Config, key: &str, value: Option<String>) -> Result<()> {
    match value {
        Some(v) => {
            set_value(path, key, &v).with_context(|| format!("Failed to set {}", key))?;
            println!("{} = {}", key, v);
        }
        None => {
            println!("{}", config.get(key)?);
        }
    }
    Ok(())
}
