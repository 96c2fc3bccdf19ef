/* Copyright © 2025 ViderLab <soporte@viderlab.com>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use anyhow::{anyhow, Error};
use dirs::home_dir;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::fs::File;
use std::path::PathBuf;
use toml::Value;

/// The administrator's settings blob: a flat key-value table. Keys are
/// fixed names (`reference_currency`, `currency_count`, `currency_code_1`
/// and so on); values are whatever scalar form the administrator wrote.
///
/// Accessors coerce rather than validate. Anything that does not coerce
/// reads as unset, and unset is never an error at this layer.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct SettingsFile {
	values: BTreeMap<String, Value>,
}

impl SettingsFile {
	/// Fetches the settings from the given path, or the default path if
	/// none. An empty settings file is created at the default location on
	/// first use.
	pub fn load(custom_path: Option<&String>) -> Result<SettingsFile, Error> {
		let path = match &custom_path {
			None => {
				let home_dir = home_dir().unwrap_or_else(|| {
					panic!("Unable to determine home directory")
				});
				home_dir.join(".config/ratetab/settings.toml")
			},
			Some(p) => PathBuf::from(p),
		};

		// create empty settings file if it doesn't exist
		if !path.exists() && custom_path.is_none() {
			if let Some(parent) = path.parent() {
				fs::create_dir_all(parent)?;
			}
			File::create(path.clone())?;
		}

		let content = fs::read_to_string(path)?;
		SettingsFile::from_str(&content)
	}

	pub fn from_str(content: &str) -> Result<SettingsFile, Error> {
		toml::from_str(content)
			.map_err(|e| anyhow!("failed to parse settings: {}", e))
	}

	/// Reads a key as display text. Numeric and date values keep their
	/// written form; blank and whitespace-only strings read as unset.
	pub fn get_str(&self, key: &str) -> Option<String> {
		let trimmed = match self.values.get(key)? {
			Value::String(s) => s.trim().to_string(),
			Value::Integer(i) => i.to_string(),
			Value::Float(f) => f.to_string(),
			Value::Datetime(d) => d.to_string(),
			_ => return None,
		};

		if trimmed.is_empty() {
			None
		} else {
			Some(trimmed)
		}
	}

	/// Reads a checkbox-style key: present means set, unless the value is
	/// an explicit boolean false.
	pub fn get_flag(&self, key: &str) -> bool {
		match self.values.get(key) {
			None => false,
			Some(Value::Boolean(b)) => *b,
			Some(_) => true,
		}
	}

	/// Reads a key as a non-negative count, zero when absent or malformed.
	pub fn get_count(&self, key: &str) -> u32 {
		match self.values.get(key) {
			Some(Value::Integer(i)) if *i > 0 => {
				(*i).min(i64::from(u32::MAX)) as u32
			},
			Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
			_ => 0,
		}
	}
}
