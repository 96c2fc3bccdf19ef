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
use crate::config::settings_file::SettingsFile;
use crate::util::date::Date;

/// How the table lays out: one long row, or one row per currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
	Horizontal,
	Vertical,
}

impl Orientation {
	/// Anything other than an explicit "vertical" renders horizontally.
	fn from_setting(value: Option<&str>) -> Orientation {
		match value {
			Some("vertical") => Orientation::Vertical,
			_ => Orientation::Horizontal,
		}
	}
}

/// One administrator-configured currency slot. Either half may be unset;
/// a slot only produces output when both halves are present.
#[derive(Clone, Debug, Default)]
pub struct Slot {
	pub code: Option<String>,

	/// Kept as the administrator spelled it, so "0.92" never becomes
	/// "0.920" on display. Set only when it reads as a non-negative
	/// finite decimal.
	pub rate: Option<String>,
}

/// A read-only snapshot of the exchange-table settings, taken once per
/// invocation and passed explicitly into the gate and renderer.
#[derive(Clone, Debug)]
pub struct ExchangeConfig {
	pub reference_currency: String,
	pub slots: Vec<Slot>,
	pub validity_start: Option<Date>,
	pub validity_end: Option<Date>,
	pub show_date: bool,
	pub reference_mode: bool,
	pub orientation: Orientation,
	pub date_format: Option<String>,
}

impl ExchangeConfig {
	/// Far beyond anything an administrator would configure; just keeps a
	/// typo'd count from ballooning the snapshot.
	const MAX_SLOTS: u32 = 500;

	pub fn from_settings(settings: &SettingsFile) -> ExchangeConfig {
		let count = settings.get_count("currency_count").min(Self::MAX_SLOTS);

		let mut slots = Vec::with_capacity(count as usize);
		for i in 1..=count {
			slots.push(Slot {
				code: settings.get_str(&format!("currency_code_{}", i)),
				rate: settings
					.get_str(&format!("rate_{}", i))
					.and_then(|r| normalize_rate(&r)),
			});
		}

		ExchangeConfig {
			reference_currency: settings
				.get_str("reference_currency")
				.unwrap_or_default(),
			slots,
			validity_start: parse_bound(settings, "validity_start"),
			validity_end: parse_bound(settings, "validity_end"),
			show_date: settings.get_flag("show_date"),
			reference_mode: settings.get_flag("reference_mode"),
			orientation: Orientation::from_setting(
				settings.get_str("display_orientation").as_deref(),
			),
			date_format: settings.get_str("date_format"),
		}
	}
}

/// A validity bound that is missing or unparseable reads as absent, which
/// in turn means the availability gate never passes.
fn parse_bound(settings: &SettingsFile, key: &str) -> Option<Date> {
	settings.get_str(key).and_then(|s| Date::from_str(&s).ok())
}

fn normalize_rate(raw: &str) -> Option<String> {
	match raw.parse::<f64>() {
		Ok(v) if v.is_finite() && v >= 0.0 => Some(raw.to_string()),
		_ => None,
	}
}
