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
use crate::config::snapshot::ExchangeConfig;

/// A displayable currency/rate pair. A value object with no behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateRow {
	pub code: String,
	pub rate: String,
}

/// Collects the displayable pairs in slot order. A slot missing either
/// half is skipped silently; slot order is the only ordering.
pub fn build_rows(config: &ExchangeConfig) -> Vec<RateRow> {
	let mut rows = Vec::new();

	for slot in &config.slots {
		if let (Some(code), Some(rate)) = (&slot.code, &slot.rate) {
			rows.push(RateRow {
				code: code.clone(),
				rate: rate.clone(),
			});
		}
	}

	rows
}
