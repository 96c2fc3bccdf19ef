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
use crate::render::is_available;
use crate::render::rows::build_rows;
use crate::reports::table::Table;
use crate::util::date::Date;

/// Administrator-facing summary of the configured table. End users see
/// nothing when the settings are off; this report is where an
/// administrator sees what the settings actually amount to.
pub struct RateReporter<'a> {
	config: &'a ExchangeConfig,
}

impl<'a> RateReporter<'a> {
	pub fn new(config: &'a ExchangeConfig) -> RateReporter<'a> {
		Self { config }
	}

	pub fn print(&self, today: Date) {
		if self.config.reference_currency.is_empty() {
			println!("Reference currency: (unset)");
		} else {
			println!(
				"Reference currency: {}",
				self.config.reference_currency
			);
		}

		match (self.config.validity_start, self.config.validity_end) {
			(Some(start), Some(end)) => {
				println!("Valid from {} to {}", start, end);
			},
			_ => println!("Validity window not configured"),
		}

		println!("Available today: {}", is_available(self.config, today));

		let rows = build_rows(self.config);
		if rows.is_empty() {
			println!();
			println!("No rates configured");
			return;
		}

		let mut table = Table::new(2);
		table.add_header(vec!["Currency", "Rate"]);
		table.add_separator();

		for row in &rows {
			table.add_row(vec![&row.code, &row.rate]);
		}

		table.right_align(vec![1]);
		table.print();
	}
}
