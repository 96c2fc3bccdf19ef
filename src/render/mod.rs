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
pub mod html;
pub mod layout;
pub mod rows;

use crate::config::snapshot::ExchangeConfig;
use crate::render::html::{
	Cell, HtmlTable, CURRENCY_CLASS, DATE_CLASS, VALUE_CLASS,
};
use crate::render::layout::{select_layout, LayoutKind};
use crate::render::rows::{build_rows, RateRow};
use crate::util::date::Date;

/// Used when the host has not configured a date display format.
const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether the table is eligible to display on the given date. Both bounds
/// are inclusive; a missing or unparseable bound keeps the gate shut.
pub fn is_available(config: &ExchangeConfig, today: Date) -> bool {
	match (config.validity_start, config.validity_end) {
		(Some(start), Some(end)) => start <= today && today <= end,
		_ => false,
	}
}

/// Renders the exchange table fragment, or nothing at all when today falls
/// outside the validity window. Identical inputs yield identical markup.
pub fn render_table(config: &ExchangeConfig, today: Date) -> String {
	if !is_available(config, today) {
		return String::new();
	}

	let rows = build_rows(config);

	let table = match select_layout(config.orientation, config.reference_mode)
	{
		LayoutKind::HorizontalPlain => horizontal_plain(config, &rows, today),
		LayoutKind::HorizontalRef1 => horizontal_ref1(config, &rows, today),
		LayoutKind::VerticalPlain => vertical_plain(config, &rows, today),
		LayoutKind::VerticalRef1 => vertical_ref1(config, &rows, today),
	};

	table.to_html()
}

fn date_text(config: &ExchangeConfig, today: Date) -> String {
	today.format(
		config.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT),
	)
}

/// One row: optional date cell, then a header/value cell pair per
/// currency, values expressed in the reference currency.
fn horizontal_plain(
	config: &ExchangeConfig,
	rows: &[RateRow],
	today: Date,
) -> HtmlTable {
	let mut cells = Vec::new();

	if config.show_date {
		cells.push(Cell::data(DATE_CLASS, date_text(config, today)));
	}

	for row in rows {
		cells.push(Cell::header(CURRENCY_CLASS, row.code.clone()));
		cells.push(Cell::data(
			VALUE_CLASS,
			format!("{} {}", row.rate, config.reference_currency),
		));
	}

	let mut table = HtmlTable::new();
	table.add_row(cells);
	table
}

/// One row: optional date cell, a "1 REF" cell, then one combined
/// value cell per currency. Code and rate share the cell here.
fn horizontal_ref1(
	config: &ExchangeConfig,
	rows: &[RateRow],
	today: Date,
) -> HtmlTable {
	let mut cells = Vec::new();

	if config.show_date {
		cells.push(Cell::data(DATE_CLASS, date_text(config, today)));
	}

	cells.push(Cell::data(
		VALUE_CLASS,
		format!("1 {}", config.reference_currency),
	));

	for row in rows {
		cells.push(Cell::data(
			VALUE_CLASS,
			format!("{} {}", row.rate, row.code),
		));
	}

	let mut table = HtmlTable::new();
	table.add_row(cells);
	table
}

/// Optional full-width date row, then one row per currency with the value
/// expressed in the reference currency.
fn vertical_plain(
	config: &ExchangeConfig,
	rows: &[RateRow],
	today: Date,
) -> HtmlTable {
	let mut table = HtmlTable::new();

	if config.show_date {
		table.add_row(vec![Cell::spanning(
			DATE_CLASS,
			2,
			date_text(config, today),
		)]);
	}

	for row in rows {
		table.add_row(vec![
			Cell::data(CURRENCY_CLASS, row.code.clone()),
			Cell::data(
				VALUE_CLASS,
				format!("{} {}", row.rate, config.reference_currency),
			),
		]);
	}

	table
}

/// Optional date row, a dedicated (REF, 1) row, then one row per currency
/// with a bare rate; the reference is implied by the dedicated row.
fn vertical_ref1(
	config: &ExchangeConfig,
	rows: &[RateRow],
	today: Date,
) -> HtmlTable {
	let mut table = HtmlTable::new();

	if config.show_date {
		table.add_row(vec![Cell::spanning(
			DATE_CLASS,
			2,
			date_text(config, today),
		)]);
	}

	table.add_row(vec![
		Cell::data(CURRENCY_CLASS, config.reference_currency.clone()),
		Cell::data(VALUE_CLASS, "1".to_string()),
	]);

	for row in rows {
		table.add_row(vec![
			Cell::data(CURRENCY_CLASS, row.code.clone()),
			Cell::data(VALUE_CLASS, row.rate.clone()),
		]);
	}

	table
}
