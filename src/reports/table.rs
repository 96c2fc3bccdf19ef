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

/// Fixed-width text table for administrator-facing summaries. Rows are
/// accumulated first; column widths come from a measuring pass at print
/// time. Emitted lines carry no trailing padding.
pub struct Table {
	column_count: usize,
	rows: Vec<Row>,
	right_align: Vec<bool>, // indicates columns by index
}

enum Row {
	Header(Vec<String>),
	Data(Vec<String>),
	Separator,
}

impl Table {
	pub fn new(column_count: usize) -> Self {
		Self {
			column_count,
			rows: Vec::new(),
			right_align: vec![false; column_count],
		}
	}

	/// Adds a header row.
	pub fn add_header(&mut self, row: Vec<&str>) {
		self.rows.push(Row::Header(
			row.into_iter().map(|s| s.to_string()).collect(),
		));
	}

	/// Adds a data row.
	pub fn add_row(&mut self, row: Vec<&str>) {
		self.rows
			.push(Row::Data(row.into_iter().map(|s| s.to_string()).collect()));
	}

	/// Adds a full separator row.
	pub fn add_separator(&mut self) {
		self.rows.push(Row::Separator);
	}

	/// Specifies columns that should be right-aligned by index.
	pub fn right_align(&mut self, cols: Vec<usize>) {
		for col in cols {
			self.right_align[col] = true;
		}
	}

	pub fn print(&self) {
		println!();
		let widths = self.measure();

		for row in &self.rows {
			match row {
				Row::Header(cells) => {
					println!("{}", Table::format_header(&widths, cells))
				},
				Row::Data(cells) => {
					println!("{}", self.format_data(&widths, cells))
				},
				Row::Separator => {
					let total = widths.iter().sum::<usize>()
						+ 3 * (self.column_count - 1);
					println!("{:-<total$}", "", total = total);
				},
			}
		}
	}

	fn measure(&self) -> Vec<usize> {
		let mut widths = vec![0; self.column_count];

		for row in &self.rows {
			if let Row::Header(cells) | Row::Data(cells) = row {
				for (i, value) in cells.iter().enumerate() {
					widths[i] = widths[i].max(value.len());
				}
			}
		}

		widths
	}

	fn format_header(widths: &[usize], cells: &[String]) -> String {
		let padded: Vec<String> = cells
			.iter()
			.enumerate()
			.map(|(i, value)| format!("{:<width$}", value, width = widths[i]))
			.collect();

		padded.join(" | ").trim_end().to_string()
	}

	fn format_data(&self, widths: &[usize], cells: &[String]) -> String {
		let mut padded = Vec::new();

		for (i, value) in cells.iter().enumerate() {
			if self.right_align[i] {
				padded.push(format!("{:>width$}", value, width = widths[i]));
			} else {
				padded.push(format!("{:<width$}", value, width = widths[i]));
			}
		}

		padded.join("   ").trim_end().to_string()
	}
}
