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

/// Class names the fragment must carry; themes target these.
pub const TABLE_CLASS: &str = "viderlab-exchange-table";
pub const DATE_CLASS: &str = "vet-date";
pub const CURRENCY_CLASS: &str = "vet-currency";
pub const VALUE_CLASS: &str = "vet-value";

/// Builder for the table fragment. Layouts accumulate classed cells row by
/// row; the markup is emitted in a single pass at the end. An empty builder
/// still emits the structural table shell.
pub struct HtmlTable {
	rows: Vec<Vec<Cell>>,
}

pub struct Cell {
	kind: CellKind,
	class: &'static str,
	colspan: Option<u8>,
	text: String,
}

#[derive(Clone, Copy)]
enum CellKind {
	Header,
	Data,
}

impl Cell {
	/// A `<th>` cell.
	pub fn header(class: &'static str, text: String) -> Cell {
		Cell {
			kind: CellKind::Header,
			class,
			colspan: None,
			text,
		}
	}

	/// A `<td>` cell.
	pub fn data(class: &'static str, text: String) -> Cell {
		Cell {
			kind: CellKind::Data,
			class,
			colspan: None,
			text,
		}
	}

	/// A `<td>` cell spanning multiple columns.
	pub fn spanning(class: &'static str, colspan: u8, text: String) -> Cell {
		Cell {
			kind: CellKind::Data,
			class,
			colspan: Some(colspan),
			text,
		}
	}

	fn render(&self) -> String {
		let tag = match self.kind {
			CellKind::Header => "th",
			CellKind::Data => "td",
		};

		let colspan = match self.colspan {
			Some(n) => format!(" colspan='{}'", n),
			None => String::new(),
		};

		format!(
			"<{}{} class='{}'>{}</{}>",
			tag,
			colspan,
			self.class,
			escape(&self.text),
			tag
		)
	}
}

impl HtmlTable {
	pub fn new() -> Self {
		Self { rows: Vec::new() }
	}

	pub fn add_row(&mut self, cells: Vec<Cell>) {
		self.rows.push(cells);
	}

	pub fn to_html(&self) -> String {
		let mut out = String::new();
		out.push_str("<table class='");
		out.push_str(TABLE_CLASS);
		out.push_str("'>\n");

		for row in &self.rows {
			out.push_str("  <tr>\n");
			for cell in row {
				out.push_str("    ");
				out.push_str(&cell.render());
				out.push('\n');
			}
			out.push_str("  </tr>\n");
		}

		out.push_str("</table>");
		out
	}
}

/// The fragment uses single-quoted attributes, so single quotes are
/// escaped along with the usual markup metacharacters.
fn escape(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'\'' => out.push_str("&#39;"),
			_ => out.push(c),
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty_table_keeps_shell() {
		let table = HtmlTable::new();
		assert_eq!(
			table.to_html(),
			"<table class='viderlab-exchange-table'>\n</table>"
		);
	}

	#[test]
	fn test_cell_kinds_and_classes() {
		let mut table = HtmlTable::new();
		table.add_row(vec![
			Cell::header(CURRENCY_CLASS, "EUR".to_string()),
			Cell::data(VALUE_CLASS, "0.92 USD".to_string()),
		]);

		assert_eq!(
			table.to_html(),
			"<table class='viderlab-exchange-table'>\n  <tr>\n    \
			 <th class='vet-currency'>EUR</th>\n    \
			 <td class='vet-value'>0.92 USD</td>\n  </tr>\n</table>"
		);
	}

	#[test]
	fn test_spanning_cell() {
		let mut table = HtmlTable::new();
		table.add_row(vec![Cell::spanning(
			DATE_CLASS,
			2,
			"2024-06-15".to_string(),
		)]);

		assert!(table
			.to_html()
			.contains("<td colspan='2' class='vet-date'>2024-06-15</td>"));
	}

	#[test]
	fn test_text_is_escaped() {
		let mut table = HtmlTable::new();
		table.add_row(vec![Cell::data(
			VALUE_CLASS,
			"<b>1 & '2'</b>".to_string(),
		)]);

		assert!(table.to_html().contains(
			"&lt;b&gt;1 &amp; &#39;2&#39;&lt;/b&gt;"
		));
	}
}
