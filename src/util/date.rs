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

use anyhow::{bail, Error};
use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, Local, NaiveDate};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Write;

/// A calendar date with no time component. Validity-window math is
/// date-only, so comparisons never reason about time zones or clocks.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Date {
	year: u32,
	month: u8,
	day: u8,
}

impl Date {
	/// Constructor to parse a string in the "YYYY-mm-dd" format
	pub fn from_str(date_str: &str) -> Result<Date, Error> {
		let parts: Vec<&str> = date_str.trim().split('-').collect();
		if parts.len() != 3 {
			bail!("Date format must be YYYY-MM-DD");
		}

		let year = parts[0].parse::<u32>()?;
		let month = parts[1].parse::<u8>()?;
		let day = parts[2].parse::<u8>()?;

		if !Date::is_valid_date(year, month, day) {
			bail!("Invalid date");
		}

		Ok(Date { year, month, day })
	}

	/// The current date according to the local clock.
	pub fn today() -> Date {
		let now = Local::now().date_naive();
		Date {
			year: now.year() as u32,
			month: now.month() as u8,
			day: now.day() as u8,
		}
	}

	/// Renders the date through a strftime-style pattern. A pattern that
	/// does not parse, or that requires fields a bare date does not have,
	/// falls back to the ISO form rather than erroring.
	pub fn format(&self, pattern: &str) -> String {
		let items: Vec<Item> = StrftimeItems::new(pattern).collect();
		if items.iter().any(|i| matches!(i, Item::Error)) {
			return self.to_string();
		}

		let naive = match NaiveDate::from_ymd_opt(
			self.year as i32,
			self.month as u32,
			self.day as u32,
		) {
			Some(d) => d,
			None => return self.to_string(),
		};

		let mut out = String::new();
		if write!(out, "{}", naive.format_with_items(items.iter())).is_err() {
			return self.to_string();
		}
		out
	}

	fn is_leap_year(year: u32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	fn days_in_month(year: u32, month: u8) -> u8 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 => {
				if Date::is_leap_year(year) {
					29
				} else {
					28
				}
			},
			_ => 0, // Invalid month
		}
	}

	fn is_valid_date(year: u32, month: u8, day: u8) -> bool {
		if !(1..=12).contains(&month) {
			return false;
		}
		if day < 1 || day > Date::days_in_month(year, month) {
			return false;
		}
		true
	}
}

impl PartialOrd for Date {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Date {
	fn cmp(&self, other: &Self) -> Ordering {
		(self.year, self.month, self.day).cmp(&(
			other.year,
			other.month,
			other.day,
		))
	}
}

impl fmt::Display for Date {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_and_display() {
		let date = Date::from_str("2024-06-15").unwrap();
		assert_eq!(date.to_string(), "2024-06-15");

		let unpadded = Date::from_str("2024-6-5").unwrap();
		assert_eq!(unpadded.to_string(), "2024-06-05");
	}

	#[test]
	fn test_parse_rejects_garbage() {
		assert!(Date::from_str("").is_err());
		assert!(Date::from_str("2024-06").is_err());
		assert!(Date::from_str("not-a-date").is_err());
		assert!(Date::from_str("2024-13-01").is_err());
		assert!(Date::from_str("2024-00-10").is_err());
		assert!(Date::from_str("2024-04-31").is_err());
	}

	#[test]
	fn test_leap_day() {
		assert!(Date::from_str("2024-02-29").is_ok());
		assert!(Date::from_str("2023-02-29").is_err());
		assert!(Date::from_str("2000-02-29").is_ok());
		assert!(Date::from_str("1900-02-29").is_err());
	}

	#[test]
	fn test_ordering() {
		let early = Date::from_str("2024-01-01").unwrap();
		let mid = Date::from_str("2024-06-15").unwrap();
		let late = Date::from_str("2024-12-31").unwrap();

		assert!(early < mid);
		assert!(mid < late);
		assert!(early <= Date::from_str("2024-01-01").unwrap());
	}

	#[test]
	fn test_format_patterns() {
		let date = Date::from_str("2024-06-15").unwrap();
		assert_eq!(date.format("%Y-%m-%d"), "2024-06-15");
		assert_eq!(date.format("%d/%m/%Y"), "15/06/2024");
		assert_eq!(date.format("%B %e, %Y"), "June 15, 2024");
	}

	#[test]
	fn test_format_falls_back_on_bad_pattern() {
		let date = Date::from_str("2024-06-15").unwrap();
		assert_eq!(date.format("%Q"), "2024-06-15");
		// time-of-day fields are not available on a bare date
		assert_eq!(date.format("%H:%M"), "2024-06-15");
	}
}
