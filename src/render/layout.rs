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
use crate::config::snapshot::Orientation;

/// The four table renditions. "Ref1" variants carry the reference currency
/// as its own cell or row valued at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutKind {
	HorizontalPlain,
	HorizontalRef1,
	VerticalPlain,
	VerticalRef1,
}

/// Pure 2x2 decision over the two display flags.
pub fn select_layout(
	orientation: Orientation,
	reference_mode: bool,
) -> LayoutKind {
	match (orientation, reference_mode) {
		(Orientation::Horizontal, false) => LayoutKind::HorizontalPlain,
		(Orientation::Horizontal, true) => LayoutKind::HorizontalRef1,
		(Orientation::Vertical, false) => LayoutKind::VerticalPlain,
		(Orientation::Vertical, true) => LayoutKind::VerticalRef1,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_all_four_combinations() {
		assert_eq!(
			select_layout(Orientation::Horizontal, false),
			LayoutKind::HorizontalPlain
		);
		assert_eq!(
			select_layout(Orientation::Horizontal, true),
			LayoutKind::HorizontalRef1
		);
		assert_eq!(
			select_layout(Orientation::Vertical, false),
			LayoutKind::VerticalPlain
		);
		assert_eq!(
			select_layout(Orientation::Vertical, true),
			LayoutKind::VerticalRef1
		);
	}
}
