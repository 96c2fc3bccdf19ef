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
use std::fs;
use std::process::Command;

/// All scenarios run against a pinned date so the validity gate and the
/// rendered date cell are deterministic.
const TODAY: &str = "2024-06-15";

/// Dynamically collects test cases from a given directory.
fn collect_test_cases(subfolder: &str) -> Vec<(String, String)> {
	let dir_path = format!("tests/test_data/{}", subfolder);

	let mut test_cases = vec![];

	if let Ok(entries) = fs::read_dir(&dir_path) {
		let mut inputs = vec![];
		let mut outputs = vec![];

		for entry in entries.flatten() {
			let file_name =
				entry.file_name().into_string().unwrap_or_default();
			if file_name.ends_with("_in.toml") {
				inputs.push(file_name);
			} else if file_name.ends_with("_out.txt") {
				outputs.push(file_name);
			}
		}

		inputs.sort();
		outputs.sort();

		// Pair inputs with corresponding outputs
		for input_file in inputs {
			let output_file = input_file.replace("_in.toml", "_out.txt");
			if outputs.contains(&output_file) {
				test_cases.push((input_file, output_file));
			}
		}
	}

	test_cases
}

#[test]
fn test_integration_horizontal() {
	let test_cases = collect_test_cases("horizontal");
	execute("horizontal", test_cases, true, "render");
}

#[test]
fn test_integration_vertical() {
	let test_cases = collect_test_cases("vertical");
	execute("vertical", test_cases, true, "render");
}

#[test]
fn test_integration_gate() {
	let test_cases = collect_test_cases("gate");
	execute("gate", test_cases, true, "render");
}

#[test]
fn test_integration_check() {
	let test_cases = collect_test_cases("check");
	execute("check", test_cases, true, "check");
}

#[test]
fn test_integration_rates() {
	let test_cases = collect_test_cases("rates");
	execute("rates", test_cases, true, "rates");
}

#[test]
fn test_integration_should_fail() {
	let test_cases = collect_test_cases("failures");
	execute("failures", test_cases, false, "render");
}

fn execute(
	subfolder: &str,
	test_cases: Vec<(String, String)>,
	should_succeed: bool,
	cmd: &str,
) {
	for (input_file, expected_output_file) in test_cases {
		println!("running for {}...", input_file);

		let loc = format!("{}/{}/{}", "tests/test_data", subfolder, input_file);

		let all_args =
			vec!["run", "--", "-f", loc.as_str(), cmd, "--today", TODAY];

		let output = Command::new("cargo")
			.args(all_args)
			.output()
			.expect("Failed to execute process");

		if !should_succeed {
			assert!(
				!output.status.success(),
				"{} unexpectedly succeeded!",
				input_file
			);
			continue;
		}

		assert!(
			output.status.success(),
			"{} failed processing: {}",
			input_file,
			String::from_utf8_lossy(&output.stderr)
		);

		let stdout = String::from_utf8_lossy(&output.stdout);

		let expected_output = fs::read_to_string(format!(
			"{}/{}/{}",
			"tests/test_data", subfolder, expected_output_file
		))
		.expect("Failed to read expected output file");

		assert_eq!(
			stdout.trim(),
			expected_output.trim(),
			"Output did not match for {}; expected:\n{}\ngot:\n{}",
			input_file,
			expected_output.trim(),
			stdout.trim()
		);
	}
}
