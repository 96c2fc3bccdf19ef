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
use crate::config::snapshot::ExchangeConfig;
use crate::render::{is_available, render_table};
use crate::reports::rate_reporter::RateReporter;
use crate::util::date::Date;
use anyhow::Error;
use clap::{Parser, ValueEnum};

mod config;
mod render;
mod reports;
mod util;

#[derive(Parser)]
#[command(
	name = "ratetab",
	version = "1.0",
	about = "Currency exchange rate table generator"
)]
struct Cli {
	// ----------------
	// -- POSITIONAL --
	// ----------------
	/// The command to execute
	command: Directive,

	// -----------
	// -- FLAGS --
	// -----------
	/// Specifies the settings file (default: ~/.config/ratetab/settings.toml)
	#[arg(short)]
	file: Option<String>,

	/// Evaluate the table as of this date instead of today (YYYY-MM-DD)
	#[arg(long)]
	today: Option<String>,
}

#[derive(ValueEnum, Clone)]
enum Directive {
	Render, // emit the exchange table markup
	Check,  // report whether the table is within its validity window
	Rates,  // summarize the configured rates
}

fn main() -> Result<(), Error> {
	let args = Cli::parse();

	let today = match &args.today {
		Some(s) => Date::from_str(s)?,
		None => Date::today(),
	};

	let settings = SettingsFile::load(args.file.as_ref())?;
	let config = ExchangeConfig::from_settings(&settings);

	match args.command {
		Directive::Render => {
			// outside the validity window the embedding layer gets
			// nothing at all, not an empty table
			let markup = render_table(&config, today);
			if !markup.is_empty() {
				println!("{}", markup);
			}
		},
		Directive::Check => {
			println!("{}", is_available(&config, today));
		},
		Directive::Rates => {
			let reporter = RateReporter::new(&config);
			reporter.print(today);
		},
	}

	Ok(())
}
