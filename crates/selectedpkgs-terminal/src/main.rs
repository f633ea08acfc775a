use std::io::Write;
use std::process::ExitCode;

use selectedpkgs::{SelectedPkgsOptions, SelectionMode};

mod tee;

fn main() -> ExitCode {
	let opts = command_options();

	/* Parse console input */
	let parsed_options = {
		let args: Vec<String> = std::env::args().collect();

		let parsed_options = match opts.parse(&args[1..]) {
			Ok(m)  => { m }
			Err(e) => { eprintln!("Unable to parse options: {}", e); return ExitCode::from(2) }
		};

		if parsed_options.opt_present("h") {
			eprintln!("{}", opts.usage("Usage: selectedpkgs [options]\n\nLists packages that were explicitly installed."));
			return ExitCode::SUCCESS;
		}

		parsed_options
	};

	if let Err(e) = init_logger(&parsed_options) {
		eprintln!("{}", e);
		return ExitCode::FAILURE;
	}

	match run(&parsed_options) {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("{}", e);
			ExitCode::FAILURE
		},
	}
}

fn command_options() -> getopts::Options {
	let mut opts = getopts::Options::new();
	opts.optflag(     "h", "help",     "Show help");
	opts.optflagmulti("v", "verbose",  "Increased verbosity, may be repeated");
	opts.optopt(      "f", "file",     "Status file to read", "FILE");
	opts.optflag(     "s", "shallow",  "Only list packages nothing depends on, don't follow their dependencies");
	opts.optflag(     "n", "no-deps",  "Ignore dependencies, list every package that isn't required by the system");
	opts.optopt(      "l", "log-file", "Write log output to FILE instead of the console", "FILE");
	opts.optflag(     "",  "log-both", "With --log-file, also log to the console");
	opts
}

fn selection_mode(parsed_options: &getopts::Matches) -> SelectionMode {
	if parsed_options.opt_present("n") {
		SelectionMode::IgnoreDependencies
	} else if parsed_options.opt_present("s") {
		SelectionMode::Shallow
	} else {
		SelectionMode::Deep
	}
}

fn log_level(parsed_options: &getopts::Matches) -> &'static str {
	match parsed_options.opt_count("v") {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}

fn init_logger(parsed_options: &getopts::Matches) -> Result<(), Error> {
	let mut builder = env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or(log_level(parsed_options))
	);

	if let Some(path) = parsed_options.opt_str("l") {
		let file = std::fs::OpenOptions::new()
			.create(true)
			.append(true)
			.open(&path)
			.map_err(|e| Error::LogFile(path.clone(), e))?;

		let target: Box<dyn Write + Send> = if parsed_options.opt_present("log-both") {
			Box::new(tee::Tee::new(file, std::io::stderr()))
		} else {
			Box::new(file)
		};
		builder.target(env_logger::Target::Pipe(target));
		builder.write_style(env_logger::WriteStyle::Never);
	}

	builder.init();

	if parsed_options.opt_present("log-both") && !parsed_options.opt_present("l") {
		log::warn!("--log-both has no effect without --log-file");
	}
	Ok(())
}

fn run(parsed_options: &getopts::Matches) -> Result<(), Error> {
	let mut options = SelectedPkgsOptions::default();
	if let Some(path) = parsed_options.opt_str("f") {
		options.set_status_path(std::path::PathBuf::from(path));
	}
	options.set_mode(selection_mode(parsed_options));

	log::debug!("Reading status file {}", options.status_path().display());
	let packages = selectedpkgs::find_selected_packages(&options, &selectedpkgs::LogDiagnostics)?;
	log::info!("Found {} selected packages.", packages.len());

	let stdout = std::io::stdout();
	let mut out = stdout.lock();
	for package in &packages {
		match writeln!(out, "{}", package) {
			Ok(_) => {},
			/* Reader went away, e.g. piped into `head` */
			Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => return Ok(()),
			Err(e) => return Err(Error::Output(e)),
		}
	}
	match out.flush() {
		Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => Err(Error::Output(e)),
		_ => Ok(()),
	}
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{0}")]
	SelectedPkgs(#[from] selectedpkgs::Error),
	#[error("Unable to open log file {0}: {1}")]
	LogFile(String, std::io::Error),
	#[error("Unable to write output: {0}")]
	Output(std::io::Error),
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(args: &[&str]) -> getopts::Matches {
		command_options().parse(args).expect("options should parse")
	}

	#[test] fn default_mode_is_deep() { assert_eq!(selection_mode(&parse(&[])), SelectionMode::Deep) }
	#[test] fn shallow_flag() { assert_eq!(selection_mode(&parse(&["--shallow"])), SelectionMode::Shallow) }
	#[test] fn no_deps_flag() { assert_eq!(selection_mode(&parse(&["-n"])), SelectionMode::IgnoreDependencies) }
	#[test] fn no_deps_wins_over_shallow() { assert_eq!(selection_mode(&parse(&["-s", "-n"])), SelectionMode::IgnoreDependencies) }

	#[test]
	fn verbosity_is_counted() {
		assert_eq!(log_level(&parse(&[])), "warn");
		assert_eq!(log_level(&parse(&["-v"])), "info");
		assert_eq!(log_level(&parse(&["-vv"])), "debug");
		assert_eq!(log_level(&parse(&["-v", "-v", "--verbose"])), "trace");
	}

	#[test]
	fn file_option_takes_a_path() {
		assert_eq!(parse(&["-f", "/tmp/status"]).opt_str("f").as_deref(), Some("/tmp/status"));
	}

	#[test]
	fn unknown_options_are_rejected() {
		assert!(command_options().parse(["--frobnicate"]).is_err());
	}

	#[test]
	fn missing_status_file_fails() {
		let e = run(&parse(&["-f", "/nonexistent/selectedpkgs/status"])).unwrap_err();
		assert!(matches!(e, Error::SelectedPkgs(selectedpkgs::Error::StatusFileMissing(_))));
	}
}
