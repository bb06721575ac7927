use std::{
	ffi::{OsStr, OsString},
	path::Path,
};

use clap::{clap_app, crate_authors, crate_version, crate_description};


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
	Help(Box<str>),
	Version(Box<str>),
	Run(Args)
}


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Args {
	/// The source file. None reads from stdin.
	pub input: Option<Box<Path>>,
	/// Keyword database files, loaded in order.
	pub keywords: Vec<Box<Path>>,
	/// Only report diagnostics.
	pub check: bool,
	/// Print the AST and the variable scopes.
	pub print_ast: bool,
	/// Number of verbose flags.
	pub verbosity: u64,
}


pub fn parse<A, T>(args: A) -> clap::Result<Command>
where
	A: IntoIterator<Item = T>,
	T: Into<OsString> + Clone
{
	let app = clap_app!(
		dbasic =>
			(version: crate_version!())
			(author: crate_authors!())
			(about: crate_description!())
			(@arg keywords: -k --keywords +takes_value +multiple number_of_values(1) "Keyword database file, in JSON")
			(@arg check: --check "Report diagnostics only")
			(@arg ast: --ast "Print the AST and the variable scopes")
			(@arg verbose: -v --verbose +multiple "Increase the log level")
			(@arg INPUT: "The source file, - or nothing for stdin")
	);

	match app.get_matches_from_safe(args) {
		Ok(matches) => Ok(
			Command::Run(
				Args {
					input: matches
						.value_of_os("INPUT")
						.filter(|input| *input != OsStr::new("-"))
						.map(|input| Path::new(input).into()),
					keywords: matches
						.values_of_os("keywords")
						.map(|paths| paths.map(|path| Path::new(path).into()).collect())
						.unwrap_or_default(),
					check: matches.is_present("check"),
					print_ast: matches.is_present("ast"),
					verbosity: matches.occurrences_of("verbose"),
				}
			)
		),

		Err(error) => match error.kind {
			clap::ErrorKind::HelpDisplayed => Ok(
				Command::Help(error.message.into_boxed_str())
			),
			clap::ErrorKind::VersionDisplayed => Ok(
				Command::Version(error.message.into_boxed_str())
			),
			_ => Err(error)
		}
	}
}


#[cfg(test)]
mod tests {
	use assert_matches::assert_matches;

	use super::*;


	#[test]
	fn test_defaults_to_stdin() {
		assert_matches!(
			parse(vec!["dbasic", "-"]),
			Ok(Command::Run(Args { input: None, check: false, print_ast: false, verbosity: 0, .. }))
		);
	}


	#[test]
	fn test_options() {
		let command = parse(
			vec!["dbasic", "-k", "core.json", "--keywords", "3d.json", "--ast", "-vv", "game.dba"]
		);

		let args = match command {
			Ok(Command::Run(args)) => args,
			other => panic!("unexpected parse result: {:?}", other),
		};

		assert_eq!(args.input.as_deref(), Some(Path::new("game.dba")));
		assert_eq!(
			args.keywords,
			[Box::<Path>::from(Path::new("core.json")), Box::<Path>::from(Path::new("3d.json"))]
		);
		assert!(args.print_ast);
		assert_eq!(args.verbosity, 2);
	}
}
