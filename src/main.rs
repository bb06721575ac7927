mod args;

use std::{fmt::Display, io, path::Path};

use log::LevelFilter;

use dbasic::{
	fmt,
	keyword::{KeywordDb, KeywordIndex, LoadError},
	semantic::{self, ErrorsDisplayContext},
	symbol,
	syntax::{AnalysisDisplayContext, Driver, Source},
	term::color,
};
use args::{Args, Command};


/// Number of diagnostics printed for each stage.
const MAX_ERRORS: Option<usize> = Some(20);


/// Failures that prevent the analysis from starting.
#[derive(Debug)]
enum Error {
	Keywords(Box<Path>, LoadError),
	Source(Box<Path>, io::Error),
}


impl Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Keywords(path, error) => write!(f, "{}: {}", path.display(), error),
			Self::Source(path, error) => write!(f, "{}: {}", path.display(), error),
		}
	}
}


fn main() -> ! {
	let command = match args::parse(std::env::args_os()) {
		Ok(command) => command,
		Err(error) => {
			eprint!("{}", error);
			std::process::exit(1)
		}
	};

	let result = match command {
		Command::Run(args) => run(args),
		Command::Help(msg) | Command::Version(msg) => {
			println!("{}", msg);
			std::process::exit(0)
		},
	};

	let exit_code = match result {
		Ok(code) => code,
		Err(error) => {
			eprintln!("{}: {}", color::Fg(color::Red, "Error"), error);
			1
		}
	};

	std::process::exit(exit_code)
}


fn run(args: Args) -> Result<i32, Error> {
	let level = match args.verbosity {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	};

	if let Err(error) = simple_logger::SimpleLogger::new().with_level(level).init() {
		eprintln!("failed to initialize logger: {}", error);
	}

	// ----------------------------------------------------------------------------------------
	let mut db = KeywordDb::new();

	for path in args.keywords {
		let count = db
			.load_json_file(&path)
			.map_err(|error| Error::Keywords(path.clone(), error))?;

		log::info!("loaded {} keywords from {}", count, path.display());
	}

	if db.is_empty() {
		log::warn!("no keywords loaded, commands will be parsed as identifiers");
	}

	let index = KeywordIndex::from_db(&db);

	// ----------------------------------------------------------------------------------------
	let source = match args.input {
		Some(path) => Source::from_path(path.clone()).map_err(|error| Error::Source(path, error))?,
		None => {
			let path: Box<Path> = Path::new("<stdin>").into();
			Source::from_reader(path.clone(), io::stdin().lock())
				.map_err(|error| Error::Source(path, error))?
		}
	};

	let mut interner = symbol::Interner::new();
	let analysis = Driver::new(&index, &mut interner).parse(&source);

	if !analysis.is_ok() {
		eprint!(
			"{}",
			fmt::Show(
				&analysis,
				AnalysisDisplayContext {
					max_errors: MAX_ERRORS,
					interner: &interner,
					source: &source,
				}
			)
		);

		return Ok(2);
	}

	let ast = match analysis.ast {
		Some(ast) => ast,
		None => return Ok(2),
	};

	// ----------------------------------------------------------------------------------------
	let errors_context = ErrorsDisplayContext {
		max_errors: MAX_ERRORS,
		interner: &interner,
		source: &source,
	};

	let program = match semantic::analyze(ast) {
		Ok(program) => program,
		Err(errors) => {
			eprint!("{}", fmt::Show(&errors, errors_context));
			return Ok(2);
		}
	};

	eprint!("{}", fmt::Show(&program.warnings, errors_context));

	if args.print_ast {
		println!("{}", color::Fg(color::Yellow, "--------------------------------------------------"));
		print!("{}", fmt::Show(&program, &interner));
		println!("{}", color::Fg(color::Yellow, "--------------------------------------------------"));
	}

	if !args.check {
		println!(
			"{}: {} statements, {} functions, {} types, {} labels",
			source.path.display(),
			program.ast.root.map(|root| program.ast.children(root).len()).unwrap_or(0),
			program.scopes.functions.len(),
			program.udts.len(),
			program.labels.len(),
		);
	}

	Ok(0)
}
