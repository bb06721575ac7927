use std::{io, path::Path};

use assert_matches::assert_matches;

use crate::{fmt, keyword::KeywordIndex, symbol, tests};
use super::{ast::NodeKind, parser, Analysis, AnalysisDisplayContext, Driver, Error, Source};


fn test_dir<P, F>(path: P, mut check: F) -> io::Result<()>
where
	P: AsRef<Path>,
	F: FnMut(&Analysis) -> bool,
{
	let _ = pretty_env_logger::try_init();

	let mut interner = symbol::Interner::new();
	let index = tests::util::keyword_index()?;

	tests::util::test_dir(
		path,
		move |path, file| {
			let source = Source::from_reader(path, file)?;
			let analysis = Analysis::analyze(&source, &index, &mut interner);

			if !check(&analysis) {
				panic!(
					"{}: {:#?}\n{}",
					path.display(),
					analysis,
					fmt::Show(
						&analysis,
						AnalysisDisplayContext {
							max_errors: None,
							interner: &interner,
							source: &source,
						}
					)
				);
			}

			Ok(())
		}
	)
}


#[test]
fn test_positive() -> io::Result<()> {
	test_dir(
		"testdata/positive",
		|analysis| analysis.errors.is_empty() && analysis.ast.is_some(),
	)
}


#[test]
fn test_negative() -> io::Result<()> {
	test_dir(
		"testdata/negative",
		|analysis| !analysis.errors.is_empty() && analysis.ast.is_none(),
	)
}


#[test]
fn test_comments_only_has_no_root() {
	let mut interner = symbol::Interner::new();
	let index = KeywordIndex::new();
	let mut driver = Driver::new(&index, &mut interner);

	let analysis = driver.parse_string(
		Path::new("<test>"),
		"rem nothing\nremstart\n  still nothing\nremend\n\n",
	);

	assert!(analysis.errors.is_empty());
	assert_matches!(analysis.ast, Some(ast) if ast.root.is_none());
}


#[test]
fn test_failed_parse_has_no_ast() {
	let mut interner = symbol::Interner::new();
	let index = KeywordIndex::new();
	let mut driver = Driver::new(&index, &mut interner);

	let analysis = driver.parse_string(Path::new("<test>"), "x = \"oops\ny = (1 + 2");

	assert!(analysis.ast.is_none());
	assert_matches!(
		&analysis.errors[..],
		[Error::Lexer(_), .., Error::Parser(parser::Error::UnexpectedEof { .. })]
	);
}


#[test]
fn test_errors_recover_at_statement_boundaries() {
	let mut interner = symbol::Interner::new();
	let index = KeywordIndex::new();
	let mut driver = Driver::new(&index, &mut interner);

	let analysis = driver.parse_string(
		Path::new("<test>"),
		"a = * 2\nb = 3\nc = ) : d = 4\ne = 5 5",
	);

	assert_eq!(analysis.errors.len(), 3);
	assert!(analysis.errors.iter().all(|error| matches!(error, Error::Parser(_))));
}


#[test]
fn test_parse_reader() -> io::Result<()> {
	let mut interner = symbol::Interner::new();
	let index = tests::util::keyword_index()?;
	let mut driver = Driver::new(&index, &mut interner);

	let analysis = driver.parse_reader(Path::new("<stdin>"), "sync on\nsync".as_bytes())?;
	let ast = analysis.ast.expect("parse failed");
	let root = ast.root.expect("no statements");

	let commands: Vec<_> = ast
		.children(root)
		.into_iter()
		.map(|statement| match ast.kind(statement) {
			NodeKind::Command { name, .. } => interner.resolve(*name),
			_ => None,
		})
		.collect();

	assert_eq!(commands, [Some("sync on"), Some("sync")]);

	Ok(())
}


#[test]
fn test_parse_missing_file() {
	let mut interner = symbol::Interner::new();
	let index = KeywordIndex::new();
	let mut driver = Driver::new(&index, &mut interner);

	assert!(driver.parse_file(Path::new("testdata/does-not-exist.dba")).is_err());
}
