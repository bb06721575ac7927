pub mod ast;
mod error;
mod fmt;
pub mod lexer;
pub mod parser;
mod source;
#[cfg(test)]
mod tests;

use std::{cell::RefCell, io, path::Path};

use crate::{keyword::KeywordIndex, symbol};
pub use ast::Ast;
pub use error::Error;
pub use fmt::AnalysisDisplayContext;
use lexer::{KeywordMerger, Lexer};
use parser::Parser;
pub use source::{Excerpt, Source, SourcePos, Span};


/// Syntactical analysis.
#[derive(Debug)]
pub struct Analysis {
	/// The produced AST. None if there were errors, in which case there is at least one
	/// error. A program without statements has an AST with no root.
	pub ast: Option<Ast>,
	/// Syntax errors.
	pub errors: Box<[Error]>,
}


impl Analysis {
	/// Perform syntax analysis in the given source.
	pub fn analyze(
		source: &Source,
		index: &KeywordIndex,
		interner: &mut symbol::Interner,
	) -> Self {
		let cursor = lexer::Cursor::from(source.contents.as_ref());
		let lexer = Lexer::new(cursor);
		let merger = KeywordMerger::new(lexer, &source.contents, index, interner);

		// Errors will be produced by the lexer and the parser alternatively.
		// There won't be borrow issues here because the lexer will always run a complete
		// iteration (producing a token or an error) before yielding to the parser.
		let errors = RefCell::new(Vec::new());

		let tokens = merger.filter_map(|result| match result {
			Ok(token) => Some(token),
			Err(error) => {
				errors.borrow_mut().push(Error::Lexer(error));
				None
			}
		});

		let parser = Parser::new(tokens, source.path.clone(), |error| {
			errors.borrow_mut().push(Error::Parser(error))
		});

		let ast = parser.parse();
		let errors: Box<[Error]> = errors.into_inner().into();

		log::debug!(
			"parsed {}: {} nodes, {} errors",
			source.path.display(),
			ast.len(),
			errors.len()
		);

		Self {
			ast: if errors.is_empty() { Some(ast) } else { None },
			errors,
		}
	}


	/// Whether the analysis succeeded.
	pub fn is_ok(&self) -> bool {
		self.errors.is_empty()
	}
}


/// Parses DarkBASIC sources from several kinds of input, using a fixed keyword index.
/// A driver may be used to parse many sources, and the interner is shared among them.
#[derive(Debug)]
pub struct Driver<'a> {
	index: &'a KeywordIndex,
	interner: &'a mut symbol::Interner,
}


impl<'a> Driver<'a> {
	pub fn new(index: &'a KeywordIndex, interner: &'a mut symbol::Interner) -> Self {
		Self { index, interner }
	}


	pub fn parse(&mut self, source: &Source) -> Analysis {
		Analysis::analyze(source, self.index, self.interner)
	}


	/// Parse an in-memory string. The path is only used for diagnostics.
	pub fn parse_string<P, S>(&mut self, path: P, contents: S) -> Analysis
	where
		P: Into<Box<Path>>,
		S: Into<Box<str>>,
	{
		self.parse(&Source::from_string(path, contents))
	}


	/// Parse a byte stream, which must be UTF-8.
	pub fn parse_reader<P, R>(&mut self, path: P, reader: R) -> io::Result<Analysis>
	where
		P: Into<Box<Path>>,
		R: io::Read,
	{
		let source = Source::from_reader(path, reader)?;
		Ok(self.parse(&source))
	}


	pub fn parse_file<P>(&mut self, path: P) -> io::Result<Analysis>
	where
		P: Into<Box<Path>>,
	{
		let source = Source::from_path(path)?;
		Ok(self.parse(&source))
	}
}
