mod fmt;

use super::{lexer, parser, Span};


/// Syntax error.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
	Lexer(lexer::Error),
	Parser(parser::Error),
}


impl Error {
	pub fn span(&self) -> Span {
		match self {
			Self::Lexer(error) => Span::at(error.pos),
			Self::Parser(error) => error.span(),
		}
	}
}


impl std::error::Error for Error {}
