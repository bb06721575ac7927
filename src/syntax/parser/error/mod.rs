mod fmt;

use super::{ast::Name, Span, Symbol, Token, TokenKind};


/// The kind of token the parser was expecting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expected {
	Token(TokenKind),
	Message(&'static str),
}


/// A parser error.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
	/// Premature EOF. The span is the one of the last consumed token.
	UnexpectedEof { span: Span },
	/// Unexpected token.
	Unexpected { token: Token, expected: Expected },
	/// An array declared twice in the same scope.
	ArrayRedeclared { name: Name, first: Span, second: Span },
	/// A user defined type declared twice.
	UdtRedeclared { name: Symbol, first: Span, second: Span },
	/// More than one `case default` in a select statement.
	DuplicateDefaultCase { first: Span, second: Span },
}


impl Error {
	/// Create an error signaling unexpected EOF.
	pub fn unexpected_eof(span: Span) -> Self {
		Self::UnexpectedEof { span }
	}


	/// Create an error signaling an unexpected token, and what was expected.
	pub fn unexpected(token: Token, expected: TokenKind) -> Self {
		Self::Unexpected { token, expected: Expected::Token(expected) }
	}


	/// Create an error signaling an unexpected token, and a message.
	pub fn unexpected_msg(token: Token, message: &'static str) -> Self {
		Self::Unexpected { token, expected: Expected::Message(message) }
	}


	pub fn array_redeclared(name: Name, first: Span, second: Span) -> Self {
		Self::ArrayRedeclared { name, first, second }
	}


	pub fn udt_redeclared(name: Symbol, first: Span, second: Span) -> Self {
		Self::UdtRedeclared { name, first, second }
	}


	pub fn duplicate_default_case(first: Span, second: Span) -> Self {
		Self::DuplicateDefaultCase { first, second }
	}


	/// The region of source code where the error was detected.
	pub fn span(&self) -> Span {
		match self {
			Self::UnexpectedEof { span } => *span,
			Self::Unexpected { token, .. } => token.span,
			Self::ArrayRedeclared { second, .. } => *second,
			Self::UdtRedeclared { second, .. } => *second,
			Self::DuplicateDefaultCase { second, .. } => *second,
		}
	}
}


impl std::error::Error for Error {}
