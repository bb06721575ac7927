mod fmt;

use super::SourcePos;


/// The kind of lexical error.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
	/// Unexpected end of file.
	UnexpectedEof,
	/// Unexpected character.
	Unexpected(char),
	/// String literal missing the closing quote before the end of the line.
	UnterminatedString,
	/// Block comment missing its closing `remend` or `*/`.
	UnterminatedComment,
	/// Invalid number literal, both integer and floating point.
	InvalidNumber(Box<str>),
	/// An integer immediately followed by a word, which doesn't spell a command.
	AmbiguousBoundary(Box<str>),
}


/// A lexical error.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
	pub error: ErrorKind,
	pub pos: SourcePos,
}


impl std::error::Error for Error {}


impl Error {
	pub fn unexpected_eof(pos: SourcePos) -> Self {
		Self { error: ErrorKind::UnexpectedEof, pos }
	}

	pub fn unexpected(input: char, pos: SourcePos) -> Self {
		Self { error: ErrorKind::Unexpected(input), pos }
	}

	pub fn unterminated_string(pos: SourcePos) -> Self {
		Self { error: ErrorKind::UnterminatedString, pos }
	}

	pub fn unterminated_comment(pos: SourcePos) -> Self {
		Self { error: ErrorKind::UnterminatedComment, pos }
	}

	pub fn invalid_number(number: &str, pos: SourcePos) -> Self {
		Self {
			error: ErrorKind::InvalidNumber(number.into()),
			pos,
		}
	}

	pub fn ambiguous_boundary(text: &str, pos: SourcePos) -> Self {
		Self {
			error: ErrorKind::AmbiguousBoundary(text.into()),
			pos,
		}
	}
}
