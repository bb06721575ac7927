mod automata;
mod cursor;
mod error;
mod merge;
mod token;

use automata::Automata;
use super::{SourcePos, Span};
pub use cursor::Cursor;
pub use error::{Error, ErrorKind};
pub use merge::KeywordMerger;
pub use token::{
	Annotation,
	Builtin,
	Keyword,
	Literal,
	Operator,
	Token,
	TokenKind,
};


/// The lexer for DarkBASIC source code. Words are produced raw, to be classified by the
/// keyword merger.
#[derive(Debug)]
pub struct Lexer<'a>(Automata<'a>);


impl<'a> Lexer<'a> {
	pub fn new(cursor: Cursor<'a>) -> Self {
		Self(Automata::new(cursor))
	}
}


impl<'a> Iterator for Lexer<'a> {
	type Item = Result<Token, Error>;

	fn next(&mut self) -> Option<Self::Item> {
		self.0.next()
	}
}
