use super::{
	symbol::SymbolChar,
	word::IsWord,
	Comment,
	Cursor,
	Error,
	Mark,
	NumberLiteral,
	State,
	StringLiteral,
	Symbol,
	TokenKind,
	Transition,
	Word,
};


/// The top level lexer state.
#[derive(Debug)]
pub(super) struct Root;


impl Root {
	pub fn visit(self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			// Newlines terminate statements.
			Some('\n') => Transition::produce(
				self,
				Mark::at(cursor).through(TokenKind::Newline, cursor)
			),

			// Whitespace.
			Some(c) if c.is_whitespace() => Transition::step(self),

			// Backtick comments. The remaining comment forms start as words or symbols.
			Some('`') => Transition::step(Comment),

			// String literals.
			Some('"') => Transition::step(StringLiteral::at(cursor)),

			// Number literals.
			Some(c) if c.is_ascii_digit() => Transition::step(NumberLiteral::at(cursor)),

			// Identifiers, keywords, commands and word operators.
			Some(c) if c.is_word_start() => Transition::resume(Word::at(cursor)),

			// Symbols.
			Some(c) => match SymbolChar::from_first(c) {
				SymbolChar::None => Transition::error(self, Error::unexpected(c, cursor.pos())),

				SymbolChar::Single(kind) => {
					Transition::produce(self, Mark::at(cursor).through(kind, cursor))
				}

				SymbolChar::Double { first } => Transition::step(Symbol::from_first(first, cursor)),
			},

			// Eof.
			None => Transition::step(self),
		}
	}
}


impl From<Root> for State {
	fn from(state: Root) -> State {
		State::Root(state)
	}
}
