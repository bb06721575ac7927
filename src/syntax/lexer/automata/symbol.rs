use super::{
	Comment,
	BlockComment,
	Cursor,
	Error,
	Mark,
	NumberLiteral,
	Operator,
	Root,
	State,
	TokenKind,
	Transition,
};


/// The state for lexing two-character symbols.
#[derive(Debug)]
pub(super) struct Symbol {
	first: char,
	mark: Mark,
}


impl Symbol {
	pub fn from_first(first: char, cursor: &Cursor) -> Self {
		Self::from_mark(first, Mark::at(cursor))
	}


	pub fn from_mark(first: char, mark: Mark) -> Self {
		Self { first, mark }
	}


	pub fn visit(self, cursor: &Cursor) -> Transition {
		let mark = self.mark;
		let unexpected = |input| Transition::resume_error(Root, Error::unexpected(input, mark.pos));

		let produce = |op| Transition::produce(
			Root,
			mark.through(TokenKind::Operator(op), cursor)
		);
		let skip_produce = |kind| Transition::resume_produce(Root, mark.until(kind, cursor));
		let skip_operator = |op| skip_produce(TokenKind::Operator(op));

		match (self.first, cursor.peek()) {
			('/', Some('/')) => Transition::step(Comment),
			('/', Some('*')) => Transition::step(BlockComment::c_style(mark.pos)),
			('/', _) => skip_operator(Operator::Div),

			('<', Some('>')) => produce(Operator::NotEquals),
			('<', Some('=')) => produce(Operator::LowerEquals),
			('<', Some('<')) => produce(Operator::ShiftLeft),
			('<', _) => skip_operator(Operator::Lower),

			('>', Some('=')) => produce(Operator::GreaterEquals),
			('>', Some('>')) => produce(Operator::ShiftRight),
			('>', _) => skip_operator(Operator::Greater),

			('&', Some('&')) => produce(Operator::BitAnd),
			('&', _) => unexpected(self.first),

			('|', Some('|')) => produce(Operator::BitOr),
			('|', _) => unexpected(self.first),

			('~', Some('~')) => produce(Operator::BitXor),
			('~', _) => unexpected(self.first),

			('.', Some('.')) => produce(Operator::BitNot),
			('.', Some(c)) if c.is_ascii_digit() => Transition::resume(NumberLiteral::fraction(mark)),
			('.', _) => skip_produce(TokenKind::Dot),

			// We must have covered all possibilites for the first character. The peeked
			// character is wildcarded, which will cover everthing including EOF (None).
			_ => unreachable!("invalid first character in symbol state"),
		}
	}
}


impl From<Symbol> for State {
	fn from(state: Symbol) -> State {
		Self::Symbol(state)
	}
}


/// Helper for symbols.
pub enum SymbolChar {
	/// Not a symbol character.
	None,
	/// Some symbols are single characters. We can produce them straight away.
	Single(TokenKind),
	/// Others have two characters, so we must handle those separately.
	Double { first: char },
}


impl SymbolChar {
	pub fn from_first(first: char) -> Self {
		let token = Self::Single;
		let operator = |op| token(TokenKind::Operator(op));
		let double = |c| Self::Double { first: c };

		match first {
			// Single character.
			'+' => operator(Operator::Plus),
			'-' => operator(Operator::Minus),
			'*' => operator(Operator::Times),
			'^' => operator(Operator::Pow),
			'=' => operator(Operator::Equals),
			':' => token(TokenKind::Colon),
			',' => token(TokenKind::Comma),
			'(' => token(TokenKind::OpenParens),
			')' => token(TokenKind::CloseParens),

			// Double character.
			'/' | '<' | '>' | '&' | '|' | '~' | '.' => double(first),

			// Not a symbol character:
			_ => SymbolChar::None,
		}
	}
}
