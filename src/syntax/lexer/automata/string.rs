use super::{Cursor, Error, Literal, Mark, Root, State, TokenKind, Transition};


/// The state for lexing string literals. There are no escape sequences, and literals
/// can't span multiple lines.
#[derive(Debug)]
pub(super) struct StringLiteral {
	mark: Mark,
}


impl StringLiteral {
	pub fn at(cursor: &Cursor) -> Self {
		Self { mark: Mark::at(cursor) }
	}


	pub fn visit(self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			// Closing quote.
			Some('"') => {
				// Skip the opening quote.
				let value = cursor.slice_from(self.mark.offset + 1);
				let literal = TokenKind::Literal(Literal::String(value.into()));

				Transition::produce(Root, self.mark.through(literal, cursor))
			}

			// The newline is left for the root state, to terminate the statement.
			Some('\n') => Transition::resume_error(Root, Error::unterminated_string(self.mark.pos)),

			None => Transition::error(Root, Error::unterminated_string(self.mark.pos)),

			Some(_) => Transition::step(self),
		}
	}
}


impl From<StringLiteral> for State {
	fn from(state: StringLiteral) -> State {
		State::StringLiteral(state)
	}
}
