use super::{
	Annotation,
	BlockComment,
	Comment,
	Cursor,
	Mark,
	Root,
	State,
	Symbol,
	Token,
	TokenKind,
	Transition,
};


/// The state for lexing words, with an optional type annotation suffix.
/// Words are classified later, once the keyword index has been consulted.
#[derive(Debug)]
pub(super) struct Word {
	mark: Mark,
	/// A trailing `&` may either be an annotation or the start of `&&`.
	ampersand: Option<(Token, Mark)>,
}


impl Word {
	pub fn at(cursor: &Cursor) -> Self {
		Self { mark: Mark::at(cursor), ampersand: None }
	}


	pub fn visit(mut self, cursor: &Cursor) -> Transition {
		// We don't need to check if the first character is a number here, because the Root
		// state will only transition to this state if that is the case.
		match (self.ampersand.take(), cursor.peek()) {
			// The bitwise and operator.
			(Some((word, ampersand)), Some('&')) => {
				Transition::resume_produce(Symbol::from_mark('&', ampersand), word)
			}

			(Some((mut word, ampersand)), _) => {
				if let TokenKind::Word(_, annotation) = &mut word.kind {
					*annotation = Annotation::DoubleInteger;
				}
				word.span.last = ampersand.pos;
				word.bytes.end = ampersand.offset + 1;

				Transition::resume_produce(Root, word)
			}

			// Word character.
			(None, Some(c)) if c.is_word() => Transition::step(self),

			(None, Some('&')) => {
				let word = self.token(Annotation::None, cursor);
				self.ampersand = Some((word, Mark::at(cursor)));
				Transition::step(self)
			}

			(None, Some(c)) => match Annotation::from_char(c) {
				Some(annotation) => {
					let word = cursor.slice_from(self.mark.offset);
					let kind = TokenKind::Word(word.into(), annotation);
					Transition::produce(Root, self.mark.through(kind, cursor))
				}

				None => self.finish(cursor),
			},

			// If we visit EOF, we should just produce.
			(None, None) => self.finish(cursor),
		}
	}


	/// Produce the unannotated word, unless it opens a comment.
	fn finish(self, cursor: &Cursor) -> Transition {
		let word = cursor.slice_from(self.mark.offset);

		if word.eq_ignore_ascii_case("rem") {
			Transition::resume(Comment)
		} else if word.eq_ignore_ascii_case("remstart") {
			Transition::resume(BlockComment::rem(self.mark.pos))
		} else {
			Transition::resume_produce(Root, self.token(Annotation::None, cursor))
		}
	}


	fn token(&self, annotation: Annotation, cursor: &Cursor) -> Token {
		let word = cursor.slice_from(self.mark.offset);
		self.mark.until(TokenKind::Word(word.into(), annotation), cursor)
	}
}


impl From<Word> for State {
	fn from(state: Word) -> State {
		State::Word(state)
	}
}


/// Helper trait for checking if a character is a valid word constituent.
pub trait IsWord {
	fn is_word_start(&self) -> bool;
	fn is_word(&self) -> bool;
}


impl IsWord for char {
	fn is_word_start(&self) -> bool {
		self.is_ascii_alphabetic() || *self == '_'
	}

	fn is_word(&self) -> bool {
		self.is_ascii_alphanumeric() || *self == '_'
	}
}
