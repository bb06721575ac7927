use super::{word::IsWord, Cursor, Error, Root, SourcePos, State, Transition};


/// The state for lexing line comments: `rem`, `//` and `` ` ``.
#[derive(Debug)]
pub(super) struct Comment;


impl Comment {
	pub fn visit(self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			// Newline marks the end of the comment. It is still a statement terminator.
			Some('\n') => Transition::resume(Root),

			// Otherwise, eat everything.
			_ => Transition::step(self),
		}
	}
}


impl From<Comment> for State {
	fn from(state: Comment) -> State {
		Self::Comment(state)
	}
}


/// How a block comment is delimited. Each opening delimiter only accepts its own
/// closing delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delimiter {
	Rem,    // remstart ... remend
	CStyle, // /* ... */
}


/// The state for lexing block comments.
#[derive(Debug)]
pub(super) struct BlockComment {
	delimiter: Delimiter,
	pos: SourcePos,
	/// Offset of the word being visited, if any.
	word: Option<usize>,
	/// Whether the previous character was a star.
	star: bool,
}


impl BlockComment {
	/// A comment opened by `remstart`.
	pub fn rem(pos: SourcePos) -> Self {
		Self { delimiter: Delimiter::Rem, pos, word: None, star: false }
	}


	/// A comment opened by `/*`.
	pub fn c_style(pos: SourcePos) -> Self {
		Self { delimiter: Delimiter::CStyle, pos, word: None, star: false }
	}


	pub fn visit(mut self, cursor: &Cursor) -> Transition {
		match (self.delimiter, cursor.peek()) {
			(Delimiter::CStyle, Some('/')) if self.star => Transition::step(Root),

			(Delimiter::CStyle, Some(c)) => {
				self.star = c == '*';
				Transition::step(self)
			}

			(Delimiter::Rem, Some(c)) if c.is_word() => {
				self.word.get_or_insert(cursor.offset());
				Transition::step(self)
			}

			// End of a word, or of the input.
			(Delimiter::Rem, _) if self.is_remend(cursor) => Transition::resume(Root),

			(Delimiter::Rem, Some(_)) => {
				self.word = None;
				Transition::step(self)
			}

			(_, None) => Transition::error(Root, Error::unterminated_comment(self.pos)),
		}
	}


	fn is_remend(&self, cursor: &Cursor) -> bool {
		self.word
			.map(|offset| cursor.slice_from(offset).eq_ignore_ascii_case("remend"))
			.unwrap_or(false)
	}
}


impl From<BlockComment> for State {
	fn from(state: BlockComment) -> State {
		Self::BlockComment(state)
	}
}
