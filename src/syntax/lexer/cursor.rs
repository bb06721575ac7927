use super::SourcePos;


/// A cursor for the source code.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	input: &'a str,
	offset: usize,
	pos: SourcePos,
	/// Position of the previously visited character.
	last: SourcePos,
}


impl<'a> Cursor<'a> {
	/// Position of the current character.
	pub fn pos(&self) -> SourcePos {
		self.pos
	}


	/// Position of the previous character, used to close spans of tokens that end right
	/// before the current character.
	pub fn last_pos(&self) -> SourcePos {
		self.last
	}


	/// Byte offset of the current character.
	pub fn offset(&self) -> usize {
		self.offset
	}


	pub fn is_eof(&self) -> bool {
		self.offset == self.input.len()
	}


	pub fn peek(&self) -> Option<char> {
		self.input[self.offset ..].chars().next()
	}


	/// Peek the character after the current one.
	pub fn peek_next(&self) -> Option<char> {
		self.input[self.offset ..].chars().nth(1)
	}


	/// The input from the given offset up to the current character.
	pub fn slice_from(&self, start: usize) -> &'a str {
		&self.input[start .. self.offset]
	}


	pub fn step(&mut self) {
		if let Some(c) = self.peek() {
			self.last = self.pos;
			self.pos.visit(c);
			self.offset += c.len_utf8();
		}
	}
}


impl<'a> From<&'a str> for Cursor<'a> {
	fn from(input: &'a str) -> Self {
		Self {
			input,
			offset: 0,
			pos: SourcePos::default(),
			last: SourcePos::default(),
		}
	}
}
