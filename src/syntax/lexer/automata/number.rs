use super::{
	Cursor,
	Error,
	Literal,
	Mark,
	Root,
	State,
	TokenKind,
	Transition,
};


/// The state for lexing numeric literals: decimal and hexadecimal integers, and floats.
#[derive(Debug)]
pub(super) struct NumberLiteral {
	mark: Mark,
	hex: bool,
	consumed_decimal: bool,
	/// Some(false) after the exponent marker and its optional sign, Some(true) once
	/// digits follow.
	consumed_exponent: Option<bool>,
}


impl NumberLiteral {
	pub fn at(cursor: &Cursor) -> Self {
		Self {
			mark: Mark::at(cursor),
			hex: false,
			consumed_decimal: false,
			consumed_exponent: None,
		}
	}


	/// A literal starting with the decimal dot, like `.5`.
	pub fn fraction(mark: Mark) -> Self {
		Self {
			mark,
			hex: false,
			consumed_decimal: true,
			consumed_exponent: None,
		}
	}


	pub fn visit(mut self, cursor: &Cursor) -> Transition {
		let consumed = cursor.slice_from(self.mark.offset);

		match cursor.peek() {
			Some('x') | Some('X') if consumed == "0" => {
				self.hex = true;
				Transition::step(self)
			}

			Some(c) if self.hex && c.is_ascii_hexdigit() => Transition::step(self),

			Some(c) if !self.hex && c.is_ascii_digit() => {
				if self.consumed_exponent == Some(false) {
					self.consumed_exponent = Some(true);
				}
				Transition::step(self)
			}

			// There must be up to one dot, and it must precede the exponent. A dot not
			// followed by a digit is left for the root state.
			Some('.') if !self.is_float() && next_is_digit(cursor) => {
				self.consumed_decimal = true;
				Transition::step(self)
			}

			Some('e') | Some('E') if self.allows_exponent(cursor) => {
				self.consumed_exponent = Some(false);
				Transition::step(self)
			}

			// Exponent sign.
			Some('+') | Some('-')
				if self.consumed_exponent == Some(false) && consumed.ends_with(&['e', 'E'][..]) =>
			{
				Transition::step(self)
			}

			// Stop and produce if a non-digit is found, including EOF.
			_ => self.parse(cursor),
		}
	}


	/// An exponent marker must be followed by a digit or a sign. Otherwise the number ends,
	/// and the marker starts a word.
	fn allows_exponent(&self, cursor: &Cursor) -> bool {
		!self.hex
			&& self.consumed_exponent.is_none()
			&& matches!(cursor.peek_next(), Some(c) if c.is_ascii_digit() || c == '+' || c == '-')
	}


	/// Parse the consumed characters.
	fn parse(&self, cursor: &Cursor) -> Transition {
		let number = cursor.slice_from(self.mark.offset);
		let invalid = || Transition::resume_error(Root, Error::invalid_number(number, self.mark.pos));

		let literal = if self.hex {
			match i64::from_str_radix(&number[2 ..], 16) {
				Ok(int) => Literal::Integer(int),
				Err(_) => return invalid(),
			}
		} else if self.is_float() {
			if self.consumed_exponent == Some(false) {
				return invalid();
			}

			match number.parse() {
				Ok(float) => Literal::Float(float),
				Err(_) => return invalid(),
			}
		} else {
			match number.parse() {
				Ok(int) => Literal::Integer(int),
				Err(_) => return invalid(),
			}
		};

		Transition::resume_produce(Root, self.mark.until(TokenKind::Literal(literal), cursor))
	}


	/// Check if the consumed characters constitute a float.
	fn is_float(&self) -> bool {
		self.consumed_decimal || self.consumed_exponent.is_some()
	}
}


fn next_is_digit(cursor: &Cursor) -> bool {
	matches!(cursor.peek_next(), Some(c) if c.is_ascii_digit())
}


impl From<NumberLiteral> for State {
	fn from(state: NumberLiteral) -> State {
		State::NumberLiteral(state)
	}
}
