use std::fmt::{self, Display};

use super::{Error, ErrorKind};


impl Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::UnexpectedEof => "unexpected end of file".fmt(f),

			Self::Unexpected(value) => write!(f, "unexpected '{}'", value.escape_debug()),

			Self::UnterminatedString => "unterminated string literal".fmt(f),

			Self::UnterminatedComment => "unterminated block comment".fmt(f),

			Self::InvalidNumber(number) => write!(f, "invalid number: {}", number),

			Self::AmbiguousBoundary(text) => {
				write!(f, "no token boundary in '{}', separate the number from the word", text)
			}
		}
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} - {}.", self.pos, self.error)
	}
}
