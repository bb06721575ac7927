use std::fmt::Display as _;

use super::{Error, Expected, Token};
use crate::{
	fmt::Display,
	symbol,
};


impl<'a> Display<'a> for Expected {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter<'_>, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::Token(token) => {
				"'".fmt(f)?;
				token.fmt(f, context)?;
				"'".fmt(f)
			}

			Self::Message(msg) => msg.fmt(f),
		}
	}
}


impl<'a> Display<'a> for Error {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter<'_>, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::UnexpectedEof { span } => write!(f, "{} - unexpected end of file", span),

			Self::Unexpected { token: Token { kind, span, .. }, expected } => {
				write!(f, "{} - unexpected '", span)?;
				kind.fmt(f, context)?;
				"', expected ".fmt(f)?;
				expected.fmt(f, context)
			}

			Self::ArrayRedeclared { name, first, second } => {
				write!(f, "{} - array '", second)?;
				name.fmt(f, context)?;
				write!(f, "' redeclared, first declared at {}", first)
			}

			Self::UdtRedeclared { name, first, second } => {
				write!(f, "{} - type '", second)?;
				name.fmt(f, context)?;
				write!(f, "' redeclared, first declared at {}", first)
			}

			Self::DuplicateDefaultCase { first, second } => {
				write!(f, "{} - duplicate default case, first one at {}", second, first)
			}
		}
	}
}


/// We need this in order to be able to implement std::error::Error.
impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		Display::fmt(self, f, &symbol::Interner::new())
	}
}
