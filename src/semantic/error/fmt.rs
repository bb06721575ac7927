use std::fmt::Display as _;

use super::{Error, ErrorKind, Errors, Severity};
use crate::{
	fmt::{self, Display},
	symbol,
	syntax::Source,
	term::color,
};


/// Context for displaying errors.
#[derive(Debug, Copy, Clone)]
pub struct ErrorsDisplayContext<'a> {
	/// Max number of displayed errors.
	pub max_errors: Option<usize>,
	/// Symbol interner.
	pub interner: &'a symbol::Interner,
	/// The analyzed source, for excerpts.
	pub source: &'a Source,
}


impl std::fmt::Display for Severity {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Warning => color::Fg(color::Yellow, "Warning").fmt(f),
			Self::Error => color::Fg(color::Red, "Error").fmt(f),
		}
	}
}


impl<'a> Display<'a> for ErrorKind {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter<'_>, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::ArrayRedeclared { name, first } => {
				"array '".fmt(f)?;
				name.fmt(f, context)?;
				write!(f, "' redeclared, first declared at {}", first)
			}

			Self::FunctionRedeclared { name, first } => {
				"function '".fmt(f)?;
				name.fmt(f, context)?;
				write!(f, "' redeclared, first declared at {}", first)
			}

			Self::ArrayFunctionClash { name, function } => {
				"array '".fmt(f)?;
				name.fmt(f, context)?;
				write!(f, "' has the same name as the function declared at {}", function)
			}

			Self::UnresolvedReference(name) => {
				"undefined array or function '".fmt(f)?;
				name.fmt(f, context)?;
				"'".fmt(f)
			}

			Self::DuplicateLabel { label, first } => {
				"label '".fmt(f)?;
				label.fmt(f, context)?;
				write!(f, "' redefined, first defined at {}", first)
			}

			Self::UndefinedLabel(label) => {
				"undefined label '".fmt(f)?;
				label.fmt(f, context)?;
				"'".fmt(f)
			}

			Self::JumpAcrossFunction(label) => {
				"jump to label '".fmt(f)?;
				label.fmt(f, context)?;
				"' crosses a function boundary".fmt(f)
			}

			Self::BitwiseNotSideEffects => "right operand of bitwise not causes side effects".fmt(f),

			Self::UndefinedType(name) => {
				"undefined type '".fmt(f)?;
				name.fmt(f, context)?;
				"'".fmt(f)
			}

			Self::VariableRedeclared { name, first } => {
				"variable '".fmt(f)?;
				name.fmt(f, context)?;
				write!(f, "' redeclared, first seen at {}", first)
			}

			Self::AnnotatedUdtValue(name) => {
				"'".fmt(f)?;
				name.fmt(f, context)?;
				"' holds a user defined type, which can't be annotated".fmt(f)
			}
		}
	}
}


impl<'a> Display<'a> for Error {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter<'_>, context: Self::Context) -> std::fmt::Result {
		write!(f, "{} - ", self.span)?;
		self.kind.fmt(f, context)
	}
}


/// We need this in order to be able to implement std::error::Error.
impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		Display::fmt(self, f, &symbol::Interner::new())
	}
}


impl<'a> Display<'a> for Errors {
	type Context = ErrorsDisplayContext<'a>;

	fn fmt(&self, f: &mut std::fmt::Formatter<'_>, context: Self::Context) -> std::fmt::Result {
		for (ix, error) in self.0.iter().enumerate() {
			if let Some(max) = context.max_errors {
				if max <= ix {
					writeln!(
						f,
						"{} {}",
						color::Fg(color::Red, self.0.len() - max),
						color::Fg(color::Red, "more supressed semantic errors"),
					)?;

					break;
				}
			}

			writeln!(
				f,
				"{}: {}: {}",
				error.severity(),
				context.source.path.display(),
				fmt::Show(error, context.interner)
			)?;

			context.source.excerpt(error.span).fmt(f)?;
		}

		Ok(())
	}
}
