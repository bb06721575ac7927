use std::fmt::Display as _;

use super::{Analysis, Source};
use crate::{
	fmt::{self, Display},
	symbol,
	term::color,
};


/// Context for displaying the syntax analysis.
#[derive(Debug, Copy, Clone)]
pub struct AnalysisDisplayContext<'a> {
	/// Max number of displayed errors.
	pub max_errors: Option<usize>,
	/// Symbol interner.
	pub interner: &'a symbol::Interner,
	/// The analyzed source, for excerpts.
	pub source: &'a Source,
}


/// Print the errors, each followed by an excerpt of the offending code.
impl<'a> Display<'a> for Analysis {
	type Context = AnalysisDisplayContext<'a>;

	fn fmt(&self, f: &mut std::fmt::Formatter<'_>, context: Self::Context) -> std::fmt::Result {
		for (ix, error) in self.errors.iter().enumerate() {
			if let Some(max) = context.max_errors {
				if max <= ix {
					writeln!(
						f,
						"{} {}",
						color::Fg(color::Red, self.errors.len() - max),
						color::Fg(color::Red, "more supressed syntax errors"),
					)?;

					break;
				}
			}

			writeln!(
				f,
				"{}: {}: {}",
				color::Fg(color::Red, "Error"),
				context.source.path.display(),
				fmt::Show(error, context.interner)
			)?;

			context.source.excerpt(error.span()).fmt(f)?;
		}

		Ok(())
	}
}
