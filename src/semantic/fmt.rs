use std::fmt::Display as _;

use super::{Program, Scopes, Variable, VariableScope};
use crate::{
	fmt::{Display, Indentation},
	symbol,
	term::color,
};


impl<'a> Display<'a> for Variable {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter<'_>, context: Self::Context) -> std::fmt::Result {
		self.name.fmt(f, context)?;
		self.ty.fmt(f, context)?;

		if self.implicit {
			write!(f, " {}", color::Fg(color::Cyan, "(implicit)"))?;
		}

		Ok(())
	}
}


/// List the variables of a scope, one per line.
fn fmt_scope(
	scope: &VariableScope,
	f: &mut std::fmt::Formatter<'_>,
	context: &symbol::Interner,
	indent: Indentation,
) -> std::fmt::Result {
	for variable in scope {
		indent.fmt(f)?;
		variable.fmt(f, context)?;
		writeln!(f)?;
	}

	Ok(())
}


impl<'a> Display<'a> for Scopes {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter<'_>, context: Self::Context) -> std::fmt::Result {
		let indent = Indentation::default().increase();

		writeln!(f, "{}", color::Fg(color::Magenta, "globals:"))?;
		fmt_scope(&self.globals, f, context, indent)?;

		writeln!(f, "{}", color::Fg(color::Magenta, "main:"))?;
		fmt_scope(&self.main, f, context, indent)?;

		for function in &self.functions {
			write!(f, "{} ", color::Fg(color::Magenta, "function"))?;
			function.name.fmt(f, context)?;
			writeln!(f, "{}", color::Fg(color::Magenta, ":"))?;
			fmt_scope(&function.scope, f, context, indent)?;
		}

		Ok(())
	}
}


impl<'a> Display<'a> for Program {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter<'_>, context: Self::Context) -> std::fmt::Result {
		self.ast.fmt(f, context)?;
		self.scopes.fmt(f, context)
	}
}
