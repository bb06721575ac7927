mod array_func;
mod bitwise_not;
mod error;
mod fields;
pub mod fmt;
mod labels;
mod scope;
mod types;
mod variables;
#[cfg(test)]
mod tests;

use std::collections::HashMap;

use crate::symbol::Symbol;
use super::syntax::{
	ast::{self, Annotation, Ast, Name, NodeId, NodeKind, TypeRef},
	Span,
};
pub use array_func::resolve_array_func_ambiguity;
pub use bitwise_not::eliminate_bitwise_not_rhs;
pub use error::{Error, ErrorKind, Errors, ErrorsDisplayContext, Severity};
pub use fields::validate_field_bases;
pub use labels::resolve_labels;
pub use scope::{Variable, VariableScope};
pub use types::resolve_types;
pub use variables::{declare_variables, Function, Scopes};


/// A syntax tree that passed semantic analysis, with its symbol tables.
#[derive(Debug)]
pub struct Program {
	pub ast: Ast,
	pub scopes: Scopes,
	/// User defined type declarations, by name.
	pub udts: HashMap<Symbol, NodeId>,
	/// Label statements, by name.
	pub labels: HashMap<Symbol, NodeId>,
	/// Diagnostics that didn't fail the analysis.
	pub warnings: Errors,
}


/// Run all passes over the tree. Each pass runs to completion even if a previous one
/// failed, so that as many diagnostics as possible are collected.
pub fn analyze(mut ast: Ast) -> Result<Program, Errors> {
	let mut errors = Errors::default();

	resolve_array_func_ambiguity(&mut ast, &mut errors);
	eliminate_bitwise_not_rhs(&mut ast, &mut errors);
	let labels = resolve_labels(&ast, &mut errors);
	let udts = resolve_types(&mut ast, &mut errors);
	validate_field_bases(&ast, &mut errors);
	let scopes = declare_variables(&ast, &mut errors);

	log::debug!(
		"{}: semantic analysis found {} diagnostics",
		ast.source.display(),
		errors.len()
	);

	if errors.has_errors() {
		Err(errors)
	} else {
		Ok(
			Program {
				ast,
				scopes,
				udts,
				labels,
				warnings: errors,
			}
		)
	}
}
