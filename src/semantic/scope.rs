use std::collections::HashMap;

use super::{Annotation, Name, NodeId, Span, Symbol, TypeRef};


/// A variable, either declared with `as` or implied by its first use.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
	pub name: Name,
	pub ty: TypeRef,
	/// The declaration, or the first reference for implicit variables.
	pub node: NodeId,
	pub span: Span,
	pub implicit: bool,
}


/// Variables of a single scope.
///
/// A name may bind up to one variable per annotation, so `x`, `x#` and `x$` are three
/// different variables.
#[derive(Debug, Default)]
pub struct VariableScope {
	slots: HashMap<Symbol, [Option<usize>; Annotation::COUNT]>,
	/// Insertion ordered.
	variables: Vec<Variable>,
}


impl VariableScope {
	/// Insert a variable. Returns false, leaving the scope untouched, if the name is
	/// already bound.
	pub fn add(&mut self, variable: Variable) -> bool {
		let slot = &mut self.slots
			.entry(variable.name.symbol)
			.or_default()
			[variable.name.annotation.index()];

		if slot.is_some() {
			return false;
		}

		*slot = Some(self.variables.len());
		self.variables.push(variable);

		true
	}


	pub fn lookup(&self, name: Name) -> Option<&Variable> {
		let slots = self.slots.get(&name.symbol)?;
		let index = slots[name.annotation.index()]?;
		self.variables.get(index)
	}


	/// The variables in declaration order.
	pub fn iter(&self) -> std::slice::Iter<'_, Variable> {
		self.variables.iter()
	}


	pub fn len(&self) -> usize {
		self.variables.len()
	}


	pub fn is_empty(&self) -> bool {
		self.variables.is_empty()
	}
}


impl<'a> IntoIterator for &'a VariableScope {
	type Item = &'a Variable;
	type IntoIter = std::slice::Iter<'a, Variable>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
