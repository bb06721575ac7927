use std::collections::HashMap;

use super::{
	ast::ParentMap,
	Ast,
	Error,
	Errors,
	NodeId,
	NodeKind,
	Symbol,
};


/// Check that every `goto` and `gosub` targets exactly one label in the same function,
/// or in the main program. Returns the labels by name.
pub fn resolve_labels(ast: &Ast, errors: &mut Errors) -> HashMap<Symbol, NodeId> {
	let mut labels: HashMap<Symbol, NodeId> = HashMap::new();
	let mut jumps = Vec::new();

	for node in ast.iter() {
		match ast.kind(node) {
			&NodeKind::Label(label) => match labels.get(&label) {
				Some(&first) => errors.report(
					Error::duplicate_label(label, ast.span(first), ast.span(node))
				),
				None => {
					labels.insert(label, node);
				}
			},

			&NodeKind::Goto(label) | &NodeKind::Gosub(label) => jumps.push((node, label)),

			_ => (),
		}
	}

	if jumps.is_empty() {
		return labels;
	}

	let parents = ParentMap::build(ast);

	for (jump, label) in jumps {
		match labels.get(&label) {
			None => errors.report(Error::undefined_label(label, ast.span(jump))),

			Some(&target) => {
				if enclosing_function(ast, &parents, jump) != enclosing_function(ast, &parents, target) {
					errors.report(Error::jump_across_function(label, ast.span(jump)));
				}
			}
		}
	}

	labels
}


fn enclosing_function(ast: &Ast, parents: &ParentMap, node: NodeId) -> Option<NodeId> {
	let mut current = parents.parent(node);

	while let Some(node) = current {
		if let NodeKind::FuncDecl { .. } = ast.kind(node) {
			return Some(node);
		}

		current = parents.parent(node);
	}

	None
}
