use super::{Annotation, Ast, Error, Errors, Name, NodeId, NodeKind};


/// Reject annotated names on the left of a member access, as in `p#.x`. Values of user
/// defined types have no annotation, so the annotation can only mislead.
///
/// Returns false if any error was found.
pub fn validate_field_bases(ast: &Ast, errors: &mut Errors) -> bool {
	let mut found = Errors::default();

	for node in ast.iter() {
		let base = match ast.kind(node) {
			&NodeKind::Field { base, .. } => base,
			_ => continue,
		};

		if let Some(name) = value_name(ast, base) {
			if name.annotation != Annotation::None {
				found.report(Error::annotated_udt_value(name, ast.span(base)));
			}
		}
	}

	let ok = !found.has_errors();
	errors.extend(found);
	ok
}


/// The name that holds the value of a reference. For a chain `a.b.c`, that is the last
/// member.
fn value_name(ast: &Ast, node: NodeId) -> Option<Name> {
	match ast.kind(node) {
		&NodeKind::Variable(name) => Some(name),
		&NodeKind::FuncCall { name, .. } | &NodeKind::ArrayRef { name, .. } => Some(name),
		&NodeKind::Field { member, .. } => value_name(ast, member),
		_ => None,
	}
}
