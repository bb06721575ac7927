use std::collections::HashMap;

use super::{Ast, Error, Errors, NodeId, NodeKind, Symbol, TypeRef};


/// Link user defined type references to their declarations. The parser only links types
/// declared before their use, this resolves the rest.
pub fn resolve_types(ast: &mut Ast, errors: &mut Errors) -> HashMap<Symbol, NodeId> {
	let mut udts = HashMap::new();
	let mut pending = Vec::new();

	for node in ast.iter() {
		match ast.kind(node) {
			&NodeKind::UdtDecl { name, .. } => {
				udts.entry(name).or_insert(node);
			}

			NodeKind::VarDecl { ty: TypeRef::Udt { decl: None, .. }, .. }
			| NodeKind::ArrayDecl { ty: TypeRef::Udt { decl: None, .. }, .. }
			| NodeKind::ArrayRef { ty: TypeRef::Udt { decl: None, .. }, .. } => pending.push(node),

			_ => (),
		}
	}

	for node in pending {
		let span = ast.span(node);

		let ty = match &mut ast.node_mut(node).kind {
			NodeKind::VarDecl { ty, .. } | NodeKind::ArrayDecl { ty, .. } | NodeKind::ArrayRef { ty, .. } => ty,
			_ => continue,
		};

		if let TypeRef::Udt { name, decl } = ty {
			match udts.get(name) {
				Some(&udt) => *decl = Some(udt),
				None => errors.report(Error::undefined_type(*name, span)),
			}
		}
	}

	udts
}
