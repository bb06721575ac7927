use std::collections::HashMap;

use super::{
	ast::{BuiltinType, DepthFirstCursor},
	Ast,
	Error,
	Errors,
	Name,
	NodeKind,
	Span,
	TypeRef,
};


/// Turn calls that name a declared array into array references.
///
/// Arrays become visible at their declaration, in traversal order, and stay visible for
/// the rest of the program regardless of function boundaries. A call that precedes the
/// array declaration stays a call. Functions are visible everywhere.
///
/// Returns false if any error was found. Unresolved calls are only warnings.
pub fn resolve_array_func_ambiguity(ast: &mut Ast, errors: &mut Errors) -> bool {
	let mut found = Errors::default();
	let functions = gather_functions(ast, &mut found);

	// Declared arrays, with their element type and declaration span.
	let mut arrays: HashMap<Name, (TypeRef, Span)> = HashMap::new();
	let mut cursor = DepthFirstCursor::new(ast);

	while let Some(node) = cursor.next(ast) {
		let span = ast.span(node);

		match ast.kind(node) {
			NodeKind::ArrayDecl { name, ty, .. } => {
				let in_udt = cursor
					.parent()
					.map(|parent| matches!(ast.kind(parent), NodeKind::UdtBody(_)))
					.unwrap_or(false);

				if in_udt {
					continue;
				}

				if let Some(&(_, first)) = arrays.get(name) {
					found.report(Error::array_redeclared(*name, first, span));
				} else {
					if let Some(&function) = functions.get(name) {
						found.report(Error::array_function_clash(*name, function, span));
					}

					arrays.insert(*name, (*ty, span));
				}
			}

			NodeKind::FuncCall { name, args } => {
				if let Some(&(ty, _)) = arrays.get(name) {
					let ty = match ty {
						TypeRef::Default => TypeRef::Builtin(BuiltinType::from_annotation(name.annotation)),
						ty => ty,
					};

					let array_ref = NodeKind::ArrayRef { name: *name, args: args.clone(), ty };
					let array_ref = ast.add(array_ref, span);

					log::trace!("call at {} is an array reference", span);
					cursor.replace(ast, array_ref);
				} else if !functions.contains_key(name) {
					found.report(Error::unresolved_reference(*name, span));
				}
			}

			_ => (),
		}
	}

	let ok = !found.has_errors();
	errors.extend(found);
	ok
}


/// Collect all function declarations, reporting duplicates.
fn gather_functions(ast: &Ast, errors: &mut Errors) -> HashMap<Name, Span> {
	let mut functions = HashMap::new();

	for node in ast.iter() {
		if let NodeKind::FuncDecl { name, .. } = ast.kind(node) {
			let span = ast.span(node);

			if let Some(&first) = functions.get(name) {
				errors.report(Error::function_redeclared(*name, first, span));
			} else {
				functions.insert(*name, span);
			}
		}
	}

	functions
}
