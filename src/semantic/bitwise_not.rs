use super::{
	ast::{BinaryOp, DepthFirstCursor, NodeId, UnaryOp},
	Ast,
	Error,
	Errors,
	NodeKind,
};


/// Replace every `a .. b` with the unary bitwise not of `a`. The right operand is
/// discarded, so it must not call anything.
///
/// Returns false if any error was found. Offending operators are left untouched.
pub fn eliminate_bitwise_not_rhs(ast: &mut Ast, errors: &mut Errors) -> bool {
	let mut found = Errors::default();
	let mut cursor = DepthFirstCursor::new(ast);

	while let Some(node) = cursor.next(ast) {
		let (left, right) = match ast.kind(node) {
			&NodeKind::BinaryOp { op: BinaryOp::BitNot, left, right } => (left, right),
			_ => continue,
		};

		if has_side_effects(ast, right) {
			found.report(Error::bitwise_not_side_effects(ast.span(right)));
			continue;
		}

		let span = ast.span(node);
		let not = ast.add(NodeKind::UnaryOp { op: UnaryOp::BitNot, operand: left }, span);
		cursor.replace(ast, not);
	}

	let ok = !found.has_errors();
	errors.extend(found);
	ok
}


fn has_side_effects(ast: &Ast, expr: NodeId) -> bool {
	ast
		.iter_from(expr)
		.any(
			|node| matches!(ast.kind(node), NodeKind::FuncCall { .. } | NodeKind::Command { .. })
		)
}
