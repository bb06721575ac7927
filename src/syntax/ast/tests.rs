use assert_matches::assert_matches;

use super::*;
use crate::symbol;


/// Builds `a = b + c`, returning the tree, the assignment, and the binary operator.
fn assignment(interner: &mut symbol::Interner) -> (Ast, NodeId, NodeId) {
	let mut ast = Ast::new(Path::new("<test>").into());
	let span = Span::default();

	let mut var = |ast: &mut Ast, name: &str| {
		let symbol = interner.get_or_intern(name);
		ast.add(NodeKind::Variable(Name::new(symbol, Annotation::None)), span)
	};

	let a = var(&mut ast, "a");
	let b = var(&mut ast, "b");
	let c = var(&mut ast, "c");
	let sum = ast.add(NodeKind::BinaryOp { op: BinaryOp::Plus, left: b, right: c }, span);
	let assignment = ast.add(NodeKind::Assignment { target: a, value: sum }, span);
	let root = ast.add(NodeKind::Block(vec![assignment]), span);
	ast.root = Some(root);

	(ast, assignment, sum)
}


#[test]
fn test_empty_tree() {
	let ast = Ast::new(Path::new("<test>").into());

	assert_eq!(ast.iter().count(), 0);
	assert_eq!(DepthFirstCursor::new(&ast).next(&ast), None);
	assert!(ParentMap::build(&ast).is_empty());
}


#[test]
fn test_pre_order() {
	let mut interner = symbol::Interner::new();
	let (ast, assignment, sum) = assignment(&mut interner);

	let order: Vec<_> = ast.iter().collect();

	assert_eq!(order.len(), 6);
	assert_eq!(order[0], ast.root.expect("no root"));
	assert_eq!(order[1], assignment);
	assert_matches!(ast.kind(order[2]), NodeKind::Variable(_));
	assert_eq!(order[3], sum);
	assert_eq!(&order[4 ..], &ast.children(sum)[..]);
}


#[test]
fn test_children_order_matches_slots() {
	let mut kind = NodeKind::ForLoop {
		counter: NodeId(0),
		start: NodeId(1),
		end: NodeId(2),
		step: Some(NodeId(3)),
		body: NodeId(4),
	};

	assert_eq!(kind.children(), (0 .. 5).map(NodeId).collect::<Vec<_>>());

	assert!(kind.replace_child(NodeId(3), NodeId(7)));
	assert!(!kind.replace_child(NodeId(3), NodeId(8)));
	assert_matches!(kind, NodeKind::ForLoop { step: Some(NodeId(7)), .. });
}


#[test]
fn test_replace_during_traversal() {
	let mut interner = symbol::Interner::new();
	let (mut ast, assignment, sum) = assignment(&mut interner);

	let x = ast.add(
		NodeKind::Variable(Name::new(interner.get_or_intern("x"), Annotation::Float)),
		Span::default(),
	);
	let one = ast.add(NodeKind::Literal(Literal::Integer(1)), Span::default());
	let call = ast.add(
		NodeKind::FuncCall {
			name: Name::new(interner.get_or_intern("f"), Annotation::None),
			args: vec![x, one],
		},
		Span::default(),
	);

	let mut cursor = DepthFirstCursor::new(&ast);
	let mut visited = Vec::new();

	while let Some(node) = cursor.next(&ast) {
		if node == sum {
			assert_eq!(cursor.parent(), Some(assignment));
			assert_eq!(cursor.replace(&mut ast, call), Some(sum));
			assert_eq!(cursor.current(), Some(call));
		}

		visited.push(cursor.current());
	}

	// The replacement's children come next, and the old children are never visited.
	let visited: Vec<_> = visited.into_iter().flatten().collect();
	assert_eq!(visited.len(), 6);
	assert_eq!(&visited[3 ..], &[call, x, one]);

	assert_matches!(ast.kind(assignment), &NodeKind::Assignment { value, .. } if value == call);

	// The parent map reflects the new parentage.
	let parents = ParentMap::build(&ast);
	assert_eq!(parents.parent(call), Some(assignment));
	assert_eq!(parents.parent(x), Some(call));
	assert_eq!(parents.parent(one), Some(call));
}


#[test]
fn test_replace_root() {
	let mut interner = symbol::Interner::new();
	let (mut ast, _, _) = assignment(&mut interner);
	let empty = ast.add(NodeKind::Block(Vec::new()), Span::default());

	let mut cursor = DepthFirstCursor::new(&ast);
	let root = cursor.next(&ast);
	assert_eq!(cursor.parent(), None);

	assert_eq!(cursor.replace(&mut ast, empty), root);
	assert_eq!(ast.root, Some(empty));
	assert_eq!(cursor.next(&ast), None);
}


#[test]
fn test_subtree_root_without_parent_is_not_replaceable() {
	let mut interner = symbol::Interner::new();
	let (mut ast, _, sum) = assignment(&mut interner);
	let end = ast.add(NodeKind::End, Span::default());

	let mut cursor = DepthFirstCursor::from_node(sum, None);
	assert_eq!(cursor.next(&ast), Some(sum));
	assert_eq!(cursor.replace(&mut ast, end), None);
	assert_eq!(cursor.current(), Some(sum));
}


#[test]
fn test_parent_map_update_from_subtree() {
	let mut interner = symbol::Interner::new();
	let (mut ast, assignment, sum) = assignment(&mut interner);

	let mut parents = ParentMap::build(&ast);
	assert_eq!(parents.len(), 5);
	assert_eq!(parents.parent(sum), Some(assignment));

	// Swap the operands of the sum.
	let operands = ast.children(sum);
	ast.node_mut(sum).kind = NodeKind::BinaryOp {
		op: BinaryOp::Times,
		left: operands[1],
		right: operands[0],
	};

	let negated = ast.add(NodeKind::UnaryOp { op: UnaryOp::Minus, operand: operands[0] }, Span::default());
	assert!(ast.replace_child(sum, operands[0], negated));

	parents.update_from(&ast, sum);

	assert_eq!(parents.parent(negated), Some(sum));
	assert_eq!(parents.parent(operands[0]), Some(negated));
	assert_eq!(parents.parent(operands[1]), Some(sum));
	assert_eq!(parents.parent(sum), Some(assignment));
}


#[test]
fn test_duplicate_is_deep() {
	let mut interner = symbol::Interner::new();
	let (mut ast, assignment, sum) = assignment(&mut interner);
	let nodes = ast.len();

	let copy = ast.duplicate(sum);

	assert_eq!(ast.len(), nodes + 3);
	assert_ne!(copy, sum);
	assert_matches!(ast.kind(copy), NodeKind::BinaryOp { op: BinaryOp::Plus, .. });

	let original = ast.children(sum);
	let copied = ast.children(copy);
	assert_eq!(copied.len(), 2);

	for (original, copied) in original.into_iter().zip(copied) {
		assert_ne!(original, copied);
		assert_eq!(ast.kind(original), ast.kind(copied));
	}

	// The copy is detached.
	assert_eq!(ast.iter().count(), 6);
	assert_eq!(ParentMap::build(&ast).parent(copy), None);
	assert_eq!(ParentMap::build(&ast).parent(sum), Some(assignment));
}
