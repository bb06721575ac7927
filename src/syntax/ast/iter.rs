use super::{Ast, NodeId};


/// Read only pre-order traversal. A node is visited before its children, and children
/// are visited in order.
#[derive(Debug)]
pub struct DepthFirst<'a> {
	ast: &'a Ast,
	pending: Vec<NodeId>,
}


impl<'a> DepthFirst<'a> {
	pub fn new(ast: &'a Ast, root: Option<NodeId>) -> Self {
		Self { ast, pending: root.into_iter().collect() }
	}
}


impl<'a> Iterator for DepthFirst<'a> {
	type Item = NodeId;

	fn next(&mut self) -> Option<NodeId> {
		let node = self.pending.pop()?;
		self.pending.extend(self.ast.children(node).into_iter().rev());
		Some(node)
	}
}


/// Pre-order traversal that allows replacing the current node.
///
/// The cursor doesn't borrow the tree, which is passed to each operation instead. The
/// children of the current node are only scheduled when advancing, so a replacement
/// node's children are the next ones visited, and the replaced node's are never visited.
#[derive(Debug, Default)]
pub struct DepthFirstCursor {
	/// Pending nodes, with their parents.
	pending: Vec<(NodeId, Option<NodeId>)>,
	current: Option<(NodeId, Option<NodeId>)>,
	/// The traversal started at the tree root, which may be replaced.
	from_root: bool,
}


impl DepthFirstCursor {
	/// Traverse the whole tree.
	pub fn new(ast: &Ast) -> Self {
		Self {
			pending: ast.root.map(|root| (root, None)).into_iter().collect(),
			current: None,
			from_root: true,
		}
	}


	/// Traverse a subtree. The parent of the subtree root must be supplied for it to be
	/// replaceable.
	pub fn from_node(node: NodeId, parent: Option<NodeId>) -> Self {
		Self {
			pending: vec![(node, parent)],
			current: None,
			from_root: false,
		}
	}


	/// Advance to the next node.
	pub fn next(&mut self, ast: &Ast) -> Option<NodeId> {
		if let Some((node, _)) = self.current.take() {
			self.pending.extend(
				ast.children(node)
					.into_iter()
					.rev()
					.map(|child| (child, Some(node)))
			);
		}

		self.current = self.pending.pop();
		self.current()
	}


	/// The node visited by the last call to `next`.
	pub fn current(&self) -> Option<NodeId> {
		self.current.map(|(node, _)| node)
	}


	/// The parent of the current node, as tracked by the traversal.
	pub fn parent(&self) -> Option<NodeId> {
		self.current.and_then(|(_, parent)| parent)
	}


	/// Substitute the current node with `new` in its parent. Traversal resumes as if the
	/// new node had always been in place. Returns the replaced node, or None if there is
	/// no current node or it can't be replaced.
	pub fn replace(&mut self, ast: &mut Ast, new: NodeId) -> Option<NodeId> {
		let (old, parent) = self.current?;

		let replaced = match parent {
			Some(parent) => ast.replace_child(parent, old, new),
			None if self.from_root && ast.root == Some(old) => {
				ast.root = Some(new);
				true
			}
			None => false,
		};

		if replaced {
			self.current = Some((new, parent));
			Some(old)
		} else {
			None
		}
	}
}
