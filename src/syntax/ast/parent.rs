use std::collections::HashMap;

use super::{Ast, DepthFirst, NodeId};


/// Maps each node to its parent. This is a lookup table derived from the tree, so it must
/// be refreshed after the tree is modified.
#[derive(Debug, Default)]
pub struct ParentMap(HashMap<NodeId, NodeId>);


impl ParentMap {
	/// Build the map for the whole tree.
	pub fn build(ast: &Ast) -> Self {
		let mut map = Self::default();

		if let Some(root) = ast.root {
			map.update_from(ast, root);
		}

		map
	}


	/// Refresh the entries of every node below the given subtree root. Entries of nodes
	/// outside the subtree are kept, even if they became stale.
	pub fn update_from(&mut self, ast: &Ast, subroot: NodeId) {
		for node in DepthFirst::new(ast, Some(subroot)) {
			for child in ast.children(node) {
				self.0.insert(child, node);
			}
		}
	}


	pub fn parent(&self, node: NodeId) -> Option<NodeId> {
		self.0.get(&node).copied()
	}


	pub fn len(&self) -> usize {
		self.0.len()
	}


	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
