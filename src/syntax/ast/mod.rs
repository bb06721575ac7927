pub mod fmt;
mod iter;
mod parent;
#[cfg(test)]
mod tests;

use std::path::Path;

use super::{lexer, Span};
pub use crate::symbol::Symbol;
pub use iter::{DepthFirst, DepthFirstCursor};
pub use lexer::{Annotation, Literal};
pub use parent::ParentMap;


/// Index of a node in the syntax tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);


impl NodeId {
	pub fn index(self) -> usize {
		self.0 as usize
	}
}


/// A symbol with its type annotation. `x`, `x#` and `x$` are distinct names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Name {
	pub symbol: Symbol,
	pub annotation: Annotation,
}


impl Name {
	pub fn new(symbol: Symbol, annotation: Annotation) -> Self {
		Self { symbol, annotation }
	}
}


/// The scope a declaration was explicitly placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
	Default,
	Local,
	Global,
}


/// Primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinType {
	Boolean,
	Byte,
	Word,
	Dword,
	Integer,
	DoubleInteger,
	Float,
	DoubleFloat,
	String,
}


impl BuiltinType {
	/// The type implied by an annotation. Bare names are integers.
	pub fn from_annotation(annotation: Annotation) -> Self {
		match annotation {
			Annotation::None => Self::Integer,
			Annotation::DoubleInteger => Self::DoubleInteger,
			Annotation::Word => Self::Word,
			Annotation::DoubleFloat => Self::DoubleFloat,
			Annotation::Float => Self::Float,
			Annotation::String => Self::String,
		}
	}
}


/// The type of a declaration, as written after `as`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeRef {
	/// No explicit type. The type follows from the annotation.
	Default,
	Builtin(BuiltinType),
	/// A user defined type. The declaration is resolved by name when the type was
	/// declared earlier in the program.
	Udt { name: Symbol, decl: Option<NodeId> },
}


impl TypeRef {
	/// The effective builtin type, if not a user defined type.
	pub fn builtin(self, annotation: Annotation) -> Option<BuiltinType> {
		match self {
			Self::Default => Some(BuiltinType::from_annotation(annotation)),
			Self::Builtin(ty) => Some(ty),
			Self::Udt { .. } => None,
		}
	}
}


/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
	Minus,  // -
	BitNot, // ..
	Not,    // not
}


/// Binary operators.
/// Assignment and field access are not represented as operators, but directly as nodes
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
	Pow,   // ^
	Div,   // /
	Mod,   // mod
	Times, // *
	Minus, // -
	Plus,  // +

	ShiftRight, // >>
	ShiftLeft,  // <<

	NotEquals,     // <>
	GreaterEquals, // >=
	LowerEquals,   // <=
	Greater,       // >
	Lower,         // <
	Equals,        // =

	BitAnd, // &&
	BitOr,  // ||
	BitXor, // ~~
	/// Bitwise not of the left operand. The right operand is discarded after parsing.
	BitNot, // ..

	And, // and
	Or,  // or
	Xor, // xor
}


/// All kinds of syntax tree nodes. Child nodes are referenced by index, and every child
/// has exactly one parent.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
	/// A sequence of statements, in program order.
	Block(Vec<NodeId>),

	Literal(Literal),
	/// A reference to a variable.
	Variable(Name),
	UnaryOp {
		op: UnaryOp,
		operand: NodeId,
	},
	BinaryOp {
		op: BinaryOp,
		left: NodeId,
		right: NodeId,
	},
	/// `name(args)`. Array references share this syntax, and are told apart after parsing.
	FuncCall {
		name: Name,
		args: Vec<NodeId>,
	},
	ArrayRef {
		name: Name,
		args: Vec<NodeId>,
		/// The element type.
		ty: TypeRef,
	},
	/// A keyword database command, either as a statement or as an expression.
	Command {
		name: Symbol,
		args: Vec<NodeId>,
	},
	/// Member access on a user defined type value: `base.member`.
	Field {
		base: NodeId,
		member: NodeId,
	},

	VarDecl {
		scope: Scope,
		name: Name,
		ty: TypeRef,
		init: Option<NodeId>,
	},
	ArrayDecl {
		scope: Scope,
		name: Name,
		dims: Vec<NodeId>,
		ty: TypeRef,
	},
	ArrayUndim {
		name: Name,
		dims: Vec<NodeId>,
	},
	Assignment {
		target: NodeId,
		value: NodeId,
	},
	UdtDecl {
		name: Symbol,
		/// The member list.
		body: NodeId,
	},
	/// The members of a user defined type, which are variable or array declarations.
	UdtBody(Vec<NodeId>),

	Conditional {
		condition: NodeId,
		then: NodeId,
		/// An else block. `elseif` chains are nested conditionals in else blocks.
		otherwise: Option<NodeId>,
	},
	Select {
		expr: NodeId,
		cases: NodeId,
	},
	/// Cases of a select statement. At most one of them is a default case.
	CaseList(Vec<NodeId>),
	Case {
		values: Vec<NodeId>,
		body: NodeId,
	},
	DefaultCase {
		body: NodeId,
	},
	ForLoop {
		counter: NodeId,
		start: NodeId,
		end: NodeId,
		step: Option<NodeId>,
		body: NodeId,
	},
	WhileLoop {
		condition: NodeId,
		body: NodeId,
	},
	/// `repeat ... until condition`.
	UntilLoop {
		body: NodeId,
		condition: NodeId,
	},
	/// `do ... loop`.
	InfiniteLoop {
		body: NodeId,
	},
	/// Break out of the innermost loop.
	Exit,

	Label(Symbol),
	Goto(Symbol),
	Gosub(Symbol),
	/// Return from a gosub.
	SubReturn,
	End,

	FuncDecl {
		name: Name,
		/// Parameter declarations.
		params: Vec<NodeId>,
		body: NodeId,
		/// The value after `endfunction`.
		result: Option<NodeId>,
	},
	FuncExit {
		value: Option<NodeId>,
	},
}


impl NodeKind {
	/// The direct children, in source order. Always computed from the current state, so
	/// replacements are reflected immediately.
	pub fn children(&self) -> Vec<NodeId> {
		let mut children = Vec::new();

		match self {
			Self::Block(statements) => children.extend(statements),
			Self::Literal(_) => (),
			Self::Variable(_) => (),
			Self::UnaryOp { operand, .. } => children.push(*operand),
			Self::BinaryOp { left, right, .. } => children.extend(&[*left, *right]),
			Self::FuncCall { args, .. } => children.extend(args),
			Self::ArrayRef { args, .. } => children.extend(args),
			Self::Command { args, .. } => children.extend(args),
			Self::Field { base, member } => children.extend(&[*base, *member]),
			Self::VarDecl { init, .. } => children.extend(init),
			Self::ArrayDecl { dims, .. } => children.extend(dims),
			Self::ArrayUndim { dims, .. } => children.extend(dims),
			Self::Assignment { target, value } => children.extend(&[*target, *value]),
			Self::UdtDecl { body, .. } => children.push(*body),
			Self::UdtBody(members) => children.extend(members),
			Self::Conditional { condition, then, otherwise } => {
				children.extend(&[*condition, *then]);
				children.extend(otherwise);
			}
			Self::Select { expr, cases } => children.extend(&[*expr, *cases]),
			Self::CaseList(cases) => children.extend(cases),
			Self::Case { values, body } => {
				children.extend(values);
				children.push(*body);
			}
			Self::DefaultCase { body } => children.push(*body),
			Self::ForLoop { counter, start, end, step, body } => {
				children.extend(&[*counter, *start, *end]);
				children.extend(step);
				children.push(*body);
			}
			Self::WhileLoop { condition, body } => children.extend(&[*condition, *body]),
			Self::UntilLoop { body, condition } => children.extend(&[*body, *condition]),
			Self::InfiniteLoop { body } => children.push(*body),
			Self::Exit => (),
			Self::Label(_) => (),
			Self::Goto(_) => (),
			Self::Gosub(_) => (),
			Self::SubReturn => (),
			Self::End => (),
			Self::FuncDecl { params, body, result, .. } => {
				children.extend(params);
				children.push(*body);
				children.extend(result);
			}
			Self::FuncExit { value } => children.extend(value),
		}

		children
	}


	/// Mutable references to the child slots, in the same order as `children`.
	fn children_mut(&mut self) -> Vec<&mut NodeId> {
		let mut children = Vec::new();

		match self {
			Self::Block(statements) => children.extend(statements),
			Self::Literal(_) => (),
			Self::Variable(_) => (),
			Self::UnaryOp { operand, .. } => children.push(operand),
			Self::BinaryOp { left, right, .. } => {
				children.push(left);
				children.push(right);
			}
			Self::FuncCall { args, .. } => children.extend(args),
			Self::ArrayRef { args, .. } => children.extend(args),
			Self::Command { args, .. } => children.extend(args),
			Self::Field { base, member } => {
				children.push(base);
				children.push(member);
			}
			Self::VarDecl { init, .. } => children.extend(init),
			Self::ArrayDecl { dims, .. } => children.extend(dims),
			Self::ArrayUndim { dims, .. } => children.extend(dims),
			Self::Assignment { target, value } => {
				children.push(target);
				children.push(value);
			}
			Self::UdtDecl { body, .. } => children.push(body),
			Self::UdtBody(members) => children.extend(members),
			Self::Conditional { condition, then, otherwise } => {
				children.push(condition);
				children.push(then);
				children.extend(otherwise);
			}
			Self::Select { expr, cases } => {
				children.push(expr);
				children.push(cases);
			}
			Self::CaseList(cases) => children.extend(cases),
			Self::Case { values, body } => {
				children.extend(values);
				children.push(body);
			}
			Self::DefaultCase { body } => children.push(body),
			Self::ForLoop { counter, start, end, step, body } => {
				children.push(counter);
				children.push(start);
				children.push(end);
				children.extend(step);
				children.push(body);
			}
			Self::WhileLoop { condition, body } => {
				children.push(condition);
				children.push(body);
			}
			Self::UntilLoop { body, condition } => {
				children.push(body);
				children.push(condition);
			}
			Self::InfiniteLoop { body } => children.push(body),
			Self::Exit => (),
			Self::Label(_) => (),
			Self::Goto(_) => (),
			Self::Gosub(_) => (),
			Self::SubReturn => (),
			Self::End => (),
			Self::FuncDecl { params, body, result, .. } => {
				children.extend(params);
				children.push(body);
				children.extend(result);
			}
			Self::FuncExit { value } => children.extend(value),
		}

		children
	}


	/// Substitute the child slot holding `old` with `new`.
	/// Returns whether the old node was a child.
	pub fn replace_child(&mut self, old: NodeId, new: NodeId) -> bool {
		match self.children_mut().into_iter().find(|child| **child == old) {
			Some(slot) => {
				*slot = new;
				true
			}
			None => false,
		}
	}
}


/// A node in the syntax tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
	pub kind: NodeKind,
	pub span: Span,
}


/// The syntax tree of a source file. Nodes are stored in an arena, and are never
/// removed. A node that is replaced is simply unreachable from the root.
#[derive(Debug)]
pub struct Ast {
	/// The source path.
	pub source: Box<Path>,
	nodes: Vec<Node>,
	/// The root block. None when the program has no statements.
	pub root: Option<NodeId>,
}


impl Ast {
	pub fn new(source: Box<Path>) -> Self {
		Self { source, nodes: Vec::new(), root: None }
	}


	/// Insert a node in the arena, returning its id.
	pub fn add(&mut self, kind: NodeKind, span: Span) -> NodeId {
		let id = NodeId(self.nodes.len() as u32);
		self.nodes.push(Node { kind, span });
		id
	}


	pub fn node(&self, id: NodeId) -> &Node {
		&self.nodes[id.index()]
	}


	pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
		&mut self.nodes[id.index()]
	}


	pub fn kind(&self, id: NodeId) -> &NodeKind {
		&self.node(id).kind
	}


	pub fn span(&self, id: NodeId) -> Span {
		self.node(id).span
	}


	pub fn children(&self, id: NodeId) -> Vec<NodeId> {
		self.kind(id).children()
	}


	/// Substitute `old` with `new` in the parent's child list.
	pub fn replace_child(&mut self, parent: NodeId, old: NodeId, new: NodeId) -> bool {
		self.node_mut(parent).kind.replace_child(old, new)
	}


	/// Deep copy a subtree, returning the root of the copy.
	pub fn duplicate(&mut self, id: NodeId) -> NodeId {
		let node = self.node(id).clone();
		let copy = self.add(node.kind, node.span);

		for child in self.children(copy) {
			let child_copy = self.duplicate(child);
			self.node_mut(copy).kind.replace_child(child, child_copy);
		}

		copy
	}


	/// Pre-order traversal from the root.
	pub fn iter(&self) -> DepthFirst<'_> {
		DepthFirst::new(self, self.root)
	}


	/// Pre-order traversal of a subtree.
	pub fn iter_from(&self, id: NodeId) -> DepthFirst<'_> {
		DepthFirst::new(self, Some(id))
	}


	/// Number of nodes in the arena, including unreachable ones.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}


	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}
