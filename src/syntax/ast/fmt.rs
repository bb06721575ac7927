use std::fmt::Display as _;

use super::{
	Ast,
	BinaryOp,
	BuiltinType,
	Name,
	NodeId,
	NodeKind,
	Scope,
	TypeRef,
	UnaryOp,
};
use crate::{
	fmt::{Display, Indentation},
	symbol,
	term::color,
};


pub const ILL_FORMED: color::Fg<color::Red, &'static str> = color::Fg(color::Red, "***ill-formed***");


impl std::fmt::Display for UnaryOp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let op = match self {
			Self::Minus => "-",
			Self::BitNot => "..",
			Self::Not => "not",
		};

		color::Fg(color::Yellow, op).fmt(f)
	}
}


impl std::fmt::Display for BinaryOp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let op = match self {
			Self::Pow => "^",
			Self::Div => "/",
			Self::Mod => "mod",
			Self::Times => "*",
			Self::Minus => "-",
			Self::Plus => "+",
			Self::ShiftRight => ">>",
			Self::ShiftLeft => "<<",
			Self::NotEquals => "<>",
			Self::GreaterEquals => ">=",
			Self::LowerEquals => "<=",
			Self::Greater => ">",
			Self::Lower => "<",
			Self::Equals => "=",
			Self::BitAnd => "&&",
			Self::BitOr => "||",
			Self::BitXor => "~~",
			Self::BitNot => "..",
			Self::And => "and",
			Self::Or => "or",
			Self::Xor => "xor",
		};

		color::Fg(color::Yellow, op).fmt(f)
	}
}


impl std::fmt::Display for BuiltinType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let ty = match self {
			Self::Boolean => "boolean",
			Self::Byte => "byte",
			Self::Word => "word",
			Self::Dword => "dword",
			Self::Integer => "integer",
			Self::DoubleInteger => "double integer",
			Self::Float => "float",
			Self::DoubleFloat => "double float",
			Self::String => "string",
		};

		color::Fg(color::Blue, ty).fmt(f)
	}
}


impl std::fmt::Display for Scope {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Default => Ok(()),
			Self::Local => write!(f, "{} ", color::Fg(color::Blue, "local")),
			Self::Global => write!(f, "{} ", color::Fg(color::Blue, "global")),
		}
	}
}


impl<'a> Display<'a> for Name {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter<'_>, context: Self::Context) -> std::fmt::Result {
		self.symbol.fmt(f, context)?;
		self.annotation.fmt(f)
	}
}


impl<'a> Display<'a> for TypeRef {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter<'_>, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::Default => Ok(()),
			Self::Builtin(ty) => write!(f, " as {}", ty),
			Self::Udt { name, decl } => {
				" as ".fmt(f)?;
				name.fmt(f, context)?;
				if decl.is_none() {
					" (unresolved)".fmt(f)?;
				}
				Ok(())
			}
		}
	}
}


/// Print the tree, one node per line, children indented below their parent.
impl<'a> Display<'a> for Ast {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter<'_>, context: Self::Context) -> std::fmt::Result {
		match self.root {
			Some(root) => self.fmt_node(root, f, context, Indentation::default()),
			None => writeln!(f, "{}", color::Fg(color::Cyan, "(empty)")),
		}
	}
}


impl Ast {
	fn fmt_node(
		&self,
		id: NodeId,
		f: &mut std::fmt::Formatter<'_>,
		context: &symbol::Interner,
		indentation: Indentation,
	) -> std::fmt::Result {
		indentation.fmt(f)?;

		let label = |name: &'static str| color::Fg(color::Cyan, name);

		match self.kind(id) {
			NodeKind::Block(_) => label("block").fmt(f)?,
			NodeKind::Literal(literal) => write!(f, "{} {}", label("literal"), literal)?,
			NodeKind::Variable(name) => {
				write!(f, "{} ", label("variable"))?;
				name.fmt(f, context)?;
			}
			NodeKind::UnaryOp { op, .. } => write!(f, "{} {}", label("unary"), op)?,
			NodeKind::BinaryOp { op, .. } => write!(f, "{} {}", label("binary"), op)?,
			NodeKind::FuncCall { name, .. } => {
				write!(f, "{} ", label("call"))?;
				name.fmt(f, context)?;
			}
			NodeKind::ArrayRef { name, ty, .. } => {
				write!(f, "{} ", label("array ref"))?;
				name.fmt(f, context)?;
				ty.fmt(f, context)?;
			}
			NodeKind::Command { name, .. } => {
				write!(f, "{} ", label("command"))?;
				name.fmt(f, context)?;
			}
			NodeKind::Field { .. } => label("field").fmt(f)?,
			NodeKind::VarDecl { scope, name, ty, .. } => {
				write!(f, "{} {}", label("var decl"), scope)?;
				name.fmt(f, context)?;
				ty.fmt(f, context)?;
			}
			NodeKind::ArrayDecl { scope, name, ty, .. } => {
				write!(f, "{} {}", label("dim"), scope)?;
				name.fmt(f, context)?;
				ty.fmt(f, context)?;
			}
			NodeKind::ArrayUndim { name, .. } => {
				write!(f, "{} ", label("undim"))?;
				name.fmt(f, context)?;
			}
			NodeKind::Assignment { .. } => label("assignment").fmt(f)?,
			NodeKind::UdtDecl { name, .. } => {
				write!(f, "{} ", label("type"))?;
				name.fmt(f, context)?;
			}
			NodeKind::UdtBody(_) => label("members").fmt(f)?,
			NodeKind::Conditional { .. } => label("if").fmt(f)?,
			NodeKind::Select { .. } => label("select").fmt(f)?,
			NodeKind::CaseList(_) => label("cases").fmt(f)?,
			NodeKind::Case { .. } => label("case").fmt(f)?,
			NodeKind::DefaultCase { .. } => label("case default").fmt(f)?,
			NodeKind::ForLoop { .. } => label("for").fmt(f)?,
			NodeKind::WhileLoop { .. } => label("while").fmt(f)?,
			NodeKind::UntilLoop { .. } => label("repeat").fmt(f)?,
			NodeKind::InfiniteLoop { .. } => label("do").fmt(f)?,
			NodeKind::Exit => label("exit").fmt(f)?,
			NodeKind::Label(symbol) => {
				write!(f, "{} ", label("label"))?;
				symbol.fmt(f, context)?;
			}
			NodeKind::Goto(symbol) => {
				write!(f, "{} ", label("goto"))?;
				symbol.fmt(f, context)?;
			}
			NodeKind::Gosub(symbol) => {
				write!(f, "{} ", label("gosub"))?;
				symbol.fmt(f, context)?;
			}
			NodeKind::SubReturn => label("return").fmt(f)?,
			NodeKind::End => label("end").fmt(f)?,
			NodeKind::FuncDecl { name, .. } => {
				write!(f, "{} ", label("function"))?;
				name.fmt(f, context)?;
			}
			NodeKind::FuncExit { .. } => label("exitfunction").fmt(f)?,
		}

		writeln!(f)?;

		for child in self.children(id) {
			self.fmt_node(child, f, context, indentation.increase())?;
		}

		Ok(())
	}
}
