use std::fmt::Display as _;

use super::{Annotation, Keyword, Literal, Operator, Token, TokenKind};
use crate::{
	fmt::{self, Display},
	symbol,
	term::color,
};


impl Keyword {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::If => "if",
			Self::Then => "then",
			Self::Else => "else",
			Self::ElseIf => "elseif",
			Self::EndIf => "endif",
			Self::Select => "select",
			Self::Case => "case",
			Self::Default => "default",
			Self::EndCase => "endcase",
			Self::EndSelect => "endselect",
			Self::For => "for",
			Self::To => "to",
			Self::Step => "step",
			Self::Next => "next",
			Self::While => "while",
			Self::EndWhile => "endwhile",
			Self::Repeat => "repeat",
			Self::Until => "until",
			Self::Do => "do",
			Self::Loop => "loop",
			Self::Exit => "exit",
			Self::Function => "function",
			Self::EndFunction => "endfunction",
			Self::ExitFunction => "exitfunction",
			Self::Goto => "goto",
			Self::Gosub => "gosub",
			Self::Return => "return",
			Self::End => "end",
			Self::Dim => "dim",
			Self::Undim => "undim",
			Self::Global => "global",
			Self::Local => "local",
			Self::As => "as",
			Self::Type => "type",
			Self::EndType => "endtype",
			Self::Inc => "inc",
			Self::Dec => "dec",
			Self::Boolean => "boolean",
			Self::Byte => "byte",
			Self::Word => "word",
			Self::Dword => "dword",
			Self::Integer => "integer",
			Self::Double => "double",
			Self::Float => "float",
			Self::String => "string",
		}
	}
}


impl std::fmt::Display for Keyword {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		color::Fg(color::Blue, self.as_str()).fmt(f)
	}
}


impl std::fmt::Display for Annotation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.as_str().fmt(f)
	}
}


impl std::fmt::Display for Literal {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Boolean(true) => color::Fg(color::Blue, "true").fmt(f),
			Self::Boolean(false) => color::Fg(color::Blue, "false").fmt(f),
			Self::Integer(i) => i.fmt(f),
			Self::Float(n) => n.fmt(f),
			Self::String(s) => write!(f, "\"{}\"", color::Bold(s)),
		}
	}
}


impl Operator {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Plus => "+",
			Self::Minus => "-",
			Self::Times => "*",
			Self::Div => "/",
			Self::Mod => "mod",
			Self::Pow => "^",
			Self::ShiftLeft => "<<",
			Self::ShiftRight => ">>",
			Self::BitAnd => "&&",
			Self::BitOr => "||",
			Self::BitXor => "~~",
			Self::BitNot => "..",
			Self::Equals => "=",
			Self::NotEquals => "<>",
			Self::Greater => ">",
			Self::GreaterEquals => ">=",
			Self::Lower => "<",
			Self::LowerEquals => "<=",
			Self::Not => "not",
			Self::And => "and",
			Self::Or => "or",
			Self::Xor => "xor",
		}
	}
}


impl std::fmt::Display for Operator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		color::Fg(color::Yellow, self.as_str()).fmt(f)
	}
}


impl<'a> Display<'a> for TokenKind {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter<'_>, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::Word(word, annotation) => write!(f, "{}{}", word, annotation),
			Self::Identifier(symbol, annotation) => {
				symbol.fmt(f, context)?;
				annotation.fmt(f)
			}
			Self::Keyword(keyword) => keyword.fmt(f),
			Self::Command(symbol) => {
				write!(f, "command ")?;
				symbol.fmt(f, context)
			}
			Self::Operator(op) => op.fmt(f),
			Self::Literal(literal) => literal.fmt(f),
			Self::Colon => ":".fmt(f),
			Self::Comma => ",".fmt(f),
			Self::Dot => ".".fmt(f),
			Self::OpenParens => "(".fmt(f),
			Self::CloseParens => ")".fmt(f),
			Self::Newline => "end of line".fmt(f),
		}
	}
}


impl<'a> Display<'a> for Token {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter<'_>, context: Self::Context) -> std::fmt::Result {
		write!(f, "{} at {}", fmt::Show(&self.kind, context), self.span)
	}
}
