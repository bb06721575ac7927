mod fmt;

use std::ops::Range;

use crate::symbol::Symbol;
use super::Span;


/// Builtin keywords of the language. Keywords supplied by the keyword database are
/// commands, and don't appear here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
	If,
	Then,
	Else,
	ElseIf,
	EndIf,
	Select,
	Case,
	Default,
	EndCase,
	EndSelect,
	For,
	To,
	Step,
	Next,
	While,
	EndWhile,
	Repeat,
	Until,
	Do,
	Loop,
	Exit,
	Function,
	EndFunction,
	ExitFunction,
	Goto,
	Gosub,
	Return,
	End,
	Dim,
	Undim,
	Global,
	Local,
	As,
	Type,
	EndType,
	Inc,
	Dec,

	// Type names:
	Boolean,
	Byte,
	Word,
	Dword,
	Integer,
	Double,
	Float,
	String,
}


/// Classification of a builtin word.
#[derive(Debug, Clone, PartialEq)]
pub enum Builtin {
	Keyword(Keyword),
	Operator(Operator),
	Literal(Literal),
}


impl Builtin {
	/// Lookup a builtin by spelling, ignoring case.
	pub fn lookup(word: &str) -> Option<Self> {
		let builtin = match word.to_ascii_lowercase().as_str() {
			"if" => Self::Keyword(Keyword::If),
			"then" => Self::Keyword(Keyword::Then),
			"else" => Self::Keyword(Keyword::Else),
			"elseif" => Self::Keyword(Keyword::ElseIf),
			"endif" => Self::Keyword(Keyword::EndIf),
			"select" => Self::Keyword(Keyword::Select),
			"case" => Self::Keyword(Keyword::Case),
			"default" => Self::Keyword(Keyword::Default),
			"endcase" => Self::Keyword(Keyword::EndCase),
			"endselect" => Self::Keyword(Keyword::EndSelect),
			"for" => Self::Keyword(Keyword::For),
			"to" => Self::Keyword(Keyword::To),
			"step" => Self::Keyword(Keyword::Step),
			"next" => Self::Keyword(Keyword::Next),
			"while" => Self::Keyword(Keyword::While),
			"endwhile" => Self::Keyword(Keyword::EndWhile),
			"repeat" => Self::Keyword(Keyword::Repeat),
			"until" => Self::Keyword(Keyword::Until),
			"do" => Self::Keyword(Keyword::Do),
			"loop" => Self::Keyword(Keyword::Loop),
			"exit" => Self::Keyword(Keyword::Exit),
			"function" => Self::Keyword(Keyword::Function),
			"endfunction" => Self::Keyword(Keyword::EndFunction),
			"exitfunction" => Self::Keyword(Keyword::ExitFunction),
			"goto" => Self::Keyword(Keyword::Goto),
			"gosub" => Self::Keyword(Keyword::Gosub),
			"return" => Self::Keyword(Keyword::Return),
			"end" => Self::Keyword(Keyword::End),
			"dim" => Self::Keyword(Keyword::Dim),
			"undim" => Self::Keyword(Keyword::Undim),
			"global" => Self::Keyword(Keyword::Global),
			"local" => Self::Keyword(Keyword::Local),
			"as" => Self::Keyword(Keyword::As),
			"type" => Self::Keyword(Keyword::Type),
			"endtype" => Self::Keyword(Keyword::EndType),
			"inc" => Self::Keyword(Keyword::Inc),
			"dec" => Self::Keyword(Keyword::Dec),

			"boolean" => Self::Keyword(Keyword::Boolean),
			"byte" => Self::Keyword(Keyword::Byte),
			"word" => Self::Keyword(Keyword::Word),
			"dword" => Self::Keyword(Keyword::Dword),
			"integer" => Self::Keyword(Keyword::Integer),
			"double" => Self::Keyword(Keyword::Double),
			"float" => Self::Keyword(Keyword::Float),
			"string" => Self::Keyword(Keyword::String),

			"mod" => Self::Operator(Operator::Mod),
			"not" => Self::Operator(Operator::Not),
			"and" => Self::Operator(Operator::And),
			"or" => Self::Operator(Operator::Or),
			"xor" => Self::Operator(Operator::Xor),

			"true" => Self::Literal(Literal::Boolean(true)),
			"false" => Self::Literal(Literal::Boolean(false)),

			_ => return None,
		};

		Some(builtin)
	}
}


/// Type annotation suffix of an identifier. A bare name and each of its annotated
/// variants denote distinct symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Annotation {
	None,
	DoubleInteger, // &
	Word,          // %
	DoubleFloat,   // !
	Float,         // #
	String,        // $
}


impl Annotation {
	pub const COUNT: usize = 6;


	pub fn from_char(c: char) -> Option<Self> {
		match c {
			'&' => Some(Self::DoubleInteger),
			'%' => Some(Self::Word),
			'!' => Some(Self::DoubleFloat),
			'#' => Some(Self::Float),
			'$' => Some(Self::String),
			_ => None,
		}
	}


	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "",
			Self::DoubleInteger => "&",
			Self::Word => "%",
			Self::DoubleFloat => "!",
			Self::Float => "#",
			Self::String => "$",
		}
	}


	/// Dense index, used for annotation keyed slots.
	pub fn index(self) -> usize {
		self as usize
	}
}


impl Default for Annotation {
	fn default() -> Self {
		Self::None
	}
}


/// Literals for primitive types.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
	Boolean(bool),
	Integer(i64),
	Float(f64),
	String(Box<str>),
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
	Plus,  // +
	Minus, // -
	Times, // *
	Div,   // /
	Mod,   // mod
	Pow,   // ^

	ShiftLeft,  // <<
	ShiftRight, // >>
	BitAnd,     // &&
	BitOr,      // ||
	BitXor,     // ~~
	BitNot,     // ..

	Equals,        // =
	NotEquals,     // <>
	Greater,       // >
	GreaterEquals, // >=
	Lower,         // <
	LowerEquals,   // <=

	Not, // not
	And, // and
	Or,  // or
	Xor, // xor
}


/// All possible kinds of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
	/// A word as scanned, before it is classified by the keyword merger.
	Word(Box<str>, Annotation),

	Identifier(Symbol, Annotation),
	Keyword(Keyword),
	/// A keyword database entry, possibly merged from several words.
	Command(Symbol),
	Operator(Operator),
	Literal(Literal),

	Colon, // :
	Comma, // ,
	Dot,   // .

	OpenParens,  // (
	CloseParens, // )

	Newline,
}


impl TokenKind {
	/// Check if the token terminates a statement.
	pub fn is_statement_terminator(&self) -> bool {
		matches!(self, TokenKind::Newline | TokenKind::Colon)
	}
}


/// A lexical token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
	pub kind: TokenKind,
	pub span: Span,
	/// Byte range in the source.
	pub bytes: Range<usize>,
}
