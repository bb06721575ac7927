//! The keyword vocabulary: builtin and plugin-supplied command names together with their
//! call signatures, and the index used by the scanner to recognize them.

mod db;
mod index;

use std::fmt::{self, Display};

pub use db::{KeywordDb, LoadError};
pub use index::{KeywordIndex, Match};


/// Type codes used in keyword signatures. Each code is a single character, shared with
/// the DBPro plugin convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCode {
	Void,           // 0
	Long,           // R
	Dword,          // D
	Integer,        // L
	Word,           // W
	Byte,           // Y
	Boolean,        // B
	Float,          // F
	Double,         // O
	String,         // S
	Array,          // H
	Label,          // P
	Dabel,          // Q
	Any,            // X
	UserDefinedPtr, // E
}


impl TypeCode {
	pub fn from_char(c: char) -> Option<Self> {
		Some(
			match c {
				'0' => Self::Void,
				'R' => Self::Long,
				'D' => Self::Dword,
				'L' => Self::Integer,
				'W' => Self::Word,
				'Y' => Self::Byte,
				'B' => Self::Boolean,
				'F' => Self::Float,
				'O' => Self::Double,
				'S' => Self::String,
				'H' => Self::Array,
				'P' => Self::Label,
				'Q' => Self::Dabel,
				'X' => Self::Any,
				'E' => Self::UserDefinedPtr,
				_ => return None,
			}
		)
	}


	pub fn as_char(self) -> char {
		match self {
			Self::Void => '0',
			Self::Long => 'R',
			Self::Dword => 'D',
			Self::Integer => 'L',
			Self::Word => 'W',
			Self::Byte => 'Y',
			Self::Boolean => 'B',
			Self::Float => 'F',
			Self::Double => 'O',
			Self::String => 'S',
			Self::Array => 'H',
			Self::Label => 'P',
			Self::Dabel => 'Q',
			Self::Any => 'X',
			Self::UserDefinedPtr => 'E',
		}
	}
}


impl Display for TypeCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_char())
	}
}


/// A single call signature of a keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overload {
	pub args: Box<[TypeCode]>,
	/// None for commands that don't produce a value.
	pub returns: Option<TypeCode>,
}


impl Overload {
	/// Parse a signature from its type codes, e.g. `("LFF", "0")`.
	pub fn parse(args: &str, returns: &str) -> Result<Self, char> {
		let args = args
			.chars()
			.map(|c| TypeCode::from_char(c).ok_or(c))
			.collect::<Result<Box<[_]>, _>>()?;

		let returns = match returns.chars().next() {
			None => None,
			Some(c) => match TypeCode::from_char(c).ok_or(c)? {
				TypeCode::Void => None,
				code => Some(code),
			},
		};

		Ok(Self { args, returns })
	}
}


/// A builtin or plugin-supplied command.
/// Keywords are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
	/// The canonical spelling: lower case, words separated by single spaces.
	pub name: Box<str>,
	pub overloads: Vec<Overload>,
	/// The plugin that supplies the keyword.
	pub plugin: Box<str>,
}


impl Keyword {
	pub fn new<N, P>(name: N, plugin: P, overloads: Vec<Overload>) -> Self
	where
		N: AsRef<str>,
		P: Into<Box<str>>,
	{
		Self {
			name: canonical_name(name.as_ref()),
			overloads,
			plugin: plugin.into(),
		}
	}


	/// Whether any overload produces a value, which allows the keyword in expressions.
	pub fn returns_value(&self) -> bool {
		self.overloads
			.iter()
			.any(|overload| overload.returns.is_some())
	}
}


/// Lower case, with runs of whitespace collapsed into a single space.
pub fn canonical_name(name: &str) -> Box<str> {
	name
		.split_whitespace()
		.map(str::to_lowercase)
		.collect::<Vec<_>>()
		.join(" ")
		.into()
}
