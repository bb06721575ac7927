use std::{
	fmt::{self, Display},
	fs::File,
	path::Path,
};


/// DarkBASIC source code.
#[derive(Debug)]
pub struct Source {
	/// The origin path, may be something fictional like `<stdin>`.
	pub path: Box<Path>,
	/// The source code.
	pub contents: Box<str>,
}


impl Source {
	/// Load the source code from a file path.
	pub fn from_path<P>(path: P) -> std::io::Result<Self>
	where
		P: Into<Box<Path>>,
	{
		let path = path.into();
		let file = File::open(&path)?;
		Self::from_reader(path, file)
	}


	/// Load the source code from a std::io::Read.
	/// The path argument may be anything, including fictional paths like `<stdin>`.
	pub fn from_reader<P, R>(path: P, mut reader: R) -> std::io::Result<Self>
	where
		P: Into<Box<Path>>,
		R: std::io::Read,
	{
		let path = path.into();
		let mut contents = String::with_capacity(512); // Expect a few characters.
		reader.read_to_string(&mut contents)?;

		Ok(Self { path, contents: contents.into() })
	}


	/// Wrap an in-memory string.
	pub fn from_string<P, S>(path: P, contents: S) -> Self
	where
		P: Into<Box<Path>>,
		S: Into<Box<str>>,
	{
		Self { path: path.into(), contents: contents.into() }
	}


	/// Get the source lines covered by a span, with the spanned columns underlined.
	pub fn excerpt(&self, span: Span) -> Excerpt {
		let first = span.first.line.max(1) as usize;
		let last = span.last.line.max(span.first.line).max(1) as usize;

		let lines = self.contents
			.lines()
			.enumerate()
			.skip(first - 1)
			.take(last - first + 1)
			.map(|(ix, line)| (ix as u32 + 1, line.into()))
			.collect();

		Excerpt { lines, span }
	}
}


/// A human readable position in the source code. Both line and column start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourcePos {
	pub line: u32,
	pub column: u32,
}


impl SourcePos {
	pub fn visit(&mut self, input: char) {
		if input == '\n' {
			self.line += 1;
			self.column = 1;
		} else {
			self.column += 1;
		}
	}
}


impl Default for SourcePos {
	fn default() -> Self {
		Self { line: 1, column: 1 }
	}
}


impl Display for SourcePos {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "line {}, column {}", self.line, self.column)
	}
}


/// A region of source code, from the first to the last character, both inclusive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
	pub first: SourcePos,
	pub last: SourcePos,
}


impl Span {
	pub fn new(first: SourcePos, last: SourcePos) -> Self {
		Self { first, last }
	}


	/// A span covering a single character.
	pub fn at(pos: SourcePos) -> Self {
		Self { first: pos, last: pos }
	}


	/// The smallest span covering both spans.
	pub fn merge(self, other: Self) -> Self {
		Self {
			first: self.first.min(other.first),
			last: self.last.max(other.last),
		}
	}


	/// Whether the other span is entirely inside this one.
	pub fn covers(&self, other: &Self) -> bool {
		self.first <= other.first && other.last <= self.last
	}
}


impl From<SourcePos> for Span {
	fn from(pos: SourcePos) -> Self {
		Self::at(pos)
	}
}


impl Display for Span {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.first.line == self.last.line {
			write!(
				f,
				"line {}, columns {}-{}",
				self.first.line,
				self.first.column,
				self.last.column
			)
		} else {
			write!(f, "{} to {}", self.first, self.last)
		}
	}
}


/// Source lines with an underlined region.
#[derive(Debug)]
pub struct Excerpt {
	lines: Vec<(u32, Box<str>)>,
	span: Span,
}


impl Display for Excerpt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (number, line) in &self.lines {
			writeln!(f, "{:>5} | {}", number, line)?;

			let start = if *number == self.span.first.line { self.span.first.column } else { 1 };
			let end =
				if *number == self.span.last.line {
					self.span.last.column
				} else {
					line.chars().count() as u32
				};

			write!(f, "      | ")?;
			for column in 1 ..= end.max(start) {
				let c =
					if column < start {
						' '
					} else if column == start {
						'^'
					} else {
						'~'
					};
				write!(f, "{}", c)?;
			}
			writeln!(f)?;
		}

		Ok(())
	}
}
