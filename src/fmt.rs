use std::fmt::Write;


/// Formatting that needs more than the value itself, usually the symbol interner to
/// spell identifiers, or the source to print excerpts.
pub trait Display<'a> {
	type Context: 'a;

	fn fmt(&self, f: &mut std::fmt::Formatter<'_>, context: Self::Context) -> std::fmt::Result;
}


impl<'a, T> Display<'a> for &T
where
	T: Display<'a>,
{
	type Context = T::Context;

	fn fmt(&self, f: &mut std::fmt::Formatter<'_>, context: Self::Context) -> std::fmt::Result {
		T::fmt(self, f, context)
	}
}


/// Pairs a value with its format context, so that it can be used with `{}`.
#[derive(Debug)]
pub struct Show<T, C>(pub T, pub C);


impl<'a, T, C> std::fmt::Display for Show<T, C>
where
	T: Display<'a, Context = C>,
	C: Copy,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f, self.1)
	}
}


/// Nesting depth of the tree printers, one tab per level.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Indentation(pub u8);


impl Indentation {
	pub fn increase(self) -> Self {
		Self(self.0.saturating_add(1))
	}
}


impl std::fmt::Display for Indentation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		(0 .. self.0).try_for_each(|_| f.write_char('\t'))
	}
}
