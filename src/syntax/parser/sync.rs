use super::{ast::NodeId, TokenKind};


/// A strategy for synchronizing the token stream.
#[derive(Debug)]
pub enum Strategy {
	/// Skip until after a statement terminator token is matched.
	/// See TokenKind::is_statement_terminator for more details.
	StatementTerminator {
		skipped: bool,
	},
}


impl Strategy {
	/// Skip until after a statement terminator token is matched.
	pub fn statement_terminator() -> Self {
		Self::StatementTerminator { skipped: false }
	}


	/// Indicates whether the stream has been synchronized.
	/// When this method returns false, the token should be skipped.
	pub fn synchronized(&mut self, token: &TokenKind) -> bool {
		match self {
			Self::StatementTerminator { skipped: true } => true,
			Self::StatementTerminator { skipped } => {
				*skipped = token.is_statement_terminator();
				false
			}
		}
	}
}


/// A value that can stand in for something that failed to parse.
pub trait IllFormed {
	fn ill_formed() -> Self;
}


/// A statement that failed to parse is simply left out of its block.
impl IllFormed for Option<NodeId> {
	fn ill_formed() -> Self {
		None
	}
}


/// A parser that can be synchronized.
pub trait Synchronizable<E> {
	/// Synchronize using the given strategy.
	fn synchronize(&mut self, error: E, sync: Strategy);
}


/// A result including a synchronization strategy.
pub type Result<T, E> = std::result::Result<T, (E, Strategy)>;


/// Extension trait for adding a sync strategy to a Result.
pub trait WithSync<T, E> {
	/// Use the given sync strategy.
	fn with_sync(self, strategy: Strategy) -> Result<T, E>;
}


impl<T, E> WithSync<T, E> for std::result::Result<T, E> {
	fn with_sync(self, strategy: Strategy) -> Result<T, E> {
		self.map_err(|error| (error, strategy))
	}
}


/// Extension trait for synchronizing from Result.
pub trait ResultExt<T, E> {
	/// Synchronize the parser using the current strategy.
	fn synchronize<P: Synchronizable<E>>(self, parser: &mut P) -> T;
}


impl<T, E> ResultExt<T, E> for Result<T, E>
where
	T: IllFormed,
{
	fn synchronize<P: Synchronizable<E>>(self, parser: &mut P) -> T {
		match self {
			Ok(value) => value,

			Err((error, sync)) => {
				parser.synchronize(error, sync);
				T::ill_formed()
			}
		}
	}
}
