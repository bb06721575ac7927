mod error;
mod expr;
mod statement;
mod sync;
#[cfg(test)]
mod tests;

use std::{collections::HashMap, path::Path};

use super::{
	ast::{self, Ast, Name, NodeId, NodeKind, Scope, Symbol},
	lexer::{Keyword, Token, TokenKind},
	Span,
};
pub use error::{Error, Expected};
use sync::{ResultExt, Strategy, Synchronizable, WithSync};


/// The parser may report multiple errors before finishing. Instead of allocating those in
/// an vector, we delegate such handling to the caller.
pub trait ErrorReporter {
	fn report(&mut self, error: Error);
}


impl<F> ErrorReporter for F
where
	F: FnMut(Error),
{
	fn report(&mut self, error: Error) {
		self(error)
	}
}


/// The parser for DarkBASIC syntax. Tokens must have been classified by the keyword
/// merger.
#[derive(Debug)]
pub struct Parser<I, E>
where
	I: Iterator<Item = Token>,
{
	cursor: I,
	token: Option<Token>,
	/// The span of the last consumed token.
	last_span: Span,
	error_reporter: E,
	ast: Ast,
	/// Arrays declared in the current function body, or in the main program.
	arrays: HashMap<Name, Span>,
	/// Arrays of the enclosing scopes, the outermost being the main program.
	outer_arrays: Vec<HashMap<Name, Span>>,
	/// User defined types declared so far.
	udts: HashMap<Symbol, (NodeId, Span)>,
}


impl<I, E> Parser<I, E>
where
	I: Iterator<Item = Token>,
	E: ErrorReporter,
{
	/// Create a new parser for the given input.
	pub fn new<P>(mut cursor: I, source: P, error_reporter: E) -> Self
	where
		P: Into<Box<Path>>,
	{
		let token = cursor.next();

		Self {
			cursor,
			token,
			last_span: Span::default(),
			error_reporter,
			ast: Ast::new(source.into()),
			arrays: HashMap::new(),
			outer_arrays: Vec::new(),
			udts: HashMap::new(),
		}
	}


	/// Parse the input, producing the syntax tree. The tree has no root if the input has
	/// no statements.
	pub fn parse(mut self) -> Ast {
		let statements = self.parse_block(&[]);

		if !statements.is_empty() {
			let root = self.make_block(statements, Span::default());
			self.ast.root = Some(root);
		}

		self.ast
	}


	/// Consume the current token, placing the next one on self.token.
	fn step(&mut self) -> Option<Token> {
		let token = self.token.take()?;

		self.last_span = token.span;
		self.token = self.cursor.next();

		Some(token)
	}


	fn peek(&self) -> Option<&TokenKind> {
		self.token.as_ref().map(|token| &token.kind)
	}


	/// Try and eat a token.
	fn eat<F, T>(&mut self, eat: F) -> Result<T, Error>
	where
		F: FnOnce(Token) -> Result<T, (Error, Token)>,
	{
		if let Some(token) = self.token.take() {
			let span = token.span;

			match eat(token) {
				Ok(value) => {
					// Token successfully consumed.
					self.last_span = span;
					self.token = self.cursor.next();
					Ok(value)
				}

				Err((error, token)) => {
					// Fail, rollback the token and produce an error.
					self.token = Some(token);
					Err(error)
				}
			}
		} else {
			Err(Error::unexpected_eof(self.last_span))
		}
	}


	/// Consume the expected token, or produce an error.
	fn expect(&mut self, expected: TokenKind) -> Result<Span, Error> {
		self.eat(|token| match token {
			Token { kind, span, .. } if kind == expected => Ok(span),
			token => Err((Error::unexpected(token.clone(), expected), token)),
		})
	}


	fn expect_keyword(&mut self, keyword: Keyword) -> Result<Span, Error> {
		self.expect(TokenKind::Keyword(keyword))
	}


	/// Consume the token if it is the given one.
	fn accept(&mut self, kind: &TokenKind) -> Option<Span> {
		match &self.token {
			Some(token) if token.kind == *kind => self.step().map(|token| token.span),
			_ => None,
		}
	}


	/// An error for the current token.
	fn unexpected(&self, message: &'static str) -> Error {
		match &self.token {
			Some(token) => Error::unexpected_msg(token.clone(), message),
			None => Error::unexpected_eof(self.last_span),
		}
	}


	/// Whether the current token can't start an expression, meaning that optional trailing
	/// values of a statement are absent.
	fn at_statement_end(&self) -> bool {
		matches!(
			self.peek(),
			None | Some(TokenKind::Newline | TokenKind::Colon | TokenKind::Keyword(_))
		)
	}


	/// Check that a statement has been completely parsed.
	fn expect_statement_end(&self, terminators: &[Keyword]) -> Result<(), Error> {
		match self.peek() {
			None => Ok(()),
			Some(kind) if kind.is_statement_terminator() => Ok(()),
			Some(TokenKind::Keyword(keyword)) if terminators.contains(keyword) => Ok(()),
			Some(_) => Err(self.unexpected("end of statement")),
		}
	}


	/// Parse statements until EOF or one of the terminator keywords, which is not
	/// consumed. Statements that fail to parse are reported and skipped.
	fn parse_block(&mut self, terminators: &[Keyword]) -> Vec<NodeId> {
		let mut statements = Vec::new();

		loop {
			match self.peek() {
				// Break on eof.
				None => break,

				Some(kind) if kind.is_statement_terminator() => {
					self.step();
				}

				// Break on end of block.
				Some(TokenKind::Keyword(keyword)) if terminators.contains(keyword) => break,

				Some(_) => {
					let statement = match self.parse_statement() {
						Ok(statement) => self
							.expect_statement_end(terminators)
							.map(|()| Some(statement)),
						Err(error) => Err(error),
					};

					let statement = statement
						.with_sync(Strategy::statement_terminator())
						.synchronize(self);

					statements.extend(statement);
				}
			}
		}

		statements
	}


	/// Parse a block in a new node. The fallback span is used if the block is empty.
	fn parse_body(&mut self, terminators: &[Keyword]) -> NodeId {
		let fallback = self.last_span;
		let statements = self.parse_block(terminators);
		self.make_block(statements, fallback)
	}


	fn make_block(&mut self, statements: Vec<NodeId>, fallback: Span) -> NodeId {
		let span = self.merge_spans(&statements).unwrap_or(fallback);
		self.ast.add(NodeKind::Block(statements), span)
	}


	/// The span covering all the given nodes, if any.
	fn merge_spans(&self, nodes: &[NodeId]) -> Option<Span> {
		nodes
			.iter()
			.map(|&node| self.ast.span(node))
			.reduce(Span::merge)
	}


	/// Comma-separated items.
	fn comma_sep<P, R>(&mut self, mut parse: P) -> Result<Vec<R>, Error>
	where
		P: FnMut(&mut Self) -> Result<R, Error>,
	{
		let mut items = vec![parse(self)?];

		while self.accept(&TokenKind::Comma).is_some() {
			items.push(parse(self)?);
		}

		Ok(items)
	}


	/// A parenthesized, possibly empty, list of expressions.
	fn parse_args(&mut self) -> Result<Vec<NodeId>, Error> {
		self.expect(TokenKind::OpenParens)?;

		if self.accept(&TokenKind::CloseParens).is_some() {
			return Ok(Vec::new());
		}

		let args = self.comma_sep(Self::parse_expression)?;
		self.expect(TokenKind::CloseParens)?;

		Ok(args)
	}


	/// Register an array declaration. Fails if the array was already declared in the same
	/// scope. Global arrays are placed in the main program scope.
	fn add_array_symbol(&mut self, scope: Scope, name: Name, span: Span) -> Result<(), Error> {
		let arrays = match (scope, self.outer_arrays.first_mut()) {
			(Scope::Global, Some(main)) => main,
			_ => &mut self.arrays,
		};

		match arrays.get(&name) {
			Some(&first) => Err(Error::array_redeclared(name, first, span)),
			None => {
				arrays.insert(name, span);
				Ok(())
			}
		}
	}


	/// Whether an array is visible from the current scope.
	fn lookup_array_symbol(&self, name: &Name) -> Option<Span> {
		self.arrays
			.get(name)
			.or_else(|| self.outer_arrays.first().and_then(|main| main.get(name)))
			.copied()
	}


	fn enter_function(&mut self) {
		let arrays = std::mem::take(&mut self.arrays);
		self.outer_arrays.push(arrays);
	}


	fn leave_function(&mut self) {
		if let Some(arrays) = self.outer_arrays.pop() {
			self.arrays = arrays;
		}
	}
}


impl<I, E> Synchronizable<Error> for Parser<I, E>
where
	I: Iterator<Item = Token>,
	E: ErrorReporter,
{
	fn synchronize(&mut self, error: Error, mut sync: Strategy) {
		self.error_reporter.report(error);

		while let Some(token) = &self.token {
			if sync.synchronized(&token.kind) {
				break;
			}

			self.step();
		}
	}
}
