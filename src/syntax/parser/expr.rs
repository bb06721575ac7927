use super::{
	ast::{BinaryOp, Name, NodeId, NodeKind, TypeRef, UnaryOp},
	Error,
	ErrorReporter,
	Parser,
	Span,
	Token,
	TokenKind,
};
use crate::syntax::lexer::Operator;


/// A precedence level.
#[derive(Debug, Clone, Copy)]
enum Level {
	/// A left associative binary operator.
	Binary(Operator, BinaryOp),
	/// The prefix logical not.
	Not,
}


/// Precedence levels, from the loosest to the tightest. Every operator has its own level.
/// Unary minus binds tighter than all of them.
const LEVELS: &[Level] = &[
	Level::Binary(Operator::Xor, BinaryOp::Xor),
	Level::Binary(Operator::Or, BinaryOp::Or),
	Level::Binary(Operator::And, BinaryOp::And),
	Level::Not,
	Level::Binary(Operator::BitNot, BinaryOp::BitNot),
	Level::Binary(Operator::BitXor, BinaryOp::BitXor),
	Level::Binary(Operator::BitOr, BinaryOp::BitOr),
	Level::Binary(Operator::BitAnd, BinaryOp::BitAnd),
	Level::Binary(Operator::Equals, BinaryOp::Equals),
	Level::Binary(Operator::Lower, BinaryOp::Lower),
	Level::Binary(Operator::Greater, BinaryOp::Greater),
	Level::Binary(Operator::LowerEquals, BinaryOp::LowerEquals),
	Level::Binary(Operator::GreaterEquals, BinaryOp::GreaterEquals),
	Level::Binary(Operator::NotEquals, BinaryOp::NotEquals),
	Level::Binary(Operator::ShiftLeft, BinaryOp::ShiftLeft),
	Level::Binary(Operator::ShiftRight, BinaryOp::ShiftRight),
	Level::Binary(Operator::Plus, BinaryOp::Plus),
	Level::Binary(Operator::Minus, BinaryOp::Minus),
	Level::Binary(Operator::Times, BinaryOp::Times),
	Level::Binary(Operator::Mod, BinaryOp::Mod),
	Level::Binary(Operator::Div, BinaryOp::Div),
	Level::Binary(Operator::Pow, BinaryOp::Pow),
];


impl<I, E> Parser<I, E>
where
	I: Iterator<Item = Token>,
	E: ErrorReporter,
{
	/// Parse a single expression.
	pub(super) fn parse_expression(&mut self) -> Result<NodeId, Error> {
		self.parse_level(0)
	}


	fn parse_level(&mut self, level: usize) -> Result<NodeId, Error> {
		match LEVELS.get(level) {
			Some(&Level::Binary(token, op)) => self.parse_binop(level, token, op),
			Some(Level::Not) => self.parse_not(level),
			None => self.parse_negation(),
		}
	}


	/// Parse a higher precedence expression, optionally followed by a chain of the given
	/// operator. Chains are left associative.
	fn parse_binop(&mut self, level: usize, token: Operator, op: BinaryOp) -> Result<NodeId, Error> {
		let mut left = self.parse_level(level + 1)?;

		while self.accept(&TokenKind::Operator(token)).is_some() {
			let right = self.parse_level(level + 1)?;
			let span = self.ast.span(left).merge(self.ast.span(right));

			left = self.ast.add(NodeKind::BinaryOp { op, left, right }, span);
		}

		Ok(left)
	}


	fn parse_not(&mut self, level: usize) -> Result<NodeId, Error> {
		match self.accept(&TokenKind::Operator(Operator::Not)) {
			Some(span) => {
				let operand = self.parse_not(level)?;
				Ok(self.unary(UnaryOp::Not, operand, span))
			}

			None => self.parse_level(level + 1),
		}
	}


	fn parse_negation(&mut self) -> Result<NodeId, Error> {
		match self.accept(&TokenKind::Operator(Operator::Minus)) {
			Some(span) => {
				let operand = self.parse_negation()?;
				Ok(self.unary(UnaryOp::Minus, operand, span))
			}

			None => self.parse_primary(),
		}
	}


	fn unary(&mut self, op: UnaryOp, operand: NodeId, span: Span) -> NodeId {
		let span = span.merge(self.ast.span(operand));
		self.ast.add(NodeKind::UnaryOp { op, operand }, span)
	}


	/// Parse a literal, a reference, a command or a parenthesized expression.
	fn parse_primary(&mut self) -> Result<NodeId, Error> {
		match self.peek() {
			Some(TokenKind::Identifier(..)) => {
				let (name, span) = self.parse_name()?;
				self.parse_reference_from(name, span)
			}

			Some(TokenKind::Literal(_)) => match self.step() {
				Some(Token { kind: TokenKind::Literal(literal), span, .. }) => {
					Ok(self.ast.add(NodeKind::Literal(literal), span))
				}
				_ => Err(Error::unexpected_eof(self.last_span)),
			},

			// Commands in expressions only take arguments in parenthesis.
			Some(&TokenKind::Command(name)) => {
				self.step();
				let span = self.last_span;

				let args =
					if let Some(TokenKind::OpenParens) = self.peek() {
						self.parse_args()?
					} else {
						Vec::new()
					};

				let span = span.merge(self.last_span);
				Ok(self.ast.add(NodeKind::Command { name, args }, span))
			}

			Some(TokenKind::OpenParens) => {
				self.step();
				let expr = self.parse_expression()?;
				self.expect(TokenKind::CloseParens)?;

				Ok(expr)
			}

			_ => Err(self.unexpected("expression")),
		}
	}


	/// Parse the rest of a reference after its leading identifier: `a`, `f(x)`, `p(1).pos.x#`.
	///
	/// Calls and array references share the same syntax, and are always parsed as calls.
	/// Members of user defined types can't be functions, so indexed members are array
	/// references.
	pub(super) fn parse_reference_from(&mut self, name: Name, span: Span) -> Result<NodeId, Error> {
		let mut node =
			if let Some(TokenKind::OpenParens) = self.peek() {
				let args = self.parse_args()?;
				self.ast.add(NodeKind::FuncCall { name, args }, span.merge(self.last_span))
			} else {
				self.ast.add(NodeKind::Variable(name), span)
			};

		while self.accept(&TokenKind::Dot).is_some() {
			let (name, member_span) = self.parse_name()?;

			let member =
				if let Some(TokenKind::OpenParens) = self.peek() {
					let args = self.parse_args()?;
					let kind = NodeKind::ArrayRef { name, args, ty: TypeRef::Default };
					self.ast.add(kind, member_span.merge(self.last_span))
				} else {
					self.ast.add(NodeKind::Variable(name), member_span)
				};

			let span = self.ast.span(node).merge(self.ast.span(member));
			node = self.ast.add(NodeKind::Field { base: node, member }, span);
		}

		Ok(node)
	}
}
