use super::{
	ast::{BinaryOp, BuiltinType, Literal, Name, NodeId, NodeKind, Scope, TypeRef},
	Error,
	ErrorReporter,
	Keyword,
	Parser,
	Span,
	Symbol,
	Token,
	TokenKind,
};
use crate::syntax::lexer::{Annotation, Operator};


impl<I, E> Parser<I, E>
where
	I: Iterator<Item = Token>,
	E: ErrorReporter,
{
	/// Parse a single statement.
	pub(super) fn parse_statement(&mut self) -> Result<NodeId, Error> {
		let token = match self.peek() {
			Some(TokenKind::Identifier(..)) => return self.parse_identifier_statement(),
			Some(TokenKind::Keyword(_) | TokenKind::Command(_)) => self.step(),
			_ => None,
		};

		match token {
			Some(Token { kind: TokenKind::Command(name), span, .. }) => {
				self.parse_command_statement(name, span)
			}

			Some(token) => self.parse_keyword_statement(token),

			None => Err(self.unexpected("statement")),
		}
	}


	/// Consume the current token, returning its span.
	fn last_span_after_step(&mut self) -> Span {
		self.step();
		self.last_span
	}


	/// Parse a statement after its leading keyword, which has been consumed.
	fn parse_keyword_statement(&mut self, token: Token) -> Result<NodeId, Error> {
		let span = token.span;

		let keyword = match token.kind {
			TokenKind::Keyword(keyword) => keyword,
			_ => return Err(Error::unexpected_msg(token, "statement")),
		};

		match keyword {
			Keyword::Global => self.parse_scoped_declaration(Scope::Global, span),
			Keyword::Local => self.parse_scoped_declaration(Scope::Local, span),
			Keyword::Dim => self.parse_array_decl(Scope::Default, span),
			Keyword::Undim => self.parse_undim(span),
			Keyword::Type => self.parse_udt_decl(span),
			Keyword::If => self.parse_if(span),
			Keyword::Select => self.parse_select(span),
			Keyword::For => self.parse_for(span),

			Keyword::While => {
				let condition = self.parse_expression()?;
				let body = self.parse_body(&[Keyword::EndWhile]);
				self.expect_keyword(Keyword::EndWhile)?;

				Ok(self.add(NodeKind::WhileLoop { condition, body }, span))
			}

			Keyword::Repeat => {
				let body = self.parse_body(&[Keyword::Until]);
				self.expect_keyword(Keyword::Until)?;
				let condition = self.parse_expression()?;

				Ok(self.add(NodeKind::UntilLoop { body, condition }, span))
			}

			Keyword::Do => {
				let body = self.parse_body(&[Keyword::Loop]);
				self.expect_keyword(Keyword::Loop)?;

				Ok(self.add(NodeKind::InfiniteLoop { body }, span))
			}

			Keyword::Exit => Ok(self.add(NodeKind::Exit, span)),

			Keyword::Function => self.parse_function(span),

			Keyword::ExitFunction => {
				let value = self.parse_optional_expression()?;
				Ok(self.add(NodeKind::FuncExit { value }, span))
			}

			Keyword::Goto => {
				let label = self.parse_label()?;
				Ok(self.add(NodeKind::Goto(label), span))
			}

			Keyword::Gosub => {
				let label = self.parse_label()?;
				Ok(self.add(NodeKind::Gosub(label), span))
			}

			Keyword::Return => Ok(self.add(NodeKind::SubReturn, span)),
			Keyword::End => Ok(self.add(NodeKind::End, span)),

			Keyword::Inc => self.parse_increment(BinaryOp::Plus, span),
			Keyword::Dec => self.parse_increment(BinaryOp::Minus, span),

			_ => Err(Error::unexpected_msg(token, "statement")),
		}
	}


	/// Add a node spanning from `start` to the last consumed token.
	fn add(&mut self, kind: NodeKind, start: Span) -> NodeId {
		let span = start.merge(self.last_span);
		self.ast.add(kind, span)
	}


	/// Parse an identifier, including its annotation.
	pub(super) fn parse_name(&mut self) -> Result<(Name, Span), Error> {
		self.eat(|token| match token {
			Token { kind: TokenKind::Identifier(symbol, annotation), span, .. } => {
				Ok((Name::new(symbol, annotation), span))
			}
			token => Err((Error::unexpected_msg(token.clone(), "identifier"), token)),
		})
	}


	fn parse_label(&mut self) -> Result<Symbol, Error> {
		self.eat(|token| match token {
			Token { kind: TokenKind::Identifier(symbol, Annotation::None), .. } => Ok(symbol),
			token => Err((Error::unexpected_msg(token.clone(), "label"), token)),
		})
	}


	/// Parse an expression, unless the statement ends here.
	fn parse_optional_expression(&mut self) -> Result<Option<NodeId>, Error> {
		if self.at_statement_end() {
			Ok(None)
		} else {
			self.parse_expression().map(Some)
		}
	}


	/// `global dim a(5)`, `local b as float = 1.5`.
	fn parse_scoped_declaration(&mut self, scope: Scope, span: Span) -> Result<NodeId, Error> {
		if self.accept(&TokenKind::Keyword(Keyword::Dim)).is_some() {
			return self.parse_array_decl(scope, span);
		}

		let (name, _) = self.parse_name()?;
		let ty = self.parse_optional_type()?;
		self.parse_var_decl(scope, name, ty, span)
	}


	/// Parse the optional initializer of a variable declaration.
	fn parse_var_decl(
		&mut self,
		scope: Scope,
		name: Name,
		ty: TypeRef,
		span: Span,
	) -> Result<NodeId, Error> {
		let init =
			if self.accept(&TokenKind::Operator(Operator::Equals)).is_some() {
				Some(self.parse_expression()?)
			} else {
				None
			};

		Ok(self.add(NodeKind::VarDecl { scope, name, ty, init }, span))
	}


	fn parse_array_decl(&mut self, scope: Scope, span: Span) -> Result<NodeId, Error> {
		let (name, _) = self.parse_name()?;
		let dims = self.parse_args()?;
		let ty = self.parse_optional_type()?;
		let span = span.merge(self.last_span);

		self.add_array_symbol(scope, name, span)?;

		Ok(self.ast.add(NodeKind::ArrayDecl { scope, name, dims, ty }, span))
	}


	fn parse_undim(&mut self, span: Span) -> Result<NodeId, Error> {
		let (name, name_span) = self.parse_name()?;
		let dims = self.parse_args()?;

		if self.lookup_array_symbol(&name).is_none() {
			log::warn!("{}: undim of an array that wasn't declared before", name_span);
		}

		Ok(self.add(NodeKind::ArrayUndim { name, dims }, span))
	}


	/// `type name` followed by member declarations and `endtype`.
	fn parse_udt_decl(&mut self, span: Span) -> Result<NodeId, Error> {
		let (name, name_span) = self.parse_name()?;
		self.expect_statement_end(&[])?;

		let mut members = Vec::new();
		loop {
			match self.peek() {
				Some(kind) if kind.is_statement_terminator() => {
					self.step();
				}

				Some(TokenKind::Keyword(Keyword::EndType)) => break,

				Some(_) => {
					members.push(self.parse_udt_member()?);
					self.expect_statement_end(&[Keyword::EndType])?;
				}

				None => return Err(self.unexpected("endtype")),
			}
		}

		let body = self.make_block_of(NodeKind::UdtBody, members, name_span);
		self.expect_keyword(Keyword::EndType)?;

		let udt = self.add(NodeKind::UdtDecl { name: name.symbol, body }, span);

		match self.udts.get(&name.symbol) {
			Some(&(_, first)) => Err(Error::udt_redeclared(name.symbol, first, name_span)),
			None => {
				self.udts.insert(name.symbol, (udt, name_span));
				Ok(udt)
			}
		}
	}


	/// `name [as type]` or `name(dims) [as type]`.
	fn parse_udt_member(&mut self) -> Result<NodeId, Error> {
		let (name, span) = self.parse_name()?;

		if let Some(TokenKind::OpenParens) = self.peek() {
			let dims = self.parse_args()?;
			let ty = self.parse_optional_type()?;

			Ok(self.add(NodeKind::ArrayDecl { scope: Scope::Default, name, dims, ty }, span))
		} else {
			let ty = self.parse_optional_type()?;

			Ok(self.add(NodeKind::VarDecl { scope: Scope::Default, name, ty, init: None }, span))
		}
	}


	/// A node holding a list of children, spanning all of them.
	fn make_block_of<F>(&mut self, make: F, nodes: Vec<NodeId>, fallback: Span) -> NodeId
	where
		F: FnOnce(Vec<NodeId>) -> NodeKind,
	{
		let span = self.merge_spans(&nodes).unwrap_or(fallback);
		self.ast.add(make(nodes), span)
	}


	fn parse_optional_type(&mut self) -> Result<TypeRef, Error> {
		if self.accept(&TokenKind::Keyword(Keyword::As)).is_some() {
			self.parse_type()
		} else {
			Ok(TypeRef::Default)
		}
	}


	/// Parse a type name after `as`.
	fn parse_type(&mut self) -> Result<TypeRef, Error> {
		let builtin = |ty| Ok(TypeRef::Builtin(ty));

		if self.accept(&TokenKind::Keyword(Keyword::Double)).is_some() {
			return self.eat(|token| match token.kind {
				TokenKind::Keyword(Keyword::Integer) => builtin(BuiltinType::DoubleInteger),
				TokenKind::Keyword(Keyword::Float) => builtin(BuiltinType::DoubleFloat),
				_ => Err((Error::unexpected_msg(token.clone(), "integer or float"), token)),
			});
		}

		let ty = self.eat(|token| match token.kind {
			TokenKind::Keyword(Keyword::Boolean) => builtin(BuiltinType::Boolean),
			TokenKind::Keyword(Keyword::Byte) => builtin(BuiltinType::Byte),
			TokenKind::Keyword(Keyword::Word) => builtin(BuiltinType::Word),
			TokenKind::Keyword(Keyword::Dword) => builtin(BuiltinType::Dword),
			TokenKind::Keyword(Keyword::Integer) => builtin(BuiltinType::Integer),
			TokenKind::Keyword(Keyword::Float) => builtin(BuiltinType::Float),
			TokenKind::Keyword(Keyword::String) => builtin(BuiltinType::String),
			TokenKind::Identifier(name, Annotation::None) => Ok(TypeRef::Udt { name, decl: None }),
			_ => Err((Error::unexpected_msg(token.clone(), "type"), token)),
		})?;

		// Types must be declared before use to be resolved.
		match ty {
			TypeRef::Udt { name, .. } => {
				let decl = self.udts.get(&name).map(|&(decl, _)| decl);
				Ok(TypeRef::Udt { name, decl })
			}

			ty => Ok(ty),
		}
	}


	/// Single line `if c then a : b else c`, or a multi line if block.
	fn parse_if(&mut self, span: Span) -> Result<NodeId, Error> {
		let condition = self.parse_expression()?;

		if self.accept(&TokenKind::Keyword(Keyword::Then)).is_some() {
			self.parse_single_line_if(condition, span)
		} else {
			self.expect_statement_end(&[])?;
			self.parse_multi_line_if(condition, span)
		}
	}


	fn parse_single_line_if(&mut self, condition: NodeId, span: Span) -> Result<NodeId, Error> {
		let then = self.parse_inline_block(&[Keyword::Else])?;

		let otherwise =
			if self.accept(&TokenKind::Keyword(Keyword::Else)).is_some() {
				Some(self.parse_inline_block(&[])?)
			} else {
				None
			};

		// An empty then clause is only allowed if there is an else clause.
		if otherwise.is_none() && self.ast.children(then).is_empty() {
			return Err(self.unexpected("statement"));
		}

		Ok(self.add(NodeKind::Conditional { condition, then, otherwise }, span))
	}


	/// Statements in the same line, separated by colons.
	fn parse_inline_block(&mut self, terminators: &[Keyword]) -> Result<NodeId, Error> {
		let fallback = self.last_span;
		let mut statements = Vec::new();

		loop {
			match self.peek() {
				None | Some(TokenKind::Newline) => break,

				Some(TokenKind::Colon) => {
					self.step();
				}

				Some(TokenKind::Keyword(keyword)) if terminators.contains(keyword) => break,

				Some(_) => {
					statements.push(self.parse_statement()?);
					self.expect_statement_end(terminators)?;
				}
			}
		}

		Ok(self.make_block(statements, fallback))
	}


	/// The body of a multi line if, after the condition. Consumes the `endif`.
	fn parse_multi_line_if(&mut self, condition: NodeId, span: Span) -> Result<NodeId, Error> {
		let then = self.parse_body(&[Keyword::ElseIf, Keyword::Else, Keyword::EndIf]);

		let otherwise = match self.peek() {
			// Else-if chains are nested conditionals, sharing the same endif.
			Some(TokenKind::Keyword(Keyword::ElseIf)) => {
				let elseif = self.last_span_after_step();
				let condition = self.parse_expression()?;
				self.expect_statement_end(&[])?;
				let nested = self.parse_multi_line_if(condition, elseif)?;

				Some(self.make_block(vec![nested], elseif))
			}

			Some(TokenKind::Keyword(Keyword::Else)) => {
				self.step();
				let otherwise = self.parse_body(&[Keyword::EndIf]);
				self.expect_keyword(Keyword::EndIf)?;

				Some(otherwise)
			}

			_ => {
				self.expect_keyword(Keyword::EndIf)?;
				None
			}
		};

		Ok(self.add(NodeKind::Conditional { condition, then, otherwise }, span))
	}


	fn parse_select(&mut self, span: Span) -> Result<NodeId, Error> {
		let expr = self.parse_expression()?;
		self.expect_statement_end(&[])?;

		let mut cases = Vec::new();
		let mut default: Option<Span> = None;

		loop {
			match self.peek() {
				Some(kind) if kind.is_statement_terminator() => {
					self.step();
				}

				Some(TokenKind::Keyword(Keyword::EndSelect)) => break,

				Some(TokenKind::Keyword(Keyword::Case)) => {
					let case_span = self.last_span_after_step();

					let case =
						if self.accept(&TokenKind::Keyword(Keyword::Default)).is_some() {
							match default {
								Some(first) => self.error_reporter.report(
									Error::duplicate_default_case(first, case_span)
								),
								None => default = Some(case_span),
							}

							let body = self.parse_body(&[Keyword::EndCase]);
							self.expect_keyword(Keyword::EndCase)?;

							self.add(NodeKind::DefaultCase { body }, case_span)
						} else {
							let values = self.comma_sep(Self::parse_expression)?;
							let body = self.parse_body(&[Keyword::EndCase]);
							self.expect_keyword(Keyword::EndCase)?;

							self.add(NodeKind::Case { values, body }, case_span)
						};

					cases.push(case);
				}

				_ => return Err(self.unexpected("case or endselect")),
			}
		}

		let cases = self.make_block_of(NodeKind::CaseList, cases, span);
		self.expect_keyword(Keyword::EndSelect)?;

		Ok(self.add(NodeKind::Select { expr, cases }, span))
	}


	/// `for v = a to b [step c] ... next [v]`.
	fn parse_for(&mut self, span: Span) -> Result<NodeId, Error> {
		let (name, name_span) = self.parse_name()?;
		let counter = self.ast.add(NodeKind::Variable(name), name_span);

		self.expect(TokenKind::Operator(Operator::Equals))?;
		let start = self.parse_expression()?;
		self.expect_keyword(Keyword::To)?;
		let end = self.parse_expression()?;

		let step =
			if self.accept(&TokenKind::Keyword(Keyword::Step)).is_some() {
				Some(self.parse_expression()?)
			} else {
				None
			};

		let body = self.parse_body(&[Keyword::Next]);
		self.expect_keyword(Keyword::Next)?;

		// The counter may be repeated after next.
		if let Some(TokenKind::Identifier(..)) = self.peek() {
			self.step();
		}

		Ok(self.add(NodeKind::ForLoop { counter, start, end, step, body }, span))
	}


	/// `function name(params) ... endfunction [value]`.
	fn parse_function(&mut self, span: Span) -> Result<NodeId, Error> {
		let (name, _) = self.parse_name()?;

		self.expect(TokenKind::OpenParens)?;
		let params =
			if self.accept(&TokenKind::CloseParens).is_some() {
				Vec::new()
			} else {
				let params = self.comma_sep(Self::parse_param)?;
				self.expect(TokenKind::CloseParens)?;
				params
			};

		self.enter_function();
		let body = self.parse_body(&[Keyword::EndFunction]);
		self.leave_function();

		self.expect_keyword(Keyword::EndFunction)?;
		let result = self.parse_optional_expression()?;

		Ok(self.add(NodeKind::FuncDecl { name, params, body, result }, span))
	}


	fn parse_param(&mut self) -> Result<NodeId, Error> {
		let (name, span) = self.parse_name()?;
		let ty = self.parse_optional_type()?;

		Ok(self.add(NodeKind::VarDecl { scope: Scope::Local, name, ty, init: None }, span))
	}


	/// `inc x` and `dec x, 2` are sugar for `x = x + 1` and `x = x - 2`.
	fn parse_increment(&mut self, op: BinaryOp, span: Span) -> Result<NodeId, Error> {
		let (name, name_span) = self.parse_name()?;
		let target = self.parse_reference_from(name, name_span)?;

		let step =
			if self.accept(&TokenKind::Comma).is_some() {
				self.parse_expression()?
			} else {
				self.ast.add(NodeKind::Literal(Literal::Integer(1)), span)
			};

		let left = self.ast.duplicate(target);
		let value_span = self.ast.span(left).merge(self.ast.span(step));
		let value = self.ast.add(NodeKind::BinaryOp { op, left, right: step }, value_span);

		Ok(self.add(NodeKind::Assignment { target, value }, span))
	}


	/// A command statement. Arguments may be enclosed in parenthesis.
	fn parse_command_statement(&mut self, name: Symbol, span: Span) -> Result<NodeId, Error> {
		let args =
			if let Some(TokenKind::OpenParens) = self.peek() {
				self.parse_args()?
			} else if self.at_statement_end() {
				Vec::new()
			} else {
				self.comma_sep(Self::parse_expression)?
			};

		Ok(self.add(NodeKind::Command { name, args }, span))
	}


	/// Statements starting with an identifier: labels, declarations, assignments and calls.
	fn parse_identifier_statement(&mut self) -> Result<NodeId, Error> {
		let (name, span) = self.parse_name()?;

		match self.peek() {
			// The colon is left as the statement terminator.
			Some(TokenKind::Colon) if name.annotation == Annotation::None => {
				Ok(self.ast.add(NodeKind::Label(name.symbol), span))
			}

			Some(TokenKind::Keyword(Keyword::As)) => {
				let ty = self.parse_optional_type()?;
				self.parse_var_decl(Scope::Default, name, ty, span)
			}

			_ => {
				let target = self.parse_reference_from(name, span)?;

				if self.accept(&TokenKind::Operator(Operator::Equals)).is_some() {
					let value = self.parse_expression()?;
					Ok(self.add(NodeKind::Assignment { target, value }, span))
				} else if let NodeKind::FuncCall { .. } = self.ast.kind(target) {
					Ok(target)
				} else {
					Err(self.unexpected("'='"))
				}
			}
		}
	}
}

