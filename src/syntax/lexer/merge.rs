use std::collections::VecDeque;

use super::{Annotation, Builtin, Error, Literal, Token, TokenKind};
use crate::{
	keyword::{self, KeywordIndex},
	symbol,
};


/// Classifies raw words, merging sequences of words that spell a keyword database entry
/// into a single command token.
///
/// Commands may contain builtin keywords (`loop sound`), integers (`load 3dsound`) and
/// annotations (`str$`), so words are assembled with their neighbours for as long as
/// some keyword starts with the assembled text, and the longest exact keyword wins.
/// Tokens separated by whitespace are joined by a single space, adjacent tokens are
/// joined directly.
#[derive(Debug)]
pub struct KeywordMerger<'a, 'b, I>
where
	I: Iterator<Item = Result<Token, Error>>,
{
	tokens: I,
	/// Tokens scanned ahead while looking for a command.
	lookahead: VecDeque<Result<Token, Error>>,
	source: &'a str,
	index: &'a KeywordIndex,
	interner: &'b mut symbol::Interner,
}


impl<'a, 'b, I> KeywordMerger<'a, 'b, I>
where
	I: Iterator<Item = Result<Token, Error>>,
{
	pub fn new(
		tokens: I,
		source: &'a str,
		index: &'a KeywordIndex,
		interner: &'b mut symbol::Interner,
	) -> Self {
		Self {
			tokens,
			lookahead: VecDeque::with_capacity(index.longest_keyword_word_count()),
			source,
			index,
			interner,
		}
	}


	/// Make sure there are at least `count` tokens in the lookahead buffer, unless the input
	/// is exhausted.
	fn fill(&mut self, count: usize) {
		while self.lookahead.len() < count {
			match self.tokens.next() {
				Some(token) => self.lookahead.push_back(token),
				None => break,
			}
		}
	}


	fn text(&self, token: &Token) -> &'a str {
		&self.source[token.bytes.clone()]
	}


	/// Try to merge the given token and its followers into a command.
	fn merge_command(&mut self, first: Token) -> Token {
		let mut assembled = String::from(self.text(&first));
		let mut end = first.bytes.end;

		// How many lookahead tokens form the longest command, and its text length.
		let mut longest: Option<(usize, usize)> = None;
		let mut count = 0;

		loop {
			let found = self.index.find_longest_match(&assembled);
			if found.exact && found.length == assembled.len() {
				longest = Some((count, assembled.len()));
			}

			if !self.index.has_prefix(&assembled) {
				break;
			}

			self.fill(count + 1);
			let next = match self.lookahead.get(count) {
				Some(Ok(token)) if is_mergeable(&token.kind) => token,
				_ => break,
			};

			if next.bytes.start > end {
				assembled.push(' ');
			}
			assembled.push_str(&self.source[next.bytes.clone()]);
			end = next.bytes.end;
			count += 1;
		}

		let (count, length) = match longest {
			Some(longest) => longest,
			None => return first,
		};

		let name = keyword::canonical_name(&assembled[.. length]);

		let mut span = first.span;
		let mut bytes = first.bytes;
		for token in self.lookahead.drain(.. count).flatten() {
			span = span.merge(token.span);
			bytes.end = token.bytes.end;
		}

		log::trace!("merged command '{}' at {}", name, span);

		Token {
			kind: TokenKind::Command(self.interner.get_or_intern(name)),
			span,
			bytes,
		}
	}


	/// An integer glued to a following word is only meaningful as part of a command, like
	/// `load 3dsound`. Builtin keywords are accepted, as in `if a = 1then`.
	fn ambiguous_boundary(&mut self, integer: &Token) -> Option<Error> {
		self.fill(1);

		match self.lookahead.front() {
			Some(Ok(Token { kind: TokenKind::Word(word, _), bytes, .. }))
				if bytes.start == integer.bytes.end && Builtin::lookup(word).is_none() =>
			{
				let text = &self.source[integer.bytes.start .. bytes.end];
				Some(Error::ambiguous_boundary(text, integer.span.first))
			}

			_ => None,
		}
	}


	/// Classify remaining raw words as builtins or identifiers.
	fn classify(&mut self, token: Token) -> Token {
		let kind = match token.kind {
			// A builtin shadows a command with the same name.
			TokenKind::Command(symbol) => {
				let name = self.interner.resolve(symbol).unwrap_or_default();

				match Builtin::lookup(name) {
					Some(builtin) => {
						log::warn!(
							"{}: command '{}' has the same name as a builtin keyword, and will be ignored",
							token.span,
							name,
						);
						builtin_token(builtin)
					}

					None => TokenKind::Command(symbol),
				}
			}

			// Annotated words are never builtins, to support declarations like
			// `string$ as string`.
			TokenKind::Word(word, Annotation::None) => match Builtin::lookup(&word) {
				Some(builtin) => builtin_token(builtin),
				None => TokenKind::Identifier(self.interner.get_or_intern(word), Annotation::None),
			},

			TokenKind::Word(word, annotation) => {
				TokenKind::Identifier(self.interner.get_or_intern(word), annotation)
			}

			kind => kind,
		};

		Token { kind, ..token }
	}
}


impl<'a, 'b, I> Iterator for KeywordMerger<'a, 'b, I>
where
	I: Iterator<Item = Result<Token, Error>>,
{
	type Item = Result<Token, Error>;

	fn next(&mut self) -> Option<Self::Item> {
		let token = match self.lookahead.pop_front() {
			Some(token) => token,
			None => self.tokens.next()?,
		};

		let token = match token {
			Ok(token) if is_mergeable(&token.kind) && !self.index.is_empty() => {
				self.merge_command(token)
			}
			Ok(token) => token,
			Err(error) => return Some(Err(error)),
		};

		if let TokenKind::Literal(Literal::Integer(_)) = token.kind {
			if let Some(error) = self.ambiguous_boundary(&token) {
				return Some(Err(error));
			}
		}

		Some(Ok(self.classify(token)))
	}
}


/// Commands are made of words and integers.
fn is_mergeable(kind: &TokenKind) -> bool {
	matches!(kind, TokenKind::Word(..) | TokenKind::Literal(Literal::Integer(_)))
}


fn builtin_token(builtin: Builtin) -> TokenKind {
	match builtin {
		Builtin::Keyword(keyword) => TokenKind::Keyword(keyword),
		Builtin::Operator(op) => TokenKind::Operator(op),
		Builtin::Literal(literal) => TokenKind::Literal(literal),
	}
}
