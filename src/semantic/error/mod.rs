mod fmt;

use super::{Name, Span, Symbol};
pub use fmt::ErrorsDisplayContext;


/// How bad a diagnostic is. Only errors fail the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
	Warning,
	Error,
}


/// The kind of semantic error.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
	/// Array declared twice anywhere in the program.
	ArrayRedeclared { name: Name, first: Span },
	/// Function declared twice.
	FunctionRedeclared { name: Name, first: Span },
	/// Array with the same name as a function.
	ArrayFunctionClash { name: Name, function: Span },
	/// A call that names neither a declared array nor a declared function.
	UnresolvedReference(Name),
	/// Label declared twice.
	DuplicateLabel { label: Symbol, first: Span },
	/// Jump to a label that doesn't exist.
	UndefinedLabel(Symbol),
	/// Jump into or out of a function.
	JumpAcrossFunction(Symbol),
	/// The discarded operand of `..` calls a function or a command.
	BitwiseNotSideEffects,
	/// User defined type that is never declared.
	UndefinedType(Symbol),
	/// Variable explicitly declared twice in the same scope, or after an implicit use.
	VariableRedeclared { name: Name, first: Span },
	/// Annotation on a value of a user defined type, as in `p#.x`.
	AnnotatedUdtValue(Name),
}


/// A semantic error.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
	pub kind: ErrorKind,
	pub span: Span,
}


impl Error {
	pub fn array_redeclared(name: Name, first: Span, span: Span) -> Self {
		Self { kind: ErrorKind::ArrayRedeclared { name, first }, span }
	}


	pub fn function_redeclared(name: Name, first: Span, span: Span) -> Self {
		Self { kind: ErrorKind::FunctionRedeclared { name, first }, span }
	}


	pub fn array_function_clash(name: Name, function: Span, span: Span) -> Self {
		Self { kind: ErrorKind::ArrayFunctionClash { name, function }, span }
	}


	pub fn unresolved_reference(name: Name, span: Span) -> Self {
		Self { kind: ErrorKind::UnresolvedReference(name), span }
	}


	pub fn duplicate_label(label: Symbol, first: Span, span: Span) -> Self {
		Self { kind: ErrorKind::DuplicateLabel { label, first }, span }
	}


	pub fn undefined_label(label: Symbol, span: Span) -> Self {
		Self { kind: ErrorKind::UndefinedLabel(label), span }
	}


	pub fn jump_across_function(label: Symbol, span: Span) -> Self {
		Self { kind: ErrorKind::JumpAcrossFunction(label), span }
	}


	/// The span should point at the right operand.
	pub fn bitwise_not_side_effects(span: Span) -> Self {
		Self { kind: ErrorKind::BitwiseNotSideEffects, span }
	}


	pub fn undefined_type(name: Symbol, span: Span) -> Self {
		Self { kind: ErrorKind::UndefinedType(name), span }
	}


	pub fn variable_redeclared(name: Name, first: Span, span: Span) -> Self {
		Self { kind: ErrorKind::VariableRedeclared { name, first }, span }
	}


	pub fn annotated_udt_value(name: Name, span: Span) -> Self {
		Self { kind: ErrorKind::AnnotatedUdtValue(name), span }
	}


	pub fn severity(&self) -> Severity {
		match self.kind {
			ErrorKind::UnresolvedReference(_) => Severity::Warning,
			_ => Severity::Error,
		}
	}
}


impl std::error::Error for Error {}


/// Diagnostics collected by the passes, in the order they were found. The same
/// diagnostic is kept only once, so rerunning a pass adds nothing.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Errors(pub Vec<Error>);


impl Errors {
	pub fn report(&mut self, error: Error) {
		if self.0.contains(&error) {
			log::trace!("diagnostic already reported: {:?}", error);
			return;
		}

		log::debug!("semantic diagnostic: {:?}", error);
		self.0.push(error);
	}


	/// Whether any diagnostic is an error, as opposed to a warning.
	pub fn has_errors(&self) -> bool {
		self.0
			.iter()
			.any(|error| error.severity() == Severity::Error)
	}


	pub fn len(&self) -> usize {
		self.0.len()
	}


	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}


	pub fn iter(&self) -> std::slice::Iter<'_, Error> {
		self.0.iter()
	}
}


impl IntoIterator for Errors {
	type Item = Error;
	type IntoIter = std::vec::IntoIter<Error>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}


impl Extend<Error> for Errors {
	fn extend<T>(&mut self, iter: T)
	where
		T: IntoIterator<Item = Error>,
	{
		for error in iter {
			self.report(error);
		}
	}
}
