use super::{
	ast::{BuiltinType, Scope},
	Ast,
	Error,
	Errors,
	Name,
	NodeId,
	NodeKind,
	TypeRef,
	Variable,
	VariableScope,
};


/// A function with its local variables, including parameters.
#[derive(Debug)]
pub struct Function {
	pub name: Name,
	pub node: NodeId,
	pub scope: VariableScope,
}


/// All variable scopes of a program.
#[derive(Debug, Default)]
pub struct Scopes {
	/// Variables declared with `global`, visible everywhere.
	pub globals: VariableScope,
	/// Variables of the main program.
	pub main: VariableScope,
	/// Functions in declaration order.
	pub functions: Vec<Function>,
}


impl Scopes {
	pub fn function(&self, name: Name) -> Option<&Function> {
		self.functions
			.iter()
			.find(|function| function.name == name)
	}
}


/// Bind every variable to a scope, inferring the type of implicit variables from their
/// annotation.
///
/// Globals are collected first, so they are visible before their declaration. Any other
/// variable belongs to the main program or to the enclosing function. Members of user
/// defined types are not variables.
pub fn declare_variables(ast: &Ast, errors: &mut Errors) -> Scopes {
	let mut scopes = Scopes::default();

	for node in ast.iter() {
		if let &NodeKind::VarDecl { scope: Scope::Global, name, ty, .. } = ast.kind(node) {
			declare(&mut scopes.globals, name, ty, node, ast, errors);
		}
	}

	if let Some(root) = ast.root {
		let mut context = Context {
			ast,
			errors,
			globals: &scopes.globals,
			current: VariableScope::default(),
			functions: Vec::new(),
		};

		context.visit(root);

		scopes.main = context.current;
		scopes.functions = context.functions;
	}

	scopes
}


/// Add an explicit declaration, reporting a redeclaration.
fn declare(
	scope: &mut VariableScope,
	name: Name,
	ty: TypeRef,
	node: NodeId,
	ast: &Ast,
	errors: &mut Errors,
) {
	let span = ast.span(node);

	if let Some(first) = scope.lookup(name) {
		errors.report(Error::variable_redeclared(name, first.span, span));
		return;
	}

	let ty = match ty {
		TypeRef::Default => TypeRef::Builtin(BuiltinType::from_annotation(name.annotation)),
		ty => ty,
	};

	scope.add(Variable { name, ty, node, span, implicit: false });
}


struct Context<'a> {
	ast: &'a Ast,
	errors: &'a mut Errors,
	globals: &'a VariableScope,
	/// The scope of the main program or of the function being visited.
	current: VariableScope,
	functions: Vec<Function>,
}


impl<'a> Context<'a> {
	fn visit(&mut self, node: NodeId) {
		let ast = self.ast;

		match ast.kind(node) {
			&NodeKind::Variable(name) => self.reference(name, node),

			&NodeKind::Field { base, member } => {
				self.visit(base);

				// The member name belongs to the type, but indices are expressions.
				if let NodeKind::ArrayRef { args, .. } = ast.kind(member) {
					for &arg in args {
						self.visit(arg);
					}
				}
			}

			&NodeKind::VarDecl { scope, name, ty, init } => {
				if scope != Scope::Global {
					declare(&mut self.current, name, ty, node, ast, self.errors);
				}

				if let Some(init) = init {
					self.visit(init);
				}
			}

			NodeKind::UdtDecl { .. } => (),

			NodeKind::FuncDecl { name, .. } => {
				let outer = std::mem::take(&mut self.current);

				for child in ast.children(node) {
					self.visit(child);
				}

				let scope = std::mem::replace(&mut self.current, outer);
				log::trace!("function at {} has {} variables", ast.span(node), scope.len());

				self.functions.push(Function { name: *name, node, scope });
			}

			_ => {
				for child in ast.children(node) {
					self.visit(child);
				}
			}
		}
	}


	/// Use of a variable, which implicitly declares it if not yet visible.
	fn reference(&mut self, name: Name, node: NodeId) {
		if self.current.lookup(name).is_some() || self.globals.lookup(name).is_some() {
			return;
		}

		let ty = TypeRef::Builtin(BuiltinType::from_annotation(name.annotation));
		let span = self.ast.span(node);

		self.current.add(Variable { name, ty, node, span, implicit: true });
	}
}
