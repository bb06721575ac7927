use std::{io, path::Path};

use assert_matches::assert_matches;

use super::*;
use crate::{
	fmt,
	symbol,
	syntax::{
		self,
		ast::{BinaryOp, BuiltinType, UnaryOp},
		AnalysisDisplayContext,
		Source,
	},
	tests,
};


fn parse(input: &str) -> (Ast, symbol::Interner) {
	let _ = pretty_env_logger::try_init();

	let mut interner = symbol::Interner::new();
	let index = tests::util::keyword_index().expect("failed to load keywords");
	let source = Source::from_string(Path::new("<test>"), input);

	let analysis = syntax::Analysis::analyze(&source, &index, &mut interner);
	assert!(analysis.errors.is_empty(), "{:#?}", analysis.errors);

	(analysis.ast.expect("missing ast"), interner)
}


fn program(input: &str) -> (Program, symbol::Interner) {
	let (ast, interner) = parse(input);

	match analyze(ast) {
		Ok(program) => (program, interner),
		Err(errors) => panic!("{:#?}", errors),
	}
}


fn error_kinds(input: &str) -> Vec<ErrorKind> {
	let (ast, _) = parse(input);

	match analyze(ast) {
		Ok(program) => panic!("analysis succeeded: {:#?}", program.ast),
		Err(errors) => errors
			.into_iter()
			.filter(|error| error.severity() == Severity::Error)
			.map(|error| error.kind)
			.collect(),
	}
}


fn name(interner: &symbol::Interner, name: &str, annotation: Annotation) -> Name {
	let symbol = interner.get(name).expect("symbol not interned");
	Name::new(symbol, annotation)
}


fn count<F>(ast: &Ast, mut predicate: F) -> usize
where
	F: FnMut(&NodeKind) -> bool,
{
	ast
		.iter()
		.filter(|&node| predicate(ast.kind(node)))
		.count()
}


/// The value of the last statement, which must be an assignment.
fn last_assigned_value(ast: &Ast) -> NodeId {
	let statements = ast.children(ast.root.expect("no root"));

	match statements.last().map(|&statement| ast.kind(statement)) {
		Some(&NodeKind::Assignment { value, .. }) => value,
		kind => panic!("expected assignment, got {:?}", kind),
	}
}


#[test]
fn test_positive() -> io::Result<()> {
	let _ = pretty_env_logger::try_init();

	let mut interner = symbol::Interner::new();
	let index = tests::util::keyword_index()?;

	tests::util::test_dir(
		"testdata/positive",
		move |path, file| {
			let source = Source::from_reader(path, file)?;
			let analysis = syntax::Analysis::analyze(&source, &index, &mut interner);

			if !analysis.is_ok() {
				panic!(
					"{}",
					fmt::Show(
						&analysis,
						AnalysisDisplayContext {
							max_errors: None,
							interner: &interner,
							source: &source,
						}
					)
				);
			}

			let ast = analysis.ast.expect("missing ast");

			if let Err(errors) = analyze(ast) {
				panic!(
					"{}",
					fmt::Show(
						&errors,
						ErrorsDisplayContext {
							max_errors: None,
							interner: &interner,
							source: &source,
						}
					)
				);
			}

			Ok(())
		}
	)
}


#[test]
fn test_array_refs_resolved() {
	let (program, _) = program("dim a(10)\na(1) = 5\nb = a(1) + 1\n");
	let ast = &program.ast;

	assert_eq!(count(ast, |kind| matches!(kind, NodeKind::FuncCall { .. })), 0);
	assert_eq!(
		count(
			ast,
			|kind| matches!(kind, NodeKind::ArrayRef { ty: TypeRef::Builtin(BuiltinType::Integer), .. })
		),
		2
	);
	assert!(program.warnings.is_empty());
}


#[test]
fn test_array_element_types() {
	let (program, interner) = program(
		"type vec\n\tx as float\nendtype\n\
		 dim f#(3)\ndim names$(2) as string\ndim v(2) as vec\n\
		 f#(1) = 1.5\nnames$(0) = \"zero\"\nv(1).x = f#(1)\n"
	);
	let ast = &program.ast;
	let vec = program.udts[&interner.get("vec").expect("vec")];

	let types: Vec<_> = ast
		.iter()
		.filter_map(|node| match ast.kind(node) {
			NodeKind::ArrayRef { ty, .. } => Some(*ty),
			_ => None,
		})
		.collect();

	assert_matches!(
		&types[..],
		[
			TypeRef::Builtin(BuiltinType::Float),
			TypeRef::Builtin(BuiltinType::String),
			TypeRef::Udt { decl: Some(udt), .. },
			TypeRef::Builtin(BuiltinType::Float),
		] if *udt == vec
	);
}


#[test]
fn test_reference_before_declaration_stays_call() {
	let (program, interner) = program("x = a(1)\ndim a(5)\n");
	let a = name(&interner, "a", Annotation::None);

	assert_eq!(count(&program.ast, |kind| matches!(kind, NodeKind::FuncCall { .. })), 1);
	assert_matches!(
		&program.warnings.0[..],
		[Error { kind: ErrorKind::UnresolvedReference(name), .. }] if *name == a
	);
}


#[test]
fn test_function_calls_are_kept() {
	let (program, _) = program("function f(x)\nendfunction x\ny = f(2)\n");

	assert_eq!(count(&program.ast, |kind| matches!(kind, NodeKind::FuncCall { .. })), 1);
	assert!(program.warnings.is_empty());
}


#[test]
fn test_array_function_clash() {
	assert_matches!(
		&error_kinds("function a(x)\nendfunction x\ndim a(5)\n")[..],
		[ErrorKind::ArrayFunctionClash { function, .. }] if function.first.line == 1
	);
}


#[test]
fn test_function_redeclared() {
	assert_matches!(
		&error_kinds("function f()\nendfunction\nfunction f()\nendfunction\n")[..],
		[ErrorKind::FunctionRedeclared { first, .. }] if first.first.line == 1
	);
}


#[test]
fn test_array_redeclared_across_functions() {
	let (mut ast, _) = parse("dim a(5)\nfunction f()\n\tdim a(3)\nendfunction\n");
	let mut errors = Errors::default();

	assert!(!resolve_array_func_ambiguity(&mut ast, &mut errors));
	assert_matches!(
		&errors.0[..],
		[Error { kind: ErrorKind::ArrayRedeclared { first, .. }, span }]
			if first.first.line == 1 && span.first.line == 3
	);
}


#[test]
fn test_udt_member_arrays_are_not_declarations() {
	let (program, _) = program("type t\n\tv(3)\nendtype\ndim v(2)\nx = v(1)\n");

	assert_eq!(count(&program.ast, |kind| matches!(kind, NodeKind::ArrayRef { .. })), 1);
}


#[test]
fn test_resolve_is_idempotent() {
	let (mut ast, _) = parse("dim a(3)\nfunction f(x)\nendfunction x\na(1) = f(a(2)) + g(2)\n");
	let mut errors = Errors::default();

	assert!(resolve_array_func_ambiguity(&mut ast, &mut errors));
	assert_matches!(
		&errors.0[..],
		[Error { kind: ErrorKind::UnresolvedReference(_), .. }]
	);

	let snapshot = |ast: &Ast| -> Vec<NodeKind> {
		ast.iter().map(|node| ast.kind(node).clone()).collect()
	};

	let nodes = ast.len();
	let resolved = snapshot(&ast);
	assert_eq!(resolved.iter().filter(|kind| matches!(kind, NodeKind::ArrayRef { .. })).count(), 2);

	assert!(resolve_array_func_ambiguity(&mut ast, &mut errors));
	assert_eq!(errors.len(), 1);
	assert_eq!(ast.len(), nodes);
	assert_eq!(snapshot(&ast), resolved);
}


#[test]
fn test_rerun_keeps_errors_once() {
	let (mut ast, _) = parse("dim a(5)\nfunction f()\n\tdim a(3)\nendfunction\n");
	let mut errors = Errors::default();

	assert!(!resolve_array_func_ambiguity(&mut ast, &mut errors));
	assert!(!resolve_array_func_ambiguity(&mut ast, &mut errors));
	assert_matches!(
		&errors.0[..],
		[Error { kind: ErrorKind::ArrayRedeclared { .. }, .. }]
	);
}


#[test]
fn test_bitwise_not_rewritten() {
	let (program, _) = program("mask = 12\ninverted = mask .. 0 .. 1\n");
	let ast = &program.ast;

	let value = last_assigned_value(ast);
	let inner = match ast.kind(value) {
		&NodeKind::UnaryOp { op: UnaryOp::BitNot, operand } => operand,
		kind => panic!("expected bitwise not, got {:?}", kind),
	};

	assert_matches!(
		ast.kind(inner),
		&NodeKind::UnaryOp { op: UnaryOp::BitNot, operand }
			if matches!(ast.kind(operand), NodeKind::Variable(_))
	);
	assert_eq!(count(ast, |kind| matches!(kind, NodeKind::BinaryOp { op: BinaryOp::BitNot, .. })), 0);
}


#[test]
fn test_bitwise_not_side_effects() {
	assert_eq!(
		error_kinds("function f()\nendfunction 1\nx = 3 .. f()\n"),
		[ErrorKind::BitwiseNotSideEffects]
	);

	assert_eq!(error_kinds("x = 3 .. timer()\n"), [ErrorKind::BitwiseNotSideEffects]);
}


#[test]
fn test_labels() {
	let (program, interner) = program("goto top\ntop:\nfunction f()\n\tagain:\n\tgosub again\nendfunction\n");

	assert_eq!(program.labels.len(), 2);
	assert!(program.labels.contains_key(&interner.get("top").expect("top")));

	assert_matches!(
		&error_kinds("top:\ntop:\ngoto nowhere\n")[..],
		[ErrorKind::DuplicateLabel { first, .. }, ErrorKind::UndefinedLabel(_)] if first.first.line == 1
	);

	assert_matches!(
		&error_kinds("top:\nfunction f()\n\tgoto top\nendfunction\n")[..],
		[ErrorKind::JumpAcrossFunction(_)]
	);
}


#[test]
fn test_variable_scopes() {
	let (program, interner) = program(
		"x = 1\nx# = 2.5\nx$ = \"three\"\n\
		 global g as float\nlives as integer = 3\n\
		 function f(p)\n\tl = p + g\nendfunction l\n"
	);
	let scopes = &program.scopes;
	let name = |text, annotation| name(&interner, text, annotation);

	let globals: Vec<_> = scopes.globals.iter().map(|variable| (variable.name, variable.ty)).collect();
	assert_eq!(globals, [(name("g", Annotation::None), TypeRef::Builtin(BuiltinType::Float))]);

	let main: Vec<_> = scopes.main.iter().map(|variable| (variable.name, variable.implicit)).collect();
	assert_eq!(
		main,
		[
			(name("x", Annotation::None), true),
			(name("x", Annotation::Float), true),
			(name("x", Annotation::String), true),
			(name("lives", Annotation::None), false),
		]
	);

	assert_matches!(
		scopes.main.lookup(name("x", Annotation::String)),
		Some(Variable { ty: TypeRef::Builtin(BuiltinType::String), .. })
	);
	assert_eq!(scopes.main.lookup(name("x", Annotation::Word)), None);

	let function = scopes.function(name("f", Annotation::None)).expect("missing function");
	let locals: Vec<_> = function.scope.iter().map(|variable| variable.name).collect();
	assert_eq!(locals, [name("p", Annotation::None), name("l", Annotation::None)]);
}


#[test]
fn test_local_shadows_global() {
	let (program, interner) = program(
		"global n = 1\nfunction f()\n\tlocal n as string\n\tn = \"s\"\nendfunction\n"
	);
	let n = name(&interner, "n", Annotation::None);

	let function = &program.scopes.functions[0];
	assert_matches!(
		function.scope.lookup(n),
		Some(Variable { ty: TypeRef::Builtin(BuiltinType::String), implicit: false, .. })
	);
	assert_eq!(function.scope.len(), 1);
	assert!(program.scopes.main.is_empty());
}


#[test]
fn test_variable_redeclared() {
	assert_matches!(
		&error_kinds("x as float\nx as integer\n")[..],
		[ErrorKind::VariableRedeclared { first, .. }] if first.first.line == 1
	);

	assert_matches!(
		&error_kinds("y = 1\ny as float\n")[..],
		[ErrorKind::VariableRedeclared { .. }]
	);
}


#[test]
fn test_forward_type_reference() {
	let (program, interner) = program("a as vec\ntype vec\n\tx as float\nendtype\na.x = 1.0\n");
	let vec = program.udts[&interner.get("vec").expect("vec")];
	let a = name(&interner, "a", Annotation::None);

	assert_matches!(
		program.scopes.main.lookup(a),
		Some(Variable { ty: TypeRef::Udt { decl: Some(decl), .. }, .. }) if *decl == vec
	);
	assert_eq!(program.scopes.main.len(), 1);
}


#[test]
fn test_undefined_type() {
	assert_matches!(&error_kinds("a as nothing\n")[..], [ErrorKind::UndefinedType(_)]);
}


#[test]
fn test_annotated_udt_value() {
	let (ast, interner) = parse("type t\n\tx\nendtype\np# as t\np#.x = 1\n");
	let p = name(&interner, "p", Annotation::Float);

	match analyze(ast) {
		Ok(_) => panic!("annotated member access was accepted"),
		Err(errors) => assert_matches!(
			&errors.0[..],
			[Error { kind: ErrorKind::AnnotatedUdtValue(base), span }] => {
				assert_eq!(*base, p);
				assert_eq!(span.first.line, 5);
			}
		),
	}
}


#[test]
fn test_annotated_inner_member() {
	assert_matches!(
		&error_kinds(
			"type v\n\tx\nendtype\ntype t\n\tpos as v\nendtype\np as t\np.pos$.x = 1\n"
		)[..],
		[ErrorKind::AnnotatedUdtValue(_)]
	);
}


#[test]
fn test_plain_member_access() {
	let (program, _) = program(
		"type v\n\tx#\nendtype\ntype t\n\tpos as v\nendtype\np as t\np.pos.x# = 1.5\n"
	);

	assert!(program.warnings.is_empty());
}
