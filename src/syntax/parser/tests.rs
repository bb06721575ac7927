use std::path::Path;

use assert_matches::assert_matches;

use super::Error;
use crate::{
	symbol,
	syntax::{
		self,
		ast::{Annotation, Ast, BinaryOp, BuiltinType, Literal, NodeId, NodeKind, Scope, TypeRef, UnaryOp},
		Analysis,
		Source,
		SourcePos,
	},
	tests,
};


fn analyze(input: &str) -> (Analysis, symbol::Interner) {
	let _ = pretty_env_logger::try_init();

	let mut interner = symbol::Interner::new();
	let index = tests::util::keyword_index().expect("failed to load keywords");
	let source = Source::from_string(Path::new("<test>"), input);

	let analysis = Analysis::analyze(&source, &index, &mut interner);

	(analysis, interner)
}


fn parse(input: &str) -> (Ast, symbol::Interner) {
	let (analysis, interner) = analyze(input);

	assert!(analysis.errors.is_empty(), "{:#?}", analysis.errors);

	(analysis.ast.expect("missing ast"), interner)
}


fn parser_errors(input: &str) -> Vec<Error> {
	let (analysis, _) = analyze(input);

	assert!(analysis.ast.is_none());

	analysis.errors
		.into_vec()
		.into_iter()
		.filter_map(|error| match error {
			syntax::Error::Parser(error) => Some(error),
			syntax::Error::Lexer(_) => None,
		})
		.collect()
}


fn statements(ast: &Ast) -> Vec<NodeId> {
	ast.root
		.map(|root| ast.children(root))
		.unwrap_or_default()
}


/// The value of the single assignment in the program.
fn assigned_value(ast: &Ast) -> NodeId {
	match &statements(ast)[..] {
		&[statement] => match ast.kind(statement) {
			NodeKind::Assignment { value, .. } => *value,
			kind => panic!("expected assignment, got {:?}", kind),
		},
		statements => panic!("expected one statement, got {:?}", statements),
	}
}


fn binary(ast: &Ast, node: NodeId) -> (BinaryOp, NodeId, NodeId) {
	match ast.kind(node) {
		NodeKind::BinaryOp { op, left, right } => (*op, *left, *right),
		kind => panic!("expected binary operator, got {:?}", kind),
	}
}


fn variable<'a>(ast: &Ast, node: NodeId, interner: &'a symbol::Interner) -> &'a str {
	match ast.kind(node) {
		NodeKind::Variable(name) => interner.resolve(name.symbol).unwrap_or_default(),
		kind => panic!("expected variable, got {:?}", kind),
	}
}


#[test]
fn test_multiplication_binds_tighter() {
	let (ast, interner) = parse("result = a + b * c");

	let (op, left, right) = binary(&ast, assigned_value(&ast));
	assert_eq!(op, BinaryOp::Plus);
	assert_eq!(variable(&ast, left, &interner), "a");

	let (op, left, right) = binary(&ast, right);
	assert_eq!(op, BinaryOp::Times);
	assert_eq!(variable(&ast, left, &interner), "b");
	assert_eq!(variable(&ast, right, &interner), "c");
}


#[test]
fn test_left_associativity() {
	let (ast, interner) = parse("result = a + b + c");

	let (op, left, right) = binary(&ast, assigned_value(&ast));
	assert_eq!(op, BinaryOp::Plus);
	assert_eq!(variable(&ast, right, &interner), "c");

	let (op, left, right) = binary(&ast, left);
	assert_eq!(op, BinaryOp::Plus);
	assert_eq!(variable(&ast, left, &interner), "a");
	assert_eq!(variable(&ast, right, &interner), "b");
}


#[test]
fn test_logical_operators() {
	let (ast, interner) = parse("x = not a = b and c");

	let (op, left, right) = binary(&ast, assigned_value(&ast));
	assert_eq!(op, BinaryOp::And);
	assert_eq!(variable(&ast, right, &interner), "c");

	assert_matches!(
		ast.kind(left),
		&NodeKind::UnaryOp { op: UnaryOp::Not, operand } => {
			let (op, _, _) = binary(&ast, operand);
			assert_eq!(op, BinaryOp::Equals);
		}
	);
}


#[test]
fn test_negation_binds_tightest() {
	let (ast, interner) = parse("x = -a ^ 2");

	let (op, left, right) = binary(&ast, assigned_value(&ast));
	assert_eq!(op, BinaryOp::Pow);
	assert_matches!(ast.kind(right), NodeKind::Literal(Literal::Integer(2)));
	assert_matches!(
		ast.kind(left),
		&NodeKind::UnaryOp { op: UnaryOp::Minus, operand } => {
			assert_eq!(variable(&ast, operand, &interner), "a")
		}
	);
}


#[test]
fn test_bitwise_not_is_binary() {
	let (ast, interner) = parse("x = a && b .. 0");

	let (op, left, right) = binary(&ast, assigned_value(&ast));
	assert_eq!(op, BinaryOp::BitNot);
	assert_matches!(ast.kind(right), NodeKind::Literal(Literal::Integer(0)));

	let (op, left, _) = binary(&ast, left);
	assert_eq!(op, BinaryOp::BitAnd);
	assert_eq!(variable(&ast, left, &interner), "a");
}


#[test]
fn test_array_redeclared() {
	let errors = parser_errors("dim a(5)\ndim a(10) as float");

	assert_matches!(
		&errors[..],
		[Error::ArrayRedeclared { first, second, .. }] => {
			assert_eq!(first.first, SourcePos { line: 1, column: 1 });
			assert_eq!(first.last, SourcePos { line: 1, column: 8 });
			assert_eq!(second.first, SourcePos { line: 2, column: 1 });
			assert_eq!(second.last, SourcePos { line: 2, column: 18 });
		}
	);
}


#[test]
fn test_array_scopes() {
	// Functions have their own arrays.
	parse("dim a(5)\nfunction f()\n\tdim a(2)\nendfunction");

	// Global arrays go to the main program scope.
	assert_matches!(
		&parser_errors("dim a(5)\nfunction f()\n\tglobal dim a(2)\nendfunction")[..],
		[Error::ArrayRedeclared { .. }]
	);
}


#[test]
fn test_calls_are_not_array_refs() {
	let (ast, _) = parse("dim a(5)\nx = a(1)");

	assert_matches!(
		&statements(&ast)[..],
		&[decl, assignment] => {
			assert_matches!(ast.kind(decl), NodeKind::ArrayDecl { scope: Scope::Default, dims, .. } if dims.len() == 1);
			assert_matches!(
				ast.kind(assignment),
				&NodeKind::Assignment { value, .. } => {
					assert_matches!(ast.kind(value), NodeKind::FuncCall { args, .. } if args.len() == 1)
				}
			);
		}
	);
}


#[test]
fn test_udt_nesting() {
	let (ast, interner) = parse(
		"type vec3\n x as float\n y as float\nendtype\n\
		 type player\n pos(4) as vec3\n name$\nendtype\n\
		 dim p(5) as player\n\
		 p(1).pos(4).x# = 2.3"
	);

	let statements = statements(&ast);
	assert_eq!(statements.len(), 4);

	let vec3 = statements[0];
	let player = statements[1];

	// The member's type resolves to the earlier declaration.
	assert_matches!(
		ast.kind(player),
		&NodeKind::UdtDecl { body, .. } => assert_matches!(
			ast.kind(body),
			NodeKind::UdtBody(members) => assert_matches!(
				ast.kind(members[0]),
				NodeKind::ArrayDecl { ty: TypeRef::Udt { decl: Some(decl), .. }, .. } => {
					assert_eq!(*decl, vec3)
				}
			)
		)
	);

	assert_matches!(
		ast.kind(statements[2]),
		NodeKind::ArrayDecl { ty: TypeRef::Udt { decl: Some(decl), .. }, .. } => {
			assert_eq!(*decl, player)
		}
	);

	// ((p(1)).pos(4)).x#
	assert_matches!(
		ast.kind(statements[3]),
		&NodeKind::Assignment { target, value } => {
			assert_matches!(ast.kind(value), NodeKind::Literal(Literal::Float(_)));

			assert_matches!(
				ast.kind(target),
				&NodeKind::Field { base, member } => {
					assert_matches!(
						ast.kind(member),
						NodeKind::Variable(name) if name.annotation == Annotation::Float
					);
					assert_matches!(
						ast.kind(base),
						&NodeKind::Field { base, member } => {
							assert_matches!(ast.kind(base), NodeKind::FuncCall { .. });
							assert_matches!(
								ast.kind(member),
								NodeKind::ArrayRef { name, .. } => {
									assert_eq!(interner.resolve(name.symbol), Some("pos"))
								}
							);
						}
					);
				}
			);
		}
	);
}


#[test]
fn test_udt_redeclared() {
	assert_matches!(
		&parser_errors("type a\n x\nendtype\ntype a\n y\nendtype")[..],
		[Error::UdtRedeclared { first, second, .. }] => {
			assert_eq!(first.first.line, 1);
			assert_eq!(second.first.line, 4);
		}
	);
}


#[test]
fn test_declarations() {
	let (ast, _) = parse(
		"global score\nlocal name$ = \"x\"\nspeed as double float = 1.5\ntotal as integer"
	);

	assert_matches!(
		&statements(&ast)[..],
		&[score, name, speed, total] => {
			assert_matches!(
				ast.kind(score),
				NodeKind::VarDecl { scope: Scope::Global, ty: TypeRef::Default, init: None, .. }
			);
			assert_matches!(
				ast.kind(name),
				NodeKind::VarDecl { scope: Scope::Local, init: Some(_), .. }
			);
			assert_matches!(
				ast.kind(speed),
				NodeKind::VarDecl {
					scope: Scope::Default,
					ty: TypeRef::Builtin(BuiltinType::DoubleFloat),
					init: Some(_),
					..
				}
			);
			assert_matches!(
				ast.kind(total),
				NodeKind::VarDecl { ty: TypeRef::Builtin(BuiltinType::Integer), .. }
			);
		}
	);
}


#[test]
fn test_single_line_if() {
	let (ast, _) = parse("if a = 3 then foo() : bar() else baz()\nif a = 3 then else baz()");

	assert_matches!(
		&statements(&ast)[..],
		&[first, second] => {
			assert_matches!(
				ast.kind(first),
				&NodeKind::Conditional { then, otherwise: Some(otherwise), .. } => {
					assert_eq!(ast.children(then).len(), 2);
					assert_eq!(ast.children(otherwise).len(), 1);
				}
			);
			assert_matches!(
				ast.kind(second),
				&NodeKind::Conditional { then, otherwise: Some(_), .. } => {
					assert!(ast.children(then).is_empty())
				}
			);
		}
	);
}


#[test]
fn test_empty_then_alone() {
	assert_matches!(
		&parser_errors("if a = 3 then\n")[..],
		[Error::Unexpected { .. }]
	);
}


#[test]
fn test_elseif_chain() {
	let (ast, _) = parse(
		"if a = 3\n\tfoo()\nelseif b = 4\n\tbar()\nelseif c = 5\nelse\n\tbaz()\nendif"
	);

	let statements = statements(&ast);
	assert_eq!(statements.len(), 1);

	// Each elseif is a conditional nested in the else block of the previous one.
	let mut conditional = statements[0];
	for _ in 0 .. 2 {
		conditional = assert_matches!(
			ast.kind(conditional),
			&NodeKind::Conditional { otherwise: Some(otherwise), .. } => {
				assert_matches!(&ast.children(otherwise)[..], &[nested] => nested)
			}
		);
	}

	assert_matches!(
		ast.kind(conditional),
		&NodeKind::Conditional { then, otherwise: Some(otherwise), .. } => {
			assert!(ast.children(then).is_empty());
			assert_matches!(&ast.children(otherwise)[..], &[call] => {
				assert_matches!(ast.kind(call), NodeKind::FuncCall { .. })
			});
		}
	);
}


#[test]
fn test_select() {
	let (ast, _) = parse(
		"select var\n\tcase 1, 2\n\t\tfoo()\n\tendcase\n\tcase default\n\tendcase\nendselect"
	);

	assert_matches!(
		&statements(&ast)[..],
		&[select] => assert_matches!(
			ast.kind(select),
			&NodeKind::Select { cases, .. } => assert_matches!(
				ast.kind(cases),
				NodeKind::CaseList(cases) => {
					assert_matches!(ast.kind(cases[0]), NodeKind::Case { values, .. } if values.len() == 2);
					assert_matches!(ast.kind(cases[1]), NodeKind::DefaultCase { .. });
				}
			)
		)
	);
}


#[test]
fn test_duplicate_default_case() {
	assert_matches!(
		&parser_errors(
			"select x\ncase default\nendcase\ncase default\nendcase\nendselect"
		)[..],
		[Error::DuplicateDefaultCase { first, second }] => {
			assert_eq!(first.first.line, 2);
			assert_eq!(second.first.line, 4);
		}
	);
}


#[test]
fn test_duplicate_default_case_keeps_parsing() {
	assert_matches!(
		&parser_errors(
			"select x\ncase default\nendcase\ncase default\nendcase\ncase 1, 2\nendcase\nendselect\n\
			 while x < 5 : inc x : endwhile\n"
		)[..],
		[Error::DuplicateDefaultCase { .. }]
	);
}


#[test]
fn test_loops() {
	let (ast, _) = parse(
		"for n = 1 to 10 step 2\nnext n\n\
		 while x < 5 : inc x : endwhile\n\
		 repeat\n\texit\nuntil x\n\
		 do\nloop"
	);

	assert_matches!(
		&statements(&ast)[..],
		&[for_loop, while_loop, until_loop, infinite_loop] => {
			assert_matches!(ast.kind(for_loop), NodeKind::ForLoop { step: Some(_), .. });
			assert_matches!(ast.kind(while_loop), NodeKind::WhileLoop { .. });
			assert_matches!(
				ast.kind(until_loop),
				&NodeKind::UntilLoop { body, .. } => assert_matches!(
					&ast.children(body)[..],
					&[exit] => assert_matches!(ast.kind(exit), NodeKind::Exit)
				)
			);
			assert_matches!(ast.kind(infinite_loop), NodeKind::InfiniteLoop { .. });
		}
	);
}


#[test]
fn test_increment_duplicates_target() {
	let (ast, _) = parse("dec a(1), 2");

	assert_matches!(
		&statements(&ast)[..],
		&[statement] => assert_matches!(
			ast.kind(statement),
			&NodeKind::Assignment { target, value } => {
				let (op, left, right) = binary(&ast, value);
				assert_eq!(op, BinaryOp::Minus);
				assert_ne!(left, target);
				assert_matches!(ast.kind(left), NodeKind::FuncCall { args, .. } if args.len() == 1);
				assert_ne!(ast.children(left), ast.children(target));
				assert_matches!(ast.kind(right), NodeKind::Literal(Literal::Integer(2)));
			}
		)
	);
}


#[test]
fn test_function() {
	let (ast, _) = parse(
		"function add(a, b as float)\n\texitfunction a\nendfunction a + b\nx = add(1, 2)"
	);

	assert_matches!(
		&statements(&ast)[..],
		&[function, _] => assert_matches!(
			ast.kind(function),
			NodeKind::FuncDecl { params, result: Some(_), .. } => {
				assert_eq!(params.len(), 2);
				assert_matches!(
					ast.kind(params[1]),
					NodeKind::VarDecl {
						scope: Scope::Local,
						ty: TypeRef::Builtin(BuiltinType::Float),
						..
					}
				);
			}
		)
	);
}


#[test]
fn test_labels() {
	let (ast, interner) = parse("start:\ngosub sub\ngoto start\nsub:\nreturn\nend");

	assert_matches!(
		&statements(&ast)[..],
		&[label, gosub, goto, sub, ret, end] => {
			assert_matches!(
				ast.kind(label),
				NodeKind::Label(name) => assert_eq!(interner.resolve(*name), Some("start"))
			);
			assert_matches!(ast.kind(gosub), NodeKind::Gosub(_));
			assert_matches!(ast.kind(goto), NodeKind::Goto(_));
			assert_matches!(ast.kind(sub), NodeKind::Label(_));
			assert_matches!(ast.kind(ret), NodeKind::SubReturn);
			assert_matches!(ast.kind(end), NodeKind::End);
		}
	);
}


#[test]
fn test_commands() {
	let (ast, interner) = parse(
		"make object sphere 1, 10.0\nsync\nx# = get ground height(1, 2.0, 3.0)\nrandomize timer()"
	);

	let command = |node: NodeId| match ast.kind(node) {
		NodeKind::Command { name, args } => (interner.resolve(*name).unwrap_or_default(), args.len()),
		kind => panic!("expected command, got {:?}", kind),
	};

	assert_matches!(
		&statements(&ast)[..],
		&[sphere, sync, assignment, randomize] => {
			assert_eq!(command(sphere), ("make object sphere", 2));
			assert_eq!(command(sync), ("sync", 0));
			assert_matches!(
				ast.kind(assignment),
				&NodeKind::Assignment { value, .. } => {
					assert_eq!(command(value), ("get ground height", 3))
				}
			);
			assert_eq!(command(randomize), ("randomize", 1));
		}
	);
}


#[test]
fn test_spans_cover_children() {
	let (ast, _) = parse(
		"type t\n a(2) as float\nendtype\n\
		 dim x(3) as t\n\
		 if x(1).a(2) > 3 then inc y : dec z else print \"no\"\n\
		 for i = 1 to 2\n\tcall(i, -i * 2)\nnext"
	);

	let mut visited = 0;
	for node in ast.iter() {
		let span = ast.span(node);
		for child in ast.children(node) {
			assert!(
				span.covers(&ast.span(child)),
				"{:?} doesn't cover child {:?}",
				ast.node(node),
				ast.node(child),
			);
		}
		visited += 1;
	}

	assert!(visited > 20);
}


#[test]
fn test_statement_terminator_required() {
	assert_matches!(
		&parser_errors("a = 1 b = 2")[..],
		[Error::Unexpected { expected: super::Expected::Message("end of statement"), .. }]
	);
}
