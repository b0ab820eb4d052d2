//! Integration tests that verify generated stubs compile.
//!
//! These tests generate Java stubs from small declaration models and run
//! `javac` over them. They are skipped when no `javac` is on the path.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use skelgen_codegen_java::{GenerateOutcome, StubGenerator, StubOptions};
use skelgen_model::{
    ClassDecl, ClassIndex, ClassKind, ClassType, ConstructorDecl, DeclarationModel, Expression,
    ExternalClass, FieldDecl, GenericsType, ImportSet, Literal, MethodDecl, Modifiers, Nesting,
    Parameter, PrimitiveType, PropertyDecl, SourceUnit, SpecialCall, TypeRef,
};
use tempfile::TempDir;

/// Hand-written stand-in for the external `geo.Base`.
const BASE_JAVA: &str = "package geo;

public class Base {
    private Base(java.lang.String s) { }
    protected Base(int x, int y) { }
}
";

fn javac_available() -> bool {
    Command::new("javac")
        .arg("-version")
        .output()
        .is_ok_and(|output| output.status.success())
}

/// Generate stubs for every unit of `model`, add `handwritten` sources and
/// verify the whole tree compiles with `javac`.
fn assert_stubs_compile(
    mut model: DeclarationModel,
    generics: bool,
    handwritten: &[(&str, &str)],
) {
    if !javac_available() {
        eprintln!("javac not found, skipping");
        return;
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let source_dir = temp_dir.path().join("src");
    let class_dir = temp_dir.path().join("classes");

    let mut generator = StubGenerator::new(
        StubOptions::new(&source_dir).generics(generics),
        ClassIndex::from_model(&model),
    );
    for unit in &mut model.units {
        for outcome in generator.generate_unit(unit) {
            assert!(
                matches!(outcome.result, Ok(GenerateOutcome::Written(_))),
                "{} was not written: {:?}",
                outcome.class,
                outcome.result
            );
        }
    }
    for (path, content) in handwritten {
        let path = source_dir.join(path);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    let mut sources = Vec::new();
    collect_java_files(&source_dir, &mut sources);

    let status = Command::new("javac")
        .arg("-d")
        .arg(&class_dir)
        .args(&sources)
        .output()
        .expect("Failed to run javac");

    if !status.status.success() {
        let stdout = String::from_utf8_lossy(&status.stdout);
        let stderr = String::from_utf8_lossy(&status.stderr);

        // Print generated files for debugging
        eprintln!("\n=== Generated files ===");
        print_generated_files(&source_dir);

        panic!(
            "Generated stubs failed to compile!\n\nstdout:\n{}\n\nstderr:\n{}",
            stdout, stderr
        );
    }
}

fn collect_java_files(dir: &Path, out: &mut Vec<PathBuf>) {
    for entry in std::fs::read_dir(dir).unwrap().flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_java_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "java") {
            out.push(path);
        }
    }
}

/// Print all generated files for debugging
fn print_generated_files(dir: &Path) {
    let mut files = Vec::new();
    collect_java_files(dir, &mut files);
    files.sort();
    for path in files {
        eprintln!("{}", path.strip_prefix(dir).unwrap_or(&path).display());
        if let Ok(content) = std::fs::read_to_string(&path) {
            for line in content.lines() {
                eprintln!("  | {}", line);
            }
        }
    }
}

fn shape() -> ClassDecl {
    ClassDecl::new("geo.Shape")
        .kind(ClassKind::Interface)
        .modifiers(Modifiers::PUBLIC | Modifiers::ABSTRACT)
        .method(
            MethodDecl::new("area")
                .returns(TypeRef::double())
                .abstract_(),
        )
        .method(
            MethodDecl::new("scaled")
                .returns(TypeRef::class("geo.Shape"))
                .param(Parameter::new("factor", TypeRef::double()))
                .abstract_(),
        )
}

fn canvas_model() -> DeclarationModel {
    let canvas = ClassDecl::new("geo.Canvas")
        .modifiers(Modifiers::PUBLIC)
        .generic(GenericsType::placeholder("T").extends(TypeRef::class("geo.Shape")))
        .implements(ClassType::new("java.lang.Iterable").generic(GenericsType::placeholder("T")))
        .property(PropertyDecl::new("title", TypeRef::string()))
        .method(
            MethodDecl::new("draw")
                .param(Parameter::new(
                    "shape",
                    TypeRef::bounded_placeholder("T", ClassType::new("geo.Shape")),
                ))
                .param(
                    Parameter::new("scale", TypeRef::double())
                        .with_default(Expression::constant(Literal::Int(1))),
                ),
        )
        .method(MethodDecl::new("iterator").returns(TypeRef::Class(
            ClassType::new("java.util.Iterator").generic(GenericsType::placeholder("T")),
        )))
        .inner_class(
            ClassDecl::new("geo.Canvas$Layer")
                .nesting(Nesting::Member)
                .modifiers(Modifiers::PUBLIC | Modifiers::STATIC)
                .field(FieldDecl::new("depth", TypeRef::int()).modifiers(Modifiers::PUBLIC)),
        );

    DeclarationModel::new()
        .unit(
            SourceUnit::new(
                ImportSet::new()
                    .star("java.util.")
                    .single("java.util.Map$Entry"),
            )
            .class(canvas),
        )
        .unit(SourceUnit::default().class(shape()))
}

#[test]
fn test_subclass_of_external_base_compiles() {
    let model = DeclarationModel::new()
        .unit(
            SourceUnit::default().class(
                ClassDecl::new("geo.Pt")
                    .modifiers(Modifiers::PUBLIC)
                    .extends(ClassType::new("geo.Base"))
                    .field(FieldDecl::new("x", TypeRef::int()).modifiers(Modifiers::PUBLIC)),
            ),
        )
        .external(
            ExternalClass::new("geo.Base")
                .constructor(
                    ConstructorDecl::new(Modifiers::PRIVATE)
                        .param(Parameter::new("s", TypeRef::string())),
                )
                .constructor(
                    ConstructorDecl::new(Modifiers::PROTECTED)
                        .param(Parameter::new("x", TypeRef::int()))
                        .param(Parameter::new("y", TypeRef::int())),
                ),
        );

    assert_stubs_compile(model, true, &[("geo/Base.java", BASE_JAVA)]);
}

#[test]
fn test_interface_and_enum_compile() {
    let limits = ClassDecl::new("geo.Limits")
        .kind(ClassKind::Interface)
        .modifiers(Modifiers::PUBLIC | Modifiers::ABSTRACT)
        .field(
            FieldDecl::new("MAX", TypeRef::int())
                .modifiers(Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::FINAL),
        )
        .field(
            FieldDecl::new("UNIT", TypeRef::string())
                .modifiers(Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::FINAL),
        );
    let color = ClassDecl::new("geo.Color")
        .kind(ClassKind::Enum)
        .modifiers(Modifiers::PUBLIC)
        .field(FieldDecl::enum_constant("RED", "geo.Color"))
        .field(FieldDecl::enum_constant("GREEN", "geo.Color"));
    let empty = ClassDecl::new("geo.Empty")
        .kind(ClassKind::Enum)
        .modifiers(Modifiers::PUBLIC);

    let model = DeclarationModel::new()
        .unit(SourceUnit::default().class(shape()))
        .unit(SourceUnit::default().class(limits))
        .unit(SourceUnit::default().class(color))
        .unit(SourceUnit::default().class(empty));

    assert_stubs_compile(model, true, &[]);
}

#[test]
fn test_generic_class_with_nested_class_compiles() {
    assert_stubs_compile(canvas_model(), true, &[]);
}

#[test]
fn test_erased_generic_class_compiles() {
    assert_stubs_compile(canvas_model(), false, &[]);
}

#[test]
fn test_constructor_default_arguments_compile() {
    let account = ClassDecl::new("bank.Account")
        .modifiers(Modifiers::PUBLIC)
        .constructor(
            ConstructorDecl::new(Modifiers::PUBLIC)
                .param(Parameter::new("owner", TypeRef::string()))
                .param(
                    Parameter::new("limit", TypeRef::long())
                        .with_default(Expression::constant(Literal::Int(100))),
                )
                .throws(ClassType::new("java.io.IOException"))
                .delegating(SpecialCall::super_call(vec![])),
        );

    assert_stubs_compile(
        DeclarationModel::new().unit(SourceUnit::default().class(account)),
        true,
        &[],
    );
}

#[test]
fn test_constant_delegation_arguments_compile() {
    let glyph = ClassDecl::new("p.Glyph")
        .modifiers(Modifiers::PUBLIC)
        .constructor(
            ConstructorDecl::new(Modifiers::PUBLIC)
                .param(Parameter::new("c", TypeRef::primitive(PrimitiveType::Char))),
        )
        .constructor(
            ConstructorDecl::new(Modifiers::PUBLIC)
                .param(Parameter::new("big", TypeRef::long()))
                .param(Parameter::new("nan", TypeRef::double()))
                .param(Parameter::new("inf", TypeRef::double()))
                .param(Parameter::new("ratio", TypeRef::primitive(PrimitiveType::Float)))
                .param(Parameter::new("label", TypeRef::string())),
        )
        .constructor(
            ConstructorDecl::new(Modifiers::PUBLIC).delegating(SpecialCall::this_call(vec![
                Expression::constant(Literal::Char('é')),
            ])),
        )
        .constructor(
            ConstructorDecl::new(Modifiers::PUBLIC)
                .param(Parameter::new("unused", TypeRef::int()))
                .delegating(SpecialCall::this_call(vec![
                    Expression::constant(Literal::Int(3_000_000_000)),
                    Expression::constant(Literal::Double(f64::NAN)),
                    Expression::constant(Literal::Double(f64::NEG_INFINITY)),
                    Expression::constant(Literal::Float(0.5)),
                    Expression::constant(Literal::Str("line\nbreak".into())),
                ])),
        );

    assert_stubs_compile(
        DeclarationModel::new().unit(SourceUnit::default().class(glyph)),
        true,
        &[],
    );
}
