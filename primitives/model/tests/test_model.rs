//! Unit tests for the Quill structural model

use model::*;
use tempfile::TempDir;

fn application_source() -> SourceFile {
    SourceFile::in_package("com.example.demo").with_type(
        TypeDeclaration::new("DemoApplication")
            .extending("org.springframework.boot.web.servlet.support.SpringBootServletInitializer")
            .annotate(Annotation::new("org.springframework.boot.autoconfigure.SpringBootApplication"))
            .method(
                MethodDeclaration::new("main", "void")
                    .modifiers([Modifier::Static, Modifier::Public])
                    .parameter(Parameter::new("args", "java.lang.String[]"))
                    .statement(Statement::expression(Expression::invoke(
                        "org.springframework.boot.SpringApplication",
                        "run",
                        ["DemoApplication.class", "args"],
                    ))),
            ),
    )
}

#[test]
fn test_builders_preserve_order() {
    let declaration = TypeDeclaration::new("Service")
        .method(MethodDeclaration::new("first", "void"))
        .method(MethodDeclaration::new("second", "void"))
        .method(MethodDeclaration::new("third", "void"));

    let names: Vec<&str> = declaration.methods().iter().map(|m| m.name()).collect();
    assert_eq!(names, ["first", "second", "third"]);
}

#[test]
fn test_accessors() {
    let source = application_source();
    assert_eq!(source.package(), Some("com.example.demo"));
    assert_eq!(source.types().len(), 1);

    let declaration = &source.types()[0];
    assert_eq!(declaration.name(), "DemoApplication");
    assert_eq!(
        declaration.extends(),
        Some("org.springframework.boot.web.servlet.support.SpringBootServletInitializer")
    );

    let main = &declaration.methods()[0];
    assert_eq!(main.return_type(), "void");
    assert_eq!(main.parameters()[0].name(), "args");
    assert!(main.method_modifiers().contains(&Modifier::Public));
    assert!(main.method_modifiers().contains(&Modifier::Static));
    assert_eq!(main.statements().len(), 1);
}

#[test]
fn test_valid_model_passes_validation() {
    assert_eq!(application_source().validate(), Ok(()));
}

#[test]
fn test_empty_type_name_is_rejected() {
    let source = SourceFile::new().with_type(TypeDeclaration::new("  "));
    assert_eq!(source.validate(), Err(StructuralError::EmptyTypeName));
}

#[test]
fn test_empty_method_name_is_rejected() {
    let source =
        SourceFile::new().with_type(TypeDeclaration::new("Foo").method(MethodDeclaration::new("", "void")));
    assert_eq!(
        source.validate(),
        Err(StructuralError::EmptyMethodName { type_name: "Foo".to_string() })
    );
}

#[test]
fn test_duplicate_parameter_is_rejected() {
    let method = MethodDeclaration::new("sum", "int")
        .parameter(Parameter::new("a", "int"))
        .parameter(Parameter::new("a", "int"));

    assert_eq!(
        method.validate(),
        Err(StructuralError::DuplicateParameter {
            method: "sum".to_string(),
            parameter: "a".to_string()
        })
    );
}

#[test]
fn test_empty_parameter_name_is_rejected() {
    let method = MethodDeclaration::new("run", "void").parameter(Parameter::new("", "int"));
    assert_eq!(
        method.validate(),
        Err(StructuralError::EmptyParameterName { method: "run".to_string() })
    );
}

#[test]
fn test_empty_type_reference_is_rejected() {
    let method = MethodDeclaration::new("run", "");
    let err = method.validate().expect_err("empty return type must fail");
    assert!(matches!(err, StructuralError::EmptyTypeReference { .. }));
    assert_eq!(err.to_string(), "empty type reference in return type of 'run'");

    let declaration = TypeDeclaration::new("Foo").extending("");
    assert!(matches!(declaration.validate(), Err(StructuralError::EmptyTypeReference { .. })));
}

#[test]
fn test_type_references_in_model_order() {
    let source = application_source();
    assert_eq!(source.type_references(), [
        "org.springframework.boot.autoconfigure.SpringBootApplication",
        "org.springframework.boot.web.servlet.support.SpringBootServletInitializer",
        "void",
        "java.lang.String[]",
        "org.springframework.boot.SpringApplication",
    ]);
}

#[test]
fn test_json_file_roundtrip() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("nested").join("model.json");
    let source = application_source();

    source.to_file(&path).expect("Failed to save model");
    let content = std::fs::read_to_string(&path).expect("Failed to read saved model");
    assert!(content.ends_with('\n'));

    let loaded = SourceFile::from_file(&path).expect("Failed to load model");
    assert_eq!(loaded, source);
}

#[test]
fn test_from_json_uses_defaults() {
    let json = r#"{
        "types": [
            {
                "name": "Foo",
                "methods": [
                    { "name": "bar", "return_type": "void", "modifiers": ["static", "public"] }
                ]
            }
        ]
    }"#;

    let source = SourceFile::from_json(json).expect("Failed to parse model");
    assert_eq!(source.package(), None);
    let bar = &source.types()[0].methods()[0];
    assert!(bar.parameters().is_empty());
    assert!(bar.statements().is_empty());
    assert_eq!(bar.method_modifiers().len(), 2);
}

#[test]
fn test_from_json_rejects_unknown_modifier() {
    let json = r#"{ "types": [ { "name": "Foo", "modifiers": ["sealed"] } ] }"#;
    assert!(matches!(SourceFile::from_json(json), Err(ModelIoError::Json(_))));
}
