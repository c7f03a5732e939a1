//! Declarations: the compilation unit, its types, their methods and parameters.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Modifier, ModelIoError, Statement, StructuralError};

/// A compilation unit: an optional package and the types declared in it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Package the unit belongs to (e.g. "com.example.demo")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    package: Option<String>,
    /// Types declared in this unit, in output order
    #[serde(default)]
    types: Vec<TypeDeclaration>,
}

impl SourceFile {
    /// Create an empty source file in the default package
    pub fn new() -> Self { Self::default() }

    /// Create an empty source file in `package`
    pub fn in_package(package: impl Into<String>) -> Self {
        Self { package: Some(package.into()), types: Vec::new() }
    }

    /// Append a type declaration
    pub fn with_type(mut self, declaration: TypeDeclaration) -> Self {
        self.types.push(declaration);
        self
    }

    /// Package name, if any
    pub fn package(&self) -> Option<&str> { self.package.as_deref() }

    /// Declared types in model order
    pub fn types(&self) -> &[TypeDeclaration] { &self.types }

    /// Check every declaration in the unit.
    pub fn validate(&self) -> Result<(), StructuralError> {
        self.types.iter().try_for_each(TypeDeclaration::validate)
    }

    /// Every type reference in the unit, in model order.
    ///
    /// Covers superclasses, annotations, return types, parameter types and
    /// invocation targets. Duplicates are kept; callers dedupe as they need.
    pub fn type_references(&self) -> Vec<&str> {
        let mut references = Vec::new();
        for declaration in &self.types {
            references.extend(declaration.annotations.iter().map(|a| a.name()));
            if let Some(superclass) = declaration.extends() {
                references.push(superclass);
            }
            for method in &declaration.methods {
                references.extend(method.annotations.iter().map(|a| a.name()));
                references.push(method.return_type());
                references.extend(method.parameters.iter().map(|p| p.type_name()));
                for statement in &method.statements {
                    let crate::Expression::MethodInvocation(invocation) = statement.expr();
                    references.push(invocation.target());
                }
            }
        }
        references
    }

    /// Load a SourceFile from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ModelIoError> { Ok(serde_json::from_str(json)?) }

    /// Load a SourceFile from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ModelIoError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Save the SourceFile to a JSON file with pretty formatting
    pub fn to_file(&self, path: &Path) -> Result<(), ModelIoError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// A class declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDeclaration {
    /// Simple name of the declared type
    name: String,
    /// Qualified name of the superclass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extends: Option<String>,
    /// Type-level modifiers
    #[serde(default)]
    modifiers: BTreeSet<Modifier>,
    /// Type-level annotations, in declaration order
    #[serde(default)]
    annotations: Vec<Annotation>,
    /// Member methods, in declaration order
    #[serde(default)]
    methods: Vec<MethodDeclaration>,
}

impl TypeDeclaration {
    /// Create a type declaration with no superclass and no members
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: None,
            modifiers: BTreeSet::new(),
            annotations: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Set the superclass
    pub fn extending(mut self, superclass: impl Into<String>) -> Self {
        self.extends = Some(superclass.into());
        self
    }

    /// Add type-level modifiers
    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    /// Append a type-level annotation
    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Append a method
    pub fn method(mut self, method: MethodDeclaration) -> Self {
        self.methods.push(method);
        self
    }

    /// Simple name
    pub fn name(&self) -> &str { &self.name }

    /// Superclass reference, if any
    pub fn extends(&self) -> Option<&str> { self.extends.as_deref() }

    /// Type-level modifiers
    pub fn type_modifiers(&self) -> &BTreeSet<Modifier> { &self.modifiers }

    /// Type-level annotations in declaration order
    pub fn annotations(&self) -> &[Annotation] { &self.annotations }

    /// Methods in declaration order
    pub fn methods(&self) -> &[MethodDeclaration] { &self.methods }

    /// Check the declaration and all of its members.
    pub fn validate(&self) -> Result<(), StructuralError> {
        if self.name.trim().is_empty() {
            return Err(StructuralError::EmptyTypeName);
        }
        if let Some(superclass) = &self.extends {
            require_reference(superclass, || format!("superclass of '{}'", self.name))?;
        }
        for annotation in &self.annotations {
            require_reference(annotation.name(), || format!("annotation on '{}'", self.name))?;
        }
        for method in &self.methods {
            if method.name.trim().is_empty() {
                return Err(StructuralError::EmptyMethodName { type_name: self.name.clone() });
            }
            method.validate()?;
        }
        Ok(())
    }
}

/// A method declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDeclaration {
    /// Method name
    name: String,
    /// Qualified name of the return type
    return_type: String,
    /// Parameters in signature order
    #[serde(default)]
    parameters: Vec<Parameter>,
    /// Modifiers; write order is decided by the writer
    #[serde(default)]
    modifiers: BTreeSet<Modifier>,
    /// Annotations in declaration order
    #[serde(default)]
    annotations: Vec<Annotation>,
    /// Body statements in execution order
    #[serde(default)]
    statements: Vec<Statement>,
}

impl MethodDeclaration {
    /// Create a method with an empty signature and body
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            parameters: Vec::new(),
            modifiers: BTreeSet::new(),
            annotations: Vec::new(),
            statements: Vec::new(),
        }
    }

    /// Append a parameter
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Add modifiers
    pub fn modifiers(mut self, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        self.modifiers.extend(modifiers);
        self
    }

    /// Append an annotation
    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Append a body statement
    pub fn statement(mut self, statement: Statement) -> Self {
        self.statements.push(statement);
        self
    }

    /// Method name
    pub fn name(&self) -> &str { &self.name }

    /// Return type reference
    pub fn return_type(&self) -> &str { &self.return_type }

    /// Parameters in signature order
    pub fn parameters(&self) -> &[Parameter] { &self.parameters }

    /// Modifiers, unordered
    pub fn method_modifiers(&self) -> &BTreeSet<Modifier> { &self.modifiers }

    /// Annotations in declaration order
    pub fn annotations(&self) -> &[Annotation] { &self.annotations }

    /// Body statements
    pub fn statements(&self) -> &[Statement] { &self.statements }

    /// Check the signature and body references.
    pub fn validate(&self) -> Result<(), StructuralError> {
        require_reference(&self.return_type, || format!("return type of '{}'", self.name))?;

        let mut seen = HashSet::new();
        for parameter in &self.parameters {
            if parameter.name.trim().is_empty() {
                return Err(StructuralError::EmptyParameterName { method: self.name.clone() });
            }
            if !seen.insert(parameter.name.as_str()) {
                return Err(StructuralError::DuplicateParameter {
                    method: self.name.clone(),
                    parameter: parameter.name.clone(),
                });
            }
            require_reference(&parameter.type_name, || {
                format!("parameter '{}' of '{}'", parameter.name, self.name)
            })?;
        }

        for annotation in &self.annotations {
            require_reference(annotation.name(), || format!("annotation on '{}'", self.name))?;
        }

        for statement in &self.statements {
            let crate::Expression::MethodInvocation(invocation) = statement.expr();
            require_reference(invocation.target(), || {
                format!("invocation target in '{}'", self.name)
            })?;
        }
        Ok(())
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    name: String,
    /// Qualified name of the parameter type
    #[serde(rename = "type")]
    type_name: String,
}

impl Parameter {
    /// Create a new parameter
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self { name: name.into(), type_name: type_name.into() }
    }

    /// Parameter name
    pub fn name(&self) -> &str { &self.name }

    /// Type reference
    pub fn type_name(&self) -> &str { &self.type_name }
}

/// An annotation on a type or method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Qualified name of the annotation type
    name: String,
    /// Attributes in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    attributes: Vec<AnnotationAttribute>,
}

impl Annotation {
    /// Create a marker annotation
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), attributes: Vec::new() }
    }

    /// Append an attribute with one or more pre-rendered values
    pub fn attribute<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes.push(AnnotationAttribute {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Annotation type reference
    pub fn name(&self) -> &str { &self.name }

    /// Attributes in declaration order
    pub fn attributes(&self) -> &[AnnotationAttribute] { &self.attributes }
}

/// A single `name = value` pair of an annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationAttribute {
    /// Attribute name
    pub name: String,
    /// Pre-rendered value literals; more than one renders as an array
    pub values: Vec<String>,
}

fn require_reference(
    reference: &str,
    context: impl FnOnce() -> String,
) -> Result<(), StructuralError> {
    if reference.trim().is_empty() {
        return Err(StructuralError::EmptyTypeReference { context: context() });
    }
    Ok(())
}
