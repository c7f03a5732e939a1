//! Java source writer.
//!
//! Output layout for one unit:
//!
//! ```text
//! package com.example.demo;
//!
//! import org.springframework.boot.SpringApplication;
//!
//! @SpringBootApplication
//! public class DemoApplication {
//!
//!     public static void main(String[] args) {
//!         SpringApplication.run(DemoApplication.class, args);
//!     }
//!
//! }
//! ```

use model::{Expression, MethodDeclaration, SourceFile, Statement, TypeDeclaration};
use resolver::TypeResolver;
use sink::{indented, IndentStyle, IndentingSink};
use tracing::{debug, trace};

use super::annotations::write_annotations;
use super::modifiers::{write_modifiers, METHOD_MODIFIERS, TYPE_MODIFIERS};
use crate::{Result, SourceCodeWriter};

/// Packages every Java unit sees without importing.
const JAVA_IMPLICIT_PACKAGES: &[&str] = &["java.lang"];

/// A [`SourceCodeWriter`] that writes a [`SourceFile`] as Java.
#[derive(Debug, Clone, Default)]
pub struct JavaSourceCodeWriter {
    indent: IndentStyle,
}

impl JavaSourceCodeWriter {
    /// Create a writer that indents with `indent`
    pub fn new(indent: IndentStyle) -> Self { Self { indent } }

    fn write_type_declaration(
        &self,
        sink: &mut dyn IndentingSink,
        resolver: &dyn TypeResolver,
        declaration: &TypeDeclaration,
    ) -> Result<()> {
        debug!(
            name = declaration.name(),
            methods = declaration.methods().len(),
            "writing type declaration"
        );
        write_annotations(sink, declaration.annotations(), resolver)?;
        write_modifiers(sink, TYPE_MODIFIERS, declaration.type_modifiers(), declaration.name());

        let mut header = format!("class {}", declaration.name());
        if let Some(superclass) = declaration.extends() {
            header.push_str(" extends ");
            header.push_str(&resolver.shorten(superclass)?);
        }
        header.push_str(" {");
        sink.println(&header);
        sink.blank_line();

        if !declaration.methods().is_empty() {
            indented(sink, |sink| -> Result<()> {
                for method in declaration.methods() {
                    self.write_method_declaration(sink, resolver, method)?;
                }
                Ok(())
            })?;
        }
        sink.println("}");
        Ok(())
    }

    fn write_method_declaration(
        &self,
        sink: &mut dyn IndentingSink,
        resolver: &dyn TypeResolver,
        method: &MethodDeclaration,
    ) -> Result<()> {
        trace!(method = method.name(), statements = method.statements().len(), "writing method");
        write_annotations(sink, method.annotations(), resolver)?;
        write_modifiers(sink, METHOD_MODIFIERS, method.method_modifiers(), method.name());

        let parameters = method
            .parameters()
            .iter()
            .map(|parameter| -> Result<String> {
                Ok(format!("{} {}", resolver.shorten(parameter.type_name())?, parameter.name()))
            })
            .collect::<Result<Vec<_>>>()?;
        sink.println(&format!(
            "{} {}({}) {{",
            resolver.shorten(method.return_type())?,
            method.name(),
            parameters.join(", ")
        ));

        indented(sink, |sink| -> Result<()> {
            for statement in method.statements() {
                let line = match statement {
                    Statement::Expression(expression) => expression_text(expression, resolver)?,
                    Statement::Return(expression) => {
                        format!("return {}", expression_text(expression, resolver)?)
                    }
                };
                sink.print(&line);
                sink.println(";");
            }
            Ok(())
        })?;
        sink.println("}");
        sink.blank_line();
        Ok(())
    }
}

fn expression_text(expression: &Expression, resolver: &dyn TypeResolver) -> Result<String> {
    match expression {
        Expression::MethodInvocation(invocation) => Ok(format!(
            "{}.{}({})",
            resolver.shorten(invocation.target())?,
            invocation.name(),
            invocation.arguments().join(", ")
        )),
    }
}

impl SourceCodeWriter for JavaSourceCodeWriter {
    fn language(&self) -> &str { "java" }

    fn file_extension(&self) -> &str { "java" }

    fn indent_style(&self) -> IndentStyle { self.indent }

    fn implicit_packages(&self) -> &[&str] { JAVA_IMPLICIT_PACKAGES }

    fn render(
        &self,
        source: &SourceFile,
        sink: &mut dyn IndentingSink,
        resolver: &dyn TypeResolver,
    ) -> Result<()> {
        source.validate()?;
        // Resolve up front so a failing reference leaves the sink untouched.
        for reference in source.type_references() {
            resolver.shorten(reference)?;
        }

        if let Some(package) = source.package() {
            sink.println(&format!("package {package};"));
            sink.blank_line();
        }

        let imports = resolver.imports();
        if !imports.is_empty() {
            for import in &imports {
                sink.println(&format!("import {import};"));
            }
            sink.blank_line();
        }

        for (index, declaration) in source.types().iter().enumerate() {
            if index > 0 {
                sink.blank_line();
            }
            self.write_type_declaration(sink, resolver, declaration)?;
        }
        Ok(())
    }
}
