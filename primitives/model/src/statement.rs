//! Method bodies: statements and the expressions they wrap.
//!
//! Only expression statements, return statements and method invocations are
//! modeled. Invocation arguments are pre-rendered literals rather than nested
//! expressions.

use serde::{Deserialize, Serialize};

/// A statement inside a method body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "expression", rename_all = "snake_case")]
pub enum Statement {
    /// An expression evaluated for its side effects
    Expression(Expression),
    /// `return <expression>`
    Return(Expression),
}

impl Statement {
    /// Create an expression statement
    pub fn expression(expression: Expression) -> Self { Statement::Expression(expression) }

    /// Create a return statement
    pub fn returning(expression: Expression) -> Self { Statement::Return(expression) }

    /// The wrapped expression
    pub fn expr(&self) -> &Expression {
        match self {
            Statement::Expression(expression) | Statement::Return(expression) => expression,
        }
    }
}

/// An expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expression {
    /// A static-style invocation `Target.name(args...)`
    MethodInvocation(MethodInvocation),
}

impl Expression {
    /// Shorthand for an invocation of `name` on `target` with the given argument literals
    pub fn invoke<I, S>(target: impl Into<String>, name: impl Into<String>, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Expression::MethodInvocation(MethodInvocation::new(target, name, arguments))
    }
}

/// A method invocation on a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodInvocation {
    /// Qualified name of the target type
    target: String,
    /// Invoked method name
    name: String,
    /// Argument literals, already rendered
    #[serde(default)]
    arguments: Vec<String>,
}

impl MethodInvocation {
    /// Create a new method invocation
    pub fn new<I, S>(target: impl Into<String>, name: impl Into<String>, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            target: target.into(),
            name: name.into(),
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }

    /// Qualified name of the target type
    pub fn target(&self) -> &str { &self.target }

    /// Invoked method name
    pub fn name(&self) -> &str { &self.name }

    /// Argument literals in call order
    pub fn arguments(&self) -> &[String] { &self.arguments }
}
