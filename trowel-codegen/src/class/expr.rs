//! Typed value and statement nodes.
//!
//! Values represent the *meaning* of an expression. A printer decides how to
//! quote strings, how to shorten class names and how to lay out arrays and
//! method chains.
//!
//! # Example
//!
//! ```
//! use trowel_codegen::class::{ArrayItem, Value};
//!
//! // 'index' => Pages\ListPosts::route('/'),
//! let entry = ArrayItem::keyed(
//!     Value::string("index"),
//!     Value::static_call("App\\Pages\\ListPosts", "route", vec![Value::string("/")]),
//! );
//! let pages = Value::array(vec![entry]);
//! assert!(matches!(pages, Value::Array(ref items) if items.len() == 1));
//! ```

/// A semantic value that a printer renders to source.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `null`.
    Null,
    /// Boolean literal.
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// String literal (quoted and escaped by the printer).
    String(String),
    /// Class-literal reference by fully qualified name (`Post::class`).
    ClassRef(String),
    /// Variable reference without the sigil (`schema` -> `$schema`).
    Variable(String),
    /// Raw expression, written verbatim.
    Raw(String),
    /// Static method call on a class (`ListPosts::route('/')`).
    StaticCall {
        /// Fully qualified class name.
        class: String,
        /// Method name.
        method: String,
        /// Call arguments.
        args: Vec<Value>,
    },
    /// Array literal.
    Array(Vec<ArrayItem>),
    /// Fluent method chain, one call per line.
    Chain {
        /// Expression the chain starts from.
        base: Box<Value>,
        /// Calls applied in order.
        calls: Vec<MethodCall>,
    },
}

impl Value {
    /// Create a string literal value.
    pub fn string(v: impl Into<String>) -> Self {
        Self::String(v.into())
    }

    /// Create a class-literal reference.
    pub fn class_ref(fqn: impl Into<String>) -> Self {
        Self::ClassRef(fqn.into())
    }

    /// Create a variable reference.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Create a raw expression.
    pub fn raw(expr: impl Into<String>) -> Self {
        Self::Raw(expr.into())
    }

    /// Create a static method call.
    pub fn static_call(class: impl Into<String>, method: impl Into<String>, args: Vec<Value>) -> Self {
        Self::StaticCall {
            class: class.into(),
            method: method.into(),
            args,
        }
    }

    /// Create an array literal.
    pub fn array(items: Vec<ArrayItem>) -> Self {
        Self::Array(items)
    }

    /// Create an empty array that prints a `//` fill-in placeholder.
    pub fn placeholder_array() -> Self {
        Self::Array(vec![ArrayItem::Placeholder])
    }

    /// Create a method chain.
    pub fn chain(base: Value, calls: Vec<MethodCall>) -> Self {
        Self::Chain {
            base: Box::new(base),
            calls,
        }
    }
}

/// An item of an array literal.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayItem {
    /// A list element.
    Value(Value),
    /// A `key => value` element.
    Keyed(Value, Value),
    /// A `//` comment marking where entries are filled in by hand.
    Placeholder,
}

impl ArrayItem {
    /// Create a list element.
    pub fn value(value: Value) -> Self {
        Self::Value(value)
    }

    /// Create a `key => value` element.
    pub fn keyed(key: Value, value: Value) -> Self {
        Self::Keyed(key, value)
    }
}

/// A method call in a chain.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    /// Method name.
    pub name: String,
    /// Arguments to the method.
    pub args: Vec<Value>,
}

impl MethodCall {
    /// Create a new method call.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Add an argument.
    pub fn arg(mut self, value: Value) -> Self {
        self.args.push(value);
        self
    }
}

/// A statement in a method body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `return <value>;`
    Return(Value),
    /// Verbatim body text, possibly several lines (re-indented by the printer).
    Raw(String),
}

impl Statement {
    /// Create a return statement.
    pub fn return_(value: Value) -> Self {
        Self::Return(value)
    }

    /// Create a raw statement.
    pub fn raw(code: impl Into<String>) -> Self {
        Self::Raw(code.into())
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_keeps_calls_in_order() {
        let value = Value::chain(
            Value::raw("parent::getEloquentQuery()"),
            vec![
                MethodCall::new("withoutGlobalScopes").arg(Value::array(vec![ArrayItem::value(
                    Value::class_ref("Illuminate\\Database\\Eloquent\\SoftDeletingScope"),
                )])),
                MethodCall::new("latest"),
            ],
        );

        let Value::Chain { base, calls } = value else {
            panic!("expected a chain");
        };
        assert_eq!(*base, Value::Raw("parent::getEloquentQuery()".into()));
        let names: Vec<&str> = calls.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["withoutGlobalScopes", "latest"]);
        assert_eq!(calls[0].args.len(), 1);
    }

    #[test]
    fn test_placeholder_array() {
        assert_eq!(
            Value::placeholder_array(),
            Value::Array(vec![ArrayItem::Placeholder])
        );
    }

    #[test]
    fn test_statement_constructors() {
        assert_eq!(
            Statement::raw("return Post::class;"),
            Statement::Raw("return Post::class;".into())
        );
        assert_eq!(
            Statement::return_(Value::class_ref("App\\Models\\Post")),
            Statement::Return(Value::ClassRef("App\\Models\\Post".into()))
        );
    }
}
