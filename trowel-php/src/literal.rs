//! Rendering of types and values to PHP source.
//!
//! Multi-line values (non-empty arrays, method chains) are rendered with
//! their continuation lines indented relative to column zero; the caller
//! re-indents the whole text to its own level.

use trowel_codegen::{ArrayItem, Indent, MethodCall, NameResolver, TypeRef, Value};

/// Quote a string as a single-quoted PHP literal.
///
/// Backslashes and single quotes are escaped, everything else is verbatim.
///
/// # Example
///
/// ```
/// use trowel_php::quote_string;
///
/// assert_eq!(quote_string("heroicon-o-rectangle-stack"), "'heroicon-o-rectangle-stack'");
/// assert_eq!(quote_string("it's"), "'it\\'s'");
/// ```
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if matches!(c, '\\' | '\'') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

/// Render a type reference, shortening class names through the resolver.
pub fn render_type(ty: &TypeRef, resolver: &NameResolver<'_>) -> String {
    match ty {
        TypeRef::Builtin(name) => name.clone(),
        TypeRef::Class(fqn) => resolver.simplify(fqn),
        TypeRef::Nullable(inner) => format!("?{}", render_type(inner, resolver)),
    }
}

/// Render a value, shortening class names through the resolver.
pub fn render_value(value: &Value, resolver: &NameResolver<'_>, indent: Indent) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::String(s) => quote_string(s),
        Value::ClassRef(fqn) => format!("{}::class", resolver.simplify(fqn)),
        Value::Variable(name) => format!("${}", name),
        Value::Raw(expr) => expr.clone(),
        Value::StaticCall {
            class,
            method,
            args,
        } => format!(
            "{}::{}({})",
            resolver.simplify(class),
            method,
            render_args(args, resolver, indent)
        ),
        Value::Array(items) => render_array(items, resolver, indent),
        Value::Chain { base, calls } => {
            let mut out = render_value(base, resolver, indent);
            for call in calls {
                out.push('\n');
                out.push_str(&indent_lines(&render_call(call, resolver, indent), indent));
            }
            out
        }
    }
}

fn render_args(args: &[Value], resolver: &NameResolver<'_>, indent: Indent) -> String {
    args.iter()
        .map(|arg| render_value(arg, resolver, indent))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_call(call: &MethodCall, resolver: &NameResolver<'_>, indent: Indent) -> String {
    format!("->{}({})", call.name, render_args(&call.args, resolver, indent))
}

fn render_array(items: &[ArrayItem], resolver: &NameResolver<'_>, indent: Indent) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }

    let mut out = String::from("[\n");
    for item in items {
        let entry = match item {
            ArrayItem::Placeholder => "//".to_string(),
            ArrayItem::Value(v) => format!("{},", render_value(v, resolver, indent)),
            ArrayItem::Keyed(k, v) => format!(
                "{} => {},",
                render_value(k, resolver, indent),
                render_value(v, resolver, indent)
            ),
        };
        out.push_str(&indent_lines(&entry, indent));
        out.push('\n');
    }
    out.push(']');
    out
}

/// Prefix every non-empty line with one indent level.
fn indent_lines(text: &str, indent: Indent) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", indent.as_str(), line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
