//! PHP class printer.

use trowel_codegen::{
    ClassPrinter, ClassSpec, CodeBuilder, CodeFragment, ImportSet, Indent, MethodSpec,
    NameResolver, ParamSpec, PropertySpec, Renderable, Statement, Visibility,
};

use crate::literal::{render_type, render_value};

/// Renders class descriptions as PSR-12 PHP files.
///
/// # Example
///
/// ```
/// use trowel_codegen::{ClassPrinter, ClassSpec};
/// use trowel_php::PhpPrinter;
///
/// let class = ClassSpec::new("App\\Filament\\Resources\\PostResource")
///     .extends("Filament\\Resources\\Resource");
/// let php = PhpPrinter::new().render(&class);
///
/// assert!(php.starts_with("<?php\n\nnamespace App\\Filament\\Resources;\n"));
/// assert!(php.contains("class PostResource extends \\Filament\\Resources\\Resource\n{\n}\n"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PhpPrinter {
    indent: Indent,
}

impl PhpPrinter {
    /// Create a printer with 4-space indentation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different indentation.
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }
}

impl ClassPrinter for PhpPrinter {
    fn render(&self, class: &ClassSpec) -> String {
        let resolver = class.resolver();
        let mut builder = CodeBuilder::new(self.indent);

        builder.push_line("<?php").push_blank();

        if !class.namespace.is_empty() {
            builder
                .push_line(&format!("namespace {};", class.namespace))
                .push_blank();
        }

        if !class.imports.is_empty() {
            builder.push_text(&render_imports(&class.imports)).push_blank();
        }

        let header = match &class.extends {
            Some(parent) => format!("class {} extends {}", class.name, resolver.simplify(parent)),
            None => format!("class {}", class.name),
        };
        builder.push_line(&header);

        let properties = class.properties.iter().map(|property| {
            PhpProperty {
                property,
                resolver,
                indent: self.indent,
            }
            .to_fragments()
        });
        let methods = class.methods.iter().map(|method| {
            PhpMethod {
                method,
                resolver,
                indent: self.indent,
            }
            .to_fragments()
        });

        let mut members = Vec::new();
        for (i, fragments) in properties.chain(methods).enumerate() {
            if i > 0 {
                members.push(CodeFragment::Blank);
            }
            members.extend(fragments);
        }

        builder.apply_fragment(CodeFragment::block("{", members, Some("}".to_string())));
        builder.build()
    }
}

/// Render imports as PHP `use` statements, in insertion order.
///
/// # Example
///
/// ```
/// use trowel_codegen::ImportSet;
/// use trowel_php::printer::render_imports;
///
/// let mut imports = ImportSet::new();
/// imports.add("Filament\\Resources\\Resource");
/// imports.add_aliased("App\\Models\\Resource", "ResourceModel");
///
/// assert_eq!(
///     render_imports(&imports),
///     "use Filament\\Resources\\Resource;\nuse App\\Models\\Resource as ResourceModel;"
/// );
/// ```
pub fn render_imports(imports: &ImportSet) -> String {
    imports
        .iter()
        .map(|(fqn, alias)| match alias {
            Some(alias) => format!("use {} as {};", fqn, alias),
            None => format!("use {};", fqn),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Modifier prefix shared by properties and methods (`public static `).
fn modifiers(visibility: Visibility, is_static: bool) -> String {
    if is_static {
        format!("{} static ", visibility.as_str())
    } else {
        format!("{} ", visibility.as_str())
    }
}

struct PhpProperty<'a> {
    property: &'a PropertySpec,
    resolver: NameResolver<'a>,
    indent: Indent,
}

impl Renderable for PhpProperty<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let p = self.property;
        let mut fragments = Vec::new();

        if let Some(doc) = &p.doc {
            fragments.push(CodeFragment::DocComment(doc.clone()));
        }

        let mut decl = modifiers(p.visibility, p.is_static);
        if let Some(ty) = &p.ty {
            decl.push_str(&render_type(ty, &self.resolver));
            decl.push(' ');
        }
        decl.push('$');
        decl.push_str(&p.name);
        if let Some(value) = &p.value {
            decl.push_str(" = ");
            decl.push_str(&render_value(value, &self.resolver, self.indent));
        }
        decl.push(';');

        fragments.extend(CodeFragment::lines(&decl));
        fragments
    }
}

struct PhpMethod<'a> {
    method: &'a MethodSpec,
    resolver: NameResolver<'a>,
    indent: Indent,
}

impl PhpMethod<'_> {
    fn render_param(&self, param: &ParamSpec) -> String {
        let mut out = String::new();
        if let Some(ty) = &param.ty {
            out.push_str(&render_type(ty, &self.resolver));
            out.push(' ');
        }
        out.push('$');
        out.push_str(&param.name);
        if let Some(default) = &param.default {
            out.push_str(" = ");
            out.push_str(&render_value(default, &self.resolver, self.indent));
        }
        out
    }

    fn render_statement(&self, statement: &Statement) -> String {
        match statement {
            Statement::Return(value) => format!(
                "return {};",
                render_value(value, &self.resolver, self.indent)
            ),
            Statement::Raw(code) => code.trim_end().to_string(),
        }
    }
}

impl Renderable for PhpMethod<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let m = self.method;
        let mut fragments = Vec::new();

        if let Some(doc) = &m.doc {
            fragments.push(CodeFragment::DocComment(doc.clone()));
        }

        let params = m
            .params
            .iter()
            .map(|p| self.render_param(p))
            .collect::<Vec<_>>()
            .join(", ");

        let mut signature = format!(
            "{}function {}({})",
            modifiers(m.visibility, m.is_static),
            m.name,
            params
        );
        if let Some(ret) = &m.return_type {
            signature.push_str(": ");
            signature.push_str(&render_type(ret, &self.resolver));
        }
        fragments.push(CodeFragment::Line(signature));

        let body = m
            .body
            .iter()
            .flat_map(|stmt| CodeFragment::lines(&self.render_statement(stmt)))
            .collect();
        fragments.push(CodeFragment::block("{", body, Some("}".to_string())));

        fragments
    }
}
