//! Class, property, method and parameter specifications.

use trowel_core::{class_basename, extract_namespace};

use super::{
    expr::{Statement, Value},
    types::{TypeRef, Visibility},
};
use crate::imports::{ImportSet, NameResolver};

/// A declarative specification for a class.
///
/// Built incrementally by a generator and handed to a
/// [`ClassPrinter`](crate::ClassPrinter) once complete.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSpec {
    /// Namespace the class is declared in (empty for the global namespace).
    pub namespace: String,
    /// Short class name.
    pub name: String,
    /// Fully qualified parent class.
    pub extends: Option<String>,
    /// Ordered, deduplicated imports.
    pub imports: ImportSet,
    /// Properties in declaration order.
    pub properties: Vec<PropertySpec>,
    /// Methods in declaration order.
    pub methods: Vec<MethodSpec>,
}

impl ClassSpec {
    /// Create an empty class from its fully qualified name.
    pub fn new(fqn: &str) -> Self {
        Self {
            namespace: extract_namespace(fqn).to_string(),
            name: class_basename(fqn).to_string(),
            extends: None,
            imports: ImportSet::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Set the parent class.
    pub fn extends(mut self, fqn: impl Into<String>) -> Self {
        self.extends = Some(fqn.into());
        self
    }

    /// Replace the imports.
    pub fn with_imports(mut self, imports: ImportSet) -> Self {
        self.imports = imports;
        self
    }

    /// Append a property.
    pub fn add_property(&mut self, property: PropertySpec) -> &mut Self {
        self.properties.push(property);
        self
    }

    /// Append a method.
    pub fn add_method(&mut self, method: MethodSpec) -> &mut Self {
        self.methods.push(method);
        self
    }

    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&PropertySpec> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Look up a method by name.
    pub fn method(&self, name: &str) -> Option<&MethodSpec> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Check whether a method with the given name is declared.
    pub fn has_method(&self, name: &str) -> bool {
        self.method(name).is_some()
    }

    /// Resolver for shortening names against this class's imports.
    pub fn resolver(&self) -> NameResolver<'_> {
        NameResolver::new(&self.namespace, &self.imports)
    }
}

/// A class property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySpec {
    /// Property name without the sigil.
    pub name: String,
    /// Visibility modifier.
    pub visibility: Visibility,
    /// Whether the property is static.
    pub is_static: bool,
    /// Declared type.
    pub ty: Option<TypeRef>,
    /// Default value.
    pub value: Option<Value>,
    /// Documentation comment.
    pub doc: Option<String>,
}

impl PropertySpec {
    /// Create a new public, non-static, untyped property.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            ty: None,
            value: None,
            doc: None,
        }
    }

    /// Set visibility.
    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
        self
    }

    /// Make this property protected.
    pub fn protected(self) -> Self {
        self.visibility(Visibility::Protected)
    }

    /// Make this property static.
    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Set the declared type.
    pub fn ty(mut self, ty: TypeRef) -> Self {
        self.ty = Some(ty);
        self
    }

    /// Set the default value.
    pub fn value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    /// Set documentation comment.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// A class method.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSpec {
    /// Method name.
    pub name: String,
    /// Visibility modifier.
    pub visibility: Visibility,
    /// Whether the method is static.
    pub is_static: bool,
    /// Parameters.
    pub params: Vec<ParamSpec>,
    /// Return type.
    pub return_type: Option<TypeRef>,
    /// Body statements.
    pub body: Vec<Statement>,
    /// Documentation comment.
    pub doc: Option<String>,
}

impl MethodSpec {
    /// Create a new public, non-static method with an empty body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
            doc: None,
        }
    }

    /// Set visibility.
    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
        self
    }

    /// Make this method static.
    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Add a parameter.
    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// Set the return type.
    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.return_type = Some(ty);
        self
    }

    /// Add a statement to the body.
    pub fn statement(mut self, stmt: Statement) -> Self {
        self.body.push(stmt);
        self
    }

    /// Replace the body with raw text.
    pub fn body(mut self, code: impl Into<String>) -> Self {
        self.body = vec![Statement::raw(code)];
        self
    }

    /// Set documentation comment.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    /// Parameter name without the sigil.
    pub name: String,
    /// Declared type.
    pub ty: Option<TypeRef>,
    /// Default value.
    pub default: Option<Value>,
}

impl ParamSpec {
    /// Create a new typed parameter.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
            default: None,
        }
    }

    /// Set a default value.
    pub fn default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }
}
