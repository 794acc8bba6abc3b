//! Strategies producing the bodies of the `form` and `table` methods.

use trowel_codegen::{ImportSet, NameResolver};
use trowel_core::{class_basename, strip_leading_separator};

use crate::spec::ResourceSpec;

/// What a body provider sees while writing a method body.
///
/// Providers reference classes through [`import_unless_partial`], which
/// keeps the class's imports consistent with the text they write.
///
/// [`import_unless_partial`]: BodyContext::import_unless_partial
#[derive(Debug)]
pub struct BodyContext<'a> {
    spec: &'a ResourceSpec,
    imports: &'a mut ImportSet,
    partial_imports: bool,
}

impl<'a> BodyContext<'a> {
    pub fn new(spec: &'a ResourceSpec, imports: &'a mut ImportSet, partial_imports: bool) -> Self {
        Self {
            spec,
            imports,
            partial_imports,
        }
    }

    /// The resource being generated.
    pub fn spec(&self) -> &'a ResourceSpec {
        self.spec
    }

    /// Whether framework classes are reached through namespace imports.
    pub fn has_partial_imports(&self) -> bool {
        self.partial_imports
    }

    /// Reference `fqn` from the method body, importing it when needed.
    ///
    /// Under partial imports nothing is added and the name is reached
    /// through its imported namespace (`Forms\Components\TextInput`).
    /// Otherwise the class is imported and its short name returned, unless
    /// the short name is already taken by another import.
    pub fn import_unless_partial(&mut self, fqn: &str) -> String {
        let fqn = strip_leading_separator(fqn);

        if !self.partial_imports {
            let taken = self
                .imports
                .fqn_for_alias(class_basename(fqn))
                .is_some_and(|existing| existing != fqn);
            if !taken {
                self.imports.add(fqn);
            }
        }

        NameResolver::new(self.spec.namespace(), self.imports).simplify(fqn)
    }
}

/// Produces the body of `form(Schema $schema): Schema`.
pub trait FormBodyProvider: Send + Sync {
    /// Method body, without the surrounding braces.
    fn body_for(&self, ctx: &mut BodyContext<'_>) -> String;

    /// Whether the body lists form components inline.
    ///
    /// Decides if `Filament\Forms` (and `Filament\Infolists`) are imported
    /// under partial imports.
    fn embeds_components(&self) -> bool {
        true
    }
}

/// Produces the body of `table(Table $table): Table`.
pub trait TableBodyProvider: Send + Sync {
    /// Method body, without the surrounding braces.
    fn body_for(&self, ctx: &mut BodyContext<'_>) -> String;
}
