//! Assembly of a Filament resource class from a [`ResourceSpec`].

use trowel_codegen::{
    AliasConflict, ArrayItem, ClassPrinter, ClassSpec, ImportSet, MethodCall, MethodSpec,
    ParamSpec, PropertySpec, Statement, TypeRef, Value, collision_alias,
};
use trowel_core::{class_basename, shared_namespace};

use crate::{
    body::{BodyContext, FormBodyProvider, TableBodyProvider},
    framework::{
        ACTIONS_NAMESPACE, CLUSTER_ALIAS_ROLE, DEFAULT_NAVIGATION_ICON, ELOQUENT_BUILDER,
        FORMS_NAMESPACE, INFOLISTS_NAMESPACE, MODEL_ALIAS_ROLE, RESOURCE, SCHEMA,
        SOFT_DELETING_SCOPE, TABLE, TABLES_NAMESPACE,
    },
    hooks::{ElementHooks, MethodSlot, PropertySlot},
    scaffold::{ScaffoldForm, ScaffoldTable},
    spec::ResourceSpec,
};

/// Switches that shape the generated code beyond the resource itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationFlags {
    /// Reference framework classes through namespace imports
    /// (`use Filament\Tables;` then `Tables\Columns\TextColumn`).
    pub partial_imports: bool,
    /// List form components inline in the `form` method.
    pub embed_schemas: bool,
}

impl Default for GenerationFlags {
    fn default() -> Self {
        Self {
            partial_imports: true,
            embed_schemas: true,
        }
    }
}

/// Builds the class description of a Filament resource.
///
/// The generator decides which imports, properties and methods the class
/// gets. Method bodies for `form` and `table` come from the configured
/// providers and every element passes through the configured hooks before
/// it is added.
///
/// # Example
///
/// ```
/// use trowel_filament::{Page, ResourceClassGenerator, ResourceSpec};
///
/// let spec = ResourceSpec::builder("App\\Resources\\FooResource", "App\\Models\\Foo")
///     .page("index", Page::new("App\\Resources\\Pages\\ListFoos", "/"))
///     .simple(true)
///     .build();
///
/// let class = ResourceClassGenerator::default().assemble(&spec);
///
/// assert_eq!(class.name, "FooResource");
/// assert!(class.has_method("getPages"));
/// assert!(!class.has_method("getRelations"));
/// ```
pub struct ResourceClassGenerator {
    flags: GenerationFlags,
    form: Box<dyn FormBodyProvider>,
    table: Box<dyn TableBodyProvider>,
    hooks: ElementHooks,
}

impl ResourceClassGenerator {
    /// Create a generator with the scaffolding providers and no hooks.
    pub fn new(flags: GenerationFlags) -> Self {
        Self {
            flags,
            form: Box::new(ScaffoldForm::new().embed_components(flags.embed_schemas)),
            table: Box::new(ScaffoldTable),
            hooks: ElementHooks::default(),
        }
    }

    /// Replace the provider of the `form` body.
    pub fn with_form_provider(mut self, provider: impl FormBodyProvider + 'static) -> Self {
        self.form = Box::new(provider);
        self
    }

    /// Replace the provider of the `table` body.
    pub fn with_table_provider(mut self, provider: impl TableBodyProvider + 'static) -> Self {
        self.table = Box::new(provider);
        self
    }

    /// Replace the element hooks.
    pub fn with_hooks(mut self, hooks: ElementHooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn flags(&self) -> GenerationFlags {
        self.flags
    }

    /// Assemble the full class description.
    ///
    /// # Panics
    ///
    /// Panics when the model or cluster short name collides with another
    /// import. Validate with [`try_imports`](Self::try_imports) first.
    pub fn assemble(&self, spec: &ResourceSpec) -> ClassSpec {
        let mut imports = self.imports(spec);
        let mut class = ClassSpec::new(spec.target()).extends(RESOURCE);

        tracing::debug!(
            resource = spec.target(),
            partial_imports = self.has_partial_imports(spec),
            "assembling resource class"
        );

        self.add_properties(spec, &mut class);
        self.add_methods(spec, &mut imports, &mut class);

        class.imports = imports;
        class
    }

    /// Assemble and render the class.
    pub fn render(&self, spec: &ResourceSpec, printer: &impl ClassPrinter) -> String {
        printer.render(&self.assemble(spec))
    }

    /// Imports every generated class starts with.
    ///
    /// Imports requested by the body providers are appended after these
    /// during [`assemble`](Self::assemble).
    ///
    /// # Panics
    ///
    /// Panics on an alias collision, see [`try_imports`](Self::try_imports).
    pub fn imports(&self, spec: &ResourceSpec) -> ImportSet {
        match self.try_imports(spec) {
            Ok(imports) => imports,
            Err(conflict) => panic!("{conflict}"),
        }
    }

    /// Imports every generated class starts with, reporting alias collisions.
    pub fn try_imports(&self, spec: &ResourceSpec) -> Result<ImportSet, AliasConflict> {
        let mut imports = ImportSet::new();

        imports.try_add(RESOURCE)?;
        imports.try_add(SCHEMA)?;
        imports.try_add(TABLE)?;

        add_with_collision_alias(&mut imports, spec.model(), MODEL_ALIAS_ROLE)?;
        if let Some(cluster) = spec.cluster() {
            add_with_collision_alias(&mut imports, cluster, CLUSTER_ALIAS_ROLE)?;
        }

        if spec.is_soft_deletable() {
            imports.try_add(ELOQUENT_BUILDER)?;
            imports.try_add(SOFT_DELETING_SCOPE)?;
        }

        for page_import in self.pages_imports(spec) {
            imports.try_add(page_import)?;
        }

        if self.has_partial_imports(spec) {
            imports.try_add(ACTIONS_NAMESPACE)?;
            imports.try_add(TABLES_NAMESPACE)?;
            if self.form.embeds_components() {
                imports.try_add(FORMS_NAMESPACE)?;
                if spec.has_view_operation() {
                    imports.try_add(INFOLISTS_NAMESPACE)?;
                }
            }
        }

        Ok(imports)
    }

    /// The page imports: their shared namespace under partial imports,
    /// otherwise every page class in registration order.
    pub fn pages_imports<'s>(&self, spec: &'s ResourceSpec) -> Vec<&'s str> {
        if let Some(namespace) = self.shared_pages_namespace(spec) {
            return vec![namespace];
        }
        spec.pages().values().map(|page| page.class.as_str()).collect()
    }

    /// Whether the class references its pages and framework classes through
    /// namespace imports.
    ///
    /// Requires the flag, at least one page, and every page class declared
    /// in exactly the same namespace.
    pub fn has_partial_imports(&self, spec: &ResourceSpec) -> bool {
        self.shared_pages_namespace(spec).is_some()
    }

    /// Short form of `fqn` as the generated class will reference it.
    ///
    /// Resolves against the final imports, including those the body
    /// providers add while the class is assembled.
    pub fn simplify_fqn(&self, spec: &ResourceSpec, fqn: &str) -> String {
        self.assemble(spec).resolver().simplify(fqn)
    }

    fn shared_pages_namespace<'s>(&self, spec: &'s ResourceSpec) -> Option<&'s str> {
        if !self.flags.partial_imports {
            return None;
        }
        shared_namespace(spec.pages().values().map(|page| page.class.as_str()))
    }

    fn add_properties(&self, spec: &ResourceSpec, class: &mut ClassSpec) {
        self.add_property(
            class,
            PropertySlot::Model,
            static_string_property("model").value(Value::class_ref(spec.model())),
        );

        self.add_property(
            class,
            PropertySlot::NavigationIcon,
            static_string_property("navigationIcon").value(Value::string(DEFAULT_NAVIGATION_ICON)),
        );

        if let Some(cluster) = spec.cluster() {
            self.add_property(
                class,
                PropertySlot::Cluster,
                static_string_property("cluster").value(Value::class_ref(cluster)),
            );
        }
    }

    fn add_methods(&self, spec: &ResourceSpec, imports: &mut ImportSet, class: &mut ClassSpec) {
        let partial = self.has_partial_imports(spec);

        let form_body = self.form.body_for(&mut BodyContext::new(spec, imports, partial));
        self.add_method(
            class,
            MethodSlot::Form,
            static_method("form")
                .param(ParamSpec::new("schema", TypeRef::class(SCHEMA)))
                .returns(TypeRef::class(SCHEMA))
                .body(form_body),
        );

        if spec.has_view_operation() {
            self.add_method(
                class,
                MethodSlot::Infolist,
                static_method("infolist")
                    .param(ParamSpec::new("schema", TypeRef::class(SCHEMA)))
                    .returns(TypeRef::class(SCHEMA))
                    .statement(Statement::return_(Value::chain(
                        Value::variable("schema"),
                        vec![MethodCall::new("components").arg(Value::placeholder_array())],
                    ))),
            );
        }

        let table_body = self.table.body_for(&mut BodyContext::new(spec, imports, partial));
        self.add_method(
            class,
            MethodSlot::Table,
            static_method("table")
                .param(ParamSpec::new("table", TypeRef::class(TABLE)))
                .returns(TypeRef::class(TABLE))
                .body(table_body),
        );

        if !spec.is_simple() {
            self.add_method(
                class,
                MethodSlot::GetRelations,
                static_method("getRelations")
                    .returns(TypeRef::array())
                    .statement(Statement::return_(Value::placeholder_array())),
            );
        }

        let pages = spec
            .pages()
            .iter()
            .map(|(key, page)| {
                ArrayItem::keyed(
                    Value::string(key.as_str()),
                    Value::static_call(
                        page.class.as_str(),
                        "route",
                        vec![Value::string(page.path.as_str())],
                    ),
                )
            })
            .collect();
        self.add_method(
            class,
            MethodSlot::GetPages,
            static_method("getPages")
                .returns(TypeRef::array())
                .statement(Statement::return_(Value::array(pages))),
        );

        if spec.is_soft_deletable() {
            self.add_method(
                class,
                MethodSlot::GetEloquentQuery,
                static_method("getEloquentQuery")
                    .returns(TypeRef::class(ELOQUENT_BUILDER))
                    .statement(Statement::return_(Value::chain(
                        Value::raw("parent::getEloquentQuery()"),
                        vec![MethodCall::new("withoutGlobalScopes").arg(Value::array(vec![
                            ArrayItem::value(Value::class_ref(SOFT_DELETING_SCOPE)),
                        ]))],
                    ))),
            );
        }
    }

    fn add_property(&self, class: &mut ClassSpec, slot: PropertySlot, mut property: PropertySpec) {
        self.hooks.configure_property(slot, &mut property);
        tracing::debug!(property = slot.name(), "added property");
        class.add_property(property);
    }

    fn add_method(&self, class: &mut ClassSpec, slot: MethodSlot, mut method: MethodSpec) {
        self.hooks.configure_method(slot, &mut method);
        tracing::debug!(method = slot.name(), "added method");
        class.add_method(method);
    }
}

impl Default for ResourceClassGenerator {
    fn default() -> Self {
        Self::new(GenerationFlags::default())
    }
}

impl std::fmt::Debug for ResourceClassGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceClassGenerator")
            .field("flags", &self.flags)
            .field("embeds_components", &self.form.embeds_components())
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}

/// Import `fqn`, aliased with `role` when its short name is `Resource`.
fn add_with_collision_alias(
    imports: &mut ImportSet,
    fqn: &str,
    role: &str,
) -> Result<bool, AliasConflict> {
    match collision_alias(fqn, class_basename(RESOURCE), role) {
        Some(alias) => imports.try_add_aliased(fqn, &alias),
        None => imports.try_add(fqn),
    }
}

fn static_string_property(name: &str) -> PropertySpec {
    PropertySpec::new(name)
        .protected()
        .static_()
        .ty(TypeRef::nullable(TypeRef::string()))
}

fn static_method(name: &str) -> MethodSpec {
    MethodSpec::new(name).static_()
}
