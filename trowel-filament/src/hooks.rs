//! Customization points invoked after each element is built.

use std::{collections::HashMap, fmt};

use trowel_codegen::{MethodSpec, PropertySpec};

/// Properties the resource class may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertySlot {
    Model,
    NavigationIcon,
    Cluster,
}

impl PropertySlot {
    /// Name of the declared property.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::NavigationIcon => "navigationIcon",
            Self::Cluster => "cluster",
        }
    }
}

/// Methods the resource class may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MethodSlot {
    Form,
    Infolist,
    Table,
    GetRelations,
    GetPages,
    GetEloquentQuery,
}

impl MethodSlot {
    /// Name of the declared method.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::Infolist => "infolist",
            Self::Table => "table",
            Self::GetRelations => "getRelations",
            Self::GetPages => "getPages",
            Self::GetEloquentQuery => "getEloquentQuery",
        }
    }
}

type PropertyHook = Box<dyn Fn(&mut PropertySpec) + Send + Sync>;
type MethodHook = Box<dyn Fn(&mut MethodSpec) + Send + Sync>;

/// Optional callbacks, one per element, run before the element is added.
///
/// Elements without a callback are added unchanged.
///
/// # Example
///
/// ```
/// use trowel_codegen::Value;
/// use trowel_filament::{ElementHooks, PropertySlot};
///
/// let hooks = ElementHooks::new().on_property(PropertySlot::NavigationIcon, |property| {
///     property.value = Some(Value::string("heroicon-o-document-text"));
/// });
/// assert!(hooks.has_property_hook(PropertySlot::NavigationIcon));
/// ```
#[derive(Default)]
pub struct ElementHooks {
    properties: HashMap<PropertySlot, PropertyHook>,
    methods: HashMap<MethodSlot, MethodHook>,
}

impl ElementHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the callback for a property, replacing any previous one.
    pub fn on_property<F>(mut self, slot: PropertySlot, hook: F) -> Self
    where
        F: Fn(&mut PropertySpec) + Send + Sync + 'static,
    {
        self.properties.insert(slot, Box::new(hook));
        self
    }

    /// Register the callback for a method, replacing any previous one.
    pub fn on_method<F>(mut self, slot: MethodSlot, hook: F) -> Self
    where
        F: Fn(&mut MethodSpec) + Send + Sync + 'static,
    {
        self.methods.insert(slot, Box::new(hook));
        self
    }

    pub fn has_property_hook(&self, slot: PropertySlot) -> bool {
        self.properties.contains_key(&slot)
    }

    pub fn has_method_hook(&self, slot: MethodSlot) -> bool {
        self.methods.contains_key(&slot)
    }

    /// Run the property callback for `slot`, if any.
    pub fn configure_property(&self, slot: PropertySlot, property: &mut PropertySpec) {
        if let Some(hook) = self.properties.get(&slot) {
            hook(property);
        }
    }

    /// Run the method callback for `slot`, if any.
    pub fn configure_method(&self, slot: MethodSlot, method: &mut MethodSpec) {
        if let Some(hook) = self.methods.get(&slot) {
            hook(method);
        }
    }
}

impl fmt::Debug for ElementHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementHooks")
            .field("properties", &self.properties.keys().collect::<Vec<_>>())
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .finish()
    }
}
