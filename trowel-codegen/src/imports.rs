//! Import collection and short-name resolution.

use indexmap::IndexMap;
use trowel_core::{NAMESPACE_SEPARATOR, class_basename, strip_leading_separator};

/// Tracks `use` imports and deduplicates them by fully qualified name.
///
/// Maintains insertion order for deterministic output. Binding two different
/// names to the same alias is a precondition violation and panics: the
/// generated file would not compile.
///
/// # Example
///
/// ```
/// use trowel_codegen::ImportSet;
///
/// let mut imports = ImportSet::new();
/// imports.add("Filament\\Resources\\Resource");
/// imports.add_aliased("App\\Models\\Resource", "ResourceModel");
/// imports.add("Filament\\Resources\\Resource");
///
/// assert_eq!(imports.len(), 2);
/// assert_eq!(imports.alias_of("App\\Models\\Resource"), Some("ResourceModel"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    /// Fully qualified name -> explicit alias
    imports: IndexMap<String, Option<String>>,
}

impl ImportSet {
    /// Create a new empty import set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Import a class or namespace under its own short name.
    ///
    /// Returns `false` if the name was already imported.
    pub fn add(&mut self, fqn: &str) -> bool {
        self.insert(fqn, None)
    }

    /// Import a class or namespace under an explicit alias.
    ///
    /// Returns `false` if the name was already imported.
    pub fn add_aliased(&mut self, fqn: &str, alias: &str) -> bool {
        self.insert(fqn, Some(alias.to_string()))
    }

    /// Import a name, reporting an alias conflict instead of panicking.
    pub fn try_add(&mut self, fqn: &str) -> Result<bool, AliasConflict> {
        self.try_insert(fqn, None)
    }

    /// Import a name under an alias, reporting an alias conflict instead of panicking.
    pub fn try_add_aliased(&mut self, fqn: &str, alias: &str) -> Result<bool, AliasConflict> {
        self.try_insert(fqn, Some(alias.to_string()))
    }

    fn insert(&mut self, fqn: &str, alias: Option<String>) -> bool {
        match self.try_insert(fqn, alias) {
            Ok(added) => added,
            Err(conflict) => panic!("{conflict}"),
        }
    }

    fn try_insert(&mut self, fqn: &str, alias: Option<String>) -> Result<bool, AliasConflict> {
        let fqn = strip_leading_separator(fqn);
        if self.imports.contains_key(fqn) {
            return Ok(false);
        }

        let short = alias.as_deref().unwrap_or_else(|| class_basename(fqn));
        if let Some(existing) = self.fqn_for_alias(short) {
            return Err(AliasConflict {
                fqn: fqn.to_string(),
                alias: short.to_string(),
                existing: existing.to_string(),
            });
        }

        self.imports.insert(fqn.to_string(), alias);
        Ok(true)
    }

    /// Check if a name is imported.
    pub fn contains(&self, fqn: &str) -> bool {
        self.imports.contains_key(strip_leading_separator(fqn))
    }

    /// The name an import is visible as: its explicit alias or its basename.
    pub fn alias_of(&self, fqn: &str) -> Option<&str> {
        let (key, alias) = self
            .imports
            .get_key_value(strip_leading_separator(fqn))?;
        Some(alias.as_deref().unwrap_or_else(|| class_basename(key)))
    }

    /// The explicit alias of an import, if one was given.
    pub fn explicit_alias(&self, fqn: &str) -> Option<&str> {
        self.imports
            .get(strip_leading_separator(fqn))
            .and_then(|alias| alias.as_deref())
    }

    /// The imported name bound to an alias (case-insensitive, like PHP).
    pub fn fqn_for_alias(&self, alias: &str) -> Option<&str> {
        self.iter()
            .find(|(fqn, explicit)| {
                explicit
                    .unwrap_or_else(|| class_basename(fqn))
                    .eq_ignore_ascii_case(alias)
            })
            .map(|(fqn, _)| fqn)
    }

    /// Iterate over `(fqn, explicit alias)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.imports
            .iter()
            .map(|(fqn, alias)| (fqn.as_str(), alias.as_deref()))
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of imports.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

/// Two different names imported under the same alias.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot import '{fqn}' as '{alias}': the alias is already bound to '{existing}'")]
pub struct AliasConflict {
    /// The name that was being imported.
    pub fqn: String,
    /// The alias both names resolve to.
    pub alias: String,
    /// The name already bound to the alias.
    pub existing: String,
}

/// Alias for `fqn` when its basename equals `collision_name`.
///
/// The alias is the collision name followed by `role`, so an entity named
/// `Resource` imported next to the framework's `Resource` becomes
/// `ResourceModel`. Returns `None` when no alias is needed.
pub fn collision_alias(fqn: &str, collision_name: &str, role: &str) -> Option<String> {
    (class_basename(fqn) == collision_name).then(|| format!("{}{}", collision_name, role))
}

/// Shortens fully qualified names against a namespace and its imports.
#[derive(Debug, Clone, Copy)]
pub struct NameResolver<'a> {
    namespace: &'a str,
    imports: &'a ImportSet,
}

impl<'a> NameResolver<'a> {
    /// Create a resolver for code declared in `namespace`.
    pub fn new(namespace: &'a str, imports: &'a ImportSet) -> Self {
        Self { namespace, imports }
    }

    /// Shortest name that refers to `fqn` from inside the namespace.
    ///
    /// In order of preference:
    /// 1. the alias of an exact import,
    /// 2. the alias of the longest imported parent namespace plus the rest,
    /// 3. the name relative to the current namespace, unless its first
    ///    segment is shadowed by an import,
    /// 4. the fully qualified name with a leading separator.
    pub fn simplify(&self, fqn: &str) -> String {
        let fqn = strip_leading_separator(fqn);

        if let Some(alias) = self.imports.alias_of(fqn) {
            return alias.to_string();
        }

        if let Some((import, alias)) = self.longest_namespace_import(fqn) {
            return format!("{}{}", alias, &fqn[import.len()..]);
        }

        let relative = if self.namespace.is_empty() {
            Some(fqn)
        } else {
            fqn.strip_prefix(self.namespace)
                .and_then(|rest| rest.strip_prefix(NAMESPACE_SEPARATOR))
        };

        if let Some(relative) = relative {
            let first = relative
                .split(NAMESPACE_SEPARATOR)
                .next()
                .unwrap_or(relative);
            if self.imports.fqn_for_alias(first).is_none() {
                return relative.to_string();
            }
        }

        format!("{}{}", NAMESPACE_SEPARATOR, fqn)
    }

    /// Check whether `fqn` resolves through an import (exact or parent namespace).
    pub fn is_imported(&self, fqn: &str) -> bool {
        let fqn = strip_leading_separator(fqn);
        self.imports.contains(fqn) || self.longest_namespace_import(fqn).is_some()
    }

    fn longest_namespace_import(&self, fqn: &str) -> Option<(&'a str, &'a str)> {
        self.imports
            .iter()
            .filter(|(import, _)| {
                fqn.strip_prefix(import)
                    .is_some_and(|rest| rest.starts_with(NAMESPACE_SEPARATOR))
            })
            .max_by_key(|(import, _)| import.len())
            .and_then(|(import, _)| Some((import, self.imports.alias_of(import)?)))
    }
}
