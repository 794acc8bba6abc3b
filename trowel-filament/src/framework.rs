//! Names from the Filament and Laravel frameworks the generated class uses.

/// Base class of every resource.
pub const RESOURCE: &str = "Filament\\Resources\\Resource";
/// Schema passed to `form` and `infolist`.
pub const SCHEMA: &str = "Filament\\Schema\\Schema";
/// Table passed to `table`.
pub const TABLE: &str = "Filament\\Tables\\Table";
/// Return type of `getEloquentQuery`.
pub const ELOQUENT_BUILDER: &str = "Illuminate\\Database\\Eloquent\\Builder";
/// Global scope removed from the query of soft-deletable resources.
pub const SOFT_DELETING_SCOPE: &str = "Illuminate\\Database\\Eloquent\\SoftDeletingScope";

/// Namespace imported for actions under partial imports.
pub const ACTIONS_NAMESPACE: &str = "Filament\\Actions";
/// Namespace imported for columns and filters under partial imports.
pub const TABLES_NAMESPACE: &str = "Filament\\Tables";
/// Namespace imported for form components under partial imports.
pub const FORMS_NAMESPACE: &str = "Filament\\Forms";
/// Namespace imported for infolist entries under partial imports.
pub const INFOLISTS_NAMESPACE: &str = "Filament\\Infolists";

/// Icon every new resource starts with.
pub const DEFAULT_NAVIGATION_ICON: &str = "heroicon-o-rectangle-stack";

/// Alias suffix for an entity whose basename is `Resource`.
pub const MODEL_ALIAS_ROLE: &str = "Model";
/// Alias suffix for a cluster whose basename is `Resource`.
pub const CLUSTER_ALIAS_ROLE: &str = "Cluster";
