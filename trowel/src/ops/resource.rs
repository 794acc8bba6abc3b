//! Resource operation - a resource description built from command-line flags.

use eyre::{Result, bail, eyre};
use trowel_core::{class_basename, is_valid_fqn, is_valid_identifier, join_fqn, pluralize, strip_leading_separator};
use trowel_filament::{Field, GenerationFlags, Page, ResourceClassGenerator, ResourceSpec};
use trowel_php::is_reserved;

/// Inputs of the resource operation.
#[derive(Debug, Clone)]
pub struct ResourceOptions<'a> {
    /// Model basename, or a fully qualified class when it contains `\`.
    pub model: &'a str,
    pub model_namespace: &'a str,
    pub resource_namespace: &'a str,
    pub cluster: Option<&'a str>,
    pub view: bool,
    pub soft_deletes: bool,
    pub simple: bool,
    pub generated: bool,
    pub fields: &'a [Field],
    pub flags: GenerationFlags,
}

/// Build the description of `<Model>Resource` with Filament's default pages.
///
/// Rejects names the generator would panic on, and resources whose
/// imports would shadow each other.
pub fn resource_spec(opts: &ResourceOptions<'_>) -> Result<ResourceSpec> {
    let model = if opts.model.contains('\\') {
        strip_leading_separator(opts.model).to_string()
    } else {
        join_fqn(opts.model_namespace, opts.model)
    };
    check_class_name(&model, "model")?;

    let model_basename = class_basename(&model);
    let target = join_fqn(opts.resource_namespace, &format!("{}Resource", model_basename));
    check_class_name(&target, "resource")?;

    let mut builder = ResourceSpec::builder(&target, &model)
        .view(opts.view)
        .soft_deletes(opts.soft_deletes)
        .simple(opts.simple)
        .generated(opts.generated);

    if let Some(cluster) = opts.cluster {
        let cluster = strip_leading_separator(cluster);
        check_class_name(cluster, "cluster")?;
        if cluster == target {
            bail!("resource '{}' cannot be its own cluster", target);
        }
        builder = builder.cluster(cluster);
    }

    for field in opts.fields {
        if !is_valid_identifier(&field.name) {
            bail!("invalid field name '{}'", field.name);
        }
    }
    builder = builder.fields(opts.fields.iter().cloned());

    for (key, page) in default_pages(&target, model_basename, opts.view, opts.simple) {
        builder = builder.page(key, page);
    }

    let spec = builder.build();
    ResourceClassGenerator::new(opts.flags)
        .try_imports(&spec)
        .map_err(|conflict| eyre!("{conflict}, rename the model or pick another namespace"))?;

    Ok(spec)
}

/// Filament's default pages for a resource.
///
/// Simple resources manage records from a single `Manage{Plural}` page.
pub fn default_pages(
    target: &str,
    model_basename: &str,
    view: bool,
    simple: bool,
) -> Vec<(&'static str, Page)> {
    let namespace = join_fqn(target, "Pages");
    let page = |class: String, path: &str| Page::new(join_fqn(&namespace, &class), path);
    let plural = pluralize(model_basename);

    if simple {
        return vec![("index", page(format!("Manage{}", plural), "/"))];
    }

    let mut pages = vec![
        ("index", page(format!("List{}", plural), "/")),
        ("create", page(format!("Create{}", model_basename), "/create")),
    ];
    if view {
        pages.push(("view", page(format!("View{}", model_basename), "/{record}")));
    }
    pages.push(("edit", page(format!("Edit{}", model_basename), "/{record}/edit")));
    pages
}

fn check_class_name(name: &str, kind: &str) -> Result<()> {
    if !is_valid_fqn(name) {
        bail!("invalid {} class name '{}'", kind, name);
    }
    let basename = class_basename(name);
    if is_reserved(basename) {
        bail!("'{}' is a PHP reserved word and cannot name the {} class", basename, kind);
    }
    Ok(())
}
