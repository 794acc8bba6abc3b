use std::{
    io::{self, IsTerminal},
    path::PathBuf,
};

use clap::Args;
use dialoguer::{Confirm, theme::ColorfulTheme};
use eyre::{Context, Result};
use trowel_core::GeneratedFile;
use trowel_filament::{Field, FieldKind, GenerationFlags, ResourceClassFile, ResourceClassGenerator};

use crate::{
    ops::{
        self,
        make::MakeOptions,
        resource::ResourceOptions,
    },
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ResourceCommand {
    /// Model class name (e.g. Post), or a fully qualified class
    pub model: String,

    /// Namespace of models given by name
    #[arg(long, default_value = "App\\Models")]
    pub model_namespace: String,

    /// Namespace of the generated resource
    #[arg(long, default_value = "App\\Filament\\Resources")]
    pub resource_namespace: String,

    /// Fully qualified cluster the resource belongs to
    #[arg(long)]
    pub cluster: Option<String>,

    /// Add a view page and an infolist
    #[arg(long)]
    pub view: bool,

    /// The model uses soft deletes
    #[arg(long)]
    pub soft_deletes: bool,

    /// Manage records from a single page with modals
    #[arg(long)]
    pub simple: bool,

    /// Scaffold the form and table from --field columns
    #[arg(long)]
    pub generate: bool,

    /// A model column as name:type[:required] (repeatable)
    #[arg(short, long = "field", value_name = "FIELD", value_parser = parse_field)]
    pub fields: Vec<Field>,

    /// Import every class instead of shared namespaces
    #[arg(long)]
    pub no_partial_imports: bool,

    /// Leave the form's component list empty
    #[arg(long)]
    pub no_embed_schemas: bool,

    /// Output directory
    #[arg(short, long, default_value = "app/Filament/Resources")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite the resource class if it already exists
    #[arg(long)]
    pub force: bool,
}

impl ResourceCommand {
    /// Run the resource command
    pub fn run(&self) -> Result<()> {
        let flags = GenerationFlags {
            partial_imports: !self.no_partial_imports,
            embed_schemas: !self.no_embed_schemas,
        };
        let spec = ops::resource_spec(&ResourceOptions {
            model: &self.model,
            model_namespace: &self.model_namespace,
            resource_namespace: &self.resource_namespace,
            cluster: self.cluster.as_deref(),
            view: self.view,
            soft_deletes: self.soft_deletes,
            simple: self.simple,
            generated: self.generate,
            fields: &self.fields,
            flags,
        })?;

        let generator = ResourceClassGenerator::new(flags);
        let path = ResourceClassFile::new(&generator, &spec).path(&self.output);

        let mut force = self.force;
        if path.exists() && !force && !self.dry_run && io::stdin().is_terminal() {
            force = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("{} already exists. Overwrite it?", path.display()))
                .default(false)
                .interact()
                .wrap_err("Failed to get overwrite confirmation")?;
        }

        let report = ops::make(
            &generator,
            std::slice::from_ref(&spec),
            MakeOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
                force,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}

/// Parse `name:type[:required]`.
fn parse_field(s: &str) -> std::result::Result<Field, String> {
    let mut parts = s.split(':');
    let name = parts.next().unwrap_or_default();
    let kind = parts
        .next()
        .ok_or_else(|| format!("expected name:type, got '{}'", s))?;
    let kind: FieldKind = kind.parse().map_err(|e| format!("{}", e))?;

    let required = match parts.next() {
        None => false,
        Some("required") => true,
        Some(other) => return Err(format!("unknown field modifier '{}'", other)),
    };
    if parts.next().is_some() {
        return Err(format!("expected name:type[:required], got '{}'", s));
    }

    Ok(Field::new(name, kind).required(required))
}
