//! End-to-end tests for resource class assembly and rendering.

use trowel_codegen::{ArrayItem, ClassPrinter, ClassSpec, Statement, Value};
use trowel_filament::{
    Field, FieldKind, GenerationFlags, Page, ResourceClassGenerator, ResourceSpec,
    ResourceSpecBuilder,
};
use trowel_php::PhpPrinter;

const PAGES: &str = "App\\Filament\\Resources\\PostResource\\Pages";

fn post_resource() -> ResourceSpecBuilder {
    ResourceSpec::builder("App\\Filament\\Resources\\PostResource", "App\\Models\\Post")
        .page("index", Page::new(format!("{PAGES}\\ListPosts"), "/"))
        .page("create", Page::new(format!("{PAGES}\\CreatePost"), "/create"))
        .page("view", Page::new(format!("{PAGES}\\ViewPost"), "/{record}"))
        .page("edit", Page::new(format!("{PAGES}\\EditPost"), "/{record}/edit"))
}

fn render(generator: &ResourceClassGenerator, spec: &ResourceSpec) -> String {
    generator.render(spec, &PhpPrinter::new())
}

/// Every `Name::` in the output starts with an imported alias, or is fully qualified.
fn assert_static_references_are_imported(class: &ClassSpec, php: &str) {
    let mut rest = php;
    while let Some(pos) = rest.find("::") {
        let name: String = rest[..pos]
            .chars()
            .rev()
            .take_while(|c| c.is_alphanumeric() || *c == '_' || *c == '\\')
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        rest = &rest[pos + 2..];

        if name.is_empty() || name.starts_with('\\') || name == "parent" {
            continue;
        }
        let first = name.split('\\').next().unwrap_or(&name);
        assert!(
            class.imports.fqn_for_alias(first).is_some(),
            "'{name}' is referenced without an import"
        );
    }
}

fn pages_entries(class: &ClassSpec) -> Vec<ArrayItem> {
    let method = class.method("getPages").expect("getPages is always present");
    match method.body.as_slice() {
        [Statement::Return(Value::Array(items))] => items.clone(),
        other => panic!("unexpected getPages body: {other:?}"),
    }
}

#[test]
fn test_full_resource_output() {
    let spec = post_resource()
        .cluster("App\\Filament\\Clusters\\Blog")
        .view(true)
        .soft_deletes(true)
        .field(Field::new("title", FieldKind::Text).required(true))
        .field(Field::new("is_published", FieldKind::Boolean))
        .build();

    let php = render(&ResourceClassGenerator::default(), &spec);

    insta::assert_snapshot!(php, @r"
<?php

namespace App\Filament\Resources;

use Filament\Resources\Resource;
use Filament\Schema\Schema;
use Filament\Tables\Table;
use App\Models\Post;
use App\Filament\Clusters\Blog;
use Illuminate\Database\Eloquent\Builder;
use Illuminate\Database\Eloquent\SoftDeletingScope;
use App\Filament\Resources\PostResource\Pages;
use Filament\Actions;
use Filament\Tables;
use Filament\Forms;
use Filament\Infolists;

class PostResource extends Resource
{
    protected static ?string $model = Post::class;

    protected static ?string $navigationIcon = 'heroicon-o-rectangle-stack';

    protected static ?string $cluster = Blog::class;

    public static function form(Schema $schema): Schema
    {
        return $schema
            ->components([
                Forms\Components\TextInput::make('title')
                    ->required(),
                Forms\Components\Toggle::make('is_published'),
            ]);
    }

    public static function infolist(Schema $schema): Schema
    {
        return $schema
            ->components([
                //
            ]);
    }

    public static function table(Table $table): Table
    {
        return $table
            ->columns([
                Tables\Columns\TextColumn::make('title')
                    ->searchable(),
                Tables\Columns\IconColumn::make('is_published')
                    ->boolean(),
            ])
            ->filters([
                Tables\Filters\TrashedFilter::make(),
            ])
            ->recordActions([
                Actions\ViewAction::make(),
                Actions\EditAction::make(),
            ])
            ->toolbarActions([
                Actions\BulkActionGroup::make([
                    Actions\DeleteBulkAction::make(),
                    Actions\ForceDeleteBulkAction::make(),
                    Actions\RestoreBulkAction::make(),
                ]),
            ]);
    }

    public static function getRelations(): array
    {
        return [
            //
        ];
    }

    public static function getPages(): array
    {
        return [
            'index' => Pages\ListPosts::route('/'),
            'create' => Pages\CreatePost::route('/create'),
            'view' => Pages\ViewPost::route('/{record}'),
            'edit' => Pages\EditPost::route('/{record}/edit'),
        ];
    }

    public static function getEloquentQuery(): Builder
    {
        return parent::getEloquentQuery()
            ->withoutGlobalScopes([
                SoftDeletingScope::class,
            ]);
    }
}
");
}

#[test]
fn test_simple_resource_scenario() {
    let spec = ResourceSpec::builder("App\\Resources\\FooResource", "App\\Models\\Foo")
        .page("index", Page::new("App\\Resources\\Pages\\ListFoos", "/"))
        .simple(true)
        .build();

    let generator = ResourceClassGenerator::default();
    let class = generator.assemble(&spec);

    assert_eq!(class.name, "FooResource");
    assert_eq!(class.extends.as_deref(), Some("Filament\\Resources\\Resource"));

    let properties: Vec<&str> = class.properties.iter().map(|p| p.name.as_str()).collect();
    let methods: Vec<&str> = class.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(properties, vec!["model", "navigationIcon"]);
    assert_eq!(methods, vec!["form", "table", "getPages"]);
    assert_eq!(pages_entries(&class).len(), 1);

    let php = PhpPrinter::new().render(&class);
    insta::assert_snapshot!(php, @r"
<?php

namespace App\Resources;

use Filament\Resources\Resource;
use Filament\Schema\Schema;
use Filament\Tables\Table;
use App\Models\Foo;
use App\Resources\Pages;
use Filament\Actions;
use Filament\Tables;
use Filament\Forms;

class FooResource extends Resource
{
    protected static ?string $model = Foo::class;

    protected static ?string $navigationIcon = 'heroicon-o-rectangle-stack';

    public static function form(Schema $schema): Schema
    {
        return $schema
            ->components([
                //
            ]);
    }

    public static function table(Table $table): Table
    {
        return $table
            ->columns([
                //
            ])
            ->filters([
                //
            ])
            ->recordActions([
                Actions\EditAction::make(),
            ])
            ->toolbarActions([
                Actions\BulkActionGroup::make([
                    Actions\DeleteBulkAction::make(),
                ]),
            ]);
    }

    public static function getPages(): array
    {
        return [
            'index' => Pages\ListFoos::route('/'),
        ];
    }
}
");
}

#[test]
fn test_elements_follow_flags_for_every_combination() {
    let generator = ResourceClassGenerator::default();

    for bits in 0u8..16 {
        let view = bits & 1 != 0;
        let soft_deletes = bits & 2 != 0;
        let simple = bits & 4 != 0;
        let cluster = bits & 8 != 0;

        let mut builder = post_resource()
            .view(view)
            .soft_deletes(soft_deletes)
            .simple(simple)
            .field(Field::new("title", FieldKind::Text));
        if cluster {
            builder = builder.cluster("App\\Filament\\Clusters\\Blog");
        }
        let spec = builder.build();

        let class = generator.assemble(&spec);
        let php = PhpPrinter::new().render(&class);

        assert_eq!(class.has_method("infolist"), view, "infolist for {bits:04b}");
        assert_eq!(class.has_method("getRelations"), !simple, "getRelations for {bits:04b}");
        assert_eq!(
            class.has_method("getEloquentQuery"),
            soft_deletes,
            "getEloquentQuery for {bits:04b}"
        );
        assert_eq!(class.property("cluster").is_some(), cluster, "cluster for {bits:04b}");

        let fqns: Vec<&str> = class.imports.iter().map(|(fqn, _)| fqn).collect();
        let mut unique = fqns.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(fqns.len(), unique.len(), "duplicate imports for {bits:04b}");

        assert_static_references_are_imported(&class, &php);
        if soft_deletes {
            assert!(php.contains("                SoftDeletingScope::class,\n"));
        }
    }
}

#[test]
fn test_pages_entries_match_pages_in_order() {
    let spec = post_resource().build();
    let class = ResourceClassGenerator::default().assemble(&spec);

    let entries = pages_entries(&class);
    assert_eq!(entries.len(), spec.pages().len());

    for (entry, (key, page)) in entries.iter().zip(spec.pages()) {
        assert_eq!(
            entry,
            &ArrayItem::keyed(
                Value::string(key.as_str()),
                Value::static_call(page.class.as_str(), "route", vec![Value::string(page.path.as_str())]),
            )
        );
    }

    let php = PhpPrinter::new().render(&class);
    let index = php.find("'index' => Pages\\ListPosts::route('/'),").unwrap();
    let edit = php.find("'edit' => Pages\\EditPost::route('/{record}/edit'),").unwrap();
    assert!(index < edit);
}

#[test]
fn test_resource_named_model_and_cluster_are_aliased() {
    let spec = ResourceSpec::builder("App\\Filament\\Resources\\ResourceResource", "App\\Models\\Resource")
        .cluster("App\\Filament\\Clusters\\Resource")
        .build();
    let class = ResourceClassGenerator::default().assemble(&spec);
    let php = PhpPrinter::new().render(&class);

    assert!(php.contains("use App\\Models\\Resource as ResourceModel;\n"));
    assert!(php.contains("use App\\Filament\\Clusters\\Resource as ResourceCluster;\n"));
    assert!(php.contains("protected static ?string $model = ResourceModel::class;"));
    assert!(php.contains("protected static ?string $cluster = ResourceCluster::class;"));
    assert!(php.contains("class ResourceResource extends Resource\n"));
}

#[test]
fn test_other_models_are_not_aliased() {
    let spec = post_resource().cluster("App\\Filament\\Clusters\\Blog").build();
    let class = ResourceClassGenerator::default().assemble(&spec);

    assert_eq!(class.imports.explicit_alias("App\\Models\\Post"), None);
    assert_eq!(class.imports.explicit_alias("App\\Filament\\Clusters\\Blog"), None);
}

#[test]
fn test_shared_page_namespace_collapses_imports() {
    let spec = ResourceSpec::builder("App\\Resources\\FooResource", "App\\Models\\Foo")
        .page("edit", Page::new("App\\Pages\\EditFoo", "/{record}/edit"))
        .page("create", Page::new("App\\Pages\\CreateFoo", "/create"))
        .build();
    let class = ResourceClassGenerator::default().assemble(&spec);

    assert!(class.imports.contains("App\\Pages"));
    assert!(!class.imports.contains("App\\Pages\\EditFoo"));
    assert!(!class.imports.contains("App\\Pages\\CreateFoo"));

    let php = PhpPrinter::new().render(&class);
    assert!(php.contains("'edit' => Pages\\EditFoo::route('/{record}/edit'),"));
}

#[test]
fn test_scattered_pages_import_every_class() {
    let spec = post_resource()
        .page("report", Page::new("App\\Filament\\Reports\\PostReport", "/report"))
        .field(Field::new("title", FieldKind::Text))
        .build();
    let class = ResourceClassGenerator::default().assemble(&spec);
    let php = PhpPrinter::new().render(&class);

    assert!(!class.imports.contains(PAGES));
    assert!(class.imports.contains("App\\Filament\\Reports\\PostReport"));
    assert!(!class.imports.contains("Filament\\Tables"));
    assert!(class.imports.contains("Filament\\Tables\\Columns\\TextColumn"));

    assert!(php.contains("'index' => ListPosts::route('/'),"));
    assert!(php.contains("'report' => PostReport::route('/report'),"));
    assert!(php.contains("                TextColumn::make('title')\n"));
    assert_static_references_are_imported(&class, &php);
}

#[test]
fn test_partial_imports_flag_off() {
    let spec = post_resource().soft_deletes(true).build();
    let generator = ResourceClassGenerator::new(GenerationFlags {
        partial_imports: false,
        ..GenerationFlags::default()
    });
    let class = generator.assemble(&spec);
    let php = PhpPrinter::new().render(&class);

    assert!(php.contains("use App\\Filament\\Resources\\PostResource\\Pages\\ListPosts;\n"));
    assert!(php.contains("use Filament\\Tables\\Filters\\TrashedFilter;\n"));
    assert!(php.contains("                TrashedFilter::make(),\n"));
    assert!(!php.contains("use Filament\\Actions;\n"));
    assert_static_references_are_imported(&class, &php);
}

#[test]
fn test_assembly_is_deterministic() {
    let spec = post_resource()
        .view(true)
        .soft_deletes(true)
        .field(Field::new("published_at", FieldKind::DateTime))
        .build();
    let generator = ResourceClassGenerator::default();

    assert_eq!(generator.assemble(&spec), generator.assemble(&spec));
}
