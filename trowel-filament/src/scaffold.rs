//! Default form and table bodies built from the entity's fields.

use trowel_codegen::CodeBuilder;
use trowel_php::quote_string;

use crate::{
    body::{BodyContext, FormBodyProvider, TableBodyProvider},
    spec::{Field, FieldKind},
};

const TEXT_INPUT: &str = "Filament\\Forms\\Components\\TextInput";
const TEXTAREA: &str = "Filament\\Forms\\Components\\Textarea";
const TOGGLE: &str = "Filament\\Forms\\Components\\Toggle";
const DATE_PICKER: &str = "Filament\\Forms\\Components\\DatePicker";
const DATE_TIME_PICKER: &str = "Filament\\Forms\\Components\\DateTimePicker";

const TEXT_COLUMN: &str = "Filament\\Tables\\Columns\\TextColumn";
const ICON_COLUMN: &str = "Filament\\Tables\\Columns\\IconColumn";
const TRASHED_FILTER: &str = "Filament\\Tables\\Filters\\TrashedFilter";

const VIEW_ACTION: &str = "Filament\\Actions\\ViewAction";
const EDIT_ACTION: &str = "Filament\\Actions\\EditAction";
const BULK_ACTION_GROUP: &str = "Filament\\Actions\\BulkActionGroup";
const DELETE_BULK_ACTION: &str = "Filament\\Actions\\DeleteBulkAction";
const FORCE_DELETE_BULK_ACTION: &str = "Filament\\Actions\\ForceDeleteBulkAction";
const RESTORE_BULK_ACTION: &str = "Filament\\Actions\\RestoreBulkAction";

/// A `Class::make(...)` expression followed by fluent calls, one per line.
struct Component {
    make: String,
    calls: Vec<&'static str>,
}

impl Component {
    fn new(class: String, args: &str) -> Self {
        Self {
            make: format!("{}::make({})", class, args),
            calls: Vec::new(),
        }
    }

    fn call(mut self, call: &'static str) -> Self {
        self.calls.push(call);
        self
    }

    fn call_if(self, condition: bool, call: &'static str) -> Self {
        if condition { self.call(call) } else { self }
    }

    fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let Some((last, rest)) = self.calls.split_last() else {
            return builder.line(&format!("{},", self.make));
        };

        builder
            .line(&self.make)
            .indent()
            .each(rest, |b, call| b.line(&format!("->{}", call)))
            .line(&format!("->{},", last))
            .dedent()
    }
}

/// Render `->name([ ... ])` with one component per line, or `//` when empty.
fn list_call(builder: CodeBuilder, name: &str, close: &str, items: &[Component]) -> CodeBuilder {
    builder.block_with_close(&format!("->{}([", name), close, |b| {
        if items.is_empty() {
            b.line("//")
        } else {
            b.each(items, |b, item| item.render(b))
        }
    })
}

/// Form components generated from the entity's fields.
///
/// With `embed_components(false)` the form keeps an empty component list
/// and does not ask for the `Filament\Forms` namespace.
#[derive(Debug, Clone, Copy)]
pub struct ScaffoldForm {
    embed: bool,
}

impl ScaffoldForm {
    pub fn new() -> Self {
        Self { embed: true }
    }

    /// Whether components are listed inline.
    pub fn embed_components(mut self, embed: bool) -> Self {
        self.embed = embed;
        self
    }

    fn component(field: &Field, ctx: &mut BodyContext<'_>) -> Component {
        let name = quote_string(&field.name);
        let component = match field.kind {
            FieldKind::Text => Component::new(ctx.import_unless_partial(TEXT_INPUT), &name),
            FieldKind::Email => {
                Component::new(ctx.import_unless_partial(TEXT_INPUT), &name).call("email()")
            }
            FieldKind::LongText => Component::new(ctx.import_unless_partial(TEXTAREA), &name)
                .call("columnSpanFull()"),
            FieldKind::Boolean => Component::new(ctx.import_unless_partial(TOGGLE), &name),
            FieldKind::Integer | FieldKind::Decimal => {
                Component::new(ctx.import_unless_partial(TEXT_INPUT), &name).call("numeric()")
            }
            FieldKind::Date => Component::new(ctx.import_unless_partial(DATE_PICKER), &name),
            FieldKind::DateTime => {
                Component::new(ctx.import_unless_partial(DATE_TIME_PICKER), &name)
            }
        };
        component.call_if(field.required, "required()")
    }
}

impl Default for ScaffoldForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FormBodyProvider for ScaffoldForm {
    fn body_for(&self, ctx: &mut BodyContext<'_>) -> String {
        let components: Vec<Component> = if self.embed {
            let fields = ctx.spec().fields();
            fields.iter().map(|field| Self::component(field, ctx)).collect()
        } else {
            Vec::new()
        };

        let builder = CodeBuilder::php().line("return $schema").indent();
        list_call(builder, "components", "]);", &components)
            .dedent()
            .build()
    }

    fn embeds_components(&self) -> bool {
        self.embed
    }
}

/// Table columns, filters and actions generated from the entity's fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaffoldTable;

impl ScaffoldTable {
    fn column(field: &Field, ctx: &mut BodyContext<'_>) -> Option<Component> {
        let name = quote_string(&field.name);
        let column = match field.kind {
            FieldKind::Text | FieldKind::Email => {
                Component::new(ctx.import_unless_partial(TEXT_COLUMN), &name).call("searchable()")
            }
            FieldKind::LongText => return None,
            FieldKind::Boolean => {
                Component::new(ctx.import_unless_partial(ICON_COLUMN), &name).call("boolean()")
            }
            FieldKind::Integer | FieldKind::Decimal => {
                Component::new(ctx.import_unless_partial(TEXT_COLUMN), &name)
                    .call("numeric()")
                    .call("sortable()")
            }
            FieldKind::Date => Component::new(ctx.import_unless_partial(TEXT_COLUMN), &name)
                .call("date()")
                .call("sortable()"),
            FieldKind::DateTime => Component::new(ctx.import_unless_partial(TEXT_COLUMN), &name)
                .call("dateTime()")
                .call("sortable()"),
        };
        Some(column)
    }
}

impl TableBodyProvider for ScaffoldTable {
    fn body_for(&self, ctx: &mut BodyContext<'_>) -> String {
        let soft_deletes = ctx.spec().is_soft_deletable();
        let view = ctx.spec().has_view_operation();

        let columns: Vec<Component> = ctx
            .spec()
            .fields()
            .iter()
            .filter_map(|field| Self::column(field, ctx))
            .collect();

        let mut filters = Vec::new();
        if soft_deletes {
            filters.push(Component::new(ctx.import_unless_partial(TRASHED_FILTER), ""));
        }

        let mut record_actions = Vec::new();
        if view {
            record_actions.push(Component::new(ctx.import_unless_partial(VIEW_ACTION), ""));
        }
        record_actions.push(Component::new(ctx.import_unless_partial(EDIT_ACTION), ""));

        let group = ctx.import_unless_partial(BULK_ACTION_GROUP);
        let mut bulk_actions = vec![Component::new(ctx.import_unless_partial(DELETE_BULK_ACTION), "")];
        if soft_deletes {
            bulk_actions.push(Component::new(
                ctx.import_unless_partial(FORCE_DELETE_BULK_ACTION),
                "",
            ));
            bulk_actions.push(Component::new(ctx.import_unless_partial(RESTORE_BULK_ACTION), ""));
        }

        let builder = CodeBuilder::php().line("return $table").indent();
        let builder = list_call(builder, "columns", "])", &columns);
        let builder = list_call(builder, "filters", "])", &filters);
        let builder = list_call(builder, "recordActions", "])", &record_actions);
        builder
            .block_with_close("->toolbarActions([", "]);", |b| {
                b.block_with_close(&format!("{}::make([", group), "]),", |b| {
                    b.each(&bulk_actions, |b, action| action.render(b))
                })
            })
            .dedent()
            .build()
    }
}
