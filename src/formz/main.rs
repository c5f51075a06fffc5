use std::collections::{BTreeMap, HashMap};

use clap::Parser;
use colored::*;
use formz::api::{
    CmdMessage, CmdResult, DisplayField, FieldSelector, FormzApi, MessageLevel,
};
use formz::engine::{Submission, SubmissionSink};
use formz::error::{FormzError, Result};
use formz::model::{
    FieldId, FieldOption, FieldPatch, SettingsPatch, Spacing, ThemePatch, ValidationRules,
};
use formz::registry::{FieldCategory, FieldType};
use formz::store::fs::FileStore;
use formz::templates;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: FormzApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let store = FileStore::new(&cli.file);
    let mut ctx = AppContext {
        api: FormzApi::new(store),
    };

    match cli.command {
        Some(Commands::Add {
            field_type,
            label,
            placeholder,
            required,
            help_text,
            options,
        }) => handle_add(
            &mut ctx, field_type, label, placeholder, required, help_text, options,
        ),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Update {
            field,
            label,
            placeholder,
            help_text,
            required,
            optional,
            options,
            min_length,
            max_length,
            pattern,
            message,
            rows,
            min,
            max,
            step,
        }) => {
            let patch = build_patch(
                label, placeholder, help_text, required, optional, options, min_length,
                max_length, pattern, message, rows, min, max, step,
            )?;
            handle_update(&mut ctx, field, patch)
        }
        Some(Commands::Remove { field }) => handle_remove(&mut ctx, field),
        Some(Commands::Duplicate { field }) => handle_duplicate(&mut ctx, field),
        Some(Commands::Move { from, to }) => handle_move(&mut ctx, from, to),
        Some(Commands::Select { field, none }) => handle_select(&mut ctx, field, none),
        Some(Commands::Settings {
            title,
            description,
            submit_text,
            primary_color,
            background_color,
            text_color,
            border_radius,
            spacing,
        }) => handle_settings(
            &mut ctx,
            title,
            description,
            submit_text,
            primary_color,
            background_color,
            text_color,
            border_radius,
            spacing,
        ),
        Some(Commands::Preview { state }) => handle_preview(&mut ctx, &state),
        Some(Commands::Clear) => handle_clear(&mut ctx),
        Some(Commands::Types { category }) => handle_types(category),
        Some(Commands::Templates) => handle_templates(),
        Some(Commands::Template { id }) => handle_template(&mut ctx, &id),
        Some(Commands::Export { pretty, output }) => handle_export(&ctx, pretty, output),
        Some(Commands::Import { path }) => handle_import(&mut ctx, path),
        Some(Commands::Check { values }) => handle_check(&ctx, values),
        Some(Commands::Submit { values }) => handle_submit(&ctx, values),
        None => handle_list(&ctx),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "formz=debug" } else { "formz=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[allow(clippy::too_many_arguments)]
fn handle_add(
    ctx: &mut AppContext,
    field_type: String,
    label: Option<String>,
    placeholder: Option<String>,
    required: bool,
    help_text: Option<String>,
    options: Vec<String>,
) -> Result<()> {
    let field_type = FieldType::parse(&field_type)
        .ok_or_else(|| FormzError::UnknownFieldType(field_type.clone()))?;

    let mut overrides = FieldPatch {
        label,
        placeholder,
        help_text,
        ..FieldPatch::default()
    };
    if required {
        overrides.required = Some(true);
    }
    if !options.is_empty() {
        overrides.options = Some(parse_options(&options)?);
    }

    let result = ctx.api.add_field(field_type, overrides)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_fields()?;
    if let Some(settings) = &result.settings {
        println!("{}", settings.title.bold());
        if !settings.description.is_empty() {
            println!("{}", settings.description.dimmed());
        }
    }
    print_fields(&result.listed_fields);
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, field: String, patch: FieldPatch) -> Result<()> {
    if patch.is_empty() {
        println!("Nothing to update.");
        return Ok(());
    }
    let result = ctx.api.update_field(&FieldSelector::parse(&field), patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, field: String) -> Result<()> {
    let result = ctx.api.remove_field(&FieldSelector::parse(&field))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_duplicate(ctx: &mut AppContext, field: String) -> Result<()> {
    let result = ctx.api.duplicate_field(&FieldSelector::parse(&field))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_move(ctx: &mut AppContext, from: usize, to: usize) -> Result<()> {
    let result = ctx.api.move_field(from, to)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_select(ctx: &mut AppContext, field: Option<String>, none: bool) -> Result<()> {
    let selector = match (field, none) {
        (Some(f), false) => Some(FieldSelector::parse(&f)),
        (None, true) => None,
        (None, false) => {
            return Err(FormzError::Api(
                "Pass a field to select, or --none to clear.".to_string(),
            ))
        }
        (Some(_), true) => {
            return Err(FormzError::Api(
                "--none cannot be combined with a field.".to_string(),
            ))
        }
    };
    let result = ctx.api.select_field(selector.as_ref())?;
    print_messages(&result.messages);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_settings(
    ctx: &mut AppContext,
    title: Option<String>,
    description: Option<String>,
    submit_text: Option<String>,
    primary_color: Option<String>,
    background_color: Option<String>,
    text_color: Option<String>,
    border_radius: Option<String>,
    spacing: Option<String>,
) -> Result<()> {
    let spacing = match spacing {
        Some(s) => Some(
            Spacing::parse(&s)
                .ok_or_else(|| FormzError::Api(format!("Invalid spacing: {}", s)))?,
        ),
        None => None,
    };

    let theme = ThemePatch {
        primary_color,
        background_color,
        text_color,
        border_radius,
        spacing,
    };
    let patch = SettingsPatch {
        title,
        description,
        submit_button_text: submit_text,
        theme: if theme.is_empty() { None } else { Some(theme) },
    };

    if patch.is_empty() {
        let result = ctx.api.list_fields()?;
        if let Some(settings) = &result.settings {
            print_settings(settings);
        }
        return Ok(());
    }

    let result = ctx.api.update_settings(patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_preview(ctx: &mut AppContext, state: &str) -> Result<()> {
    let preview = match state {
        "on" => true,
        "off" => false,
        other => {
            return Err(FormzError::Api(format!(
                "Expected on or off, got: {}",
                other
            )))
        }
    };
    let result = ctx.api.set_preview(preview)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear_form()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_types(category: Option<String>) -> Result<()> {
    let filter = match category {
        Some(c) => Some(
            FieldCategory::parse(&c)
                .ok_or_else(|| FormzError::Api(format!("Unknown category: {}", c)))?,
        ),
        None => None,
    };

    for category in FieldCategory::ALL {
        if filter.is_some() && filter != Some(category) {
            continue;
        }
        println!("\n{}", category.label().bold());
        for ty in FieldType::ALL.iter().filter(|t| t.category() == category) {
            let name = format!("{:<16}", ty.name());
            println!(
                "  {} {:<16} {}",
                name.yellow(),
                ty.display_name(),
                ty.description().dimmed()
            );
        }
    }
    Ok(())
}

fn handle_templates() -> Result<()> {
    for template in templates::all() {
        let id = format!("{:<16}", template.id);
        let meta = format!(
            "{:<10} {} fields",
            template.category.label(),
            template.fields.len()
        );
        println!(
            "  {} {:<24} {}  {}",
            id.yellow(),
            template.name,
            meta.dimmed(),
            template.description.dimmed()
        );
    }
    Ok(())
}

fn handle_template(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.load_template(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(
    ctx: &AppContext,
    pretty: bool,
    output: Option<std::path::PathBuf>,
) -> Result<()> {
    let result = ctx.api.export(pretty)?;
    if let Some(payload) = result.exported {
        match output {
            Some(path) => {
                std::fs::write(&path, payload).map_err(FormzError::Io)?;
                println!("{}", format!("Exported to {}", path.display()).green());
            }
            None => println!("{}", payload),
        }
    }
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: std::path::PathBuf) -> Result<()> {
    let json = std::fs::read_to_string(&path).map_err(FormzError::Io)?;
    let result = ctx.api.import(&json)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_check(ctx: &AppContext, values: Vec<String>) -> Result<()> {
    let listed = ctx.api.list_fields()?.listed_fields;
    let values = parse_values(&listed, &values)?;
    let result = ctx.api.check(&values)?;
    print_validation_errors(&result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_submit(ctx: &AppContext, values: Vec<String>) -> Result<()> {
    let listed = ctx.api.list_fields()?.listed_fields;
    let values = parse_values(&listed, &values)?;

    let mut sink = PrintSink::default();
    let result = ctx.api.submit(&values, &mut sink)?;
    print_validation_errors(&result);
    if let Some(payload) = sink.payload {
        println!("{}", payload);
    }
    print_messages(&result.messages);
    Ok(())
}

/// Submission collaborator for the CLI: renders the accepted payload so the
/// caller can pipe it onward.
#[derive(Default)]
struct PrintSink {
    payload: Option<String>,
}

impl SubmissionSink for PrintSink {
    fn deliver(&mut self, submission: Submission<'_>) -> Result<()> {
        let values: BTreeMap<String, String> = submission
            .values
            .iter()
            .map(|(id, value)| (id.to_string(), value.clone()))
            .collect();
        let payload = serde_json::json!({
            "form": submission.settings.title,
            "values": values,
        });
        self.payload = Some(serde_json::to_string_pretty(&payload).map_err(FormzError::Serialization)?);
        Ok(())
    }
}

fn parse_options(inputs: &[String]) -> Result<Vec<FieldOption>> {
    inputs
        .iter()
        .map(|s| match s.split_once('=') {
            Some((value, label)) => Ok(FieldOption::new(value, label)),
            None => Err(FormzError::Api(format!(
                "Invalid option (expected value=Label): {}",
                s
            ))),
        })
        .collect()
}

fn parse_values(
    listed: &[DisplayField],
    inputs: &[String],
) -> Result<HashMap<FieldId, String>> {
    let mut values = HashMap::new();
    for input in inputs {
        let (field, value) = input.split_once('=').ok_or_else(|| {
            FormzError::Api(format!("Invalid value (expected field=value): {}", input))
        })?;

        let id = match FieldSelector::parse(field) {
            FieldSelector::Position(n) => listed
                .iter()
                .find(|df| df.position == n)
                .map(|df| df.field.id.clone())
                .ok_or_else(|| FormzError::FieldNotFound(field.to_string()))?,
            FieldSelector::Id(id) => listed
                .iter()
                .find(|df| df.field.id == id)
                .map(|df| df.field.id.clone())
                .ok_or_else(|| FormzError::FieldNotFound(field.to_string()))?,
        };
        values.insert(id, value.to_string());
    }
    Ok(values)
}

#[allow(clippy::too_many_arguments)]
fn build_patch(
    label: Option<String>,
    placeholder: Option<String>,
    help_text: Option<String>,
    required: bool,
    optional: bool,
    options: Vec<String>,
    min_length: Option<u32>,
    max_length: Option<u32>,
    pattern: Option<String>,
    message: Option<String>,
    rows: Option<u32>,
    min: Option<f64>,
    max: Option<f64>,
    step: Option<f64>,
) -> Result<FieldPatch> {
    let mut patch = FieldPatch {
        label,
        placeholder,
        help_text,
        rows,
        min,
        max,
        step,
        ..FieldPatch::default()
    };
    if required {
        patch.required = Some(true);
    } else if optional {
        patch.required = Some(false);
    }
    if !options.is_empty() {
        patch.options = Some(parse_options(&options)?);
    }
    if min_length.is_some() || max_length.is_some() || pattern.is_some() || message.is_some() {
        patch.validation = Some(ValidationRules {
            min_length,
            max_length,
            pattern,
            message,
        });
    }
    Ok(patch)
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TYPE_WIDTH: usize = 16;
const SELECT_MARKER: &str = "▸";

fn print_fields(fields: &[DisplayField]) {
    if fields.is_empty() {
        println!("No fields yet. Try `formz add text` or `formz templates`.");
        return;
    }

    for df in fields {
        let left_prefix = if df.selected {
            format!("  {} ", SELECT_MARKER)
        } else {
            "    ".to_string()
        };
        let idx_str = format!("{}. ", df.position);

        let mut flags = Vec::new();
        if df.field.required {
            flags.push("required");
        }
        if !df.field.validation.is_empty() {
            flags.push("rules");
        }
        let flags = flags.join(" ");

        let fixed = left_prefix.width() + idx_str.width() + TYPE_WIDTH + flags.width() + 2;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let label = truncate_to_width(&df.field.label, available);
        let padding = available.saturating_sub(label.width());

        let idx_colored = if df.selected {
            idx_str.yellow()
        } else {
            idx_str.normal()
        };

        // pad before coloring so escape codes don't skew the columns
        let type_str = format!("{:<width$}", df.field.field_type.name(), width = TYPE_WIDTH);

        println!(
            "{}{}{}{}{}{}",
            left_prefix,
            idx_colored,
            label,
            " ".repeat(padding),
            type_str.dimmed(),
            flags.dimmed()
        );
    }
}

fn print_settings(settings: &formz::model::FormSettings) {
    println!("title            = {}", settings.title);
    println!("description      = {}", settings.description);
    println!("submit-text      = {}", settings.submit_button_text);
    println!("primary-color    = {}", settings.theme.primary_color);
    println!("background-color = {}", settings.theme.background_color);
    println!("text-color       = {}", settings.theme.text_color);
    println!("border-radius    = {}", settings.theme.border_radius);
    println!("spacing          = {}", settings.theme.spacing);
}

fn print_validation_errors(result: &CmdResult) {
    for (id, message) in &result.validation_errors {
        let context = result
            .listed_fields
            .iter()
            .find(|df| &df.field.id == id)
            .map(|df| format!("{}. {}", df.position, df.field.label))
            .unwrap_or_else(|| id.to_string());
        println!("  {} {}", context, message.red());
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
