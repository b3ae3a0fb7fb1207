use std::collections::HashMap;
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use copiloto::adapter;
use copiloto::api::{CmdMessage, ConfigAction, CopilotoApi, FavoriteAction, ListedItem, MessageLevel};
use copiloto::config::CopilotoConfig;
use copiloto::error::{CopilotoError, Result};
use copiloto::favorites::FavoritesStore;
use copiloto::model::{CatalogKind, NewItem};
use copiloto::query::QueryFilter;
use copiloto::store::fs::FileCatalog;
use directories::ProjectDirs;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, FavCommands};

fn main() {
    let cli = Cli::parse();

    stderrlog::new()
        .module(module_path!())
        .module("copiloto")
        .verbosity(cli.verbose as usize)
        .init()
        .ok();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: CopilotoApi<FileCatalog>,
    json: bool,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Init) => handle_init(&mut ctx),
        Some(Commands::Courses {
            category,
            level,
            search,
        }) => {
            let axes = [("category", category), ("level", level)];
            handle_listing(&mut ctx, CatalogKind::Courses, &axes, search)
        }
        Some(Commands::Resources {
            category,
            sector,
            stage,
            search,
        }) => {
            let axes = [("category", category), ("sector", sector), ("stage", stage)];
            handle_listing(&mut ctx, CatalogKind::Resources, &axes, search)
        }
        Some(Commands::Add {
            kind,
            title,
            description,
            instructor,
            fields,
        }) => handle_add(&mut ctx, kind, title, description, instructor, fields),
        Some(Commands::Fav { action }) => handle_fav(&mut ctx, action),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_listing(&mut ctx, CatalogKind::Courses, &[], None),
    }
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Ok(dir) = std::env::var("COPILOTO_DATA_DIR") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let proj_dirs = ProjectDirs::from("com", "copiloto", "copiloto")
        .ok_or_else(|| CopilotoError::Store("Could not determine a data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = CopilotoConfig::load(&data_dir).unwrap_or_default();
    let favorites = FavoritesStore::load(&data_dir)?;
    let store = FileCatalog::new(&data_dir);
    let api = CopilotoApi::new(store, favorites, config, data_dir);

    Ok(AppContext {
        api,
        json: cli.json,
    })
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_listing(
    ctx: &mut AppContext,
    kind: CatalogKind,
    axes: &[(&str, Option<String>)],
    search: Option<String>,
) -> Result<()> {
    if ctx.json {
        let mut params = HashMap::new();
        for (name, value) in axes {
            if let Some(value) = value {
                params.insert(name.to_string(), value.clone());
            }
        }
        if let Some(term) = search {
            params.insert("search".to_string(), term);
        }
        let reply = adapter::handle_query(ctx.api.store(), kind, &params);
        println!("{}", reply.body);
        if !reply.is_success() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let mut filter = QueryFilter::new();
    for (name, value) in axes {
        if let Some(value) = value {
            filter.axes.insert(name.to_string(), value.clone());
        }
    }
    filter.search = search;

    let result = ctx.api.list(kind, &filter)?;
    print_items(&result.listed_items);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    kind: String,
    title: String,
    description: String,
    instructor: Option<String>,
    fields: Vec<String>,
) -> Result<()> {
    let kind: CatalogKind = kind.parse()?;

    let mut draft = NewItem::new(title, description);
    if let Some(name) = instructor {
        draft = draft.with_instructor(name);
    }
    for field in &fields {
        let (key, value) = field.split_once('=').ok_or_else(|| {
            CopilotoError::Api(format!("Invalid field '{}', expected KEY=VALUE", field))
        })?;
        draft = draft.with_field(key, value);
    }

    if ctx.json {
        let body = serde_json::to_string(&draft).map_err(CopilotoError::Serialization)?;
        let reply = adapter::handle_create(ctx.api.store_mut(), kind, &body);
        println!("{}", reply.body);
        if !reply.is_success() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let result = ctx.api.create(kind, draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_fav(ctx: &mut AppContext, action: FavCommands) -> Result<()> {
    let result = match action {
        FavCommands::Add { kind, id } => {
            ctx.api.favorite(kind.parse()?, id, FavoriteAction::Add)?
        }
        FavCommands::Rm { kind, id } => {
            ctx.api.favorite(kind.parse()?, id, FavoriteAction::Remove)?
        }
        FavCommands::Toggle { kind, id } => {
            ctx.api.favorite(kind.parse()?, id, FavoriteAction::Toggle)?
        }
        FavCommands::List { kind } => {
            let result = ctx.api.favorites(kind.parse()?)?;
            print_items(&result.listed_items);
            result
        }
    };

    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (Some(key), Some(value)) => ConfigAction::Set { key, value },
        (Some(key), None) => {
            return Err(CopilotoError::Api(format!("Missing value for '{}'", key)));
        }
        (None, _) => ConfigAction::ShowAll,
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("include-inactive = {}", config.include_inactive);
        match config.list_limit {
            Some(limit) => println!("list-limit = {}", limit),
            None => println!("list-limit = none"),
        }
    }
    print_messages(&result.messages);
    Ok(())
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

const TIME_WIDTH: usize = 14;
const FAV_MARKER: &str = "★";

fn line_width() -> usize {
    let (_, cols) = console::Term::stdout().size();
    (cols as usize).clamp(70, 110)
}

fn print_items(items: &[ListedItem]) {
    if items.is_empty() {
        println!("No items found.");
        return;
    }

    let width = line_width();

    for li in items {
        let idx_str = format!("{}. ", li.item.id);
        let left_prefix = if li.is_favorite {
            format!(" {} ", FAV_MARKER)
        } else {
            "   ".to_string()
        };

        let category = li.item.field("category").unwrap_or("-");
        let tag = format!(" [{}]", category);

        let time_ago = format_time_ago(li.item.created_at);

        let text = if li.item.description.is_empty() {
            li.item.title.clone()
        } else {
            format!("{} - {}", li.item.title, li.item.description)
        };

        let fixed = left_prefix.width() + idx_str.width() + tag.width() + TIME_WIDTH + 2;
        let available = width.saturating_sub(fixed);
        let text_display = truncate_to_width(&text, available);
        let padding = available.saturating_sub(text_display.width());

        let idx_colored = if li.is_favorite {
            idx_str.yellow()
        } else {
            idx_str.normal()
        };
        let text_colored = if li.item.is_active {
            text_display.normal()
        } else {
            text_display.dimmed()
        };

        println!(
            "{}{}{}{}{}  {}",
            left_prefix,
            idx_colored,
            text_colored,
            tag.cyan(),
            " ".repeat(padding),
            time_ago.dimmed()
        );
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

fn format_time_ago(timestamp: chrono::DateTime<chrono::Utc>) -> String {
    let duration = chrono::Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
