//! # CLI Layer
//!
//! Parses arguments, builds the session's [`QueryState`], calls the
//! [`EduhubApi`] and prints what comes back.
//!
//! The query state starts from the configured defaults
//! (`EduhubConfig::initial_state`). Each query flag is turned into one reducer
//! [`Action`], so a command line is replayed exactly as the equivalent series
//! of user gestures would be.
//!
//! Diagnostics go through `tracing` to stderr: warnings only by default, debug
//! output with `--verbose`, or whatever `RUST_LOG` asks for.

use super::render::{
    print_messages, render_listing, render_navigation, render_preview, render_text_list,
};
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, BrowseCommands, Cli,
    Commands, MiscCommands, QueryArgs, ResourceCommands,
};
use super::theme::colors_enabled;
use clap::Parser;
use eduhub::api::{ConfigAction, EduhubApi};
use eduhub::error::Result;
use eduhub::init::initialize;
use eduhub::model::{ResourceId, Scope};
use eduhub::state::{reduce, Action, CategoryFilter, QueryState, SortKey};
use eduhub::store::memory::InMemoryStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: EduhubApi<InMemoryStore>,
    scope: Scope,
    state: QueryState,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    if let Some(Commands::Misc(MiscCommands::Help { command })) = &cli.command {
        return handle_help(command.clone());
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Browse(cmd)) => match cmd {
            BrowseCommands::List { search, query } => handle_list(&mut ctx, search, query),
            BrowseCommands::Search { term, query } => {
                handle_list(&mut ctx, Some(term.join(" ")), query)
            }
            BrowseCommands::Categories => handle_categories(&mut ctx),
            BrowseCommands::Types => handle_types(&mut ctx),
            BrowseCommands::Nav => handle_nav(&mut ctx),
        },
        Some(Commands::Resource(cmd)) => match cmd {
            ResourceCommands::View { id } => handle_view(&mut ctx, id),
            ResourceCommands::Download { id } => handle_download(&mut ctx, id),
            ResourceCommands::Favorite { id } => handle_favorite(&mut ctx, id),
            ResourceCommands::Share { id } => handle_share(&mut ctx, id),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Config { key, value } => handle_config(&mut ctx, key, value),
            MiscCommands::Init => handle_init(&ctx),
            MiscCommands::Help { command } => handle_help(command),
        },
        None => handle_list(&mut ctx, None, QueryArgs::default()),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("eduhub=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A second subscriber (tests driving `run` twice) is not an error
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir()?;
    let ctx = initialize(&cwd, cli.global, cli.catalog.clone())?;
    debug!(scope = ?ctx.scope, "context initialized");

    Ok(AppContext {
        api: ctx.api,
        scope: ctx.scope,
        state: ctx.initial_state,
        use_color: colors_enabled(cli.no_color),
    })
}

/// Replays the query flags as reducer actions on top of `base`.
fn query_state(base: &QueryState, search: Option<String>, query: QueryArgs) -> QueryState {
    let mut actions = Vec::new();
    if let Some(search) = search {
        actions.push(Action::SetSearch(search));
    }
    if let Some(category) = query.category {
        actions.push(Action::SetCategory(CategoryFilter::from_selection(&category)));
    }
    if let Some(resource_type) = query.resource_type {
        actions.push(Action::SetType(resource_type));
    }
    if let Some(sort) = query.sort {
        actions.push(Action::SetSort(SortKey::from_key(&sort)));
    }
    if let Some(view) = query.view {
        actions.push(Action::SetView(view));
    }

    actions
        .into_iter()
        .fold(base.clone(), |state, action| reduce(&state, action))
}

fn handle_list(ctx: &mut AppContext, search: Option<String>, query: QueryArgs) -> Result<()> {
    ctx.state = query_state(&ctx.state, search, query);
    debug!(state = ?ctx.state, "listing");

    let result = ctx.api.list_resources(&ctx.state)?;
    print!("{}", render_listing(&result, ctx.use_color));
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, id: ResourceId) -> Result<()> {
    ctx.state = reduce(&ctx.state, Action::OpenPreview(id));

    if let Some(result) = ctx.api.preview(&ctx.state)? {
        if let Some(resource) = &result.preview {
            print!("{}", render_preview(resource, ctx.use_color));
        }
        print_messages(&result.messages, ctx.use_color);
    }
    Ok(())
}

fn handle_download(ctx: &mut AppContext, id: ResourceId) -> Result<()> {
    let result = ctx.api.download(id)?;
    print_messages(&result.messages, ctx.use_color);

    let lines: Vec<String> = result
        .downloads
        .iter()
        .map(|request| format!("  {}", request.url))
        .collect();
    if !lines.is_empty() {
        print!("{}", render_text_list(&lines, "", ctx.use_color));
    }
    Ok(())
}

fn handle_favorite(ctx: &mut AppContext, id: ResourceId) -> Result<()> {
    let result = ctx.api.toggle_favorite(id)?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_share(ctx: &mut AppContext, id: ResourceId) -> Result<()> {
    let result = ctx.api.share(id)?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_categories(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.categories()?;
    print!(
        "{}",
        render_text_list(&result.categories, "No categories.", ctx.use_color)
    );
    Ok(())
}

fn handle_types(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.types();
    let lines: Vec<String> = result
        .types
        .iter()
        .map(|t| format!("{:<14}{}", t.as_str(), t.label()))
        .collect();
    print!("{}", render_text_list(&lines, "No types.", ctx.use_color));
    Ok(())
}

fn handle_nav(ctx: &mut AppContext) -> Result<()> {
    print!("{}", render_navigation(&ctx.api.navigation(), ctx.use_color));
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(ctx.scope, action)?;
    if show_all {
        let lines: Vec<String> = result
            .config
            .as_ref()
            .map(|config| {
                config
                    .list_all()
                    .into_iter()
                    .map(|(k, v)| format!("{} = {}", k, v))
                    .collect()
            })
            .unwrap_or_default();
        print!(
            "{}",
            render_text_list(&lines, "No configuration values.", ctx.use_color)
        );
    }
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init(ctx.scope)?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_help(command: Option<String>) -> Result<()> {
    match command {
        Some(cmd) => print_help_for_command(&cmd),
        None => print_grouped_help(),
    }
    Ok(())
}
