use super::print::{print_data_path, print_full_notes, print_messages, print_summaries};
use super::setup::{Cli, Commands};
use clap::Parser;
use notes::api::NotesApi;
use notes::config::NotesConfig;
use notes::error::{NotesError, Result};
use notes::logging::init_logging;
use notes::store::fs_backend::FsBackend;
use std::path::PathBuf;
use tracing::debug;

struct AppContext {
    api: NotesApi<FsBackend>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    // Logging is diagnostics only; the command still runs without it
    if let Err(e) = init_logging(&config) {
        if config.verbosity > 0 {
            eprintln!("Warning: {}", e);
        }
    }
    debug!(path = %config.data_file.display(), "using notes file");

    let mut ctx = AppContext {
        api: NotesApi::new(FsBackend::new(config.data_file.clone())),
    };

    match cli.command {
        Some(Commands::Add { title, body }) => handle_add(&mut ctx, title, body),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Show { ids }) => handle_show(&ctx, &ids),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, &id),
        Some(Commands::Replace { id, body }) => handle_replace(&mut ctx, &id, body),
        Some(Commands::Append { id, fragment }) => handle_append(&mut ctx, &id, &fragment),
        Some(Commands::Clear) => handle_clear(&mut ctx),
        Some(Commands::Doctor) => handle_doctor(&mut ctx),
        Some(Commands::Path) => handle_path(&ctx),
    }
}

fn resolve_config(cli: &Cli) -> Result<NotesConfig> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    Ok(NotesConfig::resolve(cli.file.clone(), cli.global, &cwd)?.with_verbosity(cli.verbose))
}

fn handle_add(ctx: &mut AppContext, title: String, body: String) -> Result<()> {
    if title.trim().is_empty() {
        return Err(NotesError::InvalidInput("Title cannot be empty".into()));
    }
    let result = ctx.api.add_note(title, body)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_notes()?;
    print_summaries(&result.summaries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, ids: &[String]) -> Result<()> {
    let result = ctx.api.show_notes(ids)?;
    print_full_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_note(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_replace(ctx: &mut AppContext, id: &str, body: String) -> Result<()> {
    let result = ctx.api.replace_body(id, body)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_append(ctx: &mut AppContext, id: &str, fragment: &str) -> Result<()> {
    let result = ctx.api.append_body(id, fragment)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear_notes()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_doctor(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.doctor()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.data_path();
    if let Some(path) = &result.data_path {
        print_data_path(path);
    }
    Ok(())
}
