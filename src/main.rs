use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::time::Duration;

use vdata_nav::cli::{format_folds, format_jumps, format_outline, CliArgs, Command};
use vdata_nav::host::{BrowserSurface, DocsSurface, FileHost, LogSurface, TextHost};
use vdata_nav::model::{Document, EditorSession, OutlineView};
use vdata_nav::runtime::Runtime;
use vdata_nav::scheduler::SystemTimers;
use vdata_nav::schema::{doc_url, FileSchemaStore, MemorySchemaStore, SchemaStore};
use vdata_nav::EditorConfig;

/// Upper bound on how long the watch loop sleeps between polls
const POLL_INTERVAL: Duration = Duration::from_millis(20);

fn main() -> Result<()> {
    vdata_nav::tracing::init();

    let args = CliArgs::parse();
    let config = match &args.config {
        Some(path) => EditorConfig::load_from(path),
        None => EditorConfig::load(),
    };

    match args.command {
        Command::Outline { file, json } => {
            let view = load_session(&file, config)?.view();
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", format_outline(&view));
            }
        }
        Command::Folds { file, json } => {
            let view = load_session(&file, config)?.view();
            if json {
                println!("{}", serde_json::to_string_pretty(&view.folds)?);
            } else {
                print!("{}", format_folds(&view));
            }
        }
        Command::Inspect { file, line, open } => inspect(&file, line, open, config)?,
        Command::Watch { file, line, open } => watch(&file, line, open, config)?,
    }

    Ok(())
}

fn load_session(path: &Path, config: EditorConfig) -> Result<EditorSession> {
    let document = Document::from_file(path.to_path_buf())
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(EditorSession::with_document(document, config))
}

/// Persist to the config directory when there is one
fn schema_store() -> Box<dyn SchemaStore> {
    let store = FileSchemaStore::new();
    if store.path().is_some() {
        Box::new(store)
    } else {
        tracing::warn!("No config directory available, schema selection will not persist");
        Box::new(MemorySchemaStore::default())
    }
}

fn docs_surface(open: bool) -> Box<dyn DocsSurface> {
    if open {
        Box::new(BrowserSurface)
    } else {
        Box::new(LogSurface::new())
    }
}

fn inspect(file: &Path, line: usize, open: bool, config: EditorConfig) -> Result<()> {
    let mut runtime = Runtime::start(
        FileHost::new(file),
        SystemTimers::new(),
        schema_store(),
        docs_surface(open),
        config,
    )?;

    runtime.host_mut().set_position(line, 1)?;
    runtime.pump();

    let session = runtime.session();
    match session.nav.active_item() {
        Some(item) => println!(
            "active: {} {} (line {})",
            item.kind.label(),
            item.label,
            item.line
        ),
        None => println!("active: none"),
    }
    print!("{}", format_jumps(&runtime.view()));

    match session.schema.current() {
        Some(schema) => {
            println!("schema: {}", schema.name);
            if let Ok(url) = doc_url(&session.config.docs_base_url, &schema.name) {
                println!("docs: {}", url);
            }
        }
        None => println!("schema: none"),
    }
    Ok(())
}

fn print_view(view: &OutlineView) {
    println!("-- revision {} --", view.revision);
    print!("{}", format_outline(view));
}

fn watch(file: &Path, line: Option<usize>, open: bool, config: EditorConfig) -> Result<()> {
    let mut runtime = Runtime::start(
        FileHost::watched(file)?,
        SystemTimers::new(),
        schema_store(),
        docs_surface(open),
        config,
    )?;

    if let Some(line) = line {
        runtime.host_mut().set_position(line, 1)?;
    }
    runtime.pump();
    print_view(&runtime.view());

    loop {
        let mut needs_redraw = runtime.pump();
        needs_redraw |= runtime.tick();
        if needs_redraw {
            print_view(&runtime.view());
        }

        let sleep = runtime
            .timers()
            .time_until_next()
            .map_or(POLL_INTERVAL, |d| d.min(POLL_INTERVAL));
        std::thread::sleep(sleep);
    }
}
