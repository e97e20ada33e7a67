use clap::Parser;
use eogtricks::application::{
    init::init, ConfigService, EditTagsService, ListTagsService, QuickMoveService,
};
use eogtricks::cli::{
    format_edit_outcome, format_plugin_list, format_tag_list, format_tagged_name, Cli, Commands,
};
use eogtricks::domain::tags::accepts_entry_text;
use eogtricks::error::Result;
use eogtricks::infrastructure::FileSystemRepository;
use eogtricks::plugins::catalog;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr. RUST_LOG wins; EOGTRICKS_DEBUG turns on debug output.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if std::env::var_os("EOGTRICKS_DEBUG").is_some() {
            EnvFilter::new("eogtricks=debug")
        } else {
            EnvFilter::new("eogtricks=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => init(&path),
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!(
                    "quick_move_target = {}",
                    config
                        .quick_move_target
                        .map(|p| p.display().to_string())
                        .unwrap_or_default()
                );
                println!("page_scroll_fraction = {}", config.page_scroll_fraction);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: eogtricks config [--list | <key> [<value>]]");
                println!("Valid keys: quick_move_target, page_scroll_fraction, created");
                Ok(())
            }
        }
        Commands::Show { files } => {
            let service = EditTagsService::local();
            for file in files {
                let session = service.begin(&file)?;
                print!("{}", format_tagged_name(session.original(), session.tagged()));
            }
            Ok(())
        }
        Commands::Edit {
            file,
            tags,
            dry_run,
        } => {
            let service = EditTagsService::local();
            let edit = match tags {
                Some(tags) => tags,
                None => match prompt_for_tags(&service, &file)? {
                    Some(tags) => tags,
                    None => {
                        println!("Cancelled");
                        return Ok(());
                    }
                },
            };

            let outcome = service.apply(&file, &edit, dry_run)?;
            println!("{}", format_edit_outcome(&outcome));
            Ok(())
        }
        Commands::Tags { dir, recursive } => {
            let tags = ListTagsService::local().execute(&dir, recursive)?;
            print!("{}", format_tag_list(&tags));
            if tags.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Move { files, to } => {
            let config = FileSystemRepository::load_or_default()?;
            let moved = QuickMoveService::local(config).execute(&files, to.as_deref())?;
            for path in moved {
                println!("Moved to {}", path.display());
            }
            Ok(())
        }
        Commands::Plugins => {
            let config = FileSystemRepository::load_or_default()?;
            print!("{}", format_plugin_list(&catalog(&config)));
            Ok(())
        }
    }
}

/// Show the current tags and read the edited line from stdin.
/// Returns `None` when stdin is closed without input.
fn prompt_for_tags(service: &EditTagsService, file: &Path) -> Result<Option<String>> {
    let session = service.begin(file)?;

    let mut stderr = io::stderr();
    writeln!(stderr, "Editing tags for “{}”", session.original())?;
    write!(stderr, "Tags [{}]: ", session.edit_string())?;
    stderr.flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let line = line.trim_end_matches(['\r', '\n']);

    // An empty answer keeps the current tags.
    if line.trim().is_empty() {
        return Ok(Some(session.edit_string().to_string()));
    }
    if !accepts_entry_text(line) {
        tracing::warn!("characters [ ] ; , are not allowed in tags and become _");
    }
    Ok(Some(line.to_string()))
}
