//! gitview CLI entry point

use std::io::{self, BufRead};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gitview_engine::cli::{Cli, Commands, IndexArgs, OutputFormat, RepoArgs, WatchArgs};
use gitview_engine::server::{EventEmitter, SessionController, WatcherConfig};
use gitview_engine::{snapshot, EngineError, RepoFile, Result};

fn main() -> ExitCode {
    match run() {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run() -> Result<String> {
    // Logs go to stderr so JSON events and snapshot output own stdout.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Files(args) => run_files(&cli, args),
        Commands::Refs(args) => run_refs(&cli, args),
        Commands::Objects(args) => run_objects(&cli, args),
        Commands::Head(args) => run_head(&cli, args),
        Commands::Index(args) => run_index(&cli, args),
        Commands::Watch(args) => run_watch(args),
    }
}

fn run_files(cli: &Cli, args: &RepoArgs) -> Result<String> {
    let files = snapshot::list_files(&args.repo)?;
    if cli.verbose {
        eprintln!("{} files under {}", files.len(), args.repo.display());
    }
    match cli.format {
        OutputFormat::Json => to_json(&files),
        OutputFormat::Text => Ok(render_file_lines(&files)),
    }
}

fn run_refs(cli: &Cli, args: &RepoArgs) -> Result<String> {
    let refs = snapshot::list_refs(&args.repo)?;
    match cli.format {
        OutputFormat::Json => to_json(&refs),
        OutputFormat::Text => {
            let mut out = String::new();
            for r in &refs {
                out.push_str(&format!("{} {}\n", r.content.trim_end(), r.name));
            }
            Ok(out)
        }
    }
}

fn run_objects(cli: &Cli, args: &RepoArgs) -> Result<String> {
    let objects = snapshot::list_objects(&args.repo)?;
    match cli.format {
        OutputFormat::Json => to_json(&objects),
        OutputFormat::Text => {
            let mut out = String::new();
            for o in &objects {
                out.push_str(&format!("{} {}\n", o.hash, o.kind));
            }
            Ok(out)
        }
    }
}

fn run_head(cli: &Cli, args: &RepoArgs) -> Result<String> {
    match snapshot::read_head(&args.repo)? {
        Some(head) => match cli.format {
            OutputFormat::Json => to_json(&head),
            OutputFormat::Text => Ok(head.content),
        },
        None => Ok(String::new()),
    }
}

fn run_index(cli: &Cli, args: &IndexArgs) -> Result<String> {
    if args.raw {
        return match snapshot::index_snapshot(&args.repo)? {
            Some(index) => Ok(format!("{}\n", index.content)),
            None => Ok(String::new()),
        };
    }

    let entries = snapshot::index_entries(&args.repo)?;
    match cli.format {
        OutputFormat::Json => to_json(&entries),
        OutputFormat::Text => {
            let mut out = String::new();
            for e in &entries {
                out.push_str(&format!("{} {} {} {}\n", e.mode, e.hash, e.slot, e.filename));
            }
            Ok(out)
        }
    }
}

fn run_watch(args: &WatchArgs) -> Result<String> {
    if !gitview_engine::is_git_repo(&args.repo) {
        tracing::warn!("{} is not inside a git work tree", args.repo.display());
    }

    let emitter = Arc::new(EventEmitter::new(true));
    let config = WatcherConfig {
        poll_interval: Duration::from_millis(args.poll_interval_ms),
    };
    let mut controller = SessionController::with_config(emitter, config);
    controller.set_repo_path(args.repo.clone())?;

    eprintln!("Watching {} (close stdin to stop)", args.repo.display());

    // Block until the driving process closes stdin.
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if line.is_err() {
            break;
        }
    }

    controller.stop();
    Ok(String::new())
}

fn render_file_lines(files: &[RepoFile]) -> String {
    let mut out = String::new();
    for f in files {
        let mod_time: chrono::DateTime<chrono::Utc> = f.mod_time.into();
        out.push_str(&format!("{} {}\n", mod_time.to_rfc3339(), f.path.display()));
    }
    out
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| EngineError::Encode {
        message: format!("JSON serialization failed: {}", e),
    })?;
    Ok(format!("{}\n", json))
}
