//! ktags CLI entry point

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use kotlin_tags::config::{FileConfig, Settings};
use kotlin_tags::indexing::{collect_files, tag_files_parallel};
use kotlin_tags::output::{format_kind_table, render};
use kotlin_tags::{Cli, KotlinParser, KtagsError, Lang, LanguageId};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(Some(output)) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("KTAGS_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> kotlin_tags::Result<Option<String>> {
    // 1. Configuration: explicit file, else ./ktags.toml when present
    let file_config = match &cli.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => FileConfig::discover(&std::env::current_dir()?)?,
    };
    let settings = Settings::resolve(cli, file_config)?;
    debug!(?settings, "resolved settings");

    // 2. Register the parser
    let mut parser = KotlinParser::initialize(LanguageId(0));
    parser.enable_only(&settings.kinds);

    if cli.list_kinds {
        return Ok(Some(format_kind_table(parser.kinds())));
    }
    if cli.list_extensions {
        let definition = KotlinParser::definition();
        return Ok(Some(
            definition
                .extensions
                .iter()
                .map(|ext| format!("{}\n", ext))
                .collect(),
        ));
    }

    // 3. Expand the inputs
    let files = expand_paths(&cli.paths, &settings)?;
    debug!(files = files.len(), "collected input files");

    // 4. Tag
    let result = tag_files_parallel(&files, &parser);
    if result.files.is_empty() {
        if let Some((_, err)) = result.errors.into_iter().next() {
            return Err(err);
        }
    } else {
        for (path, err) in &result.errors {
            eprintln!("Warning: {}: {}", path.display(), err);
        }
    }

    // 5. Encode
    let output = render(settings.format, &result.files)?;
    match &cli.output {
        Some(path) => {
            fs::write(path, output)?;
            Ok(None)
        }
        None => Ok(Some(output)),
    }
}

fn expand_paths(paths: &[PathBuf], settings: &Settings) -> kotlin_tags::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            files.extend(collect_files(path, settings.max_depth, &settings.exclude));
        } else if path.exists() {
            Lang::from_path(path)?;
            files.push(path.clone());
        } else {
            return Err(KtagsError::FileNotFound {
                path: path.display().to_string(),
            });
        }
    }
    Ok(files)
}
