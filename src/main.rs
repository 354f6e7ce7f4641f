use anyhow::Result;
use clap::{ArgGroup, Parser};
use media_locator::resolve::split_list;
use media_locator::{FilterSpec, LocatorError, OutputTarget, ResolvePipeline, SqliteCatalog};
use std::path::PathBuf;

const DEFAULT_PLEX_DB: &str = "/var/lib/plexmediaserver/Library/Application Support/Plex Media Server/Plug-in Support/Databases/com.plexapp.plugins.library.db";

#[derive(Parser, Debug)]
#[command(name = "media-locator", version)]
#[command(about = "List the media files of Plex items selected by tag", long_about = None)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["tags", "no_tags", "list_all"])
))]
struct Args {
    /// Select items with any of these comma-separated tags
    #[arg(short = 't', long)]
    tags: Option<String>,

    /// Select items with no tag associated
    #[arg(long)]
    no_tags: bool,

    /// List every media part (all libraries unless --libraries is given)
    #[arg(long)]
    list_all: bool,

    /// Restrict to these comma-separated library names
    #[arg(short = 'l', long)]
    libraries: Option<String>,

    /// Path to the Plex library database
    #[arg(short = 'd', long, default_value = DEFAULT_PLEX_DB)]
    plex_db: String,

    /// Add this prefix to the file paths
    #[arg(long)]
    add_prefix: Option<String>,

    /// Remove this prefix from the file paths
    #[arg(long)]
    strip_prefix: Option<String>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long)]
    output_file: Option<String>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Args {
    /// Build the filter this invocation asks for
    fn filter_spec(&self) -> Result<FilterSpec, LocatorError> {
        let mut spec = if self.list_all {
            FilterSpec::all_items()
        } else if self.no_tags {
            FilterSpec::no_tags()
        } else {
            let tags = split_list(self.tags.as_deref().unwrap_or_default());
            if tags.is_empty() {
                return Err(LocatorError::InvalidFilter(
                    "no tags specified, use --tags, --no-tags or --list-all".to_string(),
                ));
            }
            FilterSpec::by_tags(tags)
        };

        if let Some(libraries) = &self.libraries {
            spec = spec.with_libraries(split_list(libraries));
        }
        if let Some(prefix) = &self.add_prefix {
            spec = spec.with_add_prefix(prefix.as_str());
        }
        if let Some(prefix) = &self.strip_prefix {
            spec = spec.with_strip_prefix(prefix.as_str());
        }
        Ok(spec)
    }
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(&args) {
        log::error!("{:#}", e);
        let code = e
            .downcast_ref::<LocatorError>()
            .map_or(1, LocatorError::exit_code);
        std::process::exit(code);
    }
}

fn run(args: &Args) -> Result<()> {
    let spec = args.filter_spec()?;

    // Expand ~ in paths
    let db_path = PathBuf::from(shellexpand::tilde(&args.plex_db).as_ref());
    let output = OutputTarget::from_path(
        args.output_file
            .as_deref()
            .map(|p| PathBuf::from(shellexpand::tilde(p).as_ref())),
    );

    let catalog = SqliteCatalog::open(&db_path)?;
    let pipeline = ResolvePipeline::new(spec, catalog);
    log::debug!("Filter: {:?}", pipeline.spec());

    let paths = pipeline.resolve()?;

    // Only touch the destination once the whole list is known
    output.write_lines(&paths)?;
    log::debug!("Wrote {} paths", paths.len());

    Ok(())
}
