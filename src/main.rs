use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use ao3_history::export::{ExportFormat, ExportOptions, export_to_path};
use ao3_history::ingestion::{
    ImportOptions, ImportSource, ImportSourceKind, LogObserver, ValidationMode, import,
};
use ao3_history::processing::{DEFAULT_ROWS_PER_PAGE, available_filters, build_chart_data, summarize};
use ao3_history::session::{Session, SessionOptions};
use ao3_history::types::{
    Bound, CompletionStatus, FilterCriteria, SortDirection, SortField, SortSpec, Work,
};

/// Browse, summarise and re-export an AO3 reading-history export.
#[derive(Debug, Parser)]
#[command(name = "ao3-history", version)]
struct Cli {
    /// Minimum log level written to stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Validate every record instead of a leading sample
    #[arg(long)]
    exhaustive: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// History export file (JSON)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Value of a share link's `data` parameter
    #[arg(long)]
    data: Option<String>,

    /// Full share link carrying a `data` parameter
    #[arg(long)]
    url: Option<String>,
}

impl InputArgs {
    fn into_source(self) -> Option<ImportSource> {
        self.file
            .map(ImportSource::File)
            .or(self.data.map(ImportSource::DataParam))
            .or(self.url.map(ImportSource::Url))
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print one page of the filtered, sorted table
    List(ListArgs),
    /// Print summary statistics as JSON
    Stats,
    /// Print chart data as JSON
    Charts,
    /// Print the values available to each filter as JSON
    Filters,
    /// Write the whole collection to a file
    Export {
        #[arg(long)]
        format: ExportFormat,
        /// Defaults to ao3_history.<format> in the working directory
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
struct ListArgs {
    #[arg(long, default_value = "")]
    search: String,
    #[arg(long = "fandom")]
    fandoms: Vec<String>,
    #[arg(long = "author")]
    authors: Vec<String>,
    #[arg(long = "rating")]
    ratings: Vec<String>,
    #[arg(long = "category")]
    categories: Vec<String>,
    #[arg(long = "tag")]
    tags: Vec<String>,
    #[arg(long, default_value_t = 0)]
    min_words: u64,
    #[arg(long)]
    max_words: Option<u64>,
    #[arg(long, default_value_t = 0)]
    min_visits: u64,
    #[arg(long)]
    max_visits: Option<u64>,
    /// all, complete or incomplete
    #[arg(long, default_value = "all")]
    status: CompletionStatus,
    /// Dotted field path, e.g. stats.wordCount or userStats.lastVisited
    #[arg(long, default_value = "userStats.visits")]
    sort: SortField,
    /// Sort ascending
    #[arg(long, conflicts_with = "desc")]
    asc: bool,
    /// Sort descending (the default when neither flag is given)
    #[arg(long)]
    desc: bool,
    #[arg(long, default_value_t = 1)]
    page: usize,
    #[arg(long, default_value_t = DEFAULT_ROWS_PER_PAGE)]
    per_page: usize,
}

impl ListArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            fandoms: self.fandoms.iter().cloned().collect(),
            authors: self.authors.iter().cloned().collect(),
            ratings: self.ratings.iter().cloned().collect(),
            categories: self.categories.iter().cloned().collect(),
            tags: self.tags.iter().cloned().collect(),
            min_word_count: self.min_words,
            max_word_count: Bound::from(self.max_words),
            min_visits: self.min_visits,
            max_visits: Bound::from(self.max_visits),
            completion: self.status,
        }
    }

    fn sort_spec(&self) -> SortSpec {
        let direction = match (self.asc, self.desc) {
            (true, _) => SortDirection::Ascending,
            (_, true) => SortDirection::Descending,
            (false, false) => SortDirection::default(),
        };
        SortSpec::new(self.sort, direction)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn init_logger(level: LogLevel) {
    env_logger::Builder::new()
        .filter_level(level.into())
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    let source = cli
        .input
        .into_source()
        .context("one of --file, --data or --url is required")?;
    let options = ImportOptions {
        validation: if cli.exhaustive {
            ValidationMode::Exhaustive
        } else {
            ValidationMode::default()
        },
        observer: Some(Arc::new(LogObserver)),
        ..ImportOptions::default()
    };
    let works = import(&source, &options).map_err(|e| {
        let message = e.user_message(source.kind() == ImportSourceKind::Url);
        anyhow::Error::new(e).context(message)
    })?;

    match cli.command {
        Command::List(args) => list(works, source.kind(), &args),
        Command::Stats => print_json(&summarize(&works)),
        Command::Charts => print_json(&build_chart_data(&works)),
        Command::Filters => print_json(&available_filters(&works)),
        Command::Export { format, output } => {
            let path = output.unwrap_or_else(|| PathBuf::from(format.default_file_name()));
            export_to_path(&works, format, &path, &ExportOptions::default())
                .map_err(|e| anyhow::Error::new(e).context(format!("writing {}", path.display())))?;
            println!("wrote {} works to {}", works.len(), path.display());
            Ok(())
        }
    }
}

fn list(works: Vec<Work>, kind: ImportSourceKind, args: &ListArgs) -> Result<()> {
    let mut session = Session::new(SessionOptions {
        rows_per_page: args.per_page,
        sort: args.sort_spec(),
    });
    let ticket = session.begin_import(kind);
    session.finish_import(ticket, Ok(works));
    session.set_search_term(args.search.as_str());
    session.set_criteria(args.criteria());
    session.set_page(args.page);

    let page = session.current_page();
    for work in page.works.iter().map(Work::for_display) {
        println!(
            "{}\t{}\t{}\t{} words\t{} visits\t{}",
            work.id,
            work.title,
            work.author,
            work.stats.word_count,
            work.user_stats.visits,
            work.user_stats.last_visited
        );
    }
    println!(
        "page {} of {} ({} matching works)",
        page.page,
        page.total_pages.max(1),
        page.total_rows
    );
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
