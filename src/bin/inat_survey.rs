use std::process::ExitCode;
use std::time::Duration;

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use inat_occurrence_survey::app::{App, ClearResult, PruneResult};
use inat_occurrence_survey::cache::{
    CacheStore, CachedHttp, DEFAULT_CACHE_TTL, MIN_REQUEST_INTERVAL, Pacer,
};
use inat_occurrence_survey::config::{ConfigLoader, SurveyConfig};
use inat_occurrence_survey::domain::ElevationSource;
use inat_occurrence_survey::elevation::ElevationProvider;
use inat_occurrence_survey::error::SurveyError;
use inat_occurrence_survey::inat::InatHttpClient;
use inat_occurrence_survey::lookup::LabelCatalog;
use inat_occurrence_survey::output::{ConsoleOutput, JsonOutput, OutputMode};

#[derive(Parser)]
#[command(name = "inat-survey")]
#[command(
    about = "Occurrence survey over the iNaturalist API with elevation and place enrichment"
)]
#[command(version, author)]
struct Cli {
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Survey a species in a place or bounding box")]
    Run(RunArgs),
    #[command(about = "Maintain the response cache")]
    Cache(CacheArgs),
}

#[derive(Args)]
struct RunArgs {
    #[arg(long)]
    species: Option<String>,

    #[arg(long, conflicts_with = "bbox")]
    place: Option<String>,

    /// Corners as swlat,swlng,nelat,nelng.
    #[arg(long)]
    bbox: Option<String>,

    #[arg(long)]
    term_id: Option<u32>,

    #[arg(long)]
    term_value_id: Option<u32>,

    #[arg(long, value_enum)]
    elevation_provider: Option<ElevationSource>,

    #[arg(long)]
    per_page: Option<u32>,

    #[arg(long)]
    output_dir: Option<String>,

    #[arg(long)]
    cache_dir: Option<String>,

    #[arg(long)]
    cache_ttl_secs: Option<u64>,

    #[arg(long)]
    no_cache: bool,

    #[arg(long)]
    config: Option<String>,
}

#[derive(Args)]
struct CacheArgs {
    #[command(subcommand)]
    command: CacheCommand,

    #[arg(long)]
    cache_dir: Option<String>,

    #[arg(long)]
    cache_ttl_secs: Option<u64>,
}

#[derive(Subcommand)]
enum CacheCommand {
    #[command(about = "Delete every cached response")]
    Clear,
    #[command(about = "Delete cached responses past their TTL")]
    Prune,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(survey) = report.downcast_ref::<SurveyError>() {
            return ExitCode::from(map_exit_code(survey));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &SurveyError) -> u8 {
    match error {
        SurveyError::TaxonNotFound(_)
        | SurveyError::PlaceNotFound(_)
        | SurveyError::MissingConfig
        | SurveyError::ConfigRead(_)
        | SurveyError::ConfigParse(_)
        | SurveyError::InvalidBoundingBox(_)
        | SurveyError::InvalidRequest(_) => 2,
        SurveyError::HttpClient(_)
        | SurveyError::InatHttp(_)
        | SurveyError::UpstreamStatus { .. }
        | SurveyError::ElevationHttp(_)
        | SurveyError::ElevationStatus { .. }
        | SurveyError::ElevationLookup(_) => 3,
        _ => 1,
    }
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Console
    };

    match cli.command {
        Commands::Run(args) => run_survey(args, output_mode),
        Commands::Cache(args) => run_cache(args, output_mode),
    }
}

fn run_survey(args: RunArgs, output_mode: OutputMode) -> miette::Result<()> {
    let file_config = match args.config.as_deref() {
        Some(path) => ConfigLoader::resolve(Some(path)).into_diagnostic()?,
        None => match ConfigLoader::resolve(None) {
            Ok(config) => config,
            Err(SurveyError::MissingConfig) => SurveyConfig::default(),
            Err(err) => return Err(err).into_diagnostic(),
        },
    };

    let overrides = SurveyConfig {
        species: args.species,
        place: args.place,
        bbox: args.bbox,
        term_id: args.term_id,
        term_value_id: args.term_value_id,
        elevation_provider: args.elevation_provider,
        per_page: args.per_page,
        output_dir: args.output_dir,
        cache_dir: args.cache_dir,
        cache_ttl_secs: args.cache_ttl_secs,
    };
    let merged = file_config.merged(overrides);

    let elevation_source = merged.elevation_provider.unwrap_or(ElevationSource::Usgs);
    let cache_ttl = merged
        .cache_ttl_secs
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_CACHE_TTL);

    let store = if args.no_cache {
        None
    } else {
        let store = match merged.cache_dir.as_deref() {
            Some(dir) => CacheStore::new_with_root(Utf8PathBuf::from(dir)),
            None => CacheStore::new().into_diagnostic()?,
        };
        let removed = store.remove_expired(cache_ttl).into_diagnostic()?;
        if removed > 0 {
            tracing::debug!("removed {} expired cache entries", removed);
        }
        Some(store)
    };

    let http = CachedHttp::new(store, cache_ttl, Pacer::new(MIN_REQUEST_INTERVAL))
        .map_err(SurveyError::HttpClient)
        .into_diagnostic()?;
    let client = InatHttpClient::new(http.clone());
    let elevation = ElevationProvider::for_source(elevation_source, http);

    let request = merged.into_request().into_diagnostic()?;
    let app = App::new(LabelCatalog::builtin(), client, elevation);

    match output_mode {
        OutputMode::Json => {
            let outcome = app.run(&request, &JsonOutput).into_diagnostic()?;
            JsonOutput::print_report(&outcome.report).into_diagnostic()?;
        }
        OutputMode::Console => {
            let outcome = app.run(&request, &ConsoleOutput).into_diagnostic()?;
            ConsoleOutput::print_report(&outcome);
        }
    }
    Ok(())
}

fn run_cache(args: CacheArgs, output_mode: OutputMode) -> miette::Result<()> {
    let store = match args.cache_dir.as_deref() {
        Some(dir) => CacheStore::new_with_root(Utf8PathBuf::from(dir)),
        None => CacheStore::new().into_diagnostic()?,
    };
    let cache_ttl = args
        .cache_ttl_secs
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_CACHE_TTL);

    match args.command {
        CacheCommand::Clear => {
            store.clear().into_diagnostic()?;
            let result = ClearResult { cleared: true };
            match output_mode {
                OutputMode::Json => JsonOutput::print_clear(&result).into_diagnostic()?,
                OutputMode::Console => println!("Cache cleared"),
            }
        }
        CacheCommand::Prune => {
            let removed = store.remove_expired(cache_ttl).into_diagnostic()?;
            let result = PruneResult { removed };
            match output_mode {
                OutputMode::Json => JsonOutput::print_prune(&result).into_diagnostic()?,
                OutputMode::Console => println!("Removed {removed} expired cache entries"),
            }
        }
    }
    Ok(())
}
