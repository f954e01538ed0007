use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info_span, Instrument};

use query_engine_execution::authors::MySqlAuthorRecords;
use query_engine_metadata::metadata;
use query_engine_translation::translation::request::AnalysisRequest;
use viz_analysis::{analysis, health, state};
use viz_analysis_configuration::environment::ProcessEnvironment;
use viz_analysis_configuration::{self as configuration, Configuration, ParsedConfiguration};

/// Run ad-hoc analysis queries and co-authorship counts over conference records.
#[derive(Debug, Parser)]
#[command(name = "viz-analysis", version)]
struct Cli {
    /// The directory holding configuration.json.
    #[arg(long, short, env = "VIZ_CONFIGURATION_DIR", default_value = ".")]
    configuration: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the SQL an analysis request translates to.
    Sql {
        /// The request as JSON, `-` for stdin.
        request: PathBuf,
        /// Lay the statement out over several lines.
        #[arg(long)]
        pretty: bool,
        /// Only use the built-in column types, ignoring the configuration directory.
        #[arg(long)]
        builtin_types: bool,
    },
    /// Run an analysis request and print the resulting rows.
    Analyse {
        /// The request as JSON, `-` for stdin.
        request: PathBuf,
    },
    /// Count collaborations for the request's record group.
    Coauthorship {
        /// The request as JSON, `-` for stdin.
        request: PathBuf,
    },
    /// Check that the database is reachable.
    Health,
    /// Print the JSON schema of the configuration file.
    Schema,
    /// Write a default configuration into the configuration directory.
    Initialize,
}

#[tokio::main]
pub async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Sql {
            request,
            pretty,
            builtin_types,
        } => {
            let request = read_request(&request).await?;
            let metadata = if builtin_types {
                metadata::Metadata::exportable()
            } else {
                let parsed = configuration::parse_configuration(&cli.configuration).await?;
                let mut metadata = metadata::Metadata::exportable();
                metadata.field_types.merge(parsed.field_types);
                metadata
            };
            println!("{}", analysis::generated_sql(&metadata, &request, pretty));
        }
        Command::Analyse { request } => {
            let request = read_request(&request).await?;
            let (configuration, state) = initialize_state(&cli.configuration).await?;
            let rows = analysis::analyse(&configuration, &state, &request).await?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        Command::Coauthorship { request } => {
            let request = read_request(&request).await?;
            let (_, state) = initialize_state(&cli.configuration).await?;
            let source = MySqlAuthorRecords::new(state.pool.clone());
            match analysis::analyse_coauthorship(&source, &state.metrics, &request).await? {
                Some(rows) => println!("{}", serde_json::to_string_pretty(&rows)?),
                None => {
                    anyhow::bail!(
                        "no author records in record group {}",
                        request.record_group_id
                    )
                }
            }
        }
        Command::Health => {
            let (_, state) = initialize_state(&cli.configuration).await?;
            health::health_check(&state.pool).await?;
            println!("ok");
        }
        Command::Schema => {
            let schema = configuration::configuration_jsonschema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Command::Initialize => {
            configuration::write_parsed_configuration(
                ParsedConfiguration::initial(),
                &cli.configuration,
            )
            .await?;
        }
    }
    Ok(())
}

async fn initialize_state(
    configuration_dir: &Path,
) -> anyhow::Result<(Configuration, state::State)> {
    let parsed = configuration::parse_configuration(configuration_dir)
        .instrument(info_span!("parse configuration"))
        .await?;
    let configuration = configuration::make_runtime_configuration(parsed, ProcessEnvironment)?;

    let mut registry = prometheus::Registry::new();
    let state = state::create_state(&configuration, &mut registry)
        .instrument(info_span!("Initialise state"))
        .await
        .map_err(|err| {
            tracing::error!(
                meta.signal_type = "log",
                event.domain = "viz",
                event.name = "Initialization error",
                name = "Initialization error",
                body = %err,
                error = true,
            );
            err
        })?;
    Ok((configuration, state))
}

async fn read_request(path: &Path) -> anyhow::Result<AnalysisRequest> {
    let contents = if path == Path::new("-") {
        tokio::task::spawn_blocking(|| std::io::read_to_string(std::io::stdin())).await??
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?
    };
    serde_json::from_str(&contents).context("parsing the analysis request")
}
