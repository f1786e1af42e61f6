use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use linkid::domain::{DomainExtractor, ExtractorConfig};
use linkid::linkedin::{entity_urn, extract_linkedin_slug, try_clean_linkedin_url, urn_extractor};
use linkid::url_parser::{extract_host_and_path, generate_url_combinations};
use linkid::utils::{init_logger, map_bounded};
use linkid::{clean_linkedin_url, domain_from_url_no_filtering};

/// Normalize LinkedIn URLs, URNs and company domains.
#[derive(Parser)]
#[command(name = "linkid")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Settings file (defaults to ./linkid.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to a timestamped file in this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Canonical host+path key of a URL
    HostPath { url: String },

    /// The eight scheme/www/slash spellings of a URL
    Combinations { url: String },

    /// Canonical LinkedIn profile/company/school URL
    Clean {
        url: String,

        /// Decode then re-escape the handle
        #[arg(long)]
        escape: bool,
    },

    /// Handle of a LinkedIn URL or pasted CRM value
    Slug { value: String },

    /// Identifier of a URN
    Urn {
        urn: String,

        /// Require a (profile,auth_type,auth_token) tuple URN
        #[arg(long)]
        strict: bool,
    },

    /// Registrable company domain of a URL
    Domain {
        url: String,

        /// Skip shortener resolution and public-domain filtering
        #[arg(long)]
        no_filter: bool,

        /// Deadline for resolving a shortened link
        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    /// Process one URL per line from a file
    Batch {
        file: PathBuf,

        /// Maximum number of lines processed at once
        #[arg(long)]
        concurrency: Option<usize>,
    },
}

/// Settings from `linkid.toml` and `LINKID_*` environment variables.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct Settings {
    redirect_timeout_secs: u64,
    user_agent: Option<String>,
    log_dir: Option<String>,
    concurrency: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            redirect_timeout_secs: 10,
            user_agent: None,
            log_dir: None,
            concurrency: 16,
        }
    }
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name("linkid").required(false),
    };

    let settings = config::Config::builder()
        .add_source(file)
        .add_source(config::Environment::with_prefix("LINKID").try_parsing(true))
        .build()
        .context("Failed to load settings")?;

    settings.try_deserialize().context("Invalid settings")
}

impl Settings {
    fn extractor_config(&self) -> ExtractorConfig {
        let config = ExtractorConfig::new().with_redirect_timeout(Duration::from_secs(self.redirect_timeout_secs));
        match &self.user_agent {
            Some(user_agent) => config.with_user_agent(user_agent.as_str()),
            None => config,
        }
    }
}

/// One processed line of a batch file.
#[derive(Debug, Serialize)]
struct BatchRecord {
    input: String,
    host_path: String,
    linkedin_url: String,
    slug: String,
    domain: String,
}

fn print_output(json_output: bool, value: serde_json::Value, text: impl FnOnce() -> String) -> Result<()> {
    if json_output {
        println!("{}", serde_json::to_string(&value)?);
    } else {
        println!("{}", text());
    }
    Ok(())
}

async fn run_batch(
    file: &Path,
    extractor: &DomainExtractor,
    concurrency: usize,
    json_output: bool,
) -> Result<()> {
    let content = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let lines: Vec<&str> = content.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
    info!("Processing {} lines with concurrency {}", lines.len(), concurrency);

    let records = map_bounded(lines, concurrency, |line| async move {
        BatchRecord {
            input: line.to_string(),
            host_path: extract_host_and_path(line),
            linkedin_url: clean_linkedin_url(line),
            slug: extract_linkedin_slug(line),
            domain: extractor.domain_from_url(line).await,
        }
    })
    .await;

    for record in &records {
        if json_output {
            println!("{}", serde_json::to_string(record)?);
        } else {
            println!(
                "{}\t{}\t{}\t{}\t{}",
                record.input, record.host_path, record.linkedin_url, record.slug, record.domain
            );
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;

    let log_dir = cli.log_dir.as_deref().or(settings.log_dir.as_deref());
    init_logger(log_dir)?;
    debug!("Loaded settings: {:?}", settings);

    let json_output = cli.json;
    match cli.command {
        Commands::HostPath { url } => {
            let key = extract_host_and_path(&url);
            print_output(json_output, json!(key), || key.clone())?;
        }
        Commands::Combinations { url } => {
            let combinations = generate_url_combinations(&url);
            print_output(json_output, json!(combinations), || combinations.join("\n"))?;
        }
        Commands::Clean { url, escape } => {
            let clean = try_clean_linkedin_url(&url, escape)
                .with_context(|| format!("Cannot clean {:?}", url))?;
            print_output(json_output, json!(clean), || clean.clone())?;
        }
        Commands::Slug { value } => {
            let slug = extract_linkedin_slug(&value);
            print_output(json_output, json!(slug), || slug.clone())?;
        }
        Commands::Urn { urn, strict } => {
            if strict {
                let parsed = entity_urn(&urn).with_context(|| format!("Cannot parse {:?}", urn))?;
                print_output(json_output, serde_json::to_value(&parsed)?, || {
                    format!("{}\t{}\t{}", parsed.profile_id, parsed.auth_type, parsed.auth_token)
                })?;
            } else {
                let id = urn_extractor(&urn);
                print_output(json_output, json!(id), || id.clone())?;
            }
        }
        Commands::Domain {
            url,
            no_filter,
            timeout_secs,
        } => {
            let domain = if no_filter {
                domain_from_url_no_filtering(&url)?
            } else {
                let extractor = DomainExtractor::new(settings.extractor_config());
                let deadline = timeout_secs
                    .map(Duration::from_secs)
                    .unwrap_or_else(|| extractor.redirect_timeout());
                extractor.domain_from_url_within(&url, deadline).await
            };
            print_output(json_output, json!(domain), || domain.clone())?;
        }
        Commands::Batch { file, concurrency } => {
            let extractor = DomainExtractor::new(settings.extractor_config());
            let concurrency = concurrency.unwrap_or(settings.concurrency);
            run_batch(&file, &extractor, concurrency, json_output).await?;
        }
    }

    Ok(())
}
