//! Command dispatch: configuration assembly, client construction, and the
//! cache write-back that keeps the on-disk token fresh.

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use tracing::{debug, warn};

use saur_client::SaurClientBuilder;
use saur_config::{ConfigLoader, CredentialsCache, CredentialsFile, Environment};

use crate::args::{Cli, Commands};

/// Run the selected subcommand and print its JSON payload to stdout.
pub async fn run(cli: Cli) -> Result<()> {
    let cache = match &cli.credentials {
        Some(path) => Some(CredentialsCache::at_path(path)),
        None => CredentialsCache::default_location().ok(),
    };

    // A missing or unreadable cache file is fine as long as the environment
    // supplies credentials; build() reports the combined failure otherwise.
    let cached_file = match &cache {
        Some(cache) => match cache.load() {
            Ok(file) => Some(file),
            Err(e) => {
                debug!(error = %e, "No usable credentials file");
                None
            }
        },
        None => None,
    };

    let mut loader = ConfigLoader::new().from_env()?;
    if let Some(file) = &cached_file {
        loader = loader.from_credentials_file(file);
    }
    if let Some(url) = &cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if cli.dev {
        loader = loader.with_environment(Environment::Development);
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(secs));
    }
    if let Some(retries) = cli.max_retries {
        loader = loader.with_max_retries(retries);
    }
    let config = loader.build()?;

    let mut builder = SaurClientBuilder::from_config(&config);
    if let Some(file) = &cached_file {
        builder = builder.cached_session(file.token.clone(), file.section_id.clone());
    }
    let mut client = builder.build()?;

    let today = Local::now().date_naive();
    let payload = match cli.command {
        Commands::Weekly { year, month, day } => {
            client
                .weekly_consumption(
                    year.unwrap_or_else(|| today.year()),
                    month.unwrap_or_else(|| today.month()),
                    day.unwrap_or_else(|| today.day()),
                )
                .await?
        }
        Commands::Monthly { year, month } => {
            client
                .monthly_consumption(
                    year.unwrap_or_else(|| today.year()),
                    month.unwrap_or_else(|| today.month()),
                )
                .await?
        }
        Commands::LastReading => client.last_known_reading().await?,
        Commands::DeliveryPoints => client.delivery_points().await?,
        Commands::Contracts => client.contracts().await?,
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("Failed to render response")?
    );

    if let (Some(cache), Some(file)) = (&cache, cached_file) {
        write_back_session(cache, file, &client);
    }

    Ok(())
}

/// Rewrite the credentials file with the session state the run ended with,
/// so the next invocation can skip the authentication round trip.
///
/// Failure to save is a warning, never a command failure: the payload has
/// already been printed.
fn write_back_session(
    cache: &CredentialsCache,
    mut file: CredentialsFile,
    client: &saur_client::SaurClient,
) {
    let session = client.session();
    let token = session.bearer_token().map(str::to_string);
    let section_id = session.section_id().map(str::to_string);

    if token == file.token && section_id == file.section_id {
        return;
    }

    file.token = token;
    file.section_id = section_id;
    if let Err(e) = cache.save(&file) {
        warn!(error = %e, path = %cache.path().display(), "Failed to update credentials cache");
    }
}
