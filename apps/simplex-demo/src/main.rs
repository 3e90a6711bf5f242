//! simplex-demo
//!
//! A demonstration client for Cassandra/ScyllaDB: connects to a cluster,
//! creates a keyspace and two tables, loads a handful of rows, queries a
//! playlist, extends a song's tag set, and tears everything down again.
//! Every statement goes through the external driver; this program only
//! sequences the calls and prints the results.

use clap::{Parser, Subcommand};
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::Environment;
use database::cassandra::SessionClient;
use domain_playlists::ExecutionPolicy;
use eyre::Result;
use tracing::info;
use uuid::Uuid;

mod config;
mod demo;

use config::Config;
use demo::DemoRunner;

#[derive(Parser)]
#[command(name = "simplex-demo")]
#[command(about = "Walk a Cassandra cluster through a schema/data/query/update demo")]
struct Cli {
    /// Contact points, comma-separated (overrides CASSANDRA_CONTACT_POINTS)
    #[arg(short, long, value_delimiter = ',', global = true)]
    contact_points: Option<Vec<String>>,

    /// Keyspace to run the demo in (overrides CASSANDRA_KEYSPACE)
    #[arg(short, long, global = true)]
    keyspace: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full sequence: schema, data, query, update, teardown
    Run {
        /// Keep the keyspace instead of dropping it at the end
        #[arg(long)]
        skip_drop: bool,

        /// Keep executing statements after a failure instead of aborting
        #[arg(long)]
        continue_on_error: bool,

        /// Replication factor for the demo keyspace
        #[arg(long, default_value_t = 3)]
        replication_factor: u8,

        /// Print collected metrics in Prometheus format after the run
        #[arg(long)]
        show_metrics: bool,
    },

    /// Create the demo keyspace and tables
    Schema {
        /// Keep executing statements after a failure instead of aborting
        #[arg(long)]
        continue_on_error: bool,

        /// Replication factor for the demo keyspace
        #[arg(long, default_value_t = 3)]
        replication_factor: u8,
    },

    /// Insert the demo songs and playlist rows
    Load {
        /// Keep executing statements after a failure instead of aborting
        #[arg(long)]
        continue_on_error: bool,
    },

    /// Query one playlist and print its tracks
    Query {
        /// Playlist id (defaults to the demo playlist)
        #[arg(long)]
        id: Option<Uuid>,
    },

    /// Add a tag to a song and print the updated row
    Update {
        /// Song id (defaults to the demo song)
        #[arg(long)]
        song_id: Option<Uuid>,

        /// Tag to add to the song's tag set
        #[arg(long, default_value = domain_playlists::DEMO_TAG)]
        tag: String,
    },

    /// Drop the demo keyspace
    Drop,

    /// Show connection health and cluster information
    Status,
}

fn policy(continue_on_error: bool) -> ExecutionPolicy {
    if continue_on_error {
        ExecutionPolicy::ContinueOnError
    } else {
        ExecutionPolicy::FailFast
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let cli = Cli::parse();

    let config = Config::resolve(cli.contact_points.as_deref(), cli.keyspace.as_deref())?;
    let environment = Environment::from_env();
    init_tracing(&environment);

    // Initialize metrics
    observability::init_metrics();

    info!("Connecting to Cassandra...");
    let client = SessionClient::connect_with_retry(&config.cassandra, None).await?;

    let result = dispatch(cli.command, &client, &config).await;

    // Closing is unconditional: the session is released on error paths too
    client.close();

    result
}

async fn dispatch(command: Commands, client: &SessionClient, config: &Config) -> Result<()> {
    match command {
        Commands::Run {
            skip_drop,
            continue_on_error,
            replication_factor,
            show_metrics,
        } => {
            let runner = DemoRunner::new(client.clone(), &config.keyspace)?
                .with_replication_factor(replication_factor);
            runner.run(policy(continue_on_error), skip_drop).await?;
            info!("Demo complete");

            if show_metrics {
                println!("{}", observability::render_metrics());
            }
            Ok(())
        }

        Commands::Schema {
            continue_on_error,
            replication_factor,
        } => {
            let runner = DemoRunner::new(client.clone(), &config.keyspace)?
                .with_replication_factor(replication_factor);
            runner.create_schema(policy(continue_on_error)).await
        }

        Commands::Load { continue_on_error } => {
            let runner = DemoRunner::new(client.clone(), &config.keyspace)?;
            runner.load_data(policy(continue_on_error)).await
        }

        Commands::Query { id } => {
            let runner = DemoRunner::new(client.clone(), &config.keyspace)?;
            runner.query(id).await
        }

        Commands::Update { song_id, tag } => {
            let runner = DemoRunner::new(client.clone(), &config.keyspace)?;
            runner.update(song_id, &tag).await
        }

        Commands::Drop => {
            let runner = DemoRunner::new(client.clone(), &config.keyspace)?;
            runner.drop_schema().await
        }

        Commands::Status => {
            let runner = DemoRunner::new(client.clone(), &config.keyspace)?;
            runner.status().await
        }
    }
}
