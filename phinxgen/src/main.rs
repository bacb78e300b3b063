//! Command line tool for creating Phinx migration code from an existing
//! MySQL database.
//!
//! The generated migration is written to stdout; callers redirect it to a
//! file:
//!
//! ```text
//! $ phinxgen [database] [user] [password] > migration.php
//! $ phinxgen [database] [user] [password] [host] > migration.php
//! $ phinxgen [database] [user] [password] [host] [port] > migration.php
//! ```
//!
//! All diagnostics go to stderr so they never end up in the migration.

use anyhow::Context;
use clap::{Args, Parser};
use phinxgen_core::{ConnectionConfig, MySqlSchemaReader, generate_migration, init_logging};
use tracing::info;

#[derive(Parser)]
#[command(name = "phinxgen")]
#[command(about = "Phinx MySQL migration generator")]
#[command(version)]
struct Cli {
    /// Database to introspect
    database: Option<String>,

    /// MySQL user name
    user: Option<String>,

    /// MySQL password
    password: Option<String>,

    /// Server host (defaults to localhost)
    host: Option<String>,

    /// Server port (defaults to 3306)
    port: Option<u16>,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Args)]
struct GlobalArgs {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

/// Usage banner printed when fewer than three positional arguments are
/// given. Missing arguments are a help request, not an error, so the
/// banner goes to stdout and the process exits with status 0.
fn print_usage() {
    println!("===============================");
    println!("Phinx MySQL migration generator");
    println!("===============================");
    println!("Usage:");
    println!("phinxgen [database] [user] [password] > migration.php");
    println!("phinxgen [database] [user] [password] [host] > migration.php");
    println!("phinxgen [database] [user] [password] [host] [port] > migration.php");
    println!("[host] and [port] default to localhost and 3306 respectively");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.global.verbose, cli.global.quiet)?;

    let (Some(database), Some(user), Some(password)) = (cli.database, cli.user, cli.password)
    else {
        print_usage();
        return Ok(());
    };

    let mut config = ConnectionConfig::new(database, user, password);
    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }

    let reader = MySqlSchemaReader::connect(config).await?;
    info!("Connected to database {}", reader.database());

    let migration = generate_migration(&reader, reader.database())
        .await
        .context("migration generation failed")?;

    reader.close().await;

    print!("{}", migration);

    Ok(())
}
