//! CLI administration tool for tinylink.
//!
//! Works directly against the database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Insert the example links (skips codes that already exist)
//! cargo run --bin admin -- seed
//!
//! # List all links
//! cargo run --bin admin -- links list
//!
//! # Show one link
//! cargo run --bin admin -- links show example1
//!
//! # Delete a link
//! cargo run --bin admin -- links delete example1 --yes
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! Reads the same database variables as the server (`DATABASE_URL` or `DB_*`).

use tinylink::application::services::LinkService;
use tinylink::config;
use tinylink::domain::entities::Link;
use tinylink::error::AppError;
use tinylink::infrastructure::persistence::PgLinkRepository;
use tinylink::server::{connect_pool, run_migrations};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// PostgreSQL SQLSTATE for `undefined_table`.
const UNDEFINED_TABLE: &str = "42P01";

/// Example links inserted by `seed`.
const SEED_LINKS: &[(&str, &str)] = &[
    ("example1", "https://example.com/1"),
    ("example2", "https://example.com/2"),
];

/// CLI tool for managing tinylink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Insert example links
    Seed,

    /// Manage links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List all links, newest first
    List,

    /// Show one link
    Show {
        /// Short code
        code: String,
    },

    /// Delete a link
    Delete {
        /// Short code
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Seed => {
            run_migrations(&pool).await?;
            seed(&link_service(&pool)).await?;
        }
        Commands::Links { action } => handle_link_action(action, &link_service(&pool)).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn link_service(pool: &PgPool) -> LinkService {
    LinkService::new(Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))))
}

/// Inserts [`SEED_LINKS`], skipping codes that are already taken.
async fn seed(service: &LinkService) -> Result<()> {
    println!("{}", "Seeding example links".bright_blue().bold());
    println!();

    for &(code, url) in SEED_LINKS {
        match service
            .create_link(url.to_string(), Some(code.to_string()))
            .await
        {
            Ok(link) => println!("  {} {} -> {}", "created".green(), link.code.cyan(), link.url),
            Err(AppError::Conflict { .. }) => {
                println!("  {} {} (already exists)", "skipped".yellow(), code.cyan())
            }
            Err(e) => anyhow::bail!("Failed to seed '{code}': {e}"),
        }
    }

    println!();
    println!("{}", "Seed done".green().bold());
    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, service: &LinkService) -> Result<()> {
    match action {
        LinkAction::List => list_links(service).await,
        LinkAction::Show { code } => show_link(service, &code).await,
        LinkAction::Delete { code, yes } => delete_link(service, &code, yes).await,
    }
}

/// Prints all links as a table.
///
/// ```text
///   Code      Clicks  Last clicked         Target
///   ──────────────────────────────────────────────────────────
///   example2  0       never                https://example.com/2
/// ```
async fn list_links(service: &LinkService) -> Result<()> {
    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {e}"))?;

    if links.is_empty() {
        println!("{}", "  No links yet".yellow());
        return Ok(());
    }

    println!(
        "  {:<9} {:<7} {:<20} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Last clicked".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for link in &links {
        println!(
            "  {:<9} {:<7} {:<20} {}",
            link.code.cyan(),
            link.clicks,
            last_clicked(link),
            link.url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    Ok(())
}

async fn show_link(service: &LinkService, code: &str) -> Result<()> {
    match service.get_link(code).await {
        Ok(link) => {
            println!("{}", format!("Link {}", link.code).bright_blue().bold());
            println!("  Target:       {}", link.url);
            println!("  Clicks:       {}", link.clicks);
            println!("  Last clicked: {}", last_clicked(&link));
            println!(
                "  Created at:   {}",
                link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("Link '{code}' not found").red());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to fetch link: {e}")),
    }
}

/// Deletes a link after confirmation.
async fn delete_link(service: &LinkService, code: &str, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {code}?"))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_link(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {e}"))?;

    println!("{}", format!("Deleted {code}").green().bold());
    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            println!("{}", "Database connection OK".green().bold());
            println!("  {}", version.bright_black());

            let links = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await;
            match links {
                Ok(count) => println!("  Links: {}", count.to_string().bright_white().bold()),
                Err(e) if is_undefined_table(&e) => {
                    println!("  {}", "links table missing; run the server or `seed`".yellow())
                }
                Err(e) => return Err(e).context("Failed to count links"),
            }
        }
    }

    Ok(())
}

fn last_clicked(link: &Link) -> String {
    link.last_clicked
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "never".to_string())
}

fn is_undefined_table(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == UNDEFINED_TABLE)
}
