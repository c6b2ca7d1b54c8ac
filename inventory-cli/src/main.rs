mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, ItemsCommand, SitesCommand};
use commands::ItemChanges;
use config::InventoryConfig;
use inventory_core::{JobSiteId, JobSiteRepository, JsonFileStorage};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = InventoryConfig::load()?;
    init_tracing(&config.log_level);

    if let Commands::ConfigPath = cli.command {
        let path = InventoryConfig::ensure_default()?;
        println!("{}", path.display());
        return Ok(());
    }

    let data_path = config.resolve_data_path(cli.data)?;
    tracing::debug!(path = %data_path.display(), "using job site file");
    let mut repo = JobSiteRepository::open(JsonFileStorage::new(data_path));
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Sites(SitesCommand::List { search }) => {
            commands::list_sites(&repo, search.as_deref(), &mut out)
        }
        Commands::Sites(SitesCommand::Create {
            name,
            categories,
            status,
        }) => commands::create_site(&mut repo, &name, categories, status, &mut out),
        Commands::Items(ItemsCommand::List {
            site,
            category,
            search,
        }) => commands::list_items(
            &mut repo,
            JobSiteId::from(site),
            category,
            search.as_deref(),
            &mut out,
        ),
        Commands::Items(ItemsCommand::Edit {
            site,
            category,
            id,
            item,
            quantity,
            description,
            notes,
        }) => commands::edit_item(
            &mut repo,
            JobSiteId::from(site),
            category,
            id,
            ItemChanges {
                item,
                quantity,
                description,
                notes,
            },
            &mut out,
        ),
        Commands::Categories => commands::list_categories(&mut out),
        Commands::ConfigPath => Ok(()),
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
