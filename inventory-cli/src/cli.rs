use clap::{Parser, Subcommand};
use inventory_core::{CategoryTag, JobSiteStatus};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "site-inventory")]
#[command(about = "Track job sites and their per-category inventory")]
pub struct Cli {
    /// Job site file to use instead of the configured one
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List and create job sites
    #[command(subcommand)]
    Sites(SitesCommand),
    /// Browse and edit a job site's inventory
    #[command(subcommand)]
    Items(ItemsCommand),
    /// Show the available categories and statuses
    Categories,
    /// Print config path and create default file if missing
    ConfigPath,
}

#[derive(Debug, Subcommand)]
pub enum SitesCommand {
    /// List job sites, optionally filtered by name
    List {
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Create a job site
    Create {
        #[arg(long)]
        name: String,
        /// Category to include; repeat for several
        #[arg(long = "category", short, required = true)]
        categories: Vec<CategoryTag>,
        #[arg(long)]
        status: JobSiteStatus,
    },
}

#[derive(Debug, Subcommand)]
pub enum ItemsCommand {
    /// Show the items of one category
    List {
        #[arg(long)]
        site: u32,
        #[arg(long)]
        category: CategoryTag,
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Edit one item; unspecified fields keep their value
    Edit {
        #[arg(long)]
        site: u32,
        #[arg(long)]
        category: CategoryTag,
        #[arg(long)]
        id: u32,
        #[arg(long)]
        item: Option<String>,
        /// Whole number
        #[arg(long, allow_hyphen_values = true)]
        quantity: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
}
