use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "appdeck")]
#[command(about = "Appdeck CLI — manage the app directory manifest")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Manifest file path (overrides config and APPDECK_MANIFEST env var)
    #[arg(short, long, global = true, env = "APPDECK_MANIFEST")]
    pub manifest: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new app to the directory
    Add(AddArgs),
    /// List directory entries
    List(ListArgs),
    /// Show the kanban board columns
    Board,
    /// Move an app to another status column
    SetStatus(SetStatusArgs),
    /// Edit an app's fields
    Edit(EditArgs),
    /// Remove an app from the directory
    Remove(RemoveArgs),
    /// Print the regenerated manifest module
    Export,
    /// Manage CLI configuration
    Config(ConfigArgs),
}

/// Status values accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Idea,
    Building,
    Testing,
    Mvp,
    Shipped,
}

impl From<StatusArg> for appdeck_core::AppStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Idea => Self::Idea,
            StatusArg::Building => Self::Building,
            StatusArg::Testing => Self::Testing,
            StatusArg::Mvp => Self::Mvp,
            StatusArg::Shipped => Self::Shipped,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum UpdateTypeArg {
    Fixed,
    Features,
}

impl From<UpdateTypeArg> for appdeck_core::UpdateType {
    fn from(value: UpdateTypeArg) -> Self {
        match value {
            UpdateTypeArg::Fixed => Self::Fixed,
            UpdateTypeArg::Features => Self::Features,
        }
    }
}

#[derive(clap::Args)]
pub struct AddArgs {
    /// App display name
    pub title: String,
    /// URL-safe identifier (defaults to the lowercased, hyphenated title)
    #[arg(long)]
    pub slug: Option<String>,
    /// Emoji icon for the tile
    #[arg(long)]
    pub icon: String,
    /// Tile background color (e.g. #FF5722)
    #[arg(long)]
    pub color: String,
    /// URL of the externally-hosted app to embed
    #[arg(long)]
    pub url: String,
    /// Category tag (utility/productivity/fun/finance/health)
    #[arg(long)]
    pub category: Option<String>,
    /// Initial status column
    #[arg(long, default_value = "shipped")]
    pub status: StatusArg,
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Include entries whose status is hidden from the public listing
    #[arg(long)]
    pub all: bool,
}

#[derive(clap::Args)]
pub struct SetStatusArgs {
    /// App slug
    pub slug: String,
    /// Target status column
    pub status: StatusArg,
}

#[derive(clap::Args)]
pub struct EditArgs {
    /// App slug
    pub slug: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub icon: Option<String>,
    #[arg(long)]
    pub color: Option<String>,
    #[arg(long)]
    pub url: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// Display price, e.g. $5
    #[arg(long)]
    pub price: Option<String>,
    /// Payment gateway price id; marks the app as paid
    #[arg(long)]
    pub price_id: Option<String>,
    /// Record a substantive update dated today, selecting the badge
    #[arg(long)]
    pub update: Option<UpdateTypeArg>,
}

#[derive(clap::Args)]
pub struct RemoveArgs {
    /// App slug
    pub slug: String,
}

#[derive(clap::Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current config
    Show,
    /// Set config value
    Set(ConfigSetArgs),
}

#[derive(clap::Args)]
pub struct ConfigSetArgs {
    /// Key to set (manifest)
    pub key: String,
    /// Value
    pub value: String,
}
