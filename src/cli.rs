use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "vision-directory",
    version,
    about = "Organization directory with vision-alignment scoring"
)]
pub struct Cli {
    #[command(flatten)]
    pub context: ContextArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Init(InitArgs),
    AddSite(AddSiteArgs),
    Import(ImportArgs),
    ListSites(ListSitesArgs),
    Signup(SignupArgs),
    Assess(AssessArgs),
    Status(StatusArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ContextArgs {
    #[arg(long, global = true, env = "DIRECTORY_DATA_ROOT", default_value = ".data/directory")]
    pub data_root: PathBuf,

    /// Defaults to `<data-root>/directory.sqlite`.
    #[arg(long, global = true, env = "DIRECTORY_DB_PATH")]
    pub db_path: Option<PathBuf>,

    #[arg(long, global = true, env = "DIRECTORY_VISION_PATH", default_value = "config/vision.json")]
    pub vision_path: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct InitArgs {}

#[derive(Args, Debug, Clone)]
pub struct AddSiteArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub website: Option<String>,

    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    /// JSON array of sites: `[{"name": ..., "description": ..., "website": ..., "tags": [...]}]`.
    #[arg(long)]
    pub path: PathBuf,

    #[arg(long)]
    pub manifest_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ListSitesArgs {
    #[arg(long)]
    pub tag: Option<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SignupArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub organization: Option<String>,

    #[arg(long)]
    pub message: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct AssessArgs {
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct StatusArgs {}
