//! `vendorlink` CLI binary.
//!
//! Runs a single producer call against one vendor and prints the result as JSON:
//!
//! ```text
//! vendorlink github users list --org octo-org --page 2 --page-size 50
//! vendorlink access-control groups members grp_123
//! vendorlink avatar assets list --type outfit
//! vendorlink info
//! ```
//!
//! Credentials and base URL overrides come from `configuration.yaml`,
//! `VENDORLINK__*` variables or the vendor specific secret variables.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use vendorlink::configuration::get_configuration;
use vendorlink::connectors::avatar::{AssetFilter, AvatarFilter};
use vendorlink::connectors::{
    AccessControlConnector, AvatarConnector, Connector, GitHubConnector, PagedResults,
    ResourceKind,
};
use vendorlink::telemetry::{get_subscriber, init_subscriber};

#[derive(Parser, Debug)]
#[command(
    name = "vendorlink",
    version,
    about = "List and fetch resources from connected vendor APIs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Access-control platform (users, groups)
    AccessControl {
        #[command(subcommand)]
        command: AccessControlCommands,
    },
    /// GitHub (organizations, members, teams)
    Github {
        #[command(subcommand)]
        command: GitHubCommands,
    },
    /// Avatar platform (avatars, assets)
    Avatar {
        #[command(subcommand)]
        command: AvatarCommands,
    },
    /// Print metadata for every connector
    Info,
}

#[derive(Debug, Args)]
struct PageArgs {
    /// 1-based page number
    #[arg(long)]
    page: Option<u32>,
    /// Rows per page (clamped to 1..=1000, 1..=100 for GitHub)
    #[arg(long)]
    page_size: Option<u32>,
}

impl PageArgs {
    fn results<T>(&self) -> PagedResults<T> {
        PagedResults {
            page_number: self.page,
            page_size: self.page_size,
            ..PagedResults::default()
        }
    }
}

#[derive(Debug, Subcommand)]
enum AccessControlCommands {
    Users {
        #[command(subcommand)]
        command: ListOrGet,
    },
    Groups {
        #[command(subcommand)]
        command: GroupCommands,
    },
}

#[derive(Debug, Subcommand)]
enum ListOrGet {
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    Get {
        id: String,
    },
}

#[derive(Debug, Subcommand)]
enum GroupCommands {
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    Get {
        id: String,
    },
    /// Users belonging to a group
    Members {
        group_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Debug, Subcommand)]
enum GitHubCommands {
    Orgs {
        #[command(subcommand)]
        command: ListOrGet,
    },
    Users {
        #[command(subcommand)]
        command: GitHubUserCommands,
    },
    Teams {
        #[command(subcommand)]
        command: TeamCommands,
    },
}

#[derive(Debug, Subcommand)]
enum GitHubUserCommands {
    /// Members of an organization
    List {
        #[arg(long)]
        org: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Get {
        login: String,
    },
}

#[derive(Debug, Subcommand)]
enum TeamCommands {
    List {
        #[arg(long)]
        org: String,
        #[command(flatten)]
        page: PageArgs,
    },
    Get {
        #[arg(long)]
        org: String,
        slug: String,
    },
    Members {
        #[arg(long)]
        org: String,
        slug: String,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Debug, Subcommand)]
enum AvatarCommands {
    Avatars {
        #[command(subcommand)]
        command: AvatarListCommands,
    },
    Assets {
        #[command(subcommand)]
        command: AssetCommands,
    },
}

#[derive(Debug, Subcommand)]
enum AvatarListCommands {
    List {
        #[arg(long)]
        user_id: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    Get {
        id: String,
    },
}

#[derive(Debug, Subcommand)]
enum AssetCommands {
    List {
        #[arg(long = "type")]
        asset_type: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        #[command(flatten)]
        page: PageArgs,
    },
    Get {
        id: String,
    },
    /// Assets equipped on one avatar
    Equipped {
        avatar_id: String,
        #[command(flatten)]
        page: PageArgs,
    },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = get_configuration().context("Failed to read configuration")?;

    let subscriber = get_subscriber("vendorlink".into(), settings.log_level.clone());
    init_subscriber(subscriber)?;

    let connectors = settings.connectors;
    match cli.command {
        Commands::Info => {
            let metadata = vec![
                AccessControlConnector::new().metadata(),
                GitHubConnector::new().metadata(),
                AvatarConnector::new().metadata(),
            ];
            print_json(&metadata)
        }
        Commands::AccessControl { command } => {
            let connector = AccessControlConnector::new();
            let profile = connectors.access_control.unwrap_or_default().profile();
            connector.connect(profile).await?;
            let outcome = run_access_control(&connector, command).await;
            connector.disconnect()?;
            outcome
        }
        Commands::Github { command } => {
            let connector = GitHubConnector::new();
            let profile = connectors.github.unwrap_or_default().profile();
            connector.connect(profile).await?;
            let outcome = run_github(&connector, command).await;
            connector.disconnect()?;
            outcome
        }
        Commands::Avatar { command } => {
            let connector = AvatarConnector::new();
            let profile = connectors.avatar.unwrap_or_default().profile();
            connector.connect(profile).await?;
            let outcome = run_avatar(&connector, command).await;
            connector.disconnect()?;
            outcome
        }
    }
}

async fn run_access_control(
    connector: &AccessControlConnector,
    command: AccessControlCommands,
) -> anyhow::Result<()> {
    match command {
        AccessControlCommands::Users { command } => {
            connector.ensure_supported(ResourceKind::Users)?;
            let users = connector.users_api()?;
            match command {
                ListOrGet::List { page } => {
                    let mut results = page.results();
                    users.list(&mut results).await?;
                    print_json(&results)
                }
                ListOrGet::Get { id } => print_json(&users.get(&id).await?),
            }
        }
        AccessControlCommands::Groups { command } => {
            connector.ensure_supported(ResourceKind::Groups)?;
            let groups = connector.groups_api()?;
            match command {
                GroupCommands::List { page } => {
                    let mut results = page.results();
                    groups.list(&mut results).await?;
                    print_json(&results)
                }
                GroupCommands::Get { id } => print_json(&groups.get(&id).await?),
                GroupCommands::Members { group_id, page } => {
                    let mut results = page.results();
                    groups.list_users(&mut results, &group_id).await?;
                    print_json(&results)
                }
            }
        }
    }
}

async fn run_github(connector: &GitHubConnector, command: GitHubCommands) -> anyhow::Result<()> {
    match command {
        GitHubCommands::Orgs { command } => {
            connector.ensure_supported(ResourceKind::Organizations)?;
            let orgs = connector.organizations_api()?;
            match command {
                ListOrGet::List { page } => {
                    let mut results = page.results();
                    orgs.list(&mut results).await?;
                    print_json(&results)
                }
                ListOrGet::Get { id } => print_json(&orgs.get(&id).await?),
            }
        }
        GitHubCommands::Users { command } => {
            connector.ensure_supported(ResourceKind::Users)?;
            let users = connector.users_api()?;
            match command {
                GitHubUserCommands::List { org, page } => {
                    let mut results = page.results();
                    users.list(&mut results, &org).await?;
                    print_json(&results)
                }
                GitHubUserCommands::Get { login } => print_json(&users.get(&login).await?),
            }
        }
        GitHubCommands::Teams { command } => {
            connector.ensure_supported(ResourceKind::Groups)?;
            let teams = connector.groups_api()?;
            match command {
                TeamCommands::List { org, page } => {
                    let mut results = page.results();
                    teams.list(&mut results, &org).await?;
                    print_json(&results)
                }
                TeamCommands::Get { org, slug } => print_json(&teams.get(&org, &slug).await?),
                TeamCommands::Members { org, slug, page } => {
                    let mut results = page.results();
                    teams.list_members(&mut results, &org, &slug).await?;
                    print_json(&results)
                }
            }
        }
    }
}

async fn run_avatar(connector: &AvatarConnector, command: AvatarCommands) -> anyhow::Result<()> {
    match command {
        AvatarCommands::Avatars { command } => {
            connector.ensure_supported(ResourceKind::Avatars)?;
            let avatars = connector.avatars_api()?;
            match command {
                AvatarListCommands::List { user_id, page } => {
                    let mut results = page.results();
                    avatars.list(&mut results, &AvatarFilter { user_id }).await?;
                    print_json(&results)
                }
                AvatarListCommands::Get { id } => print_json(&avatars.get(&id).await?),
            }
        }
        AvatarCommands::Assets { command } => {
            connector.ensure_supported(ResourceKind::Assets)?;
            let assets = connector.assets_api()?;
            match command {
                AssetCommands::List {
                    asset_type,
                    gender,
                    page,
                } => {
                    let mut results = page.results();
                    let filter = AssetFilter { asset_type, gender };
                    assets.list(&mut results, &filter).await?;
                    print_json(&results)
                }
                AssetCommands::Get { id } => print_json(&assets.get(&id).await?),
                AssetCommands::Equipped { avatar_id, page } => {
                    let mut results = page.results();
                    assets.list_equipped(&mut results, &avatar_id).await?;
                    print_json(&results)
                }
            }
        }
    }
}
