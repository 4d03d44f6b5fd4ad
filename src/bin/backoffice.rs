//! Command-line front-end over the back-office client and session store.
//!
//! Usage:
//!   backoffice me                          # connected user and personal team
//!   backoffice teams                       # teams I belong to
//!   backoffice members <team> [-s alice]   # members of a team
//!   backoffice notifications <team>        # unread count and latest page
//!   backoffice can manage apikey -t <team> # evaluate a capability
//!
//! Reads DAIKOKU_* env vars (a `.env` file is honoured).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use url::Url;

use backoffice::context::Action;
use backoffice::permissions::{can_do, Operation, Resource};
use backoffice::telemetry::init_tracing;
use backoffice::workflows::{filter_members, update_team, TeamMembers};
use backoffice::{AppConfig, HttpClient};

#[derive(Parser)]
#[command(name = "backoffice")]
#[command(about = "Inspect a Daikoku tenant from the command line")]
struct Args {
    /// Back-office origin, overrides DAIKOKU_BASE_URL
    #[arg(long, env = "DAIKOKU_BASE_URL")]
    base_url: Option<Url>,

    /// Compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in with the session cookie and show the context
    Me,
    /// Teams the connected user belongs to
    Teams,
    /// Members of a team
    Members {
        team: String,
        /// Keep members whose name or email contains this
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Unread count and latest notifications of a team
    Notifications {
        team: String,
        #[arg(long, default_value = "0")]
        page: u32,
    },
    /// Whether the connected user may do <operation> on <resource>
    Can {
        operation: Operation,
        resource: Resource,
        /// Team providing the scope
        #[arg(short, long)]
        team: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let args = Args::parse();

    let config =
        AppConfig::from_env_with_base(args.base_url.clone()).context("loading configuration")?;

    let client = HttpClient::new(&config.client).context("building HTTP client")?;
    let store = config.store();

    let user = client.me().await.context("fetching connected user")?;
    info!(user = %user.id, "connected");

    match args.command {
        Command::Me => {
            let team = client.my_own_team().await.ok();
            store.dispatch(Action::login(
                user,
                team,
                None,
                config.default_language.as_str(),
            ));
            let ctx = store.snapshot();
            print(
                &serde_json::json!({
                    "connectedUser": ctx.connected_user,
                    "currentTeam": ctx.current_team,
                    "currentLanguage": &*ctx.current_language,
                }),
                args.compact,
            )?;
        }
        Command::Teams => {
            let teams = client.my_teams().await.context("fetching my teams")?;
            print(&teams, args.compact)?;
        }
        Command::Members { team, search } => {
            store.dispatch(Action::login(
                user,
                None,
                None,
                config.default_language.as_str(),
            ));
            let team = client
                .team(&team)
                .await
                .with_context(|| format!("fetching team {}", team))?;
            update_team(&client, &store, team).await;

            let roster = TeamMembers::new(&client, &store).load().await?;
            let members = filter_members(&roster.members, search.as_deref().unwrap_or(""));
            print(&members, args.compact)?;
        }
        Command::Notifications { team, page } => {
            let unread = client.team_unread_notifications_count(&team).await;
            let notifications = client
                .team_all_notifications(&team, page)
                .await
                .with_context(|| format!("fetching notifications of {}", team))?;
            print(
                &serde_json::json!({
                    "unread": unread.count,
                    "notifications": notifications.notifications,
                    "count": notifications.count,
                }),
                args.compact,
            )?;
        }
        Command::Can {
            operation,
            resource,
            team,
        } => {
            let scope = match team {
                Some(team) => Some(
                    client
                        .team(&team)
                        .await
                        .with_context(|| format!("fetching team {}", team))?,
                ),
                None => None,
            };
            let allowed = can_do(&user, operation, resource, scope.as_ref());
            println!("{}", allowed);
        }
    }

    Ok(())
}

fn print<T: Serialize + ?Sized>(value: &T, compact: bool) -> Result<()> {
    let out = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{}", out);
    Ok(())
}
