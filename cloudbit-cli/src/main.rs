use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cloudbit_api::config::DEFAULT_SUBSCRIPTIONS_URL;
use cloudbit_api::{ClientConfig, EventRef, NotificationManager};
use tracing::info;

/// Manage cloudBit event notification subscriptions
#[derive(Parser, Debug)]
#[command(name = "cloudbit")]
#[command(about = "List, create and delete cloudBit event subscriptions")]
#[command(version)]
pub struct Args {
    /// API access token
    #[arg(long, env = "CLOUDBIT_AUTH_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Callback URL used when no subscriber is given
    #[arg(long, env = "CLOUDBIT_CALLBACK_URL")]
    pub callback_url: String,

    /// Token appended to the callback URL (defaults to --token)
    #[arg(long, env = "CLOUDBIT_CALLBACK_TOKEN", hide_env_values = true)]
    pub callback_token: Option<String>,

    /// Subscriptions endpoint
    #[arg(long, env = "CLOUDBIT_SUBSCRIPTIONS_URL", default_value = DEFAULT_SUBSCRIPTIONS_URL)]
    pub subscriptions_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// List subscriptions for a publisher device
    List {
        publisher_id: String,
    },
    /// Subscribe to events from a publisher device
    Subscribe {
        publisher_id: String,
        /// Event to subscribe to (repeatable)
        #[arg(short, long = "event", required = true)]
        events: Vec<String>,
        /// Subscriber device id or callback URL
        #[arg(short, long)]
        subscriber: Option<String>,
    },
    /// Delete a subscription
    Unsubscribe {
        publisher_id: String,
        /// Subscriber device id or callback URL
        #[arg(short, long)]
        subscriber: Option<String>,
    },
}

impl Args {
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(&self.token, &self.callback_url)
            .with_subscriptions_url(&self.subscriptions_url);
        match &self.callback_token {
            Some(token) => config.with_callback_auth_token(token),
            None => config,
        }
    }
}

fn run(args: Args) -> Result<serde_json::Value> {
    let manager = NotificationManager::new(args.client_config());

    match args.command {
        Command::List { publisher_id } => {
            info!(publisher_id = %publisher_id, "listing subscriptions");
            let subscriptions = manager
                .list_subscriptions(&publisher_id)
                .with_context(|| format!("Failed to list subscriptions for {}", publisher_id))?;
            serde_json::to_value(subscriptions).context("Failed to encode subscriptions")
        }
        Command::Subscribe { publisher_id, events, subscriber } => {
            info!(publisher_id = %publisher_id, events = events.len(), "subscribing");
            let events: Vec<EventRef> = events.into_iter().map(EventRef::new).collect();
            manager
                .subscribe_to_notifications(&publisher_id, subscriber.as_deref(), &events)
                .with_context(|| format!("Failed to subscribe to {}", publisher_id))
        }
        Command::Unsubscribe { publisher_id, subscriber } => {
            info!(publisher_id = %publisher_id, "unsubscribing");
            manager
                .delete_subscription(&publisher_id, subscriber.as_deref())
                .with_context(|| format!("Failed to unsubscribe from {}", publisher_id))
        }
    }
}

fn main() -> Result<()> {
    cloudbit_api::logging::init_logging_from_env().context("Failed to initialize logging")?;

    let output = run(Args::parse())?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
