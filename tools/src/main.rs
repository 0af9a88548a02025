use std::io::{self, BufRead};
use std::num::NonZeroUsize;
use std::rc::Rc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mailbox::{callback, ErrorAnnouncer, ErrorMessage, Mailbox};
use reflector::ReflectorConfig;
use schema::QueryObject;
use sk_tools::{
    delta_apply, delta_get, params_decode, params_encode, parse_object, query_decode,
    query_encode, Session, SessionCommand, STATE_ADDRESS,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sk-tools", version, about = "sk query string and state sync tools")]
struct Cli {
    /// Log filter, e.g. `debug` or `reflector=trace`.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert multi-valued param sets.
    Params {
        #[command(subcommand)]
        action: ParamsAction,
    },
    /// Convert typed state objects.
    Query {
        #[command(subcommand)]
        action: QueryAction,
    },
    /// Compute or apply state deltas.
    Delta {
        #[command(subcommand)]
        action: DeltaAction,
    },
    /// Find a round number between two bounds.
    #[command(allow_negative_numbers = true)]
    Round {
        min: f64,
        max: f64,
        #[arg(long, default_value_t = 10.0)]
        base: f64,
    },
    /// Format a duration given in seconds.
    #[command(allow_negative_numbers = true)]
    Duration { seconds: i64 },
    /// Format the distance from a timestamp (ms since the epoch) to now.
    Ago {
        then_ms: f64,
        /// Reference time instead of the current clock.
        #[arg(long)]
        now_ms: Option<f64>,
    },
    /// Render plain text as HTML with links.
    Html {
        text: String,
        /// Open links in a new window.
        #[arg(long)]
        new_window: bool,
    },
    /// Reflect state into an in-memory history, driven by commands on stdin.
    Reflect {
        /// Default state as a JSON object.
        #[arg(long, default_value = "{}")]
        defaults: String,
        /// Query string of the initial history entry.
        #[arg(long, default_value = "")]
        query: String,
        /// Milliseconds between change-detection passes.
        #[arg(long, default_value_t = 100)]
        poll_ms: u64,
        /// Maximum history entries kept.
        #[arg(long, default_value_t = ReflectorConfig::default().history_capacity)]
        history: NonZeroUsize,
    },
}

#[derive(Subcommand)]
enum ParamsAction {
    /// JSON object of string arrays to a query string.
    Encode { json: String },
    /// Query string to a JSON object of string arrays.
    Decode { query: String },
}

#[derive(Subcommand)]
enum QueryAction {
    /// JSON object of scalars to a query string.
    Encode { json: String },
    /// Query string to JSON, typed by optional defaults.
    Decode {
        query: String,
        #[arg(long)]
        defaults: Option<String>,
    },
}

#[derive(Subcommand)]
enum DeltaAction {
    /// Keys of STATE that differ from BASE.
    Get { state: String, base: String },
    /// BASE with DELTA applied on top.
    Apply { delta: String, base: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match cli.command {
        Command::Params { action } => match action {
            ParamsAction::Encode { json } => println!("{}", params_encode(&json)?),
            ParamsAction::Decode { query } => println!("{}", params_decode(&query)?),
        },
        Command::Query { action } => match action {
            QueryAction::Encode { json } => println!("{}", query_encode(&json)?),
            QueryAction::Decode { query, defaults } => {
                println!("{}", query_decode(&query, defaults.as_deref())?);
            }
        },
        Command::Delta { action } => match action {
            DeltaAction::Get { state, base } => println!("{}", delta_get(&state, &base)?),
            DeltaAction::Apply { delta, base } => println!("{}", delta_apply(&delta, &base)?),
        },
        Command::Round { min, max, base } => {
            let value = human::round_number(min, max, base).context("find round number")?;
            println!("{value}");
        }
        Command::Duration { seconds } => println!("{}", human::str_duration(seconds)),
        Command::Ago { then_ms, now_ms } => {
            let now_ms = match now_ms {
                Some(now_ms) => now_ms,
                None => epoch_millis()?,
            };
            println!("{}", human::diff_date(then_ms, now_ms));
        }
        Command::Html { text, new_window } => println!("{}", human::format_html(&text, new_window)),
        Command::Reflect {
            defaults,
            query,
            poll_ms,
            history,
        } => {
            let defaults = parse_object(&defaults).context("load defaults")?;
            let config = ReflectorConfig {
                poll_interval: Duration::from_millis(poll_ms),
                history_capacity: history,
            };
            reflect(defaults, &query, config)?;
        }
    }
    Ok(())
}

fn epoch_millis() -> Result<f64> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock is before the epoch")?;
    Ok(elapsed.as_secs_f64() * 1000.0)
}

fn reflect(defaults: QueryObject, query: &str, config: ReflectorConfig) -> Result<()> {
    // One mailbox per message type; views subscribe to them by address.
    let mailbox = Rc::new(Mailbox::new());
    let announcer = ErrorAnnouncer::with_mailbox(Rc::new(Mailbox::new()));
    let printer = callback(|state: Option<&QueryObject>| {
        if let Some(state) = state {
            match serde_json::to_string(state) {
                Ok(json) => println!("state {json}"),
                Err(err) => tracing::error!(%err, "failed to serialize state"),
            }
        }
    });
    mailbox.subscribe(STATE_ADDRESS, &printer);

    let errors = callback(|message: Option<&ErrorMessage>| {
        if let Some(message) = message {
            eprintln!("error: {}", message.message);
        }
    });
    announcer.listen(&errors);

    let mut session = Session::new(defaults, query, config, &mailbox, announcer);

    for line in io::stdin().lock().lines() {
        let line = line.context("read command")?;
        let command = match SessionCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                session.errors().announce(format!("{err:#}"));
                continue;
            }
        };
        if command == SessionCommand::Quit {
            break;
        }
        if let Some(output) = session.run(&command) {
            println!("{output}");
        }
        if let Some(output) = session.poll(Instant::now()) {
            println!("{output}");
        }
    }
    if let Some(output) = session.run(&SessionCommand::Tick).filter(|out| out != "unchanged") {
        println!("{output}");
    }
    Ok(())
}
