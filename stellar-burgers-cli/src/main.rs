//! Stellar Burgers CLI - poke the API from a terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{config, delete, ingredients, login, order, orders, register, whoami, Connection};

/// sb - manual probe for a Stellar Burgers server
#[derive(Parser)]
#[command(name = "sb", version, about, long_about = None)]
struct Cli {
    /// Server to talk to (overrides settings.json and env)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log request and response bodies to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a user
    Register {
        /// Generate email, password and name
        #[arg(long, conflicts_with_all = ["email", "password", "name"])]
        random: bool,
        #[arg(long, required_unless_present = "random")]
        email: Option<String>,
        #[arg(long, required_unless_present = "random")]
        password: Option<String>,
        #[arg(long, required_unless_present = "random")]
        name: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Log in and print the issued tokens
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the profile behind an access token
    Whoami {
        /// Access token as returned by register or login
        #[arg(long, env = "STELLAR_BURGERS_TOKEN")]
        token: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete the account behind an access token
    Delete {
        #[arg(long, env = "STELLAR_BURGERS_TOKEN")]
        token: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the ingredient catalog
    Ingredients {
        /// Only show the first N entries
        #[arg(long)]
        count: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Place an order
    Order {
        /// Ingredient ids (none sends an empty list)
        ids: Vec<String>,
        /// Order as this user; omit for an anonymous order
        #[arg(long, env = "STELLAR_BURGERS_TOKEN")]
        token: Option<String>,
        /// Use the first N catalog ingredients instead of explicit ids
        #[arg(long, conflicts_with = "ids")]
        first: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List orders of a user
    Orders {
        /// Omit to see the unauthorised answer
        #[arg(long, env = "STELLAR_BURGERS_TOKEN")]
        token: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective settings
    Config {
        /// Write them to settings.json
        #[arg(long)]
        save: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    stellar_burgers_core::telemetry::init(if cli.verbose { "debug" } else { "warn" });

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let conn = Connection::open(cli.base_url.as_deref(), cli.verbose)?;

    match cli.command {
        Commands::Register { random, email, password, name, json } => {
            let user = register::user_from_args(random, email, password, name)?;
            register::run(&conn, &user, json)
        }
        Commands::Login { email, password, json } => login::run(&conn, &email, &password, json),
        Commands::Whoami { token, json } => whoami::run(&conn, &token, json),
        Commands::Delete { token, json } => delete::run(&conn, &token, json),
        Commands::Ingredients { count, json } => ingredients::run(&conn, count, json),
        Commands::Order { ids, token, first, json } => {
            order::run(&conn, ids, first, token.as_deref(), json)
        }
        Commands::Orders { token, json } => orders::run(&conn, token.as_deref(), json),
        Commands::Config { save, json } => config::run(&conn, save, json),
    }
}
