use clap::{Parser, Subcommand};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8001";

#[derive(Parser, Debug)]
#[command(name = "sid", about = "Chat with SID from the terminal")]
pub struct Cli {
    /// Base URL of the SID API server.
    #[arg(long, global = true, env = "SID_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send one message and print the reply.
    Send {
        message: String,

        /// Answer locally without contacting the server.
        #[arg(long)]
        offline: bool,
    },
    /// Chat interactively; `exit` or `quit` ends the session.
    Repl {
        /// Answer locally without contacting the server.
        #[arg(long)]
        offline: bool,
    },
    /// Check that the server is up.
    Health,
    /// Print the version.
    Version,
}
