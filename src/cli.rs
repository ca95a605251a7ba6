use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "timerbar")]
#[command(about = "A countdown timer bar widget for terminal UIs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive widget demo
    Demo {
        /// Countdown length in milliseconds (overrides the config file)
        #[arg(long)]
        duration: Option<u64>,
    },

    /// Show where the config file is stored
    Paths,
}
