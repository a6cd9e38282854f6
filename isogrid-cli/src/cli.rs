use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "igcli",
    about = "Isogrid headless viewer CLI",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Replay a scripted input sequence through the headless viewer
    Replay {
        /// Path to the .toml replay script
        script: String,
        /// Print only the final state instead of every frame
        #[arg(long)]
        summary: bool,
    },
    /// Print the static tile grid categories
    Scene,
}
