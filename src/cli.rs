use clap::Parser;

/// Syncs DayZ workshop mods with a server and joins it.
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "dzjoin", version, about)]
pub struct Cli {
    /// Update mods.
    #[arg(short, long)]
    pub update: bool,

    /// Delete mods in the DayZ folder.
    #[arg(short, long)]
    pub clean: bool,

    /// Don't join the server.
    #[arg(short, long)]
    pub dont_join: bool,

    /// Debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}
