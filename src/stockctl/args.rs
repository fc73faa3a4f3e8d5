use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "stockctl", version)]
#[command(about = "Interactive warehouse and shelf stock manager", long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long)]
    pub plain: bool,
}
