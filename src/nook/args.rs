use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "nook", version)]
#[command(
    about = "An interactive, menu-driven archive for quick notes",
    long_about = None
)]
pub struct Cli {
    /// Disable styled output
    #[arg(long)]
    pub plain: bool,
}
