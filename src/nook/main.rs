use std::io;

use clap::Parser;
use nook::error::Result;
use nook::navigator::Navigator;
use nook::prompt::Prompter;
use nook::styles::THEME;

mod args;
use args::Cli;

const BANNER: &str = "Welcome to nook, your note archive.";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.plain {
        console::set_colors_enabled(false);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut term = Prompter::new(stdin.lock(), stdout.lock());

    term.say(THEME.title.apply_to(BANNER))?;
    Navigator::new().run(&mut term)
}
