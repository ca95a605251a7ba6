use anyhow::Result;
use clap::Parser;
use console::style;

use timerbar::cli::{Cli, Command};
use timerbar::{config, paths, tui};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Demo { duration } => {
            let cfg = config::load_config()?;
            let duration_millis = duration.unwrap_or(cfg.timer.duration_millis);

            let mut terminal = tui::init()?;
            let outcome = tui::screens::demo::run(&mut terminal, duration_millis, &cfg.display);
            tui::restore()?;
            outcome?;

            println!("  {}", style("Demo closed.").dim());
            Ok(())
        }

        Command::Paths => {
            println!("{}", style("timerbar file locations").bold());
            println!();
            println!("  Config: {}", paths::config_file().display());
            Ok(())
        }
    }
}
