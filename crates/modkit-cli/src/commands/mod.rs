//! Command dispatch and handler modules.

mod add;
mod init;
mod install;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub async fn dispatch(cli: Cli) -> Result<()> {
    let verbose = cli.verbose;
    match cli.command {
        Command::Init {
            name,
            description,
            game,
            game_version,
        } => init::exec(
            name.as_deref(),
            description.as_deref(),
            game.as_deref(),
            &game_version,
        ),
        Command::Add { repo, version } => add::exec(repo.as_deref(), &version).await,
        Command::Install { dir } => install::exec(dir, verbose).await,
    }
}
