use std::path::PathBuf;

use miette::Result;

use modkit_github::GitHubClient;
use modkit_ops::ops_install::{install, InstallOptions};
use modkit_util::errors::ModkitError;

pub async fn exec(dir: Option<PathBuf>, verbose: bool) -> Result<()> {
    let cwd = std::env::current_dir().map_err(ModkitError::Io)?;
    let root = modkit_ops::find_project_root(&cwd)?;
    let game_dir = dir.unwrap_or_else(|| root.clone());

    let client = GitHubClient::new()?;
    install(&root, &client, &InstallOptions { game_dir, verbose }).await?;
    Ok(())
}
