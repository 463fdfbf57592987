use dialoguer::Input;
use miette::Result;

use modkit_core::repo::Repo;
use modkit_github::GitHubClient;
use modkit_ops::ops_add::{add, AddOptions};
use modkit_util::errors::ModkitError;

pub async fn exec(repo: Option<&str>, version: &str) -> Result<()> {
    let repo = match repo {
        Some(r) => r.to_string(),
        None => Input::new()
            .with_prompt("Repo")
            .interact_text()
            .map_err(|e| ModkitError::Generic {
                message: format!("Prompt failed: {e}"),
            })?,
    };
    let repo = Repo::new(&repo);

    let cwd = std::env::current_dir().map_err(ModkitError::Io)?;
    let root = modkit_ops::find_project_root(&cwd)?;
    let client = GitHubClient::new()?;

    // "latest" is pinned to the concrete tag of the newest release that
    // publishes a manifest, so the written constraint stays reproducible.
    let constraint = if version == "latest" {
        let manifest = client.latest_manifest(&repo).await?;
        manifest.version.ok_or_else(|| ModkitError::ManifestNotFound {
            repo: repo.to_string(),
            version: "latest".to_string(),
        })?
    } else {
        version.to_string()
    };

    add(&root, &client, &AddOptions { repo, constraint }).await
}
