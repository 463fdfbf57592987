use dialoguer::Input;
use miette::Result;

use modkit_ops::ops_init::{init, InitOptions};
use modkit_util::errors::ModkitError;

pub fn exec(
    name: Option<&str>,
    description: Option<&str>,
    game: Option<&str>,
    game_version: &str,
) -> Result<()> {
    let cwd = std::env::current_dir().map_err(ModkitError::Io)?;

    let opts = InitOptions {
        name: field("Name", name)?,
        description: field("Description", description)?,
        game_executable: field("Game executable", game)?,
        game_version: game_version.to_string(),
    };

    init(&cwd, &opts)?;
    Ok(())
}

/// Take a flag value if given, otherwise prompt when attended. In
/// non-interactive runs a missing flag is simply left empty.
fn field(label: &str, flag: Option<&str>) -> Result<String> {
    if let Some(value) = flag {
        return Ok(value.to_string());
    }
    if !console::user_attended() {
        return Ok(String::new());
    }
    Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| {
            ModkitError::Generic {
                message: format!("Prompt failed: {e}"),
            }
            .into()
        })
}
