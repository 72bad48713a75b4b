use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CheckArgs;
use crate::commands::shared::{position_of, start_session};
use crate::context::AppContext;
use crate::output::{ViewOptions, output};

/// Handle `sqlquest check`: one submission against a fresh engine.
///
/// Fails (non-zero exit) unless the answer is correct.
pub async fn handle(args: &CheckArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let sql = read_query(args)?;
    let position = position_of(&ctx.catalog, args.id)?;
    let mut session = start_session(ctx.catalog.clone(), position).await?;

    let response = session.submit(&sql).await;
    output(
        &response,
        flags.format,
        &ViewOptions::from_prefs(&ctx.config.display),
    )?;

    if !response.is_correct() {
        anyhow::bail!("puzzle {}: answer was {}", args.id, response.outcome);
    }
    Ok(())
}

fn read_query(args: &CheckArgs) -> anyhow::Result<String> {
    match (&args.query, &args.file) {
        (Some(query), _) => Ok(query.clone()),
        (None, Some(path)) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read query file {path}"))
        }
        (None, None) => anyhow::bail!("either --query or --file is required"),
    }
}
