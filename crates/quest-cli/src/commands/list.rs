use quest_core::responses::PuzzleSummary;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{ViewOptions, output};

/// Handle `sqlquest list`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let summaries = ctx
        .catalog
        .iter()
        .enumerate()
        .map(|(index, puzzle)| PuzzleSummary::new(puzzle, index, false))
        .collect::<Vec<_>>();

    output(
        &summaries,
        flags.format,
        &ViewOptions::from_prefs(&ctx.config.display),
    )
}
