use quest_core::responses::PuzzleView;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShowArgs;
use crate::commands::shared::position_of;
use crate::context::AppContext;
use crate::output::{ViewOptions, output};

/// Handle `sqlquest show`.
pub fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let position = position_of(&ctx.catalog, args.id)?;
    let puzzle = ctx.catalog.by_id(args.id)?;
    let view = PuzzleView::new(
        puzzle,
        position,
        ctx.catalog.len(),
        args.hint,
        args.explanation,
        false,
    );

    let options = ViewOptions {
        show_schema: true,
        ..ViewOptions::from_prefs(&ctx.config.display)
    };
    output(&view, flags.format, &options)
}
