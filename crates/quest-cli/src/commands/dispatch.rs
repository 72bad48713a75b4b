use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Play(args) => commands::play::handle(&args, ctx, flags).await,
        Commands::List => commands::list::handle(ctx, flags),
        Commands::Show(args) => commands::show::handle(&args, ctx, flags),
        Commands::Check(args) => commands::check::handle(&args, ctx, flags).await,
    }
}
