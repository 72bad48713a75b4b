use anyhow::Context;
use quest_core::Catalog;
use quest_session::Session;

use crate::progress::Progress;

/// Catalog position of puzzle `id`.
pub fn position_of(catalog: &Catalog, id: u32) -> anyhow::Result<usize> {
    catalog
        .position_of(id)
        .with_context(|| format!("no puzzle with id {id}"))
}

/// Start a session at `position`, with a spinner while the engine loads.
pub async fn start_session(catalog: Catalog, position: usize) -> anyhow::Result<Session> {
    let spinner = Progress::spinner("SQLエンジンを読み込み中...");
    match Session::start(catalog, position).await {
        Ok(session) => {
            spinner.finish_clear();
            Ok(session)
        }
        Err(error) => {
            spinner.finish_err("SQLエンジンの読み込みに失敗しました");
            Err(error).context("failed to start puzzle session")
        }
    }
}
