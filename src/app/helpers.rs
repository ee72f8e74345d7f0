//! Async helpers run through `Task::perform`

use std::path::PathBuf;

use crate::features::export;
use crate::features::{AvatarSettings, User};

/// Export avatars on the blocking pool
pub async fn export_avatars(
    users: Vec<User>,
    style: AvatarSettings,
    dir: PathBuf,
) -> anyhow::Result<(usize, PathBuf)> {
    tokio::task::spawn_blocking(move || {
        let start = std::time::Instant::now();
        let count = export::export_avatars(&users, &style, &dir)?;
        tracing::info!("Avatar export finished in {:?}", start.elapsed());
        Ok((count, dir))
    })
    .await?
}
