use crate::cmd::{self, TargetPlatform};
use anyhow::Result;
use clap::Args;
use contest_tracker_libs::{
    store::{postgres::PgContestStore, ContestStore},
    sync::ContestSyncer,
    types::Platform,
};
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct SyncArgs {
    target: TargetPlatform,
}

/// One-shot sync cycle, intended to run from cron. Each platform reports its
/// own outcome; a failing platform never stops the others.
pub async fn run(args: SyncArgs) -> Result<()> {
    let pool = cmd::connect_pool().await?;
    let store: Arc<dyn ContestStore> = Arc::new(PgContestStore::new(pool));
    let syncer = ContestSyncer::new(store, cmd::enabled_sources()?);

    let outcomes = match args.target {
        TargetPlatform::All => syncer.sync_all().await,
        TargetPlatform::Codeforces => {
            let platform = Platform::Codeforces;
            vec![(platform, syncer.sync_platform(platform).await)]
        }
        TargetPlatform::Codechef => {
            let platform = Platform::Codechef;
            vec![(platform, syncer.sync_platform(platform).await)]
        }
    };

    let mut failed = false;
    for (platform, outcome) in outcomes {
        match outcome {
            Ok(count) => tracing::info!("{} contests synced for {}.", count, platform),
            Err(e) => {
                failed = true;
                tracing::error!("failed to sync {}: {:?}", platform, e);
            }
        }
    }

    if failed {
        anyhow::bail!("one or more platforms failed to sync");
    }

    Ok(())
}
