// backend/services/job-search/reindex-worker/src/main.rs

use job_search::infrastructure::bootstrap::run_reindex_worker;
use shared_kernel::errors::AppResult;

#[tokio::main]
async fn main() -> AppResult<()> {
    run_reindex_worker().await
}
