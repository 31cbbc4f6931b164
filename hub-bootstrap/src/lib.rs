pub mod context;
pub mod lifecycle;

pub use lifecycle::{run_standalone, run_with_config};

pub async fn run() -> anyhow::Result<()> {
    run_standalone().await
}
