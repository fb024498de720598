use anyhow::Context;
use carhub::domain::config::ApiConfig;
use carhub::kernel::config::load_config;
use carhub_server::{Server, init_logger};

#[carhub_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig = load_config(Some("server")).context("Critical: Configuration is malformed")?;
    let _log = init_logger(env!("CARGO_PKG_NAME"), &cfg.logging)?;

    Server::builder().config(cfg).build()?.run().await
}
