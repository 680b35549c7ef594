use anyhow::Result;
use celoscan::app::handler;

#[tokio::main]
async fn main() -> Result<()> {
    handler::init().await
}
