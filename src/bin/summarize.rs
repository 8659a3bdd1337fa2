#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tldr_summarize::cli::run().await
}
