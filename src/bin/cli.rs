use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    pantry::cli::run().await
}
