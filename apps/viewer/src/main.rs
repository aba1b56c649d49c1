#[tokio::main]
async fn main() -> anyhow::Result<()> {
    question_viewer::run().await
}
