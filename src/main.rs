#[tokio::main]
async fn main() -> std::io::Result<()> {
    smartsell_backend::run().await
}
