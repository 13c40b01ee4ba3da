//! Host the in-memory stub record store.

use amparo_client::stub::StubStore;

pub async fn handle(port: u16) -> anyhow::Result<()> {
    let stub = StubStore::bind(&format!("127.0.0.1:{port}"))?;
    println!("stub record store listening on {}", stub.url());
    println!("press Ctrl-C to stop");
    tokio::signal::ctrl_c().await?;
    Ok(())
}
