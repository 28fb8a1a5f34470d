use anyhow::{Result, bail};
use imsapi::Connector;

fn main() -> Result<()> {
    // Example program that calls the library API.
    // Configure the server and credentials via IMSAPI_* env vars.
    let mut connector = Connector::from_env()?;

    if !connector.authenticate()? {
        bail!("login rejected, check IMSAPI_USERNAME / IMSAPI_PASSWORD");
    }

    for asset in connector.get_assets()? {
        println!(
            "{:>6}  {}  deleted={}  updated={}  tags={:?}",
            asset.id, asset.name, asset.is_deleted, asset.last_updated, asset.tags
        );
    }

    Ok(())
}
