use super::prelude::*;

pub fn delete_file<G>(gw: &G, path: &str, folder: bool) -> Result<()>
where
    G: ImageHostGateway + ?Sized,
{
    if path.is_empty() {
        return Err(Error::EmptyPath);
    }
    gw.delete_file(path, folder)?;
    log::info!("Deleted {path}");
    Ok(())
}
