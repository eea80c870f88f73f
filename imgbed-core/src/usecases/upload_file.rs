use super::prelude::*;

pub fn upload_file<G>(gw: &G, options: &UploadOptions) -> Result<String>
where
    G: ImageHostGateway + ?Sized,
{
    if options.file_path.as_os_str().is_empty() {
        return Err(Error::EmptyPath);
    }
    let url = gw.upload_image(options)?;
    if url.is_empty() {
        log::warn!("The server did not return the location of the uploaded file");
    } else {
        log::info!("Uploaded {} to {url}", options.file_path.display());
    }
    Ok(url)
}
