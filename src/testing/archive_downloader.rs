use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use bzip2::Compression;
use bzip2::write::BzEncoder;

use crate::domain::AppError;
use crate::ports::Downloader;

/// Downloader that writes a locally built `.tar.bz2` instead of hitting the network.
#[derive(Default)]
pub struct ArchiveDownloader {
    entries: Vec<(String, String)>,
    pub requested: Mutex<Vec<String>>,
}

impl ArchiveDownloader {
    pub fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            entries: entries.iter().map(|(n, c)| (n.to_string(), c.to_string())).collect(),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl Downloader for ArchiveDownloader {
    fn download(&self, url: &str, dest: &Path) -> Result<(), AppError> {
        self.requested.lock().unwrap().push(url.to_string());

        let file = File::create(dest)?;
        let mut builder = tar::Builder::new(BzEncoder::new(file, Compression::fast()));
        for (name, content) in &self.entries {
            let mut header = tar::Header::new_gnu();
            header.set_size(content.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder.append_data(&mut header, name, content.as_bytes())?;
        }
        builder.into_inner()?.finish()?;
        Ok(())
    }
}
