pub mod archive;
pub mod filesystem;
mod http_downloader;
mod process_runner;

pub use http_downloader::HttpDownloader;
pub use process_runner::ProcessCommandRunner;
