mod archive_downloader;
mod recording_runner;
mod source_fixture;

pub use archive_downloader::ArchiveDownloader;
pub use recording_runner::RecordingRunner;
pub use source_fixture::write_release_sources;
