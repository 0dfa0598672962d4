mod command_runner;
mod downloader;

pub use command_runner::CommandRunner;
pub use downloader::Downloader;
