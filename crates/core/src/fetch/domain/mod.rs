pub mod audio_asset;
pub mod audio_destination;
pub mod audio_fetcher;
