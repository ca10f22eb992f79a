pub mod output_destination;
pub mod transcript_writer;
