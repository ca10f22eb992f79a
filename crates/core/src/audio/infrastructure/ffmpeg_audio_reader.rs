use std::path::Path;

use ffmpeg_next::format::{sample::Type as SampleType, Sample};
use ffmpeg_next::software::resampling;
use ffmpeg_next::util::frame::audio::Audio;
use ffmpeg_next::{decoder, media, ChannelLayout};

use crate::audio::domain::audio_reader::{AudioDecodeError, AudioReader};
use crate::audio::domain::audio_segment::AudioSegment;

/// Decodes downloaded media with ffmpeg-next.
pub struct FfmpegAudioReader;

impl AudioReader for FfmpegAudioReader {
    fn read_audio(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<AudioSegment, AudioDecodeError> {
        let open_err = |e: ffmpeg_next::Error| AudioDecodeError::Open {
            path: path.to_path_buf(),
            message: e.to_string(),
        };
        let decode_err = |e: ffmpeg_next::Error| AudioDecodeError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        ffmpeg_next::init().map_err(open_err)?;
        let mut input = ffmpeg_next::format::input(path).map_err(open_err)?;

        let stream = input
            .streams()
            .best(media::Type::Audio)
            .ok_or_else(|| AudioDecodeError::NoAudioStream(path.to_path_buf()))?;
        let stream_index = stream.index();
        let mut audio_decoder =
            ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())
                .and_then(|ctx| ctx.decoder().audio())
                .map_err(open_err)?;

        let mut sink = MonoSink::new(&audio_decoder, target_sample_rate).map_err(open_err)?;

        for (packet_stream, packet) in input.packets() {
            if packet_stream.index() != stream_index {
                continue;
            }
            audio_decoder.send_packet(&packet).map_err(decode_err)?;
            sink.drain(&mut audio_decoder).map_err(decode_err)?;
        }
        audio_decoder.send_eof().map_err(decode_err)?;
        sink.drain(&mut audio_decoder).map_err(decode_err)?;

        let samples = sink.finish().map_err(decode_err)?;
        log::debug!(
            "Decoded {} samples at {target_sample_rate} Hz from {}",
            samples.len(),
            path.display()
        );
        Ok(AudioSegment::new(samples, target_sample_rate))
    }
}

/// Resamples decoded frames to planar f32 mono and collects the samples.
struct MonoSink {
    resampler: resampling::Context,
    decoded: Audio,
    resampled: Audio,
    samples: Vec<f32>,
}

impl MonoSink {
    fn new(source: &decoder::Audio, rate: u32) -> Result<Self, ffmpeg_next::Error> {
        let resampler = resampling::Context::get(
            source.format(),
            source.channel_layout(),
            source.rate(),
            Sample::F32(SampleType::Planar),
            ChannelLayout::MONO,
            rate,
        )?;
        Ok(Self {
            resampler,
            decoded: Audio::empty(),
            resampled: Audio::empty(),
            samples: Vec::new(),
        })
    }

    /// Pull every frame the decoder has ready.
    fn drain(&mut self, source: &mut decoder::Audio) -> Result<(), ffmpeg_next::Error> {
        while source.receive_frame(&mut self.decoded).is_ok() {
            self.resampler.run(&self.decoded, &mut self.resampled)?;
            self.collect();
        }
        Ok(())
    }

    /// Flush samples still buffered in the resampler.
    fn finish(mut self) -> Result<Vec<f32>, ffmpeg_next::Error> {
        if let Some(delay) = self.resampler.flush(&mut self.resampled)? {
            if delay.output > 0 {
                self.collect();
            }
        }
        Ok(self.samples)
    }

    fn collect(&mut self) {
        let count = self.resampled.samples();
        if count == 0 {
            return;
        }
        let plane = self.resampled.data(0);
        // SAFETY: the resampler output is planar f32 mono, so plane 0 holds
        // `count` contiguous f32 values.
        let floats = unsafe { std::slice::from_raw_parts(plane.as_ptr() as *const f32, count) };
        self.samples.extend_from_slice(floats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_open_error() {
        let path = if cfg!(windows) {
            Path::new("Z:\\nonexistent\\audio.mp3")
        } else {
            Path::new("/nonexistent/audio.mp3")
        };
        match FfmpegAudioReader.read_audio(path, 16000) {
            Err(AudioDecodeError::Open { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected open error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_media_file_is_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("notes.mp3");
        std::fs::write(&path, b"definitely not an mp3").unwrap();
        let err = FfmpegAudioReader.read_audio(&path, 16000).unwrap_err();
        assert!(err.to_string().contains("notes.mp3"), "got: {err}");
    }
}
