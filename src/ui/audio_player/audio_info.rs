use std::path::Path;
use std::time::Duration;

/// Probe the duration of a cached audio file for the selected-file label.
///
/// WAV durations come from the header via hound, MP3 durations from a frame
/// walk via mp3-duration. Other formats return `None`; the label then simply
/// omits the duration, playback itself is unaffected.
pub fn probe_duration(path: &Path) -> Option<Duration> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "wav" => wav_duration(path),
        "mp3" => match mp3_duration::from_path(path) {
            Ok(duration) => Some(duration),
            Err(e) => {
                log::warn!("MP3 duration probe failed for {}: {e:?}", path.display());
                None
            }
        },
        _ => None,
    }
}

fn wav_duration(path: &Path) -> Option<Duration> {
    let reader = match hound::WavReader::open(path) {
        Ok(reader) => reader,
        Err(e) => {
            log::warn!("WAV duration probe failed for {}: {e}", path.display());
            return None;
        }
    };

    let spec = reader.spec();
    if spec.sample_rate == 0 {
        return None;
    }

    let secs = f64::from(reader.duration()) / f64::from(spec.sample_rate);
    Some(Duration::from_secs_f64(secs))
}

/// Format a duration as MM:SS, or H:MM:SS from one hour up
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{format_duration, probe_duration};

    fn write_wav(path: &std::path::Path, samples: u32, sample_rate: u32) {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for _ in 0..samples {
            writer.write_sample(0i16).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn wav_duration_comes_from_the_header() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("tone.wav");
        write_wav(&path, 8000, 8000);

        let duration = probe_duration(&path).unwrap();
        assert_eq!(duration, Duration::from_secs(1));
    }

    #[test]
    fn unknown_extension_probes_to_none() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("book.m4b");
        std::fs::write(&path, b"not probed").unwrap();

        assert_eq!(probe_duration(&path), None);
    }

    #[test]
    fn unreadable_wav_probes_to_none() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.wav");
        std::fs::write(&path, b"RIFFnope").unwrap();

        assert_eq!(probe_duration(&path), None);
    }

    #[test]
    fn durations_format_as_minutes_and_seconds() {
        assert_eq!(format_duration(Duration::from_secs(0)), "00:00");
        assert_eq!(format_duration(Duration::from_secs(61)), "01:01");
        assert_eq!(format_duration(Duration::from_secs(3599)), "59:59");
    }

    #[test]
    fn hour_long_durations_gain_an_hours_segment() {
        assert_eq!(format_duration(Duration::from_secs(3600)), "1:00:00");
        assert_eq!(format_duration(Duration::from_secs(3661)), "1:01:01");
        assert_eq!(
            format_duration(Duration::from_secs(11 * 3600 + 23 * 60 + 45)),
            "11:23:45"
        );
    }
}
