//! Audio level conversions between the mixer's 16-bit raw words and dB.

/// Raw audio word to dB. Words at or below 32 floor to -60 dB.
#[inline]
pub fn audio_word_to_db(word: u16) -> f64 {
    if word <= 32 {
        return -60.0;
    }

    (word as f64 / (1 << 11) as f64 / 16.0).log10() * 20.0
}

/// dB to raw audio word. Inverse of `audio_word_to_db` for the usable
/// -48..+6 dB range.
#[inline]
pub fn audio_db_to_word(db: f64) -> u16 {
    (10f64.powf(db / 20.0) * 16.0 * (1 << 11) as f64) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_unity_gain() {
        assert!((audio_word_to_db(32768) - 0.0).abs() < 1e-9);
        assert_eq!(audio_db_to_word(0.0), 32768);
    }

    #[test]
    fn test_floor() {
        assert_eq!(audio_word_to_db(0), -60.0);
        assert_eq!(audio_word_to_db(32), -60.0);
        assert!(audio_word_to_db(33) > -60.0);
    }

    #[test]
    fn test_word_roundtrip() {
        let mut rng = rand::thread_rng();

        for _ in 0..10_000 {
            let word: u16 = rng.gen_range(33..u16::max_value());
            let back = audio_db_to_word(audio_word_to_db(word));
            let diff = (back as i32 - word as i32).abs();
            assert!(diff <= 1, "word {} came back as {}", word, back);
        }
    }

    #[test]
    fn test_extremes() {
        // +6 dB is the top of the fader range.
        let top = audio_db_to_word(6.0);
        assert!(top > 60_000);

        // -48 dB still lands above the -60 floor.
        let low = audio_db_to_word(-48.0);
        assert!(low > 32);
        assert!(audio_word_to_db(low) > -60.0);
    }
}
