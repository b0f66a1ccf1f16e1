//! Sample encoding
//!
//! Converts mixed f64 samples into the little-endian i16 byte stream that
//! leaves the synthesis core.

use super::{MAX_AMP, SAMPLE_RATE};

/// Number of samples in `duration` seconds at the output rate
///
/// Truncates toward zero. Negative or NaN durations yield zero samples.
pub fn sample_count(duration: f64) -> usize {
    (duration * SAMPLE_RATE as f64) as usize
}

/// Encode one sample as a little-endian i16
///
/// The sample must already be clamped to -1.0..=1.0; the value is scaled by
/// 32767 and truncated toward zero.
pub fn encode_sample(sample: f64) -> [u8; 2] {
    debug_assert!(
        (-1.0..=1.0).contains(&sample),
        "sample {sample} must be clamped before encoding"
    );
    // Float-to-int casts saturate, so an unclamped value can never wrap
    ((sample * MAX_AMP) as i16).to_le_bytes()
}

/// Encode a whole waveform, two bytes per sample
pub fn encode_samples(samples: &[f64]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        bytes.extend_from_slice(&encode_sample(sample));
    }
    bytes
}

/// Decode a little-endian i16 byte stream back into PCM samples
///
/// A trailing odd byte is ignored.
pub fn decode_pcm_i16(bytes: &[u8]) -> Vec<i16> {
    bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_code() {
        assert_eq!(encode_sample(0.0), [0, 0]);
        assert_eq!(encode_sample(-0.0), [0, 0]);
    }

    #[test]
    fn test_extremes() {
        let pos = i16::from_le_bytes(encode_sample(1.0));
        let neg = i16::from_le_bytes(encode_sample(-1.0));

        assert_eq!(pos, i16::MAX);
        assert_eq!(neg, -i16::MAX); // Note: -32767, not -32768
        assert!(pos > 0 && neg < 0);
    }

    #[test]
    fn test_truncates_toward_zero() {
        // 0.5 * 32767 = 16383.5
        assert_eq!(i16::from_le_bytes(encode_sample(0.5)), 16383);
        assert_eq!(i16::from_le_bytes(encode_sample(-0.5)), -16383);
    }

    #[test]
    fn test_little_endian_layout() {
        // 32767 = 0x7FFF, low byte first
        assert_eq!(encode_sample(1.0), [0xFF, 0x7F]);
        // -32767 = 0x8001
        assert_eq!(encode_sample(-1.0), [0x01, 0x80]);
    }

    #[test]
    fn test_encode_decode() {
        let samples = [0.0, 0.25, -0.25, 1.0, -1.0];
        let bytes = encode_samples(&samples);
        assert_eq!(bytes.len(), samples.len() * 2);

        let pcm = decode_pcm_i16(&bytes);
        assert_eq!(pcm, vec![0, 8191, -8191, 32767, -32767]);
    }

    #[test]
    fn test_sample_count() {
        assert_eq!(sample_count(0.0), 0);
        assert_eq!(sample_count(1.0), 44100);
        assert_eq!(sample_count(5.0), 220500);
        assert_eq!(sample_count(0.1), 4410);
        assert_eq!(sample_count(-1.0), 0);
    }
}
