//! Decoders for the classic audio mixer, including the variable-length
//! level meter stream.

use prism::logging::Logger;

use crate::decode::{enum16, enum8, enum_code, DecodeError, DecodeResult};
use crate::net::buffer::ByteBuffer;
use crate::protocol::audio::audio_word_to_db;
use crate::protocol::enums::{AudioSource, ProtoEnum};
use crate::state::SwitcherState;

pub fn mixer_input(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    let source = enum16(buf, 0)?;
    let input = &mut state.audio_mixer.input[source];

    input.kind = Some(enum8(buf, 2)?);
    input.from_media_player = buf.flag8(6, 0)?;
    input.plug = Some(enum8(buf, 7)?);
    input.mix_option = Some(enum8(buf, 8)?);
    input.volume = audio_word_to_db(buf.u16(10)?);
    input.balance = buf.fixed_s16(12, 10_000.0)?;
    Ok(())
}

pub fn mixer_master(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    state.audio_mixer.master.volume = audio_word_to_db(buf.u16(0)?);
    Ok(())
}

pub fn mixer_monitor(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let monitor = &mut state.audio_mixer.monitor;

    monitor.monitor_audio = buf.flag8(0, 0)?;
    monitor.volume = audio_word_to_db(buf.u16(2)?);
    monitor.mute = buf.flag8(4, 0)?;
    monitor.solo = buf.flag8(5, 0)?;
    monitor.solo_input = Some(enum16(buf, 6)?);
    monitor.dim = buf.flag8(8, 0)?;
    Ok(())
}

/// Level meters: a 36-byte master block, then the source id list padded to a
/// multiple of four bytes, then one 16-byte record per source.
pub fn mixer_levels(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let count = buf.u16(0)?;
    if count as usize > AudioSource::COUNT {
        return Err(DecodeError::BadCount {
            what: AudioSource::WHAT,
            count,
        });
    }

    let levels = &mut state.audio_mixer.levels;
    levels.num_sources = count;
    levels.master.left = buf.u16(5)?;
    levels.master.right = buf.u16(9)?;
    levels.master.peak.left = buf.u16(13)?;
    levels.master.peak.right = buf.u16(17)?;
    levels.monitor = buf.u16(21)?;

    let mut sources = Vec::with_capacity(count as usize);
    for index in 0..count as usize {
        sources.push(enum_code::<AudioSource>(buf.u16(36 + (index << 1))?)?);
    }

    // The id list is transmitted in 4-byte chunks.
    let mut ids_len = count as usize * 2;
    if count & 1 != 0 {
        ids_len += 2;
    }

    for (index, source) in sources.into_iter().enumerate() {
        let record = 36 + ids_len + index * 16;
        let entry = &mut levels.sources[source];

        entry.left = buf.u16(record + 1)?;
        entry.right = buf.u16(record + 5)?;
        entry.peak.left = buf.u16(record + 9)?;
        entry.peak.right = buf.u16(record + 13)?;
    }

    Ok(())
}

pub fn mixer_tally(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    let count = buf.u16(0)?;
    if count as usize >= AudioSource::COUNT {
        return Err(DecodeError::BadCount {
            what: AudioSource::WHAT,
            count,
        });
    }

    state.audio_mixer.tally.num_sources = count;

    for index in 0..count as usize {
        let offset = 2 + 3 * index;
        let source = enum16::<AudioSource>(buf, offset)?;
        state.audio_mixer.tally.sources[source].is_mixed_in = buf.flag8(offset + 2, 0)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::enums::{AudioMixerInputMixOption, AudioMixerInputPlugType};
    use prism::logging;

    fn decode(handler: crate::decode::Handler, payload: &[u8]) -> SwitcherState {
        let mut state = SwitcherState::default();
        let mut buf = ByteBuffer::new(crate::protocol::INPUT_BUFFER_LEN);
        buf.load(payload);
        handler(&mut state, &buf, &logging::discard()).unwrap();
        state
    }

    #[test]
    fn test_mixer_input() {
        let mut payload = vec![0u8; 16];
        payload[0..2].copy_from_slice(&(1301u16).to_be_bytes()); // mic1
        payload[2] = 0x02; // externalAudio
        payload[6] = 0x00;
        payload[7] = 32; // xlr
        payload[8] = 0x01; // on
        payload[10..12].copy_from_slice(&(32768u16).to_be_bytes()); // 0 dB
        payload[12..14].copy_from_slice(&(-5000i16).to_be_bytes()); // balance -0.5

        let state = decode(mixer_input, &payload);
        let input = &state.audio_mixer.input[AudioSource::Mic1];

        assert_eq!(input.plug, Some(AudioMixerInputPlugType::Xlr));
        assert_eq!(input.mix_option, Some(AudioMixerInputMixOption::On));
        assert!((input.volume - 0.0).abs() < 1e-9);
        assert!((input.balance + 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_mixer_master() {
        let state = decode(mixer_master, &[0x80, 0x00, 0x00, 0x00]);
        assert!((state.audio_mixer.master.volume - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_mixer_levels_two_sources() {
        let mut payload = vec![0u8; 36 + 4 + 32];
        payload[0..2].copy_from_slice(&(2u16).to_be_bytes());
        payload[5..7].copy_from_slice(&(1000u16).to_be_bytes()); // master left
        payload[9..11].copy_from_slice(&(2000u16).to_be_bytes()); // master right
        payload[13..15].copy_from_slice(&(3000u16).to_be_bytes()); // peak left
        payload[17..19].copy_from_slice(&(4000u16).to_be_bytes()); // peak right
        payload[21..23].copy_from_slice(&(5000u16).to_be_bytes()); // monitor

        payload[36..38].copy_from_slice(&(1u16).to_be_bytes()); // input1
        payload[38..40].copy_from_slice(&(1301u16).to_be_bytes()); // mic1

        let first = 36 + 4;
        payload[first + 1..first + 3].copy_from_slice(&(11u16).to_be_bytes());
        payload[first + 5..first + 7].copy_from_slice(&(12u16).to_be_bytes());
        payload[first + 9..first + 11].copy_from_slice(&(13u16).to_be_bytes());
        payload[first + 13..first + 15].copy_from_slice(&(14u16).to_be_bytes());

        let second = first + 16;
        payload[second + 1..second + 3].copy_from_slice(&(21u16).to_be_bytes());

        let state = decode(mixer_levels, &payload);
        let levels = &state.audio_mixer.levels;

        assert_eq!(levels.num_sources, 2);
        assert_eq!(levels.master.left, 1000);
        assert_eq!(levels.master.peak.right, 4000);
        assert_eq!(levels.monitor, 5000);
        assert_eq!(levels.sources[AudioSource::Input1].left, 11);
        assert_eq!(levels.sources[AudioSource::Input1].peak.right, 14);
        assert_eq!(levels.sources[AudioSource::Mic1].left, 21);
    }

    #[test]
    fn test_mixer_levels_rejects_huge_count() {
        let mut state = SwitcherState::default();
        let mut buf = ByteBuffer::new(crate::protocol::INPUT_BUFFER_LEN);
        buf.load(&[0x01, 0x00, 0, 0, 0, 0]);

        let result = mixer_levels(&mut state, &buf, &logging::discard());
        assert_eq!(
            result.unwrap_err(),
            DecodeError::BadCount { what: "audio source", count: 256 }
        );
    }

    #[test]
    fn test_mixer_tally() {
        let mut payload = vec![0u8; 8];
        payload[0..2].copy_from_slice(&(2u16).to_be_bytes());
        payload[2..4].copy_from_slice(&(1u16).to_be_bytes()); // input1
        payload[4] = 0x01;
        payload[5..7].copy_from_slice(&(2u16).to_be_bytes()); // input2
        payload[7] = 0x00;

        let state = decode(mixer_tally, &payload);

        assert_eq!(state.audio_mixer.tally.num_sources, 2);
        assert!(state.audio_mixer.tally.sources[AudioSource::Input1].is_mixed_in);
        assert!(!state.audio_mixer.tally.sources[AudioSource::Input2].is_mixed_in);
    }
}
