//! Decoders for media players, the media pool and macros.

use prism::logging::Logger;

use crate::decode::{enum8, DecodeResult};
use crate::net::buffer::ByteBuffer;
use crate::state::SwitcherState;

pub fn clip_player(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    let player = enum8(buf, 0)?;
    let clip = &mut state.clip_player[player];

    clip.playing = buf.flag8(1, 0)?;
    clip.loop_playback = buf.flag8(2, 0)?;
    clip.at_beginning = buf.flag8(3, 0)?;
    clip.clip_frame = buf.u16(4)?;
    Ok(())
}

pub fn media_player_source(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let player = enum8(buf, 0)?;
    let source = &mut state.media_player.source[player];

    source.kind = Some(enum8(buf, 1)?);
    source.still_index = buf.u8(2)?;
    source.clip_index = buf.u8(3)?;
    Ok(())
}

pub fn media_pool_storage(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    state.media_pool_storage.clip1_max_length = buf.u16(0)?;
    state.media_pool_storage.clip2_max_length = buf.u16(2)?;
    Ok(())
}

pub fn clip_source(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    let bank = enum8(buf, 0)?;
    let clip = &mut state.media_player.clip_source[bank];

    clip.is_used = buf.flag8(1, 0)?;
    clip.file_name = buf.string(2, 16)?;
    clip.frames = buf.u16(66)?;
    Ok(())
}

pub fn audio_clip_source(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let bank = enum8(buf, 0)?;
    let clip = &mut state.media_player.audio_source[bank];

    clip.is_used = buf.flag8(1, 0)?;
    clip.file_name = buf.string(18, 16)?;
    Ok(())
}

pub fn still_file(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    let bank = enum8(buf, 3)?;

    if buf.u8(0)? != 0 {
        return Ok(());
    }

    let still = &mut state.media_player.still_file[bank];
    still.is_used = buf.flag8(4, 0)?;

    let name_len = buf.u8(23)? as usize;
    if name_len > 0 {
        still.file_name = buf.string(24, name_len)?;
    }

    Ok(())
}

pub fn macro_run_status(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let run = &mut state.macros.run_status;

    run.state.running = buf.flag8(0, 0)?;
    run.state.waiting = buf.flag8(0, 1)?;
    run.is_looping = buf.flag8(1, 0)?;
    run.index = buf.u16(2)?;
    Ok(())
}

pub fn macro_properties(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let index = enum8(buf, 1)?;
    let properties = &mut state.macros.properties[index];

    properties.is_used = buf.flag8(2, 0)?;

    let name_len = buf.u8(5)? as usize;
    properties.name = buf.string(8, name_len)?;
    Ok(())
}

pub fn macro_recording_status(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    state.macros.recording_status.is_recording = buf.flag8(0, 0)?;
    state.macros.recording_status.index = buf.u16(2)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::enums::{ClipBank, Macro, MediaPlayer, MediaPlayerSourceType, StillBank};
    use prism::logging;

    fn decode(handler: crate::decode::Handler, payload: &[u8]) -> SwitcherState {
        let mut state = SwitcherState::default();
        let mut buf = ByteBuffer::new(crate::protocol::INPUT_BUFFER_LEN);
        buf.load(payload);
        handler(&mut state, &buf, &logging::discard()).unwrap();
        state
    }

    #[test]
    fn test_clip_player() {
        let state = decode(clip_player, &[0x01, 0x01, 0x00, 0x01, 0x00, 0x96, 0x00, 0x00]);
        let clip = &state.clip_player[MediaPlayer::MediaPlayer2];

        assert!(clip.playing);
        assert!(!clip.loop_playback);
        assert!(clip.at_beginning);
        assert_eq!(clip.clip_frame, 150);
    }

    #[test]
    fn test_media_player_source() {
        let state = decode(media_player_source, &[0x00, 0x01, 0x05, 0x01]);
        let source = &state.media_player.source[MediaPlayer::MediaPlayer1];

        assert_eq!(source.kind, Some(MediaPlayerSourceType::Still));
        assert_eq!(source.still_index, 5);
        assert_eq!(source.clip_index, 1);
    }

    #[test]
    fn test_still_file() {
        let mut payload = vec![0u8; 40];
        payload[3] = 0x02; // stillBank3
        payload[4] = 0x01; // used
        payload[23] = 4; // name length
        payload[24..28].copy_from_slice(b"logo");

        let state = decode(still_file, &payload);
        let still = &state.media_player.still_file[StillBank::StillBank3];

        assert!(still.is_used);
        assert_eq!(still.file_name, "logo");
    }

    #[test]
    fn test_still_file_ignores_other_media_types() {
        let mut payload = vec![0u8; 40];
        payload[0] = 0x01;
        payload[3] = 0x00;
        payload[4] = 0x01;

        let state = decode(still_file, &payload);
        assert!(!state.media_player.still_file[StillBank::StillBank1].is_used);
    }

    #[test]
    fn test_macro_properties() {
        let mut payload = vec![0u8; 24];
        payload[1] = 0x03; // macro4
        payload[2] = 0x01; // used
        payload[5] = 6; // name length
        payload[8..14].copy_from_slice(b"OpenSh");

        let state = decode(macro_properties, &payload);
        let properties = &state.macros.properties[Macro::Macro4];

        assert!(properties.is_used);
        assert_eq!(properties.name, "OpenSh");
    }

    #[test]
    fn test_macro_recording_status() {
        let state = decode(macro_recording_status, &[0x01, 0x00, 0x00, 0x07]);

        assert!(state.macros.recording_status.is_recording);
        assert_eq!(state.macros.recording_status.index, 7);
    }

    #[test]
    fn test_clip_source() {
        let mut payload = vec![0u8; 68];
        payload[0] = 0x01; // clipBank2
        payload[1] = 0x01;
        payload[2..6].copy_from_slice(b"bump");
        payload[66..68].copy_from_slice(&(90u16).to_be_bytes());

        let state = decode(clip_source, &payload);
        let clip = &state.media_player.clip_source[ClipBank::ClipBank2];

        assert!(clip.is_used);
        assert_eq!(clip.file_name, "bump");
        assert_eq!(clip.frames, 90);
    }
}
