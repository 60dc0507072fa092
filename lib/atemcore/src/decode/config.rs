//! Decoders for the configuration and topology tags the switcher streams at
//! the start of a session.

use prism::logging::Logger;

use crate::decode::{enum16, enum8, DecodeResult};
use crate::net::buffer::ByteBuffer;
use crate::state::SwitcherState;

pub fn version(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    state.protocol_version.major = buf.u16(0)?;
    state.protocol_version.minor = buf.u16(2)?;
    Ok(())
}

pub fn product_id(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    state.atem_model = buf.string(0, 44)?;
    Ok(())
}

pub fn warning(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    state.warning_text = buf.string(0, 44)?;
    Ok(())
}

pub fn topology(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    state.topology.m_es = buf.u8(0)?;
    state.topology.sources = buf.u8(1)?;
    state.topology.color_generators = buf.u8(2)?;
    state.topology.aux_busses = buf.u8(3)?;
    state.topology.downstream_keyers = buf.u8(4)?;
    state.topology.stingers = buf.u8(5)?;
    state.topology.dves = buf.u8(6)?;
    state.topology.super_sources = buf.u8(7)?;
    state.topology.has_sd_output = buf.flag8(9, 0)?;
    Ok(())
}

pub fn mix_effect_config(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let me = enum8(buf, 0)?;
    state.mix_effect_config[me].keyers = buf.u8(1)?;
    Ok(())
}

pub fn media_players(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    state.media_player.still_banks = buf.u8(0)?;
    state.media_player.clip_banks = buf.u8(1)?;
    Ok(())
}

pub fn multi_viewer_config(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    state.multi_viewer.config.multi_viewers = buf.u8(0)?;
    Ok(())
}

pub fn super_source_config(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    state.super_source.config.boxes = buf.u8(0)?;
    Ok(())
}

pub fn tally_channel_config(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    state.tally.channel_config.tally_channels = buf.u8(4)?;
    Ok(())
}

pub fn audio_mixer_config(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    state.audio_mixer.config.audio_channels = buf.u8(0)?;
    state.audio_mixer.config.has_monitor = buf.flag8(1, 0)?;
    Ok(())
}

pub fn video_mixer_config(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    // The high byte is reserved; mode flags live in the low three bytes.
    let packed = buf.u32(0)? & 0x00FF_FFFF;
    let bit = |n: u32| packed & (1 << n) != 0;

    let modes = &mut state.video_mixer.modes;
    modes.f525i59_94_ntsc = bit(0);
    modes.f625i_50_pal = bit(1);
    modes.f525i59_94_ntsc_16_9 = bit(2);
    modes.f625i_50_pal_16_9 = bit(3);
    modes.f720p50 = bit(4);
    modes.f720p59_94 = bit(5);
    modes.f1080i50 = bit(6);
    modes.f1080i59_94 = bit(7);
    modes.f1080p23_98 = bit(8);
    modes.f1080p24 = bit(9);
    modes.f1080p25 = bit(10);
    modes.f1080p29_97 = bit(11);
    modes.f1080p50 = bit(12);
    modes.f1080p59_94 = bit(13);
    modes.f2160p23_98 = bit(14);
    modes.f2160p24 = bit(15);
    modes.f2160p25 = bit(16);
    modes.f2160p29_97 = bit(17);
    Ok(())
}

pub fn macro_pool(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    state.macros.pool.banks = buf.u8(0)?;
    Ok(())
}

pub fn power(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    state.power.main = buf.flag8(0, 0)?;
    state.power.backup = buf.flag8(0, 1)?;
    Ok(())
}

pub fn down_converter(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    state.down_converter.mode = Some(enum8(buf, 0)?);
    Ok(())
}

pub fn video_mode(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    state.video_mode.format = Some(enum8(buf, 0)?);
    Ok(())
}

pub fn input_properties(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let source = enum16(buf, 0)?;
    let input = &mut state.input_properties[source];

    input.long_name = buf.string(2, 20)?;
    input.short_name = buf.string(22, 4)?;

    input.available_external_ports.sdi = buf.flag8(27, 0)?;
    input.available_external_ports.hdmi = buf.flag8(27, 1)?;
    input.available_external_ports.component = buf.flag8(27, 2)?;
    input.available_external_ports.composite = buf.flag8(27, 3)?;
    input.available_external_ports.s_video = buf.flag8(27, 4)?;

    input.external_port_type = Some(enum8(buf, 29)?);
    input.port_type = Some(enum8(buf, 30)?);

    input.availability.auxiliary = buf.flag8(34, 0)?;
    input.availability.multiviewer = buf.flag8(34, 1)?;
    input.availability.super_source_art = buf.flag8(34, 2)?;
    input.availability.super_source_box = buf.flag8(34, 3)?;
    input.availability.key_sources_everywhere = buf.flag8(34, 4)?;

    input.me_availability.me1_fill_sources = buf.flag8(35, 0)?;
    input.me_availability.me2_fill_sources = buf.flag8(35, 1)?;
    Ok(())
}

pub fn multi_viewer_properties(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let mv = enum8(buf, 0)?;
    state.multi_viewer.properties[mv].layout = Some(enum8(buf, 1)?);
    Ok(())
}

pub fn multi_viewer_input(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let mv = enum8(buf, 0)?;
    let window = enum8(buf, 1)?;
    state.multi_viewer.input[mv][window].video_source = Some(enum16(buf, 2)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::enums::{MixEffect, SwitcherPortType, VideoSource};
    use prism::logging;

    fn decode(handler: crate::decode::Handler, payload: &[u8]) -> SwitcherState {
        let mut state = SwitcherState::default();
        let mut buf = ByteBuffer::new(crate::protocol::INPUT_BUFFER_LEN);
        buf.load(payload);
        handler(&mut state, &buf, &logging::discard()).unwrap();
        state
    }

    #[test]
    fn test_version() {
        let state = decode(version, &[0x00, 0x02, 0x00, 0x1C]);
        assert_eq!(state.protocol_version.major, 2);
        assert_eq!(state.protocol_version.minor, 28);
    }

    #[test]
    fn test_product_id() {
        let mut payload = vec![0u8; 44];
        payload[..13].copy_from_slice(b"ATEM 2 M/E 4K");

        let state = decode(product_id, &payload);
        assert_eq!(state.atem_model, "ATEM 2 M/E 4K");
    }

    #[test]
    fn test_topology() {
        let state = decode(
            topology,
            &[2, 20, 2, 6, 2, 1, 2, 1, 0, 0x01, 0, 0],
        );

        assert_eq!(state.topology.m_es, 2);
        assert_eq!(state.topology.sources, 20);
        assert_eq!(state.topology.aux_busses, 6);
        assert!(state.topology.has_sd_output);
    }

    #[test]
    fn test_video_mixer_config_masks_high_byte() {
        let state = decode(video_mixer_config, &[0xFF, 0x00, 0x00, 0xD0]);

        // 0xD0 = bits 4, 6, 7.
        assert!(state.video_mixer.modes.f720p50);
        assert!(state.video_mixer.modes.f1080i50);
        assert!(state.video_mixer.modes.f1080i59_94);
        assert!(!state.video_mixer.modes.f720p59_94);
        // Bit 24 and up are reserved and must not leak in.
        assert!(!state.video_mixer.modes.f525i59_94_ntsc);
    }

    #[test]
    fn test_input_properties() {
        let mut payload = vec![0u8; 36];
        payload[0] = 0x00;
        payload[1] = 0x05; // input5
        payload[2..9].copy_from_slice(b"Camera5");
        payload[22..26].copy_from_slice(b"CAM5");
        payload[27] = 0b0000_0010; // hdmi
        payload[29] = 0x02; // hdmi
        payload[30] = 0x00; // external
        payload[34] = 0b0000_0011; // aux + multiviewer
        payload[35] = 0b0000_0001; // mE1 fill

        let state = decode(input_properties, &payload);
        let input = &state.input_properties[VideoSource::Input5];

        assert_eq!(input.long_name, "Camera5");
        assert_eq!(input.short_name, "CAM5");
        assert!(input.available_external_ports.hdmi);
        assert!(!input.available_external_ports.sdi);
        assert_eq!(input.port_type, Some(SwitcherPortType::External));
        assert!(input.availability.auxiliary);
        assert!(input.me_availability.me1_fill_sources);
        assert!(!input.me_availability.me2_fill_sources);
    }

    #[test]
    fn test_mix_effect_config() {
        let state = decode(mix_effect_config, &[0x01, 0x04, 0x00, 0x00]);
        assert_eq!(state.mix_effect_config[MixEffect::MixEffect2].keyers, 4);
        assert_eq!(state.mix_effect_config[MixEffect::MixEffect1].keyers, 0);
    }

    #[test]
    fn test_unknown_enum_is_error() {
        let mut state = SwitcherState::default();
        let mut buf = ByteBuffer::new(64);
        buf.load(&[0x27, 0x0F, 0x00, 0x00]); // source 9999

        let result = input_properties(&mut state, &buf, &logging::discard());
        assert!(result.is_err());
    }
}
