//! Decoders for program/preview routing, transitions, fade-to-black, color
//! generators and aux routing.

use prism::logging::Logger;

use crate::decode::{enum16, enum8, DecodeResult};
use crate::net::buffer::ByteBuffer;
use crate::state::SwitcherState;

pub fn program_input(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let me = enum8(buf, 0)?;
    state.program_input[me].video_source = Some(enum16(buf, 2)?);
    Ok(())
}

pub fn preview_input(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let me = enum8(buf, 0)?;
    state.preview_input[me].video_source = Some(enum16(buf, 2)?);
    Ok(())
}

pub fn transition_settings(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let me = enum8(buf, 0)?;
    let transition = &mut state.transition[me];

    transition.style = Some(enum8(buf, 1)?);
    transition.next_transition.background = buf.flag8(2, 0)?;
    transition.next_transition.key1 = buf.flag8(2, 1)?;
    transition.next_transition.key2 = buf.flag8(2, 2)?;
    transition.next_transition.key3 = buf.flag8(2, 3)?;
    transition.next_transition.key4 = buf.flag8(2, 4)?;
    transition.style_next = Some(enum8(buf, 3)?);
    transition.next_transition_next.background = buf.flag8(4, 0)?;
    transition.next_transition_next.key1 = buf.flag8(4, 1)?;
    transition.next_transition_next.key2 = buf.flag8(4, 2)?;
    transition.next_transition_next.key3 = buf.flag8(4, 3)?;
    transition.next_transition_next.key4 = buf.flag8(4, 4)?;
    Ok(())
}

pub fn transition_preview(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let me = enum8(buf, 0)?;
    state.transition[me].preview.enabled = buf.flag8(1, 0)?;
    Ok(())
}

pub fn transition_position(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let me = enum8(buf, 0)?;
    let transition = &mut state.transition[me];

    transition.in_transition = buf.flag8(1, 0)?;
    transition.frames_remaining = buf.u8(2)?;
    transition.position = buf.u16(4)?;
    Ok(())
}

pub fn transition_mix(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let me = enum8(buf, 0)?;
    state.transition[me].mix.rate = buf.u8(1)?;
    Ok(())
}

pub fn transition_dip(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let me = enum8(buf, 0)?;
    state.transition[me].dip.rate = buf.u8(1)?;
    state.transition[me].dip.input = Some(enum16(buf, 2)?);
    Ok(())
}

pub fn transition_wipe(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let me = enum8(buf, 0)?;
    let wipe = &mut state.transition[me].wipe;

    wipe.rate = buf.u8(1)?;
    wipe.pattern = Some(enum8(buf, 2)?);
    wipe.width = buf.fixed_u16(4, 100.0)?;
    wipe.fill_source = Some(enum16(buf, 6)?);
    wipe.symmetry = buf.fixed_u16(8, 100.0)?;
    wipe.softness = buf.fixed_u16(10, 100.0)?;
    wipe.position.x = buf.fixed_u16(12, 10_000.0)?;
    wipe.position.y = buf.fixed_u16(14, 10_000.0)?;
    wipe.reverse = buf.flag8(16, 0)?;
    wipe.flip_flop = buf.flag8(17, 0)?;
    Ok(())
}

pub fn transition_dve(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let me = enum8(buf, 0)?;
    let dve = &mut state.transition[me].dve;

    dve.rate = buf.u8(1)?;
    dve.style = Some(enum8(buf, 3)?);
    dve.fill_source = Some(enum16(buf, 4)?);
    dve.key_source = Some(enum16(buf, 6)?);
    dve.enable_key = buf.flag8(8, 0)?;
    dve.pre_multiplied = buf.flag8(9, 0)?;
    dve.clip = buf.fixed_u16(10, 10.0)?;
    dve.gain = buf.fixed_u16(12, 10.0)?;
    dve.invert_key = buf.flag8(14, 0)?;
    dve.reverse = buf.flag8(15, 0)?;
    dve.flip_flop = buf.flag8(16, 0)?;
    Ok(())
}

pub fn transition_stinger(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let me = enum8(buf, 0)?;
    let stinger = &mut state.transition[me].stinger;

    stinger.source = Some(enum8(buf, 1)?);
    stinger.pre_multiplied = buf.flag8(2, 0)?;
    stinger.clip = buf.fixed_u16(4, 10.0)?;
    stinger.gain = buf.fixed_u16(6, 10.0)?;
    stinger.invert_key = buf.flag8(8, 0)?;
    stinger.pre_roll = buf.u16(10)?;
    stinger.clip_duration = buf.u16(12)?;
    stinger.trigger_point = buf.u16(14)?;
    stinger.mix_rate = buf.u16(16)?;
    Ok(())
}

pub fn fade_to_black(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let me = enum8(buf, 0)?;
    state.fade_to_black[me].rate = buf.u8(1)?;
    Ok(())
}

pub fn fade_to_black_state(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let me = enum8(buf, 0)?;
    let ftb = &mut state.fade_to_black[me].state;

    ftb.fully_black = buf.flag8(1, 0)?;
    ftb.in_transition = buf.flag8(2, 0)?;
    ftb.frames_remaining = buf.u8(3)?;
    Ok(())
}

pub fn color_generator(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let generator = enum8(buf, 0)?;
    let color = &mut state.color_generator[generator];

    color.hue = buf.fixed_u16(2, 10.0)?;
    color.saturation = buf.fixed_u16(4, 10.0)?;
    color.luma = buf.fixed_u16(6, 10.0)?;
    Ok(())
}

pub fn aux_source(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    let aux = enum8(buf, 0)?;
    state.aux_source[aux].input = Some(enum16(buf, 2)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::enums::{
        AuxChannel, MixEffect, PatternStyle, TransitionStyle, VideoSource,
    };
    use prism::logging;

    fn decode(handler: crate::decode::Handler, payload: &[u8]) -> SwitcherState {
        let mut state = SwitcherState::default();
        let mut buf = ByteBuffer::new(crate::protocol::INPUT_BUFFER_LEN);
        buf.load(payload);
        handler(&mut state, &buf, &logging::discard()).unwrap();
        state
    }

    #[test]
    fn test_program_input_media_player() {
        let state = decode(program_input, &[0x00, 0x00, 0x0B, 0xC2]); // 3010
        assert_eq!(
            state.program_input[MixEffect::MixEffect1].video_source,
            Some(VideoSource::MediaPlayer1)
        );
    }

    #[test]
    fn test_preview_input() {
        let state = decode(preview_input, &[0x01, 0x00, 0x00, 0x03]);
        assert_eq!(
            state.preview_input[MixEffect::MixEffect2].video_source,
            Some(VideoSource::Input3)
        );
    }

    #[test]
    fn test_transition_settings() {
        let state = decode(transition_settings, &[0x00, 0x02, 0b0000_0101, 0x00, 0b0000_0010]);
        let transition = &state.transition[MixEffect::MixEffect1];

        assert_eq!(transition.style, Some(TransitionStyle::Wipe));
        assert!(transition.next_transition.background);
        assert!(transition.next_transition.key2);
        assert!(!transition.next_transition.key1);
        assert_eq!(transition.style_next, Some(TransitionStyle::Mix));
        assert!(transition.next_transition_next.key1);
    }

    #[test]
    fn test_transition_wipe() {
        let state = decode(
            transition_wipe,
            &[
                0x00, 30, 0x07, 0x00, // me, rate, pattern circleIris
                0x03, 0xE8, // width 10.00
                0x03, 0xE8, // fill source 1000 colorBars
                0x13, 0x88, // symmetry 50.00
                0x00, 0x64, // softness 1.00
                0x13, 0x88, // position x 0.5000
                0x27, 0x10, // position y 1.0000
                0x01, 0x00, // reverse, flip flop
            ],
        );

        let wipe = &state.transition[MixEffect::MixEffect1].wipe;
        assert_eq!(wipe.rate, 30);
        assert_eq!(wipe.pattern, Some(PatternStyle::CircleIris));
        assert!((wipe.width - 10.0).abs() < 1e-9);
        assert_eq!(wipe.fill_source, Some(VideoSource::ColorBars));
        assert!((wipe.symmetry - 50.0).abs() < 1e-9);
        assert!((wipe.position.x - 0.5).abs() < 1e-9);
        assert!((wipe.position.y - 1.0).abs() < 1e-9);
        assert!(wipe.reverse);
        assert!(!wipe.flip_flop);
    }

    #[test]
    fn test_transition_position() {
        let state = decode(transition_position, &[0x00, 0x01, 25, 0x00, 0x13, 0x88]);
        let transition = &state.transition[MixEffect::MixEffect1];

        assert!(transition.in_transition);
        assert_eq!(transition.frames_remaining, 25);
        assert_eq!(transition.position, 5000);
    }

    #[test]
    fn test_color_generator() {
        let state = decode(color_generator, &[0x01, 0x00, 0x0E, 0x10, 0x01, 0xF4, 0x03, 0x20]);
        let color = &state.color_generator[crate::protocol::enums::ColorGenerator::ColorGenerator2];

        assert!((color.hue - 360.0).abs() < 1e-9);
        assert!((color.saturation - 50.0).abs() < 1e-9);
        assert!((color.luma - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_aux_source() {
        let state = decode(aux_source, &[0x02, 0x00, 0x1F, 0x41]); // 0x1F41 = 8001
        assert_eq!(
            state.aux_source[AuxChannel::AuxChannel3].input,
            Some(VideoSource::Auxilary1)
        );
    }
}
