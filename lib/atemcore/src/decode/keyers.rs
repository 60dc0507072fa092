//! Decoders for upstream keyers, key adjustments, flying keys and the
//! downstream keyers.

use prism::logging::{debug, Logger};

use crate::decode::{enum16, enum8, DecodeResult};
use crate::net::buffer::ByteBuffer;
use crate::state::SwitcherState;

const MASK_RANGE: (f64, f64) = (-16000.0, 16000.0);
const MASK_UNITS: (f64, f64) = (-9.0, 9.0);

pub fn keyer_on_air(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let me = enum8(buf, 0)?;
    let keyer = enum8(buf, 1)?;
    state.keyer[me][keyer].on_air = buf.flag8(2, 0)?;
    Ok(())
}

pub fn keyer_base(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    let me = enum8(buf, 0)?;
    let keyer = enum8(buf, 1)?;
    let base = &mut state.keyer[me][keyer];

    base.kind = Some(enum8(buf, 2)?);
    base.fly.enabled = buf.flag8(5, 0)?;
    base.fill_source = Some(enum16(buf, 6)?);
    base.key_source = Some(enum16(buf, 8)?);
    base.masked = buf.flag8(10, 0)?;
    base.top = buf.fixed_s16(12, 1000.0)?;
    base.bottom = buf.fixed_s16(14, 1000.0)?;
    base.left = buf.scaled_s16(16, MASK_RANGE, MASK_UNITS)?;
    base.right = buf.scaled_s16(18, MASK_RANGE, MASK_UNITS)?;
    Ok(())
}

pub fn key_luma(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    let me = enum8(buf, 0)?;
    let keyer = enum8(buf, 1)?;
    let luma = &mut state.key[me][keyer].luma;

    luma.pre_multiplied = buf.flag8(2, 0)?;
    luma.clip = buf.fixed_u16(4, 10.0)?;
    luma.gain = buf.fixed_u16(6, 10.0)?;
    luma.invert_key = buf.flag8(8, 0)?;
    Ok(())
}

pub fn key_chroma(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    let me = enum8(buf, 0)?;
    let keyer = enum8(buf, 1)?;
    let chroma = &mut state.key[me][keyer].chroma;

    chroma.hue = buf.fixed_u16(2, 10.0)?;
    chroma.gain = buf.fixed_u16(4, 10.0)?;
    chroma.y_suppress = buf.fixed_u16(6, 10.0)?;
    chroma.lift = buf.fixed_u16(8, 10.0)?;
    chroma.narrow = buf.flag8(10, 0)?;
    Ok(())
}

pub fn key_pattern(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    let me = enum8(buf, 0)?;
    let keyer = enum8(buf, 1)?;
    let pattern = &mut state.key[me][keyer].pattern;

    pattern.pattern = Some(enum8(buf, 2)?);
    pattern.size = buf.fixed_u16(4, 100.0)?;
    pattern.symmetry = buf.fixed_u16(6, 100.0)?;
    pattern.softness = buf.fixed_u16(8, 100.0)?;
    pattern.position.x = buf.fixed_u16(10, 10_000.0)?;
    pattern.position.y = buf.fixed_u16(12, 10_000.0)?;
    pattern.invert_pattern = buf.flag8(14, 0)?;
    Ok(())
}

pub fn key_dve(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    let me = enum8(buf, 0)?;
    let keyer = enum8(buf, 1)?;
    let dve = &mut state.key[me][keyer].dve;

    dve.size.x = buf.fixed_u32(4, 1000.0)?;
    dve.size.y = buf.fixed_u32(8, 1000.0)?;
    dve.position.x = buf.fixed_s32(12, 1000.0)?;
    dve.position.y = buf.fixed_s32(16, 1000.0)?;
    dve.rotation = buf.fixed_u32(20, 10.0)?;
    dve.border.enabled = buf.flag8(24, 0)?;
    dve.shadow = buf.flag8(25, 0)?;
    dve.border.bevel.kind = Some(enum8(buf, 26)?);
    dve.border.outer.width = buf.fixed_u16(28, 100.0)?;
    dve.border.inner.width = buf.fixed_u16(30, 100.0)?;
    dve.border.outer.softness = buf.u8(32)?;
    dve.border.inner.softness = buf.u8(33)?;
    dve.border.bevel.softness = buf.fixed_u8(34, 100.0)?;
    dve.border.bevel.position = buf.fixed_u8(35, 100.0)?;
    dve.border.opacity = buf.u8(36)?;
    dve.border.hue = buf.fixed_u16(38, 10.0)?;
    dve.border.saturation = buf.fixed_u16(40, 10.0)?;
    dve.border.luma = buf.fixed_u16(42, 10.0)?;
    dve.light_source.direction = buf.fixed_u16(44, 10.0)?;
    dve.light_source.altitude = buf.u8(46)?;
    dve.masked = buf.flag8(47, 0)?;
    dve.top = buf.fixed_s16(48, 1000.0)?;
    dve.bottom = buf.fixed_s16(50, 1000.0)?;
    dve.left = buf.scaled_s16(52, MASK_RANGE, MASK_UNITS)?;
    dve.right = buf.scaled_s16(54, MASK_RANGE, MASK_UNITS)?;
    dve.rate = buf.u8(56)?;
    Ok(())
}

pub fn keyer_fly(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    let me = enum8(buf, 0)?;
    let keyer = enum8(buf, 1)?;
    let fly = &mut state.keyer[me][keyer].fly;

    fly.is_a_set = buf.flag8(2, 0)?;
    fly.is_b_set = buf.flag8(3, 0)?;
    fly.at_key_frame.a = buf.flag8(6, 0)?;
    fly.at_key_frame.b = buf.flag8(6, 1)?;
    fly.at_key_frame.full = buf.flag8(6, 2)?;
    fly.at_key_frame.run_to_infinite = buf.flag8(6, 3)?;
    fly.run_to_infinite_index = buf.u8(7)?;
    Ok(())
}

pub fn keyer_fly_key_frame(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let me = enum8(buf, 0)?;
    let keyer = enum8(buf, 1)?;
    let key_frame = enum8(buf, 2)?;
    let frame = &mut state.keyer[me][keyer].fly.key_frame[key_frame];

    frame.size.x = buf.fixed_u32(4, 1000.0)?;
    frame.size.y = buf.fixed_u32(8, 1000.0)?;
    frame.position.x = buf.fixed_s32(12, 1000.0)?;
    frame.position.y = buf.fixed_s32(16, 1000.0)?;
    frame.rotation = buf.fixed_u32(20, 10.0)?;
    frame.border.outer.width = buf.fixed_u16(24, 100.0)?;
    frame.border.inner.width = buf.fixed_u16(26, 100.0)?;
    frame.border.outer.softness = buf.u8(28)?;
    frame.border.inner.softness = buf.u8(29)?;
    frame.border.bevel.softness = buf.fixed_u8(30, 100.0)?;
    frame.border.bevel.position = buf.fixed_u8(31, 100.0)?;
    frame.border.opacity = buf.u8(32)?;
    frame.border.hue = buf.fixed_u16(34, 10.0)?;
    frame.border.saturation = buf.fixed_u16(36, 10.0)?;
    frame.border.luma = buf.fixed_u16(38, 10.0)?;
    frame.light_source.direction = buf.fixed_u16(40, 10.0)?;
    frame.light_source.altitude = buf.u8(42)?;
    frame.top = buf.fixed_s16(44, 1000.0)?;
    frame.bottom = buf.fixed_s16(46, 1000.0)?;
    frame.left = buf.scaled_s16(48, MASK_RANGE, MASK_UNITS)?;
    frame.right = buf.scaled_s16(50, MASK_RANGE, MASK_UNITS)?;
    Ok(())
}

pub fn dsk_sources(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    let dsk = enum8(buf, 0)?;
    state.downstream_keyer[dsk].fill_source = Some(enum16(buf, 2)?);
    state.downstream_keyer[dsk].key_source = Some(enum16(buf, 4)?);
    Ok(())
}

pub fn dsk_parameters(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    log: &Logger,
) -> DecodeResult<()> {
    let dsk = enum8(buf, 0)?;
    let keyer = &mut state.downstream_keyer[dsk];

    keyer.tie = buf.flag8(1, 0)?;
    keyer.rate = buf.u8(2)?;
    keyer.pre_multiplied = buf.flag8(3, 0)?;
    keyer.clip = buf.fixed_u16(4, 10.0)?;
    keyer.gain = buf.fixed_u16(6, 10.0)?;
    keyer.invert_key = buf.flag8(8, 0)?;
    keyer.masked = buf.flag8(9, 0)?;
    keyer.top = buf.fixed_s16(10, 1000.0)?;
    keyer.bottom = buf.fixed_s16(12, 1000.0)?;

    // The left edge reads the same word as clip. Upstream protocol quirk,
    // kept as observed on the wire.
    debug!(log, "DskP left edge aliases the clip word"; "context" => "dsk_parameters");
    keyer.left = buf.scaled_s16(4, MASK_RANGE, MASK_UNITS)?;
    keyer.right = buf.scaled_s16(16, MASK_RANGE, MASK_UNITS)?;
    Ok(())
}

pub fn dsk_state(state: &mut SwitcherState, buf: &ByteBuffer, _log: &Logger) -> DecodeResult<()> {
    let dsk = enum8(buf, 0)?;
    let keyer = &mut state.downstream_keyer[dsk];

    keyer.on_air = buf.flag8(1, 0)?;
    keyer.in_transition = buf.flag8(2, 0)?;
    keyer.is_auto_transitioning = buf.flag8(3, 0)?;
    keyer.frames_remaining = buf.u8(4)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::enums::{Dsk, Keyer, KeyerType, MixEffect, VideoSource};
    use prism::logging;

    fn decode(handler: crate::decode::Handler, payload: &[u8]) -> SwitcherState {
        let mut state = SwitcherState::default();
        let mut buf = ByteBuffer::new(crate::protocol::INPUT_BUFFER_LEN);
        buf.load(payload);
        handler(&mut state, &buf, &logging::discard()).unwrap();
        state
    }

    #[test]
    fn test_keyer_on_air() {
        let state = decode(keyer_on_air, &[0x00, 0x01, 0x01, 0x00]);
        assert!(state.keyer[MixEffect::MixEffect1][Keyer::Keyer2].on_air);
        assert!(!state.keyer[MixEffect::MixEffect1][Keyer::Keyer1].on_air);
    }

    #[test]
    fn test_keyer_base() {
        let mut payload = vec![0u8; 20];
        payload[1] = 0x00; // keyer1
        payload[2] = 0x01; // chroma
        payload[5] = 0x01; // fly enabled
        payload[6..8].copy_from_slice(&[0x00, 0x02]); // fill input2
        payload[8..10].copy_from_slice(&[0x0B, 0xC3]); // key mediaPlayer1Key
        payload[10] = 0x01; // masked
        payload[12..14].copy_from_slice(&(3000i16).to_be_bytes()); // top 3.0
        payload[16..18].copy_from_slice(&(-8000i16).to_be_bytes()); // left -4.5

        let state = decode(keyer_base, &payload);
        let keyer = &state.keyer[MixEffect::MixEffect1][Keyer::Keyer1];

        assert_eq!(keyer.kind, Some(KeyerType::Chroma));
        assert!(keyer.fly.enabled);
        assert_eq!(keyer.fill_source, Some(VideoSource::Input2));
        assert_eq!(keyer.key_source, Some(VideoSource::MediaPlayer1Key));
        assert!(keyer.masked);
        assert!((keyer.top - 3.0).abs() < 1e-9);
        assert!((keyer.left + 4.5).abs() < 1e-9);
    }

    #[test]
    fn test_key_luma() {
        let state = decode(key_luma, &[0x00, 0x02, 0x01, 0x00, 0x03, 0x84, 0x00, 0x64, 0x01, 0x00, 0x00, 0x00]);
        let luma = &state.key[MixEffect::MixEffect1][Keyer::Keyer3].luma;

        assert!(luma.pre_multiplied);
        assert!((luma.clip - 90.0).abs() < 1e-9);
        assert!((luma.gain - 10.0).abs() < 1e-9);
        assert!(luma.invert_key);
    }

    #[test]
    fn test_dsk_parameters_alias() {
        let mut payload = vec![0u8; 20];
        payload[0] = 0x01; // dsk2
        payload[4..6].copy_from_slice(&(500u16).to_be_bytes()); // clip 50.0
        payload[16..18].copy_from_slice(&(16000i16).to_be_bytes()); // right 9.0

        let state = decode(dsk_parameters, &payload);
        let keyer = &state.downstream_keyer[Dsk::Dsk2];

        assert!((keyer.clip - 50.0).abs() < 1e-9);
        // Left decodes the clip word through the mask remap.
        assert!((keyer.left - 500.0 * 9.0 / 16000.0).abs() < 1e-9);
        assert!((keyer.right - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_dsk_state() {
        let state = decode(dsk_state, &[0x00, 0x01, 0x01, 0x00, 0x19, 0x00, 0x00, 0x00]);
        let keyer = &state.downstream_keyer[Dsk::Dsk1];

        assert!(keyer.on_air);
        assert!(keyer.in_transition);
        assert!(!keyer.is_auto_transitioning);
        assert_eq!(keyer.frames_remaining, 25);
    }
}
