//! Decoders for the super source compositor.

use prism::logging::Logger;

use crate::decode::{enum16, enum8, DecodeResult};
use crate::net::buffer::ByteBuffer;
use crate::state::SwitcherState;

pub fn super_source(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let ss = &mut state.super_source;

    ss.fill_source = Some(enum16(buf, 0)?);
    ss.key_source = Some(enum16(buf, 2)?);
    ss.foreground = buf.flag8(4, 0)?;
    ss.pre_multiplied = buf.flag8(5, 0)?;
    ss.clip = buf.fixed_u16(6, 10.0)?;
    ss.gain = buf.fixed_u16(8, 10.0)?;
    ss.invert_key = buf.flag8(10, 0)?;
    ss.border.enabled = buf.flag8(11, 0)?;
    ss.border.bevel.kind = Some(enum8(buf, 12)?);
    ss.border.outer.width = buf.fixed_u16(14, 100.0)?;
    ss.border.inner.width = buf.fixed_u16(16, 100.0)?;
    ss.border.outer.softness = buf.u8(18)?;
    ss.border.inner.softness = buf.u8(19)?;
    ss.border.bevel.softness = buf.fixed_u8(20, 100.0)?;
    ss.border.bevel.position = buf.fixed_u8(21, 100.0)?;
    ss.border.hue = buf.fixed_u16(22, 10.0)?;
    ss.border.saturation = buf.fixed_u16(24, 10.0)?;
    ss.border.luma = buf.fixed_u16(26, 10.0)?;
    ss.light_source.direction = buf.fixed_u16(28, 10.0)?;
    ss.light_source.altitude = buf.u8(30)?;
    Ok(())
}

pub fn box_parameters(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    _log: &Logger,
) -> DecodeResult<()> {
    let ss_box = enum8(buf, 3)?;
    let parameters = &mut state.super_source.box_parameters[ss_box];

    parameters.enabled = buf.flag8(1, 0)?;
    parameters.input_source = Some(enum16(buf, 2)?);
    parameters.position.x = buf.fixed_s16(4, 100.0)?;
    parameters.position.y = buf.fixed_s16(6, 100.0)?;
    parameters.size = buf.fixed_u16(8, 100.0)?;
    parameters.cropped = buf.flag8(10, 0)?;
    parameters.crop.top = buf.fixed_u16(12, 1000.0)?;
    parameters.crop.bottom = buf.fixed_u16(14, 1000.0)?;
    parameters.crop.left = buf.fixed_u16(16, 1000.0)?;
    parameters.crop.right = buf.fixed_u16(18, 1000.0)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::enums::{BorderBevel, SsBox, VideoSource};
    use prism::logging;

    fn decode(handler: crate::decode::Handler, payload: &[u8]) -> SwitcherState {
        let mut state = SwitcherState::default();
        let mut buf = ByteBuffer::new(crate::protocol::INPUT_BUFFER_LEN);
        buf.load(payload);
        handler(&mut state, &buf, &logging::discard()).unwrap();
        state
    }

    #[test]
    fn test_super_source() {
        let mut payload = vec![0u8; 36];
        payload[0..2].copy_from_slice(&(6000u16).to_be_bytes()); // superSource
        payload[2..4].copy_from_slice(&(0u16).to_be_bytes()); // black
        payload[4] = 0x01;
        payload[6..8].copy_from_slice(&(500u16).to_be_bytes()); // clip 50.0
        payload[11] = 0x01;
        payload[12] = 0x01; // inOut bevel
        payload[30] = 20;

        let state = decode(super_source, &payload);
        let ss = &state.super_source;

        assert_eq!(ss.fill_source, Some(VideoSource::SuperSource));
        assert_eq!(ss.key_source, Some(VideoSource::Black));
        assert!(ss.foreground);
        assert!((ss.clip - 50.0).abs() < 1e-9);
        assert!(ss.border.enabled);
        assert_eq!(ss.border.bevel.kind, Some(BorderBevel::InOut));
        assert_eq!(ss.light_source.altitude, 20);
    }

    #[test]
    fn test_box_parameters() {
        // The box index at offset 3 overlaps the low byte of the source
        // word at offset 2, matching what the switcher emits.
        let mut payload = vec![0u8; 24];
        payload[1] = 0x01; // enabled
        payload[2..4].copy_from_slice(&(2u16).to_be_bytes()); // input2 / box3
        payload[4..6].copy_from_slice(&(-800i16).to_be_bytes()); // x -8.0
        payload[6..8].copy_from_slice(&(450i16).to_be_bytes()); // y 4.5
        payload[8..10].copy_from_slice(&(70u16).to_be_bytes()); // size 0.7
        payload[10] = 0x01;
        payload[12..14].copy_from_slice(&(9000u16).to_be_bytes()); // crop top 9.0

        let state = decode(box_parameters, &payload);
        let parameters = &state.super_source.box_parameters[SsBox::Box3];

        assert!(parameters.enabled);
        assert_eq!(parameters.input_source, Some(VideoSource::Input2));
        assert!((parameters.position.x + 8.0).abs() < 1e-9);
        assert!((parameters.position.y - 4.5).abs() < 1e-9);
        assert!((parameters.size - 0.7).abs() < 1e-9);
        assert!(parameters.cropped);
        assert!((parameters.crop.top - 9.0).abs() < 1e-9);
    }
}
