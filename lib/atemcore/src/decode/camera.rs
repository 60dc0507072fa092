//! Decoder for the camera control feedback stream. One tag multiplexes four
//! adjustment domains, each with its own feature set.

use prism::logging::{warn, Logger};

use crate::decode::{enum8, DecodeResult};
use crate::net::buffer::ByteBuffer;
use crate::state::SwitcherState;

const DOM_LENS: u8 = 0;
const DOM_CAMERA: u8 = 1;
const DOM_COLORBARS: u8 = 4;
const DOM_CHIP: u8 = 8;

pub fn camera_control(
    state: &mut SwitcherState,
    buf: &ByteBuffer,
    log: &Logger,
) -> DecodeResult<()> {
    let camera = enum8(buf, 0)?;
    let domain = buf.u8(1)?;
    let feature = buf.u8(2)?;
    let control = &mut state.camera_control[camera];

    match domain {
        DOM_LENS => {
            const FEAT_FOCUS: u8 = 0;
            const FEAT_IRIS: u8 = 3;
            const FEAT_ZOOM_NORMALIZED: u8 = 8;
            const FEAT_ZOOM: u8 = 9;

            match feature {
                FEAT_FOCUS => control.focus = buf.s16(16)?,
                FEAT_IRIS => control.iris = buf.s16(16)?,
                FEAT_ZOOM_NORMALIZED => control.zoom.normalized = buf.fixed_s16(16, 10.0)?,
                FEAT_ZOOM => {
                    control.zoom.speed =
                        buf.scaled_s16(16, (-2048.0, 2048.0), (0.0, 1.0))?;
                }
                _ => warn!(log, "UNKNOWN lens feature"; "feature" => feature),
            }
        }
        DOM_CAMERA => {
            const FEAT_GAIN: u8 = 1;
            const FEAT_WHITE_BALANCE: u8 = 2;
            const FEAT_SHUTTER: u8 = 5;
            const FEAT_DETAIL: u8 = 8;

            match feature {
                FEAT_GAIN => control.gain.value = buf.s16(16)?,
                FEAT_WHITE_BALANCE => control.white_balance = buf.s16(16)?,
                FEAT_SHUTTER => control.shutter = buf.fixed_s16(18, 1_000_000.0)?,
                FEAT_DETAIL => control.sharpening_level = buf.s16(16)?,
                _ => warn!(log, "UNKNOWN camera feature"; "feature" => feature),
            }
        }
        DOM_COLORBARS => {
            const FEAT_COLORBARS: u8 = 4;

            match feature {
                FEAT_COLORBARS => control.colorbars = buf.s16(16)?,
                _ => warn!(log, "UNKNOWN colorbars feature"; "feature" => feature),
            }
        }
        DOM_CHIP => {
            const FEAT_LIFT: u8 = 0;
            const FEAT_GAMMA: u8 = 1;
            const FEAT_GAIN: u8 = 2;
            const FEAT_CONTRAST: u8 = 4;
            const FEAT_LUM_MIX: u8 = 5;
            const FEAT_HUE_SATURATION: u8 = 6;

            match feature {
                FEAT_LIFT => {
                    control.lift.r = buf.scaled_s16(16, (-4096.0, 4096.0), (-1.0, 1.0))?;
                    control.lift.g = buf.scaled_s16(18, (-4096.0, 4096.0), (-1.0, 1.0))?;
                    control.lift.b = buf.scaled_s16(20, (-4096.0, 4096.0), (-1.0, 1.0))?;
                    control.lift.y = buf.scaled_s16(22, (-4096.0, 4096.0), (-1.0, 1.0))?;
                }
                FEAT_GAMMA => {
                    control.gamma.r = buf.scaled_s16(16, (-8192.0, 8192.0), (-1.0, 1.0))?;
                    control.gamma.g = buf.scaled_s16(18, (-8192.0, 8192.0), (-1.0, 1.0))?;
                    control.gamma.b = buf.scaled_s16(20, (-8192.0, 8192.0), (-1.0, 1.0))?;
                    control.gamma.y = buf.scaled_s16(22, (-8192.0, 8192.0), (-1.0, 1.0))?;
                }
                FEAT_GAIN => {
                    control.gain.r = buf.scaled_s16(16, (0.0, 32767.0), (0.0, 16.0))?;
                    control.gain.g = buf.scaled_s16(18, (0.0, 32767.0), (0.0, 16.0))?;
                    control.gain.b = buf.scaled_s16(20, (0.0, 32767.0), (0.0, 16.0))?;
                    control.gain.y = buf.scaled_s16(22, (0.0, 32767.0), (0.0, 16.0))?;
                }
                FEAT_CONTRAST => control.contrast = buf.s16(18)?,
                FEAT_LUM_MIX => {
                    control.lum_mix = buf.scaled_s16(16, (0.0, 2048.0), (0.0, 100.0))?;
                }
                FEAT_HUE_SATURATION => {
                    control.hue = buf.scaled_s16(16, (-2048.0, 2048.0), (0.0, 360.0))?;
                    control.saturation = buf.scaled_s16(18, (0.0, 4096.0), (0.0, 100.0))?;
                }
                _ => warn!(log, "UNKNOWN chip feature"; "feature" => feature),
            }
        }
        _ => warn!(log, "UNKNOWN adjustment domain"; "domain" => domain),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::enums::Camera;
    use prism::logging;

    fn decode(payload: &[u8]) -> SwitcherState {
        let mut state = SwitcherState::default();
        let mut buf = ByteBuffer::new(crate::protocol::INPUT_BUFFER_LEN);
        buf.load(payload);
        camera_control(&mut state, &buf, &logging::discard()).unwrap();
        state
    }

    fn payload(camera: u8, domain: u8, feature: u8) -> Vec<u8> {
        let mut payload = vec![0u8; 24];
        payload[0] = camera;
        payload[1] = domain;
        payload[2] = feature;
        payload
    }

    #[test]
    fn test_lens_iris() {
        let mut data = payload(3, DOM_LENS, 3);
        data[16..18].copy_from_slice(&(1200i16).to_be_bytes());

        let state = decode(&data);
        assert_eq!(state.camera_control[Camera::Camera3].iris, 1200);
    }

    #[test]
    fn test_lens_zoom_speed() {
        let mut data = payload(1, DOM_LENS, 9);
        data[16..18].copy_from_slice(&(0i16).to_be_bytes());

        let state = decode(&data);
        assert!((state.camera_control[Camera::Camera1].zoom.speed - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_chip_gamma() {
        let mut data = payload(2, DOM_CHIP, 1);
        data[16..18].copy_from_slice(&(8192i16).to_be_bytes());
        data[18..20].copy_from_slice(&(-8192i16).to_be_bytes());

        let state = decode(&data);
        let gamma = &state.camera_control[Camera::Camera2].gamma;

        assert!((gamma.r - 1.0).abs() < 1e-9);
        assert!((gamma.g + 1.0).abs() < 1e-9);
        assert!((gamma.b - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_chip_hue_saturation() {
        let mut data = payload(4, DOM_CHIP, 6);
        data[16..18].copy_from_slice(&(0i16).to_be_bytes());
        data[18..20].copy_from_slice(&(4096i16).to_be_bytes());

        let state = decode(&data);
        let control = &state.camera_control[Camera::Camera4];

        assert!((control.hue - 180.0).abs() < 1e-9);
        assert!((control.saturation - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_feature_is_not_fatal() {
        let data = payload(1, DOM_LENS, 77);
        let state = decode(&data);
        assert_eq!(state.camera_control[Camera::Camera1].iris, 0);
    }
}
