//! Setters for camera control over the SDI return feed. One tag (`CCmd`)
//! multiplexes adjustment domains and features; the payload carries a data
//! type descriptor and element count the cameras expect.

use crate::error::AtemResult;
use crate::net::buffer::{map_value, BufferResult, ByteBuffer};
use crate::protocol::enums::{resolve, Camera, Sel, SharpeningLevel};
use crate::switcher::Switcher;

const DOM_LENS: u8 = 0;
const DOM_CAMERA: u8 = 1;
const DOM_COLORBARS: u8 = 4;
const DOM_CHIP: u8 = 8;

impl Switcher {
    fn camera_command(
        &self,
        camera: Camera,
        cmd_bytes: usize,
        domain: u8,
        feature: u8,
        write: impl FnOnce(&mut ByteBuffer) -> BufferResult<()>,
    ) -> AtemResult<()> {
        let mut out = self.begin_command()?;

        out.prepare_command(b"CCmd", cmd_bytes, true)?;
        out.buf.set_u8(0, camera.code() as u8)?;
        out.buf.set_u8(1, domain)?;
        out.buf.set_u8(2, feature)?;
        write(&mut out.buf)?;
        out.finish_command()
    }

    pub fn set_camera_control_iris<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        iris: i16,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        self.camera_command(camera, 24, DOM_LENS, 3, |buf| {
            buf.set_u8(4, 0x80)?; // 5.11 fixed point
            buf.set_u8(9, 0x01)?;
            buf.set_s16(16, iris)
        })
    }

    pub fn set_camera_control_focus<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        focus: i16,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        self.camera_command(camera, 24, DOM_LENS, 0, |buf| {
            buf.set_u8(4, 0x80)?;
            buf.set_u8(9, 0x01)?;
            buf.set_s16(16, focus)
        })
    }

    pub fn set_camera_control_auto_focus<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        self.camera_command(camera, 24, DOM_LENS, 1, |buf| buf.set_u8(4, 0x00))
    }

    pub fn set_camera_control_auto_iris<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        self.camera_command(camera, 24, DOM_LENS, 5, |buf| buf.set_u8(4, 0x00))
    }

    /// White balance in Kelvin, e.g. 3200, 4500, 5600, 7500.
    pub fn set_camera_control_white_balance<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        white_balance: i16,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        self.camera_command(camera, 24, DOM_CAMERA, 2, |buf| {
            buf.set_u8(4, 0x02)?;
            buf.set_u8(9, 0x01)?;
            buf.set_s16(16, white_balance)
        })
    }

    pub fn set_camera_control_sharpening_level<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        detail: impl Into<Sel<'a, SharpeningLevel>>,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        let detail: SharpeningLevel = resolve(detail)?;
        self.camera_command(camera, 20, DOM_CAMERA, 8, |buf| {
            buf.set_u8(4, 0x01)?; // int8
            buf.set_u8(7, 0x01)?;
            buf.set_u8(9, 0x01)?;
            buf.set_u8(16, detail.code() as u8)
        })
    }

    pub fn set_camera_control_zoom_normalized<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        zoom_normalized: f64,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        self.camera_command(camera, 24, DOM_LENS, 8, |buf| {
            buf.set_u8(4, 0x80)?;
            buf.set_u8(9, 0x01)?;
            buf.set_fixed_s16(16, 10.0, zoom_normalized)
        })
    }

    /// Continuous zoom speed, 0.0..=1.0.
    pub fn set_camera_control_zoom_speed<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        zoom_speed: f64,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        self.camera_command(camera, 24, DOM_LENS, 9, |buf| {
            buf.set_u8(4, 0x80)?;
            buf.set_u8(9, 0x01)?;
            buf.set_scaled_s16(16, (0.0, 1.0), (-2048.0, 2048.0), zoom_speed)
        })
    }

    /// Show color bars for `colorbars` seconds; 0 disables.
    pub fn set_camera_control_colorbars<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        colorbars: u8,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        self.camera_command(camera, 20, DOM_COLORBARS, 4, |buf| {
            buf.set_u8(4, 0x01)?;
            buf.set_u8(7, 0x01)?;
            buf.set_u8(9, 0x01)?;
            buf.set_u8(16, colorbars)
        })
    }

    pub fn set_camera_control_lift<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        r: f64,
        g: f64,
        b: f64,
        y: f64,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        self.camera_command(camera, 24, DOM_CHIP, 0, |buf| {
            buf.set_u8(4, 0x80)?;
            buf.set_u8(9, 0x04)?;
            buf.set_scaled_s16(16, (-1.0, 1.0), (-4096.0, 4096.0), r)?;
            buf.set_scaled_s16(18, (-1.0, 1.0), (-4096.0, 4096.0), g)?;
            buf.set_scaled_s16(20, (-1.0, 1.0), (-4096.0, 4096.0), b)?;
            buf.set_scaled_s16(22, (-1.0, 1.0), (-4096.0, 4096.0), y)
        })
    }

    pub fn set_camera_control_lift_r<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        r: f64,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        let current = self.state().camera_control[camera].lift;
        self.set_camera_control_lift(camera, r, current.g, current.b, current.y)
    }

    pub fn set_camera_control_lift_g<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        g: f64,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        let current = self.state().camera_control[camera].lift;
        self.set_camera_control_lift(camera, current.r, g, current.b, current.y)
    }

    pub fn set_camera_control_lift_b<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        b: f64,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        let current = self.state().camera_control[camera].lift;
        self.set_camera_control_lift(camera, current.r, current.g, b, current.y)
    }

    pub fn set_camera_control_lift_y<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        y: f64,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        let current = self.state().camera_control[camera].lift;
        self.set_camera_control_lift(camera, current.r, current.g, current.b, y)
    }

    pub fn set_camera_control_gamma<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        r: f64,
        g: f64,
        b: f64,
        y: f64,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        self.camera_command(camera, 24, DOM_CHIP, 1, |buf| {
            buf.set_u8(4, 0x80)?;
            buf.set_u8(9, 0x04)?;
            buf.set_scaled_s16(16, (-1.0, 1.0), (-8192.0, 8192.0), r)?;
            buf.set_scaled_s16(18, (-1.0, 1.0), (-8192.0, 8192.0), g)?;
            buf.set_scaled_s16(20, (-1.0, 1.0), (-8192.0, 8192.0), b)?;
            buf.set_scaled_s16(22, (-1.0, 1.0), (-8192.0, 8192.0), y)
        })
    }

    pub fn set_camera_control_gamma_r<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        r: f64,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        let current = self.state().camera_control[camera].gamma;
        self.set_camera_control_gamma(camera, r, current.g, current.b, current.y)
    }

    pub fn set_camera_control_gamma_g<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        g: f64,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        let current = self.state().camera_control[camera].gamma;
        self.set_camera_control_gamma(camera, current.r, g, current.b, current.y)
    }

    pub fn set_camera_control_gamma_b<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        b: f64,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        let current = self.state().camera_control[camera].gamma;
        self.set_camera_control_gamma(camera, current.r, current.g, b, current.y)
    }

    pub fn set_camera_control_gamma_y<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        y: f64,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        let current = self.state().camera_control[camera].gamma;
        self.set_camera_control_gamma(camera, current.r, current.g, current.b, y)
    }

    /// Sensor gain step.
    pub fn set_camera_control_gain<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        gain: i16,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        self.camera_command(camera, 24, DOM_CAMERA, 1, |buf| {
            buf.set_u8(4, 0x01)?;
            buf.set_u8(7, 0x01)?;
            buf.set_u8(9, 0x01)?;
            buf.set_s16(16, gain)
        })
    }

    pub fn set_camera_control_component_gain<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        r: f64,
        g: f64,
        b: f64,
        y: f64,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        self.camera_command(camera, 24, DOM_CHIP, 2, |buf| {
            buf.set_u8(4, 0x80)?;
            buf.set_u8(9, 0x04)?;
            buf.set_scaled_s16(16, (0.0, 16.0), (0.0, 32767.0), r)?;
            buf.set_scaled_s16(18, (0.0, 16.0), (0.0, 32767.0), g)?;
            buf.set_scaled_s16(20, (0.0, 16.0), (0.0, 32767.0), b)?;
            buf.set_scaled_s16(22, (0.0, 16.0), (0.0, 32767.0), y)
        })
    }

    pub fn set_camera_control_gain_r<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        r: f64,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        let current = self.state().camera_control[camera].gain;
        self.set_camera_control_component_gain(camera, r, current.g, current.b, current.y)
    }

    pub fn set_camera_control_gain_g<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        g: f64,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        let current = self.state().camera_control[camera].gain;
        self.set_camera_control_component_gain(camera, current.r, g, current.b, current.y)
    }

    pub fn set_camera_control_gain_b<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        b: f64,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        let current = self.state().camera_control[camera].gain;
        self.set_camera_control_component_gain(camera, current.r, current.g, b, current.y)
    }

    pub fn set_camera_control_gain_y<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        y: f64,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        let current = self.state().camera_control[camera].gain;
        self.set_camera_control_component_gain(camera, current.r, current.g, current.b, y)
    }

    /// Luma mix between color corrector and raw, 0..=100.
    pub fn set_camera_control_lum_mix<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        lum_mix: f64,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        self.camera_command(camera, 24, DOM_CHIP, 5, |buf| {
            buf.set_u8(4, 0x80)?;
            buf.set_u8(9, 0x01)?;
            buf.set_scaled_s16(16, (0.0, 100.0), (0.0, 2048.0), lum_mix)
        })
    }

    pub fn set_camera_control_shutter<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        shutter: f64,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        self.camera_command(camera, 24, DOM_CAMERA, 5, |buf| {
            buf.set_u8(4, 0x03)?;
            buf.set_u8(11, 0x01)?;
            buf.set_fixed_s16(18, 1_000_000.0, shutter)
        })
    }

    pub fn set_camera_control_contrast<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        contrast: f64,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        let value = map_value(contrast, 0.0, 100.0, 0.0, 4096.0) as i16;
        self.camera_command(camera, 24, DOM_CHIP, 4, |buf| {
            buf.set_u8(4, 0x80)?;
            buf.set_u8(9, 0x02)?;
            buf.set_u8(16, 4)?;
            buf.set_u8(17, 0)?;
            buf.set_s16(18, value)
        })
    }

    pub fn set_camera_control_hue_saturation<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        hue: f64,
        saturation: f64,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        self.camera_command(camera, 24, DOM_CHIP, 6, |buf| {
            buf.set_u8(4, 0x80)?;
            buf.set_u8(9, 0x02)?;
            buf.set_scaled_s16(16, (0.0, 360.0), (-2048.0, 2048.0), hue)?;
            buf.set_scaled_s16(18, (0.0, 100.0), (0.0, 4096.0), saturation)
        })
    }

    pub fn set_camera_control_hue<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        hue: f64,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        let saturation = self.state().camera_control[camera].saturation;
        self.set_camera_control_hue_saturation(camera, hue, saturation)
    }

    pub fn set_camera_control_saturation<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        saturation: f64,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        let hue = self.state().camera_control[camera].hue;
        self.set_camera_control_hue_saturation(camera, hue, saturation)
    }

    pub fn set_camera_control_video_mode<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
        fps: u8,
        resolution: u8,
        interlaced: bool,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        self.camera_command(camera, 24, DOM_CAMERA, 0, |buf| {
            buf.set_u8(4, 0x01)?;
            buf.set_u8(7, 0x05)?; // 5 byte array
            buf.set_u8(16, fps)?;
            buf.set_u8(17, 0x00)?; // regular M-rate
            buf.set_u8(18, resolution)?;
            buf.set_u8(19, interlaced as u8)?;
            buf.set_u8(20, 0x00) // YUV
        })
    }

    /// Reset all color corrector settings and mirror the camera defaults
    /// into the state tree.
    pub fn set_camera_control_reset_all<'a>(
        &self,
        camera: impl Into<Sel<'a, Camera>>,
    ) -> AtemResult<()> {
        let camera: Camera = resolve(camera)?;
        self.camera_command(camera, 24, DOM_CHIP, 7, |buf| buf.set_u8(4, 0x00))?;

        let mut state = self.state_mut();
        let control = &mut state.camera_control[camera];
        control.lift = Default::default();
        control.gamma = Default::default();
        let neutral = map_value(2048.0, 0.0, 32767.0, 0.0, 16.0);
        control.gain.r = neutral;
        control.gain.g = neutral;
        control.gain.b = neutral;
        control.gain.y = neutral;
        control.contrast = 2048;
        control.hue = 0.0;
        control.saturation = 2048.0;

        Ok(())
    }
}
