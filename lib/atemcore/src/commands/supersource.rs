//! Setters for the super source compositor and its boxes.

use crate::error::AtemResult;
use crate::net::buffer::{BufferResult, ByteBuffer};
use crate::protocol::enums::{resolve, BorderBevel, Sel, SsBox, VideoSource};
use crate::switcher::Switcher;

impl Switcher {
    /// CSSc carries a 32-bit field mask; there is only one super source, so
    /// consecutive setters always coalesce in bundles.
    fn super_source_field(
        &self,
        bit: u8,
        write: impl FnOnce(&mut ByteBuffer) -> BufferResult<()>,
    ) -> AtemResult<()> {
        let mut out = self.begin_command()?;

        out.prepare_command(b"CSSc", 36, true)?;
        out.buf.set_flag32(0, bit)?;
        write(&mut out.buf)?;
        out.finish_command()
    }

    fn box_field(
        &self,
        ss_box: SsBox,
        bit: u8,
        write: impl FnOnce(&mut ByteBuffer) -> BufferResult<()>,
    ) -> AtemResult<()> {
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == ss_box.code() as u8;
        out.prepare_command(b"CSBP", 24, index_match)?;
        out.buf.set_flag16(0, bit)?;
        out.buf.set_u8(2, ss_box.code() as u8)?;
        write(&mut out.buf)?;
        out.finish_command()
    }

    pub fn set_super_source_fill_source<'a>(
        &self,
        fill_source: impl Into<Sel<'a, VideoSource>>,
    ) -> AtemResult<()> {
        let fill: VideoSource = resolve(fill_source)?;
        self.super_source_field(0, |buf| buf.set_u16(4, fill.code()))
    }

    pub fn set_super_source_key_source<'a>(
        &self,
        key_source: impl Into<Sel<'a, VideoSource>>,
    ) -> AtemResult<()> {
        let key: VideoSource = resolve(key_source)?;
        self.super_source_field(1, |buf| buf.set_u16(6, key.code()))
    }

    pub fn set_super_source_foreground(&self, foreground: bool) -> AtemResult<()> {
        self.super_source_field(2, |buf| buf.set_u8(8, foreground as u8))
    }

    pub fn set_super_source_pre_multiplied(&self, pre_multiplied: bool) -> AtemResult<()> {
        self.super_source_field(3, |buf| buf.set_u8(9, pre_multiplied as u8))
    }

    pub fn set_super_source_clip(&self, clip: f64) -> AtemResult<()> {
        self.super_source_field(4, |buf| buf.set_fixed_u16(10, 10.0, clip))
    }

    pub fn set_super_source_gain(&self, gain: f64) -> AtemResult<()> {
        self.super_source_field(5, |buf| buf.set_fixed_u16(12, 10.0, gain))
    }

    pub fn set_super_source_invert_key(&self, invert_key: bool) -> AtemResult<()> {
        self.super_source_field(6, |buf| buf.set_u8(14, invert_key as u8))
    }

    pub fn set_super_source_border_enabled(&self, border_enabled: bool) -> AtemResult<()> {
        self.super_source_field(7, |buf| buf.set_u8(15, border_enabled as u8))
    }

    pub fn set_super_source_border_bevel<'a>(
        &self,
        border_bevel: impl Into<Sel<'a, BorderBevel>>,
    ) -> AtemResult<()> {
        let bevel: BorderBevel = resolve(border_bevel)?;
        self.super_source_field(8, |buf| buf.set_u8(16, bevel.code() as u8))
    }

    pub fn set_super_source_border_outer_width(&self, width: f64) -> AtemResult<()> {
        self.super_source_field(9, |buf| buf.set_fixed_u16(18, 100.0, width))
    }

    pub fn set_super_source_border_inner_width(&self, width: f64) -> AtemResult<()> {
        self.super_source_field(10, |buf| buf.set_fixed_u16(20, 100.0, width))
    }

    pub fn set_super_source_border_outer_softness(&self, softness: u8) -> AtemResult<()> {
        self.super_source_field(11, |buf| buf.set_u8(22, softness))
    }

    pub fn set_super_source_border_inner_softness(&self, softness: u8) -> AtemResult<()> {
        self.super_source_field(12, |buf| buf.set_u8(23, softness))
    }

    pub fn set_super_source_border_bevel_softness(&self, softness: f64) -> AtemResult<()> {
        self.super_source_field(13, |buf| buf.set_fixed_u8(24, 100.0, softness))
    }

    pub fn set_super_source_border_bevel_position(&self, position: f64) -> AtemResult<()> {
        self.super_source_field(14, |buf| buf.set_fixed_u8(25, 100.0, position))
    }

    pub fn set_super_source_border_hue(&self, hue: f64) -> AtemResult<()> {
        self.super_source_field(15, |buf| buf.set_fixed_u16(26, 10.0, hue))
    }

    pub fn set_super_source_border_saturation(&self, saturation: f64) -> AtemResult<()> {
        self.super_source_field(16, |buf| buf.set_fixed_u16(28, 10.0, saturation))
    }

    pub fn set_super_source_border_luma(&self, luma: f64) -> AtemResult<()> {
        self.super_source_field(17, |buf| buf.set_fixed_u16(30, 10.0, luma))
    }

    pub fn set_super_source_light_source_direction(&self, direction: f64) -> AtemResult<()> {
        self.super_source_field(18, |buf| buf.set_fixed_u16(32, 10.0, direction))
    }

    pub fn set_super_source_light_source_altitude(&self, altitude: u8) -> AtemResult<()> {
        self.super_source_field(19, |buf| buf.set_u8(34, altitude))
    }

    pub fn set_super_source_box_enabled<'a>(
        &self,
        ss_box: impl Into<Sel<'a, SsBox>>,
        enabled: bool,
    ) -> AtemResult<()> {
        let ss_box: SsBox = resolve(ss_box)?;
        self.box_field(ss_box, 0, |buf| buf.set_u8(3, enabled as u8))
    }

    pub fn set_super_source_box_input_source<'a>(
        &self,
        ss_box: impl Into<Sel<'a, SsBox>>,
        input_source: impl Into<Sel<'a, VideoSource>>,
    ) -> AtemResult<()> {
        let ss_box: SsBox = resolve(ss_box)?;
        let input: VideoSource = resolve(input_source)?;
        self.box_field(ss_box, 1, |buf| buf.set_u16(4, input.code()))
    }

    pub fn set_super_source_box_position_x<'a>(
        &self,
        ss_box: impl Into<Sel<'a, SsBox>>,
        position_x: f64,
    ) -> AtemResult<()> {
        let ss_box: SsBox = resolve(ss_box)?;
        self.box_field(ss_box, 2, |buf| buf.set_fixed_s16(6, 100.0, position_x))
    }

    pub fn set_super_source_box_position_y<'a>(
        &self,
        ss_box: impl Into<Sel<'a, SsBox>>,
        position_y: f64,
    ) -> AtemResult<()> {
        let ss_box: SsBox = resolve(ss_box)?;
        self.box_field(ss_box, 3, |buf| buf.set_fixed_s16(8, 100.0, position_y))
    }

    pub fn set_super_source_box_size<'a>(
        &self,
        ss_box: impl Into<Sel<'a, SsBox>>,
        size: f64,
    ) -> AtemResult<()> {
        let ss_box: SsBox = resolve(ss_box)?;
        self.box_field(ss_box, 4, |buf| buf.set_fixed_u16(10, 100.0, size))
    }

    pub fn set_super_source_box_cropped<'a>(
        &self,
        ss_box: impl Into<Sel<'a, SsBox>>,
        cropped: bool,
    ) -> AtemResult<()> {
        let ss_box: SsBox = resolve(ss_box)?;
        self.box_field(ss_box, 5, |buf| buf.set_u8(12, cropped as u8))
    }

    pub fn set_super_source_box_crop_top<'a>(
        &self,
        ss_box: impl Into<Sel<'a, SsBox>>,
        crop_top: f64,
    ) -> AtemResult<()> {
        let ss_box: SsBox = resolve(ss_box)?;
        self.box_field(ss_box, 6, |buf| buf.set_fixed_u16(14, 1000.0, crop_top))
    }

    pub fn set_super_source_box_crop_bottom<'a>(
        &self,
        ss_box: impl Into<Sel<'a, SsBox>>,
        crop_bottom: f64,
    ) -> AtemResult<()> {
        let ss_box: SsBox = resolve(ss_box)?;
        self.box_field(ss_box, 7, |buf| buf.set_fixed_u16(16, 1000.0, crop_bottom))
    }

    pub fn set_super_source_box_crop_left<'a>(
        &self,
        ss_box: impl Into<Sel<'a, SsBox>>,
        crop_left: f64,
    ) -> AtemResult<()> {
        let ss_box: SsBox = resolve(ss_box)?;
        self.box_field(ss_box, 8, |buf| buf.set_fixed_u16(18, 1000.0, crop_left))
    }

    pub fn set_super_source_box_crop_right<'a>(
        &self,
        ss_box: impl Into<Sel<'a, SsBox>>,
        crop_right: f64,
    ) -> AtemResult<()> {
        let ss_box: SsBox = resolve(ss_box)?;
        self.box_field(ss_box, 9, |buf| buf.set_fixed_u16(20, 1000.0, crop_right))
    }
}
