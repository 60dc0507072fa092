//! Setters for upstream keyers: on-air state, key type, masks, fill/key
//! routing, the per-mode adjustments and the flying key.

use crate::error::AtemResult;
use crate::net::buffer::{BufferResult, ByteBuffer};
use crate::protocol::enums::{
    resolve, BorderBevel, KeyFrame, Keyer, KeyerType, MixEffect, PatternStyle, Sel, VideoSource,
};
use crate::switcher::Switcher;

const MASK_RANGE: (f64, f64) = (-16000.0, 16000.0);
const MASK_UNITS: (f64, f64) = (-9.0, 9.0);

impl Switcher {
    /// Field-bit command addressed by (mE, keyer) at payload offsets 1 and 2.
    fn keyer_field(
        &self,
        tag: &[u8; 4],
        cmd_bytes: usize,
        me: MixEffect,
        keyer: Keyer,
        bit: u8,
        write: impl FnOnce(&mut ByteBuffer) -> BufferResult<()>,
    ) -> AtemResult<()> {
        let mut out = self.begin_command()?;

        let index_match =
            out.probe_u8(1) == me.code() as u8 && out.probe_u8(2) == keyer.code() as u8;
        out.prepare_command(tag, cmd_bytes, index_match)?;
        out.buf.set_flag8(0, bit)?;
        out.buf.set_u8(1, me.code() as u8)?;
        out.buf.set_u8(2, keyer.code() as u8)?;
        write(&mut out.buf)?;
        out.finish_command()
    }

    /// CKDV carries a 32-bit field mask and its index tuple at offsets 4/5.
    fn key_dve_field(
        &self,
        me: MixEffect,
        keyer: Keyer,
        bit: u8,
        write: impl FnOnce(&mut ByteBuffer) -> BufferResult<()>,
    ) -> AtemResult<()> {
        let mut out = self.begin_command()?;

        let index_match =
            out.probe_u8(4) == me.code() as u8 && out.probe_u8(5) == keyer.code() as u8;
        out.prepare_command(b"CKDV", 64, index_match)?;
        out.buf.set_flag32(0, bit)?;
        out.buf.set_u8(4, me.code() as u8)?;
        out.buf.set_u8(5, keyer.code() as u8)?;
        write(&mut out.buf)?;
        out.finish_command()
    }

    pub fn set_keyer_on_air<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        enabled: bool,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        let mut out = self.begin_command()?;

        let index_match =
            out.probe_u8(0) == me.code() as u8 && out.probe_u8(1) == keyer.code() as u8;
        out.prepare_command(b"CKOn", 4, index_match)?;
        out.buf.set_u8(0, me.code() as u8)?;
        out.buf.set_u8(1, keyer.code() as u8)?;
        out.buf.set_u8(2, enabled as u8)?;
        out.finish_command()
    }

    pub fn set_keyer_type<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        kind: impl Into<Sel<'a, KeyerType>>,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        let kind: KeyerType = resolve(kind)?;

        self.keyer_field(b"CKTp", 8, me, keyer, 0, |buf| buf.set_u8(3, kind.code() as u8))
    }

    pub fn set_keyer_fly_enabled<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        fly_enabled: bool,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;

        self.keyer_field(b"CKTp", 8, me, keyer, 1, |buf| buf.set_u8(4, fly_enabled as u8))
    }

    pub fn set_keyer_masked<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        masked: bool,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;

        self.keyer_field(b"CKMs", 12, me, keyer, 0, |buf| buf.set_u8(3, masked as u8))
    }

    /// Adjusting a mask edge implies enabling the mask.
    pub fn set_keyer_top<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        top: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;

        self.keyer_field(b"CKMs", 12, me, keyer, 1, |buf| {
            buf.set_flag8(3, 0)?;
            buf.set_fixed_s16(4, 1000.0, top)
        })
    }

    pub fn set_keyer_bottom<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        bottom: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;

        self.keyer_field(b"CKMs", 12, me, keyer, 2, |buf| buf.set_fixed_s16(6, 1000.0, bottom))
    }

    pub fn set_keyer_left<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        left: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;

        self.keyer_field(b"CKMs", 12, me, keyer, 3, |buf| {
            buf.set_scaled_s16(8, MASK_UNITS, MASK_RANGE, left)
        })
    }

    pub fn set_keyer_right<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        right: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;

        self.keyer_field(b"CKMs", 12, me, keyer, 4, |buf| {
            buf.set_scaled_s16(10, MASK_UNITS, MASK_RANGE, right)
        })
    }

    pub fn set_keyer_fill_source<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        fill_source: impl Into<Sel<'a, VideoSource>>,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        let fill: VideoSource = resolve(fill_source)?;
        let mut out = self.begin_command()?;

        let index_match =
            out.probe_u8(0) == me.code() as u8 && out.probe_u8(1) == keyer.code() as u8;
        out.prepare_command(b"CKeF", 4, index_match)?;
        out.buf.set_u8(0, me.code() as u8)?;
        out.buf.set_u8(1, keyer.code() as u8)?;
        out.buf.set_u16(2, fill.code())?;
        out.finish_command()
    }

    pub fn set_keyer_key_source<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        key_source: impl Into<Sel<'a, VideoSource>>,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        let key: VideoSource = resolve(key_source)?;
        let mut out = self.begin_command()?;

        let index_match =
            out.probe_u8(0) == me.code() as u8 && out.probe_u8(1) == keyer.code() as u8;
        out.prepare_command(b"CKeC", 4, index_match)?;
        out.buf.set_u8(0, me.code() as u8)?;
        out.buf.set_u8(1, keyer.code() as u8)?;
        out.buf.set_u16(2, key.code())?;
        out.finish_command()
    }

    pub fn set_key_luma_pre_multiplied<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        pre_multiplied: bool,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;

        self.keyer_field(b"CKLm", 12, me, keyer, 0, |buf| buf.set_u8(3, pre_multiplied as u8))
    }

    pub fn set_key_luma_clip<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        clip: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;

        self.keyer_field(b"CKLm", 12, me, keyer, 1, |buf| buf.set_fixed_u16(4, 10.0, clip))
    }

    pub fn set_key_luma_gain<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        gain: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;

        self.keyer_field(b"CKLm", 12, me, keyer, 2, |buf| buf.set_fixed_u16(6, 10.0, gain))
    }

    pub fn set_key_luma_invert_key<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        invert_key: bool,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;

        self.keyer_field(b"CKLm", 12, me, keyer, 3, |buf| buf.set_u8(8, invert_key as u8))
    }

    pub fn set_key_chroma_hue<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        hue: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;

        self.keyer_field(b"CKCk", 16, me, keyer, 0, |buf| buf.set_fixed_u16(4, 10.0, hue))
    }

    pub fn set_key_chroma_gain<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        gain: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;

        self.keyer_field(b"CKCk", 16, me, keyer, 1, |buf| buf.set_fixed_u16(6, 10.0, gain))
    }

    pub fn set_key_chroma_y_suppress<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        y_suppress: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;

        self.keyer_field(b"CKCk", 16, me, keyer, 2, |buf| buf.set_fixed_u16(8, 10.0, y_suppress))
    }

    pub fn set_key_chroma_lift<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        lift: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;

        self.keyer_field(b"CKCk", 16, me, keyer, 3, |buf| buf.set_fixed_u16(10, 10.0, lift))
    }

    pub fn set_key_chroma_narrow<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        narrow: bool,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;

        self.keyer_field(b"CKCk", 16, me, keyer, 4, |buf| buf.set_u8(12, narrow as u8))
    }

    pub fn set_key_pattern_pattern<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        pattern: impl Into<Sel<'a, PatternStyle>>,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        let pattern: PatternStyle = resolve(pattern)?;

        self.keyer_field(b"CKPt", 16, me, keyer, 0, |buf| buf.set_u8(3, pattern.code() as u8))
    }

    pub fn set_key_pattern_size<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        size: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;

        self.keyer_field(b"CKPt", 16, me, keyer, 1, |buf| buf.set_fixed_u16(4, 100.0, size))
    }

    pub fn set_key_pattern_symmetry<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        symmetry: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;

        self.keyer_field(b"CKPt", 16, me, keyer, 2, |buf| buf.set_fixed_u16(6, 100.0, symmetry))
    }

    pub fn set_key_pattern_softness<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        softness: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;

        self.keyer_field(b"CKPt", 16, me, keyer, 3, |buf| buf.set_fixed_u16(8, 100.0, softness))
    }

    pub fn set_key_pattern_position_x<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        position_x: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;

        self.keyer_field(b"CKPt", 16, me, keyer, 4, |buf| {
            buf.set_fixed_u16(10, 10_000.0, position_x)
        })
    }

    pub fn set_key_pattern_position_y<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        position_y: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;

        self.keyer_field(b"CKPt", 16, me, keyer, 5, |buf| {
            buf.set_fixed_u16(12, 10_000.0, position_y)
        })
    }

    pub fn set_key_pattern_invert_pattern<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        invert_pattern: bool,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;

        self.keyer_field(b"CKPt", 16, me, keyer, 6, |buf| buf.set_u8(14, invert_pattern as u8))
    }

    pub fn set_key_dve_size_x<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        size_x: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 0, |buf| buf.set_fixed_u32(8, 1000.0, size_x))
    }

    pub fn set_key_dve_size_y<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        size_y: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 1, |buf| buf.set_fixed_u32(12, 1000.0, size_y))
    }

    pub fn set_key_dve_position_x<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        position_x: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 2, |buf| buf.set_fixed_s32(16, 1000.0, position_x))
    }

    pub fn set_key_dve_position_y<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        position_y: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 3, |buf| buf.set_fixed_s32(20, 1000.0, position_y))
    }

    pub fn set_key_dve_rotation<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        rotation: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 4, |buf| buf.set_fixed_u32(24, 10.0, rotation))
    }

    pub fn set_key_dve_border_enabled<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        border_enabled: bool,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 5, |buf| buf.set_u8(28, border_enabled as u8))
    }

    pub fn set_key_dve_shadow<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        shadow: bool,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 6, |buf| buf.set_u8(29, shadow as u8))
    }

    pub fn set_key_dve_border_bevel<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        border_bevel: impl Into<Sel<'a, BorderBevel>>,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        let bevel: BorderBevel = resolve(border_bevel)?;
        self.key_dve_field(me, keyer, 7, |buf| buf.set_u8(30, bevel.code() as u8))
    }

    pub fn set_key_dve_border_outer_width<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        width: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 8, |buf| buf.set_fixed_u16(32, 100.0, width))
    }

    pub fn set_key_dve_border_inner_width<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        width: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 9, |buf| buf.set_fixed_u16(34, 100.0, width))
    }

    pub fn set_key_dve_border_outer_softness<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        softness: u8,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 10, |buf| buf.set_u8(36, softness))
    }

    pub fn set_key_dve_border_inner_softness<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        softness: u8,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 11, |buf| buf.set_u8(37, softness))
    }

    pub fn set_key_dve_border_bevel_softness<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        softness: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 12, |buf| buf.set_fixed_u8(38, 100.0, softness))
    }

    pub fn set_key_dve_border_bevel_position<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        position: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 13, |buf| buf.set_fixed_u8(39, 100.0, position))
    }

    pub fn set_key_dve_border_opacity<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        opacity: u8,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 14, |buf| buf.set_u8(40, opacity))
    }

    pub fn set_key_dve_border_hue<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        hue: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 15, |buf| buf.set_fixed_u16(42, 10.0, hue))
    }

    pub fn set_key_dve_border_saturation<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        saturation: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 16, |buf| buf.set_fixed_u16(44, 10.0, saturation))
    }

    pub fn set_key_dve_border_luma<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        luma: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 17, |buf| buf.set_fixed_u16(46, 10.0, luma))
    }

    pub fn set_key_dve_light_source_direction<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        direction: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 18, |buf| buf.set_fixed_u16(48, 10.0, direction))
    }

    pub fn set_key_dve_light_source_altitude<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        altitude: u8,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 19, |buf| buf.set_u8(50, altitude))
    }

    pub fn set_key_dve_masked<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        masked: bool,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 20, |buf| buf.set_u8(51, masked as u8))
    }

    pub fn set_key_dve_top<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        top: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 21, |buf| buf.set_fixed_s16(52, 1000.0, top))
    }

    pub fn set_key_dve_bottom<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        bottom: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 22, |buf| buf.set_fixed_s16(54, 1000.0, bottom))
    }

    pub fn set_key_dve_left<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        left: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 23, |buf| {
            buf.set_scaled_s16(56, MASK_UNITS, MASK_RANGE, left)
        })
    }

    pub fn set_key_dve_right<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        right: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 24, |buf| {
            buf.set_scaled_s16(58, MASK_UNITS, MASK_RANGE, right)
        })
    }

    pub fn set_key_dve_rate<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        rate: u8,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        self.key_dve_field(me, keyer, 25, |buf| buf.set_u8(60, rate))
    }

    /// Store the current key position as a fly key frame.
    pub fn set_keyer_fly_key_frame<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        key_frame: impl Into<Sel<'a, KeyFrame>>,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        let key_frame: KeyFrame = resolve(key_frame)?;
        let mut out = self.begin_command()?;

        let index_match =
            out.probe_u8(0) == me.code() as u8 && out.probe_u8(1) == keyer.code() as u8;
        out.prepare_command(b"SFKF", 4, index_match)?;
        out.buf.set_u8(0, me.code() as u8)?;
        out.buf.set_u8(1, keyer.code() as u8)?;
        out.buf.set_u8(2, key_frame.code() as u8)?;
        out.finish_command()
    }

    /// Fly the key to a stored key frame.
    pub fn set_run_flying_key_key_frame<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        key_frame: impl Into<Sel<'a, KeyFrame>>,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        let key_frame: KeyFrame = resolve(key_frame)?;
        let mut out = self.begin_command()?;

        let index_match =
            out.probe_u8(1) == me.code() as u8 && out.probe_u8(2) == keyer.code() as u8;
        out.prepare_command(b"RFlK", 8, index_match)?;
        out.buf.set_u8(1, me.code() as u8)?;
        out.buf.set_u8(2, keyer.code() as u8)?;
        out.buf.set_u8(4, key_frame.code() as u8)?;
        out.finish_command()
    }

    pub fn set_run_flying_key_run_to_infinite_index<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        keyer: impl Into<Sel<'a, Keyer>>,
        run_to_infinite_index: u8,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let keyer: Keyer = resolve(keyer)?;
        let mut out = self.begin_command()?;

        let index_match =
            out.probe_u8(1) == me.code() as u8 && out.probe_u8(2) == keyer.code() as u8;
        out.prepare_command(b"RFlK", 8, index_match)?;
        out.buf.set_flag8(0, 1)?;
        out.buf.set_u8(1, me.code() as u8)?;
        out.buf.set_u8(2, keyer.code() as u8)?;
        out.buf.set_u8(5, run_to_infinite_index)?;
        out.finish_command()
    }
}
