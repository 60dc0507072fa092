//! Setters for transition control: style selection, position, and the mix,
//! dip, wipe, DVE and stinger parameter blocks.

use crate::error::AtemResult;
use crate::protocol::enums::{
    resolve, DveTransitionStyle, MediaPlayer, MixEffect, PatternStyle, Sel, TransitionStyle,
    VideoSource,
};
use crate::switcher::Switcher;

impl Switcher {
    pub fn set_transition_style<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        style: impl Into<Sel<'a, TransitionStyle>>,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let style: TransitionStyle = resolve(style)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(1) == me.code() as u8;
        out.prepare_command(b"CTTp", 4, index_match)?;
        out.buf.set_flag8(0, 0)?;
        out.buf.set_u8(1, me.code() as u8)?;
        out.buf.set_u8(2, style.code() as u8)?;
        out.finish_command()
    }

    /// Select the layers carried by the next transition, as a bit mask of
    /// background and keyers 1-4.
    pub fn set_transition_next_transition<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        next_transition: u8,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(1) == me.code() as u8;
        out.prepare_command(b"CTTp", 4, index_match)?;
        out.buf.set_flag8(0, 1)?;
        out.buf.set_u8(1, me.code() as u8)?;
        out.buf.set_u8(3, next_transition)?;
        out.finish_command()
    }

    pub fn set_transition_preview_enabled<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        enabled: bool,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(0) == me.code() as u8;
        out.prepare_command(b"CTPr", 4, index_match)?;
        out.buf.set_u8(0, me.code() as u8)?;
        out.buf.set_u8(1, enabled as u8)?;
        out.finish_command()
    }

    /// Drive the transition slider directly, 0..=10000.
    pub fn set_transition_position<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        position: u16,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(0) == me.code() as u8;
        out.prepare_command(b"CTPs", 4, index_match)?;
        out.buf.set_u8(0, me.code() as u8)?;
        out.buf.set_u16(2, position)?;
        out.finish_command()
    }

    pub fn set_transition_mix_rate<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        rate: u8,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(0) == me.code() as u8;
        out.prepare_command(b"CTMx", 4, index_match)?;
        out.buf.set_u8(0, me.code() as u8)?;
        out.buf.set_u8(1, rate)?;
        out.finish_command()
    }

    pub fn set_transition_dip_rate<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        rate: u8,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(1) == me.code() as u8;
        out.prepare_command(b"CTDp", 8, index_match)?;
        out.buf.set_flag8(0, 0)?;
        out.buf.set_u8(1, me.code() as u8)?;
        out.buf.set_u8(2, rate)?;
        out.finish_command()
    }

    pub fn set_transition_dip_input<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        input: impl Into<Sel<'a, VideoSource>>,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let input: VideoSource = resolve(input)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(1) == me.code() as u8;
        out.prepare_command(b"CTDp", 8, index_match)?;
        out.buf.set_flag8(0, 1)?;
        out.buf.set_u8(1, me.code() as u8)?;
        out.buf.set_u16(4, input.code())?;
        out.finish_command()
    }

    pub fn set_transition_wipe_rate<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        rate: u8,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTWp", 20, index_match)?;
        out.buf.set_flag16(0, 0)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_u8(3, rate)?;
        out.finish_command()
    }

    pub fn set_transition_wipe_pattern<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        pattern: impl Into<Sel<'a, PatternStyle>>,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let pattern: PatternStyle = resolve(pattern)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTWp", 20, index_match)?;
        out.buf.set_flag16(0, 1)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_u8(4, pattern.code() as u8)?;
        out.finish_command()
    }

    pub fn set_transition_wipe_width<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        width: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTWp", 20, index_match)?;
        out.buf.set_flag16(0, 2)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_fixed_u16(6, 100.0, width)?;
        out.finish_command()
    }

    pub fn set_transition_wipe_fill_source<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        fill_source: impl Into<Sel<'a, VideoSource>>,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let fill: VideoSource = resolve(fill_source)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTWp", 20, index_match)?;
        out.buf.set_flag16(0, 3)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_u16(8, fill.code())?;
        out.finish_command()
    }

    pub fn set_transition_wipe_symmetry<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        symmetry: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTWp", 20, index_match)?;
        out.buf.set_flag16(0, 4)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_fixed_u16(10, 100.0, symmetry)?;
        out.finish_command()
    }

    pub fn set_transition_wipe_softness<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        softness: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTWp", 20, index_match)?;
        out.buf.set_flag16(0, 5)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_fixed_u16(12, 100.0, softness)?;
        out.finish_command()
    }

    pub fn set_transition_wipe_position_x<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        position_x: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTWp", 20, index_match)?;
        out.buf.set_flag16(0, 6)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_fixed_u16(14, 10_000.0, position_x)?;
        out.finish_command()
    }

    pub fn set_transition_wipe_position_y<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        position_y: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTWp", 20, index_match)?;
        out.buf.set_flag16(0, 7)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_fixed_u16(16, 10_000.0, position_y)?;
        out.finish_command()
    }

    pub fn set_transition_wipe_reverse<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        reverse: bool,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTWp", 20, index_match)?;
        out.buf.set_flag16(0, 8)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_u8(18, reverse as u8)?;
        out.finish_command()
    }

    pub fn set_transition_wipe_flip_flop<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        flip_flop: bool,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTWp", 20, index_match)?;
        out.buf.set_flag16(0, 9)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_u8(19, flip_flop as u8)?;
        out.finish_command()
    }

    pub fn set_transition_dve_rate<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        rate: u8,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTDv", 20, index_match)?;
        out.buf.set_flag16(0, 0)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_u8(3, rate)?;
        out.finish_command()
    }

    pub fn set_transition_dve_style<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        style: impl Into<Sel<'a, DveTransitionStyle>>,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let style: DveTransitionStyle = resolve(style)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTDv", 20, index_match)?;
        out.buf.set_flag16(0, 2)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_u8(5, style.code() as u8)?;
        out.finish_command()
    }

    pub fn set_transition_dve_fill_source<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        fill_source: impl Into<Sel<'a, VideoSource>>,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let fill: VideoSource = resolve(fill_source)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTDv", 20, index_match)?;
        out.buf.set_flag16(0, 3)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_u16(6, fill.code())?;
        out.finish_command()
    }

    pub fn set_transition_dve_key_source<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        key_source: impl Into<Sel<'a, VideoSource>>,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let key: VideoSource = resolve(key_source)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTDv", 20, index_match)?;
        out.buf.set_flag16(0, 4)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_u16(8, key.code())?;
        out.finish_command()
    }

    pub fn set_transition_dve_enable_key<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        enable_key: bool,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTDv", 20, index_match)?;
        out.buf.set_flag16(0, 5)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_u8(10, enable_key as u8)?;
        out.finish_command()
    }

    pub fn set_transition_dve_pre_multiplied<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        pre_multiplied: bool,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTDv", 20, index_match)?;
        out.buf.set_flag16(0, 6)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_u8(11, pre_multiplied as u8)?;
        out.finish_command()
    }

    pub fn set_transition_dve_clip<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        clip: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTDv", 20, index_match)?;
        out.buf.set_flag16(0, 7)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_fixed_u16(12, 10.0, clip)?;
        out.finish_command()
    }

    pub fn set_transition_dve_gain<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        gain: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTDv", 20, index_match)?;
        out.buf.set_flag16(0, 8)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_fixed_u16(14, 10.0, gain)?;
        out.finish_command()
    }

    pub fn set_transition_dve_invert_key<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        invert_key: bool,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTDv", 20, index_match)?;
        out.buf.set_flag16(0, 9)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_u8(16, invert_key as u8)?;
        out.finish_command()
    }

    pub fn set_transition_dve_reverse<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        reverse: bool,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTDv", 20, index_match)?;
        out.buf.set_flag16(0, 10)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_u8(17, reverse as u8)?;
        out.finish_command()
    }

    pub fn set_transition_dve_flip_flop<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        flip_flop: bool,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTDv", 20, index_match)?;
        out.buf.set_flag16(0, 11)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_u8(18, flip_flop as u8)?;
        out.finish_command()
    }

    pub fn set_transition_stinger_source<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        source: impl Into<Sel<'a, MediaPlayer>>,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let source: MediaPlayer = resolve(source)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTSt", 20, index_match)?;
        out.buf.set_flag16(0, 0)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_u8(3, source.code() as u8)?;
        out.finish_command()
    }

    pub fn set_transition_stinger_pre_multiplied<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        pre_multiplied: bool,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTSt", 20, index_match)?;
        out.buf.set_flag16(0, 1)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_u8(4, pre_multiplied as u8)?;
        out.finish_command()
    }

    pub fn set_transition_stinger_clip<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        clip: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTSt", 20, index_match)?;
        out.buf.set_flag16(0, 2)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_fixed_u16(6, 10.0, clip)?;
        out.finish_command()
    }

    pub fn set_transition_stinger_gain<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        gain: f64,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTSt", 20, index_match)?;
        out.buf.set_flag16(0, 3)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_fixed_u16(8, 10.0, gain)?;
        out.finish_command()
    }

    pub fn set_transition_stinger_invert_key<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        invert_key: bool,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTSt", 20, index_match)?;
        out.buf.set_flag16(0, 4)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_u8(10, invert_key as u8)?;
        out.finish_command()
    }

    pub fn set_transition_stinger_pre_roll<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        pre_roll: u16,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTSt", 20, index_match)?;
        out.buf.set_flag16(0, 5)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_u16(12, pre_roll)?;
        out.finish_command()
    }

    pub fn set_transition_stinger_clip_duration<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        clip_duration: u16,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTSt", 20, index_match)?;
        out.buf.set_flag16(0, 6)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_u16(14, clip_duration)?;
        out.finish_command()
    }

    pub fn set_transition_stinger_trigger_point<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        trigger_point: u16,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTSt", 20, index_match)?;
        out.buf.set_flag16(0, 7)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_u16(16, trigger_point)?;
        out.finish_command()
    }

    pub fn set_transition_stinger_mix_rate<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        mix_rate: u16,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(2) == me.code() as u8;
        out.prepare_command(b"CTSt", 20, index_match)?;
        out.buf.set_flag16(0, 8)?;
        out.buf.set_u8(2, me.code() as u8)?;
        out.buf.set_u16(18, mix_rate)?;
        out.finish_command()
    }

    pub fn set_fade_to_black_rate<'a>(
        &self,
        me: impl Into<Sel<'a, MixEffect>>,
        rate: u8,
    ) -> AtemResult<()> {
        let me: MixEffect = resolve(me)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u8(1) == me.code() as u8;
        out.prepare_command(b"FtbC", 4, index_match)?;
        out.buf.set_flag8(0, 0)?;
        out.buf.set_u8(1, me.code() as u8)?;
        out.buf.set_u8(2, rate)?;
        out.finish_command()
    }
}
