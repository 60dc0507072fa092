//! Setters for the classic audio mixer.

use crate::error::AtemResult;
use crate::protocol::audio::audio_db_to_word;
use crate::protocol::enums::{resolve, AudioMixerInputMixOption, AudioSource, Sel};
use crate::switcher::Switcher;

impl Switcher {
    pub fn set_audio_mixer_input_mix_option<'a>(
        &self,
        audio_source: impl Into<Sel<'a, AudioSource>>,
        mix_option: impl Into<Sel<'a, AudioMixerInputMixOption>>,
    ) -> AtemResult<()> {
        let source: AudioSource = resolve(audio_source)?;
        let mix_option: AudioMixerInputMixOption = resolve(mix_option)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u16(2) == source.code();
        out.prepare_command(b"CAMI", 12, index_match)?;
        out.buf.set_flag8(0, 0)?;
        out.buf.set_u16(2, source.code())?;
        out.buf.set_u8(4, mix_option.code() as u8)?;
        out.finish_command()
    }

    /// Input fader level, in dB.
    pub fn set_audio_mixer_input_volume<'a>(
        &self,
        audio_source: impl Into<Sel<'a, AudioSource>>,
        db: f64,
    ) -> AtemResult<()> {
        let source: AudioSource = resolve(audio_source)?;
        let word = audio_db_to_word(db);
        let mut out = self.begin_command()?;

        let index_match = out.probe_u16(2) == source.code();
        out.prepare_command(b"CAMI", 12, index_match)?;
        out.buf.set_flag8(0, 1)?;
        out.buf.set_u16(2, source.code())?;
        out.buf.set_u16(6, word)?;
        out.finish_command()
    }

    pub fn set_audio_mixer_input_balance<'a>(
        &self,
        audio_source: impl Into<Sel<'a, AudioSource>>,
        balance: f64,
    ) -> AtemResult<()> {
        let source: AudioSource = resolve(audio_source)?;
        let mut out = self.begin_command()?;

        let index_match = out.probe_u16(2) == source.code();
        out.prepare_command(b"CAMI", 12, index_match)?;
        out.buf.set_flag8(0, 2)?;
        out.buf.set_u16(2, source.code())?;
        out.buf.set_fixed_s16(8, 10_000.0, balance)?;
        out.finish_command()
    }

    pub fn set_audio_mixer_master_volume(&self, db: f64) -> AtemResult<()> {
        let word = audio_db_to_word(db);
        let mut out = self.begin_command()?;

        out.prepare_command(b"CAMM", 8, true)?;
        out.buf.set_flag8(0, 0)?;
        out.buf.set_u16(2, word)?;
        out.finish_command()
    }

    pub fn set_audio_mixer_monitor_monitor_audio(&self, monitor_audio: bool) -> AtemResult<()> {
        let mut out = self.begin_command()?;

        out.prepare_command(b"CAMm", 12, true)?;
        out.buf.set_flag8(0, 0)?;
        out.buf.set_u8(1, monitor_audio as u8)?;
        out.finish_command()
    }

    pub fn set_audio_mixer_monitor_volume(&self, db: f64) -> AtemResult<()> {
        let word = audio_db_to_word(db);
        let mut out = self.begin_command()?;

        out.prepare_command(b"CAMm", 12, true)?;
        out.buf.set_flag8(0, 1)?;
        out.buf.set_u16(2, word)?;
        out.finish_command()
    }

    pub fn set_audio_mixer_monitor_mute(&self, mute: bool) -> AtemResult<()> {
        let mut out = self.begin_command()?;

        out.prepare_command(b"CAMm", 12, true)?;
        out.buf.set_flag8(0, 2)?;
        out.buf.set_u8(4, mute as u8)?;
        out.finish_command()
    }

    pub fn set_audio_mixer_monitor_solo(&self, solo: bool) -> AtemResult<()> {
        let mut out = self.begin_command()?;

        out.prepare_command(b"CAMm", 12, true)?;
        out.buf.set_flag8(0, 3)?;
        out.buf.set_u8(5, solo as u8)?;
        out.finish_command()
    }

    pub fn set_audio_mixer_monitor_solo_input<'a>(
        &self,
        solo_input: impl Into<Sel<'a, AudioSource>>,
    ) -> AtemResult<()> {
        let solo_input: AudioSource = resolve(solo_input)?;
        let mut out = self.begin_command()?;

        out.prepare_command(b"CAMm", 12, true)?;
        out.buf.set_flag8(0, 4)?;
        out.buf.set_u16(6, solo_input.code())?;
        out.finish_command()
    }

    pub fn set_audio_mixer_monitor_dim(&self, dim: bool) -> AtemResult<()> {
        let mut out = self.begin_command()?;

        out.prepare_command(b"CAMm", 12, true)?;
        out.buf.set_flag8(0, 5)?;
        out.buf.set_u8(8, dim as u8)?;
        out.finish_command()
    }

    /// Enable or disable the level meter stream (`AMLv` updates).
    pub fn set_audio_levels_enable(&self, enable: bool) -> AtemResult<()> {
        let mut out = self.begin_command()?;

        out.prepare_command(b"SALN", 4, true)?;
        out.buf.set_u8(0, enable as u8)?;
        out.finish_command()
    }

    pub fn set_reset_audio_mixer_peaks_input_source<'a>(
        &self,
        input_source: impl Into<Sel<'a, AudioSource>>,
    ) -> AtemResult<()> {
        let input: AudioSource = resolve(input_source)?;
        let mut out = self.begin_command()?;

        out.prepare_command(b"RAMP", 8, true)?;
        out.buf.set_flag8(0, 1)?;
        out.buf.set_u16(2, input.code())?;
        out.finish_command()
    }

    pub fn set_reset_audio_mixer_peaks_master(&self, master: bool) -> AtemResult<()> {
        let mut out = self.begin_command()?;

        out.prepare_command(b"RAMP", 8, true)?;
        out.buf.set_flag8(0, 2)?;
        out.buf.set_u8(4, master as u8)?;
        out.finish_command()
    }
}
