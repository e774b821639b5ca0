use crate::dsp::resample::lerp;
use crate::wavetable::Table;
use crate::WORKING_LENGTH;

/*
Wavetable Oscillator
====================

Plays one stored cycle over and over. The read position (phase) is kept in
table samples and advances by

    increment = frequency × table_len / sample_rate

per output sample. Positions between two stored samples are linearly
interpolated, and the read wraps from the last sample back to the first:

    table:  s0  s1  s2 ... s1023 | s0  s1 ...
                               ↑
                 phase 1023.4 reads lerp(s1023, s0, 0.4)

At 110 Hz / 48 kHz the increment is ~2.35, so each cycle skips samples;
above a few kHz the skipped harmonics fold back (no band-limiting here).
*/

pub struct WavetableOscillator {
    table: Table,
    phase: f64,
    frequency: f32,
    gain: f32,
}

impl WavetableOscillator {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            phase: 0.0,
            frequency: 110.0,
            gain: 0.5,
        }
    }

    /// Swap the playing table. The read position is kept so the swap is
    /// a waveform change, not a restart.
    pub fn set_table(&mut self, table: Table) {
        self.table = table;
    }

    pub fn set_frequency(&mut self, hz: f32) {
        self.frequency = hz.max(0.0);
    }

    pub fn set_gain(&mut self, gain: f32) {
        self.gain = gain;
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    #[inline]
    pub fn next_sample(&mut self, sample_rate: f32) -> f32 {
        let len = WORKING_LENGTH as f64;
        let index = self.phase as usize;
        let mu = (self.phase - index as f64) as f32;
        let next = (index + 1) % WORKING_LENGTH;
        let sample = lerp(self.table[index], self.table[next], mu);

        self.phase += self.frequency as f64 * len / sample_rate as f64;
        if self.phase >= len {
            self.phase %= len;
        }

        sample * self.gain
    }

    pub fn render(&mut self, out: &mut [f32], sample_rate: f32) {
        for sample in out.iter_mut() {
            *sample = self.next_sample(sample_rate);
        }
    }
}
