// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for video playback values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_PLAYBACK_RATE, DEFAULT_VOLUME, MAX_PLAYBACK_RATE, MAX_VOLUME, MIN_PLAYBACK_RATE,
    MIN_VOLUME, PLAYBACK_RATE_PRESETS, VOLUME_STEP,
};

// =============================================================================
// Volume
// =============================================================================

/// Volume level in percent, guaranteed to be within 0–100.
///
/// The embedded player takes an integer percentage, so this is kept integral
/// rather than as a gain factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volume(u8);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    #[must_use]
    pub fn new(volume: u8) -> Self {
        Self(volume.clamp(MIN_VOLUME, MAX_VOLUME))
    }

    /// Returns the volume value in percent.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns true if volume is zero.
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 == MIN_VOLUME
    }

    /// Increases volume by one step, clamping to maximum.
    #[must_use]
    pub fn increase(self) -> Self {
        Self::new(self.0.saturating_add(VOLUME_STEP))
    }

    /// Decreases volume by one step, clamping to minimum.
    #[must_use]
    pub fn decrease(self) -> Self {
        Self::new(self.0.saturating_sub(VOLUME_STEP))
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

// =============================================================================
// PlaybackRate
// =============================================================================

/// Playback rate, guaranteed to be within the range the embedded player
/// accepts (0.25x – 2.0x).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    pub const QUARTER: Self = Self(0.25);
    pub const HALF: Self = Self(0.5);
    pub const THREE_QUARTER: Self = Self(0.75);
    pub const NORMAL: Self = Self(1.0);
    pub const ONE_AND_A_QUARTER: Self = Self(1.25);
    pub const ONE_AND_A_HALF: Self = Self(1.5);
    pub const TWICE: Self = Self(2.0);

    /// Creates a new playback rate, clamping to valid range.
    ///
    /// NaN falls back to normal speed.
    #[must_use]
    pub fn new(rate: f64) -> Self {
        if rate.is_nan() {
            return Self::default();
        }
        Self(rate.clamp(MIN_PLAYBACK_RATE, MAX_PLAYBACK_RATE))
    }

    /// Returns the rate value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the next higher preset rate, or self if at maximum.
    #[must_use]
    pub fn increase(self) -> Self {
        let next = PLAYBACK_RATE_PRESETS
            .iter()
            .find(|&&r| r > self.0 + 0.001)
            .copied()
            .unwrap_or(self.0);
        Self(next)
    }

    /// Returns the next lower preset rate, or self if at minimum.
    #[must_use]
    pub fn decrease(self) -> Self {
        let prev = PLAYBACK_RATE_PRESETS
            .iter()
            .rev()
            .find(|&&r| r < self.0 - 0.001)
            .copied()
            .unwrap_or(self.0);
        Self(prev)
    }

    /// Returns true if this is normal speed.
    #[must_use]
    pub fn is_normal(self) -> bool {
        (self.0 - DEFAULT_PLAYBACK_RATE).abs() < 0.001
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self(DEFAULT_PLAYBACK_RATE)
    }
}

// =============================================================================
// BufferedFraction
// =============================================================================

/// Share of the video already buffered, guaranteed to be within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BufferedFraction(f64);

impl BufferedFraction {
    /// Creates a new fraction, clamping to `[0, 1]`. NaN is treated as empty.
    #[must_use]
    pub fn new(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self(0.0);
        }
        Self(fraction.clamp(0.0, 1.0))
    }

    /// Returns the fraction as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true once everything is buffered.
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 >= 1.0
    }
}

// =============================================================================
// Tests
// =============================================================================
