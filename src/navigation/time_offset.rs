#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::prelude::{Epoch, TimeScale};

/// Time Offset message: conversion parameters between
/// two time systems, as broadcast.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeOffset {
    /// Source time system
    pub from: TimeScale,
    /// Target time system
    pub to: TimeScale,
    /// Current leap second count (s)
    pub delta_t_ls: f64,
    /// Bias (s)
    pub a0: f64,
    /// Drift (s.s⁻¹)
    pub a1: f64,
    /// Reference time of the polynomial
    pub t_ref: Epoch,
    /// Week number of the scheduled leap second
    pub wn_lsf: u32,
    /// Day number (1: sunday) at the end of which the
    /// scheduled leap second occurs
    pub dn: u8,
    /// Leap second count after the scheduled event (s)
    pub delta_t_lsf: f64,
}

impl TimeOffset {
    /// Builds a [TimeOffset] without scheduled leap second
    pub fn new(from: TimeScale, to: TimeScale, delta_t_ls: f64, a0: f64, a1: f64, t_ref: Epoch) -> Self {
        Self {
            from,
            to,
            delta_t_ls,
            a0,
            a1,
            t_ref,
            wn_lsf: 0,
            dn: 0,
            delta_t_lsf: delta_t_ls,
        }
    }

    /// Copies and returns [TimeOffset] with a scheduled leap second
    pub fn with_leap_second(&self, wn_lsf: u32, dn: u8, delta_t_lsf: f64) -> Self {
        let mut s = *self;
        s.wn_lsf = wn_lsf;
        s.dn = dn;
        s.delta_t_lsf = delta_t_lsf;
        s
    }

    /// Returns the instant the scheduled leap second takes effect, if any
    pub fn leap_second_effectivity(&self) -> Option<Epoch> {
        if self.wn_lsf == 0 || self.dn == 0 {
            return None;
        }
        let nanos = u64::from(self.dn) * 86_400 * 1_000_000_000;
        Some(Epoch::from_time_of_week(self.wn_lsf, nanos, self.from))
    }

    /// Returns true if this message converts between `from` and `to`,
    /// in either direction.
    pub fn covers(&self, from: TimeScale, to: TimeScale) -> bool {
        (self.from == from && self.to == to) || (self.from == to && self.to == from)
    }

    /// Returns the offset Δ (s) at `t`, such that `t_to = t_from + Δ`.
    /// Returns None if this message does not cover the requested systems.
    pub fn offset(&self, from: TimeScale, to: TimeScale, t: Epoch) -> Option<f64> {
        let delta_t_ls = match self.leap_second_effectivity() {
            Some(effectivity) if t >= effectivity => self.delta_t_lsf,
            _ => self.delta_t_ls,
        };
        let dt = (t - self.t_ref).to_seconds();
        let delta = -(delta_t_ls + self.a0 + self.a1 * dt);
        if self.from == from && self.to == to {
            Some(delta)
        } else if self.from == to && self.to == from {
            Some(-delta)
        } else {
            None
        }
    }
}
