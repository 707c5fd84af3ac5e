use crate::monitor::{Condition, MonitorKind};
use crate::notification::{GlideComputerEvent, Notification};
use crate::telemetry::{TelemetrySnapshot, math::smooth};
use chrono::TimeDelta;

/// Task phase relevant to final glide reporting.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GlidePhase {
    /// More task points ahead and not yet on final glide.
    BeforeFinalGlide,
    /// On the last leg or already on final glide.
    FinalGlide,
}

impl GlidePhase {
    /// Report interval for the phase: rare reminders before, frequent updates on final glide.
    pub fn notify_interval(self) -> TimeDelta {
        match self {
            GlidePhase::BeforeFinalGlide => TimeDelta::minutes(5),
            GlidePhase::FinalGlide => TimeDelta::minutes(1),
        }
    }
}

/// Reports crossings of the final glide path based on the smoothed task altitude difference.
#[derive(Debug, Clone)]
pub struct FinalGlideTransition {
    tad: f64,
    last_tad: f64,
    phase: GlidePhase,
}

impl FinalGlideTransition {
    const SMOOTHING: f64 = 0.2;
    /// Altitude difference (m) regarded as well below the glide path.
    pub const WELL_BELOW: f64 = -50.0;
    /// Altitude difference (m) regarded as comfortably above the glide path early in the task.
    pub const WELL_ABOVE: f64 = 50.0;
    /// Dead band (m) around the glide path.
    pub const ON_PATH: f64 = 1.0;

    pub fn new() -> Self {
        Self {
            tad: 0.0,
            last_tad: 0.0,
            phase: GlidePhase::BeforeFinalGlide,
        }
    }

    /// Smoothed task altitude difference (m).
    pub fn smoothed_altitude_difference(&self) -> f64 { self.tad }
    pub fn last_altitude_difference(&self) -> f64 { self.last_tad }
    pub fn phase(&self) -> GlidePhase { self.phase }
}

impl Default for FinalGlideTransition {
    fn default() -> Self { Self::new() }
}

impl Condition for FinalGlideTransition {
    const KIND: MonitorKind = MonitorKind::FinalGlide;
    const NOTIFY_INTERVAL: TimeDelta = TimeDelta::minutes(5);
    const CHECK_INTERVAL: TimeDelta = TimeDelta::seconds(1);

    fn check(&mut self, snapshot: &TelemetrySnapshot) -> bool {
        if !snapshot.flying || !snapshot.task.has_active_point() {
            return false;
        }
        self.tad = smooth(self.tad, snapshot.task_altitude_difference, Self::SMOOTHING);

        self.phase = if snapshot.task.has_next_point() && !snapshot.final_glide {
            GlidePhase::BeforeFinalGlide
        } else {
            GlidePhase::FinalGlide
        };

        match self.phase {
            GlidePhase::BeforeFinalGlide => {
                if self.tad > Self::WELL_ABOVE && self.last_tad < Self::WELL_BELOW {
                    // above final glide early in the task
                    return true;
                }
                if self.tad < Self::WELL_BELOW {
                    self.last_tad = self.tad;
                }
                false
            }
            GlidePhase::FinalGlide if snapshot.final_glide => {
                if self.last_tad < Self::WELL_BELOW && self.tad > Self::ON_PATH {
                    // just reached final glide, previously well below
                    return true;
                }
                if self.last_tad > Self::ON_PATH && self.tad < Self::WELL_BELOW {
                    self.last_tad = self.tad;
                    return true;
                }
                false
            }
            GlidePhase::FinalGlide => false,
        }
    }

    fn notification(&self) -> Option<Notification> {
        if self.tad > Self::ON_PATH {
            Some(GlideComputerEvent::FinalGlideAbove.into())
        } else if self.tad < -Self::ON_PATH {
            Some(GlideComputerEvent::FinalGlideBelow.into())
        } else {
            None
        }
    }

    fn save_last(&mut self) { self.last_tad = self.tad; }

    fn notify_interval(&self) -> TimeDelta { self.phase.notify_interval() }
}
