use super::snapshot::GeoPoint;
use strum_macros::Display;

/// Kind of competition task flown.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Display)]
pub enum TaskType {
    #[default]
    Racing,
    /// Assigned area task with a minimum task time.
    Aat,
    Gates,
}

impl From<&str> for TaskType {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "aat" | "assigned_area" => TaskType::Aat,
            "gp" | "gates" => TaskType::Gates,
            _ => TaskType::Racing,
        }
    }
}

/// Altitude reference the start height limit is measured against.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Display)]
pub enum StartHeightRef {
    #[default]
    AboveGround,
    AboveSeaLevel,
}

impl From<&str> for StartHeightRef {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "msl" | "abovesealevel" => StartHeightRef::AboveSeaLevel,
            _ => StartHeightRef::AboveGround,
        }
    }
}

#[derive(Debug, Display, PartialEq, Eq, Clone, Copy)]
pub enum StartRulesError {
    NegativeValue,
    NonFiniteValue,
}

/// Start sector rules: a speed and a height limit, each with a tolerance margin.
///
/// A limit of zero disables the corresponding check.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StartRules {
    radius: f64,
    max_speed: f64,
    max_speed_margin: f64,
    max_height: f64,
    max_height_margin: f64,
    height_ref: StartHeightRef,
}

impl StartRules {
    /// Creates a new set of start rules.
    ///
    /// # Arguments
    /// - `radius`: Distance to the start point (m) within which the rules are enforced.
    /// - `max_speed`, `max_speed_margin`: Speed limit and its tolerance (m/s).
    /// - `max_height`, `max_height_margin`: Height limit and its tolerance (m).
    /// - `height_ref`: Reference of the height limit.
    ///
    /// # Returns
    /// - `Err(StartRulesError)` if any value is negative or not finite.
    pub fn new(
        radius: f64,
        (max_speed, max_speed_margin): (f64, f64),
        (max_height, max_height_margin): (f64, f64),
        height_ref: StartHeightRef,
    ) -> Result<Self, StartRulesError> {
        let values = [radius, max_speed, max_speed_margin, max_height, max_height_margin];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(StartRulesError::NonFiniteValue);
        }
        if values.iter().any(|v| *v < 0.0) {
            return Err(StartRulesError::NegativeValue);
        }
        Ok(Self {
            radius,
            max_speed,
            max_speed_margin,
            max_height,
            max_height_margin,
            height_ref,
        })
    }

    pub fn radius(&self) -> f64 { self.radius }
    pub fn height_ref(&self) -> StartHeightRef { self.height_ref }

    /// Checks `speed` against the speed limit, optionally relaxed by the margin.
    pub fn speed_ok(&self, speed: f64, with_margin: bool) -> bool {
        if self.max_speed <= 0.0 {
            return true;
        }
        let margin = if with_margin { self.max_speed_margin } else { 0.0 };
        speed <= self.max_speed + margin
    }

    /// Checks `height` against the height limit, optionally relaxed by the margin.
    /// An unknown height never violates the limit.
    pub fn height_ok(&self, height: Option<f64>, with_margin: bool) -> bool {
        if self.max_height <= 0.0 {
            return true;
        }
        let Some(h) = height else {
            return true;
        };
        let margin = if with_margin { self.max_height_margin } else { 0.0 };
        h <= self.max_height + margin
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TaskPoint {
    pub location: GeoPoint,
}

impl TaskPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { location: GeoPoint::new(latitude, longitude) }
    }
}

/// Task progress as seen by the flight computer at one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskState {
    pub task_type: TaskType,
    pub points: Vec<TaskPoint>,
    /// Index of the task point currently flown towards.
    pub active: usize,
    /// Set once the route has been re-optimized by the pilot.
    pub route_optimized: bool,
    pub start_rules: StartRules,
}

impl TaskState {
    pub fn is_valid_point(&self, index: usize) -> bool { index < self.points.len() }

    pub fn active_point(&self) -> Option<&TaskPoint> { self.points.get(self.active) }

    pub fn has_active_point(&self) -> bool { self.is_valid_point(self.active) }

    pub fn has_next_point(&self) -> bool { self.is_valid_point(self.active + 1) }

    /// True while flying the first leg, i.e. towards the start with a leg following it.
    pub fn on_first_leg(&self) -> bool { self.active == 0 && self.has_active_point() && self.has_next_point() }
}
