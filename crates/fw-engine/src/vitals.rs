//! Health and awakeness.
//!
//! Health regenerates with elapsed time and is always kept within
//! `0..=max`, rounded to one decimal place. Awakeness counts down during
//! late-night moves; the session puts the player to sleep when it runs out.

/// Player health in `0..=max`, one decimal place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Health {
    current: f64,
    max: f64,
}

impl Health {
    /// Create with a starting value, clamped and rounded.
    pub fn new(current: f64, max: f64) -> Self {
        let max = max.max(0.0);
        Self {
            current: normalize(current, max),
            max,
        }
    }

    /// Regain `hours * rate_per_hour`. Returns the new value.
    pub fn regenerate(&mut self, hours: f64, rate_per_hour: f64) -> f64 {
        self.current = normalize(self.current + hours * rate_per_hour, self.max);
        self.current
    }

    /// Current health.
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Health ceiling.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Health as a percentage of the maximum.
    pub fn percentage(&self) -> f64 {
        if self.max <= 0.0 {
            0.0
        } else {
            self.current / self.max * 100.0
        }
    }

    /// Whole-number health for status displays (truncated).
    pub fn whole(&self) -> i64 {
        self.current.trunc() as i64
    }

    /// The descriptive band for the current percentage.
    pub fn band(&self) -> HealthBand {
        HealthBand::from_percentage(self.percentage())
    }
}

fn normalize(value: f64, max: f64) -> f64 {
    let clamped = value.clamp(0.0, max);
    (clamped * 10.0).round() / 10.0
}

/// Ten descriptive health bands, each ten percentage points wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthBand {
    /// 90% and above.
    Perfect,
    /// 80–90%.
    VeryLightlyWounded,
    /// 70–80%.
    LightWounds,
    /// 60–70%.
    FairlyHealthy,
    /// 50–60%.
    ModeratelyHealthy,
    /// 40–50%.
    QuiteWounded,
    /// 30–40%.
    SevereWound,
    /// 20–30%.
    SeveralSevereWounds,
    /// 10–20%.
    LifeThreatening,
    /// Below 10%.
    DeathsDoor,
}

impl HealthBand {
    /// Classify a percentage of maximum health.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::Perfect
        } else if percentage >= 80.0 {
            Self::VeryLightlyWounded
        } else if percentage >= 70.0 {
            Self::LightWounds
        } else if percentage >= 60.0 {
            Self::FairlyHealthy
        } else if percentage >= 50.0 {
            Self::ModeratelyHealthy
        } else if percentage >= 40.0 {
            Self::QuiteWounded
        } else if percentage >= 30.0 {
            Self::SevereWound
        } else if percentage >= 20.0 {
            Self::SeveralSevereWounds
        } else if percentage >= 10.0 {
            Self::LifeThreatening
        } else {
            Self::DeathsDoor
        }
    }

    /// What `diagnose` reports for this band.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Perfect => "You are in perfect health.",
            Self::VeryLightlyWounded => "You are very lightly wounded.",
            Self::LightWounds => "You have light wounds.",
            Self::FairlyHealthy => "You are fairly healthy.",
            Self::ModeratelyHealthy => "You are moderately healthy.",
            Self::QuiteWounded => "You are quite wounded.",
            Self::SevereWound => "You have a severe wound.",
            Self::SeveralSevereWounds => "You have several severe wounds.",
            Self::LifeThreatening => "You have life-threatening injuries.",
            Self::DeathsDoor => "You are basically at death's door.",
        }
    }
}

/// Countdown of how long the player can stay up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Awakeness {
    value: u32,
    max: u32,
}

impl Awakeness {
    /// Fully rested.
    pub fn new(max: u32) -> Self {
        Self { value: max, max }
    }

    /// Remaining awakeness.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Full value.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Whether the player is fully rested.
    pub fn is_full(&self) -> bool {
        self.value >= self.max
    }

    /// Whether awakeness has run out.
    pub fn is_exhausted(&self) -> bool {
        self.value == 0
    }

    /// Lose one point, never going below zero. Returns the new value.
    pub fn decrement(&mut self) -> u32 {
        self.value = self.value.saturating_sub(1);
        self.value
    }

    /// Back to fully rested.
    pub fn reset(&mut self) {
        self.value = self.max;
    }
}
