// src/pricing.rs
//
// Commitment tiers and the discount schedule:
//   12 weeks → 0%, 24 weeks → 10%, 52 weeks → 20%.
// Per-week prices round half-up to whole currency units; the total is
// the rounded per-week price times the week count (so the displayed
// numbers always multiply out exactly).

use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Duration {
    #[default]
    W12,
    W24,
    W52,
}

impl Duration {
    pub const ALL: [Duration; 3] = [Duration::W12, Duration::W24, Duration::W52];

    pub fn weeks(self) -> u32 {
        match self {
            Duration::W12 => 12,
            Duration::W24 => 24,
            Duration::W52 => 52,
        }
    }

    pub fn discount_percent(self) -> u32 {
        match self {
            Duration::W12 => 0,
            Duration::W24 => 10,
            Duration::W52 => 20,
        }
    }

    pub fn from_weeks(weeks: u32) -> Result<Self, Box<dyn Error>> {
        match weeks {
            12 => Ok(Duration::W12),
            24 => Ok(Duration::W24),
            52 => Ok(Duration::W52),
            other => Err(format!("Unsupported duration: {other} weeks (expected 12, 24 or 52)").into()),
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.weeks())
    }
}

impl FromStr for Duration {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let weeks: u32 = s
            .trim()
            .parse()
            .map_err(|_| format!("Not a duration: {s:?}"))?;
        Duration::from_weeks(weeks)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quote {
    pub per_week: u64,
    pub total: u64,
    pub discount_percent: u32,
}

/// Price a plan at one commitment tier.
/// `base_per_week` is the undiscounted weekly price as parsed from the
/// plans table; it must be a finite, nonnegative number — anything else
/// is a caller bug and comes back as an error rather than a wrong figure.
pub fn quote(base_per_week: f64, duration: Duration) -> Result<Quote, Box<dyn Error>> {
    if !base_per_week.is_finite() || base_per_week < 0.0 {
        return Err(format!("Invalid base price: {base_per_week}").into());
    }

    let pct = duration.discount_percent();
    let discounted = base_per_week * f64::from(100 - pct) / 100.0;
    // Round half-up: 740.5 → 741.
    let per_week = (discounted + 0.5).floor() as u64;

    // A base large enough to saturate the cast above also lands here.
    let total = per_week
        .checked_mul(u64::from(duration.weeks()))
        .ok_or_else(|| format!("Base price out of range: {base_per_week}"))?;

    Ok(Quote { per_week, total, discount_percent: pct })
}
