use chrono::NaiveTime;
use chrono::format::{Item, StrftimeItems};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::CalendarUnit;
use crate::error::{ChartError, ChartResult};

/// Chart granularity selected by the host (one button per period).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1d")]
    Intraday,
    #[serde(rename = "5d")]
    FiveDay,
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "6m")]
    SixMonth,
}

impl Period {
    pub const ALL: [Period; 4] = [
        Period::Intraday,
        Period::FiveDay,
        Period::OneMonth,
        Period::SixMonth,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Intraday => "1d",
            Self::FiveDay => "5d",
            Self::OneMonth => "1m",
            Self::SixMonth => "6m",
        }
    }

    pub fn from_id(id: &str) -> ChartResult<Self> {
        Self::ALL
            .into_iter()
            .find(|period| period.id() == id)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown period id `{id}`")))
    }
}

/// How a tick boundary with no exact timestamp match falls back to a datum.
///
/// `SameWeekday` and `SameMonth` take the first datum in series order whose
/// weekday (resp. month of year) equals the boundary's, which can be far from
/// the boundary itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickMatcher {
    Nearest,
    SameDate,
    SameWeekday,
    SameMonth,
}

/// Where time-axis ticks come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TickGeneration {
    /// Fixed times of day on the session date, labelled by the time itself.
    TimesOfDay { times: Vec<NaiveTime> },
    /// Calendar boundaries between the first and last sample, labelled by the
    /// matched sample's timestamp.
    CalendarWalk {
        unit: CalendarUnit,
        stride: u32,
        business_days_only: bool,
        time_of_day: Option<NaiveTime>,
        matcher: TickMatcher,
    },
}

/// Horizontal axis model for a period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum XAxisKind {
    /// Equal spacing per sample. `fixed_slots` reserves room for a full
    /// session even while the series is still partial.
    Index { fixed_slots: Option<usize> },
    /// Business-day scale from the first to the last sample.
    BusinessDay,
    /// Continuous wall-clock session on the first sample's date.
    WallClock {
        session_start: NaiveTime,
        session_end: NaiveTime,
    },
}

/// Everything that varies between periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodPolicy {
    pub tick_label_format: String,
    pub tooltip_date_format: String,
    pub y_tick_gap: f64,
    pub tick_generation: TickGeneration,
    pub x_axis: XAxisKind,
}

impl PeriodPolicy {
    /// Built-in policy for a period.
    #[must_use]
    pub fn default_for(period: Period) -> Self {
        match period {
            Period::Intraday => Self {
                tick_label_format: "%H:%M".to_owned(),
                tooltip_date_format: "%H:%M".to_owned(),
                y_tick_gap: 1.0,
                tick_generation: TickGeneration::TimesOfDay {
                    times: [10, 12, 14, 16, 18, 20]
                        .into_iter()
                        .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
                        .collect(),
                },
                x_axis: XAxisKind::Index {
                    fixed_slots: Some(45),
                },
            },
            Period::FiveDay => Self {
                tick_label_format: "%d %b".to_owned(),
                tooltip_date_format: "%a, %d %b %H:%M".to_owned(),
                y_tick_gap: 3.0,
                tick_generation: TickGeneration::CalendarWalk {
                    unit: CalendarUnit::Day,
                    stride: 1,
                    business_days_only: true,
                    time_of_day: NaiveTime::from_hms_opt(9, 30, 0),
                    matcher: TickMatcher::SameDate,
                },
                x_axis: XAxisKind::Index { fixed_slots: None },
            },
            Period::OneMonth => Self {
                tick_label_format: "%d %b".to_owned(),
                tooltip_date_format: "%a, %d %b".to_owned(),
                y_tick_gap: 10.0,
                tick_generation: TickGeneration::CalendarWalk {
                    unit: CalendarUnit::Week,
                    stride: 1,
                    business_days_only: false,
                    time_of_day: None,
                    matcher: TickMatcher::SameWeekday,
                },
                x_axis: XAxisKind::Index { fixed_slots: None },
            },
            Period::SixMonth => Self {
                tick_label_format: "%b %Y".to_owned(),
                tooltip_date_format: "%a, %d %b".to_owned(),
                y_tick_gap: 20.0,
                tick_generation: TickGeneration::CalendarWalk {
                    unit: CalendarUnit::Month,
                    stride: 2,
                    business_days_only: false,
                    time_of_day: None,
                    matcher: TickMatcher::SameMonth,
                },
                x_axis: XAxisKind::Index { fixed_slots: None },
            },
        }
    }

    #[must_use]
    pub fn with_x_axis(mut self, x_axis: XAxisKind) -> Self {
        self.x_axis = x_axis;
        self
    }

    #[must_use]
    pub fn with_y_tick_gap(mut self, gap: f64) -> Self {
        self.y_tick_gap = gap;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_format(&self.tick_label_format, "tick label format")?;
        validate_format(&self.tooltip_date_format, "tooltip date format")?;

        if !self.y_tick_gap.is_finite() || self.y_tick_gap <= 0.0 {
            return Err(ChartError::InvalidData(
                "y tick gap must be finite and > 0".to_owned(),
            ));
        }

        match &self.tick_generation {
            TickGeneration::TimesOfDay { times } if times.is_empty() => {
                return Err(ChartError::InvalidData(
                    "times-of-day tick generation needs at least one time".to_owned(),
                ));
            }
            TickGeneration::CalendarWalk { stride: 0, .. } => {
                return Err(ChartError::InvalidData(
                    "calendar walk stride must be > 0".to_owned(),
                ));
            }
            _ => {}
        }

        match self.x_axis {
            XAxisKind::Index {
                fixed_slots: Some(slots),
            } if slots < 2 => Err(ChartError::InvalidData(
                "fixed index axis needs at least two slots".to_owned(),
            )),
            XAxisKind::WallClock {
                session_start,
                session_end,
            } if session_start >= session_end => Err(ChartError::InvalidDomain(
                "session start must precede session end".to_owned(),
            )),
            _ => Ok(()),
        }
    }
}

fn validate_format(pattern: &str, what: &str) -> ChartResult<()> {
    if pattern.is_empty() {
        return Err(ChartError::InvalidData(format!("{what} must not be empty")));
    }
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ChartError::InvalidData(format!(
            "{what} `{pattern}` is not a valid strftime pattern"
        )));
    }
    Ok(())
}

/// Policies keyed by period, in button order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRegistry {
    policies: IndexMap<Period, PeriodPolicy>,
}

impl Default for PeriodRegistry {
    fn default() -> Self {
        Self {
            policies: Period::ALL
                .into_iter()
                .map(|period| (period, PeriodPolicy::default_for(period)))
                .collect(),
        }
    }
}

impl PeriodRegistry {
    pub fn get(&self, period: Period) -> ChartResult<&PeriodPolicy> {
        self.policies.get(&period).ok_or_else(|| {
            ChartError::InvalidData(format!("no policy registered for period `{}`", period.id()))
        })
    }

    /// Validates and stores a policy, returning the one it replaced.
    pub fn insert(&mut self, period: Period, policy: PeriodPolicy) -> ChartResult<Option<PeriodPolicy>> {
        policy.validate()?;
        Ok(self.policies.insert(period, policy))
    }

    pub fn periods(&self) -> impl Iterator<Item = Period> + '_ {
        self.policies.keys().copied()
    }
}
