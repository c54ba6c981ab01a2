use serde::Serialize;

use crate::core::{
    BusinessDayScale, LineGeometry, LinearScale, Scale, Series, SurfaceLayout, TimeScale, XScale,
    project_line_geometry,
};
use crate::error::ChartResult;

use super::label_format::format_axis_value;
use super::period::{Period, PeriodPolicy, XAxisKind};
use super::tick_selector::{select_time_ticks, select_value_ticks};

/// Room kept free at the right edge of an index axis so the last sample's
/// stroke is not clipped.
const INDEX_AXIS_RIGHT_INSET_PX: f64 = 2.0;
/// Target tick count used when rounding the value domain.
const VALUE_AXIS_NICE_COUNT: usize = 10;

/// Labelled axis position in plot pixels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// Everything derived from one installed series: scales, ticks and geometry.
///
/// Built in one pass by [`ChartScene::build`] for any period; nothing in the
/// scene is mutated afterwards. A new period means a new scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartScene {
    pub period: Period,
    pub policy: PeriodPolicy,
    pub layout: SurfaceLayout,
    pub series: Series,
    pub x_scale: XScale,
    pub y_scale: LinearScale,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub geometry: LineGeometry,
}

impl ChartScene {
    pub fn build(
        series: Series,
        period: Period,
        policy: &PeriodPolicy,
        layout: SurfaceLayout,
    ) -> ChartResult<Self> {
        policy.validate()?;

        let x_scale = build_x_scale(&series, policy.x_axis, layout)?;

        let mut value_ticks = select_value_ticks(&series, policy)?;
        if value_ticks.len() == 1 {
            // Flat series sitting exactly on a gap multiple.
            value_ticks.push(value_ticks[0] + policy.y_tick_gap);
        }
        let mut y_scale = LinearScale::with_range(
            value_ticks[0],
            value_ticks[value_ticks.len() - 1],
            layout.plot_height(),
            layout.margins.top,
        )?;
        y_scale.nice(VALUE_AXIS_NICE_COUNT);

        let x_ticks = select_time_ticks(&series, policy)
            .into_iter()
            .filter_map(|tick| {
                let position = match (&x_scale, series.get(tick.index)) {
                    (_, Some(point)) => x_scale.position_of(point),
                    // Reserved slot past the last sample.
                    (XScale::Index(scale), None) => scale.scale(tick.index as f64),
                    (_, None) => return None,
                };
                Some(position.map(|position| AxisTick {
                    position,
                    label: tick.label,
                }))
            })
            .collect::<ChartResult<Vec<_>>>()?;

        let y_ticks = value_ticks
            .iter()
            .map(|value| {
                Ok(AxisTick {
                    position: y_scale.scale(*value)?,
                    label: format_axis_value(*value, policy.y_tick_gap),
                })
            })
            .collect::<ChartResult<Vec<_>>>()?;

        let geometry = project_line_geometry(&series, &x_scale, &y_scale, layout.plot_height())?;

        Ok(Self {
            period,
            policy: policy.clone(),
            layout,
            series,
            x_scale,
            y_scale,
            x_ticks,
            y_ticks,
            geometry,
        })
    }
}

fn build_x_scale(series: &Series, kind: XAxisKind, layout: SurfaceLayout) -> ChartResult<XScale> {
    let width = layout.plot_width();
    match kind {
        XAxisKind::Index { fixed_slots } => {
            let max_index = fixed_slots
                .map_or(series.last_index(), |slots| slots.saturating_sub(1))
                .max(1);
            let scale = LinearScale::with_range(
                0.0,
                max_index as f64,
                0.0,
                width - INDEX_AXIS_RIGHT_INSET_PX,
            )?;
            Ok(XScale::Index(scale))
        }
        XAxisKind::BusinessDay => {
            let (start, end) = series.time_bounds();
            let mut scale = BusinessDayScale::new(start, end)?;
            scale.set_range(0.0, width)?;
            Ok(XScale::BusinessDay(scale))
        }
        XAxisKind::WallClock {
            session_start,
            session_end,
        } => {
            let session_date = series.first().timestamp.date();
            let mut scale = TimeScale::new(
                session_date.and_time(session_start),
                session_date.and_time(session_end),
            )?;
            scale.set_range(0.0, width)?;
            Ok(XScale::WallClock(scale))
        }
    }
}
