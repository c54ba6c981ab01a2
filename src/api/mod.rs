mod axis_render_frame_builder;
mod chart_scene;
mod engine;
mod engine_config;
mod engine_init;
mod engine_period;
mod engine_pointer;
mod label_format;
mod line_series_render_frame_builder;
mod overlay;
mod overlay_render_frame_builder;
mod period;
mod pointer_resolver;
mod range_comparator;
mod render_frame_builder;
mod tick_selector;

pub use chart_scene::{AxisTick, ChartScene};
pub use engine::ChartEngine;
pub use engine_config::{ChartConfig, ChartPalette, OverlayConfig};
pub use label_format::{
    LABEL_SPACE, format_axis_value, format_time_of_day, format_timestamp, format_tooltip_value,
};
pub use overlay::{
    HighlightRegion, OverlayLabel, OverlayPositioner, OverlayRow, OverlayState, TooltipState,
};
pub use period::{
    Period, PeriodPolicy, PeriodRegistry, TickGeneration, TickMatcher, XAxisKind,
};
pub use pointer_resolver::{resolve_index, resolve_pointer, resolve_time};
pub use range_comparator::{Direction, RangeComparison};
pub use tick_selector::{TimeTick, select_time_ticks, select_value_ticks};
