pub mod business_day;
pub mod line_series;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod ticks;
pub mod time_scale;
pub mod types;
pub mod x_scale;

pub use business_day::{BusinessDayScale, add_business_days, count_business_days, is_business_day};
pub use line_series::{LineGeometry, Vertex, project_line_geometry};
pub use scale::{LinearScale, Scale};
pub use series::{DataPoint, Series};
pub use ticks::{CalendarUnit, MAX_VALUE_TICKS, generate_ticks_y, walk_calendar_boundaries};
pub use time_scale::TimeScale;
pub use types::{Margins, SurfaceLayout, Viewport};
pub use x_scale::XScale;
