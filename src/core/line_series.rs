#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, LinearScale, Scale, Series, XScale};
use crate::error::ChartResult;

/// Vertex in plot pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

/// Line path plus the gradient-filled area underneath it.
///
/// `fill_polygon` is explicitly closed against `baseline_y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineGeometry {
    pub line_points: Vec<Vertex>,
    pub fill_polygon: Vec<Vertex>,
    pub baseline_y: f64,
}

/// Projects a series into line and area geometry.
pub fn project_line_geometry(
    series: &Series,
    x_scale: &XScale,
    y_scale: &LinearScale,
    baseline_y: f64,
) -> ChartResult<LineGeometry> {
    let line_points = project_points(series.points(), x_scale, y_scale)?;

    let first_x = line_points[0].x;
    let last_x = line_points[line_points.len() - 1].x;
    let mut fill_polygon = Vec::with_capacity(line_points.len() + 3);
    fill_polygon.push(Vertex {
        x: first_x,
        y: baseline_y,
    });
    fill_polygon.extend(line_points.iter().copied());
    fill_polygon.push(Vertex {
        x: last_x,
        y: baseline_y,
    });
    fill_polygon.push(Vertex {
        x: first_x,
        y: baseline_y,
    });

    Ok(LineGeometry {
        line_points,
        fill_polygon,
        baseline_y,
    })
}

fn project_points(
    points: &[DataPoint],
    x_scale: &XScale,
    y_scale: &LinearScale,
) -> ChartResult<Vec<Vertex>> {
    let project = |point: &DataPoint| -> ChartResult<Vertex> {
        Ok(Vertex {
            x: x_scale.position_of(point)?,
            y: y_scale.scale(point.value)?,
        })
    };

    #[cfg(feature = "parallel-projection")]
    {
        points.par_iter().map(project).collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        points.iter().map(project).collect()
    }
}
