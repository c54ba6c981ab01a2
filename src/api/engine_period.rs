use tracing::{debug, warn};

use crate::core::Series;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartEngine, ChartScene, Period};

impl<R: Renderer> ChartEngine<R> {
    /// Tears down the installed scene and overlay before a new series loads.
    ///
    /// Pointer events are ignored until [`ChartEngine::install_series`]
    /// succeeds, so a stale pointer never resolves against the old scales.
    pub fn begin_period_switch(&mut self, period: Period) {
        debug!(
            from = self.active_period.id(),
            to = period.id(),
            "period switch started"
        );
        self.active_period = period;
        self.scene = None;
        self.overlay = None;
        self.session.begin_loading(period);
    }

    /// Builds the scene for the active period and resumes pointer handling.
    ///
    /// On failure the engine stays in the loading phase.
    pub fn install_series(&mut self, series: Series) -> ChartResult<&ChartScene> {
        let period = self.active_period;
        let policy = self.registry.get(period)?;
        let point_count = series.len();

        let scene = match ChartScene::build(series, period, policy, self.layout) {
            Ok(scene) => scene,
            Err(err) => {
                warn!(error = %err, period = period.id(), point_count, "series install failed");
                self.scene = None;
                self.overlay = None;
                self.session.begin_loading(period);
                return Err(err);
            }
        };

        self.overlay = None;
        self.session.mark_ready();
        debug!(
            period = period.id(),
            point_count,
            x_ticks = scene.x_ticks.len(),
            y_ticks = scene.y_ticks.len(),
            generation = self.session.generation(),
            "series installed"
        );
        Ok(&*self.scene.insert(scene))
    }

    /// Period switch followed by an immediate install.
    pub fn load_period(&mut self, period: Period, series: Series) -> ChartResult<&ChartScene> {
        self.begin_period_switch(period);
        self.install_series(series)
    }
}
