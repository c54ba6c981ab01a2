use tracing::debug;

use crate::error::ChartResult;
use crate::interaction::InteractionSession;
use crate::render::Renderer;

use super::{ChartConfig, ChartEngine, Period, PeriodPolicy, PeriodRegistry};

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine waiting for the initial period's series.
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        let layout = config.validate()?;
        let active_period = config.initial_period;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            period = active_period.id(),
            "chart engine created"
        );

        Ok(Self {
            renderer,
            layout,
            registry: PeriodRegistry::default(),
            active_period,
            scene: None,
            session: InteractionSession::new(active_period),
            overlay: None,
            config,
        })
    }

    /// Replaces every period policy before the first series is installed.
    #[must_use]
    pub fn with_registry(mut self, registry: PeriodRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Overrides one period's policy.
    ///
    /// When that period is on screen the scene is rebuilt from the installed
    /// series so ticks and scales reflect the new policy immediately.
    pub fn set_period_policy(
        &mut self,
        period: Period,
        policy: PeriodPolicy,
    ) -> ChartResult<()> {
        self.registry.insert(period, policy)?;
        let Some(scene) = self.scene.as_ref() else {
            return Ok(());
        };
        if scene.period != period {
            return Ok(());
        }

        let series = scene.series.clone();
        self.install_series(series)?;
        Ok(())
    }
}
