use crate::core::SurfaceLayout;
use crate::error::ChartResult;
use crate::interaction::InteractionSession;
use crate::render::Renderer;

use super::{ChartConfig, ChartScene, OverlayState, Period, PeriodRegistry};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the installed scene, the pointer session and the
/// current overlay, and hands a fully built `RenderFrame` to the renderer.
/// Pointer coordinates are plot-relative pixels.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartConfig,
    pub(super) layout: SurfaceLayout,
    pub(super) registry: PeriodRegistry,
    pub(super) active_period: Period,
    pub(super) scene: Option<ChartScene>,
    pub(super) session: InteractionSession,
    pub(super) overlay: Option<OverlayState>,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> SurfaceLayout {
        self.layout
    }

    #[must_use]
    pub fn registry(&self) -> &PeriodRegistry {
        &self.registry
    }

    #[must_use]
    pub fn active_period(&self) -> Period {
        self.active_period
    }

    /// Installed scene, `None` while a period switch is in flight.
    #[must_use]
    pub fn scene(&self) -> Option<&ChartScene> {
        self.scene.as_ref()
    }

    #[must_use]
    pub fn session(&self) -> InteractionSession {
        self.session
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.session.is_ready() && self.scene.is_some()
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&OverlayState> {
        self.overlay.as_ref()
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
