//! Page backwards and forwards through zoomed images
//!
//! Page commands scroll the current image by most of a screenful and move
//! on to the neighbouring image once the end is reached, landing at the
//! matching end of that image. Fit-page-min mode keeps new images fitted to
//! the view's width while paging.

use super::{detailed_name, ActionRegistration, PluginInfo, WindowPlugin};
use crate::domain::accels::{install_shadowing, remove_shadowing, Bindings, SavedAccels};
use crate::domain::pager::{
    fit_zoom, PageDimension, PageDirection, PageStep, Pager, PAGE_SCROLL_FRACTION, ZoomMode,
};
use crate::domain::widget::{find_scrollbars, Scrollbars, WidgetId};
use crate::error::{EogtricksError, Result};
use crate::host::{ScrollView, WindowHost};
use crate::infrastructure::Config;

pub const FIT_PAGE_MIN_ACTION_NAME: &str = "zoom-fit-page-min";
pub const PAGE_FORWARD_ACTION_NAME: &str = "page-forward";
pub const PAGE_BACKWARD_ACTION_NAME: &str = "page-backward";

const ACTIONS: [(&str, &[&str]); 3] = [
    (FIT_PAGE_MIN_ACTION_NAME, &["w", "x", "h"]),
    (PAGE_BACKWARD_ACTION_NAME, &["Prior", "b", "BackSpace"]),
    (PAGE_FORWARD_ACTION_NAME, &["Next", "space", "Return"]),
];

#[derive(Debug, Clone, Copy)]
pub struct PagerPlugin {
    scroll_fraction: f64,
}

impl Default for PagerPlugin {
    fn default() -> Self {
        PagerPlugin::new(PAGE_SCROLL_FRACTION)
    }
}

impl PagerPlugin {
    /// `scroll_fraction` is the part of a page moved by one page command.
    pub fn new(scroll_fraction: f64) -> Self {
        PagerPlugin { scroll_fraction }
    }

    /// Pager using the configured `page_scroll_fraction`
    pub fn from_config(config: &Config) -> Self {
        PagerPlugin::new(config.page_scroll_fraction)
    }

    pub fn scroll_fraction(&self) -> f64 {
        self.scroll_fraction
    }

    pub fn overlay() -> Bindings {
        ACTIONS
            .iter()
            .map(|(name, keys)| {
                (
                    detailed_name(name),
                    keys.iter().map(|k| k.to_string()).collect(),
                )
            })
            .collect()
    }
}

impl WindowPlugin for PagerPlugin {
    type Activation = PagerActivation;

    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: "pager",
            description: format!(
                "Page through zoomed images, {}% of a screenful at a time",
                (self.scroll_fraction * 100.0).round()
            ),
            bindings: Self::overlay(),
        }
    }

    fn activate(&self, window: &mut dyn WindowHost) -> Result<PagerActivation> {
        tracing::debug!("Activating...");

        let actions: Vec<(&str, &[&str])> =
            ACTIONS.iter().map(|(name, _)| (*name, &[][..])).collect();
        let registration = ActionRegistration::register(window, &actions);
        let saved = install_shadowing(window.application(), &Self::overlay());

        Ok(PagerActivation {
            registration,
            saved,
            scrollbars: None,
            pending_refit: None,
            pager: Pager::new(self.scroll_fraction),
        })
    }

    fn deactivate(&self, window: &mut dyn WindowHost, activation: PagerActivation) {
        tracing::debug!("Deactivating...");
        remove_shadowing(window.application(), &Self::overlay(), activation.saved);
        activation.registration.unregister(window);
    }
}

/// Live state of the pager in one window
#[derive(Debug, Clone)]
pub struct PagerActivation {
    registration: ActionRegistration,
    saved: SavedAccels,
    scrollbars: Option<Scrollbars>,
    pending_refit: Option<PageDimension>,
    pager: Pager,
}

impl PagerActivation {
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Bindings taken away from other actions while the pager is active
    pub fn saved(&self) -> &SavedAccels {
        &self.saved
    }

    /// Dispatch one of the pager's actions.
    pub fn handle_action(
        &mut self,
        action: &str,
        window: &mut dyn WindowHost,
        view: &mut dyn ScrollView,
    ) -> Result<()> {
        match action {
            FIT_PAGE_MIN_ACTION_NAME => self.fit_to_width(view, 0.0),
            PAGE_FORWARD_ACTION_NAME => self.page(PageDirection::Forward, window, view),
            PAGE_BACKWARD_ACTION_NAME => self.page(PageDirection::Backward, window, view),
            other => Err(EogtricksError::MissingAction(other.to_string())),
        }
    }

    /// Fit the image to the view's width, centre it horizontally, scroll to
    /// `v` vertically and keep fitting new images while paging.
    pub fn fit_to_width(&mut self, view: &mut dyn ScrollView, v: f64) -> Result<()> {
        let bars = self.scrollbars(view)?;
        scroll_to(view, bars.horizontal, 0.5);
        self.fit_dimension(view, bars, PageDimension::Width);
        scroll_to(view, bars.vertical, v);
        self.pager.enable_fit_page_min();
        Ok(())
    }

    fn page(
        &mut self,
        direction: PageDirection,
        window: &mut dyn WindowHost,
        view: &mut dyn ScrollView,
    ) -> Result<()> {
        // The vertical scrollbar's visibility stands in for "is the image
        // taller than the view".
        let bars = self.scrollbars(view)?;
        let visible = view.scrollbars_visible() && view.widget_visible(bars.vertical);
        let mut range = view.scroll_range(bars.vertical);

        match self
            .pager
            .page(direction, view.zoom_mode(), visible, range.fraction())
        {
            PageStep::Scroll(pages) => {
                range.scroll_by_pages(pages);
                view.set_scroll_value(bars.vertical, range.value);
            }
            PageStep::Neighbour { direction, .. } => {
                window.activate_action(direction.neighbour_action());
            }
        }
        Ok(())
    }

    /// The view switched to another image.
    pub fn image_changed(&mut self, view: &mut dyn ScrollView) -> Result<()> {
        let change = self.pager.image_changed();
        if !change.refit_width && change.scroll_to.is_none() {
            return Ok(());
        }

        let bars = self.scrollbars(view)?;
        if change.refit_width {
            tracing::debug!("fitting new image to width");
            self.fit_dimension(view, bars, PageDimension::Width);
        }
        if let Some(frac) = change.scroll_to {
            tracing::debug!(frac, "scrolling new image");
            scroll_to(view, bars.vertical, frac);
        }
        Ok(())
    }

    /// The view's zoom mode changed.
    pub fn zoom_mode_changed(&mut self, view: &dyn ScrollView) {
        self.pager.zoom_mode_changed(view.zoom_mode());
    }

    /// Whether a fit is waiting for the layout to settle
    pub fn refit_pending(&self) -> bool {
        self.pending_refit.is_some()
    }

    /// Redo a fit once newly shown scrollbars have taken their space.
    pub fn layout_settled(&mut self, view: &mut dyn ScrollView) -> Result<()> {
        let Some(dim) = self.pending_refit.take() else {
            return Ok(());
        };
        tracing::debug!("compensating for scroll bars...");
        let bars = self.scrollbars(view)?;
        apply_fit(view, bars, dim);
        Ok(())
    }

    fn fit_dimension(
        &mut self,
        view: &mut dyn ScrollView,
        bars: Scrollbars,
        dim: PageDimension,
    ) {
        if apply_fit(view, bars, dim) {
            self.pending_refit = Some(dim);
        }
    }

    fn scrollbars(&mut self, view: &dyn ScrollView) -> Result<Scrollbars> {
        if let Some(bars) = self.scrollbars {
            return Ok(bars);
        }
        let bars = find_scrollbars(view.root())?;
        self.scrollbars = Some(bars);
        Ok(bars)
    }
}

/// Set the zoom so the image fills the view along `dim`. Returns whether
/// the fit should be redone after layout.
fn apply_fit(view: &mut dyn ScrollView, bars: Scrollbars, dim: PageDimension) -> bool {
    let Some(image) = view.image_size() else {
        return false;
    };
    let thickness = match dim {
        PageDimension::Width => view.widget_size(bars.vertical).width,
        PageDimension::Height => view.widget_size(bars.horizontal).height,
    };
    let Some(fit) = fit_zoom(dim, view.allocated_size(), thickness, image) else {
        return false;
    };

    if view.zoom_mode() != ZoomMode::Free {
        view.set_zoom_mode(ZoomMode::Free);
    }
    view.set_zoom(fit.zoom);
    fit.needs_compensation
}

fn scroll_to(view: &mut dyn ScrollView, id: WidgetId, frac: f64) {
    let mut range = view.scroll_range(id);
    range.scroll_to(frac);
    view.set_scroll_value(id, range.value);
}
