//! Page-style navigation arithmetic
//!
//! Scroll positions are handled as fractions of a scrollbar's travel, where
//! 0.0 is the top (or left) and 1.0 the bottom (or right).

/// Fraction of a page moved by one page command
pub const PAGE_SCROLL_FRACTION: f64 = 0.9;

/// Which image dimension to fit to the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDimension {
    Width,
    Height,
}

/// Direction of a page command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Forward,
    Backward,
}

impl PageDirection {
    pub fn sign(self) -> f64 {
        match self {
            PageDirection::Forward => 1.0,
            PageDirection::Backward => -1.0,
        }
    }

    /// Whether a scroll fraction still leaves room to move in this direction
    pub fn within_limit(self, fraction: f64) -> bool {
        match self {
            PageDirection::Forward => fraction < 0.99,
            PageDirection::Backward => fraction > 0.01,
        }
    }

    /// Host action that shows the neighbouring image
    pub fn neighbour_action(self) -> &'static str {
        match self {
            PageDirection::Forward => "go-next",
            PageDirection::Backward => "go-previous",
        }
    }

    /// Where to put a freshly shown image after paging off the previous one
    pub fn landing_fraction(self) -> f64 {
        match self {
            PageDirection::Forward => 0.0,
            PageDirection::Backward => 1.0,
        }
    }
}

/// Host zoom mode, reduced to what paging cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomMode {
    /// User-controlled zoom; the image may be larger than the view
    Free,
    /// Any of the host's fitting modes
    Fitted,
}

/// A width/height pair in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }

    fn along(&self, dim: PageDimension) -> f64 {
        match dim {
            PageDimension::Width => self.width,
            PageDimension::Height => self.height,
        }
    }

    fn across(&self, dim: PageDimension) -> f64 {
        match dim {
            PageDimension::Width => self.height,
            PageDimension::Height => self.width,
        }
    }
}

/// The adjustment behind a scrollbar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub value: f64,
    pub lower: f64,
    pub upper: f64,
    pub page_size: f64,
}

impl ScrollRange {
    pub fn new(value: f64, lower: f64, upper: f64, page_size: f64) -> Self {
        ScrollRange {
            value,
            lower,
            upper,
            page_size,
        }
    }

    /// Highest value the adjustment can take
    pub fn top(&self) -> f64 {
        self.upper - self.page_size
    }

    /// Current position as a fraction of the scrollable travel.
    ///
    /// `None` when the range has not been laid out yet, or when the whole
    /// image fits in one page.
    pub fn fraction(&self) -> Option<f64> {
        if self.upper <= self.lower {
            tracing::debug!("frac=None (weird initial state)");
            return None;
        }

        let at_end = self.value + self.page_size >= self.upper;
        let at_start = self.value <= self.lower;
        if at_end && at_start {
            tracing::debug!("frac=None (image <= screen)");
            return None;
        }

        let frac = (self.value - self.lower) / (self.top() - self.lower);
        Some(clamp_fraction(frac))
    }

    /// Move to a fraction of the travel, clamped to `[0, 1]`.
    pub fn scroll_to(&mut self, fraction: f64) {
        let fraction = clamp_fraction(fraction);
        self.value = self.lower + fraction * (self.top() - self.lower);
    }

    /// Move by `pages` page sizes (negative moves back), staying inside
    /// the range. Returns the new fraction.
    pub fn scroll_by_pages(&mut self, pages: f64) -> f64 {
        let bottom = self.lower;
        let top = self.top();
        self.value = (self.value + pages * self.page_size).max(bottom).min(top);
        if top <= bottom {
            return 0.0;
        }
        clamp_fraction((self.value - bottom) / (top - bottom))
    }
}

fn clamp_fraction(frac: f64) -> f64 {
    if frac.is_nan() {
        return 0.0;
    }
    frac.clamp(0.0, 1.0)
}

/// Result of fitting an image dimension to the view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitZoom {
    pub zoom: f64,
    /// The other dimension overflows, so a scrollbar will appear and the
    /// fit should be redone once the layout settles.
    pub needs_compensation: bool,
}

/// Zoom that makes `image` fill `view` along `dim`, leaving room for the
/// scrollbar that runs along the other edge.
///
/// `None` for an empty image.
pub fn fit_zoom(
    dim: PageDimension,
    view: Size,
    scrollbar_thickness: f64,
    image: Size,
) -> Option<FitZoom> {
    let image_size = image.along(dim);
    if image_size <= 0.0 {
        return None;
    }
    let zoom = (view.along(dim) - scrollbar_thickness) / image_size;
    Some(FitZoom {
        zoom,
        needs_compensation: image.across(dim) > image_size,
    })
}

/// What a page command should do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageStep {
    /// Scroll within the current image by this many (signed) pages
    Scroll(f64),
    /// Show the neighbouring image
    Neighbour {
        direction: PageDirection,
        /// Land on the matching end of the new image
        land_at_end: bool,
    },
}

/// Decide how to carry out a page command.
pub fn decide_page(
    direction: PageDirection,
    zoom_mode: ZoomMode,
    scrollbar_visible: bool,
    fraction: Option<f64>,
    scroll_fraction: f64,
) -> PageStep {
    if zoom_mode != ZoomMode::Free {
        return PageStep::Neighbour {
            direction,
            land_at_end: false,
        };
    }

    match fraction {
        Some(frac) if scrollbar_visible && direction.within_limit(frac) => {
            PageStep::Scroll(direction.sign() * scroll_fraction)
        }
        _ => PageStep::Neighbour {
            direction,
            land_at_end: true,
        },
    }
}

/// What to do once the host has switched to a new image
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImageChange {
    pub refit_width: bool,
    pub scroll_to: Option<f64>,
}

/// Paging state carried between host notifications
#[derive(Debug, Clone, PartialEq)]
pub struct Pager {
    just_paged: Option<PageDirection>,
    fit_page_min: bool,
    scroll_fraction: f64,
}

impl Default for Pager {
    fn default() -> Self {
        Pager::new(PAGE_SCROLL_FRACTION)
    }
}

impl Pager {
    pub fn new(scroll_fraction: f64) -> Self {
        Pager {
            just_paged: None,
            fit_page_min: false,
            scroll_fraction,
        }
    }

    pub fn fit_page_min(&self) -> bool {
        self.fit_page_min
    }

    pub fn just_paged(&self) -> Option<PageDirection> {
        self.just_paged
    }

    /// The user asked for fit-to-width paging
    pub fn enable_fit_page_min(&mut self) {
        self.fit_page_min = true;
        tracing::debug!("fit-page-min → ON");
    }

    /// Handle a page command and remember where it should land.
    pub fn page(
        &mut self,
        direction: PageDirection,
        zoom_mode: ZoomMode,
        scrollbar_visible: bool,
        fraction: Option<f64>,
    ) -> PageStep {
        let step = decide_page(
            direction,
            zoom_mode,
            scrollbar_visible,
            fraction,
            self.scroll_fraction,
        );
        match step {
            PageStep::Scroll(pages) => {
                tracing::debug!(?direction, pages, "scroll within the current image");
            }
            PageStep::Neighbour {
                direction,
                land_at_end,
            } => {
                tracing::debug!(?direction, land_at_end, "{}", direction.neighbour_action());
                self.just_paged = land_at_end.then_some(direction);
            }
        }
        step
    }

    /// The host is now showing a different image.
    pub fn image_changed(&mut self) -> ImageChange {
        let change = match self.just_paged.take() {
            Some(direction) => ImageChange {
                refit_width: self.fit_page_min,
                scroll_to: Some(direction.landing_fraction()),
            },
            None => ImageChange::default(),
        };
        tracing::debug!(?change, "image changed");
        change
    }

    /// The host's zoom mode changed. Leaving free zoom by hand turns
    /// fit-page-min off.
    pub fn zoom_mode_changed(&mut self, mode: ZoomMode) {
        if self.just_paged.is_none() && self.fit_page_min && mode != ZoomMode::Free {
            tracing::debug!("fit-page-min → off");
            self.fit_page_min = false;
        }
    }
}
