//! Popover — a single overlay panel anchored next to its trigger link.

use serde::Serialize;

use crate::geometry::{Rect, Viewport};

/// Approximate rendered panel size, padding included.
pub const PANEL_WIDTH: f64 = 230.0;
pub const PANEL_HEIGHT: f64 = 260.0;
/// Minimum distance kept between the panel and the viewport edges.
pub const EDGE_MARGIN: f64 = 20.0;
/// Gap between the trigger and the panel.
pub const ANCHOR_GAP: f64 = 10.0;
/// How far above the trigger's top the panel starts when placed beside it.
pub const LIFT: f64 = 50.0;

/// Which side of the trigger the panel ended up on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Right,
    Left,
    Below,
}

/// Panel position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    pub side: Side,
}

/// Place the panel to the right of `anchor`, else to its left, else below
/// it, then clamp into the viewport with [`EDGE_MARGIN`].
#[must_use]
pub fn place(anchor: Rect, viewport: Viewport) -> Placement {
    let mut side = Side::Right;
    let mut left = anchor.right + ANCHOR_GAP;
    let mut top = anchor.top - LIFT;

    if left + PANEL_WIDTH > viewport.width - EDGE_MARGIN {
        side = Side::Left;
        left = anchor.left - PANEL_WIDTH - ANCHOR_GAP;
    }
    if left < EDGE_MARGIN {
        side = Side::Below;
        left = anchor.left;
        top = anchor.bottom + ANCHOR_GAP;
        if left + PANEL_WIDTH > viewport.width - EDGE_MARGIN {
            left = (viewport.width - PANEL_WIDTH - EDGE_MARGIN).max(EDGE_MARGIN);
        }
    }

    if top < EDGE_MARGIN {
        top = EDGE_MARGIN;
    }
    if top + PANEL_HEIGHT > viewport.height - EDGE_MARGIN {
        top = viewport.height - PANEL_HEIGHT - EDGE_MARGIN;
    }

    Placement { left, top, side }
}

/// Inputs that drive the popover.
#[derive(Debug, Clone, PartialEq)]
pub enum PopoverEvent {
    TriggerClicked { anchor: Rect, viewport: Viewport },
    CloseClicked,
    BackdropClicked,
    KeyPressed(String),
    Resized { anchor: Rect, viewport: Viewport },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PopoverState {
    #[default]
    Hidden,
    Visible(Placement),
}

impl PopoverState {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible(_))
    }

    /// Apply one event and return the next state.
    #[must_use]
    pub fn handle(self, event: &PopoverEvent) -> Self {
        match (self, event) {
            (_, PopoverEvent::TriggerClicked { anchor, viewport }) => {
                Self::Visible(place(*anchor, *viewport))
            }
            (Self::Visible(_), PopoverEvent::Resized { anchor, viewport }) => {
                Self::Visible(place(*anchor, *viewport))
            }
            (Self::Visible(_), PopoverEvent::CloseClicked | PopoverEvent::BackdropClicked) => {
                Self::Hidden
            }
            (Self::Visible(_), PopoverEvent::KeyPressed(key)) if key == "Escape" => Self::Hidden,
            (state, _) => state,
        }
    }
}
