// SPDX-License-Identifier: MPL-2.0
//! Presentation methods and what they imply for scheduling.
//!
//! A [`Method`] is what callers pick ("show this as a banner"); the engine
//! only ever looks at the two properties derived from it, [`Priority`] for
//! admission and [`Position`] for the view layer's grouping.

/// Admission priority, derived from a [`Method`].
///
/// Higher ranks are admitted more aggressively. Priority only decides the
/// initial placement of an item; promotion from the pending queue is FIFO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Priority {
    /// Appended to the back of the pending queue; reaches the active set
    /// only through FIFO promotion.
    Low = 0,
    /// Appended to the active set when there is room, else to the queue.
    #[default]
    Normal = 1,
    /// Jumps to the front of whichever sequence accepts it.
    High = 2,
    /// Clears the pending queue and is shown at once.
    Immediate = 3,
}

impl Priority {
    /// Returns the numeric rank (0 = low, 3 = immediate).
    #[must_use]
    pub fn rank(self) -> u8 {
        self as u8
    }
}

/// Horizontal placement for custom positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Horizontal {
    Leading,
    #[default]
    Center,
    Trailing,
}

/// Vertical placement for custom positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Vertical {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Two-axis alignment inside the notification overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    pub horizontal: Horizontal,
    pub vertical: Vertical,
}

impl Alignment {
    pub const TOP: Self = Self::new(Horizontal::Center, Vertical::Top);
    pub const BOTTOM: Self = Self::new(Horizontal::Center, Vertical::Bottom);
    pub const CENTER: Self = Self::new(Horizontal::Center, Vertical::Center);
    pub const TOP_LEADING: Self = Self::new(Horizontal::Leading, Vertical::Top);
    pub const TOP_TRAILING: Self = Self::new(Horizontal::Trailing, Vertical::Top);
    pub const BOTTOM_LEADING: Self = Self::new(Horizontal::Leading, Vertical::Bottom);
    pub const BOTTOM_TRAILING: Self = Self::new(Horizontal::Trailing, Vertical::Bottom);

    #[must_use]
    pub const fn new(horizontal: Horizontal, vertical: Vertical) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Where a notification is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    #[default]
    TopEdge,
    BottomEdge,
    Center,
    Custom(Alignment),
}

impl Position {
    /// Returns the overlay alignment this position maps to.
    #[must_use]
    pub fn alignment(self) -> Alignment {
        match self {
            Position::TopEdge => Alignment::TOP,
            Position::BottomEdge => Alignment::BOTTOM,
            Position::Center => Alignment::CENTER,
            Position::Custom(alignment) => alignment,
        }
    }

    /// Returns true for positions that are laid out individually rather
    /// than in one of the three shared stacks.
    #[must_use]
    pub fn is_custom(self) -> bool {
        matches!(self, Position::Custom(_))
    }
}

/// Entry transition for banners. Interpreted by the view layer only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Animation {
    #[default]
    Slide,
    Fade,
    Scale,
}

/// How a notification is presented.
///
/// | method       | priority  | position            |
/// |--------------|-----------|---------------------|
/// | `Banner`     | high      | given (top edge)    |
/// | `Toast`      | normal    | given (bottom edge) |
/// | `Alert`      | immediate | center              |
/// | `FullScreen` | immediate | center              |
/// | `Custom`     | given     | top edge            |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Banner {
        position: Position,
        animation: Animation,
    },
    Toast {
        position: Position,
    },
    Alert,
    FullScreen,
    Custom {
        priority: Priority,
    },
}

impl Method {
    /// A top-edge sliding banner.
    #[must_use]
    pub fn banner() -> Self {
        Method::Banner {
            position: Position::TopEdge,
            animation: Animation::Slide,
        }
    }

    /// A bottom-edge toast.
    #[must_use]
    pub fn toast() -> Self {
        Method::Toast {
            position: Position::BottomEdge,
        }
    }

    /// A top-edge notification with an explicit priority.
    #[must_use]
    pub fn custom(priority: Priority) -> Self {
        Method::Custom { priority }
    }

    #[must_use]
    pub fn priority(&self) -> Priority {
        match self {
            Method::Alert | Method::FullScreen => Priority::Immediate,
            Method::Banner { .. } => Priority::High,
            Method::Toast { .. } => Priority::Normal,
            Method::Custom { priority } => *priority,
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Method::Banner { position, .. } | Method::Toast { position } => *position,
            Method::Alert | Method::FullScreen => Position::Center,
            Method::Custom { .. } => Position::TopEdge,
        }
    }
}

impl Default for Method {
    fn default() -> Self {
        Self::banner()
    }
}
