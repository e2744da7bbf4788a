//! Fences and the set of fences on the board.
//!
//! A fence is a wall two cells long, anchored at the intersection to the
//! lower-right of cell `(x, y)`. Anchors run `0..=7` on both axes since a
//! fence on the outer edge would block nothing.
//!
//! ## FenceSet
//!
//! Placed fences live in an `im::HashSet`, so cloning a set is O(1) and a
//! clone with one extra fence shares structure with the original. The
//! placement validator relies on this to test a candidate without touching
//! the state it was given.

use im::HashSet as ImHashSet;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::position::BOARD_MAX;
use crate::error::RuleViolation;

/// Largest valid fence anchor coordinate.
pub const FENCE_MAX: u8 = BOARD_MAX - 1;

/// Which way a fence runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    /// Runs along x; blocks vertical steps.
    #[serde(rename = "h")]
    Horizontal,
    /// Runs along y; blocks horizontal steps.
    #[serde(rename = "v")]
    Vertical,
}

impl Orientation {
    /// Single-letter tag used on the wire.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Orientation::Horizontal => "h",
            Orientation::Vertical => "v",
        }
    }
}

impl FromStr for Orientation {
    type Err = RuleViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" => Ok(Orientation::Horizontal),
            "v" => Ok(Orientation::Vertical),
            _ => Err(RuleViolation::InvalidOrientation),
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A fence on the board. Anchor coordinates are always in `0..=7`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "FenceRequest", into = "FenceRequest")]
pub struct Fence {
    x: u8,
    y: u8,
    orientation: Orientation,
}

impl Fence {
    /// Create a fence.
    ///
    /// # Panics
    ///
    /// Panics if either anchor coordinate is larger than 7. Use `checked`
    /// or `FenceRequest` for untrusted input.
    #[must_use]
    pub const fn new(x: u8, y: u8, orientation: Orientation) -> Self {
        assert!(x <= FENCE_MAX && y <= FENCE_MAX, "fence anchor out of bounds");
        Self { x, y, orientation }
    }

    /// Horizontal fence at `(x, y)`.
    #[must_use]
    pub const fn horizontal(x: u8, y: u8) -> Self {
        Self::new(x, y, Orientation::Horizontal)
    }

    /// Vertical fence at `(x, y)`.
    #[must_use]
    pub const fn vertical(x: u8, y: u8) -> Self {
        Self::new(x, y, Orientation::Vertical)
    }

    /// Create a fence from raw coordinates, `None` when the anchor is off range.
    #[must_use]
    pub fn checked(x: i32, y: i32, orientation: Orientation) -> Option<Self> {
        let in_range = |v: i32| (0..=i32::from(FENCE_MAX)).contains(&v);
        (in_range(x) && in_range(y)).then(|| Self {
            x: x as u8,
            y: y as u8,
            orientation,
        })
    }

    /// Anchor column.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Anchor row.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Orientation.
    #[must_use]
    pub const fn orientation(self) -> Orientation {
        self.orientation
    }
}

impl std::fmt::Display for Fence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}, {})", self.orientation, self.x, self.y)
    }
}

/// A proposed fence as it arrives from a caller: raw coordinates and a raw
/// orientation tag, nothing checked yet.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FenceRequest {
    /// Anchor column.
    pub x: i32,
    /// Anchor row.
    pub y: i32,
    /// Orientation tag, `"h"` or `"v"`.
    pub orientation: String,
}

impl FenceRequest {
    /// Create a request.
    pub fn new(x: i32, y: i32, orientation: impl Into<String>) -> Self {
        Self {
            x,
            y,
            orientation: orientation.into(),
        }
    }
}

impl From<Fence> for FenceRequest {
    fn from(fence: Fence) -> Self {
        Self::new(
            i32::from(fence.x),
            i32::from(fence.y),
            fence.orientation.tag(),
        )
    }
}

/// Orientation is checked before bounds.
impl TryFrom<FenceRequest> for Fence {
    type Error = RuleViolation;

    fn try_from(request: FenceRequest) -> Result<Self, Self::Error> {
        Fence::try_from(&request)
    }
}

impl TryFrom<&FenceRequest> for Fence {
    type Error = RuleViolation;

    fn try_from(request: &FenceRequest) -> Result<Self, Self::Error> {
        let orientation: Orientation = request.orientation.parse()?;
        Fence::checked(request.x, request.y, orientation).ok_or(RuleViolation::OutOfBounds)
    }
}

/// Unordered set of placed fences.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FenceSet {
    fences: ImHashSet<Fence>,
}

impl FenceSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of placed fences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fences.len()
    }

    /// True if no fence has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fences.is_empty()
    }

    /// True if this exact fence is on the board.
    #[must_use]
    pub fn contains(&self, fence: &Fence) -> bool {
        self.fences.contains(fence)
    }

    /// True if a fence with these raw coordinates is on the board.
    ///
    /// Off-range coordinates never match.
    #[must_use]
    pub fn contains_at(&self, x: i32, y: i32, orientation: Orientation) -> bool {
        Fence::checked(x, y, orientation).is_some_and(|f| self.fences.contains(&f))
    }

    /// Insert a fence. Returns false if it was already present.
    pub fn insert(&mut self, fence: Fence) -> bool {
        self.fences.insert(fence).is_none()
    }

    /// A copy of this set with `fence` added. `self` is left untouched.
    #[must_use]
    pub fn with(&self, fence: Fence) -> Self {
        Self {
            fences: self.fences.update(fence),
        }
    }

    /// Iterate over placed fences in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Fence> {
        self.fences.iter()
    }
}

impl FromIterator<Fence> for FenceSet {
    fn from_iter<I: IntoIterator<Item = Fence>>(iter: I) -> Self {
        Self {
            fences: iter.into_iter().collect(),
        }
    }
}
