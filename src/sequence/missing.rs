use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{MissingViewError, ViewId};

/// Views known not to exist.
///
/// `NoneKnown` and an empty `Known` set read the same; the distinction only
/// records whether anything was enumerated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingViews {
    /// Nothing is known to be missing
    #[default]
    NoneKnown,
    /// Explicitly enumerated missing views
    Known(BTreeSet<ViewId>),
}

impl MissingViews {
    /// Missing views from an explicit list
    pub fn from_views<I: IntoIterator<Item = ViewId>>(views: I) -> Self {
        MissingViews::Known(views.into_iter().collect())
    }

    /// Every view of `setups` at time points before `shift`.
    ///
    /// A zero shift yields [`MissingViews::NoneKnown`].
    pub fn from_time_origin_shift<I>(shift: u32, setups: I) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        if shift == 0 {
            return MissingViews::NoneKnown;
        }
        let setups: Vec<i32> = setups.into_iter().collect();
        let last = i32::try_from(shift).unwrap_or(i32::MAX);
        let views = (0..last)
            .flat_map(|t| setups.iter().map(move |&s| ViewId::new(t, s)))
            .collect();
        MissingViews::Known(views)
    }

    /// Whether this is the "none known" sentinel
    pub fn is_none_known(&self) -> bool {
        matches!(self, MissingViews::NoneKnown)
    }

    /// Whether `view` is known to be missing
    pub fn contains(&self, view: &ViewId) -> bool {
        match self {
            MissingViews::NoneKnown => false,
            MissingViews::Known(views) => views.contains(view),
        }
    }

    /// Fail with [`MissingViewError`] if `view` is missing
    pub fn check(&self, view: ViewId) -> Result<(), MissingViewError> {
        if self.contains(&view) {
            Err(MissingViewError { view })
        } else {
            Ok(())
        }
    }

    /// Record one more missing view; membership only grows
    pub fn insert(&mut self, view: ViewId) {
        match self {
            MissingViews::NoneKnown => *self = MissingViews::Known(BTreeSet::from([view])),
            MissingViews::Known(views) => {
                views.insert(view);
            }
        }
    }

    /// Number of missing views
    pub fn len(&self) -> usize {
        match self {
            MissingViews::NoneKnown => 0,
            MissingViews::Known(views) => views.len(),
        }
    }

    /// Whether no view is missing
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Missing views in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &ViewId> {
        match self {
            MissingViews::NoneKnown => None,
            MissingViews::Known(views) => Some(views),
        }
        .into_iter()
        .flatten()
    }
}

/// Offset between the first acquired frame of a source and time point 0.
///
/// Time points `0..origin` were never acquired; time point `t >= origin`
/// reads source frame `t - origin`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOriginShift {
    /// Number of leading time points without data
    pub origin: u32,
}

impl TimeOriginShift {
    /// Create a shift
    pub fn new(origin: u32) -> Self {
        Self { origin }
    }

    /// Missing views for the given setups
    pub fn missing_views<I: IntoIterator<Item = i32>>(&self, setups: I) -> MissingViews {
        MissingViews::from_time_origin_shift(self.origin, setups)
    }

    /// Whether `timepoint` lies in `0..origin` and was never acquired
    pub fn is_before_origin(&self, timepoint: i32) -> bool {
        u32::try_from(timepoint).is_ok_and(|t| t < self.origin)
    }

    /// Source frame backing `timepoint`, or `None` before the origin
    pub fn source_frame(&self, timepoint: i32) -> Option<u32> {
        let t = u32::try_from(timepoint).ok()?;
        t.checked_sub(self.origin)
    }

    /// Total number of time points for a source with `frames` frames
    pub fn timepoint_count(&self, frames: u32) -> u32 {
        frames.saturating_add(self.origin)
    }
}
