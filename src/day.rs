use serde::Serialize;

use crate::Date;

/// Render flags for one calendar day, derived from the selection at the moment
/// it was requested. Never cached; ask the model again after any change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DayModel {
    pub date:          Date,
    /// The day is the start or the end of the selection.
    pub is_selected:   bool,
    pub is_start:      bool,
    pub is_end:        bool,
    /// Within the configured min/max bounds.
    pub is_selectable: bool,
    pub is_today:      bool,
    /// Inside a completed range, ends included.
    pub is_in_range:   bool,
}

impl DayModel {
    pub const fn day(&self) -> u8 {
        self.date.day()
    }

    /// Strictly between the start and end of a completed range.
    pub const fn is_range_interior(&self) -> bool {
        self.is_in_range && !self.is_start && !self.is_end
    }
}
