use crate::garage::Garage;
use crate::ui::mvi::UiState;
use crate::ui::toast::{Toast, ToastTimings};

/// Longest plate the input field accepts.
pub const MAX_PLATE_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GarageState {
    pub garage: Garage,
    pub input: String,
    /// Validation failure, shown briefly.
    pub error: Option<Toast>,
    /// "Car X arrived!" style notice.
    pub notice: Option<Toast>,
    pub timings: ToastTimings,
}

impl UiState for GarageState {}

impl GarageState {
    pub fn new(capacity: usize, timings: ToastTimings) -> Self {
        Self {
            garage: Garage::with_capacity(capacity),
            timings,
            ..Self::default()
        }
    }

    /// Index of the parked car whose plate matches the input exactly.
    pub fn highlighted(&self) -> Option<usize> {
        self.garage.position(&self.input)
    }
}
