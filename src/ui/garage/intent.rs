use std::time::Instant;

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum GarageIntent {
    /// Append a character to the plate field.
    Type(char),
    Backspace,
    ClearInput,
    /// Park the car whose plate is in the field.
    Arrive { now: Instant },
    /// Let the car whose plate is in the field leave.
    Depart { now: Instant },
    /// Let the front car leave, whatever the field says.
    DepartFront { now: Instant },
    /// Expire toasts.
    Tick { now: Instant },
}

impl Intent for GarageIntent {}
