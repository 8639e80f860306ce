//! Parking garage modelled as a bounded queue of plate numbers.
//!
//! Cars enter at the rear and may only leave from the front. Every rejected
//! operation maps to a [`GarageError`] whose message is shown to the user.

use std::collections::VecDeque;
use thiserror::Error;

/// Default number of parking slots.
pub const DEFAULT_CAPACITY: usize = 10;
/// Most slots the garage page can draw in one row.
pub const MAX_CAPACITY: usize = 10;

/// Reasons an arrival or departure is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GarageError {
    #[error("Plate number cannot be empty!")]
    EmptyPlate,
    #[error("Plate number must be unique!")]
    DuplicatePlate,
    #[error("Garage is full!")]
    Full,
    #[error("Garage is empty!")]
    Empty,
    #[error("Car is not in the garage!")]
    NotParked,
    #[error("Car is not in front!")]
    NotAtFront,
}

/// Where a parked car sits relative to the ends of the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRole {
    /// Only car in the garage; it is both front and rear.
    Only,
    Front,
    Rear,
    Middle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Garage {
    cars: VecDeque<String>,
    capacity: usize,
    arrivals: u32,
    departures: u32,
}

impl Default for Garage {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl Garage {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cars: VecDeque::new(),
            capacity,
            arrivals: 0,
            departures: 0,
        }
    }

    /// Park a car at the rear of the queue.
    ///
    /// The plate is trimmed before it is checked and stored.
    pub fn arrive(&mut self, plate: &str) -> Result<(), GarageError> {
        let plate = plate.trim();
        if plate.is_empty() {
            return Err(GarageError::EmptyPlate);
        }
        if self.position(plate).is_some() {
            return Err(GarageError::DuplicatePlate);
        }
        if self.is_full() {
            return Err(GarageError::Full);
        }

        self.cars.push_back(plate.to_string());
        self.arrivals += 1;
        Ok(())
    }

    /// Let a specific car leave. Only the front car may do so.
    pub fn depart(&mut self, plate: &str) -> Result<String, GarageError> {
        if self.cars.is_empty() {
            return Err(GarageError::Empty);
        }
        let plate = plate.trim();
        if plate.is_empty() {
            return Err(GarageError::EmptyPlate);
        }
        match self.position(plate) {
            None => Err(GarageError::NotParked),
            Some(0) => self.depart_front(),
            Some(_) => Err(GarageError::NotAtFront),
        }
    }

    /// Remove whichever car is at the front.
    pub fn depart_front(&mut self) -> Result<String, GarageError> {
        let car = self.cars.pop_front().ok_or(GarageError::Empty)?;
        self.departures += 1;
        Ok(car)
    }

    pub fn position(&self, plate: &str) -> Option<usize> {
        self.cars.iter().position(|car| car == plate)
    }

    pub fn slot_role(&self, index: usize) -> Option<SlotRole> {
        let last = self.cars.len().checked_sub(1)?;
        let role = match index {
            i if i > last => return None,
            0 if last == 0 => SlotRole::Only,
            0 => SlotRole::Front,
            i if i == last => SlotRole::Rear,
            _ => SlotRole::Middle,
        };
        Some(role)
    }

    pub fn cars(&self) -> impl ExactSizeIterator<Item = &str> {
        self.cars.iter().map(String::as_str)
    }

    pub fn front(&self) -> Option<&str> {
        self.cars.front().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cars.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn arrivals(&self) -> u32 {
        self.arrivals
    }

    pub fn departures(&self) -> u32 {
        self.departures
    }
}
