use std::time::Instant;

use crate::garage::GarageError;
use crate::ui::garage::intent::GarageIntent;
use crate::ui::garage::state::{GarageState, MAX_PLATE_LEN};
use crate::ui::mvi::Reducer;
use crate::ui::toast::{expire, Toast};

pub struct GarageReducer;

impl Reducer for GarageReducer {
    type State = GarageState;
    type Intent = GarageIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GarageIntent::Type(ch) => {
                if !ch.is_control() && state.input.chars().count() < MAX_PLATE_LEN {
                    state.input.push(ch);
                }
            }
            GarageIntent::Backspace => {
                state.input.pop();
            }
            GarageIntent::ClearInput => state.input.clear(),
            GarageIntent::Arrive { now } => match state.garage.arrive(&state.input) {
                Ok(()) => {
                    let plate = state.input.trim().to_string();
                    state.input.clear();
                    state.notice = Some(Toast::notice(
                        format!("Car {plate} arrived!"),
                        now,
                        state.timings.notice,
                    ));
                }
                Err(err) => {
                    tracing::debug!(%err, "arrival rejected");
                    state.error = Some(Toast::error(err.to_string(), now, state.timings.error));
                }
            },
            GarageIntent::Depart { now } => {
                let result = state.garage.depart(&state.input);
                state = departed(state, result, now);
            }
            GarageIntent::DepartFront { now } => {
                let result = state.garage.depart_front();
                state = departed(state, result, now);
            }
            GarageIntent::Tick { now } => {
                state.error = expire(state.error, now);
                state.notice = expire(state.notice, now);
            }
        }
        state
    }
}

fn departed(
    mut state: GarageState,
    result: Result<String, GarageError>,
    now: Instant,
) -> GarageState {
    match result {
        Ok(plate) => {
            state.notice = Some(Toast::notice(
                format!("Car {plate} departed!"),
                now,
                state.timings.notice,
            ));
        }
        Err(err) => {
            tracing::debug!(%err, "departure rejected");
            state.error = Some(Toast::error(err.to_string(), now, state.timings.error));
        }
    }
    state
}
