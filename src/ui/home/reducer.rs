use crate::ui::app::Page;
use crate::ui::home::intent::HomeIntent;
use crate::ui::home::state::HomeState;
use crate::ui::mvi::Reducer;

pub struct HomeReducer;

impl Reducer for HomeReducer {
    type State = HomeState;
    type Intent = HomeIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HomeIntent::MoveSelection { delta } => {
                let len = Page::MENU.len() as i8;
                state.selected = (state.selected as i8 + delta).rem_euclid(len) as usize;
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_both_ways() {
        let state = HomeReducer::reduce(HomeState::default(), HomeIntent::MoveSelection { delta: -1 });
        assert_eq!(state.selected_page(), Page::Hanoi);
        let state = HomeReducer::reduce(state, HomeIntent::MoveSelection { delta: 1 });
        assert_eq!(state.selected_page(), Page::Garage);
    }
}
