use crate::ui::app::Page;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HomeState {
    pub selected: usize,
}

impl UiState for HomeState {}

impl HomeState {
    pub fn selected_page(&self) -> Page {
        Page::MENU[self.selected % Page::MENU.len()]
    }
}
