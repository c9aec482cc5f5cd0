use crate::calc::{Param, Params};
use crate::ui::mvi::UiState;

/// Cap on the numeric entry buffer. Long enough for anything sensible,
/// short enough to fit the field.
pub(crate) const EDIT_BUFFER_MAX: usize = 12;

/// State of the single calculator screen.
///
/// `params` is the parameter store: the slider and the numeric field of a
/// control group are both views of the same stored percentage. `edit` is
/// `Some` while the focused parameter's numeric field is being typed into;
/// the stored value is untouched until commit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScreenState {
    pub params: Params,
    pub focused: Param,
    pub edit: Option<String>,
}

impl UiState for ScreenState {}

impl ScreenState {
    pub fn with_params(params: Params) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }
}
