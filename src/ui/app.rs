use crate::calc::{confusion_cells, ppv, ConfusionCells, Params};
use crate::ui::mvi::Reducer;
use crate::ui::screen::{ScreenIntent, ScreenReducer, ScreenState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Top-level application state: the calculator screen plus the quit flag
/// and the projection population chosen at startup.
///
/// Derived values (PPV, confusion cells) are recomputed from the parameter
/// store on every call; nothing is cached, so the screen can never show a
/// stale result.
pub struct App {
    should_quit: bool,
    population: i64,
    /// Calculator screen state (MVI pattern).
    screen: ScreenState,
}

impl App {
    pub fn new(params: Params, population: i64) -> Self {
        Self {
            should_quit: false,
            population,
            screen: ScreenState::with_params(params),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub fn population(&self) -> i64 {
        self.population
    }

    /// Dispatch an intent to the screen reducer.
    pub fn dispatch(&mut self, intent: ScreenIntent) {
        tracing::trace!(?intent, "dispatch");
        dispatch_mvi!(self, screen, ScreenReducer, intent);
    }

    /// Current PPV, derived from the parameter store.
    pub fn ppv(&self) -> Option<f64> {
        let params = &self.screen.params;
        ppv(
            params.fraction(crate::calc::Param::Sensitivity),
            params.fraction(crate::calc::Param::Specificity),
            params.fraction(crate::calc::Param::Prevalence),
        )
    }

    /// Current confusion cells, derived from the parameter store.
    pub fn cells(&self) -> Option<ConfusionCells> {
        let params = &self.screen.params;
        confusion_cells(
            params.fraction(crate::calc::Param::Sensitivity),
            params.fraction(crate::calc::Param::Specificity),
            params.fraction(crate::calc::Param::Prevalence),
            self.population,
        )
    }
}
