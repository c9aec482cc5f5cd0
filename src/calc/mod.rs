//! Pure calculation layer: Bayes evaluator, population projector, and the
//! parameter store the screen binds its controls to.

mod bayes;
mod cells;
mod params;

pub use bayes::ppv;
pub use cells::{confusion_cells, ConfusionCells, DEFAULT_POPULATION};
pub use params::{Param, Params};
