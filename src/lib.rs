//! Interactive terminal calculator for the positive predictive value of a
//! diagnostic test.
//!
//! Three adjustable inputs (sensitivity, specificity, prevalence) feed a
//! closed-form Bayes computation and a confusion-matrix projection over a
//! hypothetical population. The UI follows a unidirectional MVI data flow:
//! key events become intents, a pure reducer folds them into screen state,
//! and every frame is drawn from that state alone.

pub mod calc;
pub mod cli;
pub mod config;
pub mod format;
pub mod logging;
pub mod ui;
