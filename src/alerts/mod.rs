pub mod config;
pub mod evaluator;
pub mod rules;

pub use config::AlertConfig;
pub use evaluator::{alert_messages, evaluate_alerts, evaluate_recent, trailing_window};
pub use rules::{Alert, AlertKind};
