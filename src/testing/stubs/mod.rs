mod oracle_classifier;
mod scripted_selector;

pub use oracle_classifier::OracleClassifier;
pub use scripted_selector::ScriptedSelector;
