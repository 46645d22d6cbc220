mod failing_selector;

pub use failing_selector::FailingSelector;
