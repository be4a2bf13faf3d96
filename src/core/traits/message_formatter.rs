/// Localized label capability: turns a message id plus named values into text
pub trait MessageFormatter: Send + Sync {
    /// Format message `id`, substituting each `{name}` placeholder from `values`
    fn format_message(&self, id: &str, values: &[(&str, &str)]) -> String;
}
