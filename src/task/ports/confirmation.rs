//! Confirmation port guarding destructive commands.

/// Yes/no decision supplied by the presentation layer.
///
/// Destructive commands only mutate state when [`ConfirmationGate::confirm`]
/// returns `true`.
pub trait ConfirmationGate {
    /// Asks the user `prompt` and returns the answer.
    fn confirm(&self, prompt: &str) -> bool;
}
