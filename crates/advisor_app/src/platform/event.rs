use advisor_core::Msg;

/// Everything the main loop reacts to, whichever thread produced it.
#[derive(Debug, PartialEq)]
pub enum AppEvent {
    Msg(Msg),
    /// A typed line that could not be turned into a message.
    Rejected(String),
    Help,
    Quit,
}
