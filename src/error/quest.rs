use thiserror::Error;

/// Business errors for the quest workflow.
///
/// Each variant's display text is the reply shown to the user; bot
/// controllers catch the variants relevant to their command and send the
/// message as-is. The quest name is carried for logging.
#[derive(Error, Debug)]
pub enum QuestError {
    /// No quest exists with the requested name.
    #[error("This quest does not exist")]
    DoesNotExist { name: String },

    /// The user already has an uncompleted acceptance for this quest.
    #[error("You have already accepted this request")]
    AlreadyAccepted { name: String },

    /// Completion was attempted without a prior acceptance.
    #[error("You have not accepted this quest.")]
    NotAccepted { name: String },

    /// The user has completed this quest as many times as it allows.
    #[error("You cannot complete this quest anymore times.")]
    MaxCompletionReached { name: String },
}
