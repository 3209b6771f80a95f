use thiserror::Error;

/// Business errors for the tavern menu workflow.
#[derive(Error, Debug)]
pub enum TavernError {
    /// No menu item matched the requested name.
    #[error("No menu item could be found with the name {name}")]
    NoMenuItemFound { name: String },
}
