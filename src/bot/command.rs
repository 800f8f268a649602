//! Command name extraction.

/// Extract the bare command name from message text.
///
/// `/start`, `/start arg` and `/start@my_bot arg` all yield `start`.
/// Text that doesn't start with `/`, or has nothing after it, is not a command.
pub fn extract_command(text: &str) -> Option<&str> {
    let rest = text.strip_prefix('/')?;
    if rest.starts_with(char::is_whitespace) {
        return None;
    }
    let word = rest.split_whitespace().next()?;

    let name = word.split('@').next().unwrap_or(word);
    (!name.is_empty()).then_some(name)
}
