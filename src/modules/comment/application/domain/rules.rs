use crate::shared::patch::UpdateMode;
use crate::shared::validation::{required_text, FieldErrors};

/// Checks the comment text. `Ok(None)` means a PATCH that leaves it alone.
pub fn check_comment_text(
    mode: UpdateMode,
    text: Option<&str>,
) -> Result<Option<String>, FieldErrors> {
    if mode == UpdateMode::Partial && text.is_none() {
        return Ok(None);
    }

    let mut errors = FieldErrors::new();
    let text = required_text(&mut errors, "text", text, None);
    errors.into_result()?;

    Ok(text)
}
