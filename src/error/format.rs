use crate::error::{ErrorContext, GitEmbedError};
use log::debug;

pub fn format_error_chain(error: &GitEmbedError) -> String {
    let context = ErrorContext::new(error);
    if let Some(details) = &context.details {
        debug!("{details}");
    }
    context.to_string()
}

/// Format error for a terminal, with colors when `use_color` is set
pub fn format_error_with_color(error: &GitEmbedError, use_color: bool) -> String {
    let red = if use_color { "\x1b[31m" } else { "" };
    let yellow = if use_color { "\x1b[33m" } else { "" };
    let cyan = if use_color { "\x1b[36m" } else { "" };
    let reset = if use_color { "\x1b[0m" } else { "" };
    let bold = if use_color { "\x1b[1m" } else { "" };

    let context = ErrorContext::new(error);
    if let Some(details) = &context.details {
        debug!("{details}");
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{red}{bold}Error:{reset} {}\n",
        context.user_message
    ));

    if let Some(suggestion) = &context.suggestion {
        output.push_str(&format!("\n{yellow}{bold}Suggestions:{reset}\n"));
        for line in suggestion.lines() {
            if !line.trim().is_empty() {
                output.push_str(&format!("{cyan}• {line}{reset}\n"));
            }
        }
    }

    // Always end with a reset to ensure no color bleeding
    if use_color && !output.is_empty() {
        output.push_str(reset);
    }

    output
}
