use console::Style;
use once_cell::sync::Lazy;

// Styled for stderr so colour follows stderr's terminal, not stdout's.
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow().for_stderr());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red().for_stderr());
