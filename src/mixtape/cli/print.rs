use super::styles::{ERROR, WARNING};
use mixtape::report::{Diagnostic, Level};

pub(super) fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{}", format_diagnostic(diagnostic));
    }
}

fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    let style = match diagnostic.level {
        Level::Warning => &*WARNING,
        Level::Error => &*ERROR,
    };
    style.apply_to(&diagnostic.content).to_string()
}
