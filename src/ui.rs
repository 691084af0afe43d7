/// User-facing error output
///
/// The report owns stdout, so everything here goes to stderr.
use std::io::{self, IsTerminal, Write};

/// Print colored text to stderr, with fallback to plain text
///
/// Color is only attempted when stderr is a terminal.
fn print_color(s: &str, fg: term::color::Color) {
    if !io::stderr().is_terminal() || !really_print_color(s, fg) {
        eprint!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        let Some(mut t) = term::stderr() else {
            return false;
        };
        if t.fg(fg).is_err() {
            return false;
        }
        let _ = t.attr(term::Attr::Bold);
        if write!(t, "{}", s).is_err() {
            return false;
        }
        let _ = t.reset();

        true
    }
}

/// Print an error message with colored "error" prefix
pub fn print_error(msg: &str) {
    eprintln!();
    print_color("error", term::color::BRIGHT_RED);
    eprintln!(": {}", msg);
    eprintln!();
}
