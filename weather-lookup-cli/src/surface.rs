use std::io::{self, Write};

use weather_lookup_core::{DisplayState, RenderSurface, render_text};

/// Result panel on stdout, error panel on stderr.
#[derive(Debug, Default)]
pub struct TerminalSurface;

impl RenderSurface for TerminalSurface {
    fn render(&mut self, state: &DisplayState) {
        let Some(text) = render_text(state) else {
            return;
        };

        // Write failures are ignored.
        let _ = match state {
            DisplayState::ShowingError(_) => writeln!(io::stderr(), "{text}\n"),
            _ => writeln!(io::stdout(), "{text}\n"),
        };
    }
}
