//! Console status lines for generation events.

use std::fmt::Display;
use std::io::IsTerminal;

use oapi_types_lib::{GenerationEvent, GenerationObserver, TracingObserver};
use owo_colors::{OwoColorize, Style};

/// Where status lines are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStream {
    Stdout,
    /// Used in dry-run mode so stdout carries only the generated types.
    Stderr,
}

/// Prints a human-readable line for each event and forwards it to `tracing`.
#[derive(Debug)]
pub struct ConsoleObserver {
    stream: StatusStream,
    use_colors: bool,
    tracing: TracingObserver,
}

impl ConsoleObserver {
    pub fn new(stream: StatusStream) -> Self {
        // Check NO_COLOR environment variable and TTY
        let no_color = std::env::var("NO_COLOR").is_ok();
        let is_tty = match stream {
            StatusStream::Stdout => std::io::stdout().is_terminal(),
            StatusStream::Stderr => std::io::stderr().is_terminal(),
        };

        Self {
            stream,
            use_colors: !no_color && is_tty,
            tracing: TracingObserver,
        }
    }

    /// Applies `style` when colors are enabled.
    pub fn paint(&self, text: impl Display, style: Style) -> String {
        if self.use_colors {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn line(&self, text: &str) {
        match self.stream {
            StatusStream::Stdout => println!("{text}"),
            StatusStream::Stderr => eprintln!("{text}"),
        }
    }
}

impl GenerationObserver for ConsoleObserver {
    fn on_event(&mut self, event: &GenerationEvent) {
        self.tracing.on_event(event);

        let warning = Style::new().bright_yellow();
        match event {
            GenerationEvent::Written { name, .. } => {
                let line = format!(
                    "{} - {}",
                    self.paint("Type has been written", Style::new().bright_green()),
                    self.paint(name, Style::new().bright_blue())
                );
                self.line(&line);
            }
            GenerationEvent::NoDefinitions { source } => {
                self.line(&self.paint(format!("There are no {source} in schema"), warning));
            }
            GenerationEvent::EmptySchema { path } => {
                self.line(&self.paint(format!("Schema file {} is empty", path.display()), warning));
            }
            // Reported through tracing only
            GenerationEvent::UnsupportedVersion { .. }
            | GenerationEvent::SkippedEmpty { .. }
            | GenerationEvent::SkippedArrayWithoutItems { .. } => {}
        }
    }
}
