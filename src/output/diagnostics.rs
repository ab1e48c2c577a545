/// Stderr messages gated by the global `-v` / `-q` flags.
///
/// Warnings print unless quiet. `info` needs `-v`, `debug` needs `-vv`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Diagnostics {
    verbose: u8,
    quiet: bool,
}

impl Diagnostics {
    #[must_use]
    pub const fn new(verbose: u8, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }

    #[must_use]
    pub const fn shows_info(&self) -> bool {
        !self.quiet && self.verbose >= 1
    }

    #[must_use]
    pub const fn shows_debug(&self) -> bool {
        !self.quiet && self.verbose >= 2
    }

    pub fn warn(&self, message: &str) {
        if !self.quiet {
            eprintln!("Warning: {message}");
        }
    }

    pub fn info(&self, message: &str) {
        if self.shows_info() {
            eprintln!("{message}");
        }
    }

    pub fn debug(&self, message: &str) {
        if self.shows_debug() {
            eprintln!("[debug] {message}");
        }
    }
}
