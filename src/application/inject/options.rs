//! Inject Options

/// Options for the inject use case
#[derive(Debug, Clone, Default)]
pub struct InjectOptions {
    /// Render targets without writing them
    pub dry_run: bool,
}

impl InjectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
