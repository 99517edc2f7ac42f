use crate::domain::model::Outcome;
use crate::domain::ports::Delegate;

/// Runs the startup sequence: starting → delegate → ready or fatal.
pub struct Launcher {
    project_name: String,
}

impl Launcher {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
        }
    }

    /// Invokes the delegate exactly once. Never logs "ready" after a failure.
    pub fn launch<D: Delegate + ?Sized>(&self, delegate: &mut D) -> Outcome {
        tracing::info!("{} starting...", self.project_name);

        if let Err(e) = delegate.run() {
            tracing::error!("Fatal error: {:#}", e);
            tracing::debug!("Error details: {:?}", e);
            return Outcome::Fatal;
        }

        tracing::info!("{} ready!", self.project_name);
        Outcome::Ready
    }
}
