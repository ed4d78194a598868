use crate::lib::error::ShowcaseResult;
use showcase_core::config::Showcase;
use slog::Logger;

pub trait Environment {
    fn get_showcase(&self) -> &Showcase;
    fn get_logger(&self) -> &Logger;
}

pub struct EnvironmentImpl {
    showcase: Showcase,
    logger: Logger,
}

impl EnvironmentImpl {
    pub fn new() -> ShowcaseResult<Self> {
        Ok(Self::with_showcase(Showcase::from_current_dir()?))
    }

    pub fn with_showcase(showcase: Showcase) -> Self {
        EnvironmentImpl {
            showcase,
            logger: Logger::root(slog::Discard, slog::o!()),
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }
}

impl Environment for EnvironmentImpl {
    fn get_showcase(&self) -> &Showcase {
        &self.showcase
    }

    fn get_logger(&self) -> &Logger {
        &self.logger
    }
}
