//! Progress logging collaborator for render calls.

/// Receives coarse-grained progress messages from a render call.
pub trait Logger: Sync {
    fn log(&self, message: &str);
}

impl<F> Logger for F
where
    F: Fn(&str) + Sync,
{
    fn log(&self, message: &str) {
        self(message)
    }
}

/// Forwards messages to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct InfoLogger;

impl Logger for InfoLogger {
    fn log(&self, message: &str) {
        log::info!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_closure_logger() {
        let messages = Mutex::new(Vec::new());
        let logger = |message: &str| messages.lock().unwrap().push(message.to_string());

        logger.log("hello");
        InfoLogger.log("ignored without a logger installed");

        assert_eq!(*messages.lock().unwrap(), vec!["hello".to_string()]);
    }
}
