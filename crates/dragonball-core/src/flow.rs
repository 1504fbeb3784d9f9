//! Single-shot request flow.
//!
//! Login and hero list retrieval share one shape:
//! `Idle -> Requesting -> {Succeeded | Failed}`. Both outcomes are terminal;
//! retrying means starting a new [`Flow`].

use tracing::trace;

use crate::{Error, Result};

/// The state of one request flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow<T> {
    Idle,
    Requesting,
    Succeeded(T),
    Failed(String),
}

impl<T> Default for Flow<T> {
    fn default() -> Self {
        Flow::Idle
    }
}

impl<T> Flow<T> {
    /// Create an idle flow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move from `Idle` to `Requesting`.
    pub fn start(&mut self) -> Result<()> {
        match self {
            Flow::Idle => {
                trace!("flow: idle -> requesting");
                *self = Flow::Requesting;
                Ok(())
            }
            _ => Err(self.invalid("start")),
        }
    }

    /// Record the outcome of the request. Errors keep only their message.
    pub fn finish(&mut self, outcome: Result<T>) -> Result<()> {
        if !matches!(self, Flow::Requesting) {
            return Err(self.invalid("finish"));
        }
        *self = match outcome {
            Ok(value) => {
                trace!("flow: requesting -> succeeded");
                Flow::Succeeded(value)
            }
            Err(err) => {
                trace!(error = %err, "flow: requesting -> failed");
                Flow::Failed(err.to_string())
            }
        };
        Ok(())
    }

    /// True once the flow has succeeded or failed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Flow::Succeeded(_) | Flow::Failed(_))
    }

    /// Consume a terminal flow into its outcome: the value or the
    /// user-facing failure message.
    pub fn into_outcome(self) -> Result<std::result::Result<T, String>> {
        match self {
            Flow::Succeeded(value) => Ok(Ok(value)),
            Flow::Failed(message) => Ok(Err(message)),
            pending => Err(pending.invalid("take the outcome")),
        }
    }

    fn state_name(&self) -> &'static str {
        match self {
            Flow::Idle => "idle",
            Flow::Requesting => "requesting",
            Flow::Succeeded(_) => "succeeded",
            Flow::Failed(_) => "failed",
        }
    }

    fn invalid(&self, action: &'static str) -> Error {
        Error::InvalidTransition {
            action,
            state: self.state_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EmptyResponse;

    #[test]
    fn success_path() {
        let mut flow = Flow::new();
        flow.start().unwrap();
        assert_eq!(flow, Flow::Requesting);
        flow.finish(Ok(3)).unwrap();
        assert!(flow.is_terminal());
        assert_eq!(flow.into_outcome().unwrap(), Ok(3));
    }

    #[test]
    fn failure_keeps_message() {
        let mut flow: Flow<()> = Flow::new();
        flow.start().unwrap();
        flow.finish(Err(EmptyResponse::Token.into())).unwrap();
        assert_eq!(flow, Flow::Failed("no token received".to_string()));
    }

    #[test]
    fn terminal_states_do_not_restart() {
        let mut flow = Flow::new();
        flow.start().unwrap();
        flow.finish(Ok("done")).unwrap();

        let err = flow.start().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidTransition {
                action: "start",
                state: "succeeded"
            }
        ));
    }

    #[test]
    fn cannot_finish_before_start() {
        let mut flow: Flow<u8> = Flow::new();
        assert!(flow.finish(Ok(1)).is_err());
        assert_eq!(flow, Flow::Idle);
        assert!(flow.into_outcome().is_err());
    }
}
