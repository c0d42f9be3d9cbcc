//! State management for Vitrina applications.
//!
//! This module implements the Elm Architecture pattern for predictable state
//! management: `State + Message → (State, Command)`.
//!
//! # Examples
//!
//! ```
//! use vitrina_core::{Command, State};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Default, Serialize, Deserialize)]
//! struct Counter {
//!     count: i32,
//! }
//!
//! enum Msg {
//!     Increment,
//!     Reset,
//! }
//!
//! impl State for Counter {
//!     type Message = Msg;
//!
//!     fn update(&mut self, msg: Self::Message) -> Command<Self::Message> {
//!         match msg {
//!             Msg::Increment => self.count += 1,
//!             Msg::Reset => self.count = 0,
//!         }
//!         Command::None
//!     }
//! }
//!
//! let mut state = Counter::default();
//! state.update(Msg::Increment);
//! assert_eq!(state.count, 1);
//! ```

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// Application state trait.
///
/// Implements the Elm Architecture: State + Message → (State, Command)
pub trait State: Clone + Serialize + for<'de> Deserialize<'de> + Send + Sync {
    /// Message type for state updates
    type Message: Send;

    /// Update state in response to a message.
    ///
    /// Returns a command for side effects (async operations such as data
    /// fetching).
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;
}

/// Commands for side effects.
///
/// Commands represent effects that should happen after a state update. The
/// embedder drives `Task` futures to completion and feeds the resulting
/// message back into [`State::update`].
#[derive(Default)]
pub enum Command<M> {
    /// No command
    #[default]
    None,
    /// Execute multiple commands
    Batch(Vec<Command<M>>),
    /// Execute an async task
    Task(Pin<Box<dyn Future<Output = M> + Send>>),
}

impl<M> Command<M> {
    /// Create a task command from an async block.
    pub fn task<F>(future: F) -> Self
    where
        F: Future<Output = M> + Send + 'static,
    {
        Self::Task(Box::pin(future))
    }

    /// Create a batch of commands.
    pub fn batch(commands: impl IntoIterator<Item = Self>) -> Self {
        Self::Batch(commands.into_iter().collect())
    }

    /// Check if this is the none command.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Map the message type using a function.
    pub fn map<N, F>(self, f: F) -> Command<N>
    where
        F: Fn(M) -> N + Send + Sync + Clone + 'static,
        M: Send + 'static,
        N: Send + 'static,
    {
        match self {
            Self::None => Command::None,
            Self::Batch(commands) => {
                Command::Batch(commands.into_iter().map(|c| c.map(f.clone())).collect())
            }
            Self::Task(future) => Command::task(async move { f(future.await) }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default, Serialize, Deserialize)]
    struct Counter {
        count: i32,
    }

    enum Msg {
        Add(i32),
    }

    impl State for Counter {
        type Message = Msg;

        fn update(&mut self, msg: Self::Message) -> Command<Self::Message> {
            let Msg::Add(n) = msg;
            self.count += n;
            Command::None
        }
    }

    #[test]
    fn test_update_mutates_state() {
        let mut state = Counter::default();
        let cmd = state.update(Msg::Add(3));
        assert_eq!(state.count, 3);
        assert!(cmd.is_none());
    }

    #[test]
    fn test_command_default_is_none() {
        let cmd: Command<Msg> = Command::default();
        assert!(cmd.is_none());
    }

    #[test]
    fn test_command_batch() {
        let cmd: Command<Msg> = Command::batch([Command::None, Command::None]);
        assert!(!cmd.is_none());
        match cmd {
            Command::Batch(commands) => assert_eq!(commands.len(), 2),
            _ => panic!("expected batch"),
        }
    }

    #[test]
    fn test_command_task_is_task() {
        let cmd: Command<Msg> = Command::task(async { Msg::Add(1) });
        assert!(matches!(cmd, Command::Task(_)));
    }

    #[test]
    fn test_command_map_none() {
        let cmd: Command<Msg> = Command::None;
        let mapped: Command<i32> = cmd.map(|Msg::Add(n)| n);
        assert!(mapped.is_none());
    }

    #[test]
    fn test_command_map_batch_preserves_shape() {
        let cmd: Command<Msg> = Command::batch([Command::None, Command::task(async { Msg::Add(2) })]);
        let mapped: Command<i32> = cmd.map(|Msg::Add(n)| n);
        match mapped {
            Command::Batch(commands) => {
                assert_eq!(commands.len(), 2);
                assert!(commands[0].is_none());
                assert!(matches!(commands[1], Command::Task(_)));
            }
            _ => panic!("expected batch"),
        }
    }
}
