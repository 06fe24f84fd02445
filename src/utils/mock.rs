use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::backend::{BackendError, Command, CommandName, Gateway};

/// Gateway answering from a script of `(command, response)` pairs. Each
/// pair answers the first matching call only, an unscripted call panics.
#[derive(Debug)]
pub struct MockGateway {
    responses: Mutex<Vec<(Command, Result<Value, BackendError>)>>,
    calls: Mutex<Vec<Command>>,
}

impl MockGateway {
    pub fn new(responses: Vec<(Command, Result<Value, BackendError>)>) -> Self {
        Self {
            responses: Mutex::new(responses),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every command invoked so far, in call order.
    pub fn calls(&self) -> Vec<Command> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, name: CommandName) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.name() == name)
            .count()
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn invoke(&self, command: Command) -> Result<Value, BackendError> {
        self.calls.lock().unwrap().push(command.clone());
        let mut responses = self.responses.lock().unwrap();
        match responses.iter().position(|(c, _)| *c == command) {
            Some(i) => responses.remove(i).1,
            None => panic!("unexpected command {:?}", command),
        }
    }
}
