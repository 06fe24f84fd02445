use std::collections::VecDeque;
use std::sync::Arc;

use iced::futures::StreamExt;
use iced::Task;
use iced_runtime::{task::into_stream, Action};

use crate::app::{
    message::Message,
    state::{DirectoryStore, State},
};
use crate::backend::Gateway;

/// Runs a task to completion and returns the messages it produced, without
/// feeding them to anything.
pub async fn collect(task: Task<Message>) -> Vec<Message> {
    let mut messages = Vec::new();
    if let Some(mut stream) = into_stream(task) {
        while let Some(action) = stream.next().await {
            if let Action::Output(msg) = action {
                messages.push(msg);
            }
        }
    }
    messages
}

/// Runs `task`, passes every produced message to `update` and runs the
/// returned tasks in turn, until nothing is left to run.
pub async fn drain(task: Task<Message>, mut update: impl FnMut(Message) -> Task<Message>) {
    let mut tasks = VecDeque::from([task]);
    while let Some(task) = tasks.pop_front() {
        for msg in collect(task).await {
            tasks.push_back(update(msg));
        }
    }
}

/// Drives a panel the way the application does, feeding back the results
/// of the backend calls it issues.
pub struct Sandbox<S: State> {
    state: S,
}

impl<S: State> Sandbox<S> {
    pub fn new(state: S) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    pub async fn reload(
        mut self,
        gateway: Arc<dyn Gateway>,
        directory: &DirectoryStore,
    ) -> Self {
        let task = self.state.reload(gateway.clone());
        self.run(task, gateway, directory).await;
        self
    }

    pub async fn update(
        mut self,
        gateway: Arc<dyn Gateway>,
        directory: &DirectoryStore,
        message: Message,
    ) -> Self {
        let task = self.state.update(gateway.clone(), directory, message);
        self.run(task, gateway, directory).await;
        self
    }

    async fn run(
        &mut self,
        task: Task<Message>,
        gateway: Arc<dyn Gateway>,
        directory: &DirectoryStore,
    ) {
        let state = &mut self.state;
        drain(task, |msg| state.update(gateway.clone(), directory, msg)).await;
    }
}
