use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::{FrameSink, GuessValidator, RoundMachine, RoundState, classify};

/// Keys buffered per round before `send_key` waits
pub const ROUND_QUEUE_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RoundActorError {
    #[error("Round has stopped")]
    Stopped,
}

enum RoundRequest {
    Key(String),
    Snapshot(oneshot::Sender<RoundState>),
    Shutdown(oneshot::Sender<RoundState>),
}

/// Owns one round and applies its keys strictly one at a time. A key is not
/// received until the previous one, including any awaited lookup, has been
/// fully applied.
pub struct RoundActor<V, S> {
    state: RoundState,
    machine: RoundMachine<V>,
    sink: S,
    receiver: mpsc::Receiver<RoundRequest>,
}

impl<V, S> RoundActor<V, S>
where
    V: GuessValidator + 'static,
    S: FrameSink + 'static,
{
    /// Start the round on the current tokio runtime
    pub fn spawn(state: RoundState, machine: RoundMachine<V>, sink: S) -> RoundHandle {
        let (sender, receiver) = mpsc::channel(ROUND_QUEUE_CAPACITY);
        let actor = Self {
            state,
            machine,
            sink,
            receiver,
        };
        tokio::spawn(actor.run());
        RoundHandle { sender }
    }

    async fn run(self) {
        let RoundActor {
            mut state,
            machine,
            mut sink,
            mut receiver,
        } = self;

        while let Some(request) = receiver.recv().await {
            match request {
                RoundRequest::Key(key) => {
                    let command = classify(&key);
                    let (next, outcome) = machine.apply(state, command).await;
                    state = next;
                    sink.handle_frame(outcome);
                }
                RoundRequest::Snapshot(reply) => {
                    let _ = reply.send(state.clone());
                }
                RoundRequest::Shutdown(reply) => {
                    info!("Round shut down with status {:?}", state.status());
                    let _ = reply.send(state);
                    return;
                }
            }
        }

        debug!("All round handles dropped, stopping round");
    }
}

/// Cheap, cloneable entry point to a running round
#[derive(Clone)]
pub struct RoundHandle {
    sender: mpsc::Sender<RoundRequest>,
}

impl RoundHandle {
    /// Queue a raw key. Keys are applied in the order they are queued.
    pub async fn send_key(&self, key: impl Into<String>) -> Result<(), RoundActorError> {
        self.sender
            .send(RoundRequest::Key(key.into()))
            .await
            .map_err(|_| RoundActorError::Stopped)
    }

    /// State after every key queued so far has been applied
    pub async fn snapshot(&self) -> Result<RoundState, RoundActorError> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(RoundRequest::Snapshot(reply))
            .await
            .map_err(|_| RoundActorError::Stopped)?;
        response.await.map_err(|_| RoundActorError::Stopped)
    }

    /// Stop the round once queued keys are applied, returning its final state
    pub async fn shutdown(&self) -> Result<RoundState, RoundActorError> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(RoundRequest::Shutdown(reply))
            .await
            .map_err(|_| RoundActorError::Stopped)?;
        response.await.map_err(|_| RoundActorError::Stopped)
    }

    pub fn is_stopped(&self) -> bool {
        self.sender.is_closed()
    }
}
