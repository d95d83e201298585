// Order Queue Service
//
// Process-lifetime FIFO of order summaries, owned by a single task and
// reached through a cloneable handle.

mod actor;

use crate::domain::OrderSummary;
use crate::error::{AppError, Result};
use actor::QueueActor;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

pub(crate) enum QueueCommand {
    Enqueue {
        summary: OrderSummary,
        respond_to: oneshot::Sender<usize>,
    },
    Dequeue {
        respond_to: oneshot::Sender<Option<OrderSummary>>,
    },
    Peek {
        respond_to: oneshot::Sender<Option<OrderSummary>>,
    },
    Size {
        respond_to: oneshot::Sender<usize>,
    },
    Snapshot {
        respond_to: oneshot::Sender<Vec<OrderSummary>>,
    },
}

/// Handle to the order queue.
///
/// Cheap to clone. The owner task exits once every handle is dropped, and the
/// summaries still queued at that point are discarded.
#[derive(Clone)]
pub struct OrderQueueHandle {
    sender: mpsc::UnboundedSender<QueueCommand>,
}

impl OrderQueueHandle {
    /// Start the owner task on the current tokio runtime
    pub fn spawn() -> (Self, JoinHandle<()>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let task = tokio::spawn(QueueActor::new(receiver).run());
        (Self { sender }, task)
    }

    /// Append at the tail; returns the queue size afterwards
    pub async fn enqueue(&self, summary: OrderSummary) -> Result<usize> {
        self.request(|respond_to| QueueCommand::Enqueue {
            summary,
            respond_to,
        })
        .await
    }

    /// Remove and return the head; `None` when the queue is empty
    pub async fn dequeue(&self) -> Result<Option<OrderSummary>> {
        self.request(|respond_to| QueueCommand::Dequeue { respond_to })
            .await
    }

    /// Return the head without removing it; `None` when the queue is empty
    pub async fn peek(&self) -> Result<Option<OrderSummary>> {
        self.request(|respond_to| QueueCommand::Peek { respond_to })
            .await
    }

    pub async fn size(&self) -> Result<usize> {
        self.request(|respond_to| QueueCommand::Size { respond_to })
            .await
    }

    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.size().await? == 0)
    }

    /// Copy of every queued summary, head first
    pub async fn snapshot(&self) -> Result<Vec<OrderSummary>> {
        self.request(|respond_to| QueueCommand::Snapshot { respond_to })
            .await
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> QueueCommand,
    ) -> Result<T> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .map_err(|_| AppError::Internal("order queue task has stopped".to_string()))?;
        response
            .await
            .map_err(|_| AppError::Internal("order queue task dropped the request".to_string()))
    }
}
