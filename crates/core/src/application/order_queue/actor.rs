// Queue Owner Task
//
// The only place the OrderQueue lives. Commands are handled one at a time,
// so the queue needs no lock.

use super::QueueCommand;
use crate::domain::OrderQueue;
use tokio::sync::mpsc;
use tracing::{debug, info};

pub(super) struct QueueActor {
    receiver: mpsc::UnboundedReceiver<QueueCommand>,
    queue: OrderQueue,
}

impl QueueActor {
    pub(super) fn new(receiver: mpsc::UnboundedReceiver<QueueCommand>) -> Self {
        Self {
            receiver,
            queue: OrderQueue::new(),
        }
    }

    /// Process commands until every handle is dropped
    pub(super) async fn run(mut self) {
        info!("Order queue started");

        while let Some(cmd) = self.receiver.recv().await {
            self.handle(cmd);
        }

        info!(
            discarded = self.queue.len(),
            "Order queue stopped, pending summaries discarded"
        );
    }

    fn handle(&mut self, cmd: QueueCommand) {
        match cmd {
            QueueCommand::Enqueue {
                summary,
                respond_to,
            } => {
                let order_id = summary.id;
                self.queue.enqueue(summary);
                info!(
                    order_id,
                    queue_size = self.queue.len(),
                    "Order added to queue"
                );
                let _ = respond_to.send(self.queue.len());
            }
            QueueCommand::Dequeue { respond_to } => {
                let next = self.queue.dequeue();
                match &next {
                    Some(summary) => info!(
                        order_id = summary.id,
                        remaining = self.queue.len(),
                        "Order removed from queue"
                    ),
                    None => info!("Order queue is empty"),
                }
                let _ = respond_to.send(next);
            }
            QueueCommand::Peek { respond_to } => {
                let head = self.queue.peek().cloned();
                match &head {
                    Some(summary) => info!(order_id = summary.id, "Next order in queue"),
                    None => info!("Order queue is empty"),
                }
                let _ = respond_to.send(head);
            }
            QueueCommand::Size { respond_to } => {
                let _ = respond_to.send(self.queue.len());
            }
            QueueCommand::Snapshot { respond_to } => {
                debug!(queue_size = self.queue.len(), "Queue snapshot");
                let _ = respond_to.send(self.queue.snapshot());
            }
        }
    }
}
