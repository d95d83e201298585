// Order Repository Port (Interface)

use crate::domain::{Order, OrderId};
use crate::error::Result;
use async_trait::async_trait;

/// Read side of the order store. Writes go through
/// [`TransactionalOrderRepository`](crate::port::TransactionalOrderRepository).
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Find order by ID
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>>;

    /// All orders, newest first (ties broken by descending id)
    async fn list_newest_first(&self) -> Result<Vec<Order>>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::domain::NewOrder;
    use crate::error::AppError;
    use crate::port::{
        OrderRepositoryTransaction, TimeProvider, Transaction, TransactionalOrderRepository,
    };
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Shared {
        orders: Vec<Order>,
        next_id: OrderId,
        commits: usize,
        rollbacks: usize,
    }

    /// In-memory order store with real commit/rollback semantics
    pub struct InMemoryOrderRepository {
        shared: Arc<Mutex<Shared>>,
        time_provider: Arc<dyn TimeProvider>,
        fail_saves: Arc<AtomicBool>,
        begun: AtomicUsize,
    }

    impl InMemoryOrderRepository {
        pub fn new(time_provider: Arc<dyn TimeProvider>) -> Self {
            Self {
                shared: Arc::new(Mutex::new(Shared {
                    next_id: 1,
                    ..Default::default()
                })),
                time_provider,
                fail_saves: Arc::new(AtomicBool::new(false)),
                begun: AtomicUsize::new(0),
            }
        }

        /// Make every subsequent save fail with a database error
        pub fn set_fail_saves(&self, fail: bool) {
            self.fail_saves.store(fail, Ordering::SeqCst);
        }

        pub fn committed_count(&self) -> usize {
            self.shared.lock().unwrap().commits
        }

        pub fn rolled_back_count(&self) -> usize {
            self.shared.lock().unwrap().rollbacks
        }

        pub fn transactions_begun(&self) -> usize {
            self.begun.load(Ordering::SeqCst)
        }

        pub fn stored_count(&self) -> usize {
            self.shared.lock().unwrap().orders.len()
        }
    }

    #[async_trait]
    impl OrderRepository for InMemoryOrderRepository {
        async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>> {
            let shared = self.shared.lock().unwrap();
            Ok(shared.orders.iter().find(|o| o.id == id).cloned())
        }

        async fn list_newest_first(&self) -> Result<Vec<Order>> {
            let mut orders = self.shared.lock().unwrap().orders.clone();
            orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            Ok(orders)
        }
    }

    #[async_trait]
    impl TransactionalOrderRepository for InMemoryOrderRepository {
        async fn begin_transaction(&self) -> Result<Box<dyn OrderRepositoryTransaction>> {
            self.begun.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(InMemoryOrderTransaction {
                shared: self.shared.clone(),
                time_provider: self.time_provider.clone(),
                fail_saves: self.fail_saves.load(Ordering::SeqCst),
                staged: Vec::new(),
            }))
        }
    }

    /// Orders staged here become visible only on commit
    pub struct InMemoryOrderTransaction {
        shared: Arc<Mutex<Shared>>,
        time_provider: Arc<dyn TimeProvider>,
        fail_saves: bool,
        staged: Vec<Order>,
    }

    #[async_trait]
    impl Transaction for InMemoryOrderTransaction {
        async fn commit(self: Box<Self>) -> Result<()> {
            let this = *self;
            {
                let mut shared = this.shared.lock().unwrap();
                shared.orders.extend(this.staged);
                shared.commits += 1;
            }
            // Suspend once after the write lands, like a store round-trip
            tokio::task::yield_now().await;
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<()> {
            self.shared.lock().unwrap().rollbacks += 1;
            Ok(())
        }
    }

    #[async_trait]
    impl OrderRepositoryTransaction for InMemoryOrderTransaction {
        async fn save(&mut self, order: &NewOrder) -> Result<Order> {
            if self.fail_saves {
                return Err(AppError::Database("simulated save failure".to_string()));
            }

            // Ids are consumed even if the transaction rolls back
            let id = {
                let mut shared = self.shared.lock().unwrap();
                let id = shared.next_id;
                shared.next_id += 1;
                id
            };

            let saved = Order::from_new(id, self.time_provider.now_millis(), order.clone());
            self.staged.push(saved.clone());
            Ok(saved)
        }
    }
}
