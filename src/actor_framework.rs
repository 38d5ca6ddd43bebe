use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks and DTOs)
// =============================================================================

/// Trait that any stored marketplace record must implement to be managed by
/// [`ResourceActor`].
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    /// Short name used in spans and error messages ("product", "cart entry", ...)
    const KIND: &'static str;

    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and creation parameters
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    /// Apply a patch. The actor calls this on a copy and swaps the copy in,
    /// so a failed patch leaves the stored record untouched.
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;
}

/// Errors surfaced by the generic actor plumbing.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the response")]
    ActorDropped,
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("{0}")]
    Rejected(String),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    DeleteMany {
        ids: Vec<T::Id>,
        respond_to: Response<usize>,
    },
    Clear {
        respond_to: Response<usize>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns one collection. Insertion order is kept next to the map so listings
/// come back in the order records were added.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        Self::with_seed(buffer_size, Vec::new(), next_id_fn)
    }

    /// Like [`ResourceActor::new`], but starts with `seed` already stored.
    /// A seed record whose id repeats an earlier one replaces it in place.
    pub fn with_seed(
        buffer_size: usize,
        seed: Vec<T>,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let mut actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        for item in seed {
            actor.insert(item);
        }
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    fn insert(&mut self, item: T) {
        let id = item.id().clone();
        if self.store.insert(id.clone(), item).is_none() {
            self.order.push(id);
        }
    }

    fn remove(&mut self, id: &T::Id) -> Option<T> {
        let removed = self.store.remove(id)?;
        self.order.retain(|existing| existing != id);
        Some(removed)
    }

    fn not_found(id: &T::Id) -> FrameworkError {
        FrameworkError::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        }
    }

    #[instrument(name = "resource_actor", fields(kind = T::KIND), skip(self))]
    pub async fn run(mut self) {
        info!(seeded = self.order.len(), "Actor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let id = (self.next_id_fn)();
                    let result = match T::from_create_params(id.clone(), params) {
                        Ok(item) => {
                            self.insert(item.clone());
                            debug!(id = %id, "Created");
                            Ok(item)
                        }
                        Err(e) => {
                            warn!(error = %e, "Create rejected");
                            Err(FrameworkError::Rejected(e))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self
                        .order
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let result = match self.store.get(&id) {
                        Some(current) => {
                            let mut replacement = current.clone();
                            match replacement.on_update(patch) {
                                Ok(()) => {
                                    self.store.insert(id.clone(), replacement.clone());
                                    debug!(id = %id, "Replaced");
                                    Ok(replacement)
                                }
                                Err(e) => Err(FrameworkError::Rejected(e)),
                            }
                        }
                        None => Err(Self::not_found(&id)),
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let removed = self.remove(&id);
                    if removed.is_none() {
                        debug!(id = %id, "Delete of absent id ignored");
                    }
                    let _ = respond_to.send(Ok(removed));
                }
                ResourceRequest::DeleteMany { ids, respond_to } => {
                    let removed = ids.iter().filter(|id| self.remove(id).is_some()).count();
                    debug!(requested = ids.len(), removed, "Deleted batch");
                    let _ = respond_to.send(Ok(removed));
                }
                ResourceRequest::Clear { respond_to } => {
                    let removed = self.order.len();
                    self.store.clear();
                    self.order.clear();
                    let _ = respond_to.send(Ok(removed));
                }
            }
        }

        info!("Actor stopped");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to })
            .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn delete_many(&self, ids: Vec<T::Id>) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::DeleteMany { ids, respond_to })
            .await
    }

    pub async fn clear(&self) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Clear { respond_to })
            .await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
