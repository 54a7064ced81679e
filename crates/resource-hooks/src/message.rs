//! # Generic Messages
//!
//! Message types exchanged between [`RemoteClient`](crate::RemoteClient) and
//! [`RemoteActor`](crate::RemoteActor).

use crate::entity::RemoteEntity;
use crate::error::AdapterError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the backend.
pub type Response<T> = oneshot::Sender<Result<T, AdapterError>>;

/// Request sent to a remote backend.
///
/// Reads take no input. Writes (`Update`, `Action`) answer with the whole document,
/// `Remove` answers with unit. `FailNext` is a control message used to simulate a
/// transport failure on the next request.
#[derive(Debug)]
pub enum RemoteRequest<T: RemoteEntity> {
    Get {
        respond_to: Response<T>,
    },
    Update {
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Remove {
        id: T::ItemId,
        respond_to: Response<()>,
    },
    Action {
        action: T::Action,
        respond_to: Response<T>,
    },
    FailNext {
        reason: String,
        respond_to: Response<()>,
    },
}
