use crate::RequestStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A directed record of one user's intent to connect with another.
///
/// Sender and recipient are weak references: if the referenced user is deleted
/// the side becomes `None` and the row survives as an orphaned historical
/// record. `created_at` is set once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendRequest {
    pub id: Uuid,
    pub sender_id: Option<Uuid>,
    pub recipient_id: Option<Uuid>,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

impl FriendRequest {
    pub fn new(sender_id: Uuid, recipient_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender_id: Some(sender_id),
            recipient_id: Some(recipient_id),
            status: RequestStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// The user on the other side of this request relative to `viewer_id`.
    ///
    /// This is the projection that turns a directed accepted edge into a
    /// symmetric friends view: the viewer always sees the counterpart, never
    /// themselves. Returns `None` when the counterpart was deleted.
    pub fn counterpart_of(&self, viewer_id: Uuid) -> Option<Uuid> {
        if self.sender_id == Some(viewer_id) {
            self.recipient_id
        } else {
            self.sender_id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_request_starts_pending() {
        let request = FriendRequest::new(Uuid::new_v4(), Uuid::new_v4());
        assert_eq!(request.status, RequestStatus::Pending);
    }

    #[test]
    fn counterpart_is_the_other_side_for_both_viewers() {
        let sender = Uuid::new_v4();
        let recipient = Uuid::new_v4();
        let request = FriendRequest::new(sender, recipient);

        assert_eq!(request.counterpart_of(sender), Some(recipient));
        assert_eq!(request.counterpart_of(recipient), Some(sender));
    }

    #[test]
    fn counterpart_of_orphaned_request_is_none() {
        let sender = Uuid::new_v4();
        let mut request = FriendRequest::new(sender, Uuid::new_v4());
        request.recipient_id = None;

        assert_eq!(request.counterpart_of(sender), None);
    }
}
