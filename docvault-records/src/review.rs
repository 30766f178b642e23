//! Review collaborator: one-shot verification of sealed records.
//!
//! Review state lives on the record but is never touched by
//! `DocumentService`; this module is the only mutator. A record moves
//! from `Pending` to exactly one terminal state and never back.

use crate::error::{RecordError, RecordResult};
use crate::record::{EncryptedRecord, ReviewState};
use chrono::Utc;
use tracing::debug;

/// Terminal outcome of a review.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewDecision {
    Accept,
    Reject,
}

/// Applies a review decision to a pending record.
///
/// Sets the terminal state, the reviewer reference, the review timestamp,
/// and optional comments. Fails with [`RecordError::AlreadyReviewed`] if
/// the record has already left the pending state; ciphertext fields are
/// never touched.
pub fn apply_review(
    record: &mut EncryptedRecord,
    decision: ReviewDecision,
    reviewer_ref: &str,
    comments: Option<&str>,
) -> RecordResult<()> {
    if record.review_state != ReviewState::Pending {
        return Err(RecordError::AlreadyReviewed {
            current: record.review_state.to_string(),
        });
    }

    record.review_state = match decision {
        ReviewDecision::Accept => ReviewState::Accepted,
        ReviewDecision::Reject => ReviewState::Rejected,
    };
    record.reviewer_ref = Some(reviewer_ref.to_string());
    record.reviewed_at = Some(Utc::now());
    record.review_comments = comments.map(str::to_string);

    debug!(record_id = %record.id, state = %record.review_state, "review applied");

    Ok(())
}
