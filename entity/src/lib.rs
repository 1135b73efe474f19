pub mod answer;
pub mod evaluation;
pub mod notification;
pub mod settings;
pub mod user;

/*
 One evaluation per reviewee per period. Answers hang off the evaluation and
 cascade with it; notifications only reference it (append-only, never required
 for the evaluation itself to be correct).
 Evaluations are never hard-deleted: deleted_at marks the trash.
 */
