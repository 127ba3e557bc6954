mod participation;
mod photo;

pub use participation::{ParticipationRecord, ParticipationResponse};
pub use photo::PhotoReference;
