use serde::Serialize;

/// One attendance outcome. Written with overwrite semantics: the last
/// evaluation for an (email, date) pair wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipationRecord {
    pub email: String,
    pub name: String,
    pub session_date: String,
    pub participation: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticipationResponse {
    pub message: String,
    pub text_match: bool,
    pub face_match: bool,
    pub participation_status: bool,
    pub target_key: String,
    pub extracted_text: Vec<String>,
}
