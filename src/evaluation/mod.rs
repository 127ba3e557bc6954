pub mod face_match;
pub mod parser;
pub mod pipeline;
pub mod request;
pub mod text_match;
pub mod upload;

/// A participant attended if either signal found them.
pub fn decide(text_match: bool, face_match: bool) -> bool {
    text_match || face_match
}
