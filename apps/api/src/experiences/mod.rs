// Experience Store and matching: persisted job experiences and how they rank against
// the skills of a job description.

pub mod handlers;
pub mod matching;
pub mod models;
pub mod store;
