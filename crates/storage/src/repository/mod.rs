pub mod event;
pub mod fight;
pub mod fight_result;
pub mod pick_submission;
pub mod user;
