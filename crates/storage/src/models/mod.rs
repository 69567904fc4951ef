mod event;
mod fight;
mod fight_result;
mod pick;
mod user;

pub use event::Event;
pub use fight::Fight;
pub use fight_result::{FightResult, FinishMethod};
pub use pick::{Pick, PickSubmission};
pub use user::User;
