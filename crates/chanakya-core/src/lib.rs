pub mod budget;
pub mod error;
pub mod message;
pub mod mood;
pub mod perma;
pub mod persona;
pub mod quick_reply;
pub mod user;

pub use budget::Budget;
pub use error::ChanakyaError;
pub use message::{ChatHistory, Message, Sender};
pub use mood::Mood;
pub use perma::{PermaScores, Pillar};
pub use persona::{Gender, Persona};
pub use quick_reply::{default_quick_replies, QuickReply};
pub use user::UserContext;
