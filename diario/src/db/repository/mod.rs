mod conversations;
mod diary;
mod users;

pub use conversations::ConversationRepository;
pub use diary::DiaryRepository;
pub use users::UserRepository;
