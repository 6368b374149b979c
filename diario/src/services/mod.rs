mod chat;
mod diary;

pub use chat::ChatService;
pub use diary::DiaryService;
