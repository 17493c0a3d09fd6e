pub mod uploaded_file;
pub mod search_entry;
pub mod alert;
pub mod user;

pub use uploaded_file::UploadedFile;
pub use search_entry::SearchEntry;
pub use alert::Alert;
pub use user::User;
