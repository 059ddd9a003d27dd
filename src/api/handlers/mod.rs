mod admin;
mod files;
mod intents;
mod uploads;

pub use admin::{admin_purge, health};
pub use files::{delete_file, get_file, list_files, store_upload, upload_file};
pub use intents::post_intent;
pub use uploads::serve_upload;
