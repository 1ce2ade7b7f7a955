pub mod batch_toolbar;
pub mod chat_list;
