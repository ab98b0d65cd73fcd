pub mod preview_users_routine;
pub mod sync_users_routine;
