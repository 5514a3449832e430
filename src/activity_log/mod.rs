// src/activity_log/mod.rs

mod api;
mod model;
mod store;

pub use api::{recent_activity, record_activity, take_storage_warn_pending};

pub use model::{ActivityClass, ActivityEvent};

pub use store::ActivityLog;
