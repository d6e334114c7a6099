pub mod auth;
pub mod client;
pub mod config;
pub mod models;

pub use auth::{AccountCredentials, AuthError, AuthManager};
pub use client::{CreateMeetingOutcome, ZoomClient};
pub use models::{MeetingSettings, ZoomMeetingRequest};
