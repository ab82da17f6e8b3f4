pub mod aggregate;
pub mod seed;

pub use aggregate::{Announcement, AnnouncementForm, AnnouncementStatus, Audience, Priority};
