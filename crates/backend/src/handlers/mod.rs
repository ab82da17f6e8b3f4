pub mod a004_match;
pub mod a007_fee;
pub mod a009_trial;
pub mod a010_announcement;
pub mod a011_event;
pub mod d400_role_dashboard;
pub mod records;
pub mod reports;
