//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state and rendering. Cross-cutting
//! concerns (session context, navigation guard) live at the app shell.

pub mod admin;
pub mod analysis;
pub mod courses;
pub mod home;
pub mod lecturer;
pub mod login;
pub mod student_class_time;
pub mod students;
pub mod timetable;
pub mod venue;
