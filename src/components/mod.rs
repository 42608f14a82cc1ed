//! Reusable UI components: the route guard, auth dialogs, and navbar.

pub mod login_dialog;
pub mod navbar;
pub mod route_guard;
pub mod signup_dialog;
pub mod verify_dialog;
