//! Routed pages: the public landing page, the role-dispatched dashboard
//! shell, and the three role dashboards.

pub mod dashboard;
pub mod doctor;
pub mod landing;
pub mod patient;
pub mod super_admin;
