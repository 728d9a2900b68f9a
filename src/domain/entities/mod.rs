//! Domain Entities

mod organization;

pub use organization::{Account, ManifestChange, Organization, OrganizationalUnit, Placement};
