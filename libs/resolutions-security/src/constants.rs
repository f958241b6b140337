//! Well-known authority names used by the resolutions service.

/// Coarse administrative role. Expands into the elevated fine-grained authorities.
pub const ADMIN_ROLE: &str = "ROLE_ADMIN";

/// Permission to read resolutions.
pub const RESOLUTION_READ: &str = "resolution:read";

/// Permission to create and modify resolutions.
pub const RESOLUTION_WRITE: &str = "resolution:write";
