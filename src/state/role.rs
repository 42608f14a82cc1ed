#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

/// Route for unauthenticated visitors and unrecognized roles.
pub const LANDING_ROUTE: &str = "/";

/// The closed set of account roles the backend issues.
///
/// Stored and backend-returned role strings are matched case-sensitively;
/// an unknown string fails deserialization and is treated as a corrupted
/// record by the session resolver. The looser signup-time aliases
/// (`admin`, `Doctor`, ...) go through [`Role::from_signup_alias`] and
/// never reach storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Role {
    SuperAdmin,
    Doctor,
    Patient,
}

impl Role {
    /// Parse a stored or backend-returned role string, case-sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "SuperAdmin" => Some(Self::SuperAdmin),
            "Doctor" => Some(Self::Doctor),
            "Patient" => Some(Self::Patient),
            _ => None,
        }
    }

    /// Normalize a signup user-type alias to a canonical role.
    ///
    /// Signup forms offer `admin`/`doctor`/`patient`; the backend expects
    /// the canonical role label (`admin` maps to `SuperAdmin`) in the
    /// payload's `userType` field. Matching is case-insensitive since the
    /// alias is user-facing input, not a stored role.
    pub fn from_signup_alias(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "admin" | "superadmin" => Some(Self::SuperAdmin),
            "doctor" => Some(Self::Doctor),
            "patient" => Some(Self::Patient),
            _ => None,
        }
    }

    /// Canonical role label, as the backend spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "SuperAdmin",
            Self::Doctor => "Doctor",
            Self::Patient => "Patient",
        }
    }

    /// Dashboard route for this role.
    pub fn dashboard_route(self) -> &'static str {
        match self {
            Self::SuperAdmin => "/super-admin",
            Self::Doctor => "/doctor",
            Self::Patient => "/patient",
        }
    }

    /// Role-scoped profile endpoint path for the given account id.
    pub fn profile_path(self, id: i64) -> String {
        match self {
            Self::SuperAdmin => format!("/api/super-admins/{id}"),
            Self::Doctor => format!("/api/doctors/{id}"),
            Self::Patient => format!("/api/patients/{id}"),
        }
    }
}
