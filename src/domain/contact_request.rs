use crate::domain::EmailAddress;

/// A contact submission that passed the relay's server-side checks.
///
/// Transient by design: built from the request payload, consumed by the
/// notification dispatch, never stored. There is no identifier and no
/// update path.
#[derive(Debug)]
pub struct ContactRequest {
    pub name: String,
    pub email: EmailAddress,
    pub country: String,
    pub service: String,
    pub description: String,
    pub recipient: String,
}
