use url::Url;

use super::{AccessError, AccessKeys, Role};

/// Resolves the role for a presented credential.
///
/// The admin key is checked first, so a deployment that configures the same
/// secret twice grants admin. Returns `None` for a missing or unknown credential.
///
/// # Examples
///
/// ```
/// use shiftsync_core::access::{resolve_role, AccessKeys, Role};
///
/// let keys = AccessKeys::new(Some("boss".into()), Some("crew".into()));
/// assert_eq!(resolve_role(&keys, Some("crew")), Some(Role::User));
/// assert_eq!(resolve_role(&keys, Some("guess")), None);
/// assert_eq!(resolve_role(&keys, None), None);
/// ```
pub fn resolve_role(keys: &AccessKeys, credential: Option<&str>) -> Option<Role> {
    let credential = credential.filter(|c| !c.is_empty())?;

    if keys.admin.as_deref() == Some(credential) {
        Some(Role::Admin)
    } else if keys.user.as_deref() == Some(credential) {
        Some(Role::User)
    } else {
        None
    }
}

/// Extracts the credential from an access link such as
/// `https://host/?key=secret` or its short form `?k=secret`.
///
/// `key` wins over `k` when both are present.
pub fn credential_from_link(link: &str) -> Result<String, AccessError> {
    let url = Url::parse(link.trim()).map_err(|e| AccessError::InvalidLink(e.to_string()))?;

    let mut short = None;
    for (name, value) in url.query_pairs() {
        if value.is_empty() {
            continue;
        }
        match name.as_ref() {
            "key" => return Ok(value.into_owned()),
            "k" if short.is_none() => short = Some(value.into_owned()),
            _ => {}
        }
    }

    short.ok_or(AccessError::MissingKey)
}
