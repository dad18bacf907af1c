use crate::DomainError;

/// Splits a fully-qualified name into the prefix, if there is one, and the registrable root.
///
/// The name is expected to be lowercase and without a trailing dot.
///
/// # Errors
/// - `Empty` if the name is empty
/// - `MissingRoot` if the public suffix list has no registrable domain for the name
pub(crate) fn split_domain(name: &str) -> Result<(Option<&str>, &str), DomainError> {
    if name.is_empty() {
        return Err(DomainError::Empty(name.to_string()));
    }

    let root = psl::domain_str(name).ok_or_else(|| DomainError::MissingRoot(name.to_string()))?;
    let prefix = name
        .strip_suffix(root)
        .and_then(|p| p.strip_suffix('.'))
        .filter(|p| !p.is_empty());

    Ok((prefix, root))
}
