//! Input validation utilities

/// Validate that an email belongs to the university domain.
///
/// `domain` is the required suffix including the `@`, e.g. `@cse.bubt.edu.bd`.
pub fn validate_university_email(email: &str, domain: &str) -> Result<(), String> {
    let email = email.trim();
    let Some(local) = email.strip_suffix(domain) else {
        return Err(format!("Must use university email ({domain})"));
    };
    if local.is_empty() || local.contains('@') {
        return Err("Invalid email address".to_string());
    }
    Ok(())
}

/// Parse an optional filter, treating blank and `ALL` as "no filter"
pub fn parse_filter<T: std::str::FromStr>(value: Option<&str>) -> Result<Option<T>, String> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.eq_ignore_ascii_case(crate::constants::FILTER_ALL) => Ok(None),
        Some(v) => v
            .to_ascii_uppercase()
            .parse()
            .map(Some)
            .map_err(|_| format!("Invalid filter value: {v}")),
    }
}
