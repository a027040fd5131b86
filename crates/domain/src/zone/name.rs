use crate::DomainError;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_LEN: usize = 255;

/// Appends the root label when missing. The empty name becomes the root.
pub fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

/// Trimmed, lowercased FQDN.
pub fn canonical(name: &str) -> String {
    fqdn(name.trim()).to_ascii_lowercase()
}

/// `label` placed directly under `zone`; `zone` must already be an FQDN.
pub fn child_name(label: &str, zone: &str) -> String {
    if zone == "." {
        format!("{}.", label)
    } else {
        format!("{}.{}", label, zone)
    }
}

pub fn validate_name(name: &str) -> Result<(), DomainError> {
    if name == "." {
        return Ok(());
    }
    if name.len() > MAX_NAME_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "{} exceeds {} bytes",
            name, MAX_NAME_LEN
        )));
    }

    let relative = name.strip_suffix('.').unwrap_or(name);
    for label in relative.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "{} has an empty label",
                name
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "label {} in {} exceeds {} bytes",
                label, name, MAX_LABEL_LEN
            )));
        }
    }
    Ok(())
}
