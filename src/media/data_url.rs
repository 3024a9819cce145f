//! `data:` URL helpers.

/// Drop a `data:<mime>;base64,` prefix, leaving bare base64.
pub fn strip_data_url_prefix(data: &str) -> &str {
    let trimmed = data.trim();
    if trimmed.starts_with("data:") {
        if let Some((_, payload)) = trimmed.split_once(',') {
            return payload;
        }
    }
    trimmed
}

/// MIME type declared by a `data:` URL, if any.
pub fn data_url_mime_type(data: &str) -> Option<&str> {
    let rest = data.trim().strip_prefix("data:")?;
    let (header, _) = rest.split_once(',')?;
    let mime = header.split(';').next()?;
    if mime.is_empty() {
        None
    } else {
        Some(mime)
    }
}

/// Build `data:{mime};base64,{data}`.
pub fn to_data_uri(mime_type: &str, base64_data: &str) -> String {
    format!("data:{};base64,{}", mime_type, base64_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_prefix() {
        assert_eq!(strip_data_url_prefix("data:audio/webm;base64,GkXf"), "GkXf");
        assert_eq!(strip_data_url_prefix("GkXf"), "GkXf");
        assert_eq!(strip_data_url_prefix("data:nocomma"), "data:nocomma");
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(
            data_url_mime_type("data:audio/webm;codecs=opus;base64,AA"),
            Some("audio/webm")
        );
        assert_eq!(data_url_mime_type("AA"), None);
        assert_eq!(data_url_mime_type("data:;base64,AA"), None);
    }

    #[test]
    fn test_to_data_uri() {
        assert_eq!(to_data_uri("image/png", "iVBOR"), "data:image/png;base64,iVBOR");
    }
}
