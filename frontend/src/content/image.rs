use crate::config;

/// Absolute url for an image path coming out of the CMS.
///
/// Uploads are usually stored as `/uploads/...`; those get the content host
/// prepended. Anything already absolute is passed through untouched.
pub fn image_url(path: &str) -> String {
    with_host(config::get_content_host(), path)
}

fn with_host(host: &str, path: &str) -> String {
    let is_absolute = ["http://", "https://", "//", "data:"]
        .iter()
        .any(|prefix| path.starts_with(prefix));
    if is_absolute {
        return path.to_string();
    }
    format!(
        "{}/{}",
        host.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_get_exactly_one_slash() {
        assert_eq!(
            with_host("https://cms.example.com/", "/uploads/seal.webp"),
            "https://cms.example.com/uploads/seal.webp"
        );
        assert_eq!(
            with_host("https://cms.example.com", "uploads/seal.webp"),
            "https://cms.example.com/uploads/seal.webp"
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        for url in [
            "https://img.example.com/a.png",
            "http://img.example.com/a.png",
            "//img.example.com/a.png",
            "data:image/png;base64,AAAA",
        ] {
            assert_eq!(with_host("https://cms.example.com", url), url);
        }
    }
}
