#[cfg(debug_assertions)]
pub fn get_cms_url() -> &'static str {
    match option_env!("SEALDESK_CMS_URL") {
        Some(url) => url,
        None => "http://localhost:1337", // Local CMS when running with trunk serve
    }
}

#[cfg(not(debug_assertions))]
pub fn get_cms_url() -> &'static str {
    match option_env!("SEALDESK_CMS_URL") {
        Some(url) => url,
        None => "https://cms.sealdesk.com",
    }
}

// Uploads live next to the api on the same host.
pub fn get_content_host() -> &'static str {
    get_cms_url()
}

/// How long the thank-you message stays up before a submitted form hides itself.
pub const FORM_SUCCESS_DELAY_MS: u32 = 3_000;

/// Scroll offset after which the navigation bar switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: i32 = 80;
