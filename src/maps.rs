// Outbound map links for a listing's free-text location.

const EMBED_BASE: &str = "https://www.google.com/maps";
const SEARCH_BASE: &str = "https://www.google.com/maps/search/";

/// URL for the embedded map iframe. `None` for a blank location.
pub fn embed_url(location: &str) -> Option<String> {
    let query = encoded(location)?;
    Some(format!("{EMBED_BASE}?q={query}&output=embed"))
}

/// URL that opens the location in the maps app or site.
pub fn search_url(location: &str) -> Option<String> {
    let query = encoded(location)?;
    Some(format!("{SEARCH_BASE}?api=1&query={query}"))
}

fn encoded(location: &str) -> Option<String> {
    let location = location.trim();
    if location.is_empty() {
        return None;
    }
    Some(urlencoding::encode(location).into_owned())
}
