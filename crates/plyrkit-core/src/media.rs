//! Media type resolution
//!
//! Maps a source URL to a MIME type through its file extension. The source
//! attachment path deliberately leaves the `<source>` element's `type`
//! attribute unset and lets the browser sniff the container format, so this
//! resolver is exposed as a utility rather than wired into attachment.

/// File extensions the resolver recognizes
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["mp4", "webm", "ogg", "wmv", "avi"];

/// Resolve a video MIME type from a source URL
///
/// The extension is the substring after the final `.`, compared
/// case-insensitively. Unknown or missing extensions fall back to
/// `video/mp4`. Total: always returns a valid MIME string.
pub fn mime_for_url(url: &str) -> &'static str {
    let extension = url
        .rsplit('.')
        .next()
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "ogg" => "video/ogg",
        "wmv" => "video/x-ms-wmv",
        "avi" => "video/avi",
        _ => "video/mp4",
    }
}
