//! MIME type detection from file extensions.
//!
//! The archive redirects image requests to the stored file, so the final
//! URL's extension tells us what we got back.

use url::Url;

/// MIME type for a file extension (without the dot), case-insensitive
pub fn from_extension(ext: &str) -> Option<&'static str> {
    let mime = match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" | "jpe" => "image/jpeg",
        "png" => "image/png",
        "apng" => "image/apng",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "ico" => "image/vnd.microsoft.icon",
        "tif" | "tiff" => "image/tiff",
        "svg" | "svgz" => "image/svg+xml",
        "avif" => "image/avif",
        "heic" => "image/heic",
        "heif" => "image/heif",
        "jxl" => "image/jxl",
        "jp2" | "j2k" => "image/jp2",
        "jpx" | "jpf" => "image/jpx",
        "pdf" => "application/pdf",
        _ => return None,
    };
    Some(mime)
}

/// MIME type for the last path segment of `url`, empty when unknown
pub fn from_url(url: &Url) -> &'static str {
    url.path_segments()
        .and_then(|mut segments| segments.next_back())
        .and_then(|name| name.rsplit_once('.'))
        .and_then(|(_, ext)| from_extension(ext))
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mime_of(url: &str) -> &'static str {
        from_url(&Url::parse(url).unwrap())
    }

    #[test]
    fn test_known_extensions() {
        assert_eq!(from_extension("jpg"), Some("image/jpeg"));
        assert_eq!(from_extension("JPEG"), Some("image/jpeg"));
        assert_eq!(from_extension("png"), Some("image/png"));
        assert_eq!(from_extension("pdf"), Some("application/pdf"));
        assert_eq!(from_extension("exe"), None);
    }

    #[test]
    fn test_less_common_image_formats() {
        assert_eq!(from_extension("ico"), Some("image/vnd.microsoft.icon"));
        assert_eq!(from_extension("jp2"), Some("image/jp2"));
        assert_eq!(from_extension("JPX"), Some("image/jpx"));
        assert_eq!(from_extension("jxl"), Some("image/jxl"));
        assert_eq!(from_extension("heic"), Some("image/heic"));
        assert_eq!(mime_of("http://localhost/img/favicon.ico"), "image/vnd.microsoft.icon");
    }

    #[test]
    fn test_from_url() {
        assert_eq!(
            mime_of("https://archive.org/download/mbid-x/mbid-x-829521842_thumb250.jpg"),
            "image/jpeg"
        );
        assert_eq!(mime_of("http://localhost/img/cover.PNG"), "image/png");
    }

    #[test]
    fn test_query_does_not_leak_into_extension() {
        assert_eq!(mime_of("http://localhost/img/cover.gif?v=1.2"), "image/gif");
    }

    #[test]
    fn test_unknown_or_missing_extension_is_empty() {
        assert_eq!(mime_of("http://localhost/release/x/front-250"), "");
        assert_eq!(mime_of("http://localhost/img/cover.xyz"), "");
        assert_eq!(mime_of("http://localhost/"), "");
    }
}
