use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::output::transcript_writer::FileSystemError;
use crate::shared::constants::{AUDIO_CODEC, TEMP_AUDIO_PREFIX};
use crate::shared::filename::sanitize_title;

/// Value of the `v` query parameter, or the whole URL when there is none.
pub fn video_id(url: &str) -> &str {
    let query = match url.split_once('?') {
        Some((_, q)) => q,
        None => return url,
    };
    let query = query.split('#').next().unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, value)| *key == "v" && !value.is_empty())
        .map(|(_, value)| value)
        .unwrap_or(url)
}

/// Temp-directory path for a URL's audio, without extension.
pub fn temp_audio_path(temp_dir: &Path, url: &str) -> PathBuf {
    let id = sanitize_title(video_id(url));
    temp_dir.join(format!("{TEMP_AUDIO_PREFIX}{id}"))
}

/// Pick the download target and make sure its directory exists.
pub fn prepare_destination(
    url: &str,
    destination: Option<&Path>,
) -> Result<PathBuf, FileSystemError> {
    let Some(path) = destination else {
        return Ok(temp_audio_path(&std::env::temp_dir(), url));
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| FileSystemError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    Ok(path.to_path_buf())
}

/// Output template handed to yt-dlp for `requested`.
///
/// yt-dlp refuses an extension-less template when extracting audio, so the
/// extension is left as `%(ext)s` and the transcoded file lands at
/// `<requested>.mp3`. Literal `%` in the path is escaped as `%%`.
pub fn output_template(requested: &Path) -> OsString {
    let mut template = match requested.to_str() {
        Some(path) => OsString::from(path.replace('%', "%%")),
        None => requested.as_os_str().to_owned(),
    };
    template.push(".%(ext)s");
    template
}

/// The extractor appends the codec extension to the requested path when
/// transcoding; prefer that file if it exists.
pub fn resolve_downloaded_path(requested: &Path) -> PathBuf {
    let mut with_ext = requested.as_os_str().to_owned();
    with_ext.push(".");
    with_ext.push(AUDIO_CODEC);
    let with_ext = PathBuf::from(with_ext);
    if with_ext.exists() {
        with_ext
    } else {
        requested.to_path_buf()
    }
}
