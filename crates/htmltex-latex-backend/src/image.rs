//! `<img>` conversion: local naming, best-effort retrieval, `\includegraphics`.

use std::fs;
use std::path::{Path, PathBuf};

use htmltex_dom::Element;
use rand::distributions::Alphanumeric;
use rand::Rng;
use url::Url;

use crate::fetch::FetchError;
use crate::templates::{self, ImageLayout};
use crate::RenderContext;

/// Subdirectory of the compilation directory holding retrieved images.
pub const IMAGES_DIR: &str = "images";

const DEFAULT_EXTENSION: &str = "jpg";
const SHORT_ID_LEN: usize = 9;

/// Random alphanumeric identifier used for generated image names.
pub fn generate_short_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SHORT_ID_LEN)
        .map(char::from)
        .collect()
}

/// Convert an `<img>` element. `None` when it has no `src`.
///
/// A missing local file triggers a fetch of `src` when it is an absolute URL.
/// Every retrieval failure is swallowed; the template still points at the
/// local path.
pub fn convert_image(el: &Element, cx: &RenderContext<'_>) -> Option<String> {
    let src = el.attr("src")?;
    let options = cx.options();
    let file_name = local_file_name(src, options.autogen_image_names, cx.id_source());
    let images_dir = cx.compilation_dir().join(IMAGES_DIR);
    let local_path = images_dir.join(&file_name);

    if !local_path.exists() {
        if let Err(err) = retrieve(src, &images_dir, &local_path, cx) {
            if options.debug {
                log::debug!("image not retrieved: {}", src);
                log::debug!("{}", err);
            }
        }
    }

    let layout = ImageLayout {
        width: options.image_width.as_deref(),
        height: options.image_height.as_deref(),
        keep_aspect_ratio: options.keep_image_aspect_ratio,
        centered: options.center_images,
    };
    Some(templates::image(&format!("{}/{}", IMAGES_DIR, file_name), &layout))
}

fn retrieve(
    src: &str,
    images_dir: &Path,
    local_path: &Path,
    cx: &RenderContext<'_>,
) -> Result<(), FetchError> {
    let url = Url::parse(src).map_err(|e| FetchError::NotAUrl {
        src: src.to_string(),
        message: e.to_string(),
    })?;
    fs::create_dir_all(images_dir)?;
    cx.fetcher().fetch(&url, local_path)
}

/// Local file name for `src`: either the source base name or a generated id
/// carrying the source extension.
pub fn local_file_name(src: &str, autogen: bool, id_source: fn() -> String) -> String {
    let path = source_path(src);
    let base = Path::new(&path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty());

    match base {
        Some(base) if !autogen => base,
        _ => {
            let extension = Path::new(&path)
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .filter(|ext| !ext.is_empty())
                .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());
            format!("{}.{}", id_source(), extension)
        }
    }
}

/// Path part of `src`, without scheme, host, query or fragment.
fn source_path(src: &str) -> PathBuf {
    match Url::parse(src) {
        Ok(url) if url.cannot_be_a_base() => PathBuf::new(),
        Ok(url) => PathBuf::from(url.path()),
        Err(_) => {
            let end = src.find(['?', '#']).unwrap_or(src.len());
            PathBuf::from(&src[..end])
        }
    }
}
