//! Texture library listing and current room image lookup.
//!
//! DESIGN
//! ======
//! The processing service writes `IMG/room.jpg` after an upload and
//! `IMG/textured_room.jpg` after a texture is applied, both under the static
//! directory. The page host only reads those paths to pick what the room page
//! shows first; it never writes them.

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

use std::io;
use std::path::Path;

pub const TEXTURE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

pub const ROOM_IMAGE_FILE: &str = "IMG/room.jpg";
pub const TEXTURED_ROOM_FILE: &str = "IMG/textured_room.jpg";
pub const ROOM_IMAGE_URL: &str = "/static/IMG/room.jpg";
pub const TEXTURED_ROOM_URL: &str = "/static/IMG/textured_room.jpg";

/// `true` if `name` has a texture image extension (case-insensitive).
pub fn is_texture_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| TEXTURE_EXTENSIONS.iter().any(|t| ext.eq_ignore_ascii_case(t)))
}

/// List texture file names in `dir`, sorted by name.
///
/// # Errors
///
/// Returns an error if `dir` cannot be read.
pub async fn list_textures(dir: &Path) -> io::Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut textures = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            tracing::debug!(path = %entry.path().display(), "skipping non-UTF-8 texture name");
            continue;
        };
        if is_texture_file(&name) {
            textures.push(name);
        }
    }
    textures.sort();
    Ok(textures)
}

/// URL of the image the room page should show: the textured render if one
/// exists, else the uploaded room, else `None`.
pub async fn current_room_image(static_dir: &Path) -> Option<&'static str> {
    if is_file(&static_dir.join(TEXTURED_ROOM_FILE)).await {
        Some(TEXTURED_ROOM_URL)
    } else if is_file(&static_dir.join(ROOM_IMAGE_FILE)).await {
        Some(ROOM_IMAGE_URL)
    } else {
        None
    }
}

async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path).await.is_ok_and(|m| m.is_file())
}
