use std::fs;

use super::*;

fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"img").unwrap();
}

#[test]
fn texture_extensions_are_case_insensitive() {
    assert!(is_texture_file("oak.jpg"));
    assert!(is_texture_file("oak.JPEG"));
    assert!(is_texture_file("brick.Png"));
    assert!(!is_texture_file("notes.txt"));
    assert!(!is_texture_file("jpg"));
    assert!(!is_texture_file("archive.png.zip"));
}

#[tokio::test]
async fn list_textures_filters_and_sorts() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("walnut.png"));
    touch(&dir.path().join("brick.JPG"));
    touch(&dir.path().join("README.md"));
    fs::create_dir(dir.path().join("folder.png")).unwrap();

    let textures = list_textures(dir.path()).await.unwrap();
    assert_eq!(textures, vec!["brick.JPG".to_string(), "walnut.png".to_string()]);
}

#[tokio::test]
async fn list_textures_missing_dir_is_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(list_textures(&dir.path().join("nope")).await.is_err());
}

#[tokio::test]
async fn room_image_absent_when_nothing_uploaded() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(current_room_image(dir.path()).await, None);
}

#[tokio::test]
async fn room_image_prefers_textured_render() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join(ROOM_IMAGE_FILE));
    assert_eq!(current_room_image(dir.path()).await, Some(ROOM_IMAGE_URL));

    touch(&dir.path().join(TEXTURED_ROOM_FILE));
    assert_eq!(current_room_image(dir.path()).await, Some(TEXTURED_ROOM_URL));
}
