#![cfg(feature = "stl-io")]

use mobius::{MobiusStrip, Triangulated3D};

#[test]
fn strip_to_stl_ascii() {
    let strip = MobiusStrip::new(1.0, 0.4, 8).unwrap();
    let stl_str = strip.to_stl_ascii("test_strip");
    // Basic checks
    assert!(stl_str.starts_with("solid test_strip"));
    assert!(stl_str.contains("endsolid test_strip"));

    // One facet per triangle, three vertices each
    assert_eq!(stl_str.matches("facet normal").count(), strip.triangle_count());
    assert_eq!(stl_str.matches("vertex").count(), 3 * strip.triangle_count());
}

#[test]
fn strip_to_stl_binary_and_back() -> Result<(), Box<dyn std::error::Error>> {
    let strip = MobiusStrip::new(1.0, 0.4, 12).unwrap();
    let bytes = strip.to_stl_binary("strip")?;

    // 80 byte header + u32 count + 50 bytes per triangle
    assert_eq!(bytes.len(), 84 + 50 * strip.triangle_count());

    let mut cursor = std::io::Cursor::new(bytes);
    let mesh = stl_io::read_stl(&mut cursor)?;
    assert_eq!(mesh.faces.len(), 2 * 11 * 11);
    Ok(())
}

#[test]
fn write_stl_creates_parent_directories() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::temp_dir().join(format!("mobius-stl-{}", std::process::id()));
    let path = dir.join("nested").join("strip.stl");

    let strip = MobiusStrip::new(1.0, 0.4, 6).unwrap();
    strip.write_stl(&path)?;
    let written = std::fs::metadata(&path)?.len() as usize;
    assert_eq!(written, 84 + 50 * strip.triangle_count());

    let _ = std::fs::remove_dir_all(&dir);
    Ok(())
}

#[test]
fn write_stl_rejects_paths_without_a_file_name() {
    let strip = MobiusStrip::new(1.0, 0.4, 4).unwrap();
    assert!(strip.write_stl("..").is_err());
}
