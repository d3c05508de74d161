use super::*;

#[test]
fn missing_preferred_font_is_an_error() {
    let err = load_font_file(Path::new("no/such/arial.ttf")).unwrap_err();
    assert!(err.to_string().contains("arial.ttf"), "{err}");
}

#[test]
fn non_font_file_is_an_error() {
    let path =
        std::env::temp_dir().join(format!("chessline_not_a_font_{}.ttf", std::process::id()));
    std::fs::write(&path, b"this is not a font").unwrap();
    let res = load_font_file(&path);
    let _ = std::fs::remove_file(&path);
    assert!(res.is_err());
}

#[test]
fn missing_preferred_font_falls_back_to_system_face() {
    let resolved = resolve_font(Some(Path::new("no/such/arial.ttf")));
    if load_system_font().is_none() {
        eprintln!("skipping: no system font available");
        assert!(resolved.is_none());
        return;
    }
    let font = resolved.expect("system fallback");
    assert!(matches!(font.source, FontSource::System(_)));
    assert!(!font.bytes.is_empty());
}

#[test]
fn system_font_matches_resolve_without_preference() {
    let direct = load_system_font().map(|f| f.source);
    let resolved = resolve_font(None).map(|f| f.source);
    assert_eq!(direct, resolved);
}
