use std::io::Cursor;

use image::AnimationDecoder;
use image::codecs::gif::GifDecoder;

use super::*;

fn cfg(width: u32, height: u32, frame_count: u64) -> SinkConfig {
    SinkConfig {
        width,
        height,
        frame_delay_ms: 2000,
        frame_count,
    }
}

fn solid(width: u32, height: u32, rgb: [u8; 3]) -> image::RgbaImage {
    image::RgbaImage::from_pixel(width, height, image::Rgba([rgb[0], rgb[1], rgb[2], 255]))
}

#[test]
fn encodes_looping_gif_with_fixed_delay() {
    let mut sink = GifSink::new(GifSinkOpts::in_memory());
    sink.begin(cfg(8, 6, 3)).unwrap();
    for (i, rgb) in [[255, 0, 0], [0, 0, 255], [255, 0, 0]].into_iter().enumerate() {
        sink.push_frame(FrameIndex(i as u64), &solid(8, 6, rgb))
            .unwrap();
    }
    sink.end().unwrap();

    let bytes = sink.into_bytes().unwrap();
    assert!(bytes.starts_with(b"GIF89a"));
    assert!(
        bytes.windows(11).any(|w| w == b"NETSCAPE2.0"),
        "missing loop extension"
    );

    let frames = GifDecoder::new(Cursor::new(bytes))
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap();
    assert_eq!(frames.len(), 3);
    for f in &frames {
        let (num, den) = f.delay().numer_denom_ms();
        assert_eq!(num / den, 2000);
        assert_eq!(f.buffer().dimensions(), (8, 6));
    }
    let p = frames[1].buffer().get_pixel(4, 3).0;
    assert!(p[2] > 200 && p[0] < 50, "{p:?}");
}

#[test]
fn writes_file_when_path_given() {
    let path = temp_gif_path();
    let mut sink = GifSink::new(GifSinkOpts::new(&path));
    sink.begin(cfg(4, 4, 2)).unwrap();
    sink.push_frame(FrameIndex(0), &solid(4, 4, [0, 0, 0])).unwrap();
    sink.push_frame(FrameIndex(1), &solid(4, 4, [255, 255, 255]))
        .unwrap();
    sink.end().unwrap();

    let on_disk = std::fs::read(&path).unwrap();
    assert_eq!(Some(on_disk.as_slice()), sink.bytes());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn rejects_out_of_order_and_mismatched_frames() {
    let mut sink = GifSink::new(GifSinkOpts::in_memory());
    sink.begin(cfg(4, 4, 2)).unwrap();
    assert!(
        sink.push_frame(FrameIndex(1), &solid(4, 4, [0, 0, 0]))
            .is_err()
    );
    assert!(
        sink.push_frame(FrameIndex(0), &solid(5, 4, [0, 0, 0]))
            .is_err()
    );
}

#[test]
fn rejects_use_before_begin_and_bad_config() {
    let mut sink = GifSink::new(GifSinkOpts::in_memory());
    assert!(
        sink.push_frame(FrameIndex(0), &solid(1, 1, [0, 0, 0]))
            .is_err()
    );
    assert!(sink.end().is_err());
    assert!(sink.begin(cfg(0, 4, 2)).is_err());

    let mut slow = GifSink::new(GifSinkOpts {
        out_path: None,
        speed: 0,
    });
    assert!(slow.begin(cfg(4, 4, 2)).is_err());
}

#[test]
fn temp_paths_are_unique() {
    let a = temp_gif_path();
    let b = temp_gif_path();
    assert_ne!(a, b);
    assert_eq!(a.extension().and_then(|e| e.to_str()), Some("gif"));
}

#[test]
fn download_name_is_fixed() {
    assert_eq!(DOWNLOAD_FILE_NAME, "output.gif");
}
