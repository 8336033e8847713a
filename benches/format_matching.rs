//! Benchmarks for filename matching.
//!
//! Matching runs once per candidate file per registered format during
//! library scans, so the hot path is the extension loop.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mediakind::{FormatDescriptor, FormatIdentifier, MatchState, MediaKind};

fn formats() -> Vec<FormatDescriptor> {
    vec![
        FormatDescriptor::new(FormatIdentifier::Mp3, MediaKind::AUDIO)
            .with_extensions(["mp3", "mpa"]),
        FormatDescriptor::new(FormatIdentifier::Mkv, MediaKind::VIDEO)
            .with_extensions(["mkv", "mka", "webm"]),
        FormatDescriptor::new(FormatIdentifier::Jpg, MediaKind::IMAGE)
            .with_extensions(["jpg", "jpeg", "jpe"]),
        FormatDescriptor::new(FormatIdentifier::SubRip, MediaKind::SUBTITLE)
            .with_extensions(["srt"]),
        FormatDescriptor::new(FormatIdentifier::Flac, MediaKind::AUDIO)
            .with_extensions(["flac", "fla"]),
    ]
}

fn bench_match_filename(c: &mut Criterion) {
    let formats = formats();

    c.bench_function("match_hit_first_extension", |b| {
        let mkv = &formats[1];
        b.iter(|| {
            let mut state = MatchState::new();
            black_box(mkv.match_filename(black_box("Show.S01E01.1080p.mkv"), &mut state))
        })
    });

    c.bench_function("match_miss_all_extensions", |b| {
        let mkv = &formats[1];
        b.iter(|| {
            let mut state = MatchState::new();
            black_box(mkv.match_filename(black_box("Show.S01E01.1080p.avi"), &mut state))
        })
    });

    c.bench_function("match_rejects_uri", |b| {
        let mp3 = &formats[0];
        b.iter(|| {
            let mut state = MatchState::new();
            black_box(mp3.match_filename(black_box("http://radio.example/stream.mp3"), &mut state))
        })
    });

    c.bench_function("scan_all_formats_for_file", |b| {
        b.iter(|| {
            let mut state = MatchState::new();
            formats
                .iter()
                .find(|f| f.match_filename(black_box("Album/01 - Track.flac"), &mut state))
                .map(FormatDescriptor::identifier)
        })
    });
}

fn bench_skip(c: &mut Criterion) {
    let mkv = FormatDescriptor::new(FormatIdentifier::Mkv, MediaKind::VIDEO)
        .with_extensions(["mkv"]);
    let mut state = MatchState::new();
    assert!(mkv.match_filename("movie.mkv", &mut state));

    c.bench_function("skip_grouped_extensions", |b| {
        b.iter(|| black_box(state.skip(black_box(&["avi, mp4, mkv", "webm"]))))
    });
}

criterion_group!(benches, bench_match_filename, bench_skip);
criterion_main!(benches);
