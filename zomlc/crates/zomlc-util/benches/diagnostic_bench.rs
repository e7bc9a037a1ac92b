use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zomlc_util::diagnostic::{DiagID, DiagnosticEngine};
use zomlc_util::span::{SourceLoc, SourceManager, SourceRange};

fn bench_emit_simple(c: &mut Criterion) {
    let engine = DiagnosticEngine::new();
    c.bench_function("diagnose_emit_no_args", |b| {
        b.iter(|| {
            engine
                .diagnose(DiagID::LEX_UNTERMINATED_STRING, SourceRange::DUMMY)
                .emit();
        })
    });
}

fn bench_emit_with_args(c: &mut Criterion) {
    let engine = DiagnosticEngine::new();
    c.bench_function("diagnose_emit_with_args", |b| {
        b.iter(|| {
            engine
                .diagnose(DiagID::PARSE_EXPECTED_TOKEN, SourceRange::DUMMY)
                .arg("')'")
                .arg("'}'")
                .emit();
        })
    });
}

fn bench_render_snippet(c: &mut Criterion) {
    let mut sm = SourceManager::new();
    let id = sm.add_buffer("main.zom", "fun main() {\n    let x = 1\n}\n");
    let range = SourceRange::new(SourceLoc::new(id, 17), SourceLoc::new(id, 18));
    c.bench_function("render_snippet", |b| {
        b.iter(|| black_box(sm.render_snippet(range)))
    });
}

criterion_group!(benches, bench_emit_simple, bench_emit_with_args, bench_render_snippet);
criterion_main!(benches);
