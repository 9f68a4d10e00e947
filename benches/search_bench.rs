use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use scriptparse::matching::{self, collapse_whitespace, ignore_case};
use scriptparse::{PatternConfig, Script, TranscriptParser};

// Synthetic transcript: alternating speakers, every third turn wrapped over two lines
fn transcript(turns: usize) -> String {
    let mut text = String::new();
    for i in 0..turns {
        let speaker = ["ALICE", "BOB", "CAROL"][i % 3];
        text.push_str(&format!("{speaker}: line {i} about the weather and the harbour\n"));
        if i % 3 == 0 {
            text.push_str("and something else entirely\n");
        }
    }
    text
}

fn parser() -> TranscriptParser {
    let config = PatternConfig::new("", "[A-Z]+", r":\s*", true)
        .expect("pattern compiles")
        .with_non_dialogue([r"^\[.*\]$"])
        .expect("non-dialogue compiles");
    TranscriptParser::new(config)
}

fn bench_parse(c: &mut Criterion) {
    let text = transcript(10_000);
    let parser = parser();

    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("multi_line_10k_turns", |b| {
        b.iter(|| Script::new(parser.parse_str(black_box(&text))))
    });
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let script = Script::new(parser().parse_str(&transcript(10_000)));

    let subset = script.search_function(matching::subset(), &[ignore_case()]);
    let wildcard = script.search_function(
        matching::wildcard_from_pattern(r"\*+").expect("marker compiles"),
        &[collapse_whitespace()],
    );

    let mut group = c.benchmark_group("search");
    // misses and late hits scan every entry
    group.bench_function("subset_miss", |b| {
        b.iter(|| subset.search(black_box("NEVER SAID")))
    });
    group.bench_function("wildcard_late_hit", |b| {
        b.iter(|| wildcard.search(black_box("line 9999*the harbour")))
    });
    group.bench_function("search_function_build", |b| {
        b.iter(|| script.search_function(matching::exact(), &[ignore_case(), matching::alphabet_only()]))
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_search);
criterion_main!(benches);
