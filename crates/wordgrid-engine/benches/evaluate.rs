// Criterion benchmarks for the board evaluator.
//
// Requires a compiled dictionary file. Set WORDGRID_DICT_PATH to the
// words.dat file (or the directory containing it); if no dictionary is
// found the benchmarks print a message and run no-op iterations.
//
// Run:
//   WORDGRID_DICT_PATH=/path/to/words.dat cargo bench -p wordgrid-engine

use criterion::{criterion_group, criterion_main, Criterion};

use wordgrid_dawg::Dawg;
use wordgrid_engine::{analyse, BoardGenerator, Constraints, DiceSet, ScoreTable};

fn find_dictionary() -> Option<std::path::PathBuf> {
    let candidate = std::path::PathBuf::from(std::env::var("WORDGRID_DICT_PATH").ok()?);
    if candidate.is_file() {
        return Some(candidate);
    }
    let nested = candidate.join("words.dat");
    nested.is_file().then_some(nested)
}

fn bench_analyse(c: &mut Criterion) {
    let Some(path) = find_dictionary() else {
        eprintln!("SKIP: set WORDGRID_DICT_PATH to benchmark against a dictionary");
        return;
    };
    let dawg = Dawg::load(&path).expect("dictionary loads");
    let scores = ScoreTable::standard();

    c.bench_function("analyse_4x4", |b| {
        b.iter(|| analyse(&dawg, &scores, 4, 4, "ADYERESTLPNAGIE1").unwrap())
    });
}

fn bench_generate(c: &mut Criterion) {
    let Some(path) = find_dictionary() else {
        return;
    };
    let dawg = Dawg::load(&path).expect("dictionary loads");
    let constraints = Constraints {
        min_words: 60,
        min_score: 1,
        min_longest: 6,
        min_legal_len: 3,
        ..Constraints::unbounded()
    };

    c.bench_function("generate_60_words", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            let dice = DiceSet::standard("4").unwrap();
            let mut generator =
                BoardGenerator::new(&dawg, dice, ScoreTable::standard(), 4, 4).unwrap();
            seed += 1;
            generator.generate(&constraints, 5000, seed)
        })
    });
}

criterion_group!(benches, bench_analyse, bench_generate);
criterion_main!(benches);
