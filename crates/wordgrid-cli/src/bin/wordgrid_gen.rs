// wordgrid-gen: roll a board that satisfies the given constraints.
//
// Usage:
//   wordgrid-gen [-d DICT_PATH] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Dictionary file (or directory with words.dat)
//   --set NAME             Standard dice set (default "4")
//   --width N --height N   Board dimensions (default from the dice set)
//   --min-words N          Fewest words required (default 1)
//   --max-words N          Most words allowed, -1 unbounded (default -1)
//   --min-score N          Lowest total score (default 1)
//   --max-score N          Highest total score, -1 unbounded (default -1)
//   --min-longest N        Shortest acceptable longest word (default 3)
//   --max-longest N        Longest allowed word, -1 unbounded (default -1)
//   --min-legal N          Shortest word that counts (default 3)
//   --tries N              Roll budget (default 1000)
//   --seed N               RNG seed (default 1)
//   --no-prefilter         Search every roll, skip the statistical filter
//   -h, --help             Print this help

use wordgrid_engine::{tile, BoardGenerator, Constraints, DiceSet, ScoreTable};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, mut args) = wordgrid_cli::parse_dict_path(&args);

    if wordgrid_cli::wants_help(&args) {
        println!("wordgrid-gen: roll a board that satisfies the given constraints.");
        println!();
        println!("Usage: wordgrid-gen [-d DICT_PATH] [OPTIONS]");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file (or directory with words.dat)");
        println!("  --set NAME             Standard dice set (default \"4\")");
        println!("  --width N --height N   Board dimensions (default from the dice set)");
        println!("  --min-words N          Fewest words required (default 1)");
        println!("  --max-words N          Most words allowed, -1 unbounded (default -1)");
        println!("  --min-score N          Lowest total score (default 1)");
        println!("  --max-score N          Highest total score, -1 unbounded (default -1)");
        println!("  --min-longest N        Shortest acceptable longest word (default 3)");
        println!("  --max-longest N        Longest allowed word, -1 unbounded (default -1)");
        println!("  --min-legal N          Shortest word that counts (default 3)");
        println!("  --tries N              Roll budget (default 1000)");
        println!("  --seed N               RNG seed (default 1)");
        println!("  --no-prefilter         Search every roll, skip the statistical filter");
        println!("  -h, --help             Print this help");
        return;
    }

    let set_name = wordgrid_cli::take_flag(&mut args, "--set").unwrap_or_else(|| "4".to_string());
    let dice = DiceSet::standard(&set_name).unwrap_or_else(|e| wordgrid_cli::fatal(&e.to_string()));

    // Standard sets are square; an explicit width/height overrides.
    let edge = (dice.len() as f64).sqrt() as usize;
    let width = wordgrid_cli::take_int_flag(&mut args, "--width", edge);
    let height = wordgrid_cli::take_int_flag(&mut args, "--height", edge);

    let constraints = Constraints {
        min_words: wordgrid_cli::take_int_flag(&mut args, "--min-words", 1),
        max_words: wordgrid_cli::take_int_flag(&mut args, "--max-words", -1),
        min_score: wordgrid_cli::take_int_flag(&mut args, "--min-score", 1),
        max_score: wordgrid_cli::take_int_flag(&mut args, "--max-score", -1),
        min_longest: wordgrid_cli::take_int_flag(&mut args, "--min-longest", 3),
        max_longest: wordgrid_cli::take_int_flag(&mut args, "--max-longest", -1),
        min_legal_len: wordgrid_cli::take_int_flag(&mut args, "--min-legal", 3),
    };
    let tries: u32 = wordgrid_cli::take_int_flag(&mut args, "--tries", 1000);
    let seed: u64 = wordgrid_cli::take_int_flag(&mut args, "--seed", 1);
    let no_prefilter = args.iter().any(|a| a == "--no-prefilter");

    let dawg = wordgrid_cli::load_dawg(dict_path.as_deref())
        .unwrap_or_else(|e| wordgrid_cli::fatal(&e));

    let mut generator = BoardGenerator::new(&dawg, dice, ScoreTable::standard(), width, height)
        .unwrap_or_else(|e| wordgrid_cli::fatal(&e.to_string()));
    generator.set_prefilter(!no_prefilter);

    let Some(board) = generator.generate(&constraints, tries, seed) else {
        eprintln!("no board satisfied the constraints within {tries} tries");
        std::process::exit(2);
    };

    let layout = board.layout.as_bytes();
    for row in layout.chunks(width) {
        let cells: Vec<String> = row.iter().map(|&c| tile::display_face(c)).collect();
        println!("{}", cells.join(" "));
    }
    println!();

    for line in wordgrid_cli::columnize(&board.words, 4) {
        println!("{line}");
    }
    println!();

    let table = ScoreTable::standard();
    let score: u32 = board.words.iter().map(|w| table.for_len(w.len())).sum();
    let longest = board.words.iter().map(|w| w.len()).max().unwrap_or(0);
    println!(
        "{} words, {} points, longest {} ({} tries)",
        board.words.len(),
        score,
        longest,
        board.tries
    );
}
