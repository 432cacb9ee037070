// wordgrid-analyse: enumerate every word on a fixed layout.
//
// Usage:
//   wordgrid-analyse [-d DICT_PATH] [--width N] [--height N] LAYOUT
//
// LAYOUT is the flat row-major tile string of a saved board, e.g.
// "ADYERESTLPNAGIE1" for a 4x4 with a Qu tile in the corner.

use wordgrid_engine::{analyse, tile, ScoreTable};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, mut args) = wordgrid_cli::parse_dict_path(&args);

    if wants_usage(&args) {
        println!("wordgrid-analyse: enumerate every word on a fixed layout.");
        println!();
        println!("Usage: wordgrid-analyse [-d DICT_PATH] [--width N] [--height N] LAYOUT");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file (or directory with words.dat)");
        println!("  --width N              Board width (default 4)");
        println!("  --height N             Board height (default 4)");
        println!("  --min-legal N          Hide words shorter than N (default 3)");
        println!("  -h, --help             Print this help");
        return;
    }

    let width = wordgrid_cli::take_int_flag(&mut args, "--width", 4usize);
    let height = wordgrid_cli::take_int_flag(&mut args, "--height", 4usize);
    let min_legal = wordgrid_cli::take_int_flag(&mut args, "--min-legal", 3usize);

    let layout = match args.as_slice() {
        [layout] => layout.clone(),
        _ => wordgrid_cli::fatal("expected exactly one LAYOUT argument"),
    };

    let dawg = wordgrid_cli::load_dawg(dict_path.as_deref())
        .unwrap_or_else(|e| wordgrid_cli::fatal(&e));

    let table = ScoreTable::standard();
    let words = analyse(&dawg, &table, width, height, &layout)
        .unwrap_or_else(|e| wordgrid_cli::fatal(&e.to_string()));
    let words: Vec<String> = words.into_iter().filter(|w| w.len() >= min_legal).collect();

    for row in layout.as_bytes().chunks(width) {
        let cells: Vec<String> = row.iter().map(|&c| tile::display_face(c)).collect();
        println!("{}", cells.join(" "));
    }
    println!();

    let mut score = 0u32;
    for word in &words {
        let points = table.for_len(word.len());
        score += points;
        println!("{points:>3}  {word}");
    }
    println!();
    println!("{} words, {} points", words.len(), score);
}

fn wants_usage(args: &[String]) -> bool {
    args.is_empty() || wordgrid_cli::wants_help(args)
}
