use tenpin::cli::{parse_args, RunMode};
use tenpin::core::Game;
use tenpin::engine::{final_score, AutoBowler};
use tenpin::input::parse_line;
use tenpin::play::{play_lines, play_random, Reporter};

fn run_script(input: &str, json: bool, quiet: bool) -> (Game, String) {
    let mut game = Game::new();
    let mut reporter = Reporter::new(Vec::new(), json, quiet, false);
    play_lines(&mut game, input.as_bytes(), &mut reporter).unwrap();
    let out = String::from_utf8(reporter.into_inner()).unwrap();
    (game, out)
}

#[test]
fn scoresheet_notation_scores_like_pin_counts() {
    let notation = "X 7 / 9 - X - 8 8 / - 6 X X X 8 1";
    let counts = [10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1];

    let game = Game::new();
    assert_eq!(parse_line(notation, &game).unwrap(), counts.to_vec());
    assert_eq!(final_score(&counts), 167);

    let (game, out) = run_script(notation, false, true);
    assert!(game.is_complete());
    assert_eq!(out, "167\n");
}

#[test]
fn text_run_ends_with_the_card() {
    let (game, out) = run_script("3 6\n10\n# comment\n\n4 4\n", false, false);
    assert_eq!(game.score(), 9 + 18 + 8);
    assert!(out.contains("On frame 1 - score 3\n"));
    assert!(out.contains("On frame 3 - score 35\n"));
    assert!(out.contains("|  1  |  2  |  3  |"));
    assert!(out.ends_with("Frame 3  Score 35  Pins standing 10\n"));
}

#[test]
fn rejected_rolls_are_reported_and_skipped() {
    let (game, out) = run_script("5 11 -3 5\n", false, false);
    assert_eq!(game.roll_count(), 2);
    assert_eq!(game.score(), 10);
    assert_eq!(
        out.matches("You must supply a roll between 0 and 10").count(),
        2
    );
}

#[test]
fn rolls_after_the_end_are_rejected() {
    let script = "X X X X X X X X X X X X\n4\n";
    let (game, out) = run_script(script, false, false);
    assert_eq!(game.score(), 300);
    assert!(out.contains("Game is over! Score is 300\n"));
    assert!(out.ends_with("Final score 300\n"));
}

#[test]
fn json_run_emits_one_line_per_roll_plus_final() {
    let (game, out) = run_script("4 5\n12\n", true, false);
    let lines: Vec<serde_json::Value> = out
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["type"], "observation");
    assert_eq!(lines[1]["score"], 9);
    assert_eq!(lines[2]["type"], "error");
    assert_eq!(lines[2]["code"], "invalid_pins");
    assert_eq!(lines[3]["complete"], false);
    assert_eq!(lines[3]["score"], game.score());
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(line["seq"], i as u64 + 1);
    }
}

#[test]
fn seeded_random_games_repeat() {
    let play = |seed: u32| {
        let mut game = Game::new();
        let mut reporter = Reporter::new(Vec::new(), false, true, false);
        play_random(&mut game, seed, 30, &mut reporter).unwrap();
        (game, String::from_utf8(reporter.into_inner()).unwrap())
    };
    let (first, out) = play(99);
    let (second, _) = play(99);
    assert!(first.is_complete());
    assert_eq!(first, second);
    assert_eq!(out, format!("{}\n", first.score()));

    let mut game = Game::new();
    AutoBowler::new(99).with_strike_chance(30).play(&mut game);
    assert_eq!(game, first);
}

#[test]
fn command_line_selects_the_mode() {
    let args: Vec<String> = ["--random", "5", "--quiet"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let config = parse_args(&args, |_| None).unwrap();
    assert_eq!(config.mode, RunMode::Random(5));
    assert!(config.quiet);
}
