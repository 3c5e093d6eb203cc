// End-to-end move selection through the Bot
//
// Boards are built the way they arrive on the wire: our snake appears both as
// `you` and inside `board.snakes`.

use serde_json::json;
use flood_snake::area::AreaStrategy;
use flood_snake::bot::Bot;
use flood_snake::config::Config;
use flood_snake::types::{Battlesnake, Board, Coord, Direction, Game};

fn game() -> Game {
    Game {
        id: "test-game".to_string(),
        ruleset: json!({}),
        timeout: 500,
        source: "test".to_string(),
    }
}

fn snake(id: &str, body: &[(i32, i32)]) -> Battlesnake {
    let body: Vec<Coord> = body.iter().map(|&(x, y)| Coord { x, y }).collect();
    Battlesnake {
        id: id.to_string(),
        name: id.to_string(),
        health: 90,
        head: body[0],
        length: body.len() as i32,
        body,
        latency: "0".to_string(),
        shout: None,
    }
}

fn board(snakes: Vec<Battlesnake>, food: &[(i32, i32)]) -> Board {
    Board {
        height: 11,
        width: 11,
        food: food.iter().map(|&(x, y)| Coord { x, y }).collect(),
        snakes,
        hazards: vec![],
    }
}

fn chosen_move(bot: &Bot, board: &Board) -> String {
    let you = board.snakes[0].clone();
    let response = bot.get_move(&game(), &0, board, &you);
    response["move"].as_str().unwrap().to_string()
}

fn flood_fill_bot() -> Bot {
    let mut config = Config::default_hardcoded();
    config.strategy.area_strategy = AreaStrategy::FloodFill;
    Bot::new(config)
}

/// Scenario A: lone head in the middle of an empty board
#[test]
fn test_open_board_center() {
    let bot = Bot::new(Config::default_hardcoded());
    let board = board(vec![snake("me", &[(5, 5)])], &[]);

    let decision = bot.decide(&board, &board.snakes[0]);
    for dir in Direction::all().iter() {
        assert!(decision.safety.is_safe(*dir), "{} should be safe", dir);
    }

    // The greedy walk is not rotation-symmetric: left and up walk 32 steps,
    // right and down 30, so left is the first best in priority order.
    assert_eq!(chosen_move(&bot, &board), "left");

    // Exhaustive fill scores every move 120 and keeps the first one
    assert_eq!(chosen_move(&flood_fill_bot(), &board), "right");
}

/// Scenario B: head on the right wall never goes right
#[test]
fn test_right_wall_excludes_right() {
    let bot = Bot::new(Config::default_hardcoded());

    for y in 0..11 {
        let board = board(vec![snake("me", &[(10, y)])], &[(10, (y + 3) % 11)]);
        let decision = bot.decide(&board, &board.snakes[0]);
        assert!(!decision.safety.is_safe(Direction::Right));
        assert_ne!(chosen_move(&bot, &board), "right", "head at (10, {})", y);
    }

    let middle = board(vec![snake("me", &[(10, 5)])], &[]);
    assert_eq!(chosen_move(&bot, &middle), "up");
}

/// Scenario C: boxed on three sides by an opponent, only up is open
#[test]
fn test_single_opening_is_taken() {
    let bot = Bot::new(Config::default_hardcoded());
    let board = board(
        vec![
            snake("me", &[(5, 5)]),
            snake("them", &[(6, 5), (5, 4), (4, 5)]),
        ],
        &[(0, 0)],
    );

    let decision = bot.decide(&board, &board.snakes[0]);
    assert_eq!(decision.safety.safe_directions(), vec![Direction::Up]);
    assert_eq!(decision.chosen_score(), Some(32));
    assert_eq!(chosen_move(&bot, &board), "up");
    assert_eq!(chosen_move(&flood_fill_bot(), &board), "up");
}

/// Scenario D: every neighbor blocked or off the board
#[test]
fn test_no_safe_move_falls_back_down() {
    let bot = Bot::new(Config::default_hardcoded());

    let surrounded = board(
        vec![
            snake("me", &[(5, 5)]),
            snake("them", &[(6, 5), (5, 6), (4, 5), (5, 4)]),
        ],
        &[],
    );
    assert_eq!(chosen_move(&bot, &surrounded), "down");

    let cornered = board(
        vec![snake("me", &[(0, 0), (1, 0), (1, 1), (0, 1)])],
        &[],
    );
    assert!(bot.decide(&cornered, &cornered.snakes[0]).fallback);
    assert_eq!(chosen_move(&bot, &cornered), "down");
}

#[test]
fn test_own_neck_is_never_chosen() {
    let bot = Bot::new(Config::default_hardcoded());
    let board = board(vec![snake("me", &[(5, 5), (4, 5), (3, 5)])], &[]);

    let decision = bot.decide(&board, &board.snakes[0]);
    assert!(!decision.safety.is_safe(Direction::Left));
    assert_ne!(chosen_move(&bot, &board), "left");
}

#[test]
fn test_longer_walk_beats_nearby_food() {
    let bot = Bot::new(Config::default_hardcoded());
    // Food sits just left of the head but the left walk is short
    let board = board(
        vec![
            snake("me", &[(2, 2), (2, 1), (2, 0)]),
            snake("them", &[(3, 3), (1, 3)]),
        ],
        &[(1, 2)],
    );

    let decision = bot.decide(&board, &board.snakes[0]);
    assert_eq!(
        decision.scores,
        vec![
            (Direction::Right, 24),
            (Direction::Left, 5),
            (Direction::Up, 28),
        ]
    );
    assert_eq!(chosen_move(&bot, &board), "up");
}

#[test]
fn test_decision_is_stable_across_calls() {
    let bot = Bot::new(Config::default_hardcoded());
    let board = board(
        vec![
            snake("me", &[(3, 7), (3, 6), (3, 5)]),
            snake("them", &[(6, 6), (6, 5), (7, 5), (8, 5)]),
        ],
        &[(9, 9), (1, 1)],
    );

    let first = chosen_move(&bot, &board);
    for _ in 0..20 {
        assert_eq!(chosen_move(&bot, &board), first);
    }
}

#[test]
fn test_board_size_comes_from_request() {
    let bot = Bot::new(Config::default_hardcoded());
    let mut small = board(vec![snake("me", &[(6, 3)])], &[]);
    small.width = 7;
    small.height = 7;

    let decision = bot.decide(&small, &small.snakes[0]);
    assert!(!decision.safety.is_safe(Direction::Right));
    assert!(decision.safety.is_safe(Direction::Up));

    let mut wide = board(vec![snake("me", &[(10, 3)])], &[]);
    wide.width = 19;
    wide.height = 19;
    assert!(bot.decide(&wide, &wide.snakes[0]).safety.is_safe(Direction::Right));
}
