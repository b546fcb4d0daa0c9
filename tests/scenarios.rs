//! End-to-end exploration scenarios over the fixed mansion

mod common;

use common::run_script;
use mystery_mansion::{build_mansion, Direction, Event, FinishReason, GameConfig, Level, Room};
use test_case::test_case;

#[test]
fn test_left_left_reaches_escritorio() {
    let mansion = build_mansion().unwrap();
    let run = run_script(&mansion, &GameConfig::default(), &["e", "e"]);

    assert_eq!(run.entered(), vec!["Hall de Entrada", "Biblioteca", "Escritório"]);
    assert_eq!(run.report.finish, Some(FinishReason::LeafReached));
    assert!(run.report.clues.contains(&"Carta Misteriosa".to_string()));
    // Escritório is a leaf but still holds a clue
    assert_eq!(run.report.clues, vec!["Carta Misteriosa", "Chave Enferrujada"]);

    let text = run.text();
    assert!(text.contains("Você está em: Biblioteca\n🔍 Você encontrou uma pista: 'Carta Misteriosa'"));
    assert!(text.contains("Você chegou ao fim deste caminho (sala-folha)."));
}

#[test]
fn test_right_right_right_reaches_banheiro() {
    let mansion = build_mansion().unwrap();
    let run = run_script(&mansion, &GameConfig::default(), &["d", "d", "d"]);

    assert_eq!(
        run.entered(),
        vec!["Hall de Entrada", "Sala de Jantar", "Corredor", "Banheiro"]
    );
    assert_eq!(run.report.finish, Some(FinishReason::LeafReached));
    assert_eq!(run.report.moves, 3);
    // Banheiro yields nothing
    assert_eq!(run.report.clues, vec!["Pegadas Estranhas"]);
    assert_eq!(
        run.report.associations,
        vec![("Pegadas Estranhas".to_string(), "Jardineiro Gregson".to_string())]
    );
    assert_eq!(run.report.prime_suspect.as_deref(), Some("Jardineiro Gregson"));
}

#[test]
fn test_blocked_move_then_valid_move() {
    let wing = Room::build("Hall de Entrada", None, Some(Room::leaf("Banheiro")));
    let run = run_script(&wing, &GameConfig::default(), &["e", "d"]);

    let blocked = run
        .events
        .iter()
        .position(|event| *event == Event::Blocked { direction: Direction::Left })
        .expect("left move is refused");
    // Refusal re-prompts from the same room
    assert!(run.events[blocked + 1].is_prompt());

    assert_eq!(run.entered(), vec!["Hall de Entrada", "Banheiro"]);
    assert_eq!(run.report.moves, 1);
    assert_eq!(run.report.finish, Some(FinishReason::LeafReached));
}

#[test_case(&["s"], &["Hall de Entrada"] ; "at the root")]
#[test_case(&["e", "s"], &["Hall de Entrada", "Biblioteca"] ; "in biblioteca")]
#[test_case(&["d", "d", "s", "d"], &["Hall de Entrada", "Sala de Jantar", "Corredor"] ; "in corredor")]
fn test_quit_stops_immediately(script: &[&str], rooms: &[&str]) {
    let mansion = build_mansion().unwrap();
    let run = run_script(&mansion, &GameConfig::default(), script);

    assert_eq!(run.report.finish, Some(FinishReason::Quit));
    assert_eq!(run.entered(), rooms);
    assert_eq!(
        run.events.last(),
        Some(&Event::Finished {
            reason: FinishReason::Quit
        })
    );
}

#[test]
fn test_running_out_of_input_ends_like_quit() {
    let mansion = build_mansion().unwrap();
    let run = run_script(&mansion, &GameConfig::default(), &["d", "x", ""]);

    assert_eq!(run.report.finish, Some(FinishReason::InputExhausted));
    assert_eq!(run.entered(), vec!["Hall de Entrada", "Sala de Jantar"]);
    assert!(run.text().contains("Entrada encerrada. Exploração finalizada."));
}

#[test]
fn test_uppercase_and_padded_commands() {
    let mansion = build_mansion().unwrap();
    let run = run_script(&mansion, &GameConfig::default(), &["  D", "Direita agora", "\tE"]);

    assert_eq!(
        run.entered(),
        vec!["Hall de Entrada", "Sala de Jantar", "Corredor", "Quarto"]
    );
    assert_eq!(run.report.clues, vec!["Diário Secreto", "Pegadas Estranhas"]);
}

#[test]
fn test_all_five_clues_across_sessions() {
    let mansion = build_mansion().unwrap();
    let mut explorer_clues = Vec::new();
    for script in [&["e", "e"][..], &["d", "e"][..], &["d", "d", "e"][..]] {
        let run = run_script(&mansion, &GameConfig::default(), script);
        explorer_clues.extend(run.report.clues);
    }
    explorer_clues.sort();
    explorer_clues.dedup();
    assert_eq!(explorer_clues.len(), 5);
}

#[test_case(Level::Novice, 'p', false ; "novice cannot list clues")]
#[test_case(Level::Novice, 'a', false ; "novice cannot list associations")]
#[test_case(Level::Adventurer, 'p', true ; "adventurer lists clues")]
#[test_case(Level::Adventurer, 'a', false ; "adventurer cannot list associations")]
#[test_case(Level::Master, 'a', true ; "master lists associations")]
fn test_level_gates_listings(level: Level, key: char, allowed: bool) {
    let mansion = build_mansion().unwrap();
    let config = GameConfig {
        level,
        ..GameConfig::default()
    };
    let line = key.to_string();
    let run = run_script(&mansion, &config, &[line.as_str(), "s"]);

    let refused = run
        .events
        .iter()
        .any(|event| matches!(event, Event::Unavailable { .. }));
    assert_eq!(refused, !allowed);
    assert_eq!(run.report.finish, Some(FinishReason::Quit));
}

#[test_case(Level::Novice, 0, 0 ; "novice records nothing")]
#[test_case(Level::Adventurer, 2, 0 ; "adventurer records clues only")]
#[test_case(Level::Master, 2, 2 ; "master records both")]
fn test_level_controls_recording(level: Level, clues: usize, associations: usize) {
    let mansion = build_mansion().unwrap();
    let config = GameConfig {
        level,
        ..GameConfig::default()
    };
    let run = run_script(&mansion, &config, &["d", "d", "e"]);

    assert_eq!(run.report.clues.len(), clues);
    assert_eq!(run.report.associations.len(), associations);
    assert_eq!(run.report.finish, Some(FinishReason::LeafReached));
}
