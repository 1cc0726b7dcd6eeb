//! Full-round scenarios driven through the public game API, the way a
//! front end would use it: jamo in one at a time, submissions, and the
//! hint keyboard read back after every guess.

use kordle::{qwerty_to_jamo, words, Game, Grade, Rejection, Status};

fn game_with(word: &str) -> Game {
    Game::with_entry(words::find(word).expect("word in list"))
}

fn type_keys(game: &mut Game, keys: &str) {
    for key in keys.chars() {
        let jamo = qwerty_to_jamo(key).unwrap_or(key);
        game.push_jamo(jamo).expect("unit accepted");
    }
}

#[test]
fn test_win_on_second_guess() {
    let mut game = game_with("사람");

    // 한글 first: all wrong except what the pools allow.
    type_keys(&mut game, "gksrmf");
    assert_eq!(game.submit_guess(), Ok(Status::Playing));
    assert_eq!(game.remaining_guesses(), 4);

    // 사람 wins.
    type_keys(&mut game, "tkfka");
    assert_eq!(game.submit_guess(), Ok(Status::Won));
    assert_eq!(game.guesses().len(), 2);

    let record = game.guesses().last().expect("recorded");
    assert!(record
        .blocks
        .iter()
        .all(|b| b.grade == Grade::Correct));
}

#[test]
fn test_hint_keyboard_improves_monotonically() {
    let mut game = game_with("사랑");
    let tracked = ['ㅅ', 'ㅏ', 'ㄹ', 'ㅇ', 'ㅎ', 'ㄱ'];

    let mut best: Vec<Grade> = tracked.iter().map(|&j| game.hints().get(j)).collect();
    for keys in ["gksrmf", "tkfkd", "tkfkd"] {
        if game.status() != Status::Playing {
            break;
        }
        type_keys(&mut game, keys);
        let _ = game.submit_guess();
        for (slot, &jamo) in tracked.iter().enumerate() {
            let now = game.hints().get(jamo);
            assert!(now >= best[slot], "hint for {jamo} regressed");
            best[slot] = now;
        }
    }
}

#[test]
fn test_composite_vowel_halves_graded_independently() {
    let mut game = game_with("사과");

    // Guess 과일 against 사과: the guess's first block carries ㅘ.
    type_keys(&mut game, "rhkdlf");
    assert_eq!(game.submit_guess(), Ok(Status::Playing));
    assert!(game.preview().is_empty()); // buffer cleared on submit

    let record = game.guesses().last().expect("recorded");
    let first_vowel = &record.blocks[0].components[1];
    assert_eq!(first_vowel.jamo, 'ㅘ');
    // The ㅏ half is present in 사; the ㅗ half only exists over in 과.
    assert_eq!(
        first_vowel
            .atoms
            .iter()
            .map(|a| (a.jamo, a.grade))
            .collect::<Vec<_>>(),
        vec![('ㅗ', Grade::MisplacedSyllable), ('ㅏ', Grade::Present)]
    );
    // The guess's leading ㄱ belongs to the other block.
    assert_eq!(
        record.blocks[0].components[0].grade,
        Grade::MisplacedSyllable
    );
}

#[test]
fn test_reject_then_recover() {
    let mut game = game_with("사람");

    // 가나 fills both blocks; another trailing still fits as 낟.
    type_keys(&mut game, "rksk");
    assert_eq!(game.push_jamo('ㄷ'), Ok(()));
    assert_eq!(game.preview(), vec!['가', '낟']);

    // A vowel would peel ㄷ off into a third block.
    assert_eq!(game.push_jamo('ㅏ'), Err(Rejection::TooManyBlocks));
    assert_eq!(game.preview(), vec!['가', '낟']);

    // Backspace down to 가 and finish a different second block.
    game.delete_last();
    game.delete_last();
    game.delete_last();
    type_keys(&mut game, "fka");
    assert_eq!(game.preview(), vec!['가', '람']);
    assert_eq!(game.submit_guess(), Ok(Status::Playing));
}
