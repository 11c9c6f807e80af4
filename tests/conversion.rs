use fsm::{convert, Dfsm, FsmError, InvalidReference, Ndfsm, State, Transition};
use itertools::Itertools;
use pretty_assertions::assert_eq;

const MACHINES: [&str; 6] = [
    "0 1/a b/0,a,0;0,b,1;1,a,0;1,b,1/0/1",
    "0 1 2/a/0,,1;1,a,2/0/2",
    "0 1 2 3 4 5/a b/0, a, 2;0, b, 3;0,, 1;1, a, 2;1, b, 3;1, a, 4;2, a, 2;2, b, 3;2, b, 5;3,, 0;4, a, 1;4, a, 4;4, b, 5;5, a, 4/0/2 5",
    "0 1 2/a b/0, a, 0;0, a, 1;0, b, 2;1, a, 0;1, b, 1;2, b, 0;2, b, 1/0/2",
    "1 2 3 4/a b c/1, a, 2;1, c, 4;2,, 1;2, b, 3;3, a, 2;4, c, 3;4,, 3/1/3",
    "0 1 2 3/a b/0,,1;1,,0;1,b,2;2,,3;3,a,3/0/0 3",
];

/// All non-empty words over `alphabet` of length at most `max_len`.
fn words(alphabet: &[char], max_len: usize) -> Vec<String> {
    (1..=max_len)
        .flat_map(|len| {
            (0..len)
                .map(|_| alphabet.iter().copied())
                .multi_cartesian_product()
                .map(|w| w.into_iter().collect::<String>())
                .collect_vec()
        })
        .collect()
}

fn samples(ndfsm: &Ndfsm) -> Vec<String> {
    let mut w = vec![String::new(), "ax".to_string()];
    w.extend(words(&ndfsm.alphabet().universe().collect_vec(), 5));
    w
}

#[test]
fn deterministic_machine_converts_to_itself() {
    let encoding = "0 1/a b/0,a,0;0,b,1;1,a,0;1,b,1/0/1";
    let dfsm = convert(encoding).unwrap();
    let original: Dfsm = encoding.parse().unwrap();
    assert_eq!(dfsm.to_canonic_form(), original.to_canonic_form());
    assert!(dfsm.compute("ab"));
}

#[test]
fn epsilon_scenario() {
    let dfsm = convert("0 1 2/a/0,,1;1,a,2/0/2").unwrap();
    assert!(dfsm.compute("a"));
    assert!(!dfsm.compute(""));
    assert!(!dfsm.compute("aa"));
}

#[test]
fn undeclared_states_are_rejected() {
    assert_eq!(
        convert("0 1/a/0,a,5/0/1").err(),
        Some(FsmError::InvalidReference(InvalidReference::State {
            transition: Transition::from((0, 'a', 5)),
            state: State::new(5)
        }))
    );
    assert!(matches!(
        convert("0 1/a/0;a;1/0/1"),
        Err(FsmError::MalformedEncoding(_))
    ));
}

#[test]
fn empty_input_is_malformed() {
    for input in ["", " ", "\n"] {
        assert!(
            matches!(convert(input), Err(FsmError::MalformedEncoding(_))),
            "{input:?} should be malformed"
        );
    }
}

#[test_log::test]
fn conversion_preserves_the_language() {
    for encoding in MACHINES {
        let ndfsm: Ndfsm = encoding.parse().unwrap();
        let dfsm = ndfsm.to_dfsm();
        let minimal = dfsm.minimize();
        for word in samples(&ndfsm) {
            let expected = ndfsm.compute(&word);
            assert_eq!(dfsm.compute(&word), expected, "{encoding} on {word:?}");
            assert_eq!(minimal.compute(&word), expected, "minimal {encoding} on {word:?}");
        }
        assert!(minimal.size() <= dfsm.size());
    }
}

#[test]
fn pruning_and_canonic_form_preserve_the_language() {
    for encoding in MACHINES {
        let ndfsm: Ndfsm = encoding.parse().unwrap();
        let pruned = ndfsm.remove_unreachable_states();
        let canonic = ndfsm.to_canonic_form();
        assert_eq!(pruned.reachable_states(), pruned.states().clone());
        assert_eq!(canonic.size(), pruned.size());
        for word in samples(&ndfsm) {
            assert_eq!(pruned.compute(&word), ndfsm.compute(&word));
            assert_eq!(canonic.compute(&word), ndfsm.compute(&word));
        }
    }
}

#[test]
fn encodings_round_trip() {
    for encoding in MACHINES {
        let ndfsm: Ndfsm = encoding.parse().unwrap();
        let reparsed: Ndfsm = ndfsm.encode().parse().unwrap();
        assert_eq!(reparsed, ndfsm);
        assert_eq!(reparsed.to_canonic_form(), ndfsm.to_canonic_form());

        let dfsm = ndfsm.to_dfsm();
        let reparsed: Dfsm = dfsm.encode().parse().unwrap();
        assert_eq!(reparsed, dfsm);
    }
}

#[test]
fn conversion_is_reproducible() {
    for encoding in MACHINES {
        assert_eq!(
            convert(encoding).unwrap().encode(),
            convert(encoding).unwrap().encode()
        );
    }
}
