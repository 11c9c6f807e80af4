//! Machines shared by the tests of several modules.
use crate::Dfsm;

/// Encodings of non-deterministic machines, including epsilon cycles and states that are
/// not numbered from zero.
pub const SUBMITTED: [&str; 3] = [
    "0 1 2 3 4 5/a b/0, a, 2;0, b, 3;0,, 1;1, a, 2;1, b, 3;1, a, 4;2, a, 2;2, b, 3;2, b, 5;3,, 0;4, a, 1;4, a, 4;4, b, 5;5, a, 4/0/2 5",
    "0 1 2/a b/0, a, 0;0, a, 1;0, b, 2;1, a, 0;1, b, 1;2, b, 0;2, b, 1/0/2",
    "1 2 3 4/a b c/1, a, 2;1, c, 4;2,, 1;2, b, 3;3, a, 2;4, c, 3;4,, 3/1/3",
];

/// The example machine from the Wikipedia article on DFA minimization, where the states
/// `a` to `f` are numbered `0` to `5`.
pub fn wiki_dfsm() -> Dfsm {
    "0 1 2 3 4 5/0 1/0,0,1;0,1,2;1,0,0;1,1,3;2,0,4;2,1,5;3,0,4;3,1,5;4,0,4;4,1,5;5,0,5;5,1,5/0/2 3 4"
        .parse()
        .unwrap()
}
