//! Property tests for accordion coordination.

use formkit_disclosure::{Accordion, Disclosure, ExpandMode};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Toggle(usize),
    Mode(ExpandMode),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..5usize).prop_map(Op::Toggle),
        1 => prop_oneof![Just(ExpandMode::Single), Just(ExpandMode::Multiple)].prop_map(Op::Mode),
    ]
}

const IDS: [&str; 5] = ["a", "b", "c", "d", "e"];

proptest! {
    #[test]
    fn single_mode_never_has_two_open(
        checked in proptest::collection::vec(any::<bool>(), 5),
        ops in proptest::collection::vec(op(), 0..40),
    ) {
        let mut accordion = Accordion::new();
        for (id, checked) in IDS.iter().zip(&checked) {
            accordion.add_panel(*id, *checked).unwrap();
        }
        prop_assert!(accordion.open_panels().count() <= 1);

        for op in ops {
            match op {
                Op::Toggle(index) => {
                    accordion.toggle(IDS[index]).unwrap();
                }
                Op::Mode(mode) => accordion.set_mode(mode),
            }
            if accordion.mode() == ExpandMode::Single {
                prop_assert!(accordion.open_panels().count() <= 1);
            }
        }
    }

    #[test]
    fn toggle_twice_restores_panel(
        ops in proptest::collection::vec(0..5usize, 0..20),
        target in 0..5usize,
    ) {
        let mut accordion = Accordion::new().with_mode(ExpandMode::Multiple);
        for id in IDS {
            accordion.add_panel(id, false).unwrap();
        }
        for index in ops {
            accordion.toggle(IDS[index]).unwrap();
        }

        let before: Vec<String> = accordion.open_panels().map(str::to_owned).collect();
        accordion.toggle(IDS[target]).unwrap();
        accordion.toggle(IDS[target]).unwrap();
        let after: Vec<String> = accordion.open_panels().map(str::to_owned).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn disclosure_event_iff_state_changes(start in any::<bool>(), flips in proptest::collection::vec(any::<bool>(), 0..20)) {
        let mut disclosure = Disclosure::new(start);
        for target in flips {
            let was = disclosure.is_open();
            let event = disclosure.set_open(target);
            prop_assert_eq!(event.is_some(), was != target);
            prop_assert_eq!(disclosure.is_open(), target);
        }
    }
}
