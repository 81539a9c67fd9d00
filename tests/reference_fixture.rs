//! End-to-end run of the two-button radio panel table.
//!
//! Six states (tuner/jog combinations) by eight events, with every action
//! recording its name so the test can see which one ran.

use std::cell::Cell;
use stm_table::audit::audit;
use stm_table::builder::{NextStatePolicy, RegistryBuilder};
use stm_table::{ErrorCode, Handle, NextState, Registry, StmError, Transition, TransitionTable};

const ST_TT: i16 = 0;
const ST_TJ: i16 = 1;
const ST_JT: i16 = 2;
const ST_JJ: i16 = 3;
const ST_KT: i16 = 4;
const ST_KJ: i16 = 5;

const EV_BTN_T: i16 = 0;
const EV_BTN_J: i16 = 1;
const EV_RDO_T: i16 = 2;
const EV_RDO_J: i16 = 3;
const EV_DOWN: i16 = 4;
const EV_UP: i16 = 5;
const EV_SET: i16 = 6;
const EV_CLR: i16 = 7;

const STATES: [i16; 6] = [ST_TT, ST_TJ, ST_JT, ST_JJ, ST_KT, ST_KJ];
const EVENTS: [i16; 8] = [
    EV_BTN_T, EV_BTN_J, EV_RDO_T, EV_RDO_J, EV_DOWN, EV_UP, EV_SET, EV_CLR,
];

struct Panel {
    last: Cell<Option<&'static str>>,
}

impl Panel {
    fn new() -> Self {
        Self {
            last: Cell::new(None),
        }
    }

    fn ran(&self, name: &'static str) -> i16 {
        self.last.set(Some(name));
        0
    }
}

#[test]
fn radio_panel_scenario() {
    let panel = Panel::new();
    let nop = |_: i16, _: NextState<i16>, _: i16| panel.ran("Nop");
    let ban = |_: i16, _: NextState<i16>, _: i16| panel.ran("Ban");
    let on_btn_t = |_: i16, _: NextState<i16>, _: i16| panel.ran("OnBtnT");
    let on_btn_j = |_: i16, _: NextState<i16>, _: i16| panel.ran("OnBtnJ");
    let on_down = |_: i16, _: NextState<i16>, _: i16| panel.ran("OnDown");
    let on_set = |_: i16, _: NextState<i16>, _: i16| panel.ran("OnSet");

    #[rustfmt::skip]
    let cells = [
        //        ST_TT                           ST_TJ                          ST_JT                       ST_JJ                       ST_KT                       ST_KJ
        /*BtnT*/ Transition::to(&nop, ST_TT),     Transition::to(&on_btn_t, ST_TT), Transition::to(&nop, ST_JT), Transition::to(&nop, ST_JJ), Transition::to(&nop, ST_KT), Transition::to(&nop, ST_KJ),
        /*BtnJ*/ Transition::to(&on_btn_j, ST_JJ), Transition::to(&nop, ST_TJ),     Transition::to(&nop, ST_JT), Transition::to(&nop, ST_JJ), Transition::to(&nop, ST_KT), Transition::to(&nop, ST_KJ),
        /*RdoT*/ Transition::to(&ban, ST_TT),     Transition::to(&nop, ST_TJ),     Transition::to(&nop, ST_JT), Transition::to(&nop, ST_JJ), Transition::to(&nop, ST_KT), Transition::to(&nop, ST_KJ),
        /*RdoJ*/ Transition::to(&ban, ST_TT),     Transition::to(&nop, ST_TJ),     Transition::to(&nop, ST_JT), Transition::to(&nop, ST_JJ), Transition::to(&nop, ST_KT), Transition::to(&nop, ST_KJ),
        /*Down*/ Transition::to(&on_down, ST_KT), Transition::to(&nop, ST_TJ),     Transition::to(&nop, ST_JT), Transition::to(&nop, ST_JJ), Transition::to(&nop, ST_KT), Transition::to(&nop, ST_KJ),
        /*Up  */ Transition::to(&nop, ST_TT),     Transition::to(&nop, ST_TJ),     Transition::to(&nop, ST_JT), Transition::to(&nop, ST_JJ), Transition::to(&nop, ST_KT), Transition::to(&nop, ST_KJ),
        /*Set */ Transition::to(&on_set, ST_KT),  Transition::to(&nop, ST_TJ),     Transition::to(&nop, ST_JT), Transition::to(&nop, ST_JJ), Transition::to(&nop, ST_KT), Transition::to(&nop, ST_KJ),
        /*Clr */ Transition::to(&nop, ST_TT),     Transition::to(&nop, ST_TJ),     Transition::to(&nop, ST_JT), Transition::to(&nop, ST_JJ), Transition::to(&nop, ST_KT), Transition::to(&nop, ST_KJ),
    ];
    let table = TransitionTable::new(&cells, &STATES, &EVENTS).unwrap();
    assert!(audit(&table).is_success());

    let mut registry: Registry<i16, i16> = Registry::new();

    let first = registry.create(table, ST_TT).unwrap();
    assert_eq!(first, Handle::try_from(0i16).unwrap());
    assert_eq!(registry.current_state(first), Ok(ST_TT));

    registry.dispatch(first, EV_BTN_J).unwrap();
    assert_eq!(panel.last.get(), Some("OnBtnJ"));
    assert_eq!(registry.current_state(first), Ok(ST_JJ));

    panel.last.set(None);
    let result = registry.dispatch(first, 0x1000);
    assert_eq!(result.map(|_| ()), Err(StmError::UnknownEvent));
    assert_eq!(ErrorCode::of(&result).as_raw(), -2);
    assert_eq!(panel.last.get(), None);
    assert_eq!(registry.current_state(first), Ok(ST_JJ));

    let second = registry.create(table, 0x0400).unwrap();
    assert_eq!(registry.current_state(second), Ok(1024));

    registry.force_state(second, ST_TT).unwrap();
    assert_eq!(registry.current_state(second), Ok(ST_TT));

    // Back on the axis, the second machine dispatches normally.
    registry.dispatch(second, EV_DOWN).unwrap();
    assert_eq!(panel.last.get(), Some("OnDown"));
    assert_eq!(registry.current_state(second), Ok(ST_KT));

    // The first machine was not disturbed.
    assert_eq!(registry.current_state(first), Ok(ST_JJ));
}

#[test]
fn panel_tune_selection_is_decided_at_runtime() {
    let nop = |current: i16, _: NextState<i16>, _: i16| current;
    let tuned = Cell::new(ST_JT);
    let pick_band = |_: i16, next: NextState<i16>, _: i16| {
        assert!(next.is_runtime_decided());
        tuned.get()
    };

    let mut cells = [Transition::to(&nop, ST_TT); 48];
    // EV_SET in ST_TT decides between the jog states at runtime.
    cells[6 * STATES.len()] = Transition::runtime(&pick_band);
    let table = TransitionTable::new(&cells, &STATES, &EVENTS).unwrap();

    let mut registry: Registry<i16, i16> = RegistryBuilder::new()
        .next_state(NextStatePolicy::Verify)
        .build();
    let handle = registry.create(table, ST_TT).unwrap();

    let step = registry.dispatch(handle, EV_SET).unwrap();
    assert!(step.runtime_decided);
    assert_eq!(registry.current_state(handle), Ok(ST_JT));

    registry.force_state(handle, ST_TT).unwrap();
    tuned.set(99);
    assert_eq!(
        registry.dispatch(handle, EV_SET).map(|_| ()),
        Err(StmError::NoNextState)
    );
    assert_eq!(registry.current_state(handle), Ok(ST_TT));
}

#[test]
fn missing_action_is_reported_with_its_code() {
    let nop = |current: i16, _: NextState<i16>, _: i16| current;
    let mut cells = [Transition::to(&nop, ST_TT); 48];
    cells[EVENTS.len() * STATES.len() - 1] = Transition::empty(NextState::Static(ST_TT));
    let table = TransitionTable::new(&cells, &STATES, &EVENTS).unwrap();

    let mut registry: Registry<i16, i16> = Registry::new();
    let handle = registry.create(table, ST_KJ).unwrap();

    let result = registry.dispatch(handle, EV_CLR);
    assert_eq!(
        result.map(|_| ()),
        Err(StmError::NoAction {
            event_index: 7,
            state_index: 5,
        })
    );
    assert_eq!(ErrorCode::of(&result), ErrorCode::NoAction);
    assert_eq!(registry.current_state(handle), Ok(ST_KJ));
    assert!(audit(&table).is_failure());
}
