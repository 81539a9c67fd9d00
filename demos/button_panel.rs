//! Button Panel
//!
//! This example drives a small radio panel through a 6 x 8 transition table.
//!
//! Key concepts:
//! - Row-major tables: events as rows, states as columns
//! - Out-of-range events are rejected without changing state
//! - Machines may start off-axis and be forced back onto it
//! - Debug builds report failures through `tracing`
//!
//! Run with: cargo run --example button_panel

use stm_table::{NextState, Registry, Transition, TransitionTable};
use tracing_subscriber::EnvFilter;

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

fn state_name(state: i16) -> &'static str {
    match state {
        ST_TT => "ST_Tt",
        ST_TJ => "ST_Tj",
        ST_JT => "ST_Jt",
        ST_JJ => "ST_Jj",
        ST_KT => "ST_Kt",
        ST_KJ => "ST_Kj",
        _ => "<off axis>",
    }
}

fn nop(current: i16, _next: NextState<i16>, _event: i16) -> i16 {
    current
}

fn ban(current: i16, _next: NextState<i16>, event: i16) -> i16 {
    println!("  event {event} is not allowed here");
    current
}

fn on_button(current: i16, next: NextState<i16>, event: i16) -> i16 {
    println!(
        "  button {event}: {} -> {:?}",
        state_name(current),
        next.fixed().map(state_name)
    );
    current
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    println!("=== Button Panel Example ===\n");

    #[rustfmt::skip]
    let cells = [
        //        ST_TT                             ST_TJ                             ST_JT                        ST_JJ                        ST_KT                        ST_KJ
        /*BtnT*/ Transition::to(&nop, ST_TT),       Transition::to(&on_button, ST_TT), Transition::to(&nop, ST_JT), Transition::to(&nop, ST_JJ), Transition::to(&nop, ST_KT), Transition::to(&nop, ST_KJ),
        /*BtnJ*/ Transition::to(&on_button, ST_JJ), Transition::to(&nop, ST_TJ),       Transition::to(&nop, ST_JT), Transition::to(&nop, ST_JJ), Transition::to(&nop, ST_KT), Transition::to(&nop, ST_KJ),
        /*RdoT*/ Transition::to(&ban, ST_TT),       Transition::to(&nop, ST_TJ),       Transition::to(&nop, ST_JT), Transition::to(&nop, ST_JJ), Transition::to(&nop, ST_KT), Transition::to(&nop, ST_KJ),
        /*RdoJ*/ Transition::to(&ban, ST_TT),       Transition::to(&nop, ST_TJ),       Transition::to(&nop, ST_JT), Transition::to(&nop, ST_JJ), Transition::to(&nop, ST_KT), Transition::to(&nop, ST_KJ),
        /*Down*/ Transition::to(&on_button, ST_KT), Transition::to(&nop, ST_TJ),       Transition::to(&nop, ST_JT), Transition::to(&nop, ST_JJ), Transition::to(&nop, ST_KT), Transition::to(&nop, ST_KJ),
        /*Up  */ Transition::to(&nop, ST_TT),       Transition::to(&nop, ST_TJ),       Transition::to(&nop, ST_JT), Transition::to(&nop, ST_JJ), Transition::to(&nop, ST_KT), Transition::to(&nop, ST_KJ),
        /*Set */ Transition::to(&on_button, ST_KT), Transition::to(&nop, ST_TJ),       Transition::to(&nop, ST_JT), Transition::to(&nop, ST_JJ), Transition::to(&nop, ST_KT), Transition::to(&nop, ST_KJ),
        /*Clr */ Transition::to(&nop, ST_TT),       Transition::to(&nop, ST_TJ),       Transition::to(&nop, ST_JT), Transition::to(&nop, ST_JJ), Transition::to(&nop, ST_KT), Transition::to(&nop, ST_KJ),
    ];
    let table = TransitionTable::new(&cells, &STATES, &EVENTS).expect("panel table is well formed");

    let mut registry: Registry<i16, i16> = Registry::new();

    let panel = registry.create(table, ST_TT).expect("registry has room");
    let show = |registry: &Registry<i16, i16>, handle| match registry.current_state(handle) {
        Ok(state) => println!("state = {} ({state})", state_name(state)),
        Err(error) => println!("error = {error} (code {})", error.code().as_raw()),
    };
    show(&registry, panel);

    registry.dispatch(panel, EV_BTN_J).expect("BtnJ is on the axis");
    show(&registry, panel);

    println!("\nDispatching an unknown event:");
    if let Err(error) = registry.dispatch(panel, 0x1000) {
        println!("  rejected: {error} (code {})", error.code().as_raw());
    }
    show(&registry, panel);

    println!("\nCreating a machine with an off-axis initial state:");
    let stray = registry.create(table, 0x0400).expect("registry has room");
    show(&registry, stray);

    registry
        .force_state(stray, ST_TT)
        .expect("handle was just issued");
    show(&registry, stray);

    println!("\n=== Example Complete ===");
}
