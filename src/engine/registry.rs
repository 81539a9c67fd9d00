//! Fixed-capacity machine registry.

use crate::core::{Identifier, TransitionTable};
use crate::engine::config::RegistryConfig;
use crate::engine::error::StmError;
use crate::engine::machine::{Machine, Step};
use serde::{Deserialize, Serialize};

/// Number of machines a registry holds unless told otherwise.
pub const DEFAULT_CAPACITY: usize = 8;

/// Caller-held reference to a machine in a [`Registry`].
///
/// Handles are issued in creation order starting at zero and stay valid for
/// the registry's whole life: machines are never removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Handle(usize);

impl Handle {
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<Handle> for usize {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}

impl TryFrom<i32> for Handle {
    type Error = StmError;

    /// Negative raw handles are rejected here. Whether a non-negative one
    /// was actually issued is checked by the registry it is used with.
    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        usize::try_from(raw)
            .map(Handle)
            .map_err(|_| StmError::InvalidHandle { raw })
    }
}

impl TryFrom<i16> for Handle {
    type Error = StmError;

    fn try_from(raw: i16) -> Result<Self, Self::Error> {
        Handle::try_from(i32::from(raw))
    }
}

/// Pool of up to `N` machines, stored inline.
///
/// The registry is an ordinary value: build one per subsystem (or per test)
/// and pass it by reference. It never allocates, and slots are never freed
/// or reused. Tables borrowed by its machines must outlive it.
///
/// # Example
///
/// ```rust
/// use stm_table::core::{NextState, Transition, TransitionTable};
/// use stm_table::Registry;
///
/// fn nop(current: i16, _next: NextState<i16>, _event: i16) -> i16 {
///     current
/// }
///
/// const OFF: i16 = 0;
/// const ON: i16 = 1;
/// const TOGGLE: i16 = 0;
///
/// let states = [OFF, ON];
/// let events = [TOGGLE];
/// let cells = [Transition::to(&nop, ON), Transition::to(&nop, OFF)];
/// let table = TransitionTable::new(&cells, &states, &events).unwrap();
///
/// let mut registry: Registry<i16, i16> = Registry::new();
/// let lamp = registry.create(table, OFF).unwrap();
///
/// registry.dispatch(lamp, TOGGLE).unwrap();
/// assert_eq!(registry.current_state(lamp), Ok(ON));
/// ```
#[derive(Debug)]
pub struct Registry<'t, S, E, const N: usize = DEFAULT_CAPACITY> {
    slots: [Option<Machine<'t, S, E>>; N],
    count: usize,
    config: RegistryConfig,
}

impl<'t, S: Identifier, E: Identifier, const N: usize> Registry<'t, S, E, N> {
    /// Create an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            count: 0,
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of machines created so far.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count >= N
    }

    /// Register a new machine starting in `initial`.
    ///
    /// `initial` is stored as given, even if it is not on the table's state
    /// axis. Fails with `CapacityExhausted` once all `N` slots are taken,
    /// leaving the registry untouched.
    pub fn create(
        &mut self,
        table: TransitionTable<'t, S, E>,
        initial: S,
    ) -> Result<Handle, StmError> {
        let index = self.count;
        let Some(slot) = self.slots.get_mut(index) else {
            diag!(capacity = N, "Machine registry is full");
            return Err(StmError::CapacityExhausted { capacity: N });
        };

        *slot = Some(Machine::new(table, initial));
        self.count += 1;

        Ok(Handle(index))
    }

    /// Feed `event` to the machine behind `handle`.
    ///
    /// On error the machine keeps its current state.
    pub fn dispatch(&mut self, handle: Handle, event: E) -> Result<Step<S, E>, StmError> {
        let policy = self.config.next_state;
        self.machine_mut(handle)?.dispatch(event, policy)
    }

    pub fn current_state(&self, handle: Handle) -> Result<S, StmError> {
        self.machine(handle).map(Machine::current_state)
    }

    /// Overwrite a machine's state without consulting its table.
    ///
    /// A debug and recovery valve: any value is accepted, including states
    /// that are not on the axis. Needing this in normal operation means the
    /// table lacks a transition. An invalid handle is reported and otherwise
    /// ignored.
    pub fn force_state(&mut self, handle: Handle, state: S) -> Result<(), StmError> {
        let machine = self.machine_mut(handle)?;
        diag!(
            handle = handle.index(),
            from = ?machine.current_state(),
            to = ?state,
            "Forcing state outside the transition table"
        );
        machine.force(state);
        Ok(())
    }

    pub fn machine(&self, handle: Handle) -> Result<&Machine<'t, S, E>, StmError> {
        match self.slots.get(handle.index()) {
            Some(Some(machine)) if handle.index() < self.count => Ok(machine),
            _ => Err(out_of_range(handle, self.count)),
        }
    }

    pub(crate) fn machine_mut(
        &mut self,
        handle: Handle,
    ) -> Result<&mut Machine<'t, S, E>, StmError> {
        let issued = self.count;
        match self.slots.get_mut(handle.index()) {
            Some(Some(machine)) if handle.index() < issued => Ok(machine),
            _ => Err(out_of_range(handle, issued)),
        }
    }

    /// Handles of every created machine, in creation order.
    pub fn handles(&self) -> impl Iterator<Item = Handle> {
        (0..self.count).map(Handle)
    }

    /// Created machines in handle order.
    pub(crate) fn machines(&self) -> impl Iterator<Item = &Machine<'t, S, E>> {
        self.slots.iter().take(self.count).flatten()
    }

    pub(crate) fn machines_mut(&mut self) -> impl Iterator<Item = &mut Machine<'t, S, E>> {
        self.slots.iter_mut().take(self.count).flatten()
    }
}

fn out_of_range(handle: Handle, issued: usize) -> StmError {
    diag!(handle = handle.index(), issued, "Handle out of range");
    StmError::HandleOutOfRange {
        index: handle.index(),
        issued,
    }
}

impl<S: Identifier, E: Identifier, const N: usize> Default for Registry<'_, S, E, N> {
    fn default() -> Self {
        Self::new()
    }
}
