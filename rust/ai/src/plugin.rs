//! C ABI shared by the host and dynamically loaded strategy modules.
//!
//! A module exports one entry point, [`CREATE_STRATEGY_SYMBOL`], returning a
//! heap-allocated [`RawStrategy`] or null. Ownership passes to the host, which
//! hands the pointer back through `destroy` so the module frees its own
//! allocation. Use [`export_strategy!`](crate::export_strategy) to generate
//! the entry point for any `Strategy + Default` type.
//!
//! ```rust,ignore
//! // lib.rs of a crate built with crate-type = ["cdylib"]
//! sevens_ai::export_strategy!(MyStrategy);
//! ```

use std::ffi::{CStr, CString, c_char, c_void};
use std::ptr::NonNull;

use sevens_engine::cards::Card;
use sevens_engine::player::{Decision, PlayerId, Strategy};
use sevens_engine::table::TableLayout;

/// Name of the factory symbol every strategy module exports.
pub const CREATE_STRATEGY_SYMBOL: &str = "sevens_create_strategy";

/// Signature of the exported factory.
pub type CreateStrategyFn = unsafe extern "C" fn() -> *mut RawStrategy;

/// Strategy instance as seen across the module boundary: an opaque state
/// pointer and the functions operating on it.
#[repr(C)]
pub struct RawStrategy {
    pub state: *mut c_void,
    pub initialize: unsafe extern "C" fn(state: *mut c_void, player_id: PlayerId),
    /// Returns the chosen index, or a negative value to pass.
    pub select_card: unsafe extern "C" fn(
        state: *mut c_void,
        hand: *const Card,
        hand_len: usize,
        table: *const TableLayout,
    ) -> i64,
    pub observe_move: unsafe extern "C" fn(state: *mut c_void, player_id: PlayerId, card: Card),
    pub observe_pass: unsafe extern "C" fn(state: *mut c_void, player_id: PlayerId),
    /// NUL-terminated name, valid until `destroy`.
    pub name: unsafe extern "C" fn(state: *const c_void) -> *const c_char,
    /// Frees the instance, including this struct.
    pub destroy: unsafe extern "C" fn(raw: *mut RawStrategy),
}

struct Exported<S> {
    strategy: S,
    name: CString,
}

impl RawStrategy {
    /// Moves `strategy` to the heap behind a C vtable.
    pub fn from_strategy<S: Strategy + 'static>(strategy: S) -> *mut RawStrategy {
        let name = CString::new(strategy.name().replace('\0', "")).unwrap_or_default();
        let state = Box::into_raw(Box::new(Exported { strategy, name })).cast::<c_void>();
        Box::into_raw(Box::new(RawStrategy {
            state,
            initialize: initialize_shim::<S>,
            select_card: select_card_shim::<S>,
            observe_move: observe_move_shim::<S>,
            observe_pass: observe_pass_shim::<S>,
            name: name_shim::<S>,
            destroy: destroy_shim::<S>,
        }))
    }
}

unsafe extern "C" fn initialize_shim<S: Strategy>(state: *mut c_void, player_id: PlayerId) {
    let exported = unsafe { &mut *state.cast::<Exported<S>>() };
    exported.strategy.initialize(player_id);
}

unsafe extern "C" fn select_card_shim<S: Strategy>(
    state: *mut c_void,
    hand: *const Card,
    hand_len: usize,
    table: *const TableLayout,
) -> i64 {
    let exported = unsafe { &mut *state.cast::<Exported<S>>() };
    let hand: &[Card] = if hand.is_null() || hand_len == 0 {
        &[]
    } else {
        unsafe { std::slice::from_raw_parts(hand, hand_len) }
    };
    let table = unsafe { &*table };
    match exported.strategy.select_card(hand, table) {
        Decision::Play(index) => i64::try_from(index).unwrap_or(-1),
        Decision::Pass => -1,
    }
}

unsafe extern "C" fn observe_move_shim<S: Strategy>(
    state: *mut c_void,
    player_id: PlayerId,
    card: Card,
) {
    let exported = unsafe { &mut *state.cast::<Exported<S>>() };
    exported.strategy.observe_move(player_id, card);
}

unsafe extern "C" fn observe_pass_shim<S: Strategy>(state: *mut c_void, player_id: PlayerId) {
    let exported = unsafe { &mut *state.cast::<Exported<S>>() };
    exported.strategy.observe_pass(player_id);
}

unsafe extern "C" fn name_shim<S: Strategy>(state: *const c_void) -> *const c_char {
    let exported = unsafe { &*state.cast::<Exported<S>>() };
    exported.name.as_ptr()
}

unsafe extern "C" fn destroy_shim<S: Strategy>(raw: *mut RawStrategy) {
    let raw = unsafe { Box::from_raw(raw) };
    drop(unsafe { Box::from_raw(raw.state.cast::<Exported<S>>()) });
}

/// Host-side handle on a [`RawStrategy`]; destroys it on drop.
///
/// Does not keep the providing module loaded: see
/// [`PluginStrategy`](crate::loader::PluginStrategy) for that.
pub(crate) struct ForeignStrategy {
    raw: NonNull<RawStrategy>,
    name: String,
}

impl ForeignStrategy {
    /// # Safety
    ///
    /// `raw` must come from a conforming factory, be owned by the caller and
    /// its code must stay loaded for the lifetime of the returned value.
    pub(crate) unsafe fn from_raw(raw: NonNull<RawStrategy>) -> Self {
        let vtable = unsafe { raw.as_ref() };
        let name_ptr = unsafe { (vtable.name)(vtable.state) };
        let name = if name_ptr.is_null() {
            String::new()
        } else {
            unsafe { CStr::from_ptr(name_ptr) }
                .to_string_lossy()
                .into_owned()
        };
        Self { raw, name }
    }

    fn vtable(&self) -> &RawStrategy {
        unsafe { self.raw.as_ref() }
    }
}

impl std::fmt::Debug for ForeignStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForeignStrategy")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl Strategy for ForeignStrategy {
    fn initialize(&mut self, player_id: PlayerId) {
        let vt = self.vtable();
        unsafe { (vt.initialize)(vt.state, player_id) }
    }

    fn select_card(&mut self, hand: &[Card], table: &TableLayout) -> Decision {
        let vt = self.vtable();
        let choice = unsafe { (vt.select_card)(vt.state, hand.as_ptr(), hand.len(), table) };
        usize::try_from(choice).map_or(Decision::Pass, Decision::Play)
    }

    fn observe_move(&mut self, player_id: PlayerId, card: Card) {
        let vt = self.vtable();
        unsafe { (vt.observe_move)(vt.state, player_id, card) }
    }

    fn observe_pass(&mut self, player_id: PlayerId) {
        let vt = self.vtable();
        unsafe { (vt.observe_pass)(vt.state, player_id) }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for ForeignStrategy {
    fn drop(&mut self) {
        let destroy = self.vtable().destroy;
        unsafe { destroy(self.raw.as_ptr()) }
    }
}

/// Exports `sevens_create_strategy` for a `Strategy + Default` type.
#[macro_export]
macro_rules! export_strategy {
    ($ty:ty) => {
        #[unsafe(no_mangle)]
        pub extern "C" fn sevens_create_strategy() -> *mut $crate::plugin::RawStrategy {
            $crate::plugin::RawStrategy::from_strategy(<$ty as ::core::default::Default>::default())
        }
    };
}
