//! Loading strategies from shared libraries at runtime.

use std::path::{Path, PathBuf};
use std::ptr::NonNull;

use libloading::Library;
use sevens_engine::cards::Card;
use sevens_engine::player::{Decision, PlayerId, Strategy};
use sevens_engine::table::TableLayout;
use thiserror::Error;
use tracing::{info, warn};

use crate::plugin::{CREATE_STRATEGY_SYMBOL, CreateStrategyFn, ForeignStrategy};

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Failed to load library {}: {message}", path.display())]
    LoadFailed { path: PathBuf, message: String },
    #[error("Library {} does not export `sevens_create_strategy`: {message}", path.display())]
    SymbolNotFound { path: PathBuf, message: String },
    #[error("Library {} failed to create a strategy: {message}", path.display())]
    InstantiationFailed { path: PathBuf, message: String },
}

impl LoaderError {
    pub fn path(&self) -> &Path {
        match self {
            Self::LoadFailed { path, .. }
            | Self::SymbolNotFound { path, .. }
            | Self::InstantiationFailed { path, .. } => path,
        }
    }
}

/// A strategy created by a loaded library, bundled with the library itself.
///
/// Field order matters: the instance is destroyed before the library is
/// unloaded.
pub struct PluginStrategy {
    strategy: ForeignStrategy,
    path: PathBuf,
    _library: Library,
}

impl PluginStrategy {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for PluginStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginStrategy")
            .field("name", &self.strategy.name())
            .field("path", &self.path)
            .finish()
    }
}

impl Strategy for PluginStrategy {
    fn initialize(&mut self, player_id: PlayerId) {
        self.strategy.initialize(player_id)
    }

    fn select_card(&mut self, hand: &[Card], table: &TableLayout) -> Decision {
        self.strategy.select_card(hand, table)
    }

    fn observe_move(&mut self, player_id: PlayerId, card: Card) {
        self.strategy.observe_move(player_id, card)
    }

    fn observe_pass(&mut self, player_id: PlayerId) {
        self.strategy.observe_pass(player_id)
    }

    fn name(&self) -> &str {
        self.strategy.name()
    }
}

/// Opens the shared library at `path` and instantiates the strategy it exports.
///
/// # Errors
///
/// - [`LoaderError::LoadFailed`] if the library cannot be opened
/// - [`LoaderError::SymbolNotFound`] if it lacks the factory symbol
/// - [`LoaderError::InstantiationFailed`] if the factory returns null
pub fn load_strategy(path: impl AsRef<Path>) -> Result<PluginStrategy, LoaderError> {
    let path = path.as_ref().to_path_buf();

    // SAFETY: running a library's initialisers is inherent to loading it; the
    // caller chose the path.
    let library = unsafe { Library::new(&path) }.map_err(|e| {
        warn!(path = %path.display(), error = %e, "library load failed");
        LoaderError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        }
    })?;

    // SAFETY: the symbol type matches the documented factory signature.
    let factory = unsafe { library.get::<CreateStrategyFn>(CREATE_STRATEGY_SYMBOL.as_bytes()) }
        .map(|symbol| *symbol)
        .map_err(|e| {
            warn!(path = %path.display(), error = %e, "factory symbol missing");
            LoaderError::SymbolNotFound {
                path: path.clone(),
                message: e.to_string(),
            }
        })?;

    // SAFETY: `factory` was resolved from `library`, which the capsule keeps
    // alive for as long as the instance exists.
    let strategy = unsafe { instantiate(&path, factory) }?;
    info!(path = %path.display(), strategy = strategy.name(), "strategy loaded");

    Ok(PluginStrategy {
        strategy,
        path,
        _library: library,
    })
}

/// # Safety
///
/// `factory` must follow the plugin ABI and its code must remain loaded for
/// the lifetime of the returned strategy.
unsafe fn instantiate(path: &Path, factory: CreateStrategyFn) -> Result<ForeignStrategy, LoaderError> {
    let raw = unsafe { factory() };
    match NonNull::new(raw) {
        Some(raw) => Ok(unsafe { ForeignStrategy::from_raw(raw) }),
        None => {
            warn!(path = %path.display(), "factory returned null");
            Err(LoaderError::InstantiationFailed {
                path: path.to_path_buf(),
                message: "factory returned a null instance".to_string(),
            })
        }
    }
}
