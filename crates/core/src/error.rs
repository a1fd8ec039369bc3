use thiserror::Error;

/// Invalid board dimensions. Fatal at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("grid size must be at least 1")]
    EmptyGrid,

    #[error("a {grid_size}x{grid_size} grid has an odd number of cards")]
    OddCardCount { grid_size: u8 },

    #[error("{pairs} pairs need {pairs} colors but the palette only has {palette_size}")]
    NotEnoughColors { pairs: usize, palette_size: usize },

    #[error("a dealt board must hold every pair id in 0..{pairs} exactly twice")]
    UnbalancedPairs { pairs: usize },
}
