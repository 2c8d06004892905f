//! Layer 5: Adapters
//!
//! This layer provides the user-facing processors of each fill strategy:
//!
//! - **GaussSeidel**: In-place relaxation of the undefined cells
//! - **Loess**: Tri-cube weighted extrapolation into a new grid

// Gauss-Seidel relaxation processor.
pub mod relaxation;

// LOESS extrapolation processor.
pub mod loess;
