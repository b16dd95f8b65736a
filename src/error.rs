use thiserror::Error;

/// Errors from the programmatic edit API of the host field.
///
/// Keystroke-driven edits never fail; these only surface when an integrator
/// passes explicit offsets.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EditError {
    #[error("char range {start}..{end} out of bounds for {len} chars")]
    RangeOutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("no suggestion source is active")]
    NoActiveSource,
}
