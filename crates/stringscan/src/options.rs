/// Configuration for a [`Scanner`](crate::Scanner).
///
/// These options only affect the diagnostic [`Display`](core::fmt::Display)
/// rendering; scanning semantics are fixed.
///
/// # Default
///
/// A five character window that starts two characters before the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScannerOptions {
    /// Number of characters shown in the rendered snippet.
    ///
    /// # Default
    ///
    /// `5`
    pub snippet_width: usize,

    /// Number of characters shown before the offset, when available.
    ///
    /// Near the end of the text the window shifts left so that it still
    /// shows `snippet_width` characters.
    ///
    /// # Default
    ///
    /// `2`
    pub snippet_lead: usize,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            snippet_width: 5,
            snippet_lead: 2,
        }
    }
}

/// What the interpreter stores in the current cell when `,` finds the input
/// exhausted.
#[cfg(feature = "brainfuck")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EofBehavior {
    /// Store `0`.
    #[default]
    Zero,
    /// Store `255`, i.e. `-1` in a wrapping byte cell.
    AllOnes,
    /// Leave the cell as it is.
    Unchanged,
}

/// Configuration for an [`Interpreter`](crate::brainfuck::Interpreter).
#[cfg(feature = "brainfuck")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InterpreterOptions {
    /// Number of cells on the tape. The data pointer wraps around at both
    /// ends. A value of `0` is treated as `1`.
    ///
    /// # Default
    ///
    /// `30000`
    pub tape_len: usize,

    /// Behavior of `,` once the input is exhausted.
    ///
    /// # Default
    ///
    /// [`EofBehavior::Zero`]
    pub eof: EofBehavior,
}

#[cfg(feature = "brainfuck")]
impl Default for InterpreterOptions {
    fn default() -> Self {
        Self {
            tape_len: 30_000,
            eof: EofBehavior::Zero,
        }
    }
}
