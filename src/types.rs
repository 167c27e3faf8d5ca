pub type Int = i32;
pub type Var = String;
pub type Label = String;

/// 1-based position of a line in the source; index 0 of a program is filler.
pub type LineNumber = usize;
