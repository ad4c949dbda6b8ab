// Matplotlib's ten category colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color10 {
    Blue,
    Orange,
    Green,
    Red,
    Purple,
    Brown,
    Pink,
    Gray,
    Olive,
    Cyan,
}
