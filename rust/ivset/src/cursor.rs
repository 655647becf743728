/// A stable handle to one stored interval.
///
/// The handle remembers the interval's start rather than a slot position, so
/// it stays meaningful while the set reallocates or reshuffles buckets. It
/// turns stale once that interval is erased, merged or split; passing a stale
/// cursor to `remove` is a contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor<T> {
    start: T,
}

impl<T: Copy> Cursor<T> {
    #[inline]
    pub(crate) fn new(start: T) -> Cursor<T> {
        Cursor { start }
    }

    /// Start of the interval this cursor refers to.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }
}
