use bitflags::bitflags;

bitflags! {
    /// Classification returned by a bounds update. An empty set means the
    /// operation changed nothing; `POSITION` and `SIZE` are independent and
    /// may both be set.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct BoundsChange: u8 {
        /// The top-left corner moved.
        const POSITION = 1 << 0;
        /// The width or height changed.
        const SIZE = 1 << 1;
    }
}
