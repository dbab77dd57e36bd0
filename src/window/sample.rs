/// One recorded observation: a value tagged with its arrival second
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Sample<T> {
    pub timestamp: u64,
    pub value: T,
}

impl<T> From<(u64, T)> for Sample<T> {
    fn from((timestamp, value): (u64, T)) -> Sample<T> {
        Sample { timestamp, value }
    }
}
