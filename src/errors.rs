/// Errors during execute-call decoding.
///
/// These never surface as reverts: the evaluation path maps every decode failure to a "not
/// permitted" verdict.
#[derive(Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload ends before a fixed-size read completes.
    Truncated,
    /// A head offset or length word points outside the payload.
    OutOfBounds,
}
