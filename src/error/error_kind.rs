/// Describes the service specific error types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Error caused by the error on the client side.
    ClientError,
    /// Error caused by the lack of privileges to perform an action.
    AccessForbidden,
    /// Error caused by a reference to the resource that doesn't exist.
    NotFound,
    /// Unknown error.
    Unknown,
}
