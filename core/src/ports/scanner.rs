//! Socket table port (interface).

use crate::error::Result;

/// Port for querying the OS socket table.
///
/// Implementations run the platform utility and hand back its raw output;
/// parsing happens separately so it can be tested against captured text.
pub trait SocketSource: Send + Sync {
    /// Raw listing of listening TCP sockets.
    fn listening(&self) -> impl std::future::Future<Output = Result<String>> + Send;

    /// Process IDs bound to `port`. Empty when nothing is bound.
    fn pids_on_port(&self, port: u16)
        -> impl std::future::Future<Output = Result<Vec<u32>>> + Send;
}
