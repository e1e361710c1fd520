//! Blocking TCP transport.
//!
//! Resolves the target host, establishes the connection with a connect
//! timeout, and applies the per-socket read/write deadlines. When a
//! proxy is configured the connection goes to the proxy endpoint and the
//! request itself carries the origin in absolute-form.

pub mod proxy;

pub use proxy::Proxy;

use crate::error::HttpError;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Establishes blocking TCP connections with timeouts applied.
#[derive(Debug, Clone)]
pub struct Connector {
    connect_timeout: Duration,
    io_timeout: Duration,
}

impl Connector {
    /// Creates a connector with the given connect and read/write
    /// timeouts.
    pub fn new(connect_timeout: Duration, io_timeout: Duration) -> Self {
        Self {
            connect_timeout,
            io_timeout,
        }
    }

    /// Connects to `host:port`, trying each resolved address in turn.
    ///
    /// # Errors
    ///
    /// [`HttpError::Network`] when resolution yields no addresses or
    /// every address fails; [`HttpError::Timeout`] when the connect
    /// deadline elapses.
    pub fn connect(&self, host: &str, port: u16) -> Result<TcpStream, HttpError> {
        let addrs: Vec<_> = (host, port)
            .to_socket_addrs()
            .map_err(|e| HttpError::Network(format!("failed to resolve {}: {}", host, e)))?
            .collect();

        if addrs.is_empty() {
            return Err(HttpError::Network(format!(
                "no addresses found for {}",
                host
            )));
        }

        let mut last_err = None;
        for addr in addrs {
            log::debug!("connecting to {} ({})", addr, host);
            match TcpStream::connect_timeout(&addr, self.connect_timeout) {
                Ok(stream) => {
                    stream.set_read_timeout(Some(self.io_timeout))?;
                    stream.set_write_timeout(Some(self.io_timeout))?;
                    stream.set_nodelay(true)?;
                    return Ok(stream);
                }
                Err(e) => {
                    log::debug!("connect to {} failed: {}", addr, e);
                    last_err = Some(e);
                }
            }
        }

        // At least one address was tried, so last_err is set.
        match last_err {
            Some(e) => Err(HttpError::from(e)),
            None => Err(HttpError::Network(format!("unable to connect to {}", host))),
        }
    }
}
