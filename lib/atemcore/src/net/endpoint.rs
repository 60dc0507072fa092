use std::collections::VecDeque;
use std::io;
use std::net::{SocketAddr, UdpSocket};
use std::thread;

use prism::logging::{self, debug, trace, Logger};
use prism::util::hex_str;

use crate::net::shared::NetworkResult;
use crate::protocol;

/// Non-blocking UDP endpoint, kernel-connected to the switcher address.
///
/// Inbound datagrams are drained from the socket into a FIFO queue each time
/// `poll` is called, so slow consumers never lose ordering. The endpoint never
/// blocks on receive; `send` may spin briefly while the kernel send buffer is
/// full.
pub struct Endpoint {
    socket: UdpSocket,
    queue: VecDeque<Vec<u8>>,
    log: Logger,
}

impl Endpoint {
    pub fn connect<'a, L: Into<Option<&'a Logger>>>(
        peer: SocketAddr,
        log: L,
    ) -> NetworkResult<Endpoint> {
        let log = match log.into() {
            Some(log) => log.new(logging::o!()),
            _ => logging::discard(),
        };

        let bind_addr: SocketAddr = match peer {
            SocketAddr::V4(_) => "0.0.0.0:0".parse()?,
            SocketAddr::V6(_) => "[::]:0".parse()?,
        };

        let socket = UdpSocket::bind(bind_addr)?;
        socket.connect(peer)?;
        socket.set_nonblocking(true)?;

        debug!(log, "endpoint connected"; "context" => "connect", "peer" => %peer);

        Ok(Endpoint {
            socket,
            queue: VecDeque::new(),
            log,
        })
    }

    /// Cloned handle to the underlying socket, used by the caller-thread
    /// send path.
    #[inline]
    pub fn try_clone_socket(&self) -> NetworkResult<UdpSocket> {
        Ok(self.socket.try_clone()?)
    }

    /// Return the next buffered datagram, draining the socket first.
    /// Never blocks.
    pub fn poll(&mut self) -> NetworkResult<Option<Vec<u8>>> {
        let mut scratch = [0u8; protocol::INPUT_BUFFER_LEN];

        loop {
            match self.socket.recv(&mut scratch) {
                Ok(count) => {
                    trace!(self.log, "received datagram";
                           "context" => "poll",
                           "bytes" => count,
                           "data" => hex_str(&scratch[..count.min(32)]));
                    self.queue.push_back(scratch[..count].to_vec());
                }
                Err(ref err) if err.kind() == io::ErrorKind::WouldBlock => break,
                // A connected UDP socket reports an unreachable peer as an
                // error on the next receive. Treat it as silence, the same
                // as a switcher that has not answered yet.
                Err(ref err)
                    if err.kind() == io::ErrorKind::ConnectionRefused
                        || err.kind() == io::ErrorKind::ConnectionReset =>
                {
                    break
                }
                Err(err) => return Err(err.into()),
            }
        }

        Ok(self.queue.pop_front())
    }

    /// Number of datagrams waiting in the queue.
    #[inline]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Put a polled datagram back at the head of the queue.
    #[inline]
    pub fn requeue(&mut self, datagram: Vec<u8>) {
        self.queue.push_front(datagram);
    }

    /// Discard all buffered input.
    pub fn flush(&mut self) {
        if !self.queue.is_empty() {
            debug!(self.log, "flushing input queue";
                   "context" => "flush",
                   "datagrams" => self.queue.len());
            self.queue.clear();
        }
    }

    /// Send one datagram, spinning while the kernel send buffer is full.
    pub fn send(&self, payload: &[u8]) -> NetworkResult<usize> {
        trace!(self.log, "sending datagram";
               "context" => "send",
               "bytes" => payload.len(),
               "data" => hex_str(payload));

        send_all(&self.socket, payload)
    }

    pub fn close(&mut self) {
        self.flush();
    }
}

/// Shared send path for the endpoint and the cloned caller-thread socket.
pub fn send_all(socket: &UdpSocket, payload: &[u8]) -> NetworkResult<usize> {
    loop {
        match socket.send(payload) {
            Ok(count) => return Ok(count),
            Err(ref err) if err.kind() == io::ErrorKind::WouldBlock => thread::yield_now(),
            Err(err) => return Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn socket_pair() -> (Endpoint, UdpSocket) {
        let remote = UdpSocket::bind("127.0.0.1:0").unwrap();
        let endpoint = Endpoint::connect(remote.local_addr().unwrap(), None).unwrap();
        remote
            .connect(endpoint.socket.local_addr().unwrap())
            .unwrap();

        (endpoint, remote)
    }

    fn poll_until(endpoint: &mut Endpoint) -> Option<Vec<u8>> {
        for _ in 0..500 {
            if let Some(data) = endpoint.poll().unwrap() {
                return Some(data);
            }
            thread::sleep(std::time::Duration::from_millis(1));
        }
        None
    }

    #[test]
    fn test_poll_returns_nothing_when_idle() {
        let (mut endpoint, _remote) = socket_pair();
        assert_eq!(endpoint.poll().unwrap(), None);
    }

    #[test]
    fn test_datagrams_are_fifo() {
        let (mut endpoint, remote) = socket_pair();

        remote.send(&[1, 2, 3]).unwrap();
        remote.send(&[4, 5]).unwrap();

        assert_eq!(poll_until(&mut endpoint).unwrap(), vec![1, 2, 3]);
        assert_eq!(poll_until(&mut endpoint).unwrap(), vec![4, 5]);
        assert_eq!(endpoint.poll().unwrap(), None);
    }

    #[test]
    fn test_send_reaches_peer() {
        let (endpoint, remote) = socket_pair();

        endpoint.send(&[0x10, 0x0C]).unwrap();

        remote
            .set_read_timeout(Some(std::time::Duration::from_secs(2)))
            .unwrap();
        let mut buf = [0u8; 16];
        let count = remote.recv(&mut buf).unwrap();

        assert_eq!(&buf[..count], &[0x10, 0x0C]);
    }

    #[test]
    fn test_flush_discards_input() {
        let (mut endpoint, remote) = socket_pair();

        remote.send(&[9, 9, 9]).unwrap();

        // Make sure the datagram is queued before flushing.
        let datagram = poll_until(&mut endpoint).unwrap();
        endpoint.requeue(datagram);
        assert_eq!(endpoint.pending(), 1);

        endpoint.flush();
        assert_eq!(endpoint.pending(), 0);
        assert_eq!(endpoint.poll().unwrap(), None);
    }
}
