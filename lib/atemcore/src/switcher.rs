//! The public switcher facade: session lifecycle, state access, event
//! subscription and the entry points the setter modules hang off.

use std::net::{IpAddr, SocketAddr};
use std::sync::atomic::{AtomicBool, AtomicU16, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use prism::logging::{self, debug, Logger};

use crate::commands::Outbound;
use crate::config::ConnectionConfig;
use crate::error::{AtemError, AtemResult};
use crate::events::{Event, EventHub, EventKind};
use crate::session::SessionEngine;
use crate::state::SwitcherState;

pub(crate) struct SessionFlags {
    pub started: AtomicBool,
    pub alive: AtomicBool,
    pub handshake_started: AtomicBool,
    pub connected: AtomicBool,
    pub exit: AtomicBool,
    pub ping_mode: AtomicBool,
    pub session_id: AtomicU16,
    pub last_remote_id: AtomicU16,
}

impl SessionFlags {
    fn new() -> SessionFlags {
        SessionFlags {
            started: AtomicBool::new(false),
            alive: AtomicBool::new(false),
            handshake_started: AtomicBool::new(false),
            connected: AtomicBool::new(false),
            exit: AtomicBool::new(false),
            ping_mode: AtomicBool::new(false),
            session_id: AtomicU16::new(0),
            last_remote_id: AtomicU16::new(0),
        }
    }
}

pub(crate) struct Inner {
    pub log: Logger,
    pub flags: SessionFlags,
    pub state: RwLock<SwitcherState>,
    pub outbound: Mutex<Outbound>,
    pub events: EventHub,
    pub config: Mutex<ConnectionConfig>,
}

struct Workers {
    io: Option<JoinHandle<()>>,
    events: Option<JoinHandle<()>>,
}

/// A client session with one switcher. Owns its socket and worker threads;
/// several switchers may coexist in one process.
pub struct Switcher {
    pub(crate) inner: Arc<Inner>,
    workers: Mutex<Workers>,
}

impl Switcher {
    pub fn new() -> Switcher {
        Switcher::with_logger(logging::discard())
    }

    pub fn with_logger(log: Logger) -> Switcher {
        Switcher {
            inner: Arc::new(Inner {
                log,
                flags: SessionFlags::new(),
                state: RwLock::new(SwitcherState::default()),
                outbound: Mutex::new(Outbound::new()),
                events: EventHub::new(),
                config: Mutex::new(ConnectionConfig::default()),
            }),
            workers: Mutex::new(Workers { io: None, events: None }),
        }
    }

    /// Start a connection with the switcher at `ip` using default tunables.
    pub fn connect(&self, ip: &str) -> AtemResult<()> {
        self.connect_with(ip, ConnectionConfig::default(), false)
    }

    /// Start a connection with explicit tunables. In ping mode the session
    /// stops after the handshake and never acknowledges state, leaving the
    /// switcher's session table untouched.
    pub fn connect_with(
        &self,
        ip: &str,
        config: ConnectionConfig,
        ping_mode: bool,
    ) -> AtemResult<()> {
        if self.inner.flags.started.load(Ordering::SeqCst) {
            debug!(self.inner.log, "closing previous connection"; "context" => "connect");
            self.disconnect();
        }

        let ip: IpAddr = ip.parse()?;
        let peer = SocketAddr::new(ip, config.udp_port);

        let flags = &self.inner.flags;
        flags.exit.store(false, Ordering::SeqCst);
        flags.alive.store(false, Ordering::SeqCst);
        flags.handshake_started.store(false, Ordering::SeqCst);
        flags.connected.store(false, Ordering::SeqCst);
        flags.session_id.store(0, Ordering::SeqCst);
        flags.last_remote_id.store(0, Ordering::SeqCst);
        flags.ping_mode.store(ping_mode, Ordering::SeqCst);

        *self.inner.config.lock().expect("config lock poisoned") = config.clone();

        let receiver = self.inner.events.open();

        let engine = SessionEngine::new(
            self.inner.clone(),
            config,
            peer,
            self.inner.log.new(logging::o!()),
        );

        let io = thread::Builder::new()
            .name("atem-io".to_string())
            .spawn(move || engine.run())?;

        let hub = self.inner.clone();
        let events = thread::Builder::new().name("atem-events".to_string()).spawn(move || {
            let log = hub.log.new(logging::o!());
            hub.events.run(receiver, &log);
        })?;

        let mut workers = self.workers.lock().expect("worker registry poisoned");
        workers.io = Some(io);
        workers.events = Some(events);

        self.inner.flags.started.store(true, Ordering::SeqCst);

        Ok(())
    }

    /// Reachability check: performs the handshake but never ACKs state.
    pub fn ping(&self, ip: &str, timeout_secs: f64) -> AtemResult<()> {
        let config = ConnectionConfig {
            connection_timeout_secs: timeout_secs,
            ..ConnectionConfig::default()
        };

        self.connect_with(ip, config, true)
    }

    /// Close the connection and join both worker threads. Idempotent.
    pub fn disconnect(&self) {
        if !self.inner.flags.started.swap(false, Ordering::SeqCst) {
            return;
        }

        debug!(self.inner.log, "stopping connection"; "context" => "disconnect");
        self.inner.flags.exit.store(true, Ordering::SeqCst);

        let mut workers = self.workers.lock().expect("worker registry poisoned");
        if let Some(io) = workers.io.take() {
            let _ = io.join();
        }

        self.inner.events.close();
        if let Some(events) = workers.events.take() {
            let _ = events.join();
        }

        let flags = &self.inner.flags;
        flags.alive.store(false, Ordering::SeqCst);
        flags.handshake_started.store(false, Ordering::SeqCst);
        flags.connected.store(false, Ordering::SeqCst);
        flags.ping_mode.store(false, Ordering::SeqCst);
        flags.session_id.store(0, Ordering::SeqCst);
        flags.last_remote_id.store(0, Ordering::SeqCst);
        flags.exit.store(false, Ordering::SeqCst);

        self.inner
            .outbound
            .lock()
            .expect("outbound lock poisoned")
            .reset_session(None);
        *self.inner.state.write().expect("state mirror poisoned") = SwitcherState::default();
    }

    /// Wait indefinitely for the full handshake (ping mode waits for the
    /// first datagram with the default handshake timeout instead).
    pub fn wait_for_connection(&self) -> bool {
        self.wait(None, true, true)
    }

    /// Wait with an explicit timeout. `None` falls back to the configured
    /// defaults: the connection timeout for a full handshake wait, the
    /// handshake timeout otherwise.
    pub fn wait_for_connection_with(
        &self,
        timeout: Option<Duration>,
        wait_full_handshake: bool,
    ) -> bool {
        self.wait(timeout, wait_full_handshake, false)
    }

    fn wait(&self, timeout: Option<Duration>, wait_full_handshake: bool, infinite: bool) -> bool {
        let ping = self.inner.flags.ping_mode.load(Ordering::SeqCst);
        let wait_full_handshake = wait_full_handshake && !ping;

        let timeout = match (timeout, infinite && !ping) {
            (Some(timeout), _) => Some(timeout),
            (None, true) => None,
            (None, false) => {
                let config = self.inner.config.lock().expect("config lock poisoned");
                Some(prism::choose!(wait_full_handshake => config.connection_timeout(),
                                    config.handshake_timeout()))
            }
        };

        let start = Instant::now();
        let expired =
            |timeout: Option<Duration>| timeout.map_or(false, |limit| start.elapsed() >= limit);

        while !self.inner.flags.alive.load(Ordering::SeqCst) {
            if !self.inner.flags.started.load(Ordering::SeqCst) || expired(timeout) {
                return false;
            }
            thread::sleep(Duration::from_millis(10));
        }

        if wait_full_handshake {
            while !self.inner.flags.connected.load(Ordering::SeqCst) {
                if !self.inner.flags.started.load(Ordering::SeqCst) || expired(timeout) {
                    return false;
                }
                thread::sleep(Duration::from_millis(10));
            }
        }

        true
    }

    /// True once the initial payload is fully received and acknowledged.
    #[inline]
    pub fn is_connected(&self) -> bool {
        self.inner.flags.connected.load(Ordering::SeqCst)
    }

    /// True once any datagram has arrived from the switcher.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.inner.flags.alive.load(Ordering::SeqCst)
    }

    #[inline]
    pub fn handshake_started(&self) -> bool {
        self.inner.flags.handshake_started.load(Ordering::SeqCst)
    }

    /// Session id assigned by the switcher; zero before the hello reply.
    #[inline]
    pub fn session_id(&self) -> u16 {
        self.inner.flags.session_id.load(Ordering::SeqCst)
    }

    #[inline]
    pub fn last_remote_packet_id(&self) -> u16 {
        self.inner.flags.last_remote_id.load(Ordering::SeqCst)
    }

    /// Read access to the state mirror. The mirror is written by the I/O
    /// thread; treat reads as eventually consistent snapshots and keep the
    /// guard short-lived.
    pub fn state(&self) -> RwLockReadGuard<'_, SwitcherState> {
        self.inner.state.read().expect("state mirror poisoned")
    }

    pub(crate) fn state_mut(&self) -> RwLockWriteGuard<'_, SwitcherState> {
        self.inner.state.write().expect("state mirror poisoned")
    }

    /// Subscribe to session events. Callbacks run on the event thread and
    /// must be thread-safe with respect to concurrent API calls.
    pub fn on<F>(&self, kind: EventKind, callback: F)
    where
        F: Fn(&Event) + Send + Sync + 'static,
    {
        self.inner.events.subscribe(kind, Box::new(callback));
    }

    /// Start packing subsequent setters into one datagram.
    pub fn bundle_begin(&self) -> AtemResult<()> {
        if !self.is_connected() {
            return Err(AtemError::NotConnected);
        }

        self.inner
            .outbound
            .lock()
            .expect("outbound lock poisoned")
            .bundle_begin();
        Ok(())
    }

    /// Send the accumulated bundle as a single packet.
    pub fn bundle_end(&self) -> AtemResult<()> {
        if !self.is_connected() {
            return Err(AtemError::NotConnected);
        }

        self.inner
            .outbound
            .lock()
            .expect("outbound lock poisoned")
            .bundle_end()
    }

    /// Common setter entry: the session must be connected, and the caller
    /// gets the locked outbound channel.
    pub(crate) fn begin_command(&self) -> AtemResult<MutexGuard<'_, Outbound>> {
        if !self.is_connected() {
            return Err(AtemError::NotConnected);
        }

        Ok(self.inner.outbound.lock().expect("outbound lock poisoned"))
    }
}

impl Drop for Switcher {
    fn drop(&mut self) {
        self.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::enums::{MixEffect, VideoSource};
    use std::net::UdpSocket;
    use std::sync::mpsc;

    /// Minimal scripted switcher on loopback.
    struct FakeSwitcher {
        socket: UdpSocket,
        client: Option<SocketAddr>,
    }

    impl FakeSwitcher {
        fn new() -> FakeSwitcher {
            let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
            socket
                .set_read_timeout(Some(Duration::from_secs(5)))
                .unwrap();

            FakeSwitcher { socket, client: None }
        }

        fn port(&self) -> u16 {
            self.socket.local_addr().unwrap().port()
        }

        fn recv(&mut self) -> Vec<u8> {
            let mut buf = [0u8; 2048];
            let (count, from) = self.socket.recv_from(&mut buf).unwrap();
            self.client = Some(from);
            buf[..count].to_vec()
        }

        fn send(&self, data: &[u8]) {
            self.socket.send_to(data, self.client.unwrap()).unwrap();
        }

        /// Run the documented handshake plus a two-packet initial payload
        /// carrying one PrgI update.
        fn run_handshake(&mut self) {
            let hello = self.recv();
            assert_eq!(
                hello,
                [0x10, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3A, 0x00, 0x01]
            );

            self.send(&[
                0x18, 0x14, 0x5D, 0xB7, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x00, 0x01, 0x02,
                0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
            ]);

            let answer = self.recv();
            assert_eq!(
                answer,
                [0x10, 0x0C, 0x5D, 0xB7, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
            );

            // Initial payload packet id 1: program input mE1 = input5.
            self.send(&[
                0x08, 0x18, 0x5D, 0xB7, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00,
                0x0C, 0x00, 0x00, 0x50, 0x72, 0x67, 0x49, 0x00, 0x00, 0x00, 0x05,
            ]);

            let ack1 = self.recv();
            assert_eq!(ack1[0], 0x80);
            assert_eq!(&ack1[2..6], &[0x5D, 0xB7, 0x00, 0x01]);

            // Bare 12-byte packet with id 2 ends the initial payload.
            self.send(&[
                0x08, 0x0C, 0x5D, 0xB7, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02,
            ]);

            let ack2 = self.recv();
            assert_eq!(ack2[0], 0x80);
            assert_eq!(&ack2[4..6], &[0x00, 0x02]);
        }
    }

    fn connect(fake: &FakeSwitcher) -> Switcher {
        let switcher = Switcher::new();
        let config = ConnectionConfig {
            udp_port: fake.port(),
            connection_timeout_secs: 5.0,
            ..ConnectionConfig::default()
        };
        switcher.connect_with("127.0.0.1", config, false).unwrap();
        switcher
    }

    #[test]
    fn test_handshake_and_state_sync() {
        let mut fake = FakeSwitcher::new();
        let switcher = connect(&fake);

        let (tx, rx) = mpsc::channel();
        switcher.on(EventKind::Connect, move |_| {
            let _ = tx.send(());
        });

        fake.run_handshake();

        assert!(switcher.wait_for_connection_with(Some(Duration::from_secs(5)), true));
        rx.recv_timeout(Duration::from_secs(5)).unwrap();

        assert!(switcher.is_alive());
        assert!(switcher.is_connected());
        assert!(switcher.handshake_started());
        assert_eq!(switcher.session_id(), 0x5DB7);
        assert_eq!(
            switcher.state().program_input[MixEffect::MixEffect1].video_source,
            Some(VideoSource::Input5)
        );

        switcher.disconnect();
        assert!(!switcher.is_connected());
    }

    #[test]
    fn test_set_program_input_wire_bytes() {
        let mut fake = FakeSwitcher::new();
        let switcher = connect(&fake);

        fake.run_handshake();
        assert!(switcher.wait_for_connection_with(Some(Duration::from_secs(5)), true));

        switcher.set_program_input(0, 3).unwrap();

        let datagram = fake.recv();
        assert_eq!(datagram[0], 0x08);
        assert_eq!(datagram[1], 24);
        assert_eq!(&datagram[2..4], &[0x5D, 0xB7]);
        assert_eq!(&datagram[10..12], &[0x00, 0x01]);
        assert_eq!(
            &datagram[12..],
            &[0x00, 0x0C, 0x00, 0x00, 0x43, 0x50, 0x67, 0x49, 0x00, 0x00, 0x00, 0x03]
        );

        switcher.disconnect();
    }

    #[test]
    fn test_bundled_wipe_setters_coalesce() {
        let mut fake = FakeSwitcher::new();
        let switcher = connect(&fake);

        fake.run_handshake();
        assert!(switcher.wait_for_connection_with(Some(Duration::from_secs(5)), true));

        switcher.bundle_begin().unwrap();
        switcher.set_transition_wipe_rate(0, 30).unwrap();
        switcher.set_transition_wipe_pattern(0, 7).unwrap();
        switcher.bundle_end().unwrap();

        let datagram = fake.recv();

        // One CTWp sub-packet of 20 payload bytes, field bits 0 and 1 in
        // byte 1, rate at offset 3 and pattern at offset 4.
        assert_eq!(datagram.len(), 40);
        assert_eq!(&datagram[16..20], b"CTWp");
        assert_eq!(datagram[21], 0x03);
        assert_eq!(datagram[22], 0x00);
        assert_eq!(datagram[23], 30);
        assert_eq!(datagram[24], 7);

        switcher.disconnect();
    }

    #[test]
    fn test_missed_init_packet_is_chased_before_connect() {
        let mut fake = FakeSwitcher::new();
        let switcher = connect(&fake);

        let hello = fake.recv();
        assert_eq!(hello[0], 0x10);
        fake.send(&[
            0x18, 0x14, 0x5D, 0xB7, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x00, 0x01, 0x02, 0x01,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ]);
        let _answer = fake.recv();

        // Send init packets 1 and 3, skipping 2, then the end marker id 4.
        fake.send(&[
            0x08, 0x0C, 0x5D, 0xB7, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
        ]);
        let _ack1 = fake.recv();
        fake.send(&[
            0x08, 0x0C, 0x5D, 0xB7, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03,
        ]);
        let _ack3 = fake.recv();
        fake.send(&[
            0x08, 0x0C, 0x5D, 0xB7, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04,
        ]);

        // Wait: id 3 is an init packet but id 4 is the completion marker,
        // so an ACK for 4 arrives first, then the resend request for id 2.
        let mut request = fake.recv();
        if request[0] == 0x80 {
            request = fake.recv();
        }

        // requestNextAfter: flags 0x08 << 3 = 0x40, resend id field = 1,
        // 0x01 at offset 8.
        assert_eq!(request[0], 0x40);
        assert_eq!(&request[6..8], &[0x00, 0x01]);
        assert_eq!(request[8], 0x01);
        assert!(!switcher.is_connected());

        // Deliver the missing packet as a resend; the session completes.
        fake.send(&[
            0x28, 0x0C, 0x5D, 0xB7, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02,
        ]);

        assert!(switcher.wait_for_connection_with(Some(Duration::from_secs(5)), true));

        switcher.disconnect();
    }

    #[test]
    fn test_setter_before_connect_is_an_error() {
        let switcher = Switcher::new();
        let result = switcher.set_program_input(0, 3);
        assert_eq!(result.unwrap_err(), AtemError::NotConnected);
    }

    #[test]
    fn test_setter_rejects_bad_enum_name() {
        let mut fake = FakeSwitcher::new();
        let switcher = connect(&fake);

        fake.run_handshake();
        assert!(switcher.wait_for_connection_with(Some(Duration::from_secs(5)), true));

        let result = switcher.set_program_input(0, "inputFortyTwoThousand");
        assert!(matches!(result, Err(AtemError::UnknownName { .. })));

        switcher.disconnect();
    }

    #[test]
    fn test_ping_mode_acknowledges_nothing() {
        let mut fake = FakeSwitcher::new();
        let switcher = Switcher::new();
        let config = ConnectionConfig {
            udp_port: fake.port(),
            connection_timeout_secs: 5.0,
            ..ConnectionConfig::default()
        };
        switcher.connect_with("127.0.0.1", config, true).unwrap();

        let hello = fake.recv();
        assert_eq!(hello[0], 0x10);

        fake.send(&[
            0x18, 0x14, 0x5D, 0xB7, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x00, 0x01, 0x02, 0x01,
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ]);

        assert!(switcher.wait_for_connection_with(Some(Duration::from_secs(5)), false));
        assert!(switcher.is_alive());
        assert!(!switcher.is_connected());

        // The client stays silent: no hello answer, no ACKs.
        fake.socket
            .set_read_timeout(Some(Duration::from_millis(300)))
            .unwrap();
        let mut buf = [0u8; 64];
        assert!(fake.socket.recv_from(&mut buf).is_err());

        switcher.disconnect();
    }

    #[test]
    fn test_disconnect_is_idempotent() {
        let switcher = Switcher::new();
        switcher.disconnect();
        switcher.disconnect();
    }
}
