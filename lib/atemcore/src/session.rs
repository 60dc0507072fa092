//! The session engine: hello handshake, initial payload tracking, ACK and
//! resend policy, timeout reconnection, and dispatch of inbound sub-packets
//! into the state mirror. Runs on its own I/O thread, the sole writer of
//! the state mirror.

use std::net::SocketAddr;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use prism::logging::{debug, error, info, trace, warn, Logger};
use prism::time::has_timed_out;
use prism::util::hex_str;

use crate::config::ConnectionConfig;
use crate::decode;
use crate::events::Event;
use crate::net::buffer::ByteBuffer;
use crate::net::endpoint::Endpoint;
use crate::net::frame::{flags, FrameError, PacketHeader, HEADER_LEN};
use crate::net::shared::ErrorUtils;
use crate::protocol::{tags, Tag, CMD_HEADER_LEN, INPUT_BUFFER_LEN};
use crate::switcher::Inner;

pub(crate) struct SessionEngine {
    inner: Arc<Inner>,
    config: ConnectionConfig,
    peer: SocketAddr,
    log: Logger,
    endpoint: Option<Endpoint>,
    in_buf: ByteBuffer,
    never_connected: bool,
    waiting_for_incoming: bool,
    init_payload_done: bool,
    init_watermark: u16,
    missed: Vec<u8>,
    last_contact: Instant,
}

impl SessionEngine {
    pub fn new(
        inner: Arc<Inner>,
        config: ConnectionConfig,
        peer: SocketAddr,
        log: Logger,
    ) -> SessionEngine {
        let watermark = config.max_init_packets as u16;
        let bitmap_len = (config.max_init_packets + 7) / 8;

        SessionEngine {
            inner,
            config,
            peer,
            log,
            endpoint: None,
            in_buf: ByteBuffer::new(INPUT_BUFFER_LEN),
            never_connected: true,
            waiting_for_incoming: false,
            init_payload_done: false,
            init_watermark: watermark,
            missed: vec![0xFF; bitmap_len],
            last_contact: Instant::now(),
        }
    }

    /// I/O thread body. Runs until `disconnect` raises the exit flag.
    pub fn run(mut self) {
        debug!(self.log, "comms thread started"; "context" => "run");

        while self.tick() {
            thread::sleep(self.config.tick());
        }

        if let Some(endpoint) = self.endpoint.as_mut() {
            endpoint.close();
        }

        debug!(self.log, "comms thread finished"; "context" => "run");
    }

    fn exit_requested(&self) -> bool {
        self.inner.flags.exit.load(Ordering::SeqCst)
    }

    fn tick(&mut self) -> bool {
        if self.exit_requested() {
            return false;
        }

        if self.never_connected {
            self.never_connected = false;
            info!(self.log, "connecting for the first time"; "context" => "tick", "peer" => %self.peer);
            self.begin_session();
        }

        // Drain the endpoint until empty.
        loop {
            if self.exit_requested() {
                return false;
            }

            let endpoint = match self.endpoint.as_mut() {
                Some(endpoint) => endpoint,
                None => break,
            };

            let datagram = match endpoint.poll() {
                Ok(Some(datagram)) => datagram,
                Ok(None) => break,
                Err(err) => {
                    error!(self.log, "socket error"; "context" => "tick", "error" => ?err);
                    if self.inner.flags.connected.load(Ordering::SeqCst) {
                        self.inner.events.post(Event::Disconnect);
                    }
                    self.begin_session();
                    break;
                }
            };

            // On first contact only note that the switcher is alive. The
            // datagram stays queued so the caller gets a chance to
            // disconnect before any ACK disturbs the switcher.
            if !self.inner.flags.alive.load(Ordering::SeqCst) {
                debug!(self.log, "basic UDP connection established, switcher is alive";
                       "context" => "tick");
                self.inner.flags.alive.store(true, Ordering::SeqCst);
                if let Some(endpoint) = self.endpoint.as_mut() {
                    endpoint.requeue(datagram);
                }
                break;
            }

            if self.inner.flags.ping_mode.load(Ordering::SeqCst) {
                debug!(self.log, "ping mode active, ignoring received data"; "context" => "tick");
                if let Some(endpoint) = self.endpoint.as_mut() {
                    endpoint.flush();
                }
                break;
            }

            self.handle_datagram(&datagram);
        }

        // After initialization, chase any initial payload packets that were
        // missed, one resend request at a time.
        if !self.inner.flags.connected.load(Ordering::SeqCst)
            && self.init_payload_done
            && !self.waiting_for_incoming
        {
            for id in 1..self.init_watermark {
                if id as usize > self.config.max_init_packets {
                    break;
                }

                if self.missed[(id >> 3) as usize] & (1 << (id & 0x07)) != 0 {
                    debug!(self.log, "asking for missed init packet";
                           "context" => "tick", "remote_id" => id);
                    self.request_missing(id);
                    self.waiting_for_incoming = true;
                    break;
                }
            }

            if !self.waiting_for_incoming {
                self.inner.flags.connected.store(true, Ordering::SeqCst);
                info!(self.log, "initial payload complete, session connected"; "context" => "tick");
                self.inner.events.post(Event::Connect);
            }
        }

        if has_timed_out(self.last_contact, self.config.connection_timeout()) {
            warn!(self.log, "connection timed out - reconnecting"; "context" => "tick");
            if self.inner.flags.connected.load(Ordering::SeqCst) {
                self.inner.events.post(Event::Disconnect);
            }
            self.begin_session();
        }

        true
    }

    /// Reset all session state and dial the switcher with a hello packet.
    fn begin_session(&mut self) {
        self.init_payload_done = false;
        self.init_watermark = self.config.max_init_packets as u16;
        for byte in self.missed.iter_mut() {
            *byte = 0xFF;
        }
        self.waiting_for_incoming = false;
        self.last_contact = Instant::now();

        let session = &self.inner.flags;
        session.alive.store(false, Ordering::SeqCst);
        session.handshake_started.store(false, Ordering::SeqCst);
        session.connected.store(false, Ordering::SeqCst);
        session.session_id.store(0, Ordering::SeqCst);
        session.last_remote_id.store(0, Ordering::SeqCst);

        let endpoint = match Endpoint::connect(self.peer, &self.log) {
            Ok(endpoint) => endpoint,
            Err(err) => {
                // Retried once the contact timeout elapses.
                error!(self.log, "endpoint setup failed"; "context" => "begin_session", "error" => ?err);
                self.endpoint = None;
                return;
            }
        };

        let socket = endpoint.try_clone_socket().ok();
        self.endpoint = Some(endpoint);

        info!(self.log, "sending HELLO packet"; "context" => "begin_session");

        {
            let mut out = self.inner.outbound.lock().expect("outbound lock poisoned");
            out.reset_session(socket);
            out.stamp_header(flags::HELLO, HEADER_LEN, 0);
            out.buf.set_raw_u8(9, 0x3A);
            out.buf.set_raw_u8(11, 0x01);
            if out.send(HEADER_LEN).has_failed() {
                warn!(self.log, "hello send failed"; "context" => "begin_session");
            }
        }

        self.inner.events.post(Event::ConnectAttempt);
    }

    fn handle_datagram(&mut self, datagram: &[u8]) {
        let header = match PacketHeader::read(datagram) {
            Ok(header) => header,
            Err(FrameError::Truncated(len)) => {
                warn!(self.log, "malformed packet"; "context" => "handle_datagram", "bytes" => len);
                self.inner
                    .events
                    .post(Event::Warning(format!("malformed packet [{}]", hex_str(datagram))));
                return;
            }
        };

        let our_session = self.inner.flags.session_id.load(Ordering::SeqCst);

        if our_session == 0 && header.session_id != 0 {
            debug!(self.log, "received new session id";
                   "context" => "handle_datagram", "session_id" => header.session_id);
            self.inner.flags.session_id.store(header.session_id, Ordering::SeqCst);
            self.inner
                .outbound
                .lock()
                .expect("outbound lock poisoned")
                .session_id = header.session_id;
        } else if header.session_id != our_session {
            debug!(self.log, "ignoring packet for foreign session";
                   "context" => "handle_datagram", "session_id" => header.session_id);
            return;
        }

        let remote_id = header.local_id;
        self.inner.flags.last_remote_id.store(remote_id, Ordering::SeqCst);

        if (remote_id as usize) < self.config.max_init_packets {
            self.missed[(remote_id >> 3) as usize] &= !(1 << (remote_id & 0x07));
        }

        if datagram.len() < header.length as usize {
            warn!(self.log, "not enough data received";
                  "context" => "handle_datagram",
                  "datagram" => datagram.len(),
                  "length" => header.length);
            self.inner.events.post(Event::Warning(format!(
                "truncated packet, {} of {} bytes [{}]",
                datagram.len(),
                header.length,
                hex_str(&datagram[..datagram.len().min(16)])
            )));
            return;
        }

        self.last_contact = Instant::now();
        self.waiting_for_incoming = false;

        if header.has(flags::HELLO) {
            self.handle_hello(datagram, remote_id);
            return;
        }

        // A bare 12-byte packet with a remote id above one marks the end of
        // the initial bulk state dump.
        if !self.init_payload_done && header.length as usize == HEADER_LEN && remote_id > 1 {
            self.init_payload_done = true;
            self.init_watermark = remote_id;
            debug!(self.log, "initial payload received";
                   "context" => "handle_datagram", "watermark" => remote_id);
        }

        let connected = self.inner.flags.connected.load(Ordering::SeqCst);

        if header.has(flags::ACK_REQUEST) && (connected || !header.has(flags::RESEND)) {
            self.send_ack(remote_id);
        } else if self.init_payload_done && header.has(flags::REQUEST_NEXT_AFTER) && connected {
            debug!(self.log, "switcher requested a resend";
                   "context" => "handle_datagram", "remote_id" => header.resend_id);
            self.answer_resend_request(header.resend_id);
        }

        if datagram.len() > HEADER_LEN {
            // Parse the whole datagram, not just the advertised length.
            self.parse_body(datagram);
        }
    }

    fn handle_hello(&mut self, datagram: &[u8], remote_id: u16) {
        let book_status = datagram.get(HEADER_LEN).copied().unwrap_or(0);
        debug!(self.log, "received HELLO";
               "context" => "handle_hello",
               "book_status" => book_status,
               "extra" => hex_str(&datagram[HEADER_LEN.min(datagram.len())..]));

        if book_status == 3 {
            warn!(self.log, "switcher fully booked, reconnecting"; "context" => "handle_hello");
            self.inner
                .events
                .post(Event::Warning("switcher fully booked".to_string()));
            self.begin_session();
            return;
        }

        info!(self.log, "handshake started"; "context" => "handle_hello");
        self.inner.flags.handshake_started.store(true, Ordering::SeqCst);

        let mut out = self.inner.outbound.lock().expect("outbound lock poisoned");
        out.buf.reset();
        out.stamp_header(flags::HELLO, HEADER_LEN, remote_id);
        if out.send(HEADER_LEN).has_failed() {
            warn!(self.log, "hello answer send failed"; "context" => "handle_hello");
        }
    }

    fn send_ack(&mut self, remote_id: u16) {
        trace!(self.log, "sending ACK"; "context" => "send_ack", "remote_id" => remote_id);

        let mut out = self.inner.outbound.lock().expect("outbound lock poisoned");
        out.buf.reset();
        out.stamp_header(flags::ACK, HEADER_LEN, remote_id);
        if out.send(HEADER_LEN).has_failed() {
            warn!(self.log, "ack send failed"; "context" => "send_ack");
        }
    }

    /// Answer a retransmission request with an empty data packet so the
    /// switcher does not stall waiting for a packet we no longer hold.
    fn answer_resend_request(&mut self, requested: u16) {
        let mut out = self.inner.outbound.lock().expect("outbound lock poisoned");
        out.buf.reset();
        out.stamp_header(flags::ACK, HEADER_LEN, 0);
        // Rewritten into a data packet without advancing the id counter.
        out.buf.set_raw_u8(0, flags::ACK_REQUEST << 3);
        out.buf.set_raw_u16(10, requested);
        if out.send(HEADER_LEN).has_failed() {
            warn!(self.log, "resend answer failed"; "context" => "answer_resend_request");
        }
    }

    fn request_missing(&mut self, id: u16) {
        let mut out = self.inner.outbound.lock().expect("outbound lock poisoned");
        out.buf.reset();
        out.stamp_header(flags::REQUEST_NEXT_AFTER, HEADER_LEN, 0);
        out.buf.set_raw_u16(6, id.wrapping_sub(1));
        out.buf.set_raw_u8(8, 0x01);
        if out.send(HEADER_LEN).has_failed() {
            warn!(self.log, "resend request failed"; "context" => "request_missing");
        }
    }

    /// Split the datagram body into command sub-packets and dispatch each to
    /// its decoder. A malformed length drops the remainder without an ACK
    /// side effect.
    fn parse_body(&mut self, datagram: &[u8]) {
        let mut index = HEADER_LEN;

        while index + CMD_HEADER_LEN <= datagram.len() {
            let cmd_len =
                u16::from_be_bytes([datagram[index], datagram[index + 1]]) as usize;
            let tag = Tag([
                datagram[index + 4],
                datagram[index + 5],
                datagram[index + 6],
                datagram[index + 7],
            ]);

            if cmd_len < CMD_HEADER_LEN || index + cmd_len > datagram.len() || !tag.is_well_formed()
            {
                warn!(self.log, "bad command framing, dropping rest of packet";
                      "context" => "parse_body",
                      "cmd_len" => cmd_len,
                      "tag" => %tag);
                self.inner.events.post(Event::Warning(format!(
                    "bad command framing [{}]",
                    hex_str(&datagram[index..datagram.len().min(index + 16)])
                )));
                return;
            }

            self.dispatch(tag, &datagram[index + CMD_HEADER_LEN..index + cmd_len]);
            index += cmd_len;
        }
    }

    fn dispatch(&mut self, tag: Tag, payload: &[u8]) {
        self.in_buf.load(payload);
        let connected = self.inner.flags.connected.load(Ordering::SeqCst);

        if let Some(handler) = decode::handler_for(tag) {
            let result = {
                let mut state = self.inner.state.write().expect("state mirror poisoned");
                handler(&mut state, &self.in_buf, &self.log)
            };

            match result {
                Ok(()) => {
                    trace!(self.log, "decoded command"; "context" => "dispatch", "tag" => %tag);

                    // Events are suppressed during the handshake flood.
                    if connected {
                        self.inner.events.post(Event::Receive {
                            tag,
                            name: tags::name_of(tag).unwrap_or(""),
                        });

                        if tag == Tag(*b"Warn") {
                            let text = self
                                .inner
                                .state
                                .read()
                                .expect("state mirror poisoned")
                                .warning_text
                                .clone();
                            if !text.is_empty() {
                                self.inner.events.post(Event::Warning(text));
                            }
                        }
                    }
                }
                Err(err) => {
                    warn!(self.log, "decoder failed";
                          "context" => "dispatch", "tag" => %tag, "error" => %err);
                    self.inner
                        .events
                        .post(Event::Warning(format!("{} - processing [{}]", err, tag)));
                }
            }
        } else if tags::is_known(tag) {
            trace!(self.log, "received known command without decoder";
                   "context" => "dispatch", "tag" => %tag);
            if connected {
                self.inner.events.post(Event::Receive {
                    tag,
                    name: tags::name_of(tag).unwrap_or(""),
                });
            }
        } else {
            warn!(self.log, "received UNKNOWN command"; "context" => "dispatch", "tag" => %tag);
            self.inner
                .events
                .post(Event::Warning(format!("received UNKNOWN command [{}]", tag)));
        }
    }
}
