// huskylens/src/device/handle.rs

//! Type-state session handle.

use std::fmt;
use std::time::Duration;

use log::{debug, info, warn};

use crate::constants::ACK_FRAME_LEN;
use crate::protocol::{Command, Frame, ReadOptions, Request, Response, codec, reader};
use crate::transport::Transport;
use crate::types::{Algorithm, Detection, InfoHeader, ObjectId, TransportKind};
use crate::{Error, Result};

/// Type-state markers
///
/// `Connected`: transport open, no algorithm selected yet.
pub struct Connected;

/// `ModeSet`: an algorithm was acknowledged by the sensor; polls allowed.
pub struct ModeSet {
    algorithm: Algorithm,
}

/// Session with one sensor. Owns the transport for its whole lifetime and
/// enforces the connect → set mode → poll order at compile time.
///
/// Every operation takes `&mut self` or `self`: the protocol matches
/// replies to requests by position only, so a session must never be
/// driven from two places at once.
///
/// Detection requests are only available once a mode is set:
///
/// ```compile_fail
/// use huskylens::protocol::Request;
/// use huskylens::transport::MockTransport;
/// use huskylens::Device;
///
/// let mut device = Device::new_with_transport(Box::new(MockTransport::new()));
/// let _ = device.execute(Request::Detections);
/// ```
pub struct Device<State = Connected> {
    transport: Box<dyn Transport>,
    options: ReadOptions,
    settle_delay: Duration,
    state: State,
}

impl Device<Connected> {
    /// Create a Device from an existing Transport instance, e.g. a
    /// `MockTransport` in tests. Strict framing, no settle delay.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::with_options(transport, ReadOptions::STRICT, Duration::ZERO)
    }

    pub(crate) fn with_options(
        transport: Box<dyn Transport>,
        options: ReadOptions,
        settle_delay: Duration,
    ) -> Self {
        Self {
            transport,
            options,
            settle_delay,
            state: Connected,
        }
    }

    /// Open the transport described by `config`.
    pub fn open(config: &crate::device::DeviceConfig) -> Result<Self> {
        crate::device::DeviceBuilder::from_config(config).build()
    }

    /// Select the detection algorithm. The sensor must acknowledge before
    /// the session may poll. Sleeps the configured settle delay on success.
    ///
    /// On failure the still-connected session comes back inside the
    /// error, so the caller can retry or `close` it.
    pub fn set_mode(
        mut self,
        algorithm: Algorithm,
    ) -> std::result::Result<Device<ModeSet>, SetModeError> {
        if let Err(source) = self.switch_algorithm(algorithm) {
            warn!("setting {} failed: {}", algorithm, source);
            return Err(SetModeError {
                device: self,
                source,
            });
        }
        Ok(Device {
            transport: self.transport,
            options: self.options,
            settle_delay: self.settle_delay,
            state: ModeSet { algorithm },
        })
    }
}

impl Device<ModeSet> {
    /// Algorithm last acknowledged by the sensor
    pub fn algorithm(&self) -> Algorithm {
        self.state.algorithm
    }

    /// Switch to another algorithm without leaving the polling state.
    pub fn set_mode(&mut self, algorithm: Algorithm) -> Result<()> {
        self.switch_algorithm(algorithm)?;
        self.state.algorithm = algorithm;
        Ok(())
    }

    /// Request every block and arrow the sensor currently sees.
    ///
    /// An empty list means the sensor saw nothing. Timeouts and framing
    /// errors are returned as-is; retrying is up to the caller.
    pub fn poll(&mut self) -> Result<Vec<Detection>> {
        self.poll_with_info().map(|(_, detections)| detections)
    }

    /// Like `poll`, also returning the info header.
    pub fn poll_with_info(&mut self) -> Result<(InfoHeader, Vec<Detection>)> {
        self.poll_request(Request::Detections)
    }

    /// Blocks only
    pub fn poll_blocks(&mut self) -> Result<Vec<Detection>> {
        self.poll_request(Request::Blocks).map(|(_, d)| d)
    }

    /// Arrows only
    pub fn poll_arrows(&mut self) -> Result<Vec<Detection>> {
        self.poll_request(Request::Arrows).map(|(_, d)| d)
    }

    /// Learned objects only
    pub fn poll_learned(&mut self) -> Result<Vec<Detection>> {
        self.poll_request(Request::Learned).map(|(_, d)| d)
    }

    /// Blocks and arrows carrying the learned `id`
    pub fn poll_by_id(&mut self, id: ObjectId) -> Result<Vec<Detection>> {
        self.poll_request(Request::ById(id)).map(|(_, d)| d)
    }

    /// Send a request and read its complete response.
    pub fn execute(&mut self, request: Request) -> Result<Response> {
        codec::send_request(&mut *self.transport, &request)?;
        reader::read_response(&mut *self.transport, self.options)
    }

    /// Issue any detection request and collect the announced frames.
    pub fn poll_request(&mut self, request: Request) -> Result<(InfoHeader, Vec<Detection>)> {
        if request.expects_ack() {
            return Err(Error::UnsupportedOperation(format!(
                "{:?} is not a detection request",
                request
            )));
        }
        match self.execute(request)? {
            Response::Detections { info, detections } => Ok((info, detections)),
            other => Err(Error::UnexpectedResponse {
                expected: Command::ReturnInfo.code(),
                actual: other.command().code(),
            }),
        }
    }
}

impl<State> Device<State> {
    /// Liveness probe. Succeeds only if the sensor answers with the exact
    /// acknowledgement frame.
    pub fn knock(&mut self) -> Result<()> {
        self.request_ack(Request::Knock)
    }

    /// Release the transport. Consumes the session, so it happens once.
    pub fn close(mut self) -> Result<()> {
        debug!("closing {:?} transport", self.transport.kind());
        self.transport.close()
    }

    /// Which kind of link the session runs over
    pub fn transport_kind(&self) -> TransportKind {
        self.transport.kind()
    }

    /// Reader options in effect
    pub fn read_options(&self) -> ReadOptions {
        self.options
    }

    fn switch_algorithm(&mut self, algorithm: Algorithm) -> Result<()> {
        self.request_ack(Request::SetAlgorithm(algorithm))?;
        info!("algorithm set to {}", algorithm);
        if !self.settle_delay.is_zero() {
            std::thread::sleep(self.settle_delay);
        }
        Ok(())
    }

    fn request_ack(&mut self, request: Request) -> Result<()> {
        codec::send_request(&mut *self.transport, &request)?;
        let actual = reader::read_frame_with(&mut *self.transport, ACK_FRAME_LEN, self.options)?;
        let expected = Frame::ack_bytes();
        if actual != expected {
            return Err(Error::UnexpectedAck { expected, actual });
        }
        Ok(())
    }
}

/// A failed `Device<Connected>::set_mode`. Owns the session so it is
/// not lost with the error.
#[derive(thiserror::Error)]
#[error("set mode failed: {source}")]
pub struct SetModeError {
    device: Device<Connected>,
    source: Error,
}

impl SetModeError {
    /// The underlying driver error
    pub fn error(&self) -> &Error {
        &self.source
    }

    /// Take back the session for a retry or a clean close.
    pub fn into_device(self) -> Device<Connected> {
        self.device
    }

    /// Split into the session and the error that stopped it.
    pub fn into_parts(self) -> (Device<Connected>, Error) {
        (self.device, self.source)
    }
}

impl fmt::Debug for SetModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetModeError")
            .field("transport", &self.device.transport_kind())
            .field("source", &self.source)
            .finish()
    }
}

/// Dropping the session: the transport is released when it goes out of
/// scope. Lets `?` work in functions returning `huskylens::Result`.
impl From<SetModeError> for Error {
    fn from(err: SetModeError) -> Self {
        err.source
    }
}
