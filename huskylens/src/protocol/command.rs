// huskylens/src/protocol/command.rs

//! Command bytes of the frame protocol.

use std::convert::TryFrom;
use std::fmt;

use crate::Error;

/// Command byte carried at offset 4 of every frame. The set is closed:
/// bytes outside it are rejected with `Error::UnknownCommand`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Every block and arrow
    Request = 0x20,
    /// Blocks only
    RequestBlocks = 0x21,
    /// Arrows only
    RequestArrows = 0x22,
    /// Learned objects only
    RequestLearned = 0x23,
    /// Learned blocks
    RequestBlocksLearned = 0x24,
    /// Learned arrows
    RequestArrowsLearned = 0x25,
    /// Objects with the id in the payload
    RequestById = 0x26,
    /// Blocks with the id in the payload
    RequestBlocksById = 0x27,
    /// Arrows with the id in the payload
    RequestArrowsById = 0x28,
    /// Info header; announces the detection frames that follow
    ReturnInfo = 0x29,
    /// One block detection
    ReturnBlock = 0x2A,
    /// One arrow detection
    ReturnArrow = 0x2B,
    /// Liveness probe
    RequestKnock = 0x2C,
    /// Switch algorithm; payload is the LE u16 selector
    RequestAlgorithm = 0x2D,
    /// Acknowledgement
    ReturnOk = 0x2E,
}

impl Command {
    /// Every known command, in wire order
    pub const ALL: [Command; 15] = [
        Command::Request,
        Command::RequestBlocks,
        Command::RequestArrows,
        Command::RequestLearned,
        Command::RequestBlocksLearned,
        Command::RequestArrowsLearned,
        Command::RequestById,
        Command::RequestBlocksById,
        Command::RequestArrowsById,
        Command::ReturnInfo,
        Command::ReturnBlock,
        Command::ReturnArrow,
        Command::RequestKnock,
        Command::RequestAlgorithm,
        Command::ReturnOk,
    ];

    /// Wire byte
    pub fn code(self) -> u8 {
        self as u8
    }

    /// True for commands only the sensor sends.
    pub fn is_response(self) -> bool {
        matches!(
            self,
            Command::ReturnInfo | Command::ReturnBlock | Command::ReturnArrow | Command::ReturnOk
        )
    }
}

impl TryFrom<u8> for Command {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        let cmd = match code {
            0x20 => Command::Request,
            0x21 => Command::RequestBlocks,
            0x22 => Command::RequestArrows,
            0x23 => Command::RequestLearned,
            0x24 => Command::RequestBlocksLearned,
            0x25 => Command::RequestArrowsLearned,
            0x26 => Command::RequestById,
            0x27 => Command::RequestBlocksById,
            0x28 => Command::RequestArrowsById,
            0x29 => Command::ReturnInfo,
            0x2A => Command::ReturnBlock,
            0x2B => Command::ReturnArrow,
            0x2C => Command::RequestKnock,
            0x2D => Command::RequestAlgorithm,
            0x2E => Command::ReturnOk,
            other => return Err(Error::UnknownCommand(other)),
        };
        Ok(cmd)
    }
}

impl From<Command> for u8 {
    fn from(cmd: Command) -> u8 {
        cmd.code()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:#04x})", self, self.code())
    }
}
