//! Raw flow-monitor output.
//!
//! Records are produced by the simulator's flow monitor after the run and are
//! read-only here.

use std::fmt;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use nr_core::FlowId;

/// IP protocol number of a flow, with names for the two the monitor sees.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum Protocol {
    Tcp,
    Udp,
    Other(u8),
}

impl Protocol {
    pub fn number(self) -> u8 {
        match self {
            Protocol::Tcp      => 6,
            Protocol::Udp      => 17,
            Protocol::Other(n) => n,
        }
    }
}

impl From<u8> for Protocol {
    fn from(n: u8) -> Self {
        match n {
            6  => Protocol::Tcp,
            17 => Protocol::Udp,
            n  => Protocol::Other(n),
        }
    }
}

impl From<Protocol> for u8 {
    fn from(p: Protocol) -> u8 {
        p.number()
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Tcp      => f.write_str("TCP"),
            Protocol::Udp      => f.write_str("UDP"),
            Protocol::Other(n) => write!(f, "proto-{n}"),
        }
    }
}

/// Source/destination address and port plus protocol.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct FiveTuple {
    pub src_addr: IpAddr,
    pub src_port: u16,
    pub dst_addr: IpAddr,
    pub dst_port: u16,
    pub protocol: Protocol,
}

impl fmt::Display for FiveTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} -> {}:{}",
            self.src_addr, self.src_port, self.dst_addr, self.dst_port
        )
    }
}

/// Counters for one observed flow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawFlowRecord {
    pub flow:           FlowId,
    pub tuple:          FiveTuple,
    pub tx_packets:     u64,
    pub tx_bytes:       u64,
    pub rx_packets:     u64,
    pub rx_bytes:       u64,
    /// Sum of one-way delays of all received packets, seconds.
    pub delay_sum_secs: f64,
}
