//! Downlink UDP traffic source parameters.

use serde::{Deserialize, Serialize};

/// Constant-bit-rate UDP client settings shared by every terminal.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UdpTraffic {
    /// Payload size per packet, bytes.
    pub packet_size_bytes: u32,
    /// Rate parameter; the inter-packet interval is `5000 / lambda` seconds.
    pub lambda: u32,
}

impl Default for UdpTraffic {
    fn default() -> Self {
        Self { packet_size_bytes: 512, lambda: 10_000 }
    }
}

impl UdpTraffic {
    /// Inter-packet interval in seconds.
    ///
    /// The numerator 5000 is a fixed constant of the reference scenarios and
    /// is reproduced as-is.
    #[inline]
    pub fn interval_secs(&self) -> f64 {
        5_000.0 / self.lambda as f64
    }

    /// Offered load per terminal, Mbps.
    pub fn offered_rate_mbps(&self) -> f64 {
        self.packet_size_bytes as f64 * 8.0 / self.interval_secs() / 1e6
    }
}
