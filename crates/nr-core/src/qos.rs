//! EPS bearer QoS classes.
//!
//! The names follow the 3GPP QCI table as exposed by the NR simulator's
//! bearer API.  Only the class tag travels through this workspace; scheduling
//! behaviour attached to each class belongs to the simulator.

use serde::{Deserialize, Serialize};

/// QoS class tag attached to a dedicated bearer.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum QosClass {
    /// Conversational voice (QCI 1).
    GbrConvVoice,
    /// Conversational video (QCI 2).
    GbrConvVideo,
    /// Real-time gaming (QCI 3).
    GbrGaming,
    /// Buffered video / TCP default (QCI 9).
    NgbrVideoTcpDefault,
    /// Low-latency eMBB (QCI 80).
    NgbrLowLatEmbb,
}

impl QosClass {
    /// The numeric QoS class identifier.
    pub fn qci(self) -> u8 {
        match self {
            QosClass::GbrConvVoice        => 1,
            QosClass::GbrConvVideo        => 2,
            QosClass::GbrGaming           => 3,
            QosClass::NgbrVideoTcpDefault => 9,
            QosClass::NgbrLowLatEmbb      => 80,
        }
    }

    /// `true` for guaranteed-bit-rate classes.
    #[inline]
    pub fn is_gbr(self) -> bool {
        matches!(
            self,
            QosClass::GbrConvVoice | QosClass::GbrConvVideo | QosClass::GbrGaming
        )
    }

    /// The label the simulator's BWP manager uses as an attribute key.
    pub fn as_str(self) -> &'static str {
        match self {
            QosClass::GbrConvVoice        => "GBR_CONV_VOICE",
            QosClass::GbrConvVideo        => "GBR_CONV_VIDEO",
            QosClass::GbrGaming           => "GBR_GAMING",
            QosClass::NgbrVideoTcpDefault => "NGBR_VIDEO_TCP_DEFAULT",
            QosClass::NgbrLowLatEmbb      => "NGBR_LOW_LAT_EMBB",
        }
    }
}

impl std::fmt::Display for QosClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
