//! Dedicated bearers and their traffic flow templates.
//!
//! Downlink packets are classified onto a bearer by local port, so no two
//! active TFTs may match the same port.

use serde::{Deserialize, Serialize};

use nr_core::{BwpId, QosClass};

use crate::config::TrafficClassConfig;
use crate::{PlanError, PlanResult};

/// Inclusive local-port range a TFT packet filter matches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PortRange {
    pub start: u16,
    pub end:   u16,
}

impl PortRange {
    /// A range matching exactly one port.
    #[inline]
    pub fn single(port: u16) -> Self {
        Self { start: port, end: port }
    }

    #[inline]
    pub fn contains(&self, port: u16) -> bool {
        (self.start..=self.end).contains(&port)
    }

    #[inline]
    pub fn overlaps(&self, other: &PortRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// One downlink bearer + TFT, shared by every terminal of its class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BearerTft {
    pub class: String,
    pub qos:   QosClass,
    pub ports: PortRange,
    /// Bandwidth part the BWP manager steers this class onto.
    pub bwp:   BwpId,
}

/// Build one bearer per traffic class, all steered onto `bwp`.
///
/// Fails with [`PlanError::DuplicatePort`] if two classes' port ranges
/// overlap.
pub fn build_bearers(classes: &[TrafficClassConfig], bwp: BwpId) -> PlanResult<Vec<BearerTft>> {
    let mut bearers: Vec<BearerTft> = Vec::with_capacity(classes.len());

    for class in classes {
        let ports = PortRange::single(class.port);
        if let Some(clash) = bearers.iter().find(|b| b.ports.overlaps(&ports)) {
            return Err(PlanError::DuplicatePort {
                port:   class.port,
                first:  clash.class.clone(),
                second: class.name.clone(),
            });
        }
        bearers.push(BearerTft {
            class: class.name.clone(),
            qos:   class.qos,
            ports,
            bwp,
        });
    }

    Ok(bearers)
}
