// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Call state, capability and video state codes, and their labels.
//!
//! The codec never interprets these values; labels exist for diagnostics only.

use std::borrow::Cow;

/// Connection is being set up and is not yet usable.
pub const STATE_INITIALIZING: i32 = 0;
/// Connection is new and not connected.
pub const STATE_NEW: i32 = 1;
/// Incoming connection is ringing.
pub const STATE_RINGING: i32 = 2;
/// Outgoing connection is dialing.
pub const STATE_DIALING: i32 = 3;
/// Connection is connected and audio is flowing.
pub const STATE_ACTIVE: i32 = 4;
/// Connection is on hold.
pub const STATE_HOLDING: i32 = 5;
/// Connection has ended.
pub const STATE_DISCONNECTED: i32 = 6;

/// Conference can be put on hold.
pub const CAPABILITY_HOLD: i32 = 0x0000_0001;
/// Conference supports hold, though it may not be holdable right now.
pub const CAPABILITY_SUPPORT_HOLD: i32 = 0x0000_0002;
/// Other calls can be merged into the conference.
pub const CAPABILITY_MERGE_CONFERENCE: i32 = 0x0000_0004;
/// Conference participants can be swapped.
pub const CAPABILITY_SWAP_CONFERENCE: i32 = 0x0000_0008;
/// Incoming calls can be answered with a text message.
pub const CAPABILITY_RESPOND_VIA_TEXT: i32 = 0x0000_0020;
/// Conference audio can be muted.
pub const CAPABILITY_MUTE: i32 = 0x0000_0040;
/// Individual participants can be managed.
pub const CAPABILITY_MANAGE_CONFERENCE: i32 = 0x0000_0080;
/// Local device can receive video.
pub const CAPABILITY_SUPPORTS_VT_LOCAL_RX: i32 = 0x0000_0100;
/// Local device can transmit video.
pub const CAPABILITY_SUPPORTS_VT_LOCAL_TX: i32 = 0x0000_0200;
/// Remote party can receive video.
pub const CAPABILITY_SUPPORTS_VT_REMOTE_RX: i32 = 0x0000_0400;
/// Remote party can transmit video.
pub const CAPABILITY_SUPPORTS_VT_REMOTE_TX: i32 = 0x0000_0800;
/// A participant can be split out into its own call.
pub const CAPABILITY_SEPARATE_FROM_CONFERENCE: i32 = 0x0000_1000;
/// A participant can be disconnected from the conference.
pub const CAPABILITY_DISCONNECT_FROM_CONFERENCE: i32 = 0x0000_2000;
/// Conference is hosted by the network rather than the device.
pub const CAPABILITY_GENERIC_CONFERENCE: i32 = 0x0000_4000;
/// Audio is high definition.
pub const CAPABILITY_HIGH_DEF_AUDIO: i32 = 0x0000_8000;
/// Call is carried over Wi-Fi.
pub const CAPABILITY_WIFI: i32 = 0x0001_0000;

/// Audio only, no video.
pub const VIDEO_STATE_AUDIO_ONLY: i32 = 0x0;
/// Video transmission enabled.
pub const VIDEO_STATE_TX_ENABLED: i32 = 0x1;
/// Video reception enabled.
pub const VIDEO_STATE_RX_ENABLED: i32 = 0x2;
/// Video in both directions.
pub const VIDEO_STATE_BIDIRECTIONAL: i32 = VIDEO_STATE_TX_ENABLED | VIDEO_STATE_RX_ENABLED;
/// Video paused.
pub const VIDEO_STATE_PAUSED: i32 = 0x4;

/// Capability flags in ascending bit order, with their label names.
const CAPABILITY_NAMES: &[(i32, &str)] = &[
    (CAPABILITY_HOLD, "CAPABILITY_HOLD"),
    (CAPABILITY_SUPPORT_HOLD, "CAPABILITY_SUPPORT_HOLD"),
    (CAPABILITY_MERGE_CONFERENCE, "CAPABILITY_MERGE_CONFERENCE"),
    (CAPABILITY_SWAP_CONFERENCE, "CAPABILITY_SWAP_CONFERENCE"),
    (CAPABILITY_RESPOND_VIA_TEXT, "CAPABILITY_RESPOND_VIA_TEXT"),
    (CAPABILITY_MUTE, "CAPABILITY_MUTE"),
    (CAPABILITY_MANAGE_CONFERENCE, "CAPABILITY_MANAGE_CONFERENCE"),
    (CAPABILITY_SUPPORTS_VT_LOCAL_RX, "CAPABILITY_SUPPORTS_VT_LOCAL_RX"),
    (CAPABILITY_SUPPORTS_VT_LOCAL_TX, "CAPABILITY_SUPPORTS_VT_LOCAL_TX"),
    (CAPABILITY_SUPPORTS_VT_REMOTE_RX, "CAPABILITY_SUPPORTS_VT_REMOTE_RX"),
    (CAPABILITY_SUPPORTS_VT_REMOTE_TX, "CAPABILITY_SUPPORTS_VT_REMOTE_TX"),
    (CAPABILITY_SEPARATE_FROM_CONFERENCE, "CAPABILITY_SEPARATE_FROM_CONFERENCE"),
    (CAPABILITY_DISCONNECT_FROM_CONFERENCE, "CAPABILITY_DISCONNECT_FROM_CONFERENCE"),
    (CAPABILITY_GENERIC_CONFERENCE, "CAPABILITY_GENERIC_CONFERENCE"),
    (CAPABILITY_HIGH_DEF_AUDIO, "CAPABILITY_HIGH_DEF_AUDIO"),
    (CAPABILITY_WIFI, "CAPABILITY_WIFI"),
];

/// Check whether `capabilities` has every bit of `capability` set.
#[inline]
pub fn can(capabilities: i32, capability: i32) -> bool {
    capabilities & capability == capability
}

/// Label mappings used when describing a record.
///
/// Supplied by the caller so diagnostics can follow whatever vocabulary the
/// surrounding telecom stack uses.
pub trait Labels {
    /// Label for a call state code.
    fn state_label(&self, state: i32) -> Cow<'static, str>;

    /// Label for a capability bitmask.
    fn capabilities_label(&self, capabilities: i32) -> String;
}

/// The standard telecom vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct TelecomLabels;

impl Labels for TelecomLabels {
    fn state_label(&self, state: i32) -> Cow<'static, str> {
        match state {
            STATE_INITIALIZING => Cow::Borrowed("INITIALIZING"),
            STATE_NEW => Cow::Borrowed("NEW"),
            STATE_RINGING => Cow::Borrowed("RINGING"),
            STATE_DIALING => Cow::Borrowed("DIALING"),
            STATE_ACTIVE => Cow::Borrowed("ACTIVE"),
            STATE_HOLDING => Cow::Borrowed("HOLDING"),
            STATE_DISCONNECTED => Cow::Borrowed("DISCONNECTED"),
            other => {
                tracing::debug!(state = other, "no label for call state");
                Cow::Owned(format!("Unknown state {other}"))
            }
        }
    }

    fn capabilities_label(&self, capabilities: i32) -> String {
        let mut label = String::from("[Capabilities:");
        for (flag, name) in CAPABILITY_NAMES {
            if can(capabilities, *flag) {
                label.push(' ');
                label.push_str(name);
            }
        }
        label.push(']');
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_labels() {
        let labels = TelecomLabels;
        assert_eq!(labels.state_label(STATE_INITIALIZING), "INITIALIZING");
        assert_eq!(labels.state_label(STATE_NEW), "NEW");
        assert_eq!(labels.state_label(STATE_ACTIVE), "ACTIVE");
        assert_eq!(labels.state_label(STATE_DISCONNECTED), "DISCONNECTED");
    }

    #[test]
    fn test_unknown_state_label() {
        assert_eq!(TelecomLabels.state_label(42), "Unknown state 42");
        assert_eq!(TelecomLabels.state_label(-1), "Unknown state -1");
    }

    #[test]
    fn test_capabilities_label_hold_mute() {
        assert_eq!(
            TelecomLabels.capabilities_label(0x41),
            "[Capabilities: CAPABILITY_HOLD CAPABILITY_MUTE]"
        );
    }

    #[test]
    fn test_capabilities_label_empty() {
        assert_eq!(TelecomLabels.capabilities_label(0), "[Capabilities:]");
    }

    #[test]
    fn test_capabilities_label_ignores_unnamed_bits() {
        assert_eq!(
            TelecomLabels.capabilities_label(0x10 | CAPABILITY_WIFI),
            "[Capabilities: CAPABILITY_WIFI]"
        );
    }

    #[test]
    fn test_can() {
        let caps = CAPABILITY_HOLD | CAPABILITY_SUPPORT_HOLD;
        assert!(can(caps, CAPABILITY_HOLD));
        assert!(can(caps, CAPABILITY_HOLD | CAPABILITY_SUPPORT_HOLD));
        assert!(!can(caps, CAPABILITY_MUTE));
    }

    #[test]
    fn test_video_state_bidirectional() {
        assert_eq!(VIDEO_STATE_BIDIRECTIONAL, 3);
    }
}
